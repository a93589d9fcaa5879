//! Fragment, query and path stage.

/// Strip an optional `#fragment`, then an optional `?query`.
///
/// Fragment is removed first, a `?` after `#` is part of the fragment. Returns the remaining
/// path, query and fragment.
///
/// # Examples
///
/// ```
/// use uriref::uri::path::split_fragment_query;
///
/// assert_eq!(split_fragment_query("/foo?bar#frag"), ("/foo", Some("bar"), Some("frag")));
/// assert_eq!(split_fragment_query("/foo#frag?bar"), ("/foo", None, Some("frag?bar")));
/// ```
pub fn split_fragment_query(input: &str) -> (&str, Option<&str>, Option<&str>) {
    let (rest, fragment) = match input.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (input, None),
    };
    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };
    (path, query, fragment)
}

/// Split path into segments.
///
/// Empty path returns no segment, which is distinct from a single empty segment. Leading empty
/// segment marks an absolute path, trailing empty segment marks a trailing slash.
///
/// # Examples
///
/// ```
/// use uriref::uri::path::split_segments;
///
/// assert!(split_segments("").is_empty());
/// assert_eq!(split_segments("/"), [""]);
/// assert_eq!(split_segments("/foo/"), ["", "foo", ""]);
/// ```
pub fn split_segments(path: &str) -> Vec<&str> {
    match path {
        "" => Vec::new(),
        "/" => vec![""],
        _ => path.split('/').collect(),
    }
}
