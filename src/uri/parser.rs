use super::{Uri, UriError, authority, path, scheme};
use crate::{
    common::ByteStr,
    log::{debug, trace},
};

impl Uri {
    /// Parse URI reference by copying from `str`.
    ///
    /// If the input is owned, consider using [`Uri::parse_from`].
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the input contains invalid scheme, userinfo or port.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uriref::Uri;
    /// let uri = Uri::parse("urn:book:fantasy:Hobbit").unwrap();
    /// assert_eq!(uri.scheme(), Some("urn"));
    /// assert_eq!(uri.host(), "");
    /// assert_eq!(uri.path(), ["book:fantasy:Hobbit"]);
    /// ```
    #[inline]
    pub fn parse(value: &str) -> Result<Self, UriError> {
        parse(ByteStr::copy_from_str(value))
    }

    /// Parse URI reference from shared string.
    ///
    /// No copy is made for [`String`] or `&'static str`.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the input contains invalid scheme, userinfo or port.
    #[inline]
    pub fn parse_from(value: impl Into<ByteStr>) -> Result<Self, UriError> {
        parse(value.into())
    }
}

/// Parse URI reference.
///
/// Each stage consume a prefix or suffix of the remaining input, there is no backtracking.
fn parse(value: ByteStr) -> Result<Uri, UriError> {
    let input = value.as_str();

    let (scheme, offset) = scheme::parse_scheme(input).inspect_err(|_err| {
        debug!("rejected uri reference {input:?}: {_err}");
    })?;
    let rest = &input[offset..];

    let (authority, offset) = authority::parse_authority(rest);
    let rest = &rest[offset..];

    let components = match authority {
        Some(authority) => authority::parse_components(authority).inspect_err(|_err| {
            debug!("rejected uri authority {authority:?}: {_err}");
        })?,
        None => authority::Components::default(),
    };

    let (rest, query, fragment) = path::split_fragment_query(rest);

    let path = path::split_segments(rest)
        .into_iter()
        .map(|segment| value.slice_ref(segment))
        .collect();

    trace!(
        "parsed uri reference {input:?}: scheme={scheme:?} authority={authority:?} \
        port={:?} query={query:?} fragment={fragment:?}",
        components.port,
    );

    Ok(Uri {
        scheme: scheme.map(|e| value.slice_ref(e)),
        authority: authority.map(|e| value.slice_ref(e)),
        userinfo: components.userinfo,
        host: value.slice_ref(components.host),
        port: components.port,
        path,
        query: query.map(|e| value.slice_ref(e)),
        fragment: fragment.map(|e| value.slice_ref(e)),
        value,
    })
}

/// Reusable URI reference parser.
///
/// Holds the last successfully parsed [`Uri`], accessible via [`Deref`][std::ops::Deref].
///
/// A failed [`parse_from_string`][UriParser::parse_from_string] leaves the previous value
/// untouched, the new value is only published once every component is parsed.
///
/// # Examples
///
/// ```
/// # use uriref::UriParser;
/// let mut parser = UriParser::new();
/// parser.parse_from_string("http://www.example.com:8080/foo/bar").unwrap();
/// assert_eq!(parser.port(), Some(8080));
///
/// parser.parse_from_string("/foo/bar").unwrap();
/// assert_eq!(parser.host(), "");
/// assert!(!parser.has_port());
///
/// assert!(parser.parse_from_string("http://www.example.com:spam/").is_err());
/// assert_eq!(parser.path(), ["", "foo", "bar"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct UriParser {
    uri: Uri,
}

impl UriParser {
    /// Create new parser holding an empty [`Uri`].
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `value` and replace the held [`Uri`] on success.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the input contains invalid scheme, userinfo or port, in which case the
    /// held [`Uri`] is unchanged.
    pub fn parse_from_string(&mut self, value: &str) -> Result<(), UriError> {
        self.uri = Uri::parse(value)?;
        Ok(())
    }

    /// Returns the last successfully parsed [`Uri`].
    #[inline]
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Consume the parser into the held [`Uri`].
    #[inline]
    pub fn into_uri(self) -> Uri {
        self.uri
    }
}

impl std::ops::Deref for UriParser {
    type Target = Uri;

    fn deref(&self) -> &Self::Target {
        &self.uri
    }
}
