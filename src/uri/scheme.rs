//! Scheme stage.
//!
//! ```not_rust
//! scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
//! ```
use super::UriError;
use crate::matches;

/// Strip an optional `scheme:` prefix.
///
/// Returns the scheme and the offset where the rest of the reference starts.
///
/// A `:` preceded by a `/` belongs to a path segment, e.g: `foo/bar:baz`, and the input is
/// returned as is.
///
/// # Errors
///
/// Returns [`UriError::InvalidScheme`] if the text before the first `:` is not a valid scheme.
///
/// # Examples
///
/// ```
/// use uriref::uri::scheme::parse_scheme;
///
/// assert_eq!(parse_scheme("urn:book:Hobbit"), Ok((Some("urn"), 4)));
/// assert_eq!(parse_scheme("foo/bar:baz"), Ok((None, 0)));
/// assert!(parse_scheme("0://example.com").is_err());
/// ```
pub fn parse_scheme(input: &str) -> Result<(Option<&str>, usize), UriError> {
    let Some(colon) = input.find(':') else {
        return Ok((None, 0));
    };

    if input.find('/').is_some_and(|slash| slash < colon) {
        return Ok((None, 0));
    }

    let scheme = &input[..colon];
    validate_scheme(scheme.as_bytes())?;

    Ok((Some(scheme), colon + 1))
}

const fn validate_scheme(bytes: &[u8]) -> Result<(), UriError> {
    let [lead, rest @ ..] = bytes else {
        return Err(UriError::InvalidScheme);
    };
    if !lead.is_ascii_alphabetic() {
        return Err(UriError::InvalidScheme);
    }
    let mut bytes = rest;
    while let [byte, rest @ ..] = bytes {
        if matches::is_scheme(*byte) {
            bytes = rest
        } else {
            return Err(UriError::InvalidScheme);
        }
    }
    Ok(())
}
