//! Authority stage.
//!
//! ```not_rust
//! authority   = [ userinfo "@" ] host [ ":" port ]
//! userinfo    = *( unreserved / pct-encoded / sub-delims / ":" )
//! port        = *DIGIT
//! ```
use bytes::{BufMut, Bytes, BytesMut};

use super::UriError;
use crate::matches;

/// Strip an optional `//authority` span.
///
/// The span starts after the first `//`, unless a `/` comes before it, and ends before the
/// first following `/`, `?` or `#`, or at the end of input. Text before the `//` is dropped.
/// Returns the span and the offset where the rest of the reference starts, which is the
/// delimiter itself.
///
/// # Examples
///
/// ```
/// use uriref::uri::authority::parse_authority;
///
/// assert_eq!(parse_authority("//example.com/foo"), (Some("example.com"), 13));
/// assert_eq!(parse_authority("//example.com"), (Some("example.com"), 13));
/// assert_eq!(parse_authority("foo//bar"), (Some("bar"), 8));
/// assert_eq!(parse_authority("/foo//bar"), (None, 0));
/// ```
pub fn parse_authority(input: &str) -> (Option<&str>, usize) {
    let Some(start) = input.find("//") else {
        return (None, 0);
    };
    // `//` must come before any path segment
    if input.find('/').is_some_and(|slash| slash < start) {
        return (None, 0);
    }

    let start = start + 2;
    let end = input[start..]
        .find(['/', '?', '#'])
        .map_or(input.len(), |end| start + end);
    (Some(&input[start..end]), end)
}

/// Authority split into its components.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Components<'a> {
    /// Percent-decoded userinfo, `None` if there is no `@`.
    pub userinfo: Option<Bytes>,
    /// Host as written, may be empty.
    pub host: &'a str,
    /// `None` if there is no `:` after the userinfo.
    pub port: Option<u16>,
}

/// Split authority into userinfo, host and port.
///
/// # Errors
///
/// Returns [`UriError::InvalidUserInfo`] if the text before the first `@` is not a valid
/// userinfo, or [`UriError::InvalidPort`] if the text after the host `:` is not a number in
/// `0..=65535`.
///
/// # Examples
///
/// ```
/// use uriref::uri::authority::parse_components;
///
/// let auth = parse_components("matt:pass@example.com:8080").unwrap();
/// assert_eq!(auth.userinfo.as_deref(), Some(&b"matt:pass"[..]));
/// assert_eq!(auth.host, "example.com");
/// assert_eq!(auth.port, Some(8080));
/// ```
pub fn parse_components(authority: &str) -> Result<Components<'_>, UriError> {
    let (userinfo, rest) = match authority.split_once('@') {
        Some((userinfo, rest)) => (Some(percent_decode(userinfo)?), rest),
        None => (None, authority),
    };

    let (host, port) = match rest.split_once(':') {
        Some((host, port)) => (host, Some(parse_port(port.as_bytes())?)),
        None => (rest, None),
    };

    Ok(Components { userinfo, host, port })
}

/// Validate and percent-decode userinfo.
///
/// Every `%XX` escape is replaced by the octet it encodes, the result may not be valid UTF-8.
///
/// # Errors
///
/// Returns [`UriError::InvalidUserInfo`] on a character outside the userinfo grammar, or a `%`
/// not followed by two hex digits.
///
/// # Examples
///
/// ```
/// use uriref::uri::authority::percent_decode;
///
/// assert_eq!(percent_decode("%41b").unwrap(), &b"Ab"[..]);
/// assert!(percent_decode("%X").is_err());
/// assert!(percent_decode("{").is_err());
/// ```
pub fn percent_decode(userinfo: &str) -> Result<Bytes, UriError> {
    let mut bytes = userinfo.as_bytes();
    let mut decoded = BytesMut::with_capacity(bytes.len());

    while let [byte, rest @ ..] = bytes {
        if *byte == b'%' {
            let Some(octet) = matches::pct_decoded(rest) else {
                return Err(UriError::InvalidUserInfo);
            };
            decoded.put_u8(octet);
            bytes = &rest[2..];
        } else if matches::is_userinfo(*byte) {
            decoded.put_u8(*byte);
            bytes = rest;
        } else {
            return Err(UriError::InvalidUserInfo);
        }
    }

    Ok(decoded.freeze())
}

/// Empty port is `0`.
const fn parse_port(mut bytes: &[u8]) -> Result<u16, UriError> {
    let mut port = 0u32;
    while let [byte, rest @ ..] = bytes {
        if !byte.is_ascii_digit() {
            return Err(UriError::InvalidPort);
        }
        port = port * 10 + (*byte - b'0') as u32;
        if port > u16::MAX as u32 {
            return Err(UriError::InvalidPort);
        }
        bytes = rest;
    }
    Ok(port as u16)
}
