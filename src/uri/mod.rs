//! Uniform Resource Identifier reference ([RFC3986])
//!
//! [RFC3986]: <https://datatracker.ietf.org/doc/html/rfc3986>
//!
//! # Generic Syntax
//!
//! [`Uri`] represents a parsed, scheme independent URI reference. Parsing runs as a single
//! forward pass of stages, each consuming a prefix or suffix of the remaining input:
//!
//! 1. [`scheme`], optional `scheme:` prefix,
//! 2. [`authority`], optional `//authority` span, split into userinfo, host and port,
//! 3. [`path`], optional `#fragment` and `?query` suffixes, then the path segments.
//!
//! # Percent Encoding
//!
//! Only userinfo is percent-decoded. Host, path, query and fragment are returned as written.
use bytes::Bytes;

use crate::common::ByteStr;

pub mod scheme;
pub mod authority;
pub mod path;
mod parser;
mod impls;
mod error;

pub use error::UriError;
pub use parser::UriParser;

/// URI reference ([RFC3986]).
///
/// [RFC3986]: <https://datatracker.ietf.org/doc/html/rfc3986>
///
/// # Syntax Component
///
/// The following are two example URIs and their component parts:
///
/// ```not_rust
///   foo://example.com:8042/over/there?name=ferret#nose
///   \_/   \______________/\_________/ \_________/ \__/
///    |           |            |            |        |
/// scheme     authority       path        query   fragment
///    |   _____________________|__
///   / \ /                        \
///   urn:example:animal:ferret:nose
/// ```
///
/// All components except the decoded userinfo share the input buffer, cloning is cheap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Uri {
    /// the whole input
    value: ByteStr,
    scheme: Option<ByteStr>,
    authority: Option<ByteStr>,
    /// percent-decoded
    userinfo: Option<Bytes>,
    host: ByteStr,
    port: Option<u16>,
    /// empty is no path, a leading empty segment is an absolute path
    path: Vec<ByteStr>,
    query: Option<ByteStr>,
    fragment: Option<ByteStr>,
}

#[cfg(test)]
mod test;
