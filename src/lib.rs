//! URI reference parser ([RFC3986])
//!
//! [RFC3986]: <https://datatracker.ietf.org/doc/html/rfc3986>
//!
//! Splits a URI reference into scheme, userinfo, host, port, path segments, query and fragment.
//!
//! ```
//! use uriref::Uri;
//!
//! let uri = Uri::parse("http://joe@www.example.com:8080/foo/bar?q=1#top").unwrap();
//! assert_eq!(uri.scheme(), Some("http"));
//! assert_eq!(uri.userinfo_str(), Some("joe"));
//! assert_eq!(uri.host(), "www.example.com");
//! assert_eq!(uri.port(), Some(8080));
//! assert_eq!(uri.path(), ["", "foo", "bar"]);
//! assert_eq!(uri.query(), Some("q=1"));
//! assert_eq!(uri.fragment(), Some("top"));
//! ```
#![warn(missing_debug_implementations)]

mod log;
mod matches;
mod common;

pub mod uri;

pub use common::ByteStr;
pub use uri::{Uri, UriError, UriParser};
