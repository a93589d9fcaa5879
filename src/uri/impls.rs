use super::{Uri, UriError};
use crate::common::ByteStr;

impl Uri {
    /// Create empty [`Uri`], every component is empty or absent.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the scheme, e.g: `http`.
    ///
    /// Case is preserved.
    #[inline]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Returns the raw authority, e.g: `user@example.com:8080`.
    ///
    /// Returns [`None`] if there is no `//`, and empty string for `///path`.
    #[inline]
    pub fn authority(&self) -> Option<&str> {
        self.authority.as_deref()
    }

    /// Returns the percent-decoded userinfo.
    #[inline]
    pub fn userinfo(&self) -> Option<&[u8]> {
        self.userinfo.as_deref()
    }

    /// Returns the percent-decoded userinfo as `str`.
    ///
    /// Returns [`None`] if there is no userinfo, or if it does not decode into valid UTF-8.
    #[inline]
    pub fn userinfo_str(&self) -> Option<&str> {
        self.userinfo().and_then(|e| std::str::from_utf8(e).ok())
    }

    /// Returns the host, empty if there is no authority.
    #[inline]
    pub fn host(&self) -> &str {
        self.host.as_str()
    }

    /// Returns `true` if the authority has a `:` port delimiter.
    #[inline]
    pub fn has_port(&self) -> bool {
        self.port.is_some()
    }

    /// Returns the port, `0` when the delimiter is followed by nothing.
    #[inline]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns the path segments.
    ///
    /// If the first segment is empty, the path is absolute.
    #[inline]
    pub fn path(&self) -> &[ByteStr] {
        &self.path
    }

    /// Returns an iterator over path segments as `str`.
    #[inline]
    pub fn path_segments(&self) -> impl ExactSizeIterator<Item = &str> {
        self.path.iter().map(ByteStr::as_str)
    }

    /// Returns the query, e.g: `name=joe&query=4`.
    #[inline]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Returns the fragment, e.g: `section-1`.
    #[inline]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Returns `true` if there is no scheme.
    #[inline]
    pub fn is_relative_reference(&self) -> bool {
        self.scheme.as_ref().is_none_or(|e| e.is_empty())
    }

    /// Returns `true` if the path is empty or does not start with `/`.
    #[inline]
    pub fn contains_relative_path(&self) -> bool {
        self.path.first().is_none_or(|e| !e.is_empty())
    }

    /// Returns the whole input.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }
}

impl std::str::FromStr for Uri {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Uri {
    type Error = UriError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Uri {
    type Error = UriError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_from(value)
    }
}

impl AsRef<str> for Uri {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
