/// A possible error value when parsing URI reference.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum UriError {
    /// Text before the scheme delimiter `:` is not a valid scheme.
    InvalidScheme,
    /// Text before `@` in the authority contains an invalid character or a malformed
    /// percent-encoding.
    InvalidUserInfo,
    /// Port contains a non-digit character or is larger than 65535.
    InvalidPort,
}

// ===== Error =====

macro_rules! gen_error {
    ($($variant:pat => $msg:literal),* $(,)?) => {
        impl UriError {
            /// Returns the error message.
            pub const fn as_str(&self) -> &'static str {
                use UriError::*;
                match self {
                    $($variant => $msg,)*
                }
            }
        }

        impl std::fmt::Display for UriError {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

gen_error! {
    InvalidScheme => "invalid uri scheme",
    InvalidUserInfo => "invalid uri userinfo",
    InvalidPort => "invalid uri port",
}

impl std::error::Error for UriError { }

impl std::fmt::Debug for UriError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "\"{self}\"")
    }
}
