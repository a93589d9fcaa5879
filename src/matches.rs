//! RFC 3986 character classes.
macro_rules! byte_map {
    {
        $(#[$meta:meta])*
        $vis:vis const fn $fn_id:ident($byte:ident:$u8:ty) { $e:expr }
    } => {
        $(#[$meta])*
        $vis const fn $fn_id($byte: $u8) -> bool {
            static PAT: [bool; 256] = {
                let mut bytes = [false; 256];
                let mut $byte = 0u8;
                const fn filter($byte: $u8) -> bool {
                    $e
                }
                loop {
                    bytes[$byte as usize] = filter($byte);
                    if $byte == 255 {
                        break;
                    }
                    $byte += 1;
                }
                bytes
            };
            PAT[$byte as usize]
        }
    };
}

// ===== Blocks =====

byte_map! {
    /// unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"
    #[inline(always)]
    const fn unreserved(byte: u8) {
        byte.is_ascii_alphanumeric()
        || matches!(byte, b'-' | b'.' | b'_' | b'~')
    }
}

byte_map! {
    /// sub-delims = "!" / "$" / "&" / "'" / "(" / ")"
    ///            / "*" / "+" / "," / ";" / "="
    #[inline(always)]
    const fn sub_delims(byte: u8) {
        matches!(
            byte,
            b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
        )
    }
}

// ===== lookup table =====

byte_map! {
    /// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
    ///
    /// Matches the trailing characters only, the leading ALPHA is checked by the caller.
    #[inline(always)]
    pub const fn is_scheme(byte: u8) {
        byte.is_ascii_alphanumeric() || matches!(byte, b'+' | b'-' | b'.')
    }
}

byte_map! {
    /// userinfo = *( unreserved / pct-encoded / sub-delims / ":" )
    ///
    /// `pct-encoded` is not included, `%` must be followed by two hex digits.
    #[inline(always)]
    pub const fn is_userinfo(byte: u8) {
        unreserved(byte)
        || sub_delims(byte)
        || matches!(byte, b':')
    }
}

/// Returns the value of a single hex digit.
#[inline]
pub const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Decode `pct-encoded = "%" HEXDIG HEXDIG`, `bytes` starts after the `%`.
#[inline]
pub const fn pct_decoded(bytes: &[u8]) -> Option<u8> {
    match bytes {
        [hi, lo, ..] => match (hex_value(*hi), hex_value(*lo)) {
            (Some(hi), Some(lo)) => Some(hi << 4 | lo),
            _ => None,
        },
        _ => None,
    }
}

#[test]
fn test_classes() {
    assert!(is_scheme(b'a'));
    assert!(is_scheme(b'9'));
    assert!(is_scheme(b'+'));
    assert!(!is_scheme(b'@'));
    assert!(!is_scheme(b':'));

    for byte in b"aZ0-._~!$&'()*+,;=:" {
        assert!(is_userinfo(*byte), "{}", *byte as char);
    }
    for byte in b"%@/?#[]{} \x7f\x80" {
        assert!(!is_userinfo(*byte), "{}", *byte as char);
    }
}

#[test]
fn test_pct_decoded() {
    assert_eq!(pct_decoded(b"41"), Some(b'A'));
    assert_eq!(pct_decoded(b"7e"), Some(b'~'));
    assert_eq!(pct_decoded(b"fF"), Some(0xff));
    assert_eq!(pct_decoded(b"4"), None);
    assert_eq!(pct_decoded(b"X1"), None);
    assert_eq!(pct_decoded(b""), None);
}
