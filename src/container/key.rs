//! Validation of entry keys and alias names

use crate::error::Error;

/// Checks that `key` may be used as an entry key
#[inline]
pub(crate) fn validate_key(key: &str) -> Result<(), Error> {
    if is_valid(key) {
        Ok(())
    } else {
        Err(Error::InvalidKey(key.into()))
    }
}

/// Checks that `alias` may be used as an alias name
#[inline]
pub(crate) fn validate_alias(alias: &str) -> Result<(), Error> {
    if is_valid(alias) {
        Ok(())
    } else {
        Err(Error::InvalidAlias(alias.into()))
    }
}

#[inline]
fn is_valid(key: &str) -> bool {
    !key.is_empty() && !is_numeric(key)
}

/// Returns `true` if the whole string is a base-10 integer or floating-point literal,
/// optionally signed.
///
/// Accepted forms are `12`, `-3`, `1.5`, `.5`, `5.` and any of those followed by an
/// exponent such as `1e10` or `2.5E-3`. Surrounding whitespace, `inf`, `NaN`
/// and hexadecimal literals are not numbers.
///
/// # Example
/// ```
/// use keybox::is_numeric;
///
/// assert!(is_numeric("1.5"));
/// assert!(!is_numeric("alpha"));
/// ```
pub fn is_numeric(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        frac_digits = count_digits(&bytes[pos..]);
        pos += frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_digits = count_digits(&bytes[pos..]);
        if exp_digits == 0 {
            return false;
        }
        pos += exp_digits;
    }

    pos == bytes.len()
}

#[inline]
fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter()
        .take_while(|b| b.is_ascii_digit())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_detects_integers() {
        for s in ["0", "123456", "-1", "+42", "007"] {
            assert!(is_numeric(s), "{s}");
        }
    }

    #[test]
    fn it_detects_floats() {
        for s in ["1.5", "-0.25", ".5", "5.", "1e10", "2.5E-3", "+1e+2"] {
            assert!(is_numeric(s), "{s}");
        }
    }

    #[test]
    fn it_rejects_non_numbers() {
        for s in ["", "alpha", "1a", "a1", ".", "-", "+.", "1e", "1e+", " 1", "1 ", "inf", "NaN", "0x1F", "1.2.3", "--1"] {
            assert!(!is_numeric(s), "{s:?}");
        }
    }

    #[test]
    fn it_validates_keys() {
        assert!(validate_key("alpha").is_ok());
        assert!(validate_key("App\\Service").is_ok());
        assert_eq!(validate_key("1.5"), Err(Error::InvalidKey("1.5".into())));
        assert_eq!(validate_key(""), Err(Error::InvalidKey(String::new())));
    }

    #[test]
    fn it_validates_aliases() {
        assert!(validate_alias("gamma").is_ok());
        assert_eq!(validate_alias("0"), Err(Error::InvalidAlias("0".into())));
    }
}
