//! Describes container errors

use std::fmt::{Display, Formatter};

/// A broad category of [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A key or an alias name is empty or looks like a number
    InvalidKey,
    /// An attempt to overwrite a lazy entry that has already been resolved
    AlreadyResolved,
    /// A lookup or an alias target refers to an unknown key
    NotFound,
    /// A name is already taken by another key or alias
    DuplicateKey,
    /// An attempt to remove an entry
    Immutable,
    /// A resolved value is not of the requested type
    TypeMismatch,
    /// A failure reported by a user-supplied callable
    Other,
}

/// Container error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The key is empty or numeric-looking
    InvalidKey(String),
    /// The alias name is empty or numeric-looking
    InvalidAlias(String),
    /// The key holds a lazy value that has already been resolved
    AlreadyResolved(String),
    /// No entry is registered under the key
    NotFound(String),
    /// The alias target is not registered
    AliasTargetNotFound(String),
    /// The alias name is already registered as a key or alias
    DuplicateKey(String),
    /// Entries can not be removed
    Immutable,
    /// The resolved value can not be downcast to the requested type
    TypeMismatch {
        /// Requested key
        key: String,
        /// Name of the requested type
        expected: &'static str,
    },
    /// Custom error raised by a resolver
    Other(String),
}

impl Error {
    /// Creates a custom error, typically returned from a resolver
    #[inline]
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Returns the category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidKey(_) | Error::InvalidAlias(_) => ErrorKind::InvalidKey,
            Error::AlreadyResolved(_) => ErrorKind::AlreadyResolved,
            Error::NotFound(_) | Error::AliasTargetNotFound(_) => ErrorKind::NotFound,
            Error::DuplicateKey(_) => ErrorKind::DuplicateKey,
            Error::Immutable => ErrorKind::Immutable,
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::Other(_) => ErrorKind::Other,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidKey(key) => write!(f, "Invalid key `{key}`"),
            Error::InvalidAlias(alias) => write!(f, "Invalid alias `{alias}`"),
            Error::AlreadyResolved(key) => write!(f, "Cannot overwrite key `{key}` because it has been resolved previously"),
            Error::NotFound(key) => write!(f, "No value found for key `{key}`"),
            Error::AliasTargetNotFound(key) => write!(f, "Cannot alias non-existing key `{key}`"),
            Error::DuplicateKey(alias) => write!(f, "Existing key `{alias}` cannot be used as alias"),
            Error::Immutable => f.write_str("Cannot unset keys on this container"),
            Error::TypeMismatch { key, expected } => write!(f, "Value for key `{key}` is not of type `{expected}`"),
            Error::Other(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};

    #[test]
    fn it_formats_messages_with_the_key() {
        assert_eq!(Error::InvalidKey("123456".into()).to_string(), "Invalid key `123456`");
        assert_eq!(Error::InvalidAlias("0".into()).to_string(), "Invalid alias `0`");
        assert_eq!(
            Error::AlreadyResolved("cb1".into()).to_string(),
            "Cannot overwrite key `cb1` because it has been resolved previously"
        );
        assert_eq!(Error::NotFound("notfound".into()).to_string(), "No value found for key `notfound`");
        assert_eq!(
            Error::AliasTargetNotFound("beta".into()).to_string(),
            "Cannot alias non-existing key `beta`"
        );
        assert_eq!(
            Error::DuplicateKey("alpha".into()).to_string(),
            "Existing key `alpha` cannot be used as alias"
        );
        assert_eq!(Error::Immutable.to_string(), "Cannot unset keys on this container");
    }

    #[test]
    fn it_formats_type_mismatch() {
        let err = Error::TypeMismatch { key: "alpha".into(), expected: "i32" };

        assert_eq!(err.to_string(), "Value for key `alpha` is not of type `i32`");
    }

    #[test]
    fn it_groups_variants_by_kind() {
        assert_eq!(Error::InvalidAlias("1".into()).kind(), ErrorKind::InvalidKey);
        assert_eq!(Error::AliasTargetNotFound("x".into()).kind(), ErrorKind::NotFound);
        assert_eq!(Error::DuplicateKey("x".into()).kind(), ErrorKind::DuplicateKey);
        assert_eq!(Error::other("boom").kind(), ErrorKind::Other);
    }

    #[test]
    fn it_passes_custom_message_through() {
        assert_eq!(Error::other("database is down").to_string(), "database is down");
    }
}
