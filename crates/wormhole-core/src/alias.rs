use crate::error::ShortenerError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The short key a caller uses to reach a stored URL.
///
/// Caller-chosen aliases must be 1-32 characters long and contain only
/// alphanumeric characters, hyphens, or underscores, so they always fit in a
/// single path segment.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Alias(String);

const MIN_LENGTH: usize = 1;
const MAX_LENGTH: usize = 32;

impl Alias {
    /// Creates a new `Alias` after validating the input.
    ///
    /// Valid aliases are 1-32 characters and contain only `[a-zA-Z0-9_-]`.
    pub fn new(alias: impl Into<String>) -> std::result::Result<Self, ShortenerError> {
        let alias = alias.into();
        Self::validate(&alias)?;
        Ok(Self(alias))
    }

    /// Creates an `Alias` used only as a lookup key.
    ///
    /// Lookups accept any non-empty string: an alias that could never have
    /// been stored simply isn't found.
    pub fn lookup(alias: impl Into<String>) -> std::result::Result<Self, ShortenerError> {
        let alias = alias.into();
        if alias.is_empty() {
            return Err(ShortenerError::InvalidAlias("alias is empty".to_string()));
        }
        Ok(Self(alias))
    }

    /// Creates an `Alias` without validation.
    ///
    /// Use this only for aliases produced by trusted internal sources
    /// (e.g. generators that are guaranteed to produce valid output).
    pub fn new_unchecked(alias: impl Into<String>) -> Self {
        Self(alias.into())
    }

    /// Returns the alias as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    fn validate(alias: &str) -> std::result::Result<(), ShortenerError> {
        if alias.len() < MIN_LENGTH || alias.len() > MAX_LENGTH {
            return Err(ShortenerError::InvalidAlias(format!(
                "length must be between {} and {}, got {}",
                MIN_LENGTH,
                MAX_LENGTH,
                alias.len()
            )));
        }

        if !alias
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ShortenerError::InvalidAlias(format!(
                "must contain only alphanumeric characters, hyphens, or underscores: '{}'",
                alias
            )));
        }

        Ok(())
    }
}

impl Display for Alias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Alias {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_aliases() {
        assert!(Alias::new("x").is_ok());
        assert!(Alias::new("Abc-123_xyz").is_ok());
        assert!(Alias::new("a".repeat(32)).is_ok());
    }

    #[test]
    fn empty_is_rejected() {
        assert!(Alias::new("").is_err());
        assert!(Alias::lookup("").is_err());
    }

    #[test]
    fn too_long() {
        assert!(Alias::new("a".repeat(33)).is_err());
    }

    #[test]
    fn path_unsafe_characters() {
        assert!(Alias::new("abc def").is_err());
        assert!(Alias::new("abc/def").is_err());
        assert!(Alias::new("abc?def").is_err());
        assert!(Alias::new("héllo").is_err());
    }

    #[test]
    fn lookup_only_requires_non_empty() {
        let alias = Alias::lookup("abc/def").unwrap();
        assert_eq!(alias.as_str(), "abc/def");
    }

    #[test]
    fn display_is_the_raw_alias() {
        let alias = Alias::new("abc123").unwrap();
        assert_eq!(alias.to_string(), "abc123");
        assert_eq!(alias.into_inner(), "abc123");
    }
}
