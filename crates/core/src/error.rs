//! Errors raised while parsing core tags.

/// Errors from parsing user-facing keys into core types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// Purpose key not in the fixed set
    #[error("unknown purpose: {0}")]
    UnknownPurpose(String),

    /// Locale tag without a text bundle
    #[error("unknown locale: {0}")]
    UnknownLocale(String),
}
