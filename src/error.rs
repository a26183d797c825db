//! Error types for the locale subsystem.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum LocaleError {
    /// `set_active` was asked for a code the catalog does not know.
    #[error("unknown locale code '{0}'")]
    InvalidLocale(String),

    /// A consumer reached for the service through a handle nobody configured.
    #[error("locale service was never initialized")]
    NotInitialized,

    #[error("locale '{0}' is declared more than once")]
    DuplicateLocale(String),

    #[error("default locale '{0}' is not in the catalog")]
    UnknownDefault(String),

    /// The default table is the fallback of last resort, so it has to be complete.
    #[error("default locale '{code}' is missing keys: {missing}")]
    IncompleteDefault { code: String, missing: String },
}
