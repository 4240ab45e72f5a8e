//! Error types for the platform-access crate.

use std::fmt;

/// Errors from session store operations.
///
/// The in-process store is infallible in practice; the variants exist
/// for external implementations of the [`crate::SessionStore`] contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store failed.
    Backend { details: String },
    /// The session payload could not be serialized or deserialized.
    Codec { details: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backend { details } => {
                write!(f, "session store backend error: {details}")
            }
            Self::Codec { details } => {
                write!(f, "session codec error: {details}")
            }
        }
    }
}

impl std::error::Error for StoreError {}
