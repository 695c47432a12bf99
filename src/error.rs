//! Error types for hifz-access

use thiserror::Error;

use crate::table::PermissionKind;

/// Errors surfaced by the guard adapter and role parsing.
///
/// The boolean lookups never produce these; a denial there is just `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The claimed role may not open this page or perform this action.
    /// Unknown roles and missing claims land here too.
    #[error("access denied: {kind} '{name}'")]
    Denied { kind: PermissionKind, name: String },

    /// A role string outside the closed set.
    #[error("unknown role '{0}'")]
    UnknownRole(String),
}

/// Result type alias for hifz-access operations
pub type Result<T> = std::result::Result<T, AccessError>;
