//! hifz-access - role-based page and action permissions
//!
//! Answers "may this role open page X / perform action Y" for the Quran
//! memorization program admin app. Both tables are static; every lookup is
//! a pure membership test that fails closed.
//!
//! ```
//! use hifz_access::{can_access_page, can_perform_action};
//!
//! assert!(can_access_page("superadmin", "settings"));
//! assert!(!can_perform_action("teacher", "student-delete"));
//! assert!(!can_access_page("guest", "dashboard"));
//! ```

pub mod constants;
pub mod error;
pub mod fingerprint;
pub mod guard;
pub mod role;
pub mod table;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;

pub use constants::{actions, pages};
pub use error::{AccessError, Result};
pub use fingerprint::policy_fingerprint;
pub use guard::{require_action, require_page, RoleClaim};
pub use role::Role;
pub use table::{PermissionKind, PermissionTable, ACTION_PERMISSIONS, PAGE_PERMISSIONS};

/// True iff `role` is recognized and `page` is in its page row.
pub fn can_access_page(role: &str, page: &str) -> bool {
    PAGE_PERMISSIONS.check(role, page)
}

/// True iff `role` is recognized and `action` is in its action row.
pub fn can_perform_action(role: &str, action: &str) -> bool {
    ACTION_PERMISSIONS.check(role, action)
}

/// Pages for `role` in table order; empty for an unrecognized role.
pub fn get_available_pages(role: &str) -> Vec<&'static str> {
    PAGE_PERMISSIONS.entries_for(role)
}

/// Actions for `role` in table order; empty for an unrecognized role.
pub fn get_available_actions(role: &str) -> Vec<&'static str> {
    ACTION_PERMISSIONS.entries_for(role)
}

/// Roles that may open `page`.
pub fn roles_for_page(page: &str) -> Vec<Role> {
    PAGE_PERMISSIONS.roles_for(page)
}

/// Roles that may perform `action`.
pub fn roles_for_action(action: &str) -> Vec<Role> {
    ACTION_PERMISSIONS.roles_for(action)
}
