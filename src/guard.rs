//! Guard adapter for request handlers
//!
//! Handlers receive the role claim from the session layer as an optional
//! string. These helpers run the same lookups as the boolean API and turn a
//! denial into [`AccessError::Denied`] so handlers can bail out with `?`
//! before touching the backend.

use crate::error::{AccessError, Result};
use crate::table::PermissionKind;

/// Role value supplied by the session layer for the current user.
/// `None` means no authenticated role, which is denied everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoleClaim<'a>(pub Option<&'a str>);

impl<'a> RoleClaim<'a> {
    pub fn new(role: &'a str) -> Self {
        Self(Some(role))
    }

    pub fn anonymous() -> Self {
        Self(None)
    }

    pub fn as_str(&self) -> Option<&'a str> {
        self.0
    }

    /// Same answer as the boolean lookup for this kind.
    pub fn permits(&self, kind: PermissionKind, name: &str) -> bool {
        match self.0 {
            Some(role) => kind.table().check(role, name),
            None => false,
        }
    }

    pub fn require(&self, kind: PermissionKind, name: &str) -> Result<()> {
        if self.permits(kind, name) {
            return Ok(());
        }
        Err(AccessError::Denied { kind, name: name.to_string() })
    }
}

impl<'a> From<Option<&'a str>> for RoleClaim<'a> {
    fn from(claim: Option<&'a str>) -> Self {
        Self(claim)
    }
}

impl<'a> From<&'a str> for RoleClaim<'a> {
    fn from(role: &'a str) -> Self {
        Self(Some(role))
    }
}

/// Deny unless the claimed role may open `page`.
pub fn require_page<'a>(claim: impl Into<RoleClaim<'a>>, page: &str) -> Result<()> {
    claim.into().require(PermissionKind::Page, page)
}

/// Deny unless the claimed role may perform `action`.
pub fn require_action<'a>(claim: impl Into<RoleClaim<'a>>, action: &str) -> Result<()> {
    claim.into().require(PermissionKind::Action, action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{actions, pages};

    #[test]
    fn granted_passes() {
        assert!(require_page("teacher", pages::SESSIONS).is_ok());
        assert!(require_action(Some("admin"), actions::REPORT_EXPORT).is_ok());
    }

    #[test]
    fn denial_carries_kind_and_name() {
        let e = require_action("teacher", actions::STUDENT_DELETE).unwrap_err();
        assert_eq!(
            e,
            AccessError::Denied { kind: PermissionKind::Action, name: "student-delete".into() }
        );
        assert_eq!(e.to_string(), "access denied: action 'student-delete'");
    }

    #[test]
    fn claim_constructors_agree() {
        let claim = RoleClaim::new("admin");
        assert_eq!(claim, RoleClaim::from("admin"));
        assert_eq!(claim, RoleClaim::from(Some("admin")));
        assert_eq!(claim.as_str(), Some("admin"));
        assert_eq!(RoleClaim::anonymous().as_str(), None);
        assert_eq!(RoleClaim::default(), RoleClaim::anonymous());
        assert!(claim.permits(PermissionKind::Page, pages::SETTINGS));
        assert!(claim.require(PermissionKind::Action, actions::STUDENT_DELETE).is_err());
    }

    #[test]
    fn anonymous_is_denied() {
        assert!(!RoleClaim::anonymous().permits(PermissionKind::Page, pages::DASHBOARD));
        assert!(require_page(RoleClaim::anonymous(), pages::DASHBOARD).is_err());
    }

    #[test]
    fn unknown_role_looks_like_any_other_denial() {
        let unknown = require_page("guardian", pages::DASHBOARD).unwrap_err();
        let ungranted = require_page("teacher", pages::SETTINGS).unwrap_err();
        assert!(matches!(unknown, AccessError::Denied { kind: PermissionKind::Page, .. }));
        assert!(matches!(ungranted, AccessError::Denied { kind: PermissionKind::Page, .. }));
    }
}
