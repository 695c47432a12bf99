//! Static permission tables
//!
//! Two tables map each [`Role`] to the identifiers it may use:
//! - pages: navigable areas the UI router guards
//! - actions: mutating operations request handlers guard
//!
//! Tables are `static` and never mutated. A role missing from a table has
//! no permissions there, and an unrecognized role string never matches a row.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{actions as a, pages as p};
use crate::role::Role;

/// Which table an identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionKind {
    Page,
    Action,
}

impl PermissionKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            PermissionKind::Page => "page",
            PermissionKind::Action => "action",
        }
    }

    /// The table holding identifiers of this kind.
    pub fn table(self) -> &'static PermissionTable {
        match self {
            PermissionKind::Page => &PAGE_PERMISSIONS,
            PermissionKind::Action => &ACTION_PERMISSIONS,
        }
    }
}

impl fmt::Display for PermissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type Row = (Role, &'static [&'static str]);

/// Immutable role → identifiers mapping. Row order and order within a row
/// are kept for enumeration; lookups only test membership.
#[derive(Debug)]
pub struct PermissionTable {
    kind: PermissionKind,
    rows: &'static [Row],
}

impl PermissionTable {
    pub const fn new(kind: PermissionKind, rows: &'static [Row]) -> Self {
        Self { kind, rows }
    }

    pub fn kind(&self) -> PermissionKind {
        self.kind
    }

    /// Rows in table order.
    pub fn rows(&self) -> impl Iterator<Item = Row> + '_ {
        self.rows.iter().copied()
    }

    /// Identifiers granted to `role`; empty when the role has no row.
    pub fn entries(&self, role: Role) -> &'static [&'static str] {
        self.rows
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, ids)| *ids)
            .unwrap_or(&[])
    }

    pub fn allows(&self, role: Role, name: &str) -> bool {
        self.entries(role).iter().any(|id| *id == name)
    }

    /// Membership test for an untrusted role string. Unknown roles fail closed.
    pub fn check(&self, role: &str, name: &str) -> bool {
        let Some(parsed) = Role::parse(role) else {
            debug!(role, kind = %self.kind, name, "unrecognized role denied");
            return false;
        };
        let allowed = self.allows(parsed, name);
        if !allowed {
            debug!(role, kind = %self.kind, name, "permission denied");
        }
        allowed
    }

    /// Identifiers for an untrusted role string, copied out.
    pub fn entries_for(&self, role: &str) -> Vec<&'static str> {
        match Role::parse(role) {
            Some(r) => self.entries(r).to_vec(),
            None => {
                debug!(role, kind = %self.kind, "unrecognized role has no entries");
                Vec::new()
            }
        }
    }

    /// Roles granted `name`, in `Role::ALL` order.
    pub fn roles_for(&self, name: &str) -> Vec<Role> {
        Role::ALL
            .into_iter()
            .filter(|r| self.allows(*r, name))
            .collect()
    }
}

const SUPERADMIN_PAGES: &[&str] = &[
    p::DASHBOARD,
    p::PROFILES,
    p::PROFILE_CREATE,
    p::PROFILE_EDIT,
    p::GUARDIANS,
    p::GUARDIAN_CREATE,
    p::GUARDIAN_EDIT,
    p::STUDENTS,
    p::STUDENT_CREATE,
    p::STUDENT_EDIT,
    p::SESSIONS,
    p::SESSION_CREATE,
    p::SESSION_EDIT,
    p::DAILY_FOLLOWUPS,
    p::MONTHLY_EXAMS,
    p::REPORTS,
    p::SETTINGS,
];

const ADMIN_PAGES: &[&str] = &[
    p::DASHBOARD,
    p::PROFILES,
    p::PROFILE_CREATE,
    p::PROFILE_EDIT,
    p::GUARDIANS,
    p::GUARDIAN_CREATE,
    p::GUARDIAN_EDIT,
    p::STUDENTS,
    p::STUDENT_CREATE,
    p::STUDENT_EDIT,
    p::REPORTS,
    p::SETTINGS,
];

const TEACHER_PAGES: &[&str] = &[
    p::DASHBOARD,
    p::STUDENTS,
    p::SESSIONS,
    p::SESSION_CREATE,
    p::SESSION_EDIT,
    p::DAILY_FOLLOWUPS,
    p::MONTHLY_EXAMS,
];

const SUPERADMIN_ACTIONS: &[&str] = &[
    a::PROFILE_CREATE,
    a::PROFILE_EDIT,
    a::PROFILE_DELETE,
    a::GUARDIAN_CREATE,
    a::GUARDIAN_EDIT,
    a::GUARDIAN_DELETE,
    a::STUDENT_CREATE,
    a::STUDENT_EDIT,
    a::STUDENT_DELETE,
    a::SESSION_CREATE,
    a::SESSION_EDIT,
    a::SESSION_DELETE,
    a::FOLLOWUP_CREATE,
    a::FOLLOWUP_EDIT,
    a::FOLLOWUP_DELETE,
    a::EXAM_CREATE,
    a::EXAM_EDIT,
    a::EXAM_DELETE,
    a::REPORT_VIEW,
    a::REPORT_EXPORT,
    a::SETTINGS_EDIT,
];

// Admins edit records but never delete them.
const ADMIN_ACTIONS: &[&str] = &[
    a::PROFILE_CREATE,
    a::PROFILE_EDIT,
    a::GUARDIAN_CREATE,
    a::GUARDIAN_EDIT,
    a::STUDENT_CREATE,
    a::STUDENT_EDIT,
    a::REPORT_VIEW,
    a::REPORT_EXPORT,
    a::SETTINGS_EDIT,
];

const TEACHER_ACTIONS: &[&str] = &[
    a::STUDENT_VIEW,
    a::SESSION_CREATE,
    a::SESSION_EDIT,
    a::FOLLOWUP_CREATE,
    a::FOLLOWUP_EDIT,
    a::EXAM_CREATE,
    a::EXAM_EDIT,
    a::REPORT_VIEW,
];

/// Role → allowed pages.
pub static PAGE_PERMISSIONS: PermissionTable = PermissionTable::new(
    PermissionKind::Page,
    &[
        (Role::SuperAdmin, SUPERADMIN_PAGES),
        (Role::Admin, ADMIN_PAGES),
        (Role::Teacher, TEACHER_PAGES),
    ],
);

/// Role → allowed actions.
pub static ACTION_PERMISSIONS: PermissionTable = PermissionTable::new(
    PermissionKind::Action,
    &[
        (Role::SuperAdmin, SUPERADMIN_ACTIONS),
        (Role::Admin, ADMIN_ACTIONS),
        (Role::Teacher, TEACHER_ACTIONS),
    ],
);
