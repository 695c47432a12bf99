//! User roles

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AccessError;
use crate::table::{ACTION_PERMISSIONS, PAGE_PERMISSIONS};

/// Fixed classification of a user. The authoritative value lives in the
/// user-profile store; this crate only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    SuperAdmin,
    Admin,
    Teacher,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 3] = [Role::SuperAdmin, Role::Admin, Role::Teacher];

    /// Wire name, as stored in user profiles.
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::SuperAdmin => "superadmin",
            Role::Admin => "admin",
            Role::Teacher => "teacher",
        }
    }

    /// Exact, case-sensitive match against the wire names.
    pub fn parse(s: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.as_str() == s)
    }

    /// Resolve the role claim handed over by the session layer.
    pub fn from_claim(claim: Option<&str>) -> Option<Role> {
        claim.and_then(Role::parse)
    }

    pub fn can_access_page(self, page: &str) -> bool {
        PAGE_PERMISSIONS.allows(self, page)
    }

    pub fn can_perform_action(self, action: &str) -> bool {
        ACTION_PERMISSIONS.allows(self, action)
    }

    pub fn available_pages(self) -> Vec<&'static str> {
        PAGE_PERMISSIONS.entries(self).to_vec()
    }

    pub fn available_actions(self) -> Vec<&'static str> {
        ACTION_PERMISSIONS.entries(self).to_vec()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s).ok_or_else(|| AccessError::UnknownRole(s.to_string()))
    }
}
