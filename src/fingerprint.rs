//! Policy fingerprint
//!
//! SHA-256 over a canonical rendering of both tables. Clients compare it
//! against what they cached to know when menus must be rebuilt.

use std::sync::OnceLock;

use sha2::{Digest, Sha256};

use crate::table::{PermissionTable, ACTION_PERMISSIONS, PAGE_PERMISSIONS};

static FINGERPRINT: OnceLock<String> = OnceLock::new();

/// Lowercase hex digest of the current tables, computed on first use.
pub fn policy_fingerprint() -> &'static str {
    FINGERPRINT.get_or_init(|| digest(&[&PAGE_PERMISSIONS, &ACTION_PERMISSIONS]))
}

// One line per row: `kind/role:id,id,...`
fn digest(tables: &[&PermissionTable]) -> String {
    let mut hasher = Sha256::new();
    for table in tables {
        for (role, ids) in table.rows() {
            hasher.update(table.kind().as_str().as_bytes());
            hasher.update(b"/");
            hasher.update(role.as_str().as_bytes());
            hasher.update(b":");
            hasher.update(ids.join(",").as_bytes());
            hasher.update(b"\n");
        }
    }
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;
    use crate::table::PermissionKind;

    #[test]
    fn stable_hex_digest() {
        let fp = policy_fingerprint();
        assert_eq!(fp.len(), 64);
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(fp, policy_fingerprint());
        assert_eq!(fp, digest(&[&PAGE_PERMISSIONS, &ACTION_PERMISSIONS]));
    }

    #[test]
    fn changes_with_table_contents() {
        const ONE: &[&str] = &["dashboard"];
        const TWO: &[&str] = &["dashboard", "reports"];
        static A: PermissionTable = PermissionTable::new(PermissionKind::Page, &[(Role::Admin, ONE)]);
        static B: PermissionTable = PermissionTable::new(PermissionKind::Page, &[(Role::Admin, TWO)]);
        static C: PermissionTable = PermissionTable::new(PermissionKind::Action, &[(Role::Admin, ONE)]);

        assert_ne!(digest(&[&A]), digest(&[&B]));
        assert_ne!(digest(&[&A]), digest(&[&C]));
        assert_eq!(digest(&[&A]), digest(&[&A]));
    }
}
