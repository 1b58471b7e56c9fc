//! Declarative role -> permission tables
//!
//! Every module carries the same shape of static table, so the lookup lives
//! here once instead of being re-implemented per listener.

/// Static `role name -> default permissions` table for one module.
///
/// Roles absent from the table get nothing auto-provisioned; notably no
/// module ships a `vendor` row, so vendor grants are always explicit admin
/// actions.
pub struct RoleTable {
    entries: &'static [(&'static str, &'static [&'static str])],
}

impl RoleTable {
    pub const fn new(entries: &'static [(&'static str, &'static [&'static str])]) -> Self {
        Self { entries }
    }

    /// Default permissions for a role name, empty for unlisted roles.
    pub fn permissions_for(&self, role_name: &str) -> &'static [&'static str] {
        self.entries
            .iter()
            .find(|(role, _)| *role == role_name)
            .map(|(_, perms)| *perms)
            .unwrap_or(&[])
    }

    /// Every permission the table can grant, across all roles.
    pub fn all_permissions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().flat_map(|(_, perms)| perms.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: RoleTable = RoleTable::new(&[
        ("staff", &["tickets.view", "tickets.reply"]),
        ("client", &["tickets.view"]),
    ]);

    #[test]
    fn test_lookup_by_role() {
        assert_eq!(TABLE.permissions_for("staff"), &["tickets.view", "tickets.reply"]);
        assert_eq!(TABLE.permissions_for("client"), &["tickets.view"]);
    }

    #[test]
    fn test_unlisted_role_gets_nothing() {
        assert!(TABLE.permissions_for("vendor").is_empty());
        assert!(TABLE.permissions_for("company").is_empty());
    }
}
