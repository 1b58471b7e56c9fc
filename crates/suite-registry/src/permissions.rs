//! Permission catalog, role instances, and the monotonic grant table

use dashmap::{DashMap, DashSet};
use serde::{Deserialize, Serialize};
use suite_common::{RoleInstanceId, TenantId};
use tracing::debug;
use uuid::Uuid;

/// A named permission owned by one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub name: String,
    pub owner_module: String,
}

/// A tenant-scoped role instance, or a global template role when
/// `tenant_id` is `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleInstance {
    pub id: RoleInstanceId,
    /// Role name as module tables key it: "staff", "client", "company", ...
    pub name: String,
    pub tenant_id: Option<TenantId>,
}

/// Permission catalog plus the `(role instance, permission) -> granted`
/// table.
///
/// The catalog is append-only: module upgrades may declare new permissions
/// but never remove ones already granted. Grants are written with an atomic
/// insert-if-absent so concurrent provisioning runs for the same tenant
/// cannot lose updates.
#[derive(Default)]
pub struct PermissionStore {
    catalog: DashMap<String, Permission>,
    roles: DashMap<RoleInstanceId, RoleInstance>,
    grants: DashSet<(RoleInstanceId, String)>,
}

impl PermissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a permission in the catalog. Idempotent; a redeclaration
    /// never displaces the original owner.
    pub fn declare(&self, name: &str, owner_module: &str) {
        self.catalog.entry(name.to_string()).or_insert_with(|| Permission {
            name: name.to_string(),
            owner_module: owner_module.to_string(),
        });
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.catalog.contains_key(name)
    }

    pub fn permission(&self, name: &str) -> Option<Permission> {
        self.catalog.get(name).map(|p| p.clone())
    }

    /// Permissions owned by one module.
    pub fn permissions_of(&self, owner_module: &str) -> Vec<Permission> {
        let mut perms: Vec<_> = self
            .catalog
            .iter()
            .filter(|p| p.owner_module == owner_module)
            .map(|p| p.clone())
            .collect();
        perms.sort_by(|a, b| a.name.cmp(&b.name));
        perms
    }

    /// Create a role instance for a tenant (or a global template role).
    pub fn create_role(&self, name: &str, tenant_id: Option<TenantId>) -> RoleInstance {
        let role = RoleInstance {
            id: Uuid::new_v4(),
            name: name.to_string(),
            tenant_id,
        };
        self.roles.insert(role.id, role.clone());
        role
    }

    pub fn role(&self, id: RoleInstanceId) -> Option<RoleInstance> {
        self.roles.get(&id).map(|r| r.clone())
    }

    /// Role instances belonging to a tenant.
    pub fn roles_of_tenant(&self, tenant_id: TenantId) -> Vec<RoleInstance> {
        self.roles
            .iter()
            .filter(|r| r.tenant_id == Some(tenant_id))
            .map(|r| r.clone())
            .collect()
    }

    /// Grant a permission to a role if not already granted. Atomic
    /// insert-if-absent: safe under concurrent provisioning of the same
    /// event. Returns `true` when this call created the grant.
    pub fn grant_if_absent(&self, role_id: RoleInstanceId, permission: &str) -> bool {
        let newly = self.grants.insert((role_id, permission.to_string()));
        if newly {
            debug!(%role_id, permission, "permission granted");
        }
        newly
    }

    /// Admin-initiated revocation. Provisioning never calls this; a later
    /// re-provisioning run will re-grant anything still listed in a module's
    /// role table.
    pub fn revoke(&self, role_id: RoleInstanceId, permission: &str) -> bool {
        self.grants.remove(&(role_id, permission.to_string())).is_some()
    }

    pub fn is_granted(&self, role_id: RoleInstanceId, permission: &str) -> bool {
        self.grants.contains(&(role_id, permission.to_string()))
    }

    /// All permissions granted to a role.
    pub fn grants_of(&self, role_id: RoleInstanceId) -> Vec<String> {
        let mut names: Vec<_> = self
            .grants
            .iter()
            .filter(|g| g.0 == role_id)
            .map(|g| g.1.clone())
            .collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declare_is_append_only() {
        let store = PermissionStore::new();
        store.declare("invoices.view", "invoicing");
        store.declare("invoices.view", "other-module");

        let perm = store.permission("invoices.view").unwrap();
        assert_eq!(perm.owner_module, "invoicing");
    }

    #[test]
    fn test_grant_if_absent_is_monotonic() {
        let store = PermissionStore::new();
        let role = store.create_role("staff", None);

        assert!(store.grant_if_absent(role.id, "tickets.view"));
        assert!(!store.grant_if_absent(role.id, "tickets.view"));
        assert!(store.is_granted(role.id, "tickets.view"));
    }

    #[test]
    fn test_revoke_then_regrant() {
        let store = PermissionStore::new();
        let role = store.create_role("staff", None);
        store.grant_if_absent(role.id, "tickets.reply");

        assert!(store.revoke(role.id, "tickets.reply"));
        assert!(!store.is_granted(role.id, "tickets.reply"));
        // insert-if-absent re-grants because the grant is gone
        assert!(store.grant_if_absent(role.id, "tickets.reply"));
    }

    #[test]
    fn test_roles_of_tenant() {
        let store = PermissionStore::new();
        let tenant = Uuid::new_v4();
        store.create_role("staff", Some(tenant));
        store.create_role("client", Some(tenant));
        store.create_role("staff", None); // template, not tenant-scoped

        assert_eq!(store.roles_of_tenant(tenant).len(), 2);
    }

    #[test]
    fn test_permissions_of_module() {
        let store = PermissionStore::new();
        store.declare("leave.request", "hrm");
        store.declare("leave.approve", "hrm");
        store.declare("deals.view", "crm");

        let hrm = store.permissions_of("hrm");
        assert_eq!(hrm.len(), 2);
        assert!(hrm.iter().all(|p| p.owner_module == "hrm"));
    }

    #[test]
    fn test_concurrent_grant_single_winner() {
        use std::sync::Arc;

        let store = Arc::new(PermissionStore::new());
        let role = store.create_role("staff", None);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.grant_if_absent(role.id, "races.win"))
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|newly| *newly)
            .count();

        // Exactly one thread observes the insert
        assert_eq!(winners, 1);
        assert!(store.is_granted(role.id, "races.win"));
    }
}
