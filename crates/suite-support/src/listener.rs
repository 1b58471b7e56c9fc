//! Provisioning listener for the support desk

use crate::defaults::TicketCategoryStore;
use crate::MODULE_SUPPORT;
use std::sync::Arc;
use suite_common::SuiteResult;
use suite_provisioning::{
    DefaultData, GrantRolePermissions, ProvisioningBus, ProvisioningListener, RoleTable,
};
use suite_registry::{ModuleRegistry, PermissionStore};
use tracing::info;

const SUPPORT_PERMISSIONS: &[&str] = &["tickets.view", "tickets.reply", "tickets.manage"];

const SUPPORT_ROLE_TABLE: RoleTable = RoleTable::new(&[
    ("staff", &["tickets.view", "tickets.reply"]),
    ("client", &["tickets.view"]),
]);

pub struct SupportListener {
    permissions: Arc<PermissionStore>,
    pub categories: TicketCategoryStore,
}

impl SupportListener {
    pub fn new(permissions: Arc<PermissionStore>) -> Self {
        Self {
            permissions,
            categories: TicketCategoryStore::new(),
        }
    }
}

impl ProvisioningListener for SupportListener {
    fn listener_name(&self) -> &'static str {
        "support"
    }

    fn module_names(&self) -> &'static [&'static str] {
        &[MODULE_SUPPORT]
    }

    fn on_default_data(&self, event: &DefaultData) -> SuiteResult<()> {
        if !self.addressed_by(&event.modules) {
            return Ok(());
        }
        if self.categories.seed_defaults(event.tenant_id) {
            info!(tenant = %event.tenant_id, "seeded default ticket categories");
        }
        Ok(())
    }

    fn on_grant_role_permissions(&self, event: &GrantRolePermissions) -> SuiteResult<()> {
        if !self.addressed_by(&event.modules) {
            return Ok(());
        }
        for permission in SUPPORT_ROLE_TABLE.permissions_for(&event.role_name) {
            self.permissions.grant_if_absent(event.role_id, permission);
        }
        Ok(())
    }
}

/// Register the support module, declare its catalog, subscribe the listener.
pub fn install(
    registry: &ModuleRegistry,
    permissions: &Arc<PermissionStore>,
    bus: &ProvisioningBus,
) -> Arc<SupportListener> {
    registry.register(MODULE_SUPPORT);
    for permission in SUPPORT_PERMISSIONS {
        permissions.declare(permission, MODULE_SUPPORT);
    }
    let listener = Arc::new(SupportListener::new(permissions.clone()));
    bus.register(listener.clone());
    listener
}
