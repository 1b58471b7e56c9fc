//! Provisioning listener for crm

use crate::defaults::PipelineStore;
use crate::MODULE_CRM;
use std::sync::Arc;
use suite_common::SuiteResult;
use suite_provisioning::{
    DefaultData, GrantRolePermissions, ProvisioningBus, ProvisioningListener, RoleTable,
};
use suite_registry::{ModuleRegistry, PermissionStore};
use tracing::info;

const CRM_PERMISSIONS: &[&str] = &[
    "contacts.view",
    "contacts.manage",
    "deals.view",
    "deals.manage",
];

const CRM_ROLE_TABLE: RoleTable = RoleTable::new(&[
    ("staff", &["contacts.view", "deals.view"]),
    ("client", &["deals.view"]),
    ("company", &["contacts.view", "contacts.manage", "deals.view", "deals.manage"]),
]);

pub struct CrmListener {
    permissions: Arc<PermissionStore>,
    pub pipelines: PipelineStore,
}

impl CrmListener {
    pub fn new(permissions: Arc<PermissionStore>) -> Self {
        Self {
            permissions,
            pipelines: PipelineStore::new(),
        }
    }
}

impl ProvisioningListener for CrmListener {
    fn listener_name(&self) -> &'static str {
        "crm"
    }

    fn module_names(&self) -> &'static [&'static str] {
        &[MODULE_CRM]
    }

    fn on_default_data(&self, event: &DefaultData) -> SuiteResult<()> {
        if !self.addressed_by(&event.modules) {
            return Ok(());
        }
        if self.pipelines.seed_defaults(event.tenant_id) {
            info!(tenant = %event.tenant_id, "seeded default deal pipeline");
        }
        Ok(())
    }

    fn on_grant_role_permissions(&self, event: &GrantRolePermissions) -> SuiteResult<()> {
        if !self.addressed_by(&event.modules) {
            return Ok(());
        }
        for permission in CRM_ROLE_TABLE.permissions_for(&event.role_name) {
            self.permissions.grant_if_absent(event.role_id, permission);
        }
        Ok(())
    }
}

/// Register the crm module, declare its catalog, subscribe the listener.
pub fn install(
    registry: &ModuleRegistry,
    permissions: &Arc<PermissionStore>,
    bus: &ProvisioningBus,
) -> Arc<CrmListener> {
    registry.register(MODULE_CRM);
    for permission in CRM_PERMISSIONS {
        permissions.declare(permission, MODULE_CRM);
    }
    let listener = Arc::new(CrmListener::new(permissions.clone()));
    bus.register(listener.clone());
    listener
}
