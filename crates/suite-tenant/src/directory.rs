//! Tenant directory and provisioning triggers

use crate::model::{PlanState, Tenant, TenantStatus};
use crate::user::User;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use suite_common::{SuiteError, SuiteResult, TenantId, UserId};
use suite_provisioning::{ProvisioningBus, ProvisioningEvent};
use suite_registry::{ModuleRegistry, PermissionStore, RoleInstance};
use tracing::info;

/// Tenant and user registry, and the central trigger point that publishes
/// provisioning events on tenant creation, role creation, and module
/// activation.
pub struct TenantDirectory {
    tenants: RwLock<HashMap<TenantId, Tenant>>,
    users: RwLock<HashMap<UserId, User>>,
    registry: Arc<ModuleRegistry>,
    permissions: Arc<PermissionStore>,
    bus: Arc<ProvisioningBus>,
}

impl TenantDirectory {
    pub fn new(
        registry: Arc<ModuleRegistry>,
        permissions: Arc<PermissionStore>,
        bus: Arc<ProvisioningBus>,
    ) -> Self {
        Self {
            tenants: RwLock::new(HashMap::new()),
            users: RwLock::new(HashMap::new()),
            registry,
            permissions,
            bus,
        }
    }

    /// Create a tenant, activate its initial modules, and publish
    /// `DefaultData` so every named module seeds itself. Safe to re-run for
    /// the same module set: listeners are idempotent by contract.
    pub fn provision_tenant(&self, name: &str, plan: PlanState, modules: &[&str]) -> Tenant {
        let tenant = Tenant::new(name, plan);
        self.tenants.write().insert(tenant.tenant_id, tenant.clone());
        info!(tenant = name, %tenant.tenant_id, "tenant created");

        if !modules.is_empty() {
            self.activate_modules_inner(&tenant, modules);
        }
        tenant
    }

    /// Create a tenant-scoped role instance and publish
    /// `GrantRolePermissions` for the tenant's active modules.
    pub fn create_role(&self, tenant_id: TenantId, role_name: &str) -> SuiteResult<RoleInstance> {
        if !self.tenants.read().contains_key(&tenant_id) {
            return Err(SuiteError::TenantNotFound(tenant_id));
        }
        let role = self.permissions.create_role(role_name, Some(tenant_id));
        info!(%tenant_id, role = role_name, %role.id, "role created");

        let active = self.registry.active_modules(tenant_id);
        if !active.is_empty() {
            self.bus.publish(&ProvisioningEvent::grant_role_permissions(
                role.id,
                role_name,
                active,
            ));
        }
        Ok(role)
    }

    /// Activate modules for an existing tenant. Publishes `DefaultData` for
    /// the named modules and re-publishes `GrantRolePermissions` for each of
    /// the tenant's existing roles (idempotent on the listener side).
    pub fn activate_modules(&self, tenant_id: TenantId, modules: &[&str]) -> SuiteResult<()> {
        let tenant = self
            .tenants
            .read()
            .get(&tenant_id)
            .cloned()
            .ok_or(SuiteError::TenantNotFound(tenant_id))?;
        self.activate_modules_inner(&tenant, modules);
        Ok(())
    }

    fn activate_modules_inner(&self, tenant: &Tenant, modules: &[&str]) {
        for module in modules {
            self.registry.activate(module, tenant.tenant_id);
        }
        let named: Vec<String> = modules.iter().map(|m| m.to_string()).collect();

        self.bus.publish(&ProvisioningEvent::default_data(
            tenant.tenant_id,
            named.clone(),
        ));

        for role in self.permissions.roles_of_tenant(tenant.tenant_id) {
            self.bus.publish(&ProvisioningEvent::grant_role_permissions(
                role.id,
                role.name.clone(),
                named.clone(),
            ));
        }
    }

    /// Replace the plan snapshot (billing callback).
    pub fn set_plan(&self, tenant_id: TenantId, plan: PlanState) -> SuiteResult<()> {
        let mut tenants = self.tenants.write();
        let tenant = tenants
            .get_mut(&tenant_id)
            .ok_or(SuiteError::TenantNotFound(tenant_id))?;
        tenant.plan = plan;
        tenant.updated_at = Utc::now();
        Ok(())
    }

    pub fn suspend(&self, tenant_id: TenantId) -> SuiteResult<()> {
        self.set_status(tenant_id, TenantStatus::Suspended)
    }

    pub fn resume(&self, tenant_id: TenantId) -> SuiteResult<()> {
        self.set_status(tenant_id, TenantStatus::Active)
    }

    fn set_status(&self, tenant_id: TenantId, status: TenantStatus) -> SuiteResult<()> {
        let mut tenants = self.tenants.write();
        let tenant = tenants
            .get_mut(&tenant_id)
            .ok_or(SuiteError::TenantNotFound(tenant_id))?;
        tenant.status = status;
        tenant.updated_at = Utc::now();
        info!(%tenant_id, ?status, "tenant status changed");
        Ok(())
    }

    pub fn tenant(&self, tenant_id: TenantId) -> Option<Tenant> {
        self.tenants.read().get(&tenant_id).cloned()
    }

    /// Register a user. Sub-users must carry a creator tenant.
    pub fn add_user(&self, user: User) -> SuiteResult<()> {
        if user.role.is_sub_user() && user.creator_tenant.is_none() {
            return Err(SuiteError::ConfigError(format!(
                "sub-user {} has no creator tenant",
                user.id
            )));
        }
        self.users.write().insert(user.id, user);
        Ok(())
    }

    pub fn user(&self, user_id: UserId) -> Option<User> {
        self.users.read().get(&user_id).cloned()
    }

    /// The tenant governing a user's plan and module access, if any.
    pub fn effective_tenant_of(&self, user: &User) -> Option<Tenant> {
        user.effective_tenant().and_then(|id| self.tenant(id))
    }
}
