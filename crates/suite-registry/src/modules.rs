//! Module catalog and per-tenant activation

use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use suite_common::TenantId;
use tracing::debug;

/// Catalog of installed feature modules.
///
/// The module set is fixed at deploy time; per-tenant activation is mutated
/// by billing/admin flows. A module name that was never registered reads as
/// inactive for every tenant, never as an error.
#[derive(Default)]
pub struct ModuleRegistry {
    /// module name -> tenants it is active for
    activation: RwLock<HashMap<String, HashSet<TenantId>>>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module in the catalog. Idempotent; activation state of an
    /// already-registered module is untouched.
    pub fn register(&self, name: &str) {
        self.activation
            .write()
            .entry(name.to_string())
            .or_default();
    }

    /// All registered module names.
    pub fn module_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.activation.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.activation.read().contains_key(name)
    }

    /// Activate a module for a tenant. Returns `true` if this call newly
    /// activated it, `false` if it was already active or the module is not
    /// in the catalog.
    pub fn activate(&self, name: &str, tenant_id: TenantId) -> bool {
        let mut activation = self.activation.write();
        match activation.get_mut(name) {
            Some(tenants) => {
                let newly = tenants.insert(tenant_id);
                if newly {
                    debug!(module = name, %tenant_id, "module activated");
                }
                newly
            }
            None => {
                debug!(module = name, %tenant_id, "activation of unknown module ignored");
                false
            }
        }
    }

    /// Deactivate a module for a tenant.
    pub fn deactivate(&self, name: &str, tenant_id: TenantId) {
        if let Some(tenants) = self.activation.write().get_mut(name) {
            tenants.remove(&tenant_id);
        }
    }

    /// Whether a module is active for a tenant. Unknown modules are inactive.
    pub fn is_active(&self, name: &str, tenant_id: TenantId) -> bool {
        self.activation
            .read()
            .get(name)
            .map(|tenants| tenants.contains(&tenant_id))
            .unwrap_or(false)
    }

    /// Whether ANY of the given modules is active for the tenant. This is
    /// the semantics of hyphen-joined route requirements like "hrm-payroll".
    pub fn any_active(&self, names: &[&str], tenant_id: TenantId) -> bool {
        let activation = self.activation.read();
        names.iter().any(|name| {
            activation
                .get(*name)
                .map(|tenants| tenants.contains(&tenant_id))
                .unwrap_or(false)
        })
    }

    /// Modules currently active for a tenant.
    pub fn active_modules(&self, tenant_id: TenantId) -> HashSet<String> {
        self.activation
            .read()
            .iter()
            .filter(|(_, tenants)| tenants.contains(&tenant_id))
            .map(|(name, _)| name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_unknown_module_is_inactive() {
        let registry = ModuleRegistry::new();
        let tenant = Uuid::new_v4();

        assert!(!registry.is_active("no-such-module", tenant));
        assert!(!registry.any_active(&["no-such-module"], tenant));
    }

    #[test]
    fn test_activate_is_per_tenant() {
        let registry = ModuleRegistry::new();
        registry.register("hrm");
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        assert!(registry.activate("hrm", a));
        assert!(registry.is_active("hrm", a));
        assert!(!registry.is_active("hrm", b));
    }

    #[test]
    fn test_activate_twice_reports_not_new() {
        let registry = ModuleRegistry::new();
        registry.register("crm");
        let tenant = Uuid::new_v4();

        assert!(registry.activate("crm", tenant));
        assert!(!registry.activate("crm", tenant));
    }

    #[test]
    fn test_any_active_mixed_list() {
        let registry = ModuleRegistry::new();
        registry.register("hrm");
        registry.register("payroll");
        let tenant = Uuid::new_v4();
        registry.activate("payroll", tenant);

        assert!(registry.any_active(&["hrm", "payroll"], tenant));
        assert!(!registry.any_active(&["hrm"], tenant));
    }

    #[test]
    fn test_deactivate() {
        let registry = ModuleRegistry::new();
        registry.register("support");
        let tenant = Uuid::new_v4();
        registry.activate("support", tenant);
        registry.deactivate("support", tenant);

        assert!(!registry.is_active("support", tenant));
    }
}
