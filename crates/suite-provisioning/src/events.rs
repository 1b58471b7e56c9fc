//! Provisioning events

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use suite_common::{RoleInstanceId, TenantId};

/// Seed tenant-scoped default rows.
///
/// Published once when a tenant is created and again when modules are newly
/// activated for it. Delivery is at-least-once; listeners are required to
/// be idempotent, not the bus to be exactly-once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultData {
    pub tenant_id: TenantId,
    /// Modules this event addresses. Listeners ignore events that do not
    /// name one of their modules.
    pub modules: HashSet<String>,
}

/// Seed default permission grants for a role.
///
/// Published when a role is created or a module is activated. Each module
/// listener grants from its own static `role name -> permissions` table,
/// insert-if-absent only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrantRolePermissions {
    pub role_id: RoleInstanceId,
    /// Role name as module tables key it ("staff", "client", "company")
    pub role_name: String,
    pub modules: HashSet<String>,
}

/// The two event kinds carried by the bus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ProvisioningEvent {
    DefaultData(DefaultData),
    GrantRolePermissions(GrantRolePermissions),
}

impl ProvisioningEvent {
    pub fn default_data(tenant_id: TenantId, modules: impl IntoIterator<Item = String>) -> Self {
        Self::DefaultData(DefaultData {
            tenant_id,
            modules: modules.into_iter().collect(),
        })
    }

    pub fn grant_role_permissions(
        role_id: RoleInstanceId,
        role_name: impl Into<String>,
        modules: impl IntoIterator<Item = String>,
    ) -> Self {
        Self::GrantRolePermissions(GrantRolePermissions {
            role_id,
            role_name: role_name.into(),
            modules: modules.into_iter().collect(),
        })
    }

    /// Modules the event addresses.
    pub fn modules(&self) -> &HashSet<String> {
        match self {
            Self::DefaultData(e) => &e.modules,
            Self::GrantRolePermissions(e) => &e.modules,
        }
    }
}
