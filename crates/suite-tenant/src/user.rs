//! User model

use serde::{Deserialize, Serialize};
use suite_common::{Role, RoleInstanceId, TenantId, UserId};
use uuid::Uuid;

/// A user principal as the gate pipeline sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub role: Role,
    /// The tenant this user owns (TenantOwner only)
    pub tenant_id: Option<TenantId>,
    /// The tenant that created this user (Staff/Client/Vendor only); plan
    /// eligibility is inherited from here, not from the user.
    pub creator_tenant: Option<TenantId>,
    /// Role instance whose grants the permission gate consults. Owners and
    /// superadmins bypass the permission gate and carry none.
    pub role_instance: Option<RoleInstanceId>,
}

impl User {
    pub fn superadmin(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            role: Role::Superadmin,
            tenant_id: None,
            creator_tenant: None,
            role_instance: None,
        }
    }

    pub fn owner(name: &str, tenant_id: TenantId) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            role: Role::TenantOwner,
            tenant_id: Some(tenant_id),
            creator_tenant: None,
            role_instance: None,
        }
    }

    pub fn sub_user(name: &str, role: Role, creator_tenant: TenantId) -> Self {
        debug_assert!(role.is_sub_user());
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            role,
            tenant_id: None,
            creator_tenant: Some(creator_tenant),
            role_instance: None,
        }
    }

    pub fn with_role_instance(mut self, role_instance: RoleInstanceId) -> Self {
        self.role_instance = Some(role_instance);
        self
    }

    /// The tenant whose plan and module activations govern this user: the
    /// owned tenant for owners, the creator tenant for sub-roles, none for
    /// superadmins.
    pub fn effective_tenant(&self) -> Option<TenantId> {
        match self.role {
            Role::Superadmin => None,
            Role::TenantOwner => self.tenant_id,
            Role::Staff | Role::Client | Role::Vendor => self.creator_tenant,
        }
    }
}
