//! User roles

use serde::{Deserialize, Serialize};

/// Coarse user role, immutable after user creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Platform operator, bypasses plan and permission gates
    Superadmin,
    /// Owns a tenant and its subscription
    TenantOwner,
    /// Employee of a tenant
    Staff,
    /// Customer of a tenant
    Client,
    /// Supplier of a tenant
    Vendor,
}

impl Role {
    /// Sub-users inherit plan eligibility from the tenant that created them
    /// and have no self-service recovery path when that plan expires.
    pub fn is_sub_user(&self) -> bool {
        matches!(self, Self::Staff | Self::Client | Self::Vendor)
    }

    /// Canonical lowercase name, used as the key in module role tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Superadmin => "superadmin",
            Self::TenantOwner => "company",
            Self::Staff => "staff",
            Self::Client => "client",
            Self::Vendor => "vendor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_user_roles() {
        assert!(Role::Staff.is_sub_user());
        assert!(Role::Client.is_sub_user());
        assert!(Role::Vendor.is_sub_user());
        assert!(!Role::TenantOwner.is_sub_user());
        assert!(!Role::Superadmin.is_sub_user());
    }
}
