//! Identifier aliases

use uuid::Uuid;

/// Tenant ID
pub type TenantId = Uuid;

/// User ID
pub type UserId = Uuid;

/// Role instance ID
///
/// A role instance is a tenant-scoped role (or a global template role such
/// as the default staff template), not the coarse [`crate::Role`] enum.
pub type RoleInstanceId = Uuid;
