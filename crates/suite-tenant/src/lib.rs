//! Tenant and user management
//!
//! The tenant model (plan state, suspension), the user model with its
//! creator-tenant back-reference, and the lifecycle operations that act as
//! the central trigger point for the provisioning bus.

pub mod directory;
pub mod model;
pub mod user;

pub use directory::TenantDirectory;
pub use model::{PlanState, Tenant, TenantStatus};
pub use user::User;
