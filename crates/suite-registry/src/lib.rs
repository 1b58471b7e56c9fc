//! Module registry and permission store
//!
//! Two shared stores backing the gate pipeline and the provisioning bus:
//!
//! - [`ModuleRegistry`]: the deploy-time catalog of installed feature
//!   modules and their per-tenant activation flags.
//! - [`PermissionStore`]: the append-only permission catalog, tenant-scoped
//!   role instances, and the monotonic role-grant table.

pub mod modules;
pub mod permissions;

pub use modules::ModuleRegistry;
pub use permissions::{Permission, PermissionStore, RoleInstance};
