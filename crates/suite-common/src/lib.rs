//! Shared types for OpenSuite
//!
//! Ids, roles, the action descriptor handed in by the web layer, and the
//! admit/deny decision taxonomy returned by the gate pipeline. Everything
//! here is plain data: no stores, no policy.

pub mod action;
pub mod decision;
pub mod error;
pub mod ids;
pub mod role;

pub use action::{ActionDescriptor, Method};
pub use decision::{Decision, DenyReason};
pub use error::{SuiteError, SuiteResult};
pub use ids::{RoleInstanceId, TenantId, UserId};
pub use role::Role;
