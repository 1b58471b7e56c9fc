//! Listener contract

use crate::events::{DefaultData, GrantRolePermissions};
use std::collections::HashSet;
use suite_common::SuiteResult;

/// A feature module's subscription to the provisioning bus.
///
/// Contract:
/// - `addressed_by` must be checked before acting; the bus delivers every
///   event to every listener and listeners self-select by module name.
/// - Both handlers must be idempotent: delivery is at-least-once, and
///   module activation re-publishes events a listener may have seen.
/// - No listener may depend on another module's listener having run first.
pub trait ProvisioningListener: Send + Sync {
    /// Name used in delivery reports and failure logs.
    fn listener_name(&self) -> &'static str;

    /// Registry module names this listener provisions for. Most modules own
    /// one; a crate may contribute several (e.g. hrm and payroll).
    fn module_names(&self) -> &'static [&'static str];

    /// Seed tenant-scoped default rows. No-op when the rows already exist.
    fn on_default_data(&self, event: &DefaultData) -> SuiteResult<()>;

    /// Grant this module's default permissions to the role, insert-if-absent
    /// only.
    fn on_grant_role_permissions(&self, event: &GrantRolePermissions) -> SuiteResult<()>;

    /// Whether the event names one of this listener's modules.
    fn addressed_by(&self, modules: &HashSet<String>) -> bool {
        self.module_names().iter().any(|name| modules.contains(*name))
    }
}
