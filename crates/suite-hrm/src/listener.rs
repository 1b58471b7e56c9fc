//! Provisioning listener for hrm and payroll

use crate::defaults::{LeaveTypeStore, PayScheduleStore};
use crate::{MODULE_HRM, MODULE_PAYROLL};
use std::sync::Arc;
use suite_common::SuiteResult;
use suite_provisioning::{
    DefaultData, GrantRolePermissions, ProvisioningBus, ProvisioningListener, RoleTable,
};
use suite_registry::{ModuleRegistry, PermissionStore};
use tracing::info;

const HRM_PERMISSIONS: &[&str] = &[
    "employees.view",
    "employees.manage",
    "leave.request",
    "leave.approve",
];

const PAYROLL_PERMISSIONS: &[&str] = &["payslips.view", "payroll.run"];

const HRM_ROLE_TABLE: RoleTable = RoleTable::new(&[
    ("staff", &["employees.view", "leave.request"]),
    ("company", &["employees.view", "employees.manage", "leave.request", "leave.approve"]),
]);

const PAYROLL_ROLE_TABLE: RoleTable = RoleTable::new(&[
    ("staff", &["payslips.view"]),
    ("company", &["payslips.view", "payroll.run"]),
]);

/// Listener seeding HR defaults and granting from the hrm/payroll tables.
pub struct HrmListener {
    permissions: Arc<PermissionStore>,
    pub leave_types: LeaveTypeStore,
    pub pay_schedules: PayScheduleStore,
}

impl HrmListener {
    pub fn new(permissions: Arc<PermissionStore>) -> Self {
        Self {
            permissions,
            leave_types: LeaveTypeStore::new(),
            pay_schedules: PayScheduleStore::new(),
        }
    }
}

impl ProvisioningListener for HrmListener {
    fn listener_name(&self) -> &'static str {
        "hrm"
    }

    fn module_names(&self) -> &'static [&'static str] {
        &[MODULE_HRM, MODULE_PAYROLL]
    }

    fn on_default_data(&self, event: &DefaultData) -> SuiteResult<()> {
        if event.modules.contains(MODULE_HRM)
            && self.leave_types.seed_defaults(event.tenant_id)
        {
            info!(tenant = %event.tenant_id, "seeded default leave types");
        }
        if event.modules.contains(MODULE_PAYROLL)
            && self.pay_schedules.seed_defaults(event.tenant_id)
        {
            info!(tenant = %event.tenant_id, "seeded default pay schedule");
        }
        Ok(())
    }

    fn on_grant_role_permissions(&self, event: &GrantRolePermissions) -> SuiteResult<()> {
        for (module, table) in [
            (MODULE_HRM, &HRM_ROLE_TABLE),
            (MODULE_PAYROLL, &PAYROLL_ROLE_TABLE),
        ] {
            if !event.modules.contains(module) {
                continue;
            }
            for permission in table.permissions_for(&event.role_name) {
                self.permissions.grant_if_absent(event.role_id, permission);
            }
        }
        Ok(())
    }
}

/// Register the hrm/payroll modules, declare their permission catalog, and
/// subscribe the listener. Called once at startup.
pub fn install(
    registry: &ModuleRegistry,
    permissions: &Arc<PermissionStore>,
    bus: &ProvisioningBus,
) -> Arc<HrmListener> {
    registry.register(MODULE_HRM);
    registry.register(MODULE_PAYROLL);
    for permission in HRM_PERMISSIONS {
        permissions.declare(permission, MODULE_HRM);
    }
    for permission in PAYROLL_PERMISSIONS {
        permissions.declare(permission, MODULE_PAYROLL);
    }

    let listener = Arc::new(HrmListener::new(permissions.clone()));
    bus.register(listener.clone());
    listener
}
