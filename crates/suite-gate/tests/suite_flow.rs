//! End-to-end flows: modules installed at startup, tenants provisioned over
//! the bus, actions admitted through the gate.

use chrono::{Duration, Utc};
use std::sync::Arc;
use suite_common::{ActionDescriptor, DenyReason, Method};
use suite_gate::{AccessGate, DemoClassifier, NoopSessionTerminator};
use suite_provisioning::ProvisioningBus;
use suite_registry::{ModuleRegistry, PermissionStore};
use suite_tenant::{PlanState, TenantDirectory, User};

struct Suite {
    directory: Arc<TenantDirectory>,
    registry: Arc<ModuleRegistry>,
    permissions: Arc<PermissionStore>,
    hrm: Arc<suite_hrm::HrmListener>,
    crm: Arc<suite_crm::CrmListener>,
    support: Arc<suite_support::SupportListener>,
}

/// Startup wiring: every module crate installs itself into the shared
/// registry, catalog, and bus, with no central dispatch table.
fn boot() -> Suite {
    let registry = Arc::new(ModuleRegistry::new());
    let permissions = Arc::new(PermissionStore::new());
    let bus = Arc::new(ProvisioningBus::new());

    let hrm = suite_hrm::install(&registry, &permissions, &bus);
    let crm = suite_crm::install(&registry, &permissions, &bus);
    let support = suite_support::install(&registry, &permissions, &bus);

    let directory = Arc::new(TenantDirectory::new(
        registry.clone(),
        permissions.clone(),
        bus,
    ));

    Suite { directory, registry, permissions, hrm, crm, support }
}

impl Suite {
    fn gate(&self) -> AccessGate {
        AccessGate::new(
            self.directory.clone(),
            self.registry.clone(),
            self.permissions.clone(),
            Arc::new(NoopSessionTerminator),
        )
    }
}

fn month_plan() -> PlanState {
    PlanState::active_until(Utc::now() + Duration::days(30))
}

#[test]
fn provisioning_seeds_every_named_module_and_no_others() {
    let suite = boot();

    let tenant = suite
        .directory
        .provision_tenant("acme", month_plan(), &["hrm", "support"]);

    assert_eq!(suite.hrm.leave_types.for_tenant(tenant.tenant_id).len(), 3);
    assert_eq!(suite.support.categories.for_tenant(tenant.tenant_id).len(), 3);
    assert!(suite.crm.pipelines.for_tenant(tenant.tenant_id).is_empty());
}

#[test]
fn reprovisioning_is_idempotent_end_to_end() {
    let suite = boot();
    let tenant = suite
        .directory
        .provision_tenant("acme", month_plan(), &["hrm", "crm", "support"]);

    let leave_ids: Vec<_> = suite
        .hrm
        .leave_types
        .for_tenant(tenant.tenant_id)
        .iter()
        .map(|l| l.id)
        .collect();

    // Same activation again: at-least-once delivery, zero duplication
    suite
        .directory
        .activate_modules(tenant.tenant_id, &["hrm", "crm", "support"])
        .unwrap();

    let after: Vec<_> = suite
        .hrm
        .leave_types
        .for_tenant(tenant.tenant_id)
        .iter()
        .map(|l| l.id)
        .collect();
    assert_eq!(leave_ids, after);
    assert_eq!(suite.crm.pipelines.for_tenant(tenant.tenant_id).len(), 4);
}

#[test]
fn role_creation_fans_out_to_all_active_modules() {
    let suite = boot();
    let tenant = suite
        .directory
        .provision_tenant("acme", month_plan(), &["hrm", "support"]);

    let staff = suite.directory.create_role(tenant.tenant_id, "staff").unwrap();

    let grants = suite.permissions.grants_of(staff.id);
    assert!(grants.contains(&"leave.request".to_string()));
    assert!(grants.contains(&"tickets.reply".to_string()));
    // crm is not active for this tenant
    assert!(!grants.contains(&"deals.view".to_string()));
}

#[test]
fn late_module_activation_grants_existing_roles() {
    let suite = boot();
    let tenant = suite.directory.provision_tenant("acme", month_plan(), &["hrm"]);
    let staff = suite.directory.create_role(tenant.tenant_id, "staff").unwrap();
    assert!(!suite.permissions.is_granted(staff.id, "tickets.view"));

    suite.directory.activate_modules(tenant.tenant_id, &["support"]).unwrap();

    assert!(suite.permissions.is_granted(staff.id, "tickets.view"));
}

#[test]
fn staff_passes_all_gates_after_provisioning() {
    let suite = boot();
    let tenant = suite
        .directory
        .provision_tenant("acme", month_plan(), &["support"]);
    let role = suite.directory.create_role(tenant.tenant_id, "staff").unwrap();
    let staff = User::sub_user("sam", suite_common::Role::Staff, tenant.tenant_id)
        .with_role_instance(role.id);
    suite.directory.add_user(staff.clone()).unwrap();

    let action = ActionDescriptor::new(Method::Post, "/tickets/7/reply")
        .with_required_module("support")
        .with_required_permission("tickets.reply");

    assert!(suite.gate().admit(&staff, &action).is_allowed());
}

#[test]
fn expired_owner_scenario_matrix() {
    let suite = boot();
    let tenant = suite
        .directory
        .provision_tenant("acme", PlanState::inactive(), &["crm"]);
    let owner = User::owner("olive", tenant.tenant_id);

    let subscribe = ActionDescriptor::new(Method::Post, "/plans/pro/subscribe")
        .with_route_name("plans.subscribe");
    let destroy = ActionDescriptor::new(Method::Delete, "/invoices/3")
        .with_route_name("invoices.destroy");

    assert!(suite.gate().admit(&owner, &subscribe).is_allowed());
    assert_eq!(
        suite.gate().admit(&owner, &destroy).reason(),
        Some(DenyReason::PlanExpired)
    );
}

#[test]
fn demo_mode_restricts_mutation_but_not_creation() {
    let suite = boot();
    let tenant = suite
        .directory
        .provision_tenant("acme", month_plan(), &["crm"]);
    let owner = User::owner("olive", tenant.tenant_id);
    let gate = suite.gate().with_demo_mode(DemoClassifier::default());

    let create = ActionDescriptor::new(Method::Post, "/deals")
        .with_route_name("deals.store")
        .with_required_module("crm");
    let destroy = ActionDescriptor::new(Method::Delete, "/deals/4")
        .with_route_name("deals.destroy")
        .with_required_module("crm");

    assert!(gate.admit(&owner, &create).is_allowed());
    assert_eq!(
        gate.admit(&owner, &destroy).reason(),
        Some(DenyReason::DemoRestricted)
    );
}
