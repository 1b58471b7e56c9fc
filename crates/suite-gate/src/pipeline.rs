//! Ordered admission checks

use crate::demo::DemoClassifier;
use crate::session::SessionTerminator;
use chrono::Utc;
use std::sync::Arc;
use suite_common::{ActionDescriptor, Decision, DenyReason, Role};
use suite_registry::{ModuleRegistry, PermissionStore};
use suite_tenant::{TenantDirectory, User};
use tracing::debug;

/// Routes that stay reachable for a tenant owner whose plan has expired.
/// Without these the owner cannot renew, pay, or leave impersonation, and
/// the account can never self-recover.
const EXPIRED_ALLOWED_ROUTES: &[&str] = &[
    "plans.index",
    "plans.show",
    "plans.subscribe",
    "payments.checkout",
    "payments.callback",
    "coupons.apply",
    "plans.free-assign",
    "impersonation.leave",
];

const GENERIC_DENIED: &str = "Permission denied.";

/// The gate pipeline.
///
/// Gate order matters: later gates assume earlier ones passed. Every deny is
/// a classification returned to the web layer, never an error. The pipeline
/// holds injected stores so it can run against fakes in tests.
pub struct AccessGate {
    directory: Arc<TenantDirectory>,
    registry: Arc<ModuleRegistry>,
    permissions: Arc<PermissionStore>,
    sessions: Arc<dyn SessionTerminator>,
    /// Demo classifier, present only in demo deployments
    demo: Option<DemoClassifier>,
}

impl AccessGate {
    pub fn new(
        directory: Arc<TenantDirectory>,
        registry: Arc<ModuleRegistry>,
        permissions: Arc<PermissionStore>,
        sessions: Arc<dyn SessionTerminator>,
    ) -> Self {
        Self {
            directory,
            registry,
            permissions,
            sessions,
            demo: None,
        }
    }

    /// Enable the demo classifier (deployment flag).
    pub fn with_demo_mode(mut self, classifier: DemoClassifier) -> Self {
        self.demo = Some(classifier);
        self
    }

    /// Admit or deny one action for an authenticated principal.
    ///
    /// Unauthenticated requests never reach the pipeline; the web layer
    /// admits public routes and redirects the rest before calling in.
    pub fn admit(&self, principal: &User, action: &ActionDescriptor) -> Decision {
        let decision = self.admit_inner(principal, action);
        if let Some(reason) = decision.reason() {
            debug!(
                user = %principal.id,
                path = %action.path,
                ?reason,
                "action denied"
            );
        }
        decision
    }

    fn admit_inner(&self, principal: &User, action: &ActionDescriptor) -> Decision {
        if let Some(decision) = self.plan_gate(principal, action) {
            return decision;
        }
        if let Some(decision) = self.module_gate(principal, action) {
            return decision;
        }
        if let Some(decision) = self.permission_gate(principal, action) {
            return decision;
        }
        if let Some(decision) = self.demo_gate(action) {
            return decision;
        }
        Decision::Allow
    }

    /// Plan gate. Superadmins are exempt. Expired owners keep the fixed
    /// self-recovery allow-list; expired sub-users are denied outright and
    /// logged out, since they cannot renew the plan themselves.
    fn plan_gate(&self, principal: &User, action: &ActionDescriptor) -> Option<Decision> {
        if principal.role == Role::Superadmin {
            return None;
        }

        let tenant = match self.directory.effective_tenant_of(principal) {
            Some(tenant) => tenant,
            // A principal with no resolvable tenant cannot be gated by plan
            // state; deny generically rather than crash.
            None => return Some(Decision::deny(DenyReason::PermissionDenied, GENERIC_DENIED)),
        };

        if !tenant.is_plan_expired_at(Utc::now()) {
            return None;
        }

        if principal.role == Role::TenantOwner {
            if EXPIRED_ALLOWED_ROUTES.contains(&action.route_name()) {
                return None;
            }
            return Some(Decision::deny(
                DenyReason::PlanExpired,
                "Your subscription has expired. Please renew your plan.",
            ));
        }

        // Staff/Client/Vendor: force back to login
        self.sessions.terminate(principal.id);
        Some(Decision::deny_with_logout(
            DenyReason::PlanExpired,
            "This workspace's subscription has expired. Please contact the owner.",
        ))
    }

    /// Module gate. Hyphen-joined requirements admit when ANY named module
    /// is active. The deny message never names the missing module.
    fn module_gate(&self, principal: &User, action: &ActionDescriptor) -> Option<Decision> {
        let required = action.required_modules();
        if required.is_empty() || principal.role == Role::Superadmin {
            return None;
        }

        let tenant_id = principal.effective_tenant()?;
        if self.registry.any_active(&required, tenant_id) {
            return None;
        }
        Some(Decision::deny(DenyReason::ModuleInactive, GENERIC_DENIED))
    }

    /// Permission gate: role-grant lookup in the permission store. Owners
    /// and superadmins hold every permission implicitly.
    fn permission_gate(&self, principal: &User, action: &ActionDescriptor) -> Option<Decision> {
        let permission = action.required_permission.as_deref()?;
        if matches!(principal.role, Role::Superadmin | Role::TenantOwner) {
            return None;
        }

        let granted = principal
            .role_instance
            .map(|role_id| self.permissions.is_granted(role_id, permission))
            .unwrap_or(false);
        if granted {
            return None;
        }
        Some(Decision::deny(DenyReason::PermissionDenied, GENERIC_DENIED))
    }

    fn demo_gate(&self, action: &ActionDescriptor) -> Option<Decision> {
        let classifier = self.demo.as_ref()?;
        if classifier.is_restricted(action) {
            return Some(Decision::deny_demo(
                "This action is restricted in the demo.",
            ));
        }
        None
    }
}
