//! Tenant data model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use suite_common::TenantId;
use uuid::Uuid;

/// Subscription plan snapshot for a tenant.
///
/// Mutated by billing events outside this subsystem; the gate pipeline only
/// reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanState {
    pub active: bool,
    /// `None` means no expiry (e.g. a lifetime or free plan)
    pub expiry: Option<DateTime<Utc>>,
}

impl PlanState {
    pub fn active_until(expiry: DateTime<Utc>) -> Self {
        Self { active: true, expiry: Some(expiry) }
    }

    pub fn active_unlimited() -> Self {
        Self { active: true, expiry: None }
    }

    pub fn inactive() -> Self {
        Self { active: false, expiry: None }
    }

    /// Derived status: expired when the plan is inactive or past expiry.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        !self.active || self.expiry.map(|e| now > e).unwrap_or(false)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Administrative status, orthogonal to the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TenantStatus {
    Active,
    Suspended,
}

/// Tenant definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
    pub tenant_id: TenantId,
    pub name: String,
    pub plan: PlanState,
    pub status: TenantStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tenant {
    pub fn new(name: &str, plan: PlanState) -> Self {
        let now = Utc::now();
        Self {
            tenant_id: Uuid::new_v4(),
            name: name.to_string(),
            plan,
            status: TenantStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the tenant should be gated as plan-expired. Suspension gates
    /// the same way as an expired plan.
    pub fn is_plan_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.status == TenantStatus::Suspended || self.plan.is_expired_at(now)
    }
}
