//! Tenant-scoped default rows

use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use suite_common::TenantId;
use uuid::Uuid;

/// A leave category a tenant starts with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveType {
    pub id: Uuid,
    pub name: String,
    pub days_per_year: u32,
    pub created_at: DateTime<Utc>,
}

impl LeaveType {
    fn new(name: &str, days_per_year: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            days_per_year,
            created_at: Utc::now(),
        }
    }
}

/// Leave types per tenant.
#[derive(Default)]
pub struct LeaveTypeStore {
    rows: DashMap<TenantId, Vec<LeaveType>>,
}

impl LeaveTypeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the stock leave types for a tenant. No-op when the tenant
    /// already has rows; the vacant-entry insert keeps re-delivered events
    /// from duplicating them.
    pub fn seed_defaults(&self, tenant_id: TenantId) -> bool {
        match self.rows.entry(tenant_id) {
            Entry::Vacant(entry) => {
                entry.insert(vec![
                    LeaveType::new("Casual Leave", 12),
                    LeaveType::new("Sick Leave", 10),
                    LeaveType::new("Paid Leave", 20),
                ]);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn for_tenant(&self, tenant_id: TenantId) -> Vec<LeaveType> {
        self.rows.get(&tenant_id).map(|r| r.clone()).unwrap_or_default()
    }
}

/// Default pay schedule for a tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaySchedule {
    pub tenant_id: TenantId,
    /// Day of month payroll runs
    pub pay_day: u8,
    pub created_at: DateTime<Utc>,
}

/// Pay schedules per tenant.
#[derive(Default)]
pub struct PayScheduleStore {
    rows: DashMap<TenantId, PaySchedule>,
}

impl PayScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the monthly default schedule; no-op when one exists.
    pub fn seed_defaults(&self, tenant_id: TenantId) -> bool {
        match self.rows.entry(tenant_id) {
            Entry::Vacant(entry) => {
                entry.insert(PaySchedule {
                    tenant_id,
                    pay_day: 28,
                    created_at: Utc::now(),
                });
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn for_tenant(&self, tenant_id: TenantId) -> Option<PaySchedule> {
        self.rows.get(&tenant_id).map(|r| r.clone())
    }
}
