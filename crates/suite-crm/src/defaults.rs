//! Default deal pipeline

use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use suite_common::TenantId;
use uuid::Uuid;

/// One stage in a tenant's deal pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineStage {
    pub id: Uuid,
    pub name: String,
    pub order: u32,
    pub created_at: DateTime<Utc>,
}

/// Pipeline stages per tenant.
#[derive(Default)]
pub struct PipelineStore {
    rows: DashMap<TenantId, Vec<PipelineStage>>,
}

impl PipelineStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the stock pipeline; no-op when the tenant already has one.
    pub fn seed_defaults(&self, tenant_id: TenantId) -> bool {
        match self.rows.entry(tenant_id) {
            Entry::Vacant(entry) => {
                let now = Utc::now();
                entry.insert(
                    ["Lead", "Qualified", "Proposal", "Won"]
                        .iter()
                        .enumerate()
                        .map(|(i, name)| PipelineStage {
                            id: Uuid::new_v4(),
                            name: name.to_string(),
                            order: i as u32,
                            created_at: now,
                        })
                        .collect(),
                );
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn for_tenant(&self, tenant_id: TenantId) -> Vec<PipelineStage> {
        self.rows.get(&tenant_id).map(|r| r.clone()).unwrap_or_default()
    }
}
