//! Default ticket categories

use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use suite_common::TenantId;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketCategory {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Ticket categories per tenant.
#[derive(Default)]
pub struct TicketCategoryStore {
    rows: DashMap<TenantId, Vec<TicketCategory>>,
}

impl TicketCategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the stock categories; no-op when the tenant already has rows.
    pub fn seed_defaults(&self, tenant_id: TenantId) -> bool {
        match self.rows.entry(tenant_id) {
            Entry::Vacant(entry) => {
                let now = Utc::now();
                entry.insert(
                    ["General", "Billing", "Technical"]
                        .iter()
                        .map(|name| TicketCategory {
                            id: Uuid::new_v4(),
                            name: name.to_string(),
                            created_at: now,
                        })
                        .collect(),
                );
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn for_tenant(&self, tenant_id: TenantId) -> Vec<TicketCategory> {
        self.rows.get(&tenant_id).map(|r| r.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_categories_idempotent() {
        let store = TicketCategoryStore::new();
        let tenant = Uuid::new_v4();

        assert!(store.seed_defaults(tenant));
        let ids: Vec<_> = store.for_tenant(tenant).iter().map(|c| c.id).collect();
        assert!(!store.seed_defaults(tenant));
        let after: Vec<_> = store.for_tenant(tenant).iter().map(|c| c.id).collect();

        assert_eq!(ids, after);
    }
}
