//! Event fan-out with per-listener isolation

use crate::events::ProvisioningEvent;
use crate::listener::ProvisioningListener;
use parking_lot::RwLock;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, warn};

/// Outcome of delivering one event to one listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered,
    /// Listener returned an error; other listeners were unaffected.
    Failed(String),
    /// Listener panicked; the panic was contained.
    Panicked(String),
}

/// Per-listener outcomes for one published event.
#[derive(Debug, Clone)]
pub struct DeliveryReport {
    pub outcomes: Vec<(&'static str, DeliveryOutcome)>,
}

impl DeliveryReport {
    pub fn all_delivered(&self) -> bool {
        self.outcomes
            .iter()
            .all(|(_, o)| *o == DeliveryOutcome::Delivered)
    }

    pub fn failures(&self) -> Vec<&'static str> {
        self.outcomes
            .iter()
            .filter(|(_, o)| *o != DeliveryOutcome::Delivered)
            .map(|(name, _)| *name)
            .collect()
    }
}

/// The provisioning bus.
///
/// Listeners are registered once at startup, one per module crate. Delivery
/// iterates in registration order, but listeners must not rely on it: the
/// ordering of independent modules is unspecified by contract, which is what
/// allows modules to be added or removed without a central coordinator.
#[derive(Default)]
pub struct ProvisioningBus {
    listeners: RwLock<Vec<Arc<dyn ProvisioningListener>>>,
}

impl ProvisioningBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, listener: Arc<dyn ProvisioningListener>) {
        debug!(listener = listener.listener_name(), "provisioning listener registered");
        self.listeners.write().push(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.read().len()
    }

    /// Publish an event to every listener.
    ///
    /// One listener erroring or panicking never prevents the others from
    /// running; modules are independently authored and isolation between
    /// them is a hard requirement.
    pub fn publish(&self, event: &ProvisioningEvent) -> DeliveryReport {
        let listeners = self.listeners.read().clone();
        let mut outcomes = Vec::with_capacity(listeners.len());

        for listener in listeners {
            let name = listener.listener_name();
            let result = panic::catch_unwind(AssertUnwindSafe(|| match event {
                ProvisioningEvent::DefaultData(e) => listener.on_default_data(e),
                ProvisioningEvent::GrantRolePermissions(e) => {
                    listener.on_grant_role_permissions(e)
                }
            }));

            let outcome = match result {
                Ok(Ok(())) => DeliveryOutcome::Delivered,
                Ok(Err(err)) => {
                    warn!(listener = name, error = %err, "provisioning listener failed");
                    DeliveryOutcome::Failed(err.to_string())
                }
                Err(payload) => {
                    let msg = panic_message(payload);
                    warn!(listener = name, panic = %msg, "provisioning listener panicked");
                    DeliveryOutcome::Panicked(msg)
                }
            };
            outcomes.push((name, outcome));
        }

        DeliveryReport { outcomes }
    }
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
