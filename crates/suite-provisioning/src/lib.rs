//! Provisioning bus
//!
//! The fan-out channel that lets an unbounded set of independently-developed
//! feature modules seed default data and default permission grants for a
//! tenant without any central dispatch table. Two event kinds, at-least-once
//! delivery, idempotent listeners, per-listener failure isolation.

pub mod bus;
pub mod events;
pub mod listener;
pub mod tables;

pub use bus::{DeliveryOutcome, DeliveryReport, ProvisioningBus};
pub use events::{DefaultData, GrantRolePermissions, ProvisioningEvent};
pub use listener::ProvisioningListener;
pub use tables::RoleTable;
