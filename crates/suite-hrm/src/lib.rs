//! HR & payroll feature module
//!
//! Contributes two registry modules, `hrm` and `payroll`, so routes can
//! require either independently (or both via "hrm-payroll"). Seeds default
//! leave types and a default pay schedule per tenant, and provisions default
//! role grants from its static tables.

pub mod defaults;
pub mod listener;

pub use defaults::{LeaveType, LeaveTypeStore, PaySchedule, PayScheduleStore};
pub use listener::{install, HrmListener};

/// Registry module names owned by this crate
pub const MODULE_HRM: &str = "hrm";
pub const MODULE_PAYROLL: &str = "payroll";
