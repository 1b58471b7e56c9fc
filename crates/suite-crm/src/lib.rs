//! CRM feature module
//!
//! Seeds the default deal pipeline per tenant and provisions default role
//! grants for the `crm` registry module.

pub mod defaults;
pub mod listener;

pub use defaults::{PipelineStage, PipelineStore};
pub use listener::{install, CrmListener};

pub const MODULE_CRM: &str = "crm";
