//! Support desk feature module
//!
//! Seeds default ticket categories per tenant and provisions default role
//! grants for the `support` registry module.

pub mod defaults;
pub mod listener;

pub use defaults::{TicketCategory, TicketCategoryStore};
pub use listener::{install, SupportListener};

pub const MODULE_SUPPORT: &str = "support";
