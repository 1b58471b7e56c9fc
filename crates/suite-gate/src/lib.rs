//! Access gate pipeline
//!
//! The per-request admission decision for the suite: an ordered sequence of
//! independent checks (plan, module activation, permission, demo
//! classification) that short-circuits on the first deny. Stateless per
//! request; reads snapshots only.

pub mod demo;
pub mod pipeline;
pub mod session;

pub use demo::{DemoClassifier, DemoRules};
pub use pipeline::AccessGate;
pub use session::{NoopSessionTerminator, SessionTerminator};
