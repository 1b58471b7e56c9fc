//! Admission decisions
//!
//! Deny is a classification, not a fault: the pipeline returns it as a
//! normal value and the web layer picks redirect vs JSON from request shape.

use serde::{Deserialize, Serialize};

/// Machine-readable reason code attached to every deny.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DenyReason {
    Unauthenticated,
    PlanExpired,
    ModuleInactive,
    PermissionDenied,
    DemoRestricted,
}

/// Outcome of the gate pipeline for one action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Allow,
    Deny {
        reason: DenyReason,
        /// User-facing message
        message: String,
        /// Set for expired sub-users, whose session must be invalidated
        terminate_session: bool,
        /// Marker for the web layer to tag JSON responses with
        /// `demo_mode: true`
        demo_mode: bool,
    },
}

impl Decision {
    pub fn deny(reason: DenyReason, message: impl Into<String>) -> Self {
        Self::Deny {
            reason,
            message: message.into(),
            terminate_session: false,
            demo_mode: false,
        }
    }

    pub fn deny_with_logout(reason: DenyReason, message: impl Into<String>) -> Self {
        Self::Deny {
            reason,
            message: message.into(),
            terminate_session: true,
            demo_mode: false,
        }
    }

    pub fn deny_demo(message: impl Into<String>) -> Self {
        Self::Deny {
            reason: DenyReason::DemoRestricted,
            message: message.into(),
            terminate_session: false,
            demo_mode: true,
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    pub fn reason(&self) -> Option<DenyReason> {
        match self {
            Self::Allow => None,
            Self::Deny { reason, .. } => Some(*reason),
        }
    }
}
