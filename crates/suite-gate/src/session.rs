//! Session termination hook

use suite_common::UserId;

/// Invalidates a user's session.
///
/// The pipeline calls this for expired sub-users, who have no self-service
/// recovery path and must be forced back to login. The web layer supplies
/// the real implementation; the gate only triggers it.
pub trait SessionTerminator: Send + Sync {
    fn terminate(&self, user_id: UserId);
}

/// Terminator that does nothing, for deployments where the caller handles
/// logout from the decision's `terminate_session` flag instead.
pub struct NoopSessionTerminator;

impl SessionTerminator for NoopSessionTerminator {
    fn terminate(&self, _user_id: UserId) {}
}
