use thiserror::Error;

use crate::SessionId;

/// Errors that can occur during SessionStore operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionStoreError {
    /// Attempted to insert a session id that is already active
    #[error("Duplicate session id {session_id} not allowed in SessionStore")]
    DuplicateSession { session_id: SessionId },
}
