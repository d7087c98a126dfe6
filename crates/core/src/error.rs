use crate::types::EntityId;

/// Domain error taxonomy surfaced by every core operation.
///
/// Callers can always distinguish "no data yet" (a successful empty
/// resolution) from a failure: no variant here is ever folded into a
/// successful return.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: EntityId },

    /// Caller-supplied data violates the data-model constraints.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The session holds no edit secret, or the presented secret no longer
    /// resolves to a live project.
    #[error("Denied: {0}")]
    Denied(String),

    /// A storage operation failed. Recoverable by retrying; the core never
    /// retries on its own.
    #[error("Write failed: {0}")]
    Write(String),

    /// A secret/project cross-reference is broken. Not automatically
    /// repairable; surfaced instead of guessed around.
    #[error("Inconsistent storage state: {0}")]
    Inconsistent(String),
}
