//! The capability-token access model: identity resolver and authorization
//! gate.
//!
//! A project has two identifiers: a public project id anyone may use to
//! view it, and a private secret id whose possession alone grants edit
//! rights. The resolver turns an opaque path token into one of the two;
//! the gate re-validates the secret against storage immediately before
//! every mutation.

use uuid::Uuid;

use crate::store::Store;
use leadlink_core::error::CoreError;

/// Outcome of resolving an opaque session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// No token at all: a brand-new, unsaved session.
    Empty,
    /// The token matched neither a secret nor a project; the caller should
    /// redirect to a fresh session.
    NotFound,
    /// The token identified a project, with edit rights iff `secret_id`
    /// is present.
    Resolved {
        project_id: Uuid,
        secret_id: Option<Uuid>,
    },
}

/// Resolve an opaque token to a `(project, secret?)` pair.
///
/// The token is tried as a secret id first, then as a public project id.
/// A secret pointing at a missing project is an inconsistent-storage
/// condition, not user error: it is logged and surfaced as
/// [`CoreError::Inconsistent`] so the caller shows an unresolved session
/// instead of silently redirecting.
///
/// Idempotent; at most two lookups, no writes.
pub async fn resolve(store: &dyn Store, token: Option<&str>) -> Result<Resolution, CoreError> {
    let token = match token {
        None | Some("") => return Ok(Resolution::Empty),
        Some(t) => t,
    };

    // Ids are storage-generated UUIDs; anything else can match nothing.
    let Ok(id) = token.parse::<Uuid>() else {
        return Ok(Resolution::NotFound);
    };

    if let Some(secret) = store.get_secret(id).await? {
        return match store.get_project(secret.project_id).await? {
            Some(project) => Ok(Resolution::Resolved {
                project_id: project.id,
                secret_id: Some(id),
            }),
            None => {
                tracing::error!(
                    secret_id = %id,
                    project_id = %secret.project_id,
                    "secret references a missing project"
                );
                Err(CoreError::Inconsistent(format!(
                    "secret {id} references missing project {}",
                    secret.project_id
                )))
            }
        };
    }

    match store.get_project(id).await? {
        Some(project) => Ok(Resolution::Resolved {
            project_id: project.id,
            secret_id: None,
        }),
        None => Ok(Resolution::NotFound),
    }
}

/// A secret that passed the gate, paired with the project it authorizes.
#[derive(Debug, Clone, Copy)]
pub struct Grant {
    pub project_id: Uuid,
    pub secret_id: Uuid,
}

/// Validate a claimed secret immediately before a mutation.
///
/// Runs on every mutating call with no caching of trust: deleting a secret
/// row revokes all future mutations even for clients still holding the
/// token in memory, at the cost of one extra lookup per write.
pub async fn authorize(store: &dyn Store, secret_id: Option<Uuid>) -> Result<Grant, CoreError> {
    let secret_id =
        secret_id.ok_or_else(|| CoreError::Denied("session holds no edit secret".into()))?;

    let secret = store
        .get_secret(secret_id)
        .await?
        .ok_or_else(|| CoreError::Denied("unknown or revoked secret".into()))?;

    match store.get_project(secret.project_id).await? {
        Some(project) => Ok(Grant {
            project_id: project.id,
            secret_id,
        }),
        None => Err(CoreError::Denied(
            "secret no longer resolves to a project".into(),
        )),
    }
}
