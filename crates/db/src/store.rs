//! The storage collaborator seam.

use async_trait::async_trait;
use uuid::Uuid;

use leadlink_core::error::CoreError;
use leadlink_core::lead::{Lead, LeadData};
use leadlink_core::project::{Project, ProjectData, Secret};

/// A storage operation failed at the backend.
///
/// Deliberately opaque: the facade maps it to [`CoreError::Write`] and the
/// caller decides whether to retry.
#[derive(Debug, thiserror::Error)]
#[error("storage operation failed: {0}")]
pub struct StoreError(pub String);

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError(err.to_string())
    }
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        CoreError::Write(err.0)
    }
}

/// Document-style storage over four logical collections: `projects`,
/// `secrets`, and a per-project `leads` sub-collection.
///
/// Ids are assigned by the backend on insert. There is no cross-collection
/// transaction: the project+secret write pairs in create/delete are two
/// independent calls, and a failure between them leaves the documented
/// partial states (an orphan project, or a dangling secret).
///
/// Mutations return `Ok(false)` (or `Ok(None)` for reads) when the target
/// row is absent; `Err` is reserved for backend failures.
#[async_trait]
pub trait Store: Send + Sync {
    // -- projects --

    async fn insert_project(&self, data: &ProjectData) -> Result<Uuid, StoreError>;
    async fn get_project(&self, id: Uuid) -> Result<Option<Project>, StoreError>;
    /// Full replace of all project fields.
    async fn update_project(&self, id: Uuid, data: &ProjectData) -> Result<bool, StoreError>;
    async fn delete_project(&self, id: Uuid) -> Result<bool, StoreError>;

    // -- secrets --

    async fn insert_secret(&self, project_id: Uuid) -> Result<Uuid, StoreError>;
    async fn get_secret(&self, id: Uuid) -> Result<Option<Secret>, StoreError>;
    async fn delete_secret(&self, id: Uuid) -> Result<bool, StoreError>;

    // -- leads (scoped under one project) --

    async fn insert_lead(&self, project_id: Uuid, data: &LeadData) -> Result<Uuid, StoreError>;
    /// Full-field overwrite of the identified lead.
    async fn update_lead(
        &self,
        project_id: Uuid,
        lead_id: Uuid,
        data: &LeadData,
    ) -> Result<bool, StoreError>;
    async fn delete_lead(&self, project_id: Uuid, lead_id: Uuid) -> Result<bool, StoreError>;
    /// All leads of a project in insertion order. Ordering is a display
    /// concern only and not guaranteed stable across backends.
    async fn list_leads(&self, project_id: Uuid) -> Result<Vec<Lead>, StoreError>;
}
