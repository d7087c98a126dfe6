//! The project/lead operation facade.
//!
//! Each function is one logical transaction at the storage boundary. There
//! is deliberately no cross-collection transaction around the
//! project+secret write pairs: a failure between the two writes leaves a
//! documented partial state (see `create_project` and `delete_project`).
//!
//! Lead writes are keyed by the public project id alone; possession of the
//! edit link is enforced in the client flow, not here. Project writes are
//! always gated through [`access::authorize`].

use uuid::Uuid;

use crate::access;
use crate::store::Store;
use leadlink_core::error::CoreError;
use leadlink_core::lead::{Lead, LeadData};
use leadlink_core::project::{Project, ProjectData};
use leadlink_core::validation::validate_input;

/// Create a project and mint its secret, returning `(project_id, secret_id)`.
///
/// Two independent writes. If the secret insert fails after the project
/// insert succeeded, the project exists but is permanently unreachable for
/// edits: readable through `get_project`, never authorizable. That orphan
/// state is surfaced as [`CoreError::Write`], not repaired.
pub async fn create_project(
    store: &dyn Store,
    data: &ProjectData,
) -> Result<(Uuid, Uuid), CoreError> {
    validate_input(data)?;
    let project_id = store.insert_project(data).await?;
    let secret_id = store.insert_secret(project_id).await?;
    tracing::info!(%project_id, "project created");
    Ok((project_id, secret_id))
}

/// Fetch a project by its public id.
pub async fn get_project(store: &dyn Store, project_id: Uuid) -> Result<Project, CoreError> {
    store
        .get_project(project_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        })
}

/// Full-replace a project's fields, gated on the presented secret.
pub async fn update_project(
    store: &dyn Store,
    secret_id: Option<Uuid>,
    data: &ProjectData,
) -> Result<(), CoreError> {
    validate_input(data)?;
    let grant = access::authorize(store, secret_id).await?;
    if store.update_project(grant.project_id, data).await? {
        Ok(())
    } else {
        // The gate saw the project; losing it here is a concurrent delete.
        Err(CoreError::NotFound {
            entity: "Project",
            id: grant.project_id,
        })
    }
}

/// Delete a project and its secret, gated on the presented secret.
///
/// Delete order is project first, then secret: a mid-failure leaves a
/// dangling secret, which the resolver reports as inconsistent storage
/// rather than a usable capability.
pub async fn delete_project(store: &dyn Store, secret_id: Option<Uuid>) -> Result<(), CoreError> {
    let grant = access::authorize(store, secret_id).await?;
    store.delete_project(grant.project_id).await?;
    store.delete_secret(grant.secret_id).await?;
    tracing::info!(project_id = %grant.project_id, "project and secret deleted");
    Ok(())
}

/// Append a lead to a project's collection, returning the assigned id.
pub async fn add_lead(
    store: &dyn Store,
    project_id: Uuid,
    data: &LeadData,
) -> Result<Uuid, CoreError> {
    validate_input(data)?;
    let lead_id = store.insert_lead(project_id, data).await?;
    Ok(lead_id)
}

/// Full-field overwrite of an existing lead.
pub async fn update_lead(
    store: &dyn Store,
    project_id: Uuid,
    lead_id: Uuid,
    data: &LeadData,
) -> Result<(), CoreError> {
    validate_input(data)?;
    if store.update_lead(project_id, lead_id, data).await? {
        Ok(())
    } else {
        Err(CoreError::NotFound {
            entity: "Lead",
            id: lead_id,
        })
    }
}

/// Remove a lead from a project's collection.
pub async fn delete_lead(
    store: &dyn Store,
    project_id: Uuid,
    lead_id: Uuid,
) -> Result<(), CoreError> {
    if store.delete_lead(project_id, lead_id).await? {
        Ok(())
    } else {
        Err(CoreError::NotFound {
            entity: "Lead",
            id: lead_id,
        })
    }
}

/// All leads of a project, in storage insertion order (display only).
pub async fn list_leads(store: &dyn Store, project_id: Uuid) -> Result<Vec<Lead>, CoreError> {
    Ok(store.list_leads(project_id).await?)
}
