//! Stateful client session over the operation facade.
//!
//! One `Session` corresponds to one open client (one browser tab in the
//! original product): it holds the resolved project id, the secret if the
//! session arrived through an edit link, and an optimistic local mirror of
//! the project and its leads. After any successful mutation the mirror
//! reflects exactly the accepted write; it is never reconciled against a
//! second read. Concurrent editors are last-write-wins by design.
//!
//! The session's lifecycle (created at session start, torn down at session
//! end) belongs to whatever owns the transport; nothing here is global.

use std::sync::Arc;

use uuid::Uuid;

use crate::access::{self, Resolution};
use crate::ops;
use crate::store::Store;
use leadlink_core::error::CoreError;
use leadlink_core::lead::{Lead, LeadData};
use leadlink_core::project::{Project, ProjectData};

pub struct Session {
    store: Arc<dyn Store>,
    secret_id: Option<Uuid>,
    project_id: Option<Uuid>,
    project: Option<Project>,
    leads: Vec<Lead>,
}

impl Session {
    /// A fresh session with no project: the state before any token is
    /// presented or after resolution came back empty.
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            secret_id: None,
            project_id: None,
            project: None,
            leads: Vec::new(),
        }
    }

    // -- read access to the mirror --

    /// Whether this session arrived through an edit link.
    pub fn has_secret(&self) -> bool {
        self.secret_id.is_some()
    }

    pub fn project_id(&self) -> Option<Uuid> {
        self.project_id
    }

    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    // -- resolution --

    /// Establish the session from an opaque path token, loading the project
    /// and its leads into the mirror on success.
    ///
    /// `Empty` and `NotFound` leave the session blank; the caller decides
    /// whether to show the fresh-project screen or redirect.
    pub async fn resolve(&mut self, token: Option<&str>) -> Result<Resolution, CoreError> {
        let resolution = access::resolve(self.store.as_ref(), token).await?;
        match resolution {
            Resolution::Resolved {
                project_id,
                secret_id,
            } => {
                let project = ops::get_project(self.store.as_ref(), project_id).await?;
                let leads = ops::list_leads(self.store.as_ref(), project_id).await?;
                self.secret_id = secret_id;
                self.project_id = Some(project_id);
                self.project = Some(project);
                self.leads = leads;
            }
            Resolution::Empty | Resolution::NotFound => self.reset(),
        }
        Ok(resolution)
    }

    // -- project mutations --

    /// Create a project and take possession of its freshly minted secret.
    pub async fn create_project(
        &mut self,
        data: ProjectData,
    ) -> Result<(Uuid, Uuid), CoreError> {
        let (project_id, secret_id) = ops::create_project(self.store.as_ref(), &data).await?;
        self.secret_id = Some(secret_id);
        self.project_id = Some(project_id);
        self.project = Some(Project::from_data(project_id, data));
        self.leads.clear();
        Ok((project_id, secret_id))
    }

    /// Full-replace the project's fields using the held secret.
    pub async fn update_project(&mut self, data: ProjectData) -> Result<(), CoreError> {
        ops::update_project(self.store.as_ref(), self.secret_id, &data).await?;
        if let Some(project_id) = self.project_id {
            self.project = Some(Project::from_data(project_id, data));
        }
        Ok(())
    }

    /// Delete the project and its secret using the held secret.
    ///
    /// The mirror is reset regardless of outcome: the session no longer
    /// represents a usable project either way.
    pub async fn delete_project(&mut self) -> Result<(), CoreError> {
        let result = ops::delete_project(self.store.as_ref(), self.secret_id).await;
        self.reset();
        result
    }

    // -- lead mutations --

    /// Append a lead to the session's project, mirroring the accepted write.
    pub async fn add_lead(&mut self, data: LeadData) -> Result<Uuid, CoreError> {
        let project_id = self.require_project()?;
        let lead_id = ops::add_lead(self.store.as_ref(), project_id, &data).await?;
        self.leads.push(Lead::from_data(lead_id, data));
        Ok(lead_id)
    }

    /// Full-field overwrite of one of the session's leads.
    pub async fn update_lead(&mut self, lead_id: Uuid, data: LeadData) -> Result<(), CoreError> {
        let project_id = self.require_project()?;
        ops::update_lead(self.store.as_ref(), project_id, lead_id, &data).await?;
        if let Some(lead) = self.leads.iter_mut().find(|l| l.id == lead_id) {
            *lead = Lead::from_data(lead_id, data);
        }
        Ok(())
    }

    /// Remove one of the session's leads.
    pub async fn delete_lead(&mut self, lead_id: Uuid) -> Result<(), CoreError> {
        let project_id = self.require_project()?;
        ops::delete_lead(self.store.as_ref(), project_id, lead_id).await?;
        self.leads.retain(|l| l.id != lead_id);
        Ok(())
    }

    fn require_project(&self) -> Result<Uuid, CoreError> {
        self.project_id
            .ok_or_else(|| CoreError::Validation("session has no project".into()))
    }

    fn reset(&mut self) {
        self.secret_id = None;
        self.project_id = None;
        self.project = None;
        self.leads.clear();
    }
}
