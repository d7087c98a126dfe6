//! In-memory implementation of [`Store`] for tests and local development.
//!
//! Leads are kept in per-project `Vec`s so insertion order is preserved,
//! matching the display-ordering contract of `list_leads`.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::store::{Store, StoreError};
use leadlink_core::lead::{Lead, LeadData};
use leadlink_core::project::{Project, ProjectData, Secret};

#[derive(Default)]
struct Collections {
    projects: HashMap<Uuid, Project>,
    secrets: HashMap<Uuid, Secret>,
    leads: HashMap<Uuid, Vec<Lead>>,
}

/// Mutex-guarded map-backed store. Cheap to construct per test.
#[derive(Default)]
pub struct MemStore {
    inner: Mutex<Collections>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Collections>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError("store mutex poisoned".into()))
    }
}

#[async_trait]
impl Store for MemStore {
    async fn insert_project(&self, data: &ProjectData) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        let mut inner = self.lock()?;
        inner
            .projects
            .insert(id, Project::from_data(id, data.clone()));
        Ok(id)
    }

    async fn get_project(&self, id: Uuid) -> Result<Option<Project>, StoreError> {
        Ok(self.lock()?.projects.get(&id).cloned())
    }

    async fn update_project(&self, id: Uuid, data: &ProjectData) -> Result<bool, StoreError> {
        let mut inner = self.lock()?;
        match inner.projects.get_mut(&id) {
            Some(project) => {
                *project = Project::from_data(id, data.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_project(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.lock()?.projects.remove(&id).is_some())
    }

    async fn insert_secret(&self, project_id: Uuid) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        self.lock()?.secrets.insert(id, Secret { id, project_id });
        Ok(id)
    }

    async fn get_secret(&self, id: Uuid) -> Result<Option<Secret>, StoreError> {
        Ok(self.lock()?.secrets.get(&id).copied())
    }

    async fn delete_secret(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.lock()?.secrets.remove(&id).is_some())
    }

    async fn insert_lead(&self, project_id: Uuid, data: &LeadData) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        self.lock()?
            .leads
            .entry(project_id)
            .or_default()
            .push(Lead::from_data(id, data.clone()));
        Ok(id)
    }

    async fn update_lead(
        &self,
        project_id: Uuid,
        lead_id: Uuid,
        data: &LeadData,
    ) -> Result<bool, StoreError> {
        let mut inner = self.lock()?;
        let Some(leads) = inner.leads.get_mut(&project_id) else {
            return Ok(false);
        };
        match leads.iter_mut().find(|l| l.id == lead_id) {
            Some(lead) => {
                *lead = Lead::from_data(lead_id, data.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_lead(&self, project_id: Uuid, lead_id: Uuid) -> Result<bool, StoreError> {
        let mut inner = self.lock()?;
        let Some(leads) = inner.leads.get_mut(&project_id) else {
            return Ok(false);
        };
        let before = leads.len();
        leads.retain(|l| l.id != lead_id);
        Ok(leads.len() < before)
    }

    async fn list_leads(&self, project_id: Uuid) -> Result<Vec<Lead>, StoreError> {
        let inner = self.lock()?;
        Ok(inner.leads.get(&project_id).cloned().unwrap_or_default())
    }
}
