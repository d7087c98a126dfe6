//! Shared fixtures for the storage-layer tests.

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use leadlink_core::lead::{Lead, LeadData, LeadStatus};
use leadlink_core::project::{Project, ProjectData, Secret, TimeFrame};
use leadlink_db::mem::MemStore;
use leadlink_db::{Store, StoreError};

pub fn project_data(name: &str, goal: i64) -> ProjectData {
    ProjectData {
        name: name.into(),
        time_frame: None,
        leads_goal: goal,
    }
}

pub fn project_data_with_frame(name: &str, goal: i64, frame: TimeFrame) -> ProjectData {
    ProjectData {
        name: name.into(),
        time_frame: Some(frame),
        leads_goal: goal,
    }
}

pub fn lead_data(name: &str, status: LeadStatus) -> LeadData {
    LeadData {
        name: name.into(),
        description: "cold email".into(),
        status,
        interactions: vec![],
    }
}

/// Store wrapper that fails every secret insert, for exercising the
/// partial-failure path of project creation. Records the project ids it
/// passed through so tests can find the resulting orphan.
#[derive(Default)]
pub struct SecretWriteFailure {
    inner: MemStore,
    pub created_projects: Mutex<Vec<Uuid>>,
}

#[async_trait]
impl Store for SecretWriteFailure {
    async fn insert_project(&self, data: &ProjectData) -> Result<Uuid, StoreError> {
        let id = self.inner.insert_project(data).await?;
        self.created_projects
            .lock()
            .expect("test mutex poisoned")
            .push(id);
        Ok(id)
    }

    async fn get_project(&self, id: Uuid) -> Result<Option<Project>, StoreError> {
        self.inner.get_project(id).await
    }

    async fn update_project(&self, id: Uuid, data: &ProjectData) -> Result<bool, StoreError> {
        self.inner.update_project(id, data).await
    }

    async fn delete_project(&self, id: Uuid) -> Result<bool, StoreError> {
        self.inner.delete_project(id).await
    }

    async fn insert_secret(&self, _project_id: Uuid) -> Result<Uuid, StoreError> {
        Err(StoreError("simulated secret write failure".into()))
    }

    async fn get_secret(&self, id: Uuid) -> Result<Option<Secret>, StoreError> {
        self.inner.get_secret(id).await
    }

    async fn delete_secret(&self, id: Uuid) -> Result<bool, StoreError> {
        self.inner.delete_secret(id).await
    }

    async fn insert_lead(&self, project_id: Uuid, data: &LeadData) -> Result<Uuid, StoreError> {
        self.inner.insert_lead(project_id, data).await
    }

    async fn update_lead(
        &self,
        project_id: Uuid,
        lead_id: Uuid,
        data: &LeadData,
    ) -> Result<bool, StoreError> {
        self.inner.update_lead(project_id, lead_id, data).await
    }

    async fn delete_lead(&self, project_id: Uuid, lead_id: Uuid) -> Result<bool, StoreError> {
        self.inner.delete_lead(project_id, lead_id).await
    }

    async fn list_leads(&self, project_id: Uuid) -> Result<Vec<Lead>, StoreError> {
        self.inner.list_leads(project_id).await
    }
}
