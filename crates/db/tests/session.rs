//! Tests for the stateful client session and its optimistic local mirror.

mod common;

use std::sync::Arc;

use assert_matches::assert_matches;
use chrono::{Duration, Utc};

use common::{lead_data, project_data, project_data_with_frame};
use leadlink_core::error::CoreError;
use leadlink_core::lead::{LeadData, LeadStatus};
use leadlink_core::project::TimeFrame;
use leadlink_core::projection;
use leadlink_db::access::Resolution;
use leadlink_db::mem::MemStore;
use leadlink_db::session::Session;
use leadlink_db::{ops, Store};

fn shared_store() -> Arc<MemStore> {
    Arc::new(MemStore::new())
}

#[tokio::test]
async fn fresh_session_is_blank() {
    let session = Session::new(shared_store());
    assert!(!session.has_secret());
    assert!(session.project().is_none());
    assert!(session.leads().is_empty());
}

#[tokio::test]
async fn create_project_populates_the_mirror_without_refetch() {
    let store = shared_store();
    let mut session = Session::new(store.clone());

    let (project_id, secret_id) = session
        .create_project(project_data("Q1 Outreach", 10))
        .await
        .unwrap();

    assert!(session.has_secret());
    assert_eq!(session.project_id(), Some(project_id));
    let mirrored = session.project().unwrap();
    assert_eq!(mirrored.name, "Q1 Outreach");
    assert_eq!(mirrored.leads_goal, 10);

    // The mirror matches what storage actually accepted.
    let stored = store.get_project(project_id).await.unwrap().unwrap();
    assert_eq!(*mirrored, stored);
    assert!(store.get_secret(secret_id).await.unwrap().is_some());
}

#[tokio::test]
async fn resolving_a_secret_token_loads_project_and_leads() {
    let store = shared_store();
    let (project_id, secret_id) = ops::create_project(store.as_ref(), &project_data("Q1", 10))
        .await
        .unwrap();
    ops::add_lead(
        store.as_ref(),
        project_id,
        &lead_data("Acme", LeadStatus::New),
    )
    .await
    .unwrap();

    let mut session = Session::new(store);
    let resolution = session.resolve(Some(&secret_id.to_string())).await.unwrap();

    assert_matches!(resolution, Resolution::Resolved { .. });
    assert!(session.has_secret());
    assert_eq!(session.leads().len(), 1);
    assert_eq!(session.leads()[0].name, "Acme");
}

#[tokio::test]
async fn resolving_a_public_id_yields_a_read_only_session() {
    let store = shared_store();
    let (project_id, _) = ops::create_project(store.as_ref(), &project_data("Q1", 10))
        .await
        .unwrap();

    let mut session = Session::new(store);
    session
        .resolve(Some(&project_id.to_string()))
        .await
        .unwrap();

    assert!(!session.has_secret());
    assert!(session.project().is_some());

    let err = session
        .update_project(project_data("Hijacked", 1))
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::Denied(_));
}

#[tokio::test]
async fn resolving_an_unknown_token_leaves_the_session_blank() {
    let store = shared_store();
    let mut session = Session::new(store);
    let resolution = session
        .resolve(Some(&uuid::Uuid::new_v4().to_string()))
        .await
        .unwrap();

    assert_matches!(resolution, Resolution::NotFound);
    assert!(session.project().is_none());
}

#[tokio::test]
async fn lead_mutations_keep_the_mirror_in_step() {
    let store = shared_store();
    let mut session = Session::new(store.clone());
    let (project_id, _) = session
        .create_project(project_data("Q1 Outreach", 10))
        .await
        .unwrap();

    let acme = session
        .add_lead(lead_data("Acme", LeadStatus::New))
        .await
        .unwrap();
    session
        .add_lead(lead_data("Globex", LeadStatus::Contacted))
        .await
        .unwrap();
    assert_eq!(session.leads().len(), 2);

    session
        .update_lead(acme, lead_data("Acme", LeadStatus::Won))
        .await
        .unwrap();
    assert_eq!(session.leads()[0].status, LeadStatus::Won);

    // Mirror agrees with storage after every accepted write.
    let stored = store.list_leads(project_id).await.unwrap();
    assert_eq!(session.leads(), &stored[..]);

    session.delete_lead(acme).await.unwrap();
    assert_eq!(session.leads().len(), 1);
    assert_eq!(session.leads()[0].name, "Globex");
}

#[tokio::test]
async fn delete_project_resets_the_mirror() {
    let store = shared_store();
    let mut session = Session::new(store.clone());
    session
        .create_project(project_data("Q1 Outreach", 10))
        .await
        .unwrap();
    session
        .add_lead(lead_data("Acme", LeadStatus::New))
        .await
        .unwrap();

    session.delete_project().await.unwrap();

    assert!(!session.has_secret());
    assert!(session.project().is_none());
    assert!(session.leads().is_empty());
}

#[tokio::test]
async fn lead_mutations_without_a_project_are_rejected() {
    let mut session = Session::new(shared_store());
    let err = session
        .add_lead(lead_data("Acme", LeadStatus::New))
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::Validation(_));
}

#[tokio::test]
async fn end_to_end_scenario_reaches_ten_percent_won() {
    let store = shared_store();
    let mut session = Session::new(store);
    let now = Utc::now();

    let frame = TimeFrame {
        start: Some(now),
        end: Some(now + Duration::days(30)),
    };
    session
        .create_project(project_data_with_frame("Q1 Outreach", 10, frame))
        .await
        .unwrap();

    let lead_id = session
        .add_lead(LeadData {
            name: "Acme".into(),
            description: "cold email".into(),
            status: LeadStatus::New,
            interactions: vec![],
        })
        .await
        .unwrap();

    assert_eq!(session.leads().len(), 1);
    let lead = &session.leads()[0];
    assert_eq!(lead.id, lead_id);
    assert_eq!(lead.name, "Acme");
    assert_eq!(lead.status, LeadStatus::New);

    session
        .update_lead(
            lead_id,
            LeadData {
                name: "Acme".into(),
                description: "cold email".into(),
                status: LeadStatus::Won,
                interactions: vec![],
            },
        )
        .await
        .unwrap();

    let snapshot = projection::snapshot(session.project().unwrap(), session.leads(), now);
    assert_eq!(snapshot.won_count, 1);
    assert_eq!(snapshot.won_ratio, 0.1);
    assert_eq!(snapshot.days_left, Some(30));
}
