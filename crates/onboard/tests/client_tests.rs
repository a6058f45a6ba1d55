//! Client tests against a live server on an ephemeral port.

use onboard::client::ProfileClient;
use onboard::draft::ProfileDraft;
use onboard::profile::SkillType;

mod common;
use common::test_app;

async fn spawn_server() -> ProfileClient {
    let app = test_app().await;
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app.router).await.unwrap();
    });

    ProfileClient::new(&format!("http://{addr}/"))
}

fn complete_draft(email: &str) -> ProfileDraft {
    let mut draft = ProfileDraft::new();
    draft.email = email.to_string();
    draft.first_name = "Demo".to_string();
    draft.class_year = "Sophomore".to_string();
    draft.toggle_interest("Tech - Data Science");
    draft.add_skill("SQL", SkillType::Technical);
    draft.add_skill("Teamwork", SkillType::Soft);
    draft.toggle_goal("Mentorship");
    draft
}

#[tokio::test]
async fn test_client_health() {
    let client = spawn_server().await;

    let health = client.health().await.unwrap();
    assert_eq!(health.status, "OK");
    assert!(!client.base_url().ends_with('/'));
}

#[tokio::test]
async fn test_client_submit_and_fetch() {
    let client = spawn_server().await;
    let draft = complete_draft("first+tag@b.co");

    let saved = client.submit(&draft).await.unwrap();
    assert!(saved.success);

    let detail = client.get_profile("first+tag@b.co").await.unwrap().unwrap();
    assert_eq!(detail.profile.id, saved.user_id);
    assert_eq!(detail.profile.first_name.as_deref(), Some("Demo"));
    assert_eq!(detail.profile.last_name.as_deref(), Some(""));
    assert_eq!(detail.interests, vec!["Tech - Data Science"]);
    assert_eq!(detail.skills, draft.skills);
    assert_eq!(detail.goals, vec!["Mentorship"]);

    let listed = client.list_profiles().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].email, "first+tag@b.co");
}

#[tokio::test]
async fn test_client_missing_profile_is_none() {
    let client = spawn_server().await;

    assert!(client.get_profile("ghost@b.co").await.unwrap().is_none());
}

#[tokio::test]
async fn test_client_surfaces_missing_fields() {
    let client = spawn_server().await;
    let mut draft = complete_draft("a@b.co");
    draft.class_year.clear();

    let err = client.submit(&draft).await.unwrap_err().to_string();
    assert!(err.contains("Missing required fields"), "{err}");
    assert!(err.contains("classYear"), "{err}");
}
