//! End-to-end tests: `NotesApp` talking to the real API router over TCP.
//!
//! Each test binds the server to an ephemeral port on localhost, backed by
//! a fresh in-memory store.

use std::sync::Arc;

use eznotes_api::config::{ServerConfig, StoreBackend};
use eznotes_api::router::build_app_router;
use eznotes_api::state::AppState;
use eznotes_client::app::{MSG_CREATED, MSG_DELETED, MSG_UPDATED};
use eznotes_client::{FormMode, NotesApi, NotesApp};
use eznotes_db::InMemoryNoteStore;

/// Start the API on a random port and return its `/api/notes` URL.
async fn spawn_server() -> String {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store: StoreBackend::Memory,
        database_url: None,
        db_max_connections: 1,
    };
    let app = build_app_router(AppState::new(Arc::new(InMemoryNoteStore::new()), config));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/api/notes")
}

async fn new_app() -> NotesApp {
    let mut app = NotesApp::new(NotesApi::new(spawn_server().await));
    app.refresh().await;
    app
}

#[tokio::test]
async fn initial_refresh_loads_empty_list() {
    let app = new_app().await;

    assert!(!app.state().is_loading());
    assert!(app.state().notes().is_empty());
    assert!(app.state().error().is_none());
}

#[tokio::test]
async fn submit_in_create_mode_creates_and_refreshes() {
    let mut app = new_app().await;
    app.state_mut().set_title("Groceries");
    app.state_mut().set_description("Milk, eggs");

    let note = app.submit().await.expect("note should be created");

    assert_eq!(note.title, "Groceries");
    assert_eq!(note.created_at, note.updated_at);
    assert_eq!(app.state().notes(), std::slice::from_ref(&note));
    assert_eq!(app.state().success(), Some(MSG_CREATED));
    assert_eq!(app.state().form().title, "");
    assert_eq!(app.state().mode(), &FormMode::Create);
}

#[tokio::test]
async fn blank_draft_is_not_submitted() {
    let mut app = new_app().await;
    app.state_mut().set_title("   ");
    app.state_mut().set_description("body");

    assert!(app.submit().await.is_none());

    app.refresh().await;
    assert!(app.state().notes().is_empty());
    assert!(app.state().success().is_none());
}

#[tokio::test]
async fn editing_submits_update_and_returns_to_create() {
    let mut app = new_app().await;
    app.state_mut().set_title("Draft");
    app.state_mut().set_description("v1");
    let created = app.submit().await.unwrap();

    assert!(app.begin_edit(created.id));
    assert_eq!(app.state().editing_id(), Some(created.id));
    app.state_mut().set_description("v2");

    let updated = app.submit().await.expect("note should be updated");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.description, "v2");
    assert!(updated.updated_at > created.updated_at);
    assert_eq!(app.state().mode(), &FormMode::Create);
    assert_eq!(app.state().success(), Some(MSG_UPDATED));
    assert_eq!(app.state().notes()[0].description, "v2");
}

#[tokio::test]
async fn declined_delete_sends_nothing() {
    let mut app = new_app().await;
    app.state_mut().set_title("Keep");
    app.state_mut().set_description("me");
    let note = app.submit().await.unwrap();

    let mut asked = None;
    let deleted = app
        .delete(note.id, |question| {
            asked = Some(question.to_string());
            false
        })
        .await;

    assert!(!deleted);
    assert_eq!(
        asked.as_deref(),
        Some("Are you sure you want to delete this note?")
    );
    app.refresh().await;
    assert_eq!(app.state().notes().len(), 1);
}

#[tokio::test]
async fn confirmed_delete_removes_note() {
    let mut app = new_app().await;
    app.state_mut().set_title("Gone");
    app.state_mut().set_description("soon");
    let note = app.submit().await.unwrap();

    assert!(app.delete(note.id, |_| true).await);

    assert!(app.state().notes().is_empty());
    assert_eq!(app.state().success(), Some(MSG_DELETED));
}

#[tokio::test]
async fn failed_delete_sets_error_and_keeps_list() {
    let mut app = new_app().await;
    app.state_mut().set_title("Stays");
    app.state_mut().set_description("here");
    app.submit().await.unwrap();
    let before = app.state().notes().to_vec();

    let missing = uuid::Uuid::now_v7();
    assert!(!app.delete(missing, |_| true).await);

    assert_eq!(app.state().error(), Some("Error deleting note"));
    assert_eq!(app.state().notes(), before.as_slice());
}

#[tokio::test]
async fn search_filters_loaded_notes_locally() {
    let mut app = new_app().await;
    for (title, description) in [("Alpha", "first"), ("Beta", "second")] {
        app.state_mut().set_title(title);
        app.state_mut().set_description(description);
        app.submit().await.unwrap();
    }

    app.state_mut().set_search_term("alp");
    let titles: Vec<_> = app
        .state()
        .filtered_notes()
        .iter()
        .map(|n| n.title.clone())
        .collect();
    assert_eq!(titles, vec!["Alpha"]);
    assert_eq!(app.state().count_label(), "2 notes saved");
}

#[tokio::test]
async fn unreachable_server_reports_connection_error() {
    // Bind then drop a listener so the port is almost certainly closed.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut app = NotesApp::new(NotesApi::new(format!("http://{addr}/api/notes")));
    app.refresh().await;

    assert!(!app.state().is_loading());
    let error = app.state().error().expect("error should be set");
    assert!(error.starts_with("Connection error: "), "got {error}");
}

#[tokio::test]
async fn api_get_round_trips_created_note() {
    let api = NotesApi::new(spawn_server().await);
    let draft = eznotes_client::models::NoteDraft {
        title: "T".into(),
        description: "D".into(),
    };

    let created = api.create(&draft).await.unwrap();
    let fetched = api.get(created.id).await.unwrap();
    assert_eq!(fetched, created);

    let confirmation = api.delete(created.id).await.unwrap();
    assert_eq!(confirmation, format!("Note deleted {}", created.id));

    let err = api.get(created.id).await.unwrap_err();
    match err {
        eznotes_client::ClientError::Status { status, body } => {
            assert_eq!(status.as_u16(), 404);
            assert!(body.contains("Note not found."));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}
