//! Integration tests for the HTTP client using wiremock mock server

use todo_cli::Client;
use todo_core::{AuthApi, CoreError, TaskApi, TaskDraft, TaskPatch, TaskQuery, TaskSort};

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path, query_param},
};

fn task_json(id: i64, title: &str, completed: bool) -> serde_json::Value {
    json!({
        "id": id,
        "user_id": "user-1",
        "title": title,
        "description": null,
        "completed": completed,
        "created_at": "2024-01-01T10:00:00.123456",
        "updated_at": "2024-01-01T10:00:00.123456"
    })
}

// =========================================================================
// Auth
// =========================================================================

#[tokio::test]
async fn test_login_success_returns_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"email": "ada@example.com", "password": "secret123"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "abc123",
            "token_type": "bearer",
            "expires_in": 1800
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None);
    let response = client.login("ada@example.com", "secret123").await.unwrap();

    assert!(response.success);
    let token = response.data.unwrap();
    assert_eq!(token.token(), Some("abc123"));
}

#[tokio::test]
async fn test_login_unauthorized_becomes_failure_with_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Incorrect email or password"
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None);
    let response = client.login("ada@example.com", "wrong-pass").await.unwrap();

    assert!(!response.success);
    assert_eq!(response.error_message(), Some("Incorrect email or password"));
    assert_eq!(
        response.error.unwrap().code.as_deref(),
        Some("401")
    );
}

#[tokio::test]
async fn test_register_sends_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .and(body_json(json!({
            "email": "ada@example.com",
            "name": "Ada Lovelace",
            "password": "secret123"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "fresh",
            "token_type": "bearer",
            "expires_in": 1800
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None);
    let response = client
        .register("ada@example.com", "Ada Lovelace", "secret123")
        .await
        .unwrap();

    assert!(response.success);
}

#[tokio::test]
async fn test_current_user_sends_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(header("Authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "user-1",
            "email": "ada@example.com",
            "name": "Ada Lovelace",
            "created_at": "2024-01-01T10:00:00",
            "updated_at": "2024-01-01T10:00:00"
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), Some("abc123"));
    let profile = client.current_user().await.unwrap().into_result().unwrap();

    assert_eq!(profile.email, "ada@example.com");
    assert_eq!(profile.name, "Ada Lovelace");
}

// =========================================================================
// Tasks
// =========================================================================

#[tokio::test]
async fn test_list_tasks_with_sort() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .and(query_param("sort", "title"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tasks": [task_json(1, "Buy milk", false), task_json(2, "Write report", true)],
            "total": 2,
            "status_filter": null,
            "sort_order": "title"
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), Some("abc123"));
    let list = client
        .list_tasks(&TaskQuery::sorted(Some(TaskSort::Title)))
        .await
        .unwrap()
        .into_result()
        .unwrap();

    assert_eq!(list.total, 2);
    assert_eq!(list.tasks[0].title, "Buy milk");
    assert!(list.tasks[1].completed);
}

#[tokio::test]
async fn test_get_task_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks/42"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "detail": "Task not found"
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), Some("abc123"));
    let result = client.get_task(42).await.unwrap().into_result();

    assert!(matches!(
        result,
        Err(CoreError::Rejected { ref message, .. }) if message == "Task not found"
    ));
}

#[tokio::test]
async fn test_create_task_posts_draft() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .and(body_json(json!({"title": "Buy milk", "description": "2 liters"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "task_id": 7,
            "status": "created",
            "title": "Buy milk"
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), Some("abc123"));
    let ack = client
        .create_task(&TaskDraft::new("Buy milk", "2 liters"))
        .await
        .unwrap()
        .into_result()
        .unwrap();

    assert_eq!(ack.task_id, 7);
    assert_eq!(ack.status, "created");
}

#[tokio::test]
async fn test_update_task_sends_only_set_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/tasks/3"))
        .and(body_json(json!({"completed": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "task_id": 3,
            "status": "updated",
            "title": "Buy milk",
            "completed": true
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), Some("abc123"));
    let ack = client
        .update_task(3, &TaskPatch::completed(true))
        .await
        .unwrap()
        .into_result()
        .unwrap();

    assert_eq!(ack.completed, Some(true));
}

#[tokio::test]
async fn test_delete_task() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/tasks/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "task_id": 3,
            "status": "deleted",
            "title": "Buy milk"
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), Some("abc123"));
    let ack = client.delete_task(3).await.unwrap().into_result().unwrap();

    assert_eq!(ack.status, "deleted");
}

// =========================================================================
// Failures
// =========================================================================

#[tokio::test]
async fn test_validation_detail_list_joined() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [{"loc": ["body", "title"], "msg": "field required", "type": "missing"}]
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), Some("abc123"));
    let response = client
        .create_task(&TaskDraft::new("x", ""))
        .await
        .unwrap();

    assert!(!response.success);
    assert_eq!(response.error_message(), Some("field required"));
}

#[tokio::test]
async fn test_error_without_body_uses_status_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), Some("abc123"));
    let response = client.list_tasks(&TaskQuery::default()).await.unwrap();

    assert!(!response.success);
    assert_eq!(response.error_message(), Some("Service Unavailable"));
}

#[tokio::test]
async fn test_garbage_success_body_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), Some("abc123"));
    let result = client.list_tasks(&TaskQuery::default()).await;

    assert!(matches!(result, Err(CoreError::Transport { .. })));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Nothing listens on port 9 (discard) in the test environment
    let client = Client::new("http://127.0.0.1:9", None);
    let result = client.login("ada@example.com", "secret123").await;

    assert!(matches!(result, Err(CoreError::Transport { .. })));
}

#[tokio::test]
async fn test_health() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "healthy",
            "message": "Todo API is running"
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None);
    let status = client.health().await.unwrap().into_result().unwrap();

    assert!(status.is_healthy());
}
