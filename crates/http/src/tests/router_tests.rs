#![expect(clippy::unwrap_used, reason = "test code")]

use axum::http::StatusCode;
use serde_json::json;

use super::{send, test_app};

#[tokio::test]
async fn health_and_version() {
    let (app, _dir) = test_app();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("ok"));

    let (status, body) = send(&app, "GET", "/api/version", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn get_board_returns_the_same_default_board_every_time() {
    let (app, _dir) = test_app();
    let (status, first) = send(&app, "GET", "/api/board", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["id"], "default-board");
    assert_eq!(first["title"], "My Kanban Board");
    assert_eq!(first["columns"].as_array().unwrap().len(), 3);

    let (_, second) = send(&app, "GET", "/api/board", None).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn create_board_requires_title() {
    let (app, _dir) = test_app();
    let (status, body) = send(&app, "POST", "/api/board", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Board title is required"}));

    let (status, _) = send(&app, "POST", "/api/board", Some(json!({"title": ""}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_json_is_a_400_with_error_body() {
    let (app, _dir) = test_app();
    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/api/tasks")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let resp = tower::ServiceExt::oneshot(app, req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(resp.into_body(), 10_000).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn create_task_validation_messages() {
    let (app, _dir) = test_app();
    let (status, body) =
        send(&app, "POST", "/api/tasks", Some(json!({"columnId": "c", "status": "todo"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Column ID, title, and status are required");

    let (status, body) = send(
        &app,
        "POST",
        "/api/tasks",
        Some(json!({"columnId": "c", "title": "t", "status": "blocked"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("blocked"));
}

#[tokio::test]
async fn create_task_in_unknown_column_is_500_with_details() {
    let (app, _dir) = test_app();
    send(&app, "GET", "/api/board", None).await;
    let (status, body) = send(
        &app,
        "POST",
        "/api/tasks",
        Some(json!({"columnId": "nope", "title": "t", "status": "todo"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to create task");
    assert!(body["details"].is_string());
}

#[tokio::test]
async fn overlong_task_title_is_400() {
    let (app, _dir) = test_app();
    let (_, board) = send(&app, "GET", "/api/board", None).await;
    let column_id = board["columns"][0]["id"].as_str().unwrap();
    let (status, _) = send(
        &app,
        "POST",
        "/api/tasks",
        Some(json!({"columnId": column_id, "title": "x".repeat(256), "status": "todo"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn move_requires_both_ids() {
    let (app, _dir) = test_app();
    let (status, body) =
        send(&app, "POST", "/api/tasks/move", Some(json!({"taskId": "t1"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Task ID and new Column ID are required");
}

#[tokio::test]
async fn moving_an_unknown_task_still_succeeds() {
    let (app, _dir) = test_app();
    let (_, board) = send(&app, "GET", "/api/board", None).await;
    let column_id = board["columns"][1]["id"].as_str().unwrap();
    let (status, body) = send(
        &app,
        "POST",
        "/api/tasks/move",
        Some(json!({"taskId": "ghost", "newColumnId": column_id})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Task moved successfully");
}

#[tokio::test]
async fn update_and_delete_unknown_task_are_404() {
    let (app, _dir) = test_app();
    send(&app, "GET", "/api/board", None).await;

    let (status, body) =
        send(&app, "PUT", "/api/tasks/ghost", Some(json!({"title": "x", "description": null}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Task not found"}));

    let (status, body) = send(&app, "DELETE", "/api/tasks/ghost", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Task not found"}));
}

#[tokio::test]
async fn update_requires_title() {
    let (app, _dir) = test_app();
    let (status, body) =
        send(&app, "PUT", "/api/tasks/any", Some(json!({"description": "d"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Task title is required");
}

#[tokio::test]
async fn board_lifecycle_end_to_end() {
    let (app, _dir) = test_app();

    let (status, board) = send(&app, "POST", "/api/board", Some(json!({"title": "Sprint 1"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    let columns = board["columns"].as_array().unwrap();
    let titles: Vec<&str> = columns.iter().map(|c| c["title"].as_str().unwrap()).collect();
    assert_eq!(titles, ["To Do", "In Progress", "Done"]);
    assert!(columns.iter().all(|c| c["tasks"].as_array().unwrap().is_empty()));
    let todo_id = columns[0]["id"].as_str().unwrap().to_owned();
    let done_id = columns[2]["id"].as_str().unwrap().to_owned();

    let (status, task) = send(
        &app,
        "POST",
        "/api/tasks",
        Some(json!({"columnId": todo_id, "title": "Write spec", "status": "todo"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(task["status"], "todo");
    assert_eq!(task["title"], "Write spec");
    assert!(task.get("description").is_none());
    let task_id = task["id"].as_str().unwrap().to_owned();

    let (status, _) = send(
        &app,
        "POST",
        "/api/tasks/move",
        Some(json!({"taskId": task_id, "newColumnId": done_id})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/tasks/{task_id}"),
        Some(json!({"title": "Write the spec", "description": "v2"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Write the spec");
    assert_eq!(updated["description"], "v2");
    // Moving does not recompute the stored status.
    assert_eq!(updated["status"], "todo");

    let (status, deleted) = send(&app, "DELETE", &format!("/api/tasks/{task_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["id"], task_id.as_str());

    let (status, _) = send(&app, "DELETE", &format!("/api/tasks/{task_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unreadable_default_board_is_500_not_a_new_board() {
    let (app, dir) = test_app();
    let (_, board) = send(&app, "GET", "/api/board", None).await;
    let column_id = board["columns"][0]["id"].as_str().unwrap();
    send(
        &app,
        "POST",
        "/api/tasks",
        Some(json!({"columnId": column_id, "title": "t", "status": "todo"})),
    )
    .await;

    let conn = rusqlite::Connection::open(dir.path().join("http.db")).unwrap();
    conn.execute("UPDATE tasks SET status = 'blocked'", []).unwrap();
    let boards: i64 = conn.query_row("SELECT COUNT(*) FROM boards", [], |r| r.get(0)).unwrap();
    assert_eq!(boards, 1);

    let (status, body) = send(&app, "GET", "/api/board", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to load board");
    let boards: i64 = conn.query_row("SELECT COUNT(*) FROM boards", [], |r| r.get(0)).unwrap();
    assert_eq!(boards, 1);
}

#[tokio::test]
async fn to_do_slug_is_stored_as_todo() {
    let (app, _dir) = test_app();
    let (_, board) = send(&app, "GET", "/api/board", None).await;
    let column_id = board["columns"][0]["id"].as_str().unwrap();
    let (status, task) = send(
        &app,
        "POST",
        "/api/tasks",
        Some(json!({"columnId": column_id, "title": "t", "status": "to-do"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(task["status"], "todo");
}
