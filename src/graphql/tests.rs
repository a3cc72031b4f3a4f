//! Schema-level tests against an in-process mock backend.
//!
//! The mock is a small axum router bound to an ephemeral port; it records
//! every call (method, path, query, POST body) and serves canned JSON, so
//! each test can assert both the response shape and the exact set of
//! backend calls an operation produced.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::backend::{BackendClient, request_loader};
use crate::graphql::{Actor, GatewaySchema, build_schema};

// ============================================================================
// Mock backend
// ============================================================================

#[derive(Debug, Clone)]
struct RecordedCall {
    line: String,
    body: Option<Value>,
}

#[derive(Clone, Default)]
struct MockBackend {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    /// Post id whose comments route answers 500.
    fail_comments_for: Option<u64>,
}

impl MockBackend {
    fn record(&self, line: impl Into<String>) {
        self.calls.lock().unwrap().push(RecordedCall {
            line: line.into(),
            body: None,
        });
    }

    fn record_with_body(&self, line: impl Into<String>, body: Value) {
        self.calls.lock().unwrap().push(RecordedCall {
            line: line.into(),
            body: Some(body),
        });
    }

    fn lines(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.line.clone())
            .collect()
    }

    fn body_of(&self, line: &str) -> Option<Value> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.line == line)
            .and_then(|c| c.body.clone())
    }
}

fn user(id: u64) -> Value {
    json!({ "id": id, "name": format!("User {id}"), "email": format!("user{id}@example.com") })
}

fn post(id: u64, user_id: u64) -> Value {
    json!({ "id": id, "title": format!("Post {id}"), "body": format!("Body {id}"), "userId": user_id })
}

fn comment(id: u64, post_id: u64, user_id: u64) -> Value {
    json!({ "id": id, "text": format!("Comment {id}"), "postId": post_id, "userId": user_id })
}

async fn list_users(State(mock): State<MockBackend>, RawQuery(raw): RawQuery) -> Json<Value> {
    mock.record(format!("GET /users?{}", raw.unwrap_or_default()));
    Json(json!([user(1), user(2)]))
}

async fn get_user(State(mock): State<MockBackend>, Path(id): Path<u64>) -> Response {
    mock.record(format!("GET /users/{id}"));
    if id <= 3 {
        Json(user(id)).into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

async fn user_posts(State(mock): State<MockBackend>, Path(id): Path<u64>) -> Json<Value> {
    mock.record(format!("GET /users/{id}/posts"));
    Json(json!([post(id * 10 + 1, id), post(id * 10 + 2, id)]))
}

async fn list_posts(State(mock): State<MockBackend>) -> Json<Value> {
    mock.record("GET /posts");
    Json(json!([post(11, 1), post(21, 2)]))
}

async fn get_post(State(mock): State<MockBackend>, Path(id): Path<u64>) -> Response {
    mock.record(format!("GET /posts/{id}"));
    if id < 90 {
        Json(post(id, id / 10)).into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

async fn post_comments(State(mock): State<MockBackend>, Path(id): Path<u64>) -> Response {
    mock.record(format!("GET /posts/{id}/comments"));
    if mock.fail_comments_for == Some(id) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    if id == 5 {
        // Two comments by the same author, so author dedup is observable.
        Json(json!([comment(1, 5, 2), comment(2, 5, 2)])).into_response()
    } else {
        Json(json!([])).into_response()
    }
}

async fn create_post(State(mock): State<MockBackend>, Json(body): Json<Value>) -> Json<Value> {
    mock.record_with_body("POST /posts", body);
    Json(json!({ "id": 101 }))
}

async fn create_comment(State(mock): State<MockBackend>, Json(body): Json<Value>) -> Json<Value> {
    let response = json!({
        "id": 501,
        "postId": body["postId"],
        "text": body["text"],
        "userId": body["userId"],
    });
    mock.record_with_body("POST /comments", body);
    Json(response)
}

async fn spawn_backend(mock: MockBackend) -> SocketAddr {
    let router = Router::new()
        .route("/users", get(list_users))
        .route("/users/{id}", get(get_user))
        .route("/users/{id}/posts", get(user_posts))
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/{id}", get(get_post))
        .route("/posts/{id}/comments", get(post_comments))
        .route("/comments", axum::routing::post(create_comment))
        .with_state(mock);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

// ============================================================================
// Gateway harness
// ============================================================================

struct Gateway {
    schema: GatewaySchema,
    client: Arc<BackendClient>,
    mock: MockBackend,
}

async fn gateway() -> Gateway {
    gateway_with(MockBackend::default()).await
}

async fn gateway_with(mock: MockBackend) -> Gateway {
    let addr = spawn_backend(mock.clone()).await;
    let base = url::Url::parse(&format!("http://{addr}")).unwrap();
    let client = Arc::new(BackendClient::new(base, Duration::from_secs(5)).unwrap());
    let schema = build_schema(client.clone());
    Gateway {
        schema,
        client,
        mock,
    }
}

impl Gateway {
    /// Execute an operation with a fresh request-scoped loader, as the
    /// HTTP handler does for each incoming request.
    async fn execute(&self, operation: &str) -> async_graphql::Response {
        let request =
            async_graphql::Request::new(operation).data(request_loader(self.client.clone()));
        self.schema.execute(request).await
    }

    async fn execute_as(&self, operation: &str, actor: Actor) -> async_graphql::Response {
        let request = async_graphql::Request::new(operation)
            .data(request_loader(self.client.clone()))
            .data(actor);
        self.schema.execute(request).await
    }

    fn calls(&self) -> Vec<String> {
        self.mock.lines()
    }
}

fn data_of(response: &async_graphql::Response) -> Value {
    assert!(
        response.errors.is_empty(),
        "unexpected errors: {:?}",
        response.errors
    );
    serde_json::to_value(&response.data).unwrap()
}

fn error_code(error: &async_graphql::ServerError) -> Value {
    serde_json::to_value(error).unwrap()["extensions"]["code"].clone()
}

// ============================================================================
// Queries
// ============================================================================

#[tokio::test]
async fn users_query_translates_pagination_and_issues_one_call() {
    let gw = gateway().await;
    let response = gw
        .execute("{ users(pagination: { page: 1, count: 2 }) { id name email } }")
        .await;

    assert_eq!(
        data_of(&response),
        json!({ "users": [
            { "id": "1", "name": "User 1", "email": "user1@example.com" },
            { "id": "2", "name": "User 2", "email": "user2@example.com" },
        ]})
    );
    assert_eq!(gw.calls(), vec!["GET /users?_limit=2&_page=1".to_string()]);
}

#[tokio::test]
async fn invalid_pagination_is_rejected_before_any_backend_call() {
    let gw = gateway().await;
    for operation in [
        "{ users(pagination: { page: 0, count: 2 }) { id } }",
        "{ users(pagination: { page: 1, count: -5 }) { id } }",
    ] {
        let response = gw.execute(operation).await;
        assert_eq!(response.errors.len(), 1);
        assert_eq!(error_code(&response.errors[0]), json!("INVALID_ARGUMENT"));
    }
    assert_eq!(gw.calls(), Vec::<String>::new());
}

#[tokio::test]
async fn get_post_by_id_merges_post_and_comments_into_one_node() {
    let gw = gateway().await;
    let response = gw
        .execute(r#"{ getPostById(postId: "5") { id title comments { id } } }"#)
        .await;

    assert_eq!(
        data_of(&response),
        json!({ "getPostById": {
            "id": "5",
            "title": "Post 5",
            "comments": [{ "id": "1" }, { "id": "2" }],
        }})
    );

    let calls = gw.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls.contains(&"GET /posts/5".to_string()));
    assert!(calls.contains(&"GET /posts/5/comments".to_string()));
}

#[tokio::test]
async fn get_post_by_id_fails_whole_node_when_comments_call_fails() {
    let gw = gateway_with(MockBackend {
        fail_comments_for: Some(5),
        ..MockBackend::default()
    })
    .await;
    let response = gw.execute(r#"{ getPostById(postId: "5") { id } }"#).await;

    assert_eq!(
        serde_json::to_value(&response.data).unwrap(),
        json!({ "getPostById": null })
    );
    assert_eq!(response.errors.len(), 1);
    assert_eq!(error_code(&response.errors[0]), json!("BACKEND_ERROR"));
}

#[tokio::test]
async fn comment_author_resolves_from_the_wire_records_user_id() {
    let gw = gateway().await;
    let response = gw
        .execute(r#"{ getPostById(postId: "5") { comments { author { id name } } } }"#)
        .await;

    assert_eq!(
        data_of(&response),
        json!({ "getPostById": { "comments": [
            { "author": { "id": "2", "name": "User 2" } },
            { "author": { "id": "2", "name": "User 2" } },
        ]}})
    );
    assert!(gw.calls().contains(&"GET /users/2".to_string()));
}

#[tokio::test]
async fn duplicate_author_fetches_collapse_within_one_request() {
    let gw = gateway().await;
    gw.execute(r#"{ getPostById(postId: "5") { comments { author { name } } } }"#)
        .await;

    let author_fetches = gw
        .calls()
        .iter()
        .filter(|line| *line == "GET /users/2")
        .count();
    assert_eq!(author_fetches, 1);
}

#[tokio::test]
async fn sibling_user_posts_resolve_independently_without_mixing() {
    let gw = gateway().await;
    let response = gw
        .execute(
            r#"{
                a: getUserById(userId: "1") { posts { id } }
                b: getUserById(userId: "2") { posts { id } }
            }"#,
        )
        .await;

    assert_eq!(
        data_of(&response),
        json!({
            "a": { "posts": [{ "id": "11" }, { "id": "12" }] },
            "b": { "posts": [{ "id": "21" }, { "id": "22" }] },
        })
    );

    let calls = gw.calls();
    assert!(calls.contains(&"GET /users/1/posts".to_string()));
    assert!(calls.contains(&"GET /users/2/posts".to_string()));
}

#[tokio::test]
async fn failed_field_yields_partial_data_with_a_structured_error() {
    let gw = gateway().await;
    let response = gw
        .execute(
            r#"{
                user: getUserById(userId: "1") { name }
                missing: getPostById(postId: "99") { id }
            }"#,
        )
        .await;

    assert_eq!(
        serde_json::to_value(&response.data).unwrap(),
        json!({ "user": { "name": "User 1" }, "missing": null })
    );
    assert_eq!(response.errors.len(), 1);
    let error = serde_json::to_value(&response.errors[0]).unwrap();
    assert_eq!(error["path"], json!(["missing"]));
    assert_eq!(error["extensions"]["code"], json!("NOT_FOUND"));
    assert_eq!(error["message"], json!("post 99 not found"));
}

#[tokio::test]
async fn me_and_profile_resolve_against_the_actor() {
    let gw = gateway().await;
    let response = gw
        .execute_as(
            "{ me getProfile { id email } }",
            Actor { user_id: 1 },
        )
        .await;

    assert_eq!(
        data_of(&response),
        json!({
            "me": "User 1",
            "getProfile": { "id": "1", "email": "user1@example.com" },
        })
    );
    // Same actor lookup behind both fields collapses into one fetch.
    assert_eq!(gw.calls(), vec!["GET /users/1".to_string()]);
}

#[tokio::test]
async fn profile_queries_require_an_actor() {
    let gw = gateway().await;
    let response = gw.execute("{ getProfile { id } }").await;

    assert_eq!(response.errors.len(), 1);
    assert_eq!(error_code(&response.errors[0]), json!("UNAUTHENTICATED"));
    assert_eq!(gw.calls(), Vec::<String>::new());
}

#[tokio::test]
async fn posts_query_lists_backend_posts() {
    let gw = gateway().await;
    let response = gw.execute("{ posts { id title } }").await;

    assert_eq!(
        data_of(&response),
        json!({ "posts": [
            { "id": "11", "title": "Post 11" },
            { "id": "21", "title": "Post 21" },
        ]})
    );
    assert_eq!(gw.calls(), vec!["GET /posts".to_string()]);
}

// ============================================================================
// Mutations
// ============================================================================

#[tokio::test]
async fn create_post_sends_actor_identity_and_shapes_the_response() {
    let gw = gateway().await;
    let response = gw
        .execute_as(
            r#"mutation { createPost(data: { title: "T", body: "B" }) { message id } }"#,
            Actor { user_id: 1 },
        )
        .await;

    assert_eq!(
        data_of(&response),
        json!({ "createPost": { "message": "Post created successfully", "id": "101" } })
    );
    assert_eq!(gw.calls(), vec!["POST /posts".to_string()]);
    assert_eq!(
        gw.mock.body_of("POST /posts"),
        Some(json!({ "title": "T", "body": "B", "userId": 1 }))
    );
}

#[tokio::test]
async fn add_comment_round_trips_the_created_comment() {
    let gw = gateway().await;
    let response = gw
        .execute_as(
            r#"mutation { addComment(postId: "5", text: "hey") { id author { id } } }"#,
            Actor { user_id: 2 },
        )
        .await;

    assert_eq!(
        data_of(&response),
        json!({ "addComment": { "id": "501", "author": { "id": "2" } } })
    );
    assert_eq!(
        gw.mock.body_of("POST /comments"),
        Some(json!({ "postId": 5, "text": "hey", "userId": 2 }))
    );
}

#[tokio::test]
async fn mutations_require_an_actor_and_issue_no_calls_without_one() {
    let gw = gateway().await;
    let response = gw
        .execute(r#"mutation { createPost(data: { title: "T", body: "B" }) { id } }"#)
        .await;

    assert_eq!(response.errors.len(), 1);
    assert_eq!(error_code(&response.errors[0]), json!("UNAUTHENTICATED"));
    assert_eq!(gw.calls(), Vec::<String>::new());
}

#[tokio::test]
async fn empty_comment_text_is_rejected_before_any_backend_call() {
    let gw = gateway().await;
    let response = gw
        .execute_as(
            r#"mutation { addComment(postId: "5", text: "   ") { id } }"#,
            Actor { user_id: 2 },
        )
        .await;

    assert_eq!(response.errors.len(), 1);
    assert_eq!(error_code(&response.errors[0]), json!("INVALID_ARGUMENT"));
    assert_eq!(gw.calls(), Vec::<String>::new());
}
