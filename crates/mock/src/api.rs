//! Mock placeholder API
//!
//! Faithful to the public service's observable behavior: reads answer
//! 200, creates answer 201 with the next sequential id, missing ids
//! answer 404 with an empty JSON object body, deletes answer 200 with
//! an empty JSON object body. Unlike the public service, writes
//! persist, so created records can be read back within a test.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::sync::RwLock;
use tracing::info;

use crate::data;

#[derive(Clone)]
struct AppState {
    store: Arc<RwLock<Store>>,
}

struct Store {
    posts: Vec<Value>,
    users: Vec<Value>,
    comments: Vec<Value>,
}

impl Store {
    fn seeded() -> Self {
        Self {
            posts: data::posts(),
            users: data::users(),
            comments: data::comments(),
        }
    }
}

/// Build the router with freshly seeded state.
pub fn app() -> Router {
    let state = AppState {
        store: Arc::new(RwLock::new(Store::seeded())),
    };
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route(
            "/posts/:id",
            get(get_post)
                .put(replace_post)
                .patch(patch_post)
                .delete(delete_post),
        )
        .route("/posts/:id/comments", get(post_comments))
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user)
                .put(replace_user)
                .patch(patch_user)
                .delete(delete_user),
        )
        .with_state(state)
}

/// Serve the mock API on the given listener until the task is dropped.
pub async fn serve(listener: tokio::net::TcpListener) -> std::io::Result<()> {
    info!(addr = %listener.local_addr()?, "mock placeholder API listening");
    axum::serve(listener, app()).await
}

async fn list_posts(
    State(state): State<AppState>,
    Query(filters): Query<HashMap<String, String>>,
) -> Json<Value> {
    let store = state.store.read().await;
    Json(Value::Array(filtered(&store.posts, &filters)))
}

async fn get_post(State(state): State<AppState>, Path(id): Path<u64>) -> (StatusCode, Json<Value>) {
    let store = state.store.read().await;
    match find(&store.posts, id) {
        Some(post) => (StatusCode::OK, Json(post.clone())),
        None => not_found(),
    }
}

async fn create_post(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut store = state.store.write().await;
    let created = insert(&mut store.posts, body);
    info!(id = created["id"].as_u64(), "created post");
    (StatusCode::CREATED, Json(created))
}

async fn replace_post(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut store = state.store.write().await;
    match replace(&mut store.posts, id, body) {
        Some(updated) => (StatusCode::OK, Json(updated)),
        None => not_found(),
    }
}

async fn patch_post(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut store = state.store.write().await;
    match merge(&mut store.posts, id, &body) {
        Some(updated) => (StatusCode::OK, Json(updated)),
        None => not_found(),
    }
}

async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> (StatusCode, Json<Value>) {
    let mut store = state.store.write().await;
    match remove(&mut store.posts, id) {
        true => (StatusCode::OK, Json(json!({}))),
        false => not_found(),
    }
}

async fn post_comments(State(state): State<AppState>, Path(id): Path<u64>) -> Json<Value> {
    let store = state.store.read().await;
    let scoped = store
        .comments
        .iter()
        .filter(|comment| comment.get("postId").and_then(Value::as_u64) == Some(id))
        .cloned()
        .collect();
    Json(Value::Array(scoped))
}

async fn list_users(
    State(state): State<AppState>,
    Query(filters): Query<HashMap<String, String>>,
) -> Json<Value> {
    let store = state.store.read().await;
    Json(Value::Array(filtered(&store.users, &filters)))
}

async fn get_user(State(state): State<AppState>, Path(id): Path<u64>) -> (StatusCode, Json<Value>) {
    let store = state.store.read().await;
    match find(&store.users, id) {
        Some(user) => (StatusCode::OK, Json(user.clone())),
        None => not_found(),
    }
}

async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut store = state.store.write().await;
    let created = insert(&mut store.users, body);
    info!(id = created["id"].as_u64(), "created user");
    (StatusCode::CREATED, Json(created))
}

async fn replace_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut store = state.store.write().await;
    match replace(&mut store.users, id, body) {
        Some(updated) => (StatusCode::OK, Json(updated)),
        None => not_found(),
    }
}

async fn patch_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut store = state.store.write().await;
    match merge(&mut store.users, id, &body) {
        Some(updated) => (StatusCode::OK, Json(updated)),
        None => not_found(),
    }
}

async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> (StatusCode, Json<Value>) {
    let mut store = state.store.write().await;
    match remove(&mut store.users, id) {
        true => (StatusCode::OK, Json(json!({}))),
        false => not_found(),
    }
}

fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({})))
}

/// Collection filtered by every query parameter. String fields compare
/// directly; everything else by its JSON rendering, so `?userId=2`
/// matches the number 2.
fn filtered(items: &[Value], filters: &HashMap<String, String>) -> Vec<Value> {
    items
        .iter()
        .filter(|item| {
            filters.iter().all(|(key, wanted)| {
                item.get(key)
                    .is_some_and(|field| value_matches(field, wanted))
            })
        })
        .cloned()
        .collect()
}

fn value_matches(field: &Value, raw: &str) -> bool {
    match field.as_str() {
        Some(text) => text == raw,
        None => field.to_string() == raw,
    }
}

fn find(items: &[Value], id: u64) -> Option<&Value> {
    items
        .iter()
        .find(|item| item.get("id").and_then(Value::as_u64) == Some(id))
}

fn position(items: &[Value], id: u64) -> Option<usize> {
    items
        .iter()
        .position(|item| item.get("id").and_then(Value::as_u64) == Some(id))
}

fn next_id(items: &[Value]) -> u64 {
    items
        .iter()
        .filter_map(|item| item.get("id").and_then(Value::as_u64))
        .max()
        .unwrap_or(0)
        + 1
}

fn insert(items: &mut Vec<Value>, mut body: Value) -> Value {
    let id = next_id(items);
    set_id(&mut body, id);
    items.push(body.clone());
    body
}

fn replace(items: &mut [Value], id: u64, mut body: Value) -> Option<Value> {
    let idx = position(items, id)?;
    set_id(&mut body, id);
    items[idx] = body.clone();
    Some(body)
}

fn merge(items: &mut [Value], id: u64, patch: &Value) -> Option<Value> {
    let idx = position(items, id)?;
    if let (Some(target), Some(fields)) = (items[idx].as_object_mut(), patch.as_object()) {
        for (key, value) in fields {
            if key != "id" {
                target.insert(key.clone(), value.clone());
            }
        }
    }
    Some(items[idx].clone())
}

fn remove(items: &mut Vec<Value>, id: u64) -> bool {
    match position(items, id) {
        Some(idx) => {
            items.remove(idx);
            true
        }
        None => false,
    }
}

fn set_id(body: &mut Value, id: u64) {
    if let Some(map) = body.as_object_mut() {
        map.insert("id".to_string(), json!(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn body_json(resp: axum::response::Response) -> Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    #[tokio::test]
    async fn lists_seeded_posts() {
        let resp = app().oneshot(get_request("/posts")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert!(body.as_array().is_some_and(|a| a.len() >= 10));
    }

    #[tokio::test]
    async fn filters_posts_by_user_id() {
        let resp = app().oneshot(get_request("/posts?userId=2")).await.unwrap();
        let body = body_json(resp).await;
        let items = body.as_array().unwrap();
        assert!(!items.is_empty());
        assert!(items.iter().all(|p| p["userId"] == 2));
    }

    #[tokio::test]
    async fn missing_post_answers_404_with_empty_object() {
        let resp = app().oneshot(get_request("/posts/99999")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await, json!({}));
    }

    #[tokio::test]
    async fn create_assigns_next_sequential_id() {
        let payload = json!({"userId": 1, "title": "created", "body": "b"});
        let resp = app()
            .oneshot(json_request("POST", "/posts", &payload))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body = body_json(resp).await;
        assert_eq!(body["id"], 13);
        assert_eq!(body["title"], "created");
    }

    #[tokio::test]
    async fn replace_overwrites_while_keeping_id() {
        let app = app();
        let payload = json!({"userId": 1, "title": "replaced", "body": "new"});
        let resp = app
            .clone()
            .oneshot(json_request("PUT", "/posts/1", &payload))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["title"], "replaced");

        let read = app.oneshot(get_request("/posts/1")).await.unwrap();
        assert_eq!(body_json(read).await["title"], "replaced");
    }

    #[tokio::test]
    async fn patch_merges_without_touching_other_fields() {
        let app = app();
        let before = body_json(app.clone().oneshot(get_request("/posts/1")).await.unwrap()).await;
        let resp = app
            .clone()
            .oneshot(json_request("PATCH", "/posts/1", &json!({"title": "patched"})))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let after = body_json(resp).await;
        assert_eq!(after["title"], "patched");
        assert_eq!(after["body"], before["body"]);
        assert_eq!(after["id"], 1);
    }

    #[tokio::test]
    async fn delete_empties_then_404s() {
        let app = app();
        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/posts/2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, json!({}));

        let read = app.oneshot(get_request("/posts/2")).await.unwrap();
        assert_eq!(read.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn filters_users_by_username() {
        let resp = app()
            .oneshot(get_request("/users?username=Bret"))
            .await
            .unwrap();
        let body = body_json(resp).await;
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["name"], "Leanne Graham");
    }

    #[tokio::test]
    async fn comments_are_scoped_to_their_post() {
        let app = app();
        let resp = app
            .clone()
            .oneshot(get_request("/posts/1/comments"))
            .await
            .unwrap();
        let body = body_json(resp).await;
        let items = body.as_array().unwrap();
        assert!(!items.is_empty());
        assert!(items.iter().all(|c| c["postId"] == 1));

        let empty = app.oneshot(get_request("/posts/999/comments")).await.unwrap();
        assert_eq!(empty.status(), StatusCode::OK);
        assert_eq!(body_json(empty).await, json!([]));
    }
}
