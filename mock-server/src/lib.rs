//! In-process imitation of the users/resources API and a joke endpoint, plus
//! fixture routes that pin down each content-type and status case.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserList {
    pub page: u32,
    pub per_page: u32,
    pub total: u32,
    pub total_pages: u32,
    pub data: Vec<User>,
}

#[derive(Deserialize)]
pub struct NewUser {
    pub name: String,
    pub job: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreatedUser {
    pub name: String,
    pub job: String,
    pub id: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Resource {
    pub id: u32,
    pub name: String,
    pub year: u32,
    pub color: String,
    pub pantone_value: String,
}

pub const JOKE_SETUP: &str = "Why do programmers prefer dark mode?";
pub const JOKE_DELIVERY: &str = "Because light attracts bugs.";

/// Next id handed out by `POST /api/users`.
pub type Ids = Arc<AtomicU64>;

const PEOPLE: [(&str, &str); 6] = [
    ("George", "Bluth"),
    ("Janet", "Weaver"),
    ("Emma", "Wong"),
    ("Eve", "Holt"),
    ("Charles", "Morris"),
    ("Tracey", "Ramos"),
];

const COLORS: [(&str, u32, &str, &str); 6] = [
    ("cerulean", 2000, "#98B2D1", "15-4020"),
    ("fuchsia rose", 2001, "#C74375", "17-2031"),
    ("true red", 2002, "#BF1932", "19-1664"),
    ("aqua sky", 2003, "#7BC4C4", "14-4811"),
    ("tigerlily", 2004, "#E2583E", "17-1456"),
    ("blue turquoise", 2005, "#53B0AE", "15-5217"),
];

pub fn users() -> Vec<User> {
    PEOPLE
        .iter()
        .zip(1..)
        .map(|((first, last), id)| User {
            id,
            email: format!("{}.{}@reqres.in", first.to_lowercase(), last.to_lowercase()),
            first_name: first.to_string(),
            last_name: last.to_string(),
            avatar: format!("https://reqres.in/img/faces/{id}-image.jpg"),
        })
        .collect()
}

fn resource(id: u32) -> Option<Resource> {
    let (name, year, color, pantone) = COLORS.get(id.checked_sub(1)? as usize)?;
    Some(Resource {
        id,
        name: name.to_string(),
        year: *year,
        color: color.to_string(),
        pantone_value: pantone.to_string(),
    })
}

pub fn app() -> Router {
    let ids: Ids = Arc::new(AtomicU64::new(100));
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/{id}", get(get_user).delete(delete_user))
        .route("/api/unknown/{id}", get(get_resource))
        .route("/joke/Programming", get(get_joke))
        .route("/fixtures/json", get(fixture_json))
        .route("/fixtures/text", get(fixture_text))
        .route("/fixtures/plain", get(fixture_plain))
        .route("/fixtures/broken-json", get(fixture_broken_json))
        .route("/fixtures/status/{code}", get(fixture_status))
        .with_state(ids)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_users() -> Json<UserList> {
    let data = users();
    Json(UserList {
        page: 1,
        per_page: data.len() as u32,
        total: data.len() as u32,
        total_pages: 1,
        data,
    })
}

async fn get_user(Path(id): Path<u32>) -> Response {
    match users().into_iter().find(|u| u.id == id) {
        Some(user) => Json(json!({ "data": user })).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({}))).into_response(),
    }
}

async fn create_user(
    State(ids): State<Ids>,
    Json(input): Json<NewUser>,
) -> (StatusCode, Json<CreatedUser>) {
    let id = ids.fetch_add(1, Ordering::Relaxed);
    log::debug!("created user {id}");
    let created = CreatedUser {
        name: input.name,
        job: input.job,
        id: id.to_string(),
        created_at: "2024-01-01T00:00:00.000Z".to_string(),
    };
    (StatusCode::CREATED, Json(created))
}

async fn delete_user(Path(_id): Path<u32>) -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn get_resource(Path(id): Path<u32>) -> Response {
    match resource(id) {
        Some(resource) => Json(json!({ "data": resource })).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({}))).into_response(),
    }
}

async fn get_joke() -> Json<serde_json::Value> {
    Json(json!({
        "error": false,
        "category": "Programming",
        "type": "twopart",
        "setup": JOKE_SETUP,
        "delivery": JOKE_DELIVERY,
        "id": 1,
        "safe": true,
        "lang": "en"
    }))
}

async fn fixture_json() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json; charset=utf-8")], r#"{"a":1}"#)
}

async fn fixture_text() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain")], "hello")
}

/// A body with no content-type header at all.
async fn fixture_plain() -> Response {
    let mut response = "plain".into_response();
    response.headers_mut().remove(header::CONTENT_TYPE);
    response
}

async fn fixture_broken_json() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], r#"{"a":"#)
}

async fn fixture_status(Path(code): Path<u16>) -> Response {
    match StatusCode::from_u16(code) {
        Ok(status) => (status, status.canonical_reason().unwrap_or("")).into_response(),
        Err(_) => StatusCode::BAD_REQUEST.into_response(),
    }
}
