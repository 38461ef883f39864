//! Domain DTOs for the users, resources and jokes APIs.
//!
//! # Design
//! These mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single user record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
}

/// One page of users, as returned by `GET /users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserList {
    pub page: u32,
    pub per_page: u32,
    pub total: u32,
    pub total_pages: u32,
    pub data: Vec<User>,
}

/// Envelope of `GET /users/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SingleUser {
    pub data: User,
}

/// Request payload for creating a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub job: String,
}

/// The server's echo of a created user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedUser {
    pub name: String,
    pub job: String,
    pub id: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// A color resource from `GET /unknown/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resource {
    pub id: u32,
    pub name: String,
    pub year: u32,
    pub color: String,
    pub pantone_value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SingleResource {
    pub data: Resource,
}

/// A two-part joke. Extra fields in the response are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Joke {
    pub setup: String,
    pub delivery: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_list_deserializes_from_api_shape() {
        let json = r#"{
            "page": 1, "per_page": 6, "total": 12, "total_pages": 2,
            "data": [{"id": 1, "email": "george.bluth@reqres.in", "first_name": "George",
                      "last_name": "Bluth", "avatar": "https://reqres.in/img/faces/1-image.jpg"}],
            "support": {"url": "https://reqres.in"}
        }"#;
        let list: UserList = serde_json::from_str(json).unwrap();
        assert_eq!(list.data.len(), 1);
        assert_eq!(list.data[0].first_name, "George");
    }

    #[test]
    fn created_user_reads_camel_case_timestamp() {
        let json = r#"{"name":"morpheus","job":"leader","id":"42","createdAt":"2024-01-01T00:00:00Z"}"#;
        let created: CreatedUser = serde_json::from_str(json).unwrap();
        assert_eq!(created.created_at, "2024-01-01T00:00:00Z");
    }

    #[test]
    fn joke_ignores_extra_fields() {
        let json = r#"{"category":"Programming","type":"twopart","setup":"S","delivery":"D","id":1}"#;
        let joke: Joke = serde_json::from_str(json).unwrap();
        assert_eq!(joke.setup, "S");
        assert_eq!(joke.delivery, "D");
    }

    #[test]
    fn joke_missing_delivery_is_rejected() {
        let result: Result<Joke, _> = serde_json::from_str(r#"{"setup":"S"}"#);
        assert!(result.is_err());
    }
}
