//! Thin API clients built on the fetch helper.
//!
//! # Design
//! Each operation has a `build_*` method that produces an `HttpRequest`
//! without touching the network and an async method that sends it through
//! the client's `Fetcher`. The raw-payload methods (`get_users`, `get_user`,
//! ...) hand back whatever `fetch_data` produced; the `*_typed` variants
//! decode into the DTOs in `types`.

use crate::error::FetchError;
use crate::fetch::{build_request, Fetcher, Payload};
use crate::http::{FetchOptions, HttpMethod, HttpRequest};
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{CreatedUser, Joke, NewUser, SingleResource, SingleUser, UserList};

/// Client for the `users` and `unknown` (resource) endpoints.
#[derive(Debug, Clone)]
pub struct UsersClient<T = ReqwestTransport> {
    base_url: String,
    fetcher: Fetcher<T>,
}

impl UsersClient<ReqwestTransport> {
    pub fn new(base_url: &str) -> Self {
        Self::with_fetcher(base_url, Fetcher::new())
    }
}

impl<T: Transport> UsersClient<T> {
    pub fn with_fetcher(base_url: &str, fetcher: Fetcher<T>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            fetcher,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_get_users(&self) -> HttpRequest {
        build_request(&format!("{}/users", self.base_url), &FetchOptions::default())
    }

    pub fn build_get_user(&self, id: u32) -> HttpRequest {
        build_request(&format!("{}/users/{id}", self.base_url), &FetchOptions::default())
    }

    pub fn build_create_user(&self, name: &str, job: &str) -> Result<HttpRequest, FetchError> {
        let input = NewUser {
            name: name.to_string(),
            job: job.to_string(),
        };
        let options = FetchOptions::post_json(&input)?;
        Ok(build_request(&format!("{}/users", self.base_url), &options))
    }

    pub fn build_delete_user(&self, id: u32) -> HttpRequest {
        build_request(
            &format!("{}/users/{id}", self.base_url),
            &FetchOptions::method(HttpMethod::Delete),
        )
    }

    pub fn build_get_resource(&self, id: u32) -> HttpRequest {
        build_request(&format!("{}/unknown/{id}", self.base_url), &FetchOptions::default())
    }

    pub async fn get_users(&self) -> Result<Payload, FetchError> {
        self.fetcher.fetch_request(self.build_get_users()).await
    }

    pub async fn get_user(&self, id: u32) -> Result<Payload, FetchError> {
        self.fetcher.fetch_request(self.build_get_user(id)).await
    }

    pub async fn create_user(&self, name: &str, job: &str) -> Result<Payload, FetchError> {
        let request = self.build_create_user(name, job)?;
        self.fetcher.fetch_request(request).await
    }

    /// The API answers a delete with an empty, non-JSON body.
    pub async fn delete_user(&self, id: u32) -> Result<Payload, FetchError> {
        self.fetcher.fetch_request(self.build_delete_user(id)).await
    }

    pub async fn get_resource(&self, id: u32) -> Result<Payload, FetchError> {
        self.fetcher.fetch_request(self.build_get_resource(id)).await
    }

    pub async fn get_users_typed(&self) -> Result<UserList, FetchError> {
        self.fetcher.fetch_request_json(self.build_get_users()).await
    }

    pub async fn get_user_typed(&self, id: u32) -> Result<SingleUser, FetchError> {
        self.fetcher.fetch_request_json(self.build_get_user(id)).await
    }

    pub async fn create_user_typed(&self, name: &str, job: &str) -> Result<CreatedUser, FetchError> {
        let request = self.build_create_user(name, job)?;
        self.fetcher.fetch_request_json(request).await
    }

    pub async fn get_resource_typed(&self, id: u32) -> Result<SingleResource, FetchError> {
        self.fetcher.fetch_request_json(self.build_get_resource(id)).await
    }
}

/// Client for a two-part joke endpoint.
#[derive(Debug, Clone)]
pub struct JokeClient<T = ReqwestTransport> {
    endpoint: String,
    fetcher: Fetcher<T>,
}

impl JokeClient<ReqwestTransport> {
    pub fn new(endpoint: &str) -> Self {
        Self::with_fetcher(endpoint, Fetcher::new())
    }
}

impl<T: Transport> JokeClient<T> {
    pub fn with_fetcher(endpoint: &str, fetcher: Fetcher<T>) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            fetcher,
        }
    }

    pub fn build_get_joke(&self) -> HttpRequest {
        build_request(&self.endpoint, &FetchOptions::default())
    }

    pub async fn get_joke(&self) -> Result<Joke, FetchError> {
        self.fetcher.fetch_request_json(self.build_get_joke()).await
    }
}
