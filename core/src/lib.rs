//! Async fetch helper with content-type negotiation.
//!
//! # Overview
//! `Fetcher::fetch_data` issues one HTTP request and returns either a decoded
//! `Payload` (JSON or text, chosen by the response's `content-type`) or a
//! `FetchError`. The API clients, rendering and file helpers are small
//! collaborators built around it.
//!
//! # Design
//! - Host-does-IO: `build_request` and `parse_response` are pure; only the
//!   `Transport` performs network I/O, so both ends test without a server.
//! - `Result<Payload, FetchError>` means exactly one of payload or error is
//!   present after every call.
//! - Errors are logged through the `log` facade; binaries pick the logger.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod fetch;
pub mod http;
pub mod render;
pub mod story;
pub mod transport;
pub mod types;

pub use client::{JokeClient, UsersClient};
pub use error::{ErrorKind, FetchError, TransportError};
pub use fetch::{build_request, parse_response, Fetcher, Payload};
pub use http::{FetchOptions, HttpMethod, HttpRequest, HttpResponse, UnknownMethod};
pub use render::{render_error, render_joke, render_users, DisplayNode};
pub use story::{count_mentions, read_story, FileInfo, StoryError};
pub use transport::{ReqwestTransport, Transport};
pub use types::{CreatedUser, Joke, NewUser, Resource, SingleResource, SingleUser, User, UserList};
