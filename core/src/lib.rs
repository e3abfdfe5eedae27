//! Client-side core for the user-record service.
//!
//! # Overview
//! Everything the user-facing client does short of rendering and I/O lives
//! here: the record list and form state, per-field validation, and the
//! building and parsing of the HTTP calls that drive the API. The host
//! executes each `HttpRequest` and feeds the `HttpResponse` back, keeping
//! this crate deterministic and testable without a network.
//!
//! # Design
//! - `UserApi` is stateless; it holds only the base URL.
//! - `App` holds the client state and splits every action into a
//!   build-request half and an apply-response half.
//! - Validation runs before every submit and blocks it on failure.
//! - DTOs are defined independently of the server crate; integration tests
//!   catch schema drift.

pub mod app;
pub mod client;
pub mod error;
pub mod http;
pub mod types;
pub mod validation;

pub use app::App;
pub use client::UserApi;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Draft, User, UserInput};
pub use validation::{validate, Field, ValidationErrors};
