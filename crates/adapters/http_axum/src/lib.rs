//! # assethub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** for registering and reading assets
//!   (`POST /api/assets`, `GET /api/assets`, `GET /api/assets/{id}`)
//! - Tag every request with a correlation id, carried in the tracing span
//!   and echoed in the `x-correlation-id` response header
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and failures into the
//!   `{"status": …, "message": …}` response envelope
//!
//! ## Dependency rule
//! Depends on `assethub-app` (for port traits and services) and
//! `assethub-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod correlation;
pub mod error;
pub mod router;
pub mod state;
