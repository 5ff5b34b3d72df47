//! # fooserver-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API (`POST /foo`, `GET /foo/{id}`, `DELETE /foo/{id}`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses and status codes
//!
//! ## Dependency rule
//! Depends on `fooserver-app` (for port traits and services) and
//! `fooserver-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
