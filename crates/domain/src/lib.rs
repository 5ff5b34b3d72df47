//! # fooserver-domain
//!
//! Pure domain model for the fooserver service.
//!
//! ## Responsibilities
//! - Foundational types: the typed identifier and error conventions
//! - Define **Foo** (the sole domain object: an id plus a non-empty name)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod foo;
pub mod id;
