//! # fooserver-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** adapters must implement (driven/outbound port):
//!   - `FooRepository` — insert, lookup, removal, and reset for `Foo`s
//! - Define the **driving/inbound port** as a use-case struct:
//!   - `FooService` — create, get, delete, reset
//! - Orchestrate domain objects without knowing *how* storage works
//!
//! ## Dependency rule
//! Depends on `fooserver-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
