//! Client core for the Homebase REST backend.
//!
//! # Overview
//! Translates typed calls into `HttpRequest` values for five resource
//! domains (inventory, notes, tags, reminders, users) and `HttpResponse`
//! values back into typed results, without touching the network
//! (host-does-IO pattern). A [`Transport`] executes the round-trip;
//! [`UreqTransport`] is provided behind the default `ureq` feature.
//!
//! # Design
//! - `HomebaseClient` is stateless; it holds only the configured base URL.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response). Every domain routes through one generic
//!   request helper and one generic parse helper.
//! - Every `parse_*` returns `Result<_, ApiError>`. Fallback values are the
//!   caller's choice: `unwrap_or_default()` for lists, `.ok()` for single
//!   entities, `.is_ok()` for account mutations.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
mod resources;
pub mod transport;
pub mod types;

pub use client::{HomebaseClient, Operation, Resource};
pub use config::{ClientConfig, ConfigError};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::Transport;
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
pub use types::{
    InventoryInput, InventoryItem, Note, NoteInput, Reminder, ReminderInput, Tag, TagInput, User,
    UserProfile,
};
