//! Per-domain operations on [`HomebaseClient`](crate::HomebaseClient).
//!
//! Each submodule adds one `build_*`/`parse_*` pair per backend operation,
//! all routed through the client's generic request and parse helpers.

mod inventory;
mod notes;
mod reminders;
mod tags;
mod users;
