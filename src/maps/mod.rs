//! Per-capability map suites.
//!
//! Each map is a parameterized factory: given a `MapContext` and a provider
//! name (plus any fixture data the capability needs), it runs a fixed
//! sequence of named checks through the harness and fails on the first
//! mismatch. Maps never retry; transport concerns live behind the performer.

pub mod communication;
pub mod payments;
pub mod vcs;

pub use communication::{send_email_map, send_sms_map};
pub use payments::{create_plan, read_plans_map};
pub use vcs::user_repos_map;
