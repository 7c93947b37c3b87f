//! Centralized user-facing messaging.
//!
//! All text the application prints lives in the [`Message`] enum, with a
//! single `Display` implementation mapping variants to wording. The
//! `msg_*` macros route each message either to the console or, in debug
//! mode, through the tracing subscriber.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
