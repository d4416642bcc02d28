//! Integration probe for an accounting server's REST surface.
//!
//! The probe issues requests against a configured base endpoint,
//! interprets the JSON responses, and reports pass/fail status to an
//! operator. It holds no state between runs and implements none of the
//! server's semantics.

pub mod client;
pub mod config;
pub mod observability;
pub mod probe;

pub use client::AccountingClient;
pub use config::ProbeConfig;
