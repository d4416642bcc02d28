//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; scenario results go to stdout,
//!   diagnostics and warnings go through the subscriber
//! - Each scenario run carries a UUID for correlation
//! - Log level configurable via environment and config

pub mod logging;
