//! Scenario probe subsystem.
//!
//! # Data Flow
//! ```text
//! CLI subcommand
//!     → scenario runner (recipes.rs / workflow.rs / health.rs)
//!     → AccountingClient, one blocking step at a time
//!     → fatal steps abort, best-effort steps only log
//!     → operator report on stdout + boolean outcome
//! ```
//!
//! # Design Decisions
//! - Every failure mode collapses to a boolean at the scenario boundary
//! - Diagnostics distinguish unreachable / bad status / bad content
//! - No retries: a probe run is a snapshot, not a supervisor

pub mod health;
pub mod recipes;
pub mod report;
pub mod samples;
pub mod workflow;
