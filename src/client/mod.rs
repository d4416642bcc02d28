//! Accounting server client subsystem.
//!
//! # Data Flow
//! ```text
//! scenario step
//!     → rest.rs (build request, send, await response)
//!     → types.rs (decode into wire types, classify errors)
//!     → ClientResult back to the scenario runner
//! ```
//!
//! # Design Decisions
//! - The server is a black box behind its REST surface
//! - Errors carry enough context to print a useful diagnostic
//! - No retries, no backoff; failures are terminal for their step

pub mod rest;
pub mod types;

pub use rest::AccountingClient;
pub use types::{ClientError, ClientResult, RecipeCatalog, RecipeDescriptor, TransactionRecord};
