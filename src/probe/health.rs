//! Server health probe.

use crate::client::{AccountingClient, ClientError};
use crate::probe::report::pretty;

/// Fetch and print the server's health document.
pub async fn run(client: &AccountingClient) -> bool {
    match client.health().await {
        Ok(document) => {
            println!("{}", pretty(&document));
            true
        }
        Err(error) => {
            match &error {
                ClientError::Status { status, .. } => {
                    println!("FAILED: health endpoint returned {}", status);
                }
                e if e.is_unreachable() => {
                    println!("FAILED: server unreachable");
                    println!("  start the accounting server first: cargo run");
                }
                other => {
                    println!("FAILED: {}", other);
                }
            }
            false
        }
    }
}
