//! Recipe catalog status check.
//!
//! # Responsibilities
//! - Fetch the recipe catalog
//! - Report which marker-matching recipes are loaded
//! - Classify failures (no matches / non-success status / unreachable)

use crate::client::{AccountingClient, ClientError, RecipeCatalog};
use crate::config::ProbeConfig;

/// Names in the catalog containing the marker substring, catalog order
/// preserved.
pub fn matching_recipes<'a>(catalog: &'a RecipeCatalog, marker: &str) -> Vec<&'a str> {
    catalog
        .keys()
        .filter(|name| name.contains(marker))
        .map(String::as_str)
        .collect()
}

/// Run the recipe status check.
///
/// Succeeds when the catalog was fetched and at least one recipe name
/// contains the configured marker. Each failure class gets its own
/// diagnostic; none is retried.
pub async fn run(client: &AccountingClient, config: &ProbeConfig) -> bool {
    println!("Recipe status check");
    println!("{}", "=".repeat(30));

    let catalog = match client.recipes().await {
        Ok(catalog) => catalog,
        Err(error) => {
            report_fetch_failure(&error);
            return false;
        }
    };

    let marker = &config.workflow.recipe_marker;
    let matches = matching_recipes(&catalog, marker);

    if matches.is_empty() {
        println!("FAILED: no recipes matching '{}' are loaded", marker);
        println!(
            "  available recipes: {}",
            catalog.keys().cloned().collect::<Vec<_>>().join(", ")
        );
        println!("  restart the server to load the expected recipe set");
        return false;
    }

    println!("OK: {} matching recipe(s) loaded", matches.len());
    for name in &matches {
        let recipe = &catalog[*name];
        println!("  {}", name);
        println!("    description: {}", recipe.description);
        println!("    inputs: {} parameter(s)", recipe.inputs.len());
        println!("    operations: {} step(s)", recipe.operations_count);
    }
    println!("ready: run the product workflow next");

    true
}

fn report_fetch_failure(error: &ClientError) {
    match error {
        ClientError::Status { status, .. } => {
            println!("FAILED: catalog request returned {}", status);
        }
        e if e.is_unreachable() => {
            println!("FAILED: server unreachable");
            println!("  start the accounting server first: cargo run");
        }
        other => {
            println!("FAILED: {}", other);
        }
    }
}
