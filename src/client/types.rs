//! Wire types and error definitions for the accounting server API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A recipe as described by the server's catalog endpoint.
///
/// The server owns these entirely; the probe only reads them. Absent
/// fields fall back to defaults rather than failing the decode.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RecipeDescriptor {
    /// Operator-facing description of what the recipe does.
    pub description: String,

    /// Ordered names of the recipe's input parameters.
    pub inputs: Vec<String>,

    /// Number of ledger operations the recipe performs.
    pub operations_count: u64,
}

/// The full recipe catalog keyed by recipe name.
///
/// An ordered map keeps enumeration deterministic run to run, so
/// diagnostics list recipes in a stable order.
pub type RecipeCatalog = BTreeMap<String, RecipeDescriptor>;

/// A single ledger transaction as returned by the history endpoint.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct TransactionRecord {
    /// Account the amount was moved from.
    pub from_account: String,

    /// Account the amount was moved to.
    pub to_account: String,

    /// Amount moved, in integer cents.
    pub amount: i64,

    /// Optional free-form annotation attached by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl TransactionRecord {
    /// Whether either side of the transfer references the given account id.
    pub fn touches(&self, account_id: &str) -> bool {
        self.from_account.contains(account_id) || self.to_account.contains(account_id)
    }
}

/// Errors that can occur while talking to the accounting server.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP client itself could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// The server could not be reached at the transport level.
    #[error("connection failed: {0}")]
    Connect(#[source] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("server returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body did not match the expected shape.
    #[error("malformed response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ClientError {
    /// True when the failure means the server is not reachable at all,
    /// as opposed to reachable but unhappy.
    pub fn is_unreachable(&self) -> bool {
        match self {
            ClientError::Connect(e) => e.is_connect() || e.is_timeout(),
            _ => false,
        }
    }
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
