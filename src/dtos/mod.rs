//! Wire types for the relay endpoint.

use serde::{Deserialize, Serialize};

/// Inbound request body for `POST /query`.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    /// The user's question. A missing field deserializes to an empty string
    /// and is treated the same as a blank question.
    #[serde(default)]
    pub question: String,
}

/// Response envelope. Always returned with HTTP 200; user-facing error text
/// travels in `answer` like any other result.
#[derive(Debug, Serialize, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
}
