//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently, so
//! the client core does not pull in Axum. Integration tests catch any schema
//! drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    #[serde(rename = "todo")]
    pub text: String,
}

/// Request payload for creating or updating a todo. The server assigns ids,
/// so only the text is sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoInput {
    #[serde(rename = "todo")]
    pub text: String,
}

impl TodoInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
