//! JSON request bodies sent to the Hide service.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::TaskRequestError;

/// Body of `POST /projects`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub repo_url: String,
}

/// Body of `POST /projects/{id}/tasks`.
///
/// Serializes as `{"command": "..."}` or `{"alias": "..."}`. Holding a value of
/// this type means exactly one of the two was chosen.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskRequest {
    /// Run a raw shell command.
    Command(String),
    /// Run a task predefined for the project.
    Alias(String),
}

impl TaskRequest {
    /// Build a request from optional `command` / `alias` arguments.
    ///
    /// Empty strings count as absent.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRequestError::Missing`] when neither is given and
    /// [`TaskRequestError::Conflict`] when both are.
    pub fn from_parts(
        command: Option<&str>,
        alias: Option<&str>,
    ) -> Result<Self, TaskRequestError> {
        let command = command.filter(|c| !c.is_empty());
        let alias = alias.filter(|a| !a.is_empty());

        match (command, alias) {
            (Some(command), None) => Ok(Self::Command(command.to_string())),
            (None, Some(alias)) => Ok(Self::Alias(alias.to_string())),
            (None, None) => Err(TaskRequestError::Missing),
            (Some(_), Some(_)) => Err(TaskRequestError::Conflict),
        }
    }
}

/// Body of `POST /projects/{id}/files`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreateFileRequest {
    pub path: String,
    pub content: String,
}

/// Body of `PUT /projects/{id}/files/{path}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UpdateFileRequest {
    pub content: String,
}
