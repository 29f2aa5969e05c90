use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Full content of a file tracked by a project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct File {
    /// Path relative to the project root.
    pub path: String,
    pub content: String,
}

/// Listing entry for a project file. Carries no content.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FileInfo {
    pub path: String,
}

