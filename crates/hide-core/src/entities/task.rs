use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named shell command predefined for a project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    pub alias: String,
    pub command: String,
}

/// Captured outcome of running a task or an ad-hoc command.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskResult {
    pub std_out: String,
    pub std_err: String,
    /// Exit code of the process. Negative values are passed through as sent.
    pub exit_code: i64,
}
