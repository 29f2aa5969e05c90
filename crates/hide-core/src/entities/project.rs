use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A server-side workspace created from a source repository URL.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Project {
    /// Opaque identifier assigned by the service.
    pub id: String,
}
