//! Entity records returned by the Hide service.
//!
//! Every field is required on the wire. A response missing a field, or
//! carrying one with the wrong type, fails to deserialize instead of producing
//! a partially populated record. Unknown extra fields are ignored.

mod file;
mod project;
mod task;

pub use file::{File, FileInfo};
pub use project::Project;
pub use task::{Task, TaskResult};
