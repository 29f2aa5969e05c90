//! Validation errors for caller-supplied arguments.
//!
//! These never wrap a network response. Transport and status errors live in
//! `hide-client`.

use thiserror::Error;

/// A task invocation must name exactly one of a raw command or a task alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TaskRequestError {
    /// Neither `command` nor `alias` was supplied.
    #[error("either 'command' or 'alias' must be provided")]
    Missing,

    /// Both `command` and `alias` were supplied.
    #[error("cannot provide both 'command' and 'alias'")]
    Conflict,
}
