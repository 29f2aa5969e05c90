//! # hide-core
//!
//! Core types shared by the Hide client crates.
//!
//! - Entity records returned by the service (projects, tasks, files)
//! - JSON request bodies sent to the service
//! - Argument validation errors raised before any request is made

pub mod entities;
pub mod errors;
pub mod requests;
