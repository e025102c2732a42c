//! # Domain Models
//!
//! Plain data shared by every crate of the pet registry (only `serde`).
//! No I/O and no business rules: configuration, `OpenAPI` tags and the slice registry contract.

pub mod config;
pub mod constants;
pub mod registry;
