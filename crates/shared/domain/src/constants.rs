//! `OpenAPI` tags used to group endpoints in the generated documentation.

pub const SYSTEM_TAG: &str = "System";
pub const PETS_TAG: &str = "Pets";
