//! CLI command implementations

pub mod cover;
pub mod stamp;
