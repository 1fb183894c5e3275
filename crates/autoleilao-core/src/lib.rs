//! Cross-cutting HTTP plumbing shared by AutoLeilão services.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
