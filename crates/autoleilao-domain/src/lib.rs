//! Domain types shared across AutoLeilão crates.
//!
//! This crate contains only pure types with no framework dependencies.

pub mod car;
pub mod id;
pub mod settings;
