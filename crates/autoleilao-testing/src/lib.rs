//! Test utilities for AutoLeilão services.
//!
//! Depend on this from `[dev-dependencies]` only.

pub mod auth;
