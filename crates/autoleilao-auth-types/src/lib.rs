//! Admin authentication types.
//!
//! Provides JWT issuance and validation plus the `AdminIdentity` extractor that
//! gates every administrative route.

pub mod identity;
pub mod token;
