//! Car listing conventions.

/// Status of a listing that can still be bought.
pub const STATUS_AVAILABLE: &str = "available";

/// Status of a listing that has been sold.
pub const STATUS_SOLD: &str = "sold";
