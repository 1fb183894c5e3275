//! Site settings conventions.

/// Fixed identity of the site settings singleton.
pub const SETTINGS_ID: &str = "site_settings";

/// Site name used when nothing else is configured.
pub const DEFAULT_SITE_NAME: &str = "AutoLeilão";

/// Brand color used when nothing else is configured.
pub const DEFAULT_PRIMARY_COLOR: &str = "#DC2626";
