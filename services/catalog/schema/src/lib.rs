//! sea-orm entities for the catalog service.

pub mod admins;
pub mod cars;
pub mod sellers;
pub mod site_settings;
