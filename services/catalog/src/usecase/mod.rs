pub mod auth;
pub mod bootstrap;
pub mod car;
pub mod seller;
pub mod settings;
