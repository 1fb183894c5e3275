pub mod auth;
pub mod car;
pub mod health;
pub mod seller;
pub mod settings;
pub mod store;

use serde::Serialize;

/// Acknowledgement body for operations with nothing else to return.
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
