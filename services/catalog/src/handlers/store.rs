use axum::{Json, extract::State};
use serde::Serialize;

use crate::handlers::MessageResponse;
use crate::state::AppState;

// ── GET /api/ ────────────────────────────────────────────────────────────────

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Car Auction API",
    })
}

// ── GET /api/store-info ──────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct StoreInfoResponse {
    pub whatsapp: String,
    pub name: String,
}

pub async fn get_store_info(State(state): State<AppState>) -> Json<StoreInfoResponse> {
    Json(StoreInfoResponse {
        whatsapp: state.store_info.whatsapp.clone(),
        name: state.store_info.name.clone(),
    })
}
