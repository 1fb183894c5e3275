use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use autoleilao_auth_types::identity::AdminIdentity;

use crate::domain::types::{Settings, SettingsPatch};
use crate::error::CatalogServiceError;
use crate::state::AppState;
use crate::usecase::settings::{GetSettingsUseCase, UpdateSettingsUseCase};

#[derive(Serialize)]
pub struct SettingsResponse {
    pub id: &'static str,
    pub site_name: String,
    pub logo_url: String,
    pub primary_color: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub facebook_url: String,
    pub instagram_url: String,
    #[serde(serialize_with = "autoleilao_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Settings> for SettingsResponse {
    fn from(s: Settings) -> Self {
        Self {
            id: Settings::ID,
            site_name: s.site_name,
            logo_url: s.logo_url,
            primary_color: s.primary_color,
            address: s.address,
            phone: s.phone,
            email: s.email,
            facebook_url: s.facebook_url,
            instagram_url: s.instagram_url,
            updated_at: s.updated_at,
        }
    }
}

async fn load_settings(state: &AppState) -> Result<Json<SettingsResponse>, CatalogServiceError> {
    let usecase = GetSettingsUseCase {
        repo: state.settings_repo(),
    };
    let settings = usecase.execute().await?;
    Ok(Json(settings.into()))
}

// ── GET /api/settings ────────────────────────────────────────────────────────

pub async fn get_public_settings(
    State(state): State<AppState>,
) -> Result<Json<SettingsResponse>, CatalogServiceError> {
    load_settings(&state).await
}

// ── GET /api/admin/settings ──────────────────────────────────────────────────

pub async fn get_admin_settings(
    _admin: AdminIdentity,
    State(state): State<AppState>,
) -> Result<Json<SettingsResponse>, CatalogServiceError> {
    load_settings(&state).await
}

// ── PUT /api/admin/settings ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateSettingsRequest {
    pub site_name: Option<String>,
    pub logo_url: Option<String>,
    pub primary_color: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
}

pub async fn update_settings(
    _admin: AdminIdentity,
    State(state): State<AppState>,
    Json(body): Json<UpdateSettingsRequest>,
) -> Result<Json<SettingsResponse>, CatalogServiceError> {
    let usecase = UpdateSettingsUseCase {
        repo: state.settings_repo(),
    };
    let settings = usecase
        .execute(SettingsPatch {
            site_name: body.site_name,
            logo_url: body.logo_url,
            primary_color: body.primary_color,
            address: body.address,
            phone: body.phone,
            email: body.email,
            facebook_url: body.facebook_url,
            instagram_url: body.instagram_url,
        })
        .await?;
    Ok(Json(settings.into()))
}
