use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use autoleilao_auth_types::identity::AdminIdentity;

use crate::error::CatalogServiceError;
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::auth::{ChangePasswordInput, ChangePasswordUseCase, LoginInput, LoginUseCase};

// ── POST /api/auth/login ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, CatalogServiceError> {
    let usecase = LoginUseCase {
        admins: state.admin_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase
        .execute(LoginInput {
            username: body.username,
            password: body.password,
        })
        .await?;
    Ok(Json(LoginResponse {
        token: out.token,
        username: out.username,
    }))
}

// ── PUT /api/admin/change-password ───────────────────────────────────────────

#[derive(Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

pub async fn change_password(
    admin: AdminIdentity,
    State(state): State<AppState>,
    Json(body): Json<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, CatalogServiceError> {
    let usecase = ChangePasswordUseCase {
        admins: state.admin_repo(),
    };
    usecase
        .execute(
            &admin.username,
            ChangePasswordInput {
                current_password: body.current_password,
                new_password: body.new_password,
            },
        )
        .await?;
    Ok(Json(MessageResponse {
        message: "Password changed successfully",
    }))
}
