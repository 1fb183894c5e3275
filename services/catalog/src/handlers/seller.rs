use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use autoleilao_auth_types::identity::AdminIdentity;
use autoleilao_domain::id::SellerId;

use crate::domain::types::{Seller, SellerPatch};
use crate::error::CatalogServiceError;
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::seller::{
    CreateSellerInput, CreateSellerUseCase, DeleteSellerUseCase, ListSellersUseCase,
    UpdateSellerUseCase,
};

#[derive(Serialize)]
pub struct SellerResponse {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub whatsapp: String,
    #[serde(serialize_with = "autoleilao_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Seller> for SellerResponse {
    fn from(s: Seller) -> Self {
        Self {
            id: s.id.0,
            name: s.name,
            phone: s.phone,
            email: s.email,
            whatsapp: s.whatsapp,
            created_at: s.created_at,
        }
    }
}

// ── GET /api/admin/sellers ───────────────────────────────────────────────────

pub async fn list_sellers(
    _admin: AdminIdentity,
    State(state): State<AppState>,
) -> Result<Json<Vec<SellerResponse>>, CatalogServiceError> {
    let usecase = ListSellersUseCase {
        repo: state.seller_repo(),
    };
    let sellers = usecase.execute().await?;
    Ok(Json(sellers.into_iter().map(SellerResponse::from).collect()))
}

// ── POST /api/admin/sellers ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateSellerRequest {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub whatsapp: String,
}

pub async fn create_seller(
    _admin: AdminIdentity,
    State(state): State<AppState>,
    Json(body): Json<CreateSellerRequest>,
) -> Result<Json<SellerResponse>, CatalogServiceError> {
    let usecase = CreateSellerUseCase {
        repo: state.seller_repo(),
    };
    let seller = usecase
        .execute(CreateSellerInput {
            name: body.name,
            phone: body.phone,
            email: body.email,
            whatsapp: body.whatsapp,
        })
        .await?;
    Ok(Json(seller.into()))
}

// ── PUT /api/admin/sellers/{id} ──────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateSellerRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub whatsapp: Option<String>,
}

pub async fn update_seller(
    _admin: AdminIdentity,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateSellerRequest>,
) -> Result<Json<SellerResponse>, CatalogServiceError> {
    let usecase = UpdateSellerUseCase {
        repo: state.seller_repo(),
    };
    let seller = usecase
        .execute(
            &SellerId(id),
            SellerPatch {
                name: body.name,
                phone: body.phone,
                email: body.email,
                whatsapp: body.whatsapp,
            },
        )
        .await?;
    Ok(Json(seller.into()))
}

// ── DELETE /api/admin/sellers/{id} ───────────────────────────────────────────

pub async fn delete_seller(
    _admin: AdminIdentity,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, CatalogServiceError> {
    let usecase = DeleteSellerUseCase {
        repo: state.seller_repo(),
    };
    usecase.execute(&SellerId(id)).await?;
    Ok(Json(MessageResponse {
        message: "Seller deleted successfully",
    }))
}
