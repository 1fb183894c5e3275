use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use autoleilao_auth_types::identity::AdminIdentity;
use autoleilao_domain::id::{CarId, SellerId};

use crate::domain::types::{Car, CarPatch, CarPublic, CarWithSeller, CatalogStats};
use crate::error::CatalogServiceError;
use crate::handlers::MessageResponse;
use crate::handlers::seller::SellerResponse;
use crate::state::AppState;
use crate::usecase::car::{
    CreateCarInput, CreateCarUseCase, DeleteCarUseCase, GetPublicCarUseCase, GetStatsUseCase,
    ListCarsWithSellerUseCase, ListPublicCarsUseCase, UpdateCarUseCase,
};

#[derive(Serialize)]
pub struct CarResponse {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub km: i64,
    pub price: f64,
    pub description: String,
    pub images: Vec<String>,
    pub seller_id: String,
    pub status: String,
    pub featured: bool,
    #[serde(serialize_with = "autoleilao_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Car> for CarResponse {
    fn from(c: Car) -> Self {
        Self {
            id: c.id.0,
            brand: c.brand,
            model: c.model,
            year: c.year,
            km: c.km,
            price: c.price,
            description: c.description,
            images: c.images,
            seller_id: c.seller_id.0,
            status: c.status,
            featured: c.featured,
            created_at: c.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct CarPublicResponse {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub km: i64,
    pub price: f64,
    pub description: String,
    pub images: Vec<String>,
    pub status: String,
    pub featured: bool,
    #[serde(serialize_with = "autoleilao_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<CarPublic> for CarPublicResponse {
    fn from(c: CarPublic) -> Self {
        Self {
            id: c.id.0,
            brand: c.brand,
            model: c.model,
            year: c.year,
            km: c.km,
            price: c.price,
            description: c.description,
            images: c.images,
            status: c.status,
            featured: c.featured,
            created_at: c.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct CarWithSellerResponse {
    #[serde(flatten)]
    pub car: CarResponse,
    pub seller: Option<SellerResponse>,
}

impl From<CarWithSeller> for CarWithSellerResponse {
    fn from(c: CarWithSeller) -> Self {
        Self {
            car: c.car.into(),
            seller: c.seller.map(SellerResponse::from),
        }
    }
}

// ── GET /api/cars ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ListCarsQuery {
    pub status: Option<String>,
}

pub async fn list_public_cars(
    State(state): State<AppState>,
    Query(query): Query<ListCarsQuery>,
) -> Result<Json<Vec<CarPublicResponse>>, CatalogServiceError> {
    // `?status=` with no value lists everything.
    let status = query.status.filter(|s| !s.is_empty());
    let usecase = ListPublicCarsUseCase {
        cars: state.car_repo(),
    };
    let cars = usecase.execute(status.as_deref()).await?;
    Ok(Json(cars.into_iter().map(CarPublicResponse::from).collect()))
}

// ── GET /api/cars/{id} ───────────────────────────────────────────────────────

pub async fn get_public_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CarPublicResponse>, CatalogServiceError> {
    let usecase = GetPublicCarUseCase {
        cars: state.car_repo(),
    };
    let car = usecase.execute(&CarId(id)).await?;
    Ok(Json(car.into()))
}

// ── GET /api/admin/cars ──────────────────────────────────────────────────────

pub async fn list_admin_cars(
    _admin: AdminIdentity,
    State(state): State<AppState>,
) -> Result<Json<Vec<CarWithSellerResponse>>, CatalogServiceError> {
    let usecase = ListCarsWithSellerUseCase {
        cars: state.car_repo(),
        sellers: state.seller_repo(),
    };
    let cars = usecase.execute().await?;
    Ok(Json(cars.into_iter().map(CarWithSellerResponse::from).collect()))
}

// ── POST /api/admin/cars ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateCarRequest {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub km: i64,
    pub price: f64,
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub seller_id: String,
    pub status: Option<String>,
    pub featured: Option<bool>,
}

pub async fn create_car(
    _admin: AdminIdentity,
    State(state): State<AppState>,
    Json(body): Json<CreateCarRequest>,
) -> Result<Json<CarResponse>, CatalogServiceError> {
    let usecase = CreateCarUseCase {
        cars: state.car_repo(),
        sellers: state.seller_repo(),
    };
    let car = usecase
        .execute(CreateCarInput {
            brand: body.brand,
            model: body.model,
            year: body.year,
            km: body.km,
            price: body.price,
            description: body.description,
            images: body.images,
            seller_id: SellerId(body.seller_id),
            status: body.status,
            featured: body.featured,
        })
        .await?;
    Ok(Json(car.into()))
}

// ── PUT /api/admin/cars/{id} ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateCarRequest {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub km: Option<i64>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
    pub seller_id: Option<String>,
    pub status: Option<String>,
    pub featured: Option<bool>,
}

pub async fn update_car(
    _admin: AdminIdentity,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateCarRequest>,
) -> Result<Json<CarResponse>, CatalogServiceError> {
    let usecase = UpdateCarUseCase {
        cars: state.car_repo(),
        sellers: state.seller_repo(),
    };
    let car = usecase
        .execute(
            &CarId(id),
            CarPatch {
                brand: body.brand,
                model: body.model,
                year: body.year,
                km: body.km,
                price: body.price,
                description: body.description,
                images: body.images,
                seller_id: body.seller_id.map(SellerId),
                status: body.status,
                featured: body.featured,
            },
        )
        .await?;
    Ok(Json(car.into()))
}

// ── DELETE /api/admin/cars/{id} ──────────────────────────────────────────────

pub async fn delete_car(
    _admin: AdminIdentity,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, CatalogServiceError> {
    let usecase = DeleteCarUseCase {
        cars: state.car_repo(),
    };
    usecase.execute(&CarId(id)).await?;
    Ok(Json(MessageResponse {
        message: "Car deleted successfully",
    }))
}

// ── GET /api/admin/stats ─────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct StatsResponse {
    pub total_cars: u64,
    pub available_cars: u64,
    pub sold_cars: u64,
    pub total_sellers: u64,
}

impl From<CatalogStats> for StatsResponse {
    fn from(s: CatalogStats) -> Self {
        Self {
            total_cars: s.total_cars,
            available_cars: s.available_cars,
            sold_cars: s.sold_cars,
            total_sellers: s.total_sellers,
        }
    }
}

pub async fn get_stats(
    _admin: AdminIdentity,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, CatalogServiceError> {
    let usecase = GetStatsUseCase {
        cars: state.car_repo(),
        sellers: state.seller_repo(),
    };
    let stats = usecase.execute().await?;
    Ok(Json(stats.into()))
}
