use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use autoleilao_core::health::healthz;
use autoleilao_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    auth::{change_password, login},
    car::{
        create_car, delete_car, get_public_car, get_stats, list_admin_cars, list_public_cars,
        update_car,
    },
    health::readyz,
    seller::{create_seller, delete_seller, list_sellers, update_seller},
    settings::{get_admin_settings, get_public_settings, update_settings},
    store::{get_store_info, root},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Storefront
        .route("/api", get(root))
        .route("/api/", get(root))
        .route("/api/store-info", get(get_store_info))
        .route("/api/settings", get(get_public_settings))
        .route("/api/cars", get(list_public_cars))
        .route("/api/cars/{id}", get(get_public_car))
        // Auth
        .route("/api/auth/login", post(login))
        .route("/api/admin/change-password", put(change_password))
        // Admin: settings
        .route(
            "/api/admin/settings",
            get(get_admin_settings).put(update_settings),
        )
        // Admin: sellers
        .route("/api/admin/sellers", get(list_sellers).post(create_seller))
        .route(
            "/api/admin/sellers/{id}",
            put(update_seller).delete(delete_seller),
        )
        // Admin: cars
        .route("/api/admin/cars", get(list_admin_cars).post(create_car))
        .route("/api/admin/cars/{id}", put(update_car).delete(delete_car))
        .route("/api/admin/stats", get(get_stats))
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
