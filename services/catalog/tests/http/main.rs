//! End-to-end tests over the real router and an in-memory SQLite store.

use axum::http::StatusCode;
use axum_test::TestServer;
use http::header::AUTHORIZATION;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, EntityTrait, PaginatorTrait};
use sea_orm_migration::MigratorTrait;
use serde_json::{Value, json};

use autoleilao_auth_types::identity::JwtSecret;
use autoleilao_catalog::domain::types::StoreInfo;
use autoleilao_catalog::router::build_router;
use autoleilao_catalog::state::AppState;
use autoleilao_catalog::usecase::bootstrap::BootstrapUseCase;
use autoleilao_catalog_migration::Migrator;
use autoleilao_catalog_schema::{admins, cars, sellers, site_settings};
use autoleilao_testing::auth::{MockAdmin, bearer};

const TEST_JWT_SECRET: &str = "test-secret-for-http-tests";

async fn memory_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

fn test_state(db: DatabaseConnection) -> AppState {
    AppState {
        db,
        jwt_secret: JwtSecret::new(TEST_JWT_SECRET),
        store_info: StoreInfo {
            whatsapp: "5511999999999".into(),
            name: "AutoLeilão".into(),
        },
    }
}

async fn bootstrap(state: &AppState) {
    BootstrapUseCase {
        admins: state.admin_repo(),
        settings: state.settings_repo(),
        default_password: "admin123".into(),
    }
    .execute()
    .await
    .unwrap();
}

/// A bootstrapped server plus a handle on its store.
async fn test_server() -> (TestServer, DatabaseConnection) {
    let db = memory_db().await;
    let state = test_state(db.clone());
    bootstrap(&state).await;
    (TestServer::new(build_router(state)).unwrap(), db)
}

fn admin() -> MockAdmin {
    MockAdmin::new("admin", TEST_JWT_SECRET)
}

async fn create_seller(server: &TestServer) -> Value {
    let (name, value) = admin().authorization();
    server
        .post("/api/admin/sellers")
        .add_header(name, value)
        .json(&json!({
            "name": "Revenda Paulista",
            "phone": "11 3333-4444",
            "email": "contato@revenda.example",
            "whatsapp": "5511988887777"
        }))
        .await
        .json::<Value>()
}

async fn create_car(server: &TestServer, seller_id: &str) -> Value {
    let (name, value) = admin().authorization();
    server
        .post("/api/admin/cars")
        .add_header(name, value)
        .json(&json!({
            "brand": "Chevrolet",
            "model": "Onix",
            "year": 2020,
            "km": 31500,
            "price": 64900.0,
            "description": "Completo",
            "images": ["https://img.example/onix-1.jpg"],
            "seller_id": seller_id
        }))
        .await
        .json::<Value>()
}

// ── Storefront ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_answer_root_and_store_info() {
    let (server, _db) = test_server().await;

    let root = server.get("/api/").await;
    assert_eq!(root.status_code(), StatusCode::OK);
    assert_eq!(root.json::<Value>(), json!({ "message": "Car Auction API" }));

    let info = server.get("/api/store-info").await.json::<Value>();
    assert_eq!(
        info,
        json!({ "whatsapp": "5511999999999", "name": "AutoLeilão" })
    );
}

#[tokio::test]
async fn should_echo_request_id() {
    let (server, _db) = test_server().await;
    let response = server.get("/healthz").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn should_be_ready_with_live_database() {
    let (server, _db) = test_server().await;
    assert_eq!(server.get("/readyz").await.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn should_serve_seeded_settings_publicly() {
    let (server, _db) = test_server().await;
    let settings = server.get("/api/settings").await.json::<Value>();
    assert_eq!(settings["id"], "site_settings");
    assert_eq!(settings["site_name"], "AutoLeilão");
    assert_eq!(settings["primary_color"], "#DC2626");
}

#[tokio::test]
async fn should_persist_settings_on_first_public_read() {
    let db = memory_db().await;
    let server = TestServer::new(build_router(test_state(db.clone()))).unwrap();

    let response = server.get("/api/settings").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(site_settings::Entity::find().count(&db).await.unwrap(), 1);
}

// ── Auth ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_login_with_bootstrap_credentials() {
    let (server, _db) = test_server().await;

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "username": "admin", "password": "admin123" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["username"], "admin");

    let token = body["token"].as_str().unwrap();
    let stats = server
        .get("/api/admin/stats")
        .add_header(AUTHORIZATION, bearer(token))
        .await;
    assert_eq!(stats.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn should_reject_wrong_password() {
    let (server, _db) = test_server().await;

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "username": "admin", "password": "wrong" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body = response.json::<Value>();
    assert_eq!(body["kind"], "INVALID_CREDENTIALS");
    assert!(body.get("token").is_none());
}

#[tokio::test]
async fn should_reject_admin_routes_without_valid_bearer() {
    let (server, db) = test_server().await;

    let missing = server
        .post("/api/admin/sellers")
        .json(&json!({ "name": "x", "phone": "x", "whatsapp": "x" }))
        .await;
    assert_eq!(missing.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(missing.json::<Value>()["kind"], "UNAUTHORIZED");

    let forged = MockAdmin::new("admin", "some-other-secret");
    let (name, value) = forged.authorization();
    let bad = server
        .post("/api/admin/sellers")
        .add_header(name, value)
        .json(&json!({ "name": "x", "phone": "x", "whatsapp": "x" }))
        .await;
    assert_eq!(bad.status_code(), StatusCode::UNAUTHORIZED);

    let garbage = server
        .get("/api/admin/stats")
        .add_header(AUTHORIZATION, bearer("not-a-jwt"))
        .await;
    assert_eq!(garbage.status_code(), StatusCode::UNAUTHORIZED);

    assert_eq!(sellers::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn should_rotate_admin_password() {
    let (server, _db) = test_server().await;
    let (name, value) = admin().authorization();

    let short = server
        .put("/api/admin/change-password")
        .add_header(name.clone(), value.clone())
        .json(&json!({ "current_password": "admin123", "new_password": "123" }))
        .await;
    assert_eq!(short.status_code(), StatusCode::BAD_REQUEST);

    let wrong = server
        .put("/api/admin/change-password")
        .add_header(name.clone(), value.clone())
        .json(&json!({ "current_password": "nope", "new_password": "s3nha-nova" }))
        .await;
    assert_eq!(wrong.status_code(), StatusCode::UNAUTHORIZED);

    let changed = server
        .put("/api/admin/change-password")
        .add_header(name, value)
        .json(&json!({ "current_password": "admin123", "new_password": "s3nha-nova" }))
        .await;
    assert_eq!(changed.status_code(), StatusCode::OK);

    let old = server
        .post("/api/auth/login")
        .json(&json!({ "username": "admin", "password": "admin123" }))
        .await;
    assert_eq!(old.status_code(), StatusCode::UNAUTHORIZED);

    let new = server
        .post("/api/auth/login")
        .json(&json!({ "username": "admin", "password": "s3nha-nova" }))
        .await;
    assert_eq!(new.status_code(), StatusCode::OK);
}

// ── Settings ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_update_only_patched_settings_fields() {
    let (server, _db) = test_server().await;
    let (name, value) = admin().authorization();

    let before = server
        .get("/api/admin/settings")
        .add_header(name.clone(), value.clone())
        .await
        .json::<Value>();

    let unchanged = server
        .put("/api/admin/settings")
        .add_header(name.clone(), value.clone())
        .json(&json!({}))
        .await
        .json::<Value>();
    assert_eq!(unchanged, before);

    let after = server
        .put("/api/admin/settings")
        .add_header(name, value)
        .json(&json!({ "site_name": "X" }))
        .await
        .json::<Value>();
    assert_eq!(after["site_name"], "X");
    assert_eq!(after["primary_color"], before["primary_color"]);
    assert_eq!(after["email"], before["email"]);

    let public = server.get("/api/settings").await.json::<Value>();
    assert_eq!(public, after);
}

// ── Sellers and cars ─────────────────────────────────────────────────────────

#[tokio::test]
async fn should_run_car_lifecycle() {
    let (server, _db) = test_server().await;
    let (name, value) = admin().authorization();

    let seller = create_seller(&server).await;
    let car = create_car(&server, seller["id"].as_str().unwrap()).await;
    assert_eq!(car["status"], "available");
    assert_eq!(car["featured"], false);
    assert_eq!(car["seller_id"], seller["id"]);

    let car_id = car["id"].as_str().unwrap();
    let public = server
        .get(&format!("/api/cars/{car_id}"))
        .await
        .json::<Value>();
    assert!(public.get("seller_id").is_none());
    for field in [
        "id",
        "brand",
        "model",
        "year",
        "km",
        "price",
        "description",
        "images",
        "status",
        "featured",
        "created_at",
    ] {
        assert_eq!(public[field], car[field], "field {field}");
    }

    let sold = server
        .put(&format!("/api/admin/cars/{car_id}"))
        .add_header(name, value)
        .json(&json!({ "status": "sold" }))
        .await;
    assert_eq!(sold.status_code(), StatusCode::OK);
    assert_eq!(sold.json::<Value>()["brand"], "Chevrolet");

    let available = server
        .get("/api/cars")
        .add_query_param("status", "available")
        .await
        .json::<Vec<Value>>();
    assert!(available.is_empty());

    let sold_list = server
        .get("/api/cars")
        .add_query_param("status", "sold")
        .await
        .json::<Vec<Value>>();
    assert_eq!(sold_list.len(), 1);

    let all = server.get("/api/cars").await.json::<Vec<Value>>();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn should_reject_car_for_unknown_seller() {
    let (server, db) = test_server().await;
    let (name, value) = admin().authorization();

    let response = server
        .post("/api/admin/cars")
        .add_header(name, value)
        .json(&json!({
            "brand": "Fiat",
            "model": "Uno",
            "year": 2015,
            "km": 82000,
            "price": 29900.0,
            "description": "Revisado",
            "seller_id": "ghost"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "seller not found");
    assert_eq!(cars::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn should_show_null_seller_after_seller_deletion() {
    let (server, _db) = test_server().await;
    let (name, value) = admin().authorization();

    let seller = create_seller(&server).await;
    let seller_id = seller["id"].as_str().unwrap();
    create_car(&server, seller_id).await;

    let before = server
        .get("/api/admin/cars")
        .add_header(name.clone(), value.clone())
        .await
        .json::<Vec<Value>>();
    assert_eq!(before[0]["seller"]["id"], seller["id"]);

    let deleted = server
        .delete(&format!("/api/admin/sellers/{seller_id}"))
        .add_header(name.clone(), value.clone())
        .await;
    assert_eq!(
        deleted.json::<Value>(),
        json!({ "message": "Seller deleted successfully" })
    );

    let after = server
        .get("/api/admin/cars")
        .add_header(name, value)
        .await
        .json::<Vec<Value>>();
    assert_eq!(after.len(), 1);
    assert!(after[0]["seller"].is_null());
    assert_eq!(after[0]["seller_id"], seller["id"]);
}

#[tokio::test]
async fn should_return_not_found_for_missing_records() {
    let (server, _db) = test_server().await;
    let (name, value) = admin().authorization();

    let car = server.get("/api/cars/missing").await;
    assert_eq!(car.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(car.json::<Value>()["kind"], "CAR_NOT_FOUND");

    let seller = server
        .put("/api/admin/sellers/missing")
        .add_header(name.clone(), value.clone())
        .json(&json!({ "name": "x" }))
        .await;
    assert_eq!(seller.status_code(), StatusCode::NOT_FOUND);

    let delete = server
        .delete("/api/admin/cars/missing")
        .add_header(name, value)
        .await;
    assert_eq!(delete.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_report_stats() {
    let (server, _db) = test_server().await;
    let (name, value) = admin().authorization();

    let seller = create_seller(&server).await;
    let seller_id = seller["id"].as_str().unwrap();
    create_car(&server, seller_id).await;
    let second = create_car(&server, seller_id).await;
    server
        .put(&format!("/api/admin/cars/{}", second["id"].as_str().unwrap()))
        .add_header(name.clone(), value.clone())
        .json(&json!({ "status": "sold" }))
        .await;

    let stats = server
        .get("/api/admin/stats")
        .add_header(name, value)
        .await
        .json::<Value>();
    assert_eq!(
        stats,
        json!({
            "total_cars": 2,
            "available_cars": 1,
            "sold_cars": 1,
            "total_sellers": 1
        })
    );
}

// ── Bootstrap ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_bootstrap_idempotently() {
    let db = memory_db().await;
    let state = test_state(db.clone());

    bootstrap(&state).await;
    bootstrap(&state).await;

    assert_eq!(admins::Entity::find().count(&db).await.unwrap(), 1);
    assert_eq!(site_settings::Entity::find().count(&db).await.unwrap(), 1);
}
