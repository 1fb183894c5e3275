use sea_orm::Database;
use tracing::info;

use autoleilao_auth_types::identity::JwtSecret;
use autoleilao_core::middleware::cors_layer;
use autoleilao_core::tracing::init_tracing;

use autoleilao_catalog::config::CatalogConfig;
use autoleilao_catalog::domain::types::StoreInfo;
use autoleilao_catalog::router::build_router;
use autoleilao_catalog::state::AppState;
use autoleilao_catalog::usecase::bootstrap::BootstrapUseCase;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = CatalogConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        jwt_secret: JwtSecret::new(config.jwt_secret.as_str()),
        store_info: StoreInfo {
            whatsapp: config.store_whatsapp.clone(),
            name: config.store_name.clone(),
        },
    };

    let bootstrap = BootstrapUseCase {
        admins: state.admin_repo(),
        settings: state.settings_repo(),
        default_password: config.admin_bootstrap_password.clone(),
    };
    let report = bootstrap.execute().await.expect("bootstrap failed");
    info!(
        admin_created = report.admin_created,
        settings_created = report.settings_created,
        "bootstrap complete"
    );

    let router = build_router(state).layer(cors_layer(&config.cors_origins));
    let http_addr = format!("0.0.0.0:{}", config.catalog_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("catalog service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
