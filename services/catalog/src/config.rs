/// Catalog service configuration loaded from environment variables.
#[derive(Debug)]
pub struct CatalogConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for signing admin JWTs.
    pub jwt_secret: String,
    /// TCP port for the HTTP server (default 8001). Env var: `CATALOG_PORT`.
    pub catalog_port: u16,
    /// Comma-separated allowed origins, `*` for any. Env var: `CORS_ORIGINS`.
    pub cors_origins: String,
    /// WhatsApp number shown on the storefront. Env var: `STORE_WHATSAPP`.
    pub store_whatsapp: String,
    /// Store display name. Env var: `STORE_NAME`.
    pub store_name: String,
    /// Password given to the `admin` account when bootstrap creates it.
    /// Env var: `ADMIN_BOOTSTRAP_PASSWORD`.
    pub admin_bootstrap_password: String,
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            catalog_port: std::env::var("CATALOG_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8001),
            cors_origins: std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_owned()),
            store_whatsapp: std::env::var("STORE_WHATSAPP")
                .unwrap_or_else(|_| "5511999999999".to_owned()),
            store_name: std::env::var("STORE_NAME").unwrap_or_else(|_| "AutoLeilão".to_owned()),
            admin_bootstrap_password: std::env::var("ADMIN_BOOTSTRAP_PASSWORD")
                .unwrap_or_else(|_| "admin123".to_owned()),
        }
    }
}
