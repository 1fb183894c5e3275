use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use autoleilao_auth_types::identity::JwtSecret;

use crate::domain::types::StoreInfo;
use crate::infra::db::{
    DbAdminRepository, DbCarRepository, DbSellerRepository, DbSettingsRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: JwtSecret,
    pub store_info: StoreInfo,
}

impl FromRef<AppState> for JwtSecret {
    fn from_ref(state: &AppState) -> Self {
        state.jwt_secret.clone()
    }
}

impl AppState {
    pub fn admin_repo(&self) -> DbAdminRepository {
        DbAdminRepository {
            db: self.db.clone(),
        }
    }

    pub fn settings_repo(&self) -> DbSettingsRepository {
        DbSettingsRepository {
            db: self.db.clone(),
        }
    }

    pub fn seller_repo(&self) -> DbSellerRepository {
        DbSellerRepository {
            db: self.db.clone(),
        }
    }

    pub fn car_repo(&self) -> DbCarRepository {
        DbCarRepository {
            db: self.db.clone(),
        }
    }
}
