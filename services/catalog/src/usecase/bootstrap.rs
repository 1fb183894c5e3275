use chrono::Utc;

use autoleilao_domain::id::AdminId;

use crate::domain::repository::{AdminRepository, SettingsRepository};
use crate::domain::types::{Admin, Settings};
use crate::error::CatalogServiceError;
use crate::infra::password::hash_password;

/// Username of the administrator seeded on first start.
pub const BOOTSTRAP_ADMIN_USERNAME: &str = "admin";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    pub admin_created: bool,
    pub settings_created: bool,
}

/// Seeds the default administrator and the settings singleton. Idempotent:
/// existing records are never overwritten.
pub struct BootstrapUseCase<A: AdminRepository, R: SettingsRepository> {
    pub admins: A,
    pub settings: R,
    pub default_password: String,
}

impl<A: AdminRepository, R: SettingsRepository> BootstrapUseCase<A, R> {
    pub async fn execute(&self) -> Result<BootstrapReport, CatalogServiceError> {
        let mut report = BootstrapReport::default();

        if self
            .admins
            .find_by_username(BOOTSTRAP_ADMIN_USERNAME)
            .await?
            .is_none()
        {
            let password_hash = hash_password(self.default_password.clone()).await?;
            self.admins
                .create(&Admin {
                    id: AdminId::generate(),
                    username: BOOTSTRAP_ADMIN_USERNAME.to_owned(),
                    password_hash,
                })
                .await?;
            tracing::info!(username = BOOTSTRAP_ADMIN_USERNAME, "default admin created");
            report.admin_created = true;
        }

        if self.settings.get().await?.is_none() {
            report.settings_created = self
                .settings
                .insert_if_absent(&Settings::defaults(Utc::now()))
                .await?;
            if report.settings_created {
                tracing::info!("default site settings created");
            }
        }

        Ok(report)
    }
}
