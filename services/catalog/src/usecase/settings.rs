use anyhow::anyhow;
use chrono::Utc;

use crate::domain::repository::SettingsRepository;
use crate::domain::types::{Settings, SettingsPatch};
use crate::error::CatalogServiceError;

/// Read the singleton, persisting the defaults first if it does not exist yet.
async fn load_or_seed<R: SettingsRepository>(repo: &R) -> Result<Settings, CatalogServiceError> {
    if let Some(settings) = repo.get().await? {
        return Ok(settings);
    }
    if repo.insert_if_absent(&Settings::defaults(Utc::now())).await? {
        tracing::info!("default site settings created");
    }
    // Re-read: a concurrent request may have seeded or updated the row first.
    repo.get()
        .await?
        .ok_or_else(|| anyhow!("site settings missing after seeding").into())
}

// ── GetSettings ──────────────────────────────────────────────────────────────

/// Serves both the public and the admin settings endpoints.
pub struct GetSettingsUseCase<R: SettingsRepository> {
    pub repo: R,
}

impl<R: SettingsRepository> GetSettingsUseCase<R> {
    pub async fn execute(&self) -> Result<Settings, CatalogServiceError> {
        load_or_seed(&self.repo).await
    }
}

// ── UpdateSettings ───────────────────────────────────────────────────────────

pub struct UpdateSettingsUseCase<R: SettingsRepository> {
    pub repo: R,
}

impl<R: SettingsRepository> UpdateSettingsUseCase<R> {
    /// Merge the present fields and stamp `updated_at`. An empty patch writes nothing.
    pub async fn execute(&self, patch: SettingsPatch) -> Result<Settings, CatalogServiceError> {
        if !patch.is_empty() {
            self.repo.upsert(&patch, Utc::now()).await?;
        }
        load_or_seed(&self.repo).await
    }
}
