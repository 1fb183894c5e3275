#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};

use autoleilao_domain::id::{AdminId, CarId, SellerId};

use crate::domain::types::{Admin, Car, CarPatch, Seller, SellerPatch, Settings, SettingsPatch};
use crate::error::CatalogServiceError;

/// Repository for back-office principals.
pub trait AdminRepository: Send + Sync {
    async fn find_by_username(&self, username: &str)
    -> Result<Option<Admin>, CatalogServiceError>;
    async fn create(&self, admin: &Admin) -> Result<(), CatalogServiceError>;
    async fn update_password_hash(
        &self,
        id: &AdminId,
        password_hash: &str,
    ) -> Result<(), CatalogServiceError>;
}

/// Single-row store for the site settings singleton.
pub trait SettingsRepository: Send + Sync {
    async fn get(&self) -> Result<Option<Settings>, CatalogServiceError>;

    /// Insert `defaults` unless the singleton already exists. Returns `true` if inserted.
    async fn insert_if_absent(&self, defaults: &Settings) -> Result<bool, CatalogServiceError>;

    /// Write the present fields of `patch` and `updated_at`, creating the row
    /// from defaults first if it is missing.
    async fn upsert(
        &self,
        patch: &SettingsPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<(), CatalogServiceError>;
}

/// Repository for sellers.
pub trait SellerRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Seller>, CatalogServiceError>;
    async fn find_by_id(&self, id: &SellerId) -> Result<Option<Seller>, CatalogServiceError>;
    async fn find_by_ids(&self, ids: &[SellerId]) -> Result<Vec<Seller>, CatalogServiceError>;
    async fn create(&self, seller: &Seller) -> Result<(), CatalogServiceError>;

    /// Apply `patch` and return the post-merge seller, or `None` if `id` does not exist.
    async fn update(
        &self,
        id: &SellerId,
        patch: &SellerPatch,
    ) -> Result<Option<Seller>, CatalogServiceError>;

    /// Delete a seller. Returns `true` if a row was deleted.
    async fn delete(&self, id: &SellerId) -> Result<bool, CatalogServiceError>;
    async fn count(&self) -> Result<u64, CatalogServiceError>;
}

/// Repository for car listings.
pub trait CarRepository: Send + Sync {
    /// All cars, optionally restricted to an exact `status`. Store-native order.
    async fn list(&self, status: Option<&str>) -> Result<Vec<Car>, CatalogServiceError>;
    async fn find_by_id(&self, id: &CarId) -> Result<Option<Car>, CatalogServiceError>;
    async fn create(&self, car: &Car) -> Result<(), CatalogServiceError>;

    /// Apply `patch` and return the post-merge car, or `None` if `id` does not exist.
    async fn update(&self, id: &CarId, patch: &CarPatch)
    -> Result<Option<Car>, CatalogServiceError>;

    /// Delete a car. Returns `true` if a row was deleted.
    async fn delete(&self, id: &CarId) -> Result<bool, CatalogServiceError>;
    async fn count(&self, status: Option<&str>) -> Result<u64, CatalogServiceError>;
}
