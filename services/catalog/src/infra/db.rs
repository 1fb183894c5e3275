use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{self, Set},
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    sea_query::OnConflict,
};

use autoleilao_catalog_schema::{
    admins,
    cars::{self, ImageUrls},
    sellers, site_settings,
};
use autoleilao_domain::id::{AdminId, CarId, SellerId};

use crate::domain::repository::{
    AdminRepository, CarRepository, SellerRepository, SettingsRepository,
};
use crate::domain::types::{
    Admin, Car, CarPatch, Seller, SellerPatch, Settings, SettingsPatch,
};
use crate::error::CatalogServiceError;

// ── Admin repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAdminRepository {
    pub db: DatabaseConnection,
}

impl AdminRepository for DbAdminRepository {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Admin>, CatalogServiceError> {
        let model = admins::Entity::find()
            .filter(admins::Column::Username.eq(username))
            .one(&self.db)
            .await
            .context("find admin by username")?;
        Ok(model.map(|m| Admin {
            id: AdminId(m.id),
            username: m.username,
            password_hash: m.password_hash,
        }))
    }

    async fn create(&self, admin: &Admin) -> Result<(), CatalogServiceError> {
        admins::ActiveModel {
            id: Set(admin.id.0.clone()),
            username: Set(admin.username.clone()),
            password_hash: Set(admin.password_hash.clone()),
        }
        .insert(&self.db)
        .await
        .context("create admin")?;
        Ok(())
    }

    async fn update_password_hash(
        &self,
        id: &AdminId,
        password_hash: &str,
    ) -> Result<(), CatalogServiceError> {
        let am = admins::ActiveModel {
            password_hash: Set(password_hash.to_owned()),
            ..Default::default()
        };
        admins::Entity::update_many()
            .set(am)
            .filter(admins::Column::Id.eq(id.as_str()))
            .exec(&self.db)
            .await
            .context("update admin password hash")?;
        Ok(())
    }
}

// ── Settings repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSettingsRepository {
    pub db: DatabaseConnection,
}

impl SettingsRepository for DbSettingsRepository {
    async fn get(&self) -> Result<Option<Settings>, CatalogServiceError> {
        let model = site_settings::Entity::find_by_id(Settings::ID.to_owned())
            .one(&self.db)
            .await
            .context("find site settings")?;
        Ok(model.map(settings_from_model))
    }

    async fn insert_if_absent(&self, defaults: &Settings) -> Result<bool, CatalogServiceError> {
        let inserted = site_settings::Entity::insert(settings_active_model(defaults))
            .on_conflict(
                OnConflict::column(site_settings::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("insert default site settings")?;
        Ok(inserted > 0)
    }

    async fn upsert(
        &self,
        patch: &SettingsPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<(), CatalogServiceError> {
        // The insert row only matters when the singleton is missing; otherwise
        // the conflict clause rewrites just the patched columns.
        let mut row = Settings::defaults(updated_at);
        patch.apply_to(&mut row);

        let mut columns = patched_settings_columns(patch);
        columns.push(site_settings::Column::UpdatedAt);

        site_settings::Entity::insert(settings_active_model(&row))
            .on_conflict(
                OnConflict::column(site_settings::Column::Id)
                    .update_columns(columns)
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("upsert site settings")?;
        Ok(())
    }
}

fn patched_settings_columns(patch: &SettingsPatch) -> Vec<site_settings::Column> {
    use site_settings::Column as C;
    [
        (patch.site_name.is_some(), C::SiteName),
        (patch.logo_url.is_some(), C::LogoUrl),
        (patch.primary_color.is_some(), C::PrimaryColor),
        (patch.address.is_some(), C::Address),
        (patch.phone.is_some(), C::Phone),
        (patch.email.is_some(), C::Email),
        (patch.facebook_url.is_some(), C::FacebookUrl),
        (patch.instagram_url.is_some(), C::InstagramUrl),
    ]
    .into_iter()
    .filter_map(|(present, column)| present.then_some(column))
    .collect()
}

fn settings_active_model(settings: &Settings) -> site_settings::ActiveModel {
    site_settings::ActiveModel {
        id: Set(Settings::ID.to_owned()),
        site_name: Set(settings.site_name.clone()),
        logo_url: Set(settings.logo_url.clone()),
        primary_color: Set(settings.primary_color.clone()),
        address: Set(settings.address.clone()),
        phone: Set(settings.phone.clone()),
        email: Set(settings.email.clone()),
        facebook_url: Set(settings.facebook_url.clone()),
        instagram_url: Set(settings.instagram_url.clone()),
        updated_at: Set(settings.updated_at),
    }
}

fn settings_from_model(model: site_settings::Model) -> Settings {
    Settings {
        site_name: model.site_name,
        logo_url: model.logo_url,
        primary_color: model.primary_color,
        address: model.address,
        phone: model.phone,
        email: model.email,
        facebook_url: model.facebook_url,
        instagram_url: model.instagram_url,
        updated_at: model.updated_at,
    }
}

// ── Seller repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSellerRepository {
    pub db: DatabaseConnection,
}

impl SellerRepository for DbSellerRepository {
    async fn list(&self) -> Result<Vec<Seller>, CatalogServiceError> {
        let models = sellers::Entity::find()
            .all(&self.db)
            .await
            .context("list sellers")?;
        Ok(models.into_iter().map(seller_from_model).collect())
    }

    async fn find_by_id(&self, id: &SellerId) -> Result<Option<Seller>, CatalogServiceError> {
        let model = sellers::Entity::find_by_id(id.0.clone())
            .one(&self.db)
            .await
            .context("find seller by id")?;
        Ok(model.map(seller_from_model))
    }

    async fn find_by_ids(&self, ids: &[SellerId]) -> Result<Vec<Seller>, CatalogServiceError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let models = sellers::Entity::find()
            .filter(sellers::Column::Id.is_in(ids.iter().map(|id| id.0.clone())))
            .all(&self.db)
            .await
            .context("find sellers by ids")?;
        Ok(models.into_iter().map(seller_from_model).collect())
    }

    async fn create(&self, seller: &Seller) -> Result<(), CatalogServiceError> {
        seller_active_model(seller)
            .insert(&self.db)
        .await
        .context("create seller")?;
        Ok(())
    }

    async fn update(
        &self,
        id: &SellerId,
        patch: &SellerPatch,
    ) -> Result<Option<Seller>, CatalogServiceError> {
        if !patch.is_empty() {
            let result = sellers::Entity::update_many()
                .set(seller_patch_active_model(patch))
                .filter(sellers::Column::Id.eq(id.as_str()))
                .exec(&self.db)
                .await
                .context("update seller")?;
            if result.rows_affected == 0 {
                return Ok(None);
            }
        }
        self.find_by_id(id).await
    }

    async fn delete(&self, id: &SellerId) -> Result<bool, CatalogServiceError> {
        let result = sellers::Entity::delete_by_id(id.0.clone())
            .exec(&self.db)
            .await
            .context("delete seller")?;
        Ok(result.rows_affected > 0)
    }

    async fn count(&self) -> Result<u64, CatalogServiceError> {
        let total = sellers::Entity::find()
            .count(&self.db)
            .await
            .context("count sellers")?;
        Ok(total)
    }
}

/// Overwrite `slot` when the patch carries a value for it.
fn set_present<V>(slot: &mut ActiveValue<V>, value: &Option<V>)
where
    V: Into<sea_orm::Value> + Clone,
{
    if let Some(v) = value {
        *slot = Set(v.clone());
    }
}

fn seller_active_model(seller: &Seller) -> sellers::ActiveModel {
    sellers::ActiveModel {
        id: Set(seller.id.0.clone()),
        name: Set(seller.name.clone()),
        phone: Set(seller.phone.clone()),
        email: Set(seller.email.clone()),
        whatsapp: Set(seller.whatsapp.clone()),
        created_at: Set(seller.created_at),
    }
}

/// Column-wise form of [`SellerPatch::apply_to`]: only present fields are `Set`.
fn seller_patch_active_model(patch: &SellerPatch) -> sellers::ActiveModel {
    let mut am = sellers::ActiveModel {
        ..Default::default()
    };
    set_present(&mut am.name, &patch.name);
    set_present(&mut am.phone, &patch.phone);
    if let Some(email) = &patch.email {
        am.email = Set(Some(email.clone()));
    }
    set_present(&mut am.whatsapp, &patch.whatsapp);
    am
}

fn seller_from_model(model: sellers::Model) -> Seller {
    Seller {
        id: SellerId(model.id),
        name: model.name,
        phone: model.phone,
        email: model.email,
        whatsapp: model.whatsapp,
        created_at: model.created_at,
    }
}

// ── Car repository ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCarRepository {
    pub db: DatabaseConnection,
}

impl CarRepository for DbCarRepository {
    async fn list(&self, status: Option<&str>) -> Result<Vec<Car>, CatalogServiceError> {
        let mut query = cars::Entity::find();
        if let Some(status) = status {
            query = query.filter(cars::Column::Status.eq(status));
        }
        let models = query.all(&self.db).await.context("list cars")?;
        Ok(models.into_iter().map(car_from_model).collect())
    }

    async fn find_by_id(&self, id: &CarId) -> Result<Option<Car>, CatalogServiceError> {
        let model = cars::Entity::find_by_id(id.0.clone())
            .one(&self.db)
            .await
            .context("find car by id")?;
        Ok(model.map(car_from_model))
    }

    async fn create(&self, car: &Car) -> Result<(), CatalogServiceError> {
        car_active_model(car)
            .insert(&self.db)
        .await
        .context("create car")?;
        Ok(())
    }

    async fn update(
        &self,
        id: &CarId,
        patch: &CarPatch,
    ) -> Result<Option<Car>, CatalogServiceError> {
        if !patch.is_empty() {
            let result = cars::Entity::update_many()
                .set(car_patch_active_model(patch))
                .filter(cars::Column::Id.eq(id.as_str()))
                .exec(&self.db)
                .await
                .context("update car")?;
            if result.rows_affected == 0 {
                return Ok(None);
            }
        }
        self.find_by_id(id).await
    }

    async fn delete(&self, id: &CarId) -> Result<bool, CatalogServiceError> {
        let result = cars::Entity::delete_by_id(id.0.clone())
            .exec(&self.db)
            .await
            .context("delete car")?;
        Ok(result.rows_affected > 0)
    }

    async fn count(&self, status: Option<&str>) -> Result<u64, CatalogServiceError> {
        let mut query = cars::Entity::find();
        if let Some(status) = status {
            query = query.filter(cars::Column::Status.eq(status));
        }
        let total = query.count(&self.db).await.context("count cars")?;
        Ok(total)
    }
}

fn car_active_model(car: &Car) -> cars::ActiveModel {
    cars::ActiveModel {
        id: Set(car.id.0.clone()),
        brand: Set(car.brand.clone()),
        model_name: Set(car.model.clone()),
        year: Set(car.year),
        km: Set(car.km),
        price: Set(car.price),
        description: Set(car.description.clone()),
        images: Set(ImageUrls(car.images.clone())),
        seller_id: Set(car.seller_id.0.clone()),
        status: Set(car.status.clone()),
        featured: Set(car.featured),
        created_at: Set(car.created_at),
    }
}

/// Column-wise form of [`CarPatch::apply_to`]: only present fields are `Set`.
fn car_patch_active_model(patch: &CarPatch) -> cars::ActiveModel {
    let mut am = cars::ActiveModel {
        ..Default::default()
    };
    set_present(&mut am.brand, &patch.brand);
    set_present(&mut am.model_name, &patch.model);
    set_present(&mut am.year, &patch.year);
    set_present(&mut am.km, &patch.km);
    set_present(&mut am.price, &patch.price);
    set_present(&mut am.description, &patch.description);
    if let Some(images) = &patch.images {
        am.images = Set(ImageUrls(images.clone()));
    }
    if let Some(seller_id) = &patch.seller_id {
        am.seller_id = Set(seller_id.0.clone());
    }
    set_present(&mut am.status, &patch.status);
    set_present(&mut am.featured, &patch.featured);
    am
}

fn car_from_model(model: cars::Model) -> Car {
    Car {
        id: CarId(model.id),
        brand: model.brand,
        model: model.model_name,
        year: model.year,
        km: model.km,
        price: model.price,
        description: model.description,
        images: model.images.0,
        seller_id: SellerId(model.seller_id),
        status: model.status,
        featured: model.featured,
        created_at: model.created_at,
    }
}
