use chrono::{DateTime, Utc};

use autoleilao_domain::id::{AdminId, CarId, SellerId};
use autoleilao_domain::settings::{DEFAULT_PRIMARY_COLOR, DEFAULT_SITE_NAME, SETTINGS_ID};

/// Overwrite `slot` when the patch carries a value for it.
fn merge<T: Clone>(slot: &mut T, value: &Option<T>) {
    if let Some(v) = value {
        *slot = v.clone();
    }
}

// ── Settings ─────────────────────────────────────────────────────────────────

/// Site-wide branding and contact details (singleton).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub site_name: String,
    pub logo_url: String,
    pub primary_color: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub facebook_url: String,
    pub instagram_url: String,
    pub updated_at: DateTime<Utc>,
}

impl Settings {
    /// Fixed identity of the singleton row.
    pub const ID: &'static str = SETTINGS_ID;

    /// The settings a fresh installation starts with.
    pub fn defaults(now: DateTime<Utc>) -> Self {
        Self {
            site_name: DEFAULT_SITE_NAME.to_owned(),
            logo_url: String::new(),
            primary_color: DEFAULT_PRIMARY_COLOR.to_owned(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            facebook_url: String::new(),
            instagram_url: String::new(),
            updated_at: now,
        }
    }
}

/// Partial settings update. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub site_name: Option<String>,
    pub logo_url: Option<String>,
    pub primary_color: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        self.site_name.is_none()
            && self.logo_url.is_none()
            && self.primary_color.is_none()
            && self.address.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.facebook_url.is_none()
            && self.instagram_url.is_none()
    }

    /// Copy every present field onto `settings`. Does not touch `updated_at`.
    pub fn apply_to(&self, settings: &mut Settings) {
        merge(&mut settings.site_name, &self.site_name);
        merge(&mut settings.logo_url, &self.logo_url);
        merge(&mut settings.primary_color, &self.primary_color);
        merge(&mut settings.address, &self.address);
        merge(&mut settings.phone, &self.phone);
        merge(&mut settings.email, &self.email);
        merge(&mut settings.facebook_url, &self.facebook_url);
        merge(&mut settings.instagram_url, &self.instagram_url);
    }
}

// ── Seller ───────────────────────────────────────────────────────────────────

/// A person or dealership that owns car listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seller {
    pub id: SellerId,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub whatsapp: String,
    pub created_at: DateTime<Utc>,
}

/// Partial seller update. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SellerPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub whatsapp: Option<String>,
}

impl SellerPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.whatsapp.is_none()
    }

    /// The merge rule for sellers. The SQL patch in `infra::db` is checked against it.
    pub fn apply_to(&self, seller: &mut Seller) {
        merge(&mut seller.name, &self.name);
        merge(&mut seller.phone, &self.phone);
        if let Some(email) = &self.email {
            seller.email = Some(email.clone());
        }
        merge(&mut seller.whatsapp, &self.whatsapp);
    }
}

// ── Car ──────────────────────────────────────────────────────────────────────

/// A vehicle listing, as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub id: CarId,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub km: i64,
    pub price: f64,
    pub description: String,
    pub images: Vec<String>,
    pub seller_id: SellerId,
    pub status: String,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

/// Partial car update. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarPatch {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub km: Option<i64>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
    pub seller_id: Option<SellerId>,
    pub status: Option<String>,
    pub featured: Option<bool>,
}

impl CarPatch {
    pub fn is_empty(&self) -> bool {
        self.brand.is_none()
            && self.model.is_none()
            && self.year.is_none()
            && self.km.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.images.is_none()
            && self.seller_id.is_none()
            && self.status.is_none()
            && self.featured.is_none()
    }

    /// The merge rule for cars. The SQL patch in `infra::db` is checked against it.
    pub fn apply_to(&self, car: &mut Car) {
        merge(&mut car.brand, &self.brand);
        merge(&mut car.model, &self.model);
        merge(&mut car.year, &self.year);
        merge(&mut car.km, &self.km);
        merge(&mut car.price, &self.price);
        merge(&mut car.description, &self.description);
        merge(&mut car.images, &self.images);
        merge(&mut car.seller_id, &self.seller_id);
        merge(&mut car.status, &self.status);
        merge(&mut car.featured, &self.featured);
    }
}

/// Public projection of a car: everything except the seller linkage.
#[derive(Debug, Clone, PartialEq)]
pub struct CarPublic {
    pub id: CarId,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub km: i64,
    pub price: f64,
    pub description: String,
    pub images: Vec<String>,
    pub status: String,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Car> for CarPublic {
    fn from(car: Car) -> Self {
        Self {
            id: car.id,
            brand: car.brand,
            model: car.model,
            year: car.year,
            km: car.km,
            price: car.price,
            description: car.description,
            images: car.images,
            status: car.status,
            featured: car.featured,
            created_at: car.created_at,
        }
    }
}

/// Admin projection of a car with its seller resolved at read time.
/// `seller` is `None` when the referenced seller no longer exists.
#[derive(Debug, Clone, PartialEq)]
pub struct CarWithSeller {
    pub car: Car,
    pub seller: Option<Seller>,
}

/// Dashboard counters. Each is read independently, so under concurrent writes
/// the numbers may not add up to a single point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub total_cars: u64,
    pub available_cars: u64,
    pub sold_cars: u64,
    pub total_sellers: u64,
}

// ── Admin / store ────────────────────────────────────────────────────────────

/// Back-office principal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admin {
    pub id: AdminId,
    pub username: String,
    pub password_hash: String,
}

/// Contact shown on the storefront, sourced from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreInfo {
    pub whatsapp: String,
    pub name: String,
}
