use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use autoleilao_catalog::domain::repository::{
    AdminRepository, CarRepository, SellerRepository, SettingsRepository,
};
use autoleilao_catalog::domain::types::{
    Admin, Car, CarPatch, Seller, SellerPatch, Settings, SettingsPatch,
};
use autoleilao_catalog::error::CatalogServiceError;
use autoleilao_catalog::infra::password::hash_password;
use autoleilao_domain::id::{AdminId, CarId, SellerId};

pub const TEST_JWT_SECRET: &str = "test-secret-for-integration-tests";

// ── MockAdminRepo ────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockAdminRepo {
    pub admins: Arc<Mutex<Vec<Admin>>>,
}

impl MockAdminRepo {
    pub fn new(admins: Vec<Admin>) -> Self {
        Self {
            admins: Arc::new(Mutex::new(admins)),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a shared handle to the internal admin list for post-execution inspection.
    pub fn admins_handle(&self) -> Arc<Mutex<Vec<Admin>>> {
        Arc::clone(&self.admins)
    }
}

impl AdminRepository for MockAdminRepo {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Admin>, CatalogServiceError> {
        Ok(self
            .admins
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.username == username)
            .cloned())
    }

    async fn create(&self, admin: &Admin) -> Result<(), CatalogServiceError> {
        self.admins.lock().unwrap().push(admin.clone());
        Ok(())
    }

    async fn update_password_hash(
        &self,
        id: &AdminId,
        password_hash: &str,
    ) -> Result<(), CatalogServiceError> {
        if let Some(admin) = self.admins.lock().unwrap().iter_mut().find(|a| &a.id == id) {
            admin.password_hash = password_hash.to_owned();
        }
        Ok(())
    }
}

// ── MockSettingsRepo ─────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockSettingsRepo {
    pub settings: Arc<Mutex<Option<Settings>>>,
    pub writes: Arc<Mutex<u32>>,
}

impl MockSettingsRepo {
    pub fn new(settings: Option<Settings>) -> Self {
        Self {
            settings: Arc::new(Mutex::new(settings)),
            writes: Arc::default(),
        }
    }

    pub fn write_count(&self) -> u32 {
        *self.writes.lock().unwrap()
    }
}

impl SettingsRepository for MockSettingsRepo {
    async fn get(&self) -> Result<Option<Settings>, CatalogServiceError> {
        Ok(self.settings.lock().unwrap().clone())
    }

    async fn insert_if_absent(&self, defaults: &Settings) -> Result<bool, CatalogServiceError> {
        let mut slot = self.settings.lock().unwrap();
        if slot.is_some() {
            return Ok(false);
        }
        *slot = Some(defaults.clone());
        *self.writes.lock().unwrap() += 1;
        Ok(true)
    }

    async fn upsert(
        &self,
        patch: &SettingsPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<(), CatalogServiceError> {
        let mut slot = self.settings.lock().unwrap();
        let settings = slot.get_or_insert_with(|| Settings::defaults(updated_at));
        patch.apply_to(settings);
        settings.updated_at = updated_at;
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }
}

// ── MockSellerRepo ───────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockSellerRepo {
    pub sellers: Arc<Mutex<Vec<Seller>>>,
}

impl MockSellerRepo {
    pub fn new(sellers: Vec<Seller>) -> Self {
        Self {
            sellers: Arc::new(Mutex::new(sellers)),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

impl SellerRepository for MockSellerRepo {
    async fn list(&self) -> Result<Vec<Seller>, CatalogServiceError> {
        Ok(self.sellers.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: &SellerId) -> Result<Option<Seller>, CatalogServiceError> {
        Ok(self
            .sellers
            .lock()
            .unwrap()
            .iter()
            .find(|s| &s.id == id)
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[SellerId]) -> Result<Vec<Seller>, CatalogServiceError> {
        Ok(self
            .sellers
            .lock()
            .unwrap()
            .iter()
            .filter(|s| ids.contains(&s.id))
            .cloned()
            .collect())
    }

    async fn create(&self, seller: &Seller) -> Result<(), CatalogServiceError> {
        self.sellers.lock().unwrap().push(seller.clone());
        Ok(())
    }

    async fn update(
        &self,
        id: &SellerId,
        patch: &SellerPatch,
    ) -> Result<Option<Seller>, CatalogServiceError> {
        let mut sellers = self.sellers.lock().unwrap();
        Ok(sellers.iter_mut().find(|s| &s.id == id).map(|seller| {
            patch.apply_to(seller);
            seller.clone()
        }))
    }

    async fn delete(&self, id: &SellerId) -> Result<bool, CatalogServiceError> {
        let mut sellers = self.sellers.lock().unwrap();
        let before = sellers.len();
        sellers.retain(|s| &s.id != id);
        Ok(sellers.len() < before)
    }

    async fn count(&self) -> Result<u64, CatalogServiceError> {
        Ok(self.sellers.lock().unwrap().len() as u64)
    }
}

// ── MockCarRepo ──────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockCarRepo {
    pub cars: Arc<Mutex<Vec<Car>>>,
}

impl MockCarRepo {
    pub fn new(cars: Vec<Car>) -> Self {
        Self {
            cars: Arc::new(Mutex::new(cars)),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cars.lock().unwrap().len()
    }
}

impl CarRepository for MockCarRepo {
    async fn list(&self, status: Option<&str>) -> Result<Vec<Car>, CatalogServiceError> {
        Ok(self
            .cars
            .lock()
            .unwrap()
            .iter()
            .filter(|c| status.is_none_or(|s| c.status == s))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &CarId) -> Result<Option<Car>, CatalogServiceError> {
        Ok(self
            .cars
            .lock()
            .unwrap()
            .iter()
            .find(|c| &c.id == id)
            .cloned())
    }

    async fn create(&self, car: &Car) -> Result<(), CatalogServiceError> {
        self.cars.lock().unwrap().push(car.clone());
        Ok(())
    }

    async fn update(
        &self,
        id: &CarId,
        patch: &CarPatch,
    ) -> Result<Option<Car>, CatalogServiceError> {
        let mut cars = self.cars.lock().unwrap();
        Ok(cars.iter_mut().find(|c| &c.id == id).map(|car| {
            patch.apply_to(car);
            car.clone()
        }))
    }

    async fn delete(&self, id: &CarId) -> Result<bool, CatalogServiceError> {
        let mut cars = self.cars.lock().unwrap();
        let before = cars.len();
        cars.retain(|c| &c.id != id);
        Ok(cars.len() < before)
    }

    async fn count(&self, status: Option<&str>) -> Result<u64, CatalogServiceError> {
        Ok(self.list(status).await?.len() as u64)
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub async fn test_admin(username: &str, password: &str) -> Admin {
    Admin {
        id: AdminId::generate(),
        username: username.to_owned(),
        password_hash: hash_password(password.to_owned()).await.unwrap(),
    }
}

pub fn test_seller(id: &str) -> Seller {
    Seller {
        id: SellerId::from(id),
        name: "Revenda Paulista".into(),
        phone: "11 3333-4444".into(),
        email: Some("contato@revenda.example".into()),
        whatsapp: "5511988887777".into(),
        created_at: Utc::now(),
    }
}

pub fn test_car(id: &str, seller_id: &str, status: &str) -> Car {
    Car {
        id: CarId::from(id),
        brand: "Fiat".into(),
        model: "Uno".into(),
        year: 2015,
        km: 82_000,
        price: 29_900.0,
        description: "Revisado".into(),
        images: vec![],
        seller_id: SellerId::from(seller_id),
        status: status.to_owned(),
        featured: false,
        created_at: Utc::now(),
    }
}
