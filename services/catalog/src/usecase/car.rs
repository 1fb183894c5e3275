use std::collections::HashMap;

use chrono::Utc;

use autoleilao_domain::car::{STATUS_AVAILABLE, STATUS_SOLD};
use autoleilao_domain::id::{CarId, SellerId};

use crate::domain::repository::{CarRepository, SellerRepository};
use crate::domain::types::{Car, CarPatch, CarPublic, CarWithSeller, CatalogStats};
use crate::error::CatalogServiceError;

// ── ListPublicCars ───────────────────────────────────────────────────────────

pub struct ListPublicCarsUseCase<C: CarRepository> {
    pub cars: C,
}

impl<C: CarRepository> ListPublicCarsUseCase<C> {
    pub async fn execute(
        &self,
        status: Option<&str>,
    ) -> Result<Vec<CarPublic>, CatalogServiceError> {
        let cars = self.cars.list(status).await?;
        Ok(cars.into_iter().map(CarPublic::from).collect())
    }
}

// ── GetPublicCar ─────────────────────────────────────────────────────────────

pub struct GetPublicCarUseCase<C: CarRepository> {
    pub cars: C,
}

impl<C: CarRepository> GetPublicCarUseCase<C> {
    pub async fn execute(&self, id: &CarId) -> Result<CarPublic, CatalogServiceError> {
        self.cars
            .find_by_id(id)
            .await?
            .map(CarPublic::from)
            .ok_or(CatalogServiceError::CarNotFound)
    }
}

// ── ListCarsWithSeller ───────────────────────────────────────────────────────

pub struct ListCarsWithSellerUseCase<C: CarRepository, S: SellerRepository> {
    pub cars: C,
    pub sellers: S,
}

impl<C: CarRepository, S: SellerRepository> ListCarsWithSellerUseCase<C, S> {
    pub async fn execute(&self) -> Result<Vec<CarWithSeller>, CatalogServiceError> {
        let cars = self.cars.list(None).await?;

        let mut seller_ids: Vec<SellerId> = cars.iter().map(|c| c.seller_id.clone()).collect();
        seller_ids.sort_unstable_by(|a, b| a.as_str().cmp(b.as_str()));
        seller_ids.dedup();

        let sellers: HashMap<SellerId, _> = self
            .sellers
            .find_by_ids(&seller_ids)
            .await?
            .into_iter()
            .map(|s| (s.id.clone(), s))
            .collect();

        Ok(cars
            .into_iter()
            .map(|car| {
                let seller = sellers.get(&car.seller_id).cloned();
                CarWithSeller { car, seller }
            })
            .collect())
    }
}

// ── CreateCar ────────────────────────────────────────────────────────────────

pub struct CreateCarInput {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub km: i64,
    pub price: f64,
    pub description: String,
    pub images: Vec<String>,
    pub seller_id: SellerId,
    pub status: Option<String>,
    pub featured: Option<bool>,
}

pub struct CreateCarUseCase<C: CarRepository, S: SellerRepository> {
    pub cars: C,
    pub sellers: S,
}

impl<C: CarRepository, S: SellerRepository> CreateCarUseCase<C, S> {
    pub async fn execute(&self, input: CreateCarInput) -> Result<Car, CatalogServiceError> {
        if self.sellers.find_by_id(&input.seller_id).await?.is_none() {
            return Err(CatalogServiceError::SellerNotFound);
        }

        let car = Car {
            id: CarId::generate(),
            brand: input.brand,
            model: input.model,
            year: input.year,
            km: input.km,
            price: input.price,
            description: input.description,
            images: input.images,
            seller_id: input.seller_id,
            status: input.status.unwrap_or_else(|| STATUS_AVAILABLE.to_owned()),
            featured: input.featured.unwrap_or(false),
            created_at: Utc::now(),
        };
        self.cars.create(&car).await?;
        Ok(car)
    }
}

// ── UpdateCar ────────────────────────────────────────────────────────────────

pub struct UpdateCarUseCase<C: CarRepository, S: SellerRepository> {
    pub cars: C,
    pub sellers: S,
}

impl<C: CarRepository, S: SellerRepository> UpdateCarUseCase<C, S> {
    pub async fn execute(&self, id: &CarId, patch: CarPatch) -> Result<Car, CatalogServiceError> {
        // Re-pointing a car must target a live seller, same as on create.
        if let Some(seller_id) = &patch.seller_id {
            if self.sellers.find_by_id(seller_id).await?.is_none() {
                return Err(CatalogServiceError::SellerNotFound);
            }
        }

        self.cars
            .update(id, &patch)
            .await?
            .ok_or(CatalogServiceError::CarNotFound)
    }
}

// ── DeleteCar ────────────────────────────────────────────────────────────────

pub struct DeleteCarUseCase<C: CarRepository> {
    pub cars: C,
}

impl<C: CarRepository> DeleteCarUseCase<C> {
    pub async fn execute(&self, id: &CarId) -> Result<(), CatalogServiceError> {
        if !self.cars.delete(id).await? {
            return Err(CatalogServiceError::CarNotFound);
        }
        Ok(())
    }
}

// ── GetStats ─────────────────────────────────────────────────────────────────

pub struct GetStatsUseCase<C: CarRepository, S: SellerRepository> {
    pub cars: C,
    pub sellers: S,
}

impl<C: CarRepository, S: SellerRepository> GetStatsUseCase<C, S> {
    pub async fn execute(&self) -> Result<CatalogStats, CatalogServiceError> {
        Ok(CatalogStats {
            total_cars: self.cars.count(None).await?,
            available_cars: self.cars.count(Some(STATUS_AVAILABLE)).await?,
            sold_cars: self.cars.count(Some(STATUS_SOLD)).await?,
            total_sellers: self.sellers.count().await?,
        })
    }
}
