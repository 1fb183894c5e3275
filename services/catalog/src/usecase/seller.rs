use chrono::Utc;

use autoleilao_domain::id::SellerId;

use crate::domain::repository::SellerRepository;
use crate::domain::types::{Seller, SellerPatch};
use crate::error::CatalogServiceError;

// ── ListSellers ──────────────────────────────────────────────────────────────

pub struct ListSellersUseCase<R: SellerRepository> {
    pub repo: R,
}

impl<R: SellerRepository> ListSellersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Seller>, CatalogServiceError> {
        self.repo.list().await
    }
}

// ── CreateSeller ─────────────────────────────────────────────────────────────

pub struct CreateSellerInput {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub whatsapp: String,
}

pub struct CreateSellerUseCase<R: SellerRepository> {
    pub repo: R,
}

impl<R: SellerRepository> CreateSellerUseCase<R> {
    pub async fn execute(&self, input: CreateSellerInput) -> Result<Seller, CatalogServiceError> {
        let seller = Seller {
            id: SellerId::generate(),
            name: input.name,
            phone: input.phone,
            email: input.email,
            whatsapp: input.whatsapp,
            created_at: Utc::now(),
        };
        self.repo.create(&seller).await?;
        Ok(seller)
    }
}

// ── UpdateSeller ─────────────────────────────────────────────────────────────

pub struct UpdateSellerUseCase<R: SellerRepository> {
    pub repo: R,
}

impl<R: SellerRepository> UpdateSellerUseCase<R> {
    pub async fn execute(
        &self,
        id: &SellerId,
        patch: SellerPatch,
    ) -> Result<Seller, CatalogServiceError> {
        self.repo
            .update(id, &patch)
            .await?
            .ok_or(CatalogServiceError::SellerNotFound)
    }
}

// ── DeleteSeller ─────────────────────────────────────────────────────────────

/// Cars that reference the seller are left untouched.
pub struct DeleteSellerUseCase<R: SellerRepository> {
    pub repo: R,
}

impl<R: SellerRepository> DeleteSellerUseCase<R> {
    pub async fn execute(&self, id: &SellerId) -> Result<(), CatalogServiceError> {
        if !self.repo.delete(id).await? {
            return Err(CatalogServiceError::SellerNotFound);
        }
        Ok(())
    }
}
