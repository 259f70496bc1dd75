use crate::domain::repository::OfferRepository;
use crate::domain::types::Offer;
use crate::error::ApiError;

// ── ListOffers ───────────────────────────────────────────────────────────────

pub struct ListOffersUseCase<R: OfferRepository> {
    pub repo: R,
}

impl<R: OfferRepository> ListOffersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Offer>, ApiError> {
        self.repo.list().await
    }
}

// ── GetOffer ─────────────────────────────────────────────────────────────────

pub struct GetOfferUseCase<R: OfferRepository> {
    pub repo: R,
}

impl<R: OfferRepository> GetOfferUseCase<R> {
    pub async fn execute(&self, offer_id: i32) -> Result<Offer, ApiError> {
        self.repo
            .find_by_id(offer_id)
            .await?
            .ok_or(ApiError::OfferNotFound)
    }
}

// ── CreateOffer ──────────────────────────────────────────────────────────────

pub struct CreateOfferUseCase<R: OfferRepository> {
    pub repo: R,
}

impl<R: OfferRepository> CreateOfferUseCase<R> {
    pub async fn execute(&self, input: Offer) -> Result<(), ApiError> {
        self.repo.create(&input).await
    }
}

// ── UpdateOffer ──────────────────────────────────────────────────────────────

pub struct UpdateOfferUseCase<R: OfferRepository> {
    pub repo: R,
}

impl<R: OfferRepository> UpdateOfferUseCase<R> {
    pub async fn execute(&self, offer_id: i32, input: Offer) -> Result<(), ApiError> {
        if !self.repo.replace(offer_id, &input).await? {
            return Err(ApiError::OfferNotFound);
        }
        Ok(())
    }
}

// ── DeleteOffer ──────────────────────────────────────────────────────────────

pub struct DeleteOfferUseCase<R: OfferRepository> {
    pub repo: R,
}

impl<R: OfferRepository> DeleteOfferUseCase<R> {
    pub async fn execute(&self, offer_id: i32) -> Result<(), ApiError> {
        let deleted = self.repo.delete(offer_id).await?;
        if !deleted {
            return Err(ApiError::OfferNotFound);
        }
        Ok(())
    }
}
