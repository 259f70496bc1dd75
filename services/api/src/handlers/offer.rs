use axum::{
    Json,
    extract::{Path, State},
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};

use crate::domain::types::Offer;
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::offer::{
    CreateOfferUseCase, DeleteOfferUseCase, GetOfferUseCase, ListOffersUseCase,
    UpdateOfferUseCase,
};

#[derive(Serialize)]
pub struct OfferResponse {
    pub id: i32,
    pub order_id: Option<i32>,
    pub executor_id: Option<i32>,
}

impl From<Offer> for OfferResponse {
    fn from(offer: Offer) -> Self {
        Self {
            id: offer.id,
            order_id: offer.order_id,
            executor_id: offer.executor_id,
        }
    }
}

#[derive(Deserialize)]
pub struct OfferRequest {
    pub id: i32,
    #[serde(deserialize_with = "gigboard_core::serde::required_nullable")]
    pub order_id: Option<i32>,
    #[serde(deserialize_with = "gigboard_core::serde::required_nullable")]
    pub executor_id: Option<i32>,
}

impl From<OfferRequest> for Offer {
    fn from(body: OfferRequest) -> Self {
        Self {
            id: body.id,
            order_id: body.order_id,
            executor_id: body.executor_id,
        }
    }
}

// ── GET /offers/ ─────────────────────────────────────────────────────────────

pub async fn list_offers(
    State(state): State<AppState>,
) -> Result<Json<Vec<OfferResponse>>, ApiError> {
    let usecase = ListOffersUseCase {
        repo: state.offer_repo(),
    };
    let offers = usecase.execute().await?;
    Ok(Json(offers.into_iter().map(OfferResponse::from).collect()))
}

// ── POST /offers/ ────────────────────────────────────────────────────────────

pub async fn create_offer(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<OfferRequest>, ApiError>,
) -> Result<Json<&'static str>, ApiError> {
    let usecase = CreateOfferUseCase {
        repo: state.offer_repo(),
    };
    usecase.execute(body.into()).await?;
    Ok(Json("New offer is added"))
}

// ── GET /offers/{id} ─────────────────────────────────────────────────────────

pub async fn get_offer(
    State(state): State<AppState>,
    WithRejection(Path(offer_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<OfferResponse>, ApiError> {
    let usecase = GetOfferUseCase {
        repo: state.offer_repo(),
    };
    let offer = usecase.execute(offer_id).await?;
    Ok(Json(offer.into()))
}

// ── PUT /offers/{id} ─────────────────────────────────────────────────────────

pub async fn update_offer(
    State(state): State<AppState>,
    WithRejection(Path(offer_id), _): WithRejection<Path<i32>, ApiError>,
    WithRejection(Json(body), _): WithRejection<Json<OfferRequest>, ApiError>,
) -> Result<Json<String>, ApiError> {
    let usecase = UpdateOfferUseCase {
        repo: state.offer_repo(),
    };
    usecase.execute(offer_id, body.into()).await?;
    Ok(Json(format!("Offer #{offer_id} is updated")))
}

// ── DELETE /offers/{id} ──────────────────────────────────────────────────────

pub async fn delete_offer(
    State(state): State<AppState>,
    WithRejection(Path(offer_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<String>, ApiError> {
    let usecase = DeleteOfferUseCase {
        repo: state.offer_repo(),
    };
    usecase.execute(offer_id).await?;
    Ok(Json(format!("Offer #{offer_id} is deleted")))
}
