//! JSON API for tours under /api/tour.

use super::AppState;
use crate::app::{TourCreateReq, TourDeletedDto, TourDto, TourPriceReq};
use crate::domain::TourRules;
use crate::error::AppError;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

const DEFAULT_LIMIT: i64 = 10;

#[derive(Debug, Deserialize)]
pub struct TourListQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub q: String,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

pub async fn create_tour(
    State(state): State<AppState>,
    req: Result<Json<TourCreateReq>, JsonRejection>,
) -> Result<(StatusCode, Json<TourDto>), AppError> {
    let Json(req) = req?;
    let req = req.validated()?;
    let tour = state.with_store(move |store| store.create(req)).await?;
    log::info!("created tour {}", tour.id);
    Ok((StatusCode::CREATED, Json(tour)))
}

pub async fn list_tours(
    State(state): State<AppState>,
    query: Result<Query<TourListQuery>, QueryRejection>,
) -> Result<Json<Vec<TourDto>>, AppError> {
    let Query(TourListQuery { limit, q }) = query?;
    let limit = TourRules::limit(limit)?;
    let tours = state
        .with_store(move |store| store.list(limit, &q))
        .await?;
    Ok(Json(tours))
}

pub async fn get_tour(
    State(state): State<AppState>,
    tour_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<TourDto>, AppError> {
    let Path(tour_id) = tour_id?;
    if tour_id < 1 {
        return Err(AppError::Validation(
            "tour id must be greater than or equal to 1".into(),
        ));
    }
    let tour = state.with_store(move |store| store.get(tour_id)).await?;
    Ok(Json(tour))
}

pub async fn update_tour_price(
    State(state): State<AppState>,
    tour_id: Result<Path<i64>, PathRejection>,
    req: Result<Json<TourPriceReq>, JsonRejection>,
) -> Result<Json<TourDto>, AppError> {
    let Path(tour_id) = tour_id?;
    let Json(req) = req?;
    let price = TourRules::price(req.price)?;
    let tour = state
        .with_store(move |store| store.update_price(tour_id, price))
        .await?;
    log::info!("updated price of tour {} to {}", tour.id, tour.price);
    Ok(Json(tour))
}

pub async fn delete_tour(
    State(state): State<AppState>,
    tour_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<TourDeletedDto>, AppError> {
    let Path(tour_id) = tour_id?;
    state.with_store(move |store| store.delete(tour_id)).await?;
    log::info!("deleted tour {}", tour_id);
    Ok(Json(TourDeletedDto { id: tour_id }))
}
