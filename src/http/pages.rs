//! Server-rendered pages.

use super::AppState;
use crate::error::AppError;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::Html;
use axum::Form;
use serde::Deserialize;
use serde_json::json;

const INDEX_LIMIT: i64 = 40;

#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub q: String,
}

/// Listing page. GET reads `q` from the query string, POST from the form body.
pub async fn index(
    State(state): State<AppState>,
    form: Option<Form<SearchForm>>,
) -> Result<Html<String>, AppError> {
    let SearchForm { q } = form.map(|Form(f)| f).unwrap_or_default();
    let query = q.clone();
    let tours = state
        .with_store(move |store| store.list(INDEX_LIMIT, &query))
        .await?;
    let context = json!({
        "page_title": "All tours",
        "q": q,
        "tours": tours,
    });
    state.pages.render("index", &context).map(Html)
}

pub async fn tour_detail(
    State(state): State<AppState>,
    tour_id: Result<Path<i64>, PathRejection>,
) -> Result<Html<String>, AppError> {
    let Path(tour_id) = tour_id?;
    let tour = state.with_store(move |store| store.get(tour_id)).await?;
    let context = json!({
        "page_title": format!("Tour {}", tour.title),
        "tour": tour,
    });
    state.pages.render("details", &context).map(Html)
}

pub async fn navigation(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let context = json!({ "page_title": "How to find us" });
    state.pages.render("navigation", &context).map(Html)
}
