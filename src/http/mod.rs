//! HTTP surface: router, shared state and the store seam handlers call through.

pub mod api;
pub mod pages;
pub mod render;

use crate::app::{
    tour_create, tour_delete, tour_get, tour_list, tour_update_price, TourCreateReq, TourDto,
};
use crate::error::AppError;
use crate::infra::Database;
use axum::http::Uri;
use axum::routing::get;
use axum::Router;
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;

pub use render::{HtmlPages, PageRenderer};

/// Record Store operations the handlers depend on.
pub trait TourStore: Send + Sync {
    fn create(&self, req: TourCreateReq) -> Result<TourDto, AppError>;
    fn get(&self, id: i64) -> Result<TourDto, AppError>;
    fn list(&self, limit: i64, q: &str) -> Result<Vec<TourDto>, AppError>;
    fn update_price(&self, id: i64, price: f64) -> Result<TourDto, AppError>;
    fn delete(&self, id: i64) -> Result<(), AppError>;
}

impl TourStore for Database {
    fn create(&self, req: TourCreateReq) -> Result<TourDto, AppError> {
        tour_create(self, req)
    }

    fn get(&self, id: i64) -> Result<TourDto, AppError> {
        tour_get(self, id)
    }

    fn list(&self, limit: i64, q: &str) -> Result<Vec<TourDto>, AppError> {
        tour_list(self, limit, q)
    }

    fn update_price(&self, id: i64, price: f64) -> Result<TourDto, AppError> {
        tour_update_price(self, id, price)
    }

    fn delete(&self, id: i64) -> Result<(), AppError> {
        tour_delete(self, id)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TourStore>,
    pub pages: Arc<dyn PageRenderer>,
}

impl AppState {
    pub fn new(store: Arc<dyn TourStore>) -> Self {
        Self {
            store,
            pages: Arc::new(HtmlPages),
        }
    }

    /// Run a store call on the blocking pool; rusqlite I/O is synchronous.
    pub(crate) async fn with_store<T, F>(&self, f: F) -> Result<T, AppError>
    where
        T: Send + 'static,
        F: FnOnce(&dyn TourStore) -> Result<T, AppError> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || f(store.as_ref()))
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?
    }
}

/// Build the full router: pages, JSON API and static assets.
pub fn router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(pages::index).post(pages::index))
        .route("/navigation/", get(pages::navigation))
        .route("/:tour_id", get(pages::tour_detail))
        .route("/api/tour", get(api::list_tours).post(api::create_tour))
        .route("/api/tour/", get(api::list_tours).post(api::create_tour))
        .route(
            "/api/tour/:tour_id",
            get(api::get_tour)
                .patch(api::update_tour_price)
                .delete(api::delete_tour),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(no_route)
        .with_state(state)
}

async fn no_route(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}
