//! HTTP surface: four GET routes rendering the catalog views as HTML.

pub mod pages;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use crate::engine::CatalogEngine;
use crate::error::{CatalogError, Result};
use pages::{Page, Pages};

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<CatalogEngine>,
    pub pages: Arc<Pages>,
}

impl AppState {
    pub fn new(engine: CatalogEngine) -> Result<Self> {
        Ok(Self {
            engine: Arc::new(engine),
            pages: Arc::new(Pages::new()?),
        })
    }
}

/// A failed page: logged, then answered with 500.
pub struct PageFailure(CatalogError);

impl From<CatalogError> for PageFailure {
    fn from(err: CatalogError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageFailure {
    fn into_response(self) -> Response {
        log::error!("[{}] {}", self.0.phase(), self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Catalog unavailable: {}", self.0),
        )
            .into_response()
    }
}

type PageResult = std::result::Result<Html<String>, PageFailure>;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/products/count", get(product_count))
        .route("/products/names", get(product_names))
        .route("/products/spare_parts", get(product_spare_parts))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| CatalogError::io(addr.to_string(), e))?;
    log::info!("Listening on http://{}", addr);
    axum::serve(listener, router(state))
        .await
        .map_err(|e| CatalogError::io(addr.to_string(), e))
}

/// Run a blocking engine call off the async workers.
async fn run_blocking<T, F>(state: &AppState, f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&CatalogEngine) -> Result<T> + Send + 'static,
{
    let engine = Arc::clone(&state.engine);
    tokio::task::spawn_blocking(move || f(&engine)).await?
}

async fn index(State(state): State<AppState>) -> PageResult {
    Ok(Html(state.pages.render_index()?))
}

async fn product_count(State(state): State<AppState>) -> PageResult {
    let view = run_blocking(&state, |engine| engine.count_view()).await?;
    log::info!("GET /products/count -> {}", view.product_count);
    Ok(Html(state.pages.render(Page::Count, &view)?))
}

async fn product_names(State(state): State<AppState>) -> PageResult {
    let view = run_blocking(&state, |engine| engine.names_view()).await?;
    log::info!("GET /products/names -> {} names", view.product_names.len());
    Ok(Html(state.pages.render(Page::Names, &view)?))
}

async fn product_spare_parts(State(state): State<AppState>) -> PageResult {
    let view = run_blocking(&state, |engine| engine.spare_parts_view()).await?;
    log::info!(
        "GET /products/spare_parts -> {} categories, {} products",
        view.categories.len(),
        view.products.len()
    );
    Ok(Html(state.pages.render(Page::SpareParts, &view)?))
}
