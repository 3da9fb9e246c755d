use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use http::StatusCode;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{
    CreateStockPurchase, StockList, StockPurchase, StockSearchParams, UpdateStockPurchase,
};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(fetch_stocks).post(create_stock))
        .route("/search", get(search_stocks))
        .route("/:id", get(get_stock).put(update_stock).delete(delete_stock))
}

#[axum::debug_handler]
pub async fn create_stock(
    State(state): State<AppState>,
    Json(input): Json<CreateStockPurchase>,
) -> Result<(StatusCode, Json<StockPurchase>), AppError> {
    info!("POST /stocks - Recording new stock purchase");
    let stock = services::stock_service::create(&state.pool, input)
        .await
        .map_err(|e| {
            error!("Failed to record stock purchase: {}", e);
            e
        })?;
    Ok((StatusCode::CREATED, Json(stock)))
}

pub async fn fetch_stocks(
    State(state): State<AppState>,
) -> Result<Json<StockList>, AppError> {
    info!("GET /stocks - Fetching all stock purchases");
    let stocks = services::stock_service::list(&state.pool).await.map_err(|e| {
        error!("Failed to fetch stock purchases: {}", e);
        e
    })?;
    Ok(Json(StockList { stocks }))
}

pub async fn search_stocks(
    State(state): State<AppState>,
    Query(params): Query<StockSearchParams>,
) -> Result<Json<StockList>, AppError> {
    info!("GET /stocks/search - Searching stock purchases (code={:?})", params.code);
    let stocks = services::stock_service::search(&state.pool, params.code)
        .await
        .map_err(|e| {
            error!("Failed to search stock purchases: {}", e);
            e
        })?;
    Ok(Json(StockList { stocks }))
}

pub async fn get_stock(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<StockPurchase>, AppError> {
    info!("GET /stocks/{} - Fetching stock purchase", id);
    let stock = services::stock_service::fetch_one(&state.pool, id)
        .await
        .map_err(|e| {
            error!("Failed to fetch stock purchase {}: {}", id, e);
            e
        })?;
    Ok(Json(stock))
}

pub async fn update_stock(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateStockPurchase>,
) -> Result<Json<StockPurchase>, AppError> {
    info!("PUT /stocks/{} - Updating stock purchase", id);
    let updated = services::stock_service::update(&state.pool, id, input)
        .await
        .map_err(|e| {
            error!("Failed to update stock purchase {}: {}", id, e);
            e
        })?;
    Ok(Json(updated))
}

pub async fn delete_stock(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    info!("DELETE /stocks/{} - Deleting stock purchase", id);
    services::stock_service::delete(&state.pool, id)
        .await
        .map_err(|e| {
            error!("Failed to delete stock purchase {}: {}", id, e);
            e
        })?;
    Ok(StatusCode::NO_CONTENT)
}
