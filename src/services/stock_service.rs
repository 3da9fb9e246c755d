use chrono::Utc;
use sqlx::SqlitePool;
use tracing::error;

use crate::db;
use crate::errors::AppError;
use crate::models::{CreateStockPurchase, StockPurchase, UpdateStockPurchase};

pub async fn create(
    pool: &SqlitePool,
    input: CreateStockPurchase,
) -> Result<StockPurchase, AppError> {
    input.validate().map_err(AppError::Validation)?;

    // Normalize before persistence; the purchase date defaults to today.
    let stock_code = input.stock_code.to_uppercase();
    let purchase_date = input
        .purchase_date
        .unwrap_or_else(|| Utc::now().date_naive());

    match db::stock_queries::create(
        pool,
        purchase_date,
        input.average_price,
        input.quantity,
        &stock_code,
    )
    .await
    {
        Ok(stock) => Ok(stock),
        Err(e) => {
            error!("Failed to persist stock purchase {}: {:?}", stock_code, e);
            Err(AppError::Db(e))
        }
    }
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<StockPurchase>, AppError> {
    db::stock_queries::fetch_all(pool).await.map_err(AppError::Db)
}

/// Search by stock code (case-insensitive); no code behaves like `list`.
pub async fn search(
    pool: &SqlitePool,
    code: Option<String>,
) -> Result<Vec<StockPurchase>, AppError> {
    match code.filter(|c| !c.is_empty()) {
        Some(code) => db::stock_queries::fetch_by_code(pool, &code.to_uppercase())
            .await
            .map_err(AppError::Db),
        None => list(pool).await,
    }
}

pub async fn fetch_one(pool: &SqlitePool, id: i64) -> Result<StockPurchase, AppError> {
    db::stock_queries::fetch_one(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Stock purchase {} not found", id)))
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    input: UpdateStockPurchase,
) -> Result<StockPurchase, AppError> {
    input.validate().map_err(AppError::Validation)?;

    db::stock_queries::update(pool, id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Stock purchase {} not found", id)))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
    match db::stock_queries::delete(pool, id).await {
        Ok(0) => Err(AppError::NotFound(format!(
            "Stock purchase {} not found for deletion",
            id
        ))),
        Ok(_) => Ok(()),
        Err(e) => {
            error!("Failed to delete stock purchase {}: {:?}", id, e);
            Err(AppError::Db(e))
        }
    }
}
