use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::models::{StockPurchase, UpdateStockPurchase};

pub async fn create(
    pool: &SqlitePool,
    purchase_date: NaiveDate,
    average_price: f64,
    quantity: i64,
    stock_code: &str,
) -> Result<StockPurchase, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let stock = sqlx::query_as::<_, StockPurchase>(
        "INSERT INTO stocks (purchase_date, average_price, quantity, stock_code)
         VALUES ($1, $2, $3, $4)
         RETURNING id, purchase_date, average_price, quantity, stock_code",
    )
    .bind(purchase_date)
    .bind(average_price)
    .bind(quantity)
    .bind(stock_code)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(stock)
}

pub async fn fetch_all(pool: &SqlitePool) -> Result<Vec<StockPurchase>, sqlx::Error> {
    sqlx::query_as::<_, StockPurchase>(
        "SELECT id, purchase_date, average_price, quantity, stock_code
         FROM stocks
         ORDER BY purchase_date DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn fetch_by_code(
    pool: &SqlitePool,
    stock_code: &str,
) -> Result<Vec<StockPurchase>, sqlx::Error> {
    sqlx::query_as::<_, StockPurchase>(
        "SELECT id, purchase_date, average_price, quantity, stock_code
         FROM stocks
         WHERE stock_code = $1
         ORDER BY purchase_date DESC",
    )
    .bind(stock_code)
    .fetch_all(pool)
    .await
}

pub async fn fetch_one(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<StockPurchase>, sqlx::Error> {
    sqlx::query_as::<_, StockPurchase>(
        "SELECT id, purchase_date, average_price, quantity, stock_code
         FROM stocks
         WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Read-merge-write inside one transaction. Returns `None` when no row
/// matches, leaving the store untouched.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    input: &UpdateStockPurchase,
) -> Result<Option<StockPurchase>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let current = sqlx::query_as::<_, StockPurchase>(
        "SELECT id, purchase_date, average_price, quantity, stock_code
         FROM stocks
         WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(mut stock) = current else {
        return Ok(None);
    };
    input.apply_to(&mut stock);

    sqlx::query(
        "UPDATE stocks
         SET purchase_date = $2, average_price = $3, quantity = $4, stock_code = $5
         WHERE id = $1",
    )
    .bind(id)
    .bind(stock.purchase_date)
    .bind(stock.average_price)
    .bind(stock.quantity)
    .bind(&stock.stock_code)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(Some(stock))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query("DELETE FROM stocks WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(result.rows_affected())
}
