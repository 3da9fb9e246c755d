pub(crate) mod stock_queries;

use sqlx::SqlitePool;

/// Create the `stocks` table if it does not exist yet. Run once at startup,
/// before the server starts accepting requests.
pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS stocks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            purchase_date TEXT NOT NULL,
            average_price REAL NOT NULL,
            quantity INTEGER NOT NULL,
            stock_code TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;
    Ok(())
}
