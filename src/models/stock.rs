use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const STOCK_CODE_MIN_LEN: usize = 4;
pub const STOCK_CODE_MAX_LEN: usize = 10;

// One recorded purchase of a stock instrument (e.g., 100 PETR4 at 37.50).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StockPurchase {
    pub id: i64,
    pub purchase_date: NaiveDate,
    pub average_price: f64,
    pub quantity: i64,
    pub stock_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStockPurchase {
    pub average_price: f64,
    pub quantity: i64,
    pub stock_code: String,
    pub purchase_date: Option<NaiveDate>,
}

/// Partial update input. Each field is either absent (keep the stored value)
/// or present with a new value; serde leaves omitted fields as `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStockPurchase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,
}

/// Envelope for list and search responses: `{"stocks": [...]}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct StockList {
    pub stocks: Vec<StockPurchase>,
}

#[derive(Debug, Deserialize)]
pub struct StockSearchParams {
    pub code: Option<String>,
}

fn validate_average_price(price: f64) -> Result<(), String> {
    if price <= 0.0 {
        return Err(format!("Average price must be > 0, got {}", price));
    }
    Ok(())
}

fn validate_quantity(quantity: i64) -> Result<(), String> {
    if quantity <= 0 {
        return Err(format!("Quantity must be > 0, got {}", quantity));
    }
    Ok(())
}

fn validate_stock_code(code: &str) -> Result<(), String> {
    let len = code.chars().count();
    if !(STOCK_CODE_MIN_LEN..=STOCK_CODE_MAX_LEN).contains(&len) {
        return Err(format!(
            "Stock code must be between {} and {} characters, got {:?}",
            STOCK_CODE_MIN_LEN, STOCK_CODE_MAX_LEN, code
        ));
    }
    Ok(())
}

impl CreateStockPurchase {
    pub fn validate(&self) -> Result<(), String> {
        validate_average_price(self.average_price)?;
        validate_quantity(self.quantity)?;
        validate_stock_code(&self.stock_code)?;
        Ok(())
    }
}

impl UpdateStockPurchase {
    /// Validate the supplied fields only; absent fields are not checked.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(price) = self.average_price {
            validate_average_price(price)?;
        }
        if let Some(quantity) = self.quantity {
            validate_quantity(quantity)?;
        }
        if let Some(code) = &self.stock_code {
            validate_stock_code(code)?;
        }
        Ok(())
    }

    /// Apply the supplied fields on top of a stored record; omitted fields
    /// keep their current value. Stock codes are normalized to upper case.
    pub fn apply_to(&self, stock: &mut StockPurchase) {
        if let Some(price) = self.average_price {
            stock.average_price = price;
        }
        if let Some(quantity) = self.quantity {
            stock.quantity = quantity;
        }
        if let Some(code) = &self.stock_code {
            stock.stock_code = code.to_uppercase();
        }
        if let Some(date) = self.purchase_date {
            stock.purchase_date = date;
        }
    }
}
