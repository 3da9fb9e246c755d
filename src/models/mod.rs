mod stock;

pub use stock::{
    CreateStockPurchase, StockList, StockPurchase, StockSearchParams, UpdateStockPurchase,
};
