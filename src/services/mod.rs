mod market;
mod order;
pub mod store;

pub use market::MarketService;
pub use order::OrderService;
