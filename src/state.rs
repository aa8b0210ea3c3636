use std::sync::Arc;

use mongodb::Client;

use crate::services::{MarketService, OrderService};

#[derive(Clone)]
pub struct AppState {
    pub markets: Arc<MarketService>,
    pub orders: Arc<OrderService>,
}

impl AppState {
    pub fn new(client: &Client) -> Self {
        Self {
            markets: Arc::new(MarketService::new(client)),
            orders: Arc::new(OrderService::new(client)),
        }
    }

    pub fn with_services(markets: Arc<MarketService>, orders: Arc<OrderService>) -> Self {
        Self { markets, orders }
    }
}
