use std::sync::Arc;

use mongodb::Client;

use crate::db::DB_NAME;
use crate::error::AppError;
use crate::models::TradingPair;
use crate::services::store::MarketStore;

pub const MARKETS_COLLECTION: &str = "markets";

/// Intake service for trading pairs. Binds to the `markets` collection
/// once at construction and performs exactly one insert per call.
pub struct MarketService {
    store: Arc<dyn MarketStore>,
}

impl MarketService {
    pub fn new(client: &Client) -> Self {
        let markets = client
            .database(DB_NAME)
            .collection::<TradingPair>(MARKETS_COLLECTION);
        Self {
            store: Arc::new(markets),
        }
    }

    pub fn with_store(store: Arc<dyn MarketStore>) -> Self {
        Self { store }
    }

    /// Persists a new trading pair and returns it with the store-assigned
    /// identity filled in. No uniqueness check is performed here.
    pub async fn create(&self, mut pair: TradingPair) -> Result<TradingPair, AppError> {
        let id = self.store.insert_market(&pair).await?;
        pair.id = Some(id);
        Ok(pair)
    }
}
