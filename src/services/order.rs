use std::sync::Arc;

use chrono::Utc;
use mongodb::Client;

use crate::db::DB_NAME;
use crate::error::AppError;
use crate::models::{Order, OrderAck};
use crate::services::store::{OrderStore, PairLookup};

pub const ORDERS_COLLECTION: &str = "orders";

/// Intake service for orders. Binds to the `orders` collection once at
/// construction and performs exactly one insert per call.
///
/// The referenced trading pair is not checked against the `markets`
/// collection unless a [`PairLookup`] collaborator is plugged in; the
/// default wiring stays permissive.
pub struct OrderService {
    store: Arc<dyn OrderStore>,
    pair_lookup: Option<Arc<dyn PairLookup>>,
}

impl OrderService {
    pub fn new(client: &Client) -> Self {
        let orders = client.database(DB_NAME).collection::<Order>(ORDERS_COLLECTION);
        Self {
            store: Arc::new(orders),
            pair_lookup: None,
        }
    }

    pub fn with_store(store: Arc<dyn OrderStore>) -> Self {
        Self {
            store,
            pair_lookup: None,
        }
    }

    pub fn with_pair_lookup(mut self, lookup: Arc<dyn PairLookup>) -> Self {
        self.pair_lookup = Some(lookup);
        self
    }

    /// Persists a new order and returns the store's insert acknowledgment.
    ///
    /// `created_at` is always overwritten with the current server time,
    /// the only field mutation this service performs. Client-supplied
    /// timestamps are never trusted, including on replayed requests.
    pub async fn create(&self, mut order: Order) -> Result<OrderAck, AppError> {
        if let Some(lookup) = &self.pair_lookup {
            if !lookup.pair_exists(&order.trading_pair_id).await? {
                return Err(AppError::BadRequest(format!(
                    "unknown trading pair: {}",
                    order.trading_pair_id
                )));
            }
        }

        order.created_at = Some(Utc::now());

        let id = self.store.insert_order(&order).await?;
        Ok(OrderAck {
            inserted_id: id.to_hex(),
        })
    }
}
