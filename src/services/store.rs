//! Store seam between the services and the MongoDB driver.
//!
//! Production code binds these traits to `mongodb::Collection` handles;
//! tests substitute recording fakes.

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::Collection;

use crate::error::AppError;
use crate::models::{Order, TradingPair};

#[async_trait]
pub trait MarketStore: Send + Sync {
    /// Inserts one market document and returns the assigned identity.
    async fn insert_market(&self, pair: &TradingPair) -> Result<ObjectId, AppError>;
}

#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Inserts one order document and returns the assigned identity.
    async fn insert_order(&self, order: &Order) -> Result<ObjectId, AppError>;
}

/// Optional referential-check collaborator for order intake.
#[async_trait]
pub trait PairLookup: Send + Sync {
    async fn pair_exists(&self, id: &str) -> Result<bool, AppError>;
}

fn assigned_id(inserted_id: mongodb::bson::Bson) -> Result<ObjectId, AppError> {
    inserted_id
        .as_object_id()
        .ok_or_else(|| anyhow::anyhow!("store returned a non-ObjectId identity").into())
}

#[async_trait]
impl MarketStore for Collection<TradingPair> {
    async fn insert_market(&self, pair: &TradingPair) -> Result<ObjectId, AppError> {
        let result = self.insert_one(pair, None).await?;
        assigned_id(result.inserted_id)
    }
}

#[async_trait]
impl OrderStore for Collection<Order> {
    async fn insert_order(&self, order: &Order) -> Result<ObjectId, AppError> {
        let result = self.insert_one(order, None).await?;
        assigned_id(result.inserted_id)
    }
}

#[async_trait]
impl PairLookup for Collection<TradingPair> {
    async fn pair_exists(&self, id: &str) -> Result<bool, AppError> {
        let oid = match ObjectId::parse_str(id) {
            Ok(oid) => oid,
            Err(_) => return Ok(false),
        };
        let found = self.find_one(doc! { "_id": oid }, None).await?;
        Ok(found.is_some())
    }
}
