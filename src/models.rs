use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A market: a base/quote combination orders can reference.
///
/// The same serde model drives both the JSON wire shape and the BSON
/// document written to the store; `_id` is assigned by the store and
/// absent until persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingPair {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub base: String,
    pub quote: String,
}

impl TradingPair {
    pub fn new(base: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            id: None,
            base: base.into(),
            quote: quote.into(),
        }
    }

    /// Display form, e.g. "BTC_USD".
    pub fn display_name(&self) -> String {
        format!("{}_{}", self.base, self.quote)
    }
}

/// Order side. The lowercase tokens are part of the external contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Bid,
    Ask,
}

/// Order type. The lowercase tokens are part of the external contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Market,
    Limit,
}

/// A client's request to buy or sell a quantity of a trading pair.
///
/// `price` is present for limit orders and absent for market orders; it is
/// never substituted with a zero value. `created_at` is server-assigned at
/// persistence time, so any client-supplied value is discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub trading_pair_id: String,
    pub user_id: String,
    pub size: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub side: Side,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Insert acknowledgment returned to the client after an order write.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAck {
    pub inserted_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_side_tokens() {
        assert_eq!(serde_json::to_string(&Side::Bid).unwrap(), "\"bid\"");
        assert_eq!(serde_json::to_string(&Side::Ask).unwrap(), "\"ask\"");
        assert_eq!(serde_json::from_str::<Side>("\"bid\"").unwrap(), Side::Bid);
    }

    #[test]
    fn test_order_type_tokens() {
        assert_eq!(serde_json::to_string(&OrderType::Market).unwrap(), "\"market\"");
        assert_eq!(serde_json::to_string(&OrderType::Limit).unwrap(), "\"limit\"");
        assert_eq!(
            serde_json::from_str::<OrderType>("\"limit\"").unwrap(),
            OrderType::Limit
        );
    }

    #[test]
    fn test_trading_pair_display_name() {
        let pair = TradingPair::new("BTC", "USD");
        assert_eq!(pair.display_name(), "BTC_USD");
    }

    #[test]
    fn test_trading_pair_wire_shape() {
        let pair: TradingPair =
            serde_json::from_str(r#"{"base":"BTC","quote":"USD"}"#).unwrap();
        assert_eq!(pair.base, "BTC");
        assert_eq!(pair.quote, "USD");
        assert!(pair.id.is_none());

        // Unassigned id never appears on the wire
        let json = serde_json::to_string(&pair).unwrap();
        assert!(!json.contains("_id"));
    }

    #[test]
    fn test_market_order_decodes_without_price() {
        let order: Order = serde_json::from_str(
            r#"{"tradingPairId":"abc","userId":"u1","size":1.5,"type":"market","side":"bid"}"#,
        )
        .unwrap();

        assert_eq!(order.trading_pair_id, "abc");
        assert_eq!(order.user_id, "u1");
        assert_eq!(order.size, 1.5);
        assert_eq!(order.order_type, OrderType::Market);
        assert_eq!(order.side, Side::Bid);
        assert!(order.price.is_none());
        assert!(order.created_at.is_none());
    }

    #[test]
    fn test_market_order_roundtrip_keeps_price_absent() {
        let order = Order {
            id: None,
            trading_pair_id: "abc".into(),
            user_id: "u1".into(),
            size: 2.0,
            price: None,
            order_type: OrderType::Market,
            side: Side::Ask,
            created_at: Some(Utc::now()),
        };

        let json = serde_json::to_string(&order).unwrap();
        assert!(!json.contains("price"));
        let decoded: Order = serde_json::from_str(&json).unwrap();
        assert!(decoded.price.is_none());

        // Same guarantee through the storage encoding
        let document = bson::to_document(&order).unwrap();
        assert!(!document.contains_key("price"));
        let decoded: Order = bson::from_document(document).unwrap();
        assert!(decoded.price.is_none());
    }

    #[test]
    fn test_limit_order_roundtrip() {
        let order = Order {
            id: None,
            trading_pair_id: "abc".into(),
            user_id: "u2".into(),
            size: 0.25,
            price: Some(64_000.5),
            order_type: OrderType::Limit,
            side: Side::Bid,
            created_at: None,
        };

        let json = serde_json::to_string(&order).unwrap();
        assert!(json.contains("\"type\":\"limit\""));
        assert!(json.contains("\"tradingPairId\":\"abc\""));
        let decoded: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, order);
    }
}
