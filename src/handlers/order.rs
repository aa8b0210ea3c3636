use crate::error::AppError;
use crate::models::{Order, OrderAck};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

/// Handles `POST /order`: decode, persist, return the insert acknowledgment.
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<Order>, JsonRejection>,
) -> Result<(StatusCode, Json<OrderAck>), AppError> {
    let Json(order) = payload.map_err(|err| AppError::BadRequest(err.body_text()))?;

    let ack = state.orders.create(order).await?;

    Ok((StatusCode::CREATED, Json(ack)))
}
