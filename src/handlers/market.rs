use crate::error::AppError;
use crate::models::TradingPair;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

/// Handles `POST /market`: decode, persist, echo the created pair.
///
/// A body that fails to decode is rejected with 400 before the service is
/// ever invoked.
pub async fn create_market(
    State(state): State<AppState>,
    payload: Result<Json<TradingPair>, JsonRejection>,
) -> Result<(StatusCode, Json<TradingPair>), AppError> {
    let Json(pair) = payload.map_err(|err| AppError::BadRequest(err.body_text()))?;

    let created = state.markets.create(pair).await?;

    Ok((StatusCode::CREATED, Json(created)))
}
