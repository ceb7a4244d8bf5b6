//! HTTP handlers for the trade endpoints.

use crate::api::error::ApiError;
use crate::api::AppState;
use crate::domain::entities::trade::{NewTrade, Trade};
use crate::domain::ports::trade_repository::TradeFilter;
use crate::domain::values::buy_sell::BuySellIndicator;
use crate::domain::values::timestamp;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;

/// Query parameters for `GET /trades`. `search` takes precedence; the rest
/// form the structured filter.
///
/// An empty filter parameter (`minPrice=`) counts as unset. `search=` is kept
/// as an empty search, which matches every trade.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradesQuery {
    pub search: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub asset_class: Option<String>,
    #[serde(default, deserialize_with = "timestamp::deserialize_opt")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_opt")]
    pub end: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub min_price: Option<f64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub max_price: Option<f64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub trade_type: Option<BuySellIndicator>,
}

fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

impl TradesQuery {
    fn into_filter(self) -> TradeFilter {
        TradeFilter {
            asset_class: self.asset_class,
            start: self.start,
            end: self.end,
            min_price: self.min_price,
            max_price: self.max_price,
            trade_type: self.trade_type,
        }
    }
}

/// # GET /health
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "trades": state.book.count(),
    }))
}

/// # POST /trades
pub async fn create_trade(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewTrade>, JsonRejection>,
) -> Result<(StatusCode, Json<Trade>), ApiError> {
    let Json(input) = payload?;
    let trade = state.book.create(input)?;
    tracing::info!(trade_id = %trade.trade_id, "trade created");
    Ok((StatusCode::CREATED, Json(trade)))
}

/// # GET /trades
/// Free-text search when `search` is given, structured filter otherwise.
pub async fn list_trades(
    State(state): State<Arc<AppState>>,
    query: Result<Query<TradesQuery>, QueryRejection>,
) -> Result<Json<Vec<Trade>>, ApiError> {
    let Query(query) = query?;
    if let Some(text) = query.search.as_deref() {
        return Ok(Json(state.book.search(text)));
    }
    let trades = state.book.filter(&query.into_filter())?;
    Ok(Json(trades))
}

/// # GET /trades/:trade_id
pub async fn get_trade(
    Path(trade_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Trade>, ApiError> {
    let trade = state.book.get(&trade_id)?;
    Ok(Json(trade))
}
