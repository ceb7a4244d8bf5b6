use crate::domain::error::DomainError;
use crate::domain::values::buy_sell::BuySellIndicator;
use crate::domain::values::timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeDetails {
    #[serde(alias = "buy_sell_indicator")]
    pub buy_sell_indicator: BuySellIndicator,
    pub price: f64,
    pub quantity: u64,
}

/// A stored trade. Never mutated once it is in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    #[serde(alias = "trade_id")]
    pub trade_id: String,
    #[serde(default, alias = "asset_class", skip_serializing_if = "Option::is_none")]
    pub asset_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counterparty: Option<String>,
    #[serde(alias = "instrument_id")]
    pub instrument_id: String,
    #[serde(alias = "instrument_name")]
    pub instrument_name: String,
    #[serde(alias = "trade_date_time", deserialize_with = "timestamp::deserialize")]
    pub trade_date_time: DateTime<Utc>,
    #[serde(alias = "trade_details")]
    pub trade_details: TradeDetails,
    pub trader: String,
}

impl Trade {
    pub fn price(&self) -> f64 {
        self.trade_details.price
    }

    pub fn side(&self) -> BuySellIndicator {
        self.trade_details.buy_sell_indicator
    }

    /// The fields free-text search looks at. Absent ones are skipped.
    pub fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        [
            self.counterparty.as_deref(),
            Some(self.instrument_id.as_str()),
            Some(self.instrument_name.as_str()),
            Some(self.trader.as_str()),
        ]
        .into_iter()
        .flatten()
    }

    /// Case-sensitive substring match over [`Trade::searchable_fields`].
    pub fn matches_text(&self, text: &str) -> bool {
        self.searchable_fields().any(|field| field.contains(text))
    }
}

/// Creation input. Same shape as [`Trade`] but the id may be left out.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrade {
    #[serde(default, alias = "trade_id")]
    pub trade_id: Option<String>,
    #[serde(default, alias = "asset_class")]
    pub asset_class: Option<String>,
    #[serde(default)]
    pub counterparty: Option<String>,
    #[serde(alias = "instrument_id")]
    pub instrument_id: String,
    #[serde(alias = "instrument_name")]
    pub instrument_name: String,
    #[serde(alias = "trade_date_time", deserialize_with = "timestamp::deserialize")]
    pub trade_date_time: DateTime<Utc>,
    #[serde(alias = "trade_details")]
    pub trade_details: TradeDetails,
    pub trader: String,
}

impl NewTrade {
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(id) = &self.trade_id {
            require_non_empty("tradeId", id)?;
        }
        require_non_empty("instrumentId", &self.instrument_id)?;
        require_non_empty("instrumentName", &self.instrument_name)?;
        require_non_empty("trader", &self.trader)?;

        let price = self.trade_details.price;
        if !price.is_finite() || price < 0.0 {
            return Err(DomainError::InvalidInput(format!(
                "price must be a non-negative number, got {price}"
            )));
        }
        Ok(())
    }

    /// Turns the input into a stored trade, generating an id when none was given.
    pub fn into_trade(self) -> Trade {
        Trade {
            trade_id: self
                .trade_id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            asset_class: self.asset_class,
            counterparty: self.counterparty,
            instrument_id: self.instrument_id,
            instrument_name: self.instrument_name,
            trade_date_time: self.trade_date_time,
            trade_details: self.trade_details,
            trader: self.trader,
        }
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::InvalidInput(format!("{field} must not be empty")));
    }
    Ok(())
}
