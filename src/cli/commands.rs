use crate::domain::error::DomainError;
use crate::domain::ports::trade_repository::TradeFilter;
use crate::domain::values::buy_sell::BuySellIndicator;
use crate::domain::values::timestamp::parse_timestamp;
use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tradebook", about = "In-memory trade record store")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the HTTP API
    Serve {
        /// Listen address (overrides TRADEBOOK_BIND)
        #[arg(long)]
        bind: Option<SocketAddr>,
        /// JSON array of trades to load before serving (overrides TRADEBOOK_SEED)
        #[arg(long)]
        seed: Option<PathBuf>,
    },
    /// Look up a trade by id
    Get {
        /// Trade ID
        id: String,
        #[command(flatten)]
        source: SeedArgs,
    },
    /// Free-text search over counterparty, instrumentId, instrumentName and trader
    Search {
        /// Case-sensitive substring; empty matches everything
        text: String,
        #[command(flatten)]
        source: SeedArgs,
    },
    /// Filter trades by asset class, price range, date range and side
    Filter {
        #[command(flatten)]
        criteria: FilterArgs,
        #[command(flatten)]
        source: SeedArgs,
    },
}

#[derive(Args, Default)]
pub struct FilterArgs {
    #[arg(long)]
    pub asset_class: Option<String>,
    /// Earliest trade time, inclusive (YYYY-MM-DD or RFC3339)
    #[arg(long)]
    pub start: Option<String>,
    /// Latest trade time, inclusive (YYYY-MM-DD or RFC3339)
    #[arg(long)]
    pub end: Option<String>,
    #[arg(long)]
    pub min_price: Option<f64>,
    #[arg(long)]
    pub max_price: Option<f64>,
    /// BUY or SELL
    #[arg(long)]
    pub trade_type: Option<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> Result<TradeFilter, DomainError> {
        let parse_time = |s: &Option<String>| {
            s.as_deref()
                .map(parse_timestamp)
                .transpose()
                .map_err(DomainError::InvalidInput)
        };
        Ok(TradeFilter {
            asset_class: self.asset_class.clone(),
            start: parse_time(&self.start)?,
            end: parse_time(&self.end)?,
            min_price: self.min_price,
            max_price: self.max_price,
            trade_type: self
                .trade_type
                .as_deref()
                .map(str::parse::<BuySellIndicator>)
                .transpose()
                .map_err(DomainError::InvalidInput)?,
        })
    }
}

#[derive(Args)]
pub struct SeedArgs {
    /// JSON array of trades to query (overrides TRADEBOOK_SEED)
    #[arg(long)]
    pub seed: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn parses_filter_subcommand() {
        let cli = Cli::try_parse_from([
            "tradebook",
            "filter",
            "--asset-class",
            "Equity",
            "--start",
            "2024-01-01",
            "--min-price",
            "20",
            "--trade-type",
            "sell",
            "--seed",
            "trades.json",
        ])
        .unwrap();
        let Commands::Filter { criteria, source } = cli.command else {
            panic!("expected filter subcommand");
        };
        let filter = criteria.to_filter().unwrap();
        assert_eq!(filter.asset_class.as_deref(), Some("Equity"));
        assert_eq!(filter.start, Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()));
        assert_eq!(filter.min_price, Some(20.0));
        assert_eq!(filter.trade_type, Some(BuySellIndicator::Sell));
        assert_eq!(source.seed, Some(PathBuf::from("trades.json")));
    }

    #[test]
    fn bad_trade_type_is_invalid_input() {
        let args = FilterArgs {
            trade_type: Some("HOLD".into()),
            ..Default::default()
        };
        assert!(matches!(args.to_filter(), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn empty_args_make_empty_filter() {
        assert!(FilterArgs::default().to_filter().unwrap().is_empty());
    }
}
