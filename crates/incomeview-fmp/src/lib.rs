#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/incomeview/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Financial Modeling Prep (FMP) income-statement provider.
//!
//! This crate implements the incomeview-core traits for the
//! [Financial Modeling Prep](https://financialmodelingprep.com/) API.
//!
//! # Usage
//!
//! ```rust,ignore
//! use incomeview_fmp::FmpProvider;
//! use incomeview_core::{IncomeStatementProvider, Symbol};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = FmpProvider::new("your_api_key");
//!
//!     let symbol = Symbol::new("AAPL");
//!     let records = provider
//!         .fetch_income_statements(&symbol, None)
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use chrono::NaiveDate;
use incomeview_core::{
    DataError, DataProvider, IncomeStatementProvider, IncomeStatementRecord, Result,
    Symbol,
};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::fmt;
use tracing::{debug, instrument, warn};

/// Base URL for the FMP stable API.
pub const FMP_BASE_URL: &str = "https://financialmodelingprep.com/stable";

/// Financial Modeling Prep data provider.
///
/// Issues a single request per call; there is no retry and no caching.
#[derive(Clone)]
pub struct FmpProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl fmt::Debug for FmpProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FmpProvider")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl FmpProvider {
    /// Create a new FMP provider with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_client(Client::new(), api_key)
    }

    /// Create a new FMP provider with a custom HTTP client.
    #[must_use]
    pub fn with_client(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: FMP_BASE_URL.to_string(),
        }
    }

    /// Point the provider at a different API root (mirrors, test servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Build the URL of an endpoint, without query parameters.
    fn url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.base_url)
    }

    /// Build a GET request for an endpoint.
    ///
    /// Parameters and the API key are percent-encoded into the query string.
    fn request(&self, endpoint: &str, params: &[(&str, String)]) -> reqwest::RequestBuilder {
        self.client
            .get(self.url(endpoint))
            .query(params)
            .query(&[("apikey", self.api_key.as_str())])
    }

    /// Make a GET request and return the raw body of a successful response.
    async fn get_text(&self, endpoint: &str, params: &[(&str, String)]) -> Result<String> {
        debug!("FMP request: {} {:?}", endpoint, params);

        let response = self
            .request(endpoint, params)
            .send()
            .await
            .map_err(|e| DataError::Network(e.without_url().to_string()))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(DataError::RateLimited {
                provider: self.name().to_string(),
                retry_after: None,
            });
        }
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(DataError::AuthenticationFailed(self.name().to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DataError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        response
            .text()
            .await
            .map_err(|e| DataError::Network(e.without_url().to_string()))
    }

    /// Fetch raw income statement rows from the FMP API.
    async fn fetch_income_rows(
        &self,
        symbol: &Symbol,
        limit: Option<usize>,
    ) -> Result<Vec<serde_json::Value>> {
        if symbol.as_str().is_empty() {
            return Err(DataError::InvalidParameter("empty symbol".to_string()));
        }
        let mut params = vec![
            ("symbol", symbol.as_str().to_string()),
            ("period", "annual".to_string()),
        ];
        if let Some(limit) = limit {
            params.push(("limit", limit.to_string()));
        }
        let text = self.get_text("income-statement", &params).await?;
        parse_rows(&text)
    }
}

/// Decode a response body into individual JSON rows.
///
/// FMP reports some failures (bad key, exhausted plan) with a 200 status and
/// an object carrying an `Error Message` field.
fn parse_rows(text: &str) -> Result<Vec<serde_json::Value>> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| DataError::Parse(format!("{e}: {text}")))?;

    match value {
        serde_json::Value::Array(rows) => Ok(rows),
        serde_json::Value::Object(map) => {
            let message = map
                .get("Error Message")
                .or_else(|| map.get("error"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| text.to_string());
            Err(DataError::Provider {
                provider: "FMP".to_string(),
                message,
            })
        }
        other => Err(DataError::Parse(format!(
            "expected a JSON array, got {other}"
        ))),
    }
}

impl DataProvider for FmpProvider {
    fn name(&self) -> &str {
        "FMP"
    }

    fn description(&self) -> &str {
        "Financial Modeling Prep - Financial data and stock market API"
    }
}

#[async_trait]
impl IncomeStatementProvider for FmpProvider {
    #[instrument(skip(self), fields(symbol = %symbol))]
    async fn fetch_income_statements(
        &self,
        symbol: &Symbol,
        limit: Option<usize>,
    ) -> Result<Vec<IncomeStatementRecord>> {
        let rows = self.fetch_income_rows(symbol, limit).await?;
        let total = rows.len();

        let records: Vec<IncomeStatementRecord> = rows
            .into_iter()
            .enumerate()
            .filter_map(|(index, row)| match decode_row(row, symbol) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(index, error = %e, "Skipping malformed income statement row");
                    None
                }
            })
            .collect();

        debug!(kept = records.len(), total, "Decoded income statements");
        Ok(records)
    }
}

/// Convert one raw row into a record, rejecting rows with missing or
/// ill-typed fields.
fn decode_row(row: serde_json::Value, symbol: &Symbol) -> Result<IncomeStatementRecord> {
    let raw: FmpIncomeStatement =
        serde_json::from_value(row).map_err(|e| DataError::Parse(e.to_string()))?;

    let date = NaiveDate::parse_from_str(&raw.date, "%Y-%m-%d")
        .map_err(|e| DataError::Parse(format!("date {:?}: {e}", raw.date)))?;

    let field = |name: &str, value: Option<f64>| {
        value.ok_or_else(|| DataError::Parse(format!("missing field `{name}` for {date}")))
    };

    Ok(IncomeStatementRecord {
        symbol: raw.symbol.map_or_else(|| symbol.clone(), Symbol::new),
        date,
        revenue: field("revenue", raw.revenue)?,
        gross_profit: field("grossProfit", raw.gross_profit)?,
        operating_income: field("operatingIncome", raw.operating_income)?,
        net_income: field("netIncome", raw.net_income)?,
        eps: field("eps", raw.eps)?,
    })
}

// ============================================================================
// FMP API Response Types
// ============================================================================

/// FMP Income Statement response. Extra fields are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FmpIncomeStatement {
    date: String,
    symbol: Option<String>,
    revenue: Option<f64>,
    gross_profit: Option<f64>,
    operating_income: Option<f64>,
    net_income: Option<f64>,
    eps: Option<f64>,
}
