//! Provider traits for fetching income-statement data.
//!
//! - [`DataProvider`] - Base trait for all data providers
//! - [`IncomeStatementProvider`] - Income-statement records

use async_trait::async_trait;
use std::fmt::Debug;

use crate::{error::Result, types::IncomeStatementRecord, types::Symbol};

/// Base trait for all data providers.
pub trait DataProvider: Send + Sync + Debug {
    /// Returns the name of this provider (e.g., "FMP").
    fn name(&self) -> &str;

    /// Returns a description of this provider.
    fn description(&self) -> &str;
}

/// Provider for income-statement records.
#[async_trait]
pub trait IncomeStatementProvider: DataProvider {
    /// Fetches annual income-statement records for a symbol.
    ///
    /// Records come back in provider order, which is most recent first.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The stock symbol
    /// * `limit` - Maximum number of fiscal years to return (most recent first)
    async fn fetch_income_statements(
        &self,
        symbol: &Symbol,
        limit: Option<usize>,
    ) -> Result<Vec<IncomeStatementRecord>>;
}
