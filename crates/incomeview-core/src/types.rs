//! Core data types for income-statement data.
//!
//! - [`Symbol`] - Trading symbol/ticker
//! - [`IncomeStatementRecord`] - One reporting period of an income statement

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A trading symbol/ticker.
///
/// Symbols are automatically uppercased on creation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(String);

impl Symbol {
    /// Creates a new symbol from a string, converting to uppercase.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into().trim().to_uppercase())
    }

    /// Returns the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Symbol {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// One fiscal period of a company's income statement.
///
/// Monetary amounts are in the reporting currency and are not scaled.
/// Records are never mutated after they have been fetched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatementRecord {
    /// Stock symbol.
    pub symbol: Symbol,
    /// End date of the reporting period.
    pub date: NaiveDate,
    /// Total revenue.
    pub revenue: f64,
    /// Gross profit.
    pub gross_profit: f64,
    /// Operating income.
    pub operating_income: f64,
    /// Net income.
    pub net_income: f64,
    /// Earnings per share.
    pub eps: f64,
}

impl IncomeStatementRecord {
    /// Creates a record with the given period end and all amounts zeroed.
    #[must_use]
    pub fn new(symbol: Symbol, date: NaiveDate) -> Self {
        Self {
            symbol,
            date,
            ..Default::default()
        }
    }

    /// Calendar year of the period end.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_uppercased() {
        assert_eq!(Symbol::new(" aapl ").as_str(), "AAPL");
        assert_eq!("msft".parse::<Symbol>().unwrap().to_string(), "MSFT");
    }

    #[test]
    fn test_record_year() {
        let date = NaiveDate::from_ymd_opt(2023, 9, 30).unwrap();
        let record = IncomeStatementRecord::new(Symbol::new("AAPL"), date);
        assert_eq!(record.year(), 2023);
        assert_eq!(record.revenue, 0.0);
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let date = NaiveDate::from_ymd_opt(2022, 9, 24).unwrap();
        let record = IncomeStatementRecord {
            net_income: 99_803_000_000.0,
            ..IncomeStatementRecord::new(Symbol::new("AAPL"), date)
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2022-09-24");
        assert_eq!(json["netIncome"], 99_803_000_000.0);
        assert!(json.get("operatingIncome").is_some());
    }
}
