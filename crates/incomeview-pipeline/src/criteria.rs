//! Filter criteria built from free-text user input.

use incomeview_core::IncomeStatementRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six filter bounds a user can edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterField {
    /// Earliest fiscal year (inclusive).
    StartYear,
    /// Latest fiscal year (inclusive).
    EndYear,
    /// Minimum revenue (inclusive).
    MinRevenue,
    /// Maximum revenue (inclusive).
    MaxRevenue,
    /// Minimum net income (inclusive).
    MinNetIncome,
    /// Maximum net income (inclusive).
    MaxNetIncome,
}

impl FilterField {
    /// All fields, in display order.
    pub const ALL: [Self; 6] = [
        Self::StartYear,
        Self::EndYear,
        Self::MinRevenue,
        Self::MaxRevenue,
        Self::MinNetIncome,
        Self::MaxNetIncome,
    ];
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::StartYear => "startYear",
            Self::EndYear => "endYear",
            Self::MinRevenue => "minRevenue",
            Self::MaxRevenue => "maxRevenue",
            Self::MinNetIncome => "minNetIncome",
            Self::MaxNetIncome => "maxNetIncome",
        };
        f.write_str(name)
    }
}

/// Optional bounds applied to a record sequence.
///
/// Every bound is inclusive; an unset bound imposes no constraint. All set
/// bounds must hold for a record to pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Earliest calendar year of the period end.
    pub start_year: Option<i32>,
    /// Latest calendar year of the period end.
    pub end_year: Option<i32>,
    /// Minimum revenue.
    pub min_revenue: Option<f64>,
    /// Maximum revenue.
    pub max_revenue: Option<f64>,
    /// Minimum net income.
    pub min_net_income: Option<f64>,
    /// Maximum net income.
    pub max_net_income: Option<f64>,
}

impl FilterCriteria {
    /// Criteria with no bounds set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no bound is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start_year.is_none()
            && self.end_year.is_none()
            && self.min_revenue.is_none()
            && self.max_revenue.is_none()
            && self.min_net_income.is_none()
            && self.max_net_income.is_none()
    }

    /// Set one bound from raw user input.
    ///
    /// Blank, non-numeric, or non-finite input clears the bound. Year bounds
    /// only accept whole numbers.
    pub fn set(&mut self, field: FilterField, input: &str) {
        match field {
            FilterField::StartYear => self.start_year = parse_year(input),
            FilterField::EndYear => self.end_year = parse_year(input),
            FilterField::MinRevenue => self.min_revenue = parse_amount(input),
            FilterField::MaxRevenue => self.max_revenue = parse_amount(input),
            FilterField::MinNetIncome => self.min_net_income = parse_amount(input),
            FilterField::MaxNetIncome => self.max_net_income = parse_amount(input),
        }
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, field: FilterField, input: &str) -> Self {
        self.set(field, input);
        self
    }

    /// Returns true if the record satisfies every set bound.
    #[must_use]
    pub fn matches(&self, record: &IncomeStatementRecord) -> bool {
        let year = record.year();
        self.start_year.is_none_or(|min| year >= min)
            && self.end_year.is_none_or(|max| year <= max)
            && self.min_revenue.is_none_or(|min| record.revenue >= min)
            && self.max_revenue.is_none_or(|max| record.revenue <= max)
            && self.min_net_income.is_none_or(|min| record.net_income >= min)
            && self.max_net_income.is_none_or(|max| record.net_income <= max)
    }
}

fn parse_year(input: &str) -> Option<i32> {
    i32::from_str(input.trim()).ok()
}

fn parse_amount(input: &str) -> Option<f64> {
    f64::from_str(input.trim()).ok().filter(|v| v.is_finite())
}
