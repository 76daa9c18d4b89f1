#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/incomeview/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Pure transformations over fetched income-statement records.
//!
//! - [`filter_records`] - AND of up to six optional bounds
//! - [`sort_records`] - stable single-key ordering with toggle semantics
//! - [`derive_chart_series`] - billions, operating margin, chronological order
//!
//! None of these functions mutate their input; they are safe to re-run on
//! every input change.

/// Chart series derivation.
pub mod chart;
/// Filter criteria parsed from user input.
pub mod criteria;
/// Record filtering.
pub mod filter;
/// Record ordering.
pub mod sort;

#[cfg(test)]
mod test_support;

pub use chart::{ChartPoint, derive_chart_series, operating_margin_percent};
pub use criteria::{FilterCriteria, FilterField};
pub use filter::filter_records;
pub use sort::{SortDirection, SortKey, SortSpec, compare, sort_records};

use incomeview_core::IncomeStatementRecord;

/// Filters, then sorts when a sort spec is active.
///
/// Without a sort spec the provider order (most recent first) is kept.
#[must_use]
pub fn apply(
    records: &[IncomeStatementRecord],
    criteria: &FilterCriteria,
    sort: Option<SortSpec>,
) -> Vec<IncomeStatementRecord> {
    let filtered = filter_records(records, criteria);
    match sort {
        Some(spec) => sort_records(&filtered, spec),
        None => filtered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::history;

    #[test]
    fn test_apply_without_sort_keeps_provider_order() {
        let records = history();
        assert_eq!(apply(&records, &FilterCriteria::new(), None), records);
    }

    #[test]
    fn test_apply_filters_before_sorting() {
        let records = history();
        let criteria = FilterCriteria::new().with(FilterField::EndYear, "2021");
        let out = apply(&records, &criteria, Some(SortSpec::ascending(SortKey::Revenue)));

        let years: Vec<i32> = out.iter().map(|r| r.year()).collect();
        assert_eq!(years, [2019, 2018, 2020, 2021]);
    }

    #[test]
    fn test_full_pipeline_to_chart() {
        let records = history();
        let criteria = FilterCriteria::new().with(FilterField::MinRevenue, "999999999999999");
        let rows = apply(&records, &criteria, Some(SortSpec::descending(SortKey::Date)));
        assert!(rows.is_empty());
        assert!(derive_chart_series(&rows).is_empty());
    }
}
