//! Chart-ready series derived from income-statement records.

use incomeview_core::IncomeStatementRecord;
use serde::{Deserialize, Serialize};

/// Divisor converting currency units to billions.
pub const BILLION: f64 = 1e9;

/// One point of the revenue / margin / net income chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    /// Month and year of the period end, e.g. `Sep 2023`.
    pub label: String,
    /// Revenue in billions.
    pub revenue_billions: f64,
    /// Operating margin in percent, rounded to two decimals.
    ///
    /// `None` when the margin is undefined (zero revenue).
    pub operating_margin_percent: Option<f64>,
    /// Net income in billions.
    pub net_income_billions: f64,
}

impl From<&IncomeStatementRecord> for ChartPoint {
    fn from(record: &IncomeStatementRecord) -> Self {
        Self {
            label: record.date.format("%b %Y").to_string(),
            revenue_billions: record.revenue / BILLION,
            operating_margin_percent: operating_margin_percent(record),
            net_income_billions: record.net_income / BILLION,
        }
    }
}

/// Operating income over revenue, in percent, rounded to two decimals.
#[must_use]
pub fn operating_margin_percent(record: &IncomeStatementRecord) -> Option<f64> {
    if record.revenue == 0.0 {
        return None;
    }
    let pct = record.operating_income / record.revenue * 100.0;
    pct.is_finite().then(|| round2(pct))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Maps records to chart points, earliest period first.
///
/// The chart always reads left to right in time, whatever order the table
/// rows are in. Records sharing a date keep their relative order.
#[must_use]
pub fn derive_chart_series(records: &[IncomeStatementRecord]) -> Vec<ChartPoint> {
    let mut chronological: Vec<&IncomeStatementRecord> = records.iter().collect();
    chronological.sort_by_key(|r| r.date);
    chronological.into_iter().map(ChartPoint::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::{SortKey, SortSpec, sort_records};
    use crate::test_support::{aapl_records, history, record};
    use approx::assert_relative_eq;

    #[test]
    fn test_single_aapl_point() {
        let records = aapl_records();
        let series = derive_chart_series(&records[..1]);
        assert_eq!(series.len(), 1);

        let point = &series[0];
        assert_eq!(point.label, "Sep 2023");
        assert_relative_eq!(point.revenue_billions, 383.285, epsilon = 1e-9);
        assert_relative_eq!(point.net_income_billions, 96.995, epsilon = 1e-9);
        assert_relative_eq!(point.operating_margin_percent.unwrap(), 29.82, epsilon = 1e-9);
    }

    #[test]
    fn test_series_is_chronological() {
        let records = history();
        let series = derive_chart_series(&records);
        assert_eq!(series.len(), records.len());

        let earliest = records.iter().min_by_key(|r| r.date).unwrap();
        assert_eq!(series[0], ChartPoint::from(earliest));
        assert_eq!(series.last().unwrap(), &ChartPoint::from(&records[0]));
    }

    #[test]
    fn test_series_is_chronological_after_any_sort() {
        let records = history();
        let expected: Vec<String> = [2018, 2019, 2020, 2021, 2022, 2023]
            .iter()
            .map(|y| format!("Sep {y}"))
            .collect();

        for spec in [
            SortSpec::ascending(SortKey::Date),
            SortSpec::descending(SortKey::Date),
            SortSpec::ascending(SortKey::Revenue),
            SortSpec::descending(SortKey::NetIncome),
        ] {
            let sorted = sort_records(&records, spec);
            let labels: Vec<String> = derive_chart_series(&sorted)
                .into_iter()
                .map(|p| p.label)
                .collect();
            assert_eq!(labels, expected, "{spec:?}");
        }
    }

    #[test]
    fn test_equal_dates_keep_input_order() {
        let records = vec![
            record("2021-12-31", 2.0, 0.0, 1.0),
            record("2020-12-31", 1.0, 0.0, 1.0),
            record("2021-12-31", 3.0, 0.0, 1.0),
        ];
        let revenues: Vec<f64> = derive_chart_series(&records)
            .iter()
            .map(|p| p.revenue_billions)
            .collect();
        assert_eq!(revenues, [1.0 / BILLION, 2.0 / BILLION, 3.0 / BILLION]);
    }

    #[test]
    fn test_empty_input() {
        assert!(derive_chart_series(&[]).is_empty());
    }

    #[test]
    fn test_zero_revenue_yields_sentinel() {
        let r = record("2020-06-30", 0.0, -1.0e9, -2.0e9);
        assert_eq!(operating_margin_percent(&r), None);

        let point = ChartPoint::from(&r);
        assert_eq!(point.operating_margin_percent, None);
        assert_eq!(point.revenue_billions, 0.0);
        assert_relative_eq!(point.net_income_billions, -1.0);

        let json = serde_json::to_value(&point).unwrap();
        assert!(json["operatingMarginPercent"].is_null());
    }

    #[test]
    fn test_non_finite_margin_yields_sentinel() {
        let r = record("2020-06-30", f64::NAN, 0.0, 1.0);
        assert_eq!(operating_margin_percent(&r), None);
    }

    #[test]
    fn test_margin_rounding() {
        let r = record("2021-03-31", 3.0, 0.0, 1.0);
        assert_relative_eq!(operating_margin_percent(&r).unwrap(), 33.33, epsilon = 1e-9);

        let negative = record("2021-03-31", 3.0, 0.0, -2.0);
        assert_relative_eq!(
            operating_margin_percent(&negative).unwrap(),
            -66.67,
            epsilon = 1e-9
        );
    }
}
