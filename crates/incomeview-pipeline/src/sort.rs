//! Single-key, toggleable record ordering.

use incomeview_core::IncomeStatementRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Column a record sequence can be ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Period end date, chronological.
    Date,
    /// Revenue, numeric.
    Revenue,
    /// Net income, numeric.
    NetIncome,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Date => "date",
            Self::Revenue => "revenue",
            Self::NetIncome => "netIncome",
        };
        f.write_str(name)
    }
}

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    /// Smallest/earliest first.
    #[default]
    Ascending,
    /// Largest/latest first.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Active sort column and direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    /// Column to order by.
    pub key: SortKey,
    /// Direction of the ordering.
    pub direction: SortDirection,
}

impl SortSpec {
    /// Ascending order on `key`.
    #[must_use]
    pub const fn ascending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    /// Descending order on `key`.
    #[must_use]
    pub const fn descending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Descending,
        }
    }

    /// Spec that results from selecting `key` while `current` is active.
    ///
    /// Re-selecting the active key flips its direction; any other key starts
    /// ascending.
    #[must_use]
    pub fn toggle(current: Option<Self>, key: SortKey) -> Self {
        match current {
            Some(spec) if spec.key == key => Self {
                key,
                direction: spec.direction.flipped(),
            },
            _ => Self::ascending(key),
        }
    }
}

/// Three-way comparison of two records under `spec`.
#[must_use]
pub fn compare(a: &IncomeStatementRecord, b: &IncomeStatementRecord, spec: SortSpec) -> Ordering {
    let ord = match spec.key {
        SortKey::Date => a.date.cmp(&b.date),
        SortKey::Revenue => a.revenue.total_cmp(&b.revenue),
        SortKey::NetIncome => a.net_income.total_cmp(&b.net_income),
    };
    match spec.direction {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    }
}

/// Returns a new, stably sorted copy of `records`.
#[must_use]
pub fn sort_records(records: &[IncomeStatementRecord], spec: SortSpec) -> Vec<IncomeStatementRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare(a, b, spec));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{history, record};

    fn dates(records: &[IncomeStatementRecord]) -> Vec<String> {
        records.iter().map(|r| r.date.to_string()).collect()
    }

    #[test]
    fn test_toggle_rules() {
        let first = SortSpec::toggle(None, SortKey::Revenue);
        assert_eq!(first, SortSpec::ascending(SortKey::Revenue));

        let second = SortSpec::toggle(Some(first), SortKey::Revenue);
        assert_eq!(second, SortSpec::descending(SortKey::Revenue));

        let other = SortSpec::toggle(Some(second), SortKey::Date);
        assert_eq!(other, SortSpec::ascending(SortKey::Date));
    }

    #[test]
    fn test_double_toggle_restores_ascending_order() {
        let records = history();
        let asc = SortSpec::toggle(None, SortKey::NetIncome);
        let desc = SortSpec::toggle(Some(asc), SortKey::NetIncome);
        let back = SortSpec::toggle(Some(desc), SortKey::NetIncome);

        assert_eq!(back, asc);
        assert_eq!(sort_records(&records, back), sort_records(&records, asc));
    }

    #[test]
    fn test_sort_by_date() {
        let records = history();
        let asc = sort_records(&records, SortSpec::ascending(SortKey::Date));
        assert!(asc.windows(2).all(|w| w[0].date <= w[1].date));

        let desc = sort_records(&records, SortSpec::descending(SortKey::Date));
        assert_eq!(desc, records);
    }

    #[test]
    fn test_sort_numeric_keys() {
        let records = history();
        let by_rev = sort_records(&records, SortSpec::descending(SortKey::Revenue));
        assert!(by_rev.windows(2).all(|w| w[0].revenue >= w[1].revenue));
        assert_eq!(by_rev[0].year(), 2022);

        let by_ni = sort_records(&records, SortSpec::ascending(SortKey::NetIncome));
        assert!(by_ni.windows(2).all(|w| w[0].net_income <= w[1].net_income));
    }

    #[test]
    fn test_sort_is_stable_and_idempotent() {
        let records = vec![
            record("2020-12-31", 5.0, 1.0, 1.0),
            record("2019-12-31", 5.0, 2.0, 1.0),
            record("2021-12-31", 3.0, 3.0, 1.0),
            record("2018-12-31", 5.0, 4.0, 1.0),
        ];
        let spec = SortSpec::ascending(SortKey::Revenue);
        let once = sort_records(&records, spec);
        assert_eq!(
            dates(&once),
            ["2021-12-31", "2020-12-31", "2019-12-31", "2018-12-31"]
        );
        assert_eq!(sort_records(&once, spec), once);

        // Equal keys keep input order in the descending direction too.
        let desc = sort_records(&records, SortSpec::descending(SortKey::Revenue));
        assert_eq!(
            dates(&desc),
            ["2020-12-31", "2019-12-31", "2018-12-31", "2021-12-31"]
        );
    }

    #[test]
    fn test_input_is_not_modified() {
        let records = history();
        let before = records.clone();
        let _ = sort_records(&records, SortSpec::ascending(SortKey::Date));
        assert_eq!(records, before);
    }

    #[test]
    fn test_spec_serializes_camel_case() {
        let json = serde_json::to_value(SortSpec::descending(SortKey::NetIncome)).unwrap();
        assert_eq!(json["key"], "netIncome");
        assert_eq!(json["direction"], "descending");
    }
}
