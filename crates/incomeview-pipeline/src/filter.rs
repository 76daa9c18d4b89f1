//! Multi-predicate record filtering.

use incomeview_core::IncomeStatementRecord;

use crate::criteria::FilterCriteria;

/// Returns the records that satisfy every bound set in `criteria`.
///
/// Input order is preserved and the input slice is left untouched.
#[must_use]
pub fn filter_records(
    records: &[IncomeStatementRecord],
    criteria: &FilterCriteria,
) -> Vec<IncomeStatementRecord> {
    if criteria.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| criteria.matches(r))
        .cloned()
        .collect()
}
