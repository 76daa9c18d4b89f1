//! Fixtures shared by the pipeline tests.

use chrono::NaiveDate;
use incomeview_core::{IncomeStatementRecord, Symbol};

/// Record with the given date (`YYYY-MM-DD`) and amounts.
pub(crate) fn record(
    date: &str,
    revenue: f64,
    net_income: f64,
    operating_income: f64,
) -> IncomeStatementRecord {
    IncomeStatementRecord {
        revenue,
        net_income,
        operating_income,
        ..IncomeStatementRecord::new(
            Symbol::new("AAPL"),
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        )
    }
}

/// The two most recent Apple fiscal years, most recent first.
pub(crate) fn aapl_records() -> Vec<IncomeStatementRecord> {
    vec![
        IncomeStatementRecord {
            gross_profit: 169_148_000_000.0,
            eps: 6.16,
            ..record("2023-09-30", 383_285_000_000.0, 96_995_000_000.0, 114_301_000_000.0)
        },
        IncomeStatementRecord {
            gross_profit: 170_782_000_000.0,
            eps: 6.15,
            ..record("2022-09-24", 394_328_000_000.0, 99_803_000_000.0, 119_437_000_000.0)
        },
    ]
}

/// Six Apple fiscal years, most recent first, as the provider returns them.
pub(crate) fn history() -> Vec<IncomeStatementRecord> {
    let mut records = aapl_records();
    records.extend([
        record("2021-09-25", 365_817_000_000.0, 94_680_000_000.0, 108_949_000_000.0),
        record("2020-09-26", 274_515_000_000.0, 57_411_000_000.0, 66_288_000_000.0),
        record("2019-09-28", 260_174_000_000.0, 55_256_000_000.0, 63_930_000_000.0),
        record("2018-09-29", 265_595_000_000.0, 59_531_000_000.0, 70_898_000_000.0),
    ]);
    records
}
