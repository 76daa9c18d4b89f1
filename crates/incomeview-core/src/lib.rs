#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/incomeview/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core traits and types for income-statement dashboards.
//!
//! - [`DataProvider`](provider::DataProvider) - Base trait for all providers
//! - [`IncomeStatementProvider`](provider::IncomeStatementProvider) - Annual income statements
//! - [`IncomeStatementRecord`](types::IncomeStatementRecord) - One reporting period

/// Error types for data operations.
pub mod error;
/// Provider traits for fetching income-statement data.
pub mod provider;
/// Core data types (Symbol, IncomeStatementRecord).
pub mod types;

// Re-export commonly used items at crate root
pub use error::{DataError, Result};
pub use provider::{DataProvider, IncomeStatementProvider};
pub use types::{IncomeStatementRecord, Symbol};
