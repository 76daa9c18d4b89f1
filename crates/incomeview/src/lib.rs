#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/incomeview/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Income-statement dashboard for a single company.
//!
//! This crate re-exports the core types, the filter/sort/chart pipeline and
//! the provider implementations, and provides a [`Dashboard`] controller that
//! owns the fetch status, the filter criteria and the sort selection.
//!
//! # Features
//!
//! - `fmp` - Financial Modeling Prep provider (default)
//!
//! # Example
//!
//! ```rust,ignore
//! use incomeview::{Dashboard, FilterField, FmpProvider, Symbol};
//!
//! #[tokio::main]
//! async fn main() {
//!     let provider = FmpProvider::new("your_api_key");
//!     let mut dashboard = Dashboard::new(Symbol::new("AAPL"));
//!     dashboard.load(&provider).await;
//!
//!     dashboard.set_filter_field(FilterField::StartYear, "2020");
//!     for point in &dashboard.view().chart {
//!         println!("{} {:.1}B", point.label, point.revenue_billions);
//!     }
//! }
//! ```

// Core types and traits
pub use incomeview_core::*;

// Pipeline
pub use incomeview_pipeline::{
    ChartPoint, FilterCriteria, FilterField, SortDirection, SortKey, SortSpec, apply, compare,
    derive_chart_series, filter_records, operating_margin_percent, sort_records,
};

// Providers
#[cfg(feature = "fmp")]
pub use incomeview_fmp::{FMP_BASE_URL, FmpProvider};

mod dashboard;
pub use dashboard::{Dashboard, DashboardView, FetchStatus};
