//! Dashboard controller owning fetch status, filters and sort selection.

use serde::Serialize;
use tracing::{debug, info, warn};

use incomeview_core::{IncomeStatementProvider, IncomeStatementRecord, Symbol};
use incomeview_pipeline::{
    ChartPoint, FilterCriteria, FilterField, SortKey, SortSpec, apply, derive_chart_series,
};

/// Outcome of the one-shot fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchStatus {
    /// The fetch has not completed yet.
    #[default]
    Loading,
    /// Records are available, in provider order.
    Ready(Vec<IncomeStatementRecord>),
    /// The fetch failed; no partial data is kept.
    Failed(String),
}

impl FetchStatus {
    /// Records, when the fetch succeeded.
    #[must_use]
    pub fn records(&self) -> Option<&[IncomeStatementRecord]> {
        match self {
            Self::Ready(records) => Some(records),
            _ => None,
        }
    }

    /// Error message, when the fetch failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Table rows and chart series derived from the current dashboard state.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DashboardView {
    /// Filtered and sorted records, for tabular display.
    pub rows: Vec<IncomeStatementRecord>,
    /// Chart series derived from `rows`, earliest period first.
    pub chart: Vec<ChartPoint>,
}

/// Inputs a [`DashboardView`] was computed from.
#[derive(Clone, Copy, Debug, PartialEq)]
struct ViewKey {
    generation: u64,
    filters: FilterCriteria,
    sort: Option<SortSpec>,
}

/// Single owner of the dashboard state.
///
/// All mutation goes through `set_*` and [`load`](Self::load). The derived
/// view is recomputed on demand and memoized on the inputs it depends on.
///
/// # Example
///
/// ```rust,ignore
/// use incomeview::{Dashboard, FmpProvider, SortKey, Symbol};
///
/// let provider = FmpProvider::new("your_api_key");
/// let mut dashboard = Dashboard::new(Symbol::new("AAPL"));
/// dashboard.load(&provider).await;
///
/// dashboard.set_sort(SortKey::Revenue);
/// let view = dashboard.view();
/// println!("{} rows", view.rows.len());
/// ```
#[derive(Debug)]
pub struct Dashboard {
    symbol: Symbol,
    status: FetchStatus,
    fetch_started: bool,
    generation: u64,
    filters: FilterCriteria,
    sort: Option<SortSpec>,
    memo: Option<(ViewKey, DashboardView)>,
}

impl Dashboard {
    /// Create a dashboard for `symbol` in the loading state.
    #[must_use]
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            status: FetchStatus::Loading,
            fetch_started: false,
            generation: 0,
            filters: FilterCriteria::default(),
            sort: None,
            memo: None,
        }
    }

    /// The symbol this dashboard shows.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Current fetch status.
    #[must_use]
    pub const fn status(&self) -> &FetchStatus {
        &self.status
    }

    /// Current filter criteria.
    #[must_use]
    pub const fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    /// Active sort spec, if any column has been selected.
    #[must_use]
    pub const fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    /// Fetch the annual income statements once.
    ///
    /// Only the first call reaches the provider; later calls leave the
    /// status untouched.
    pub async fn load(&mut self, provider: &dyn IncomeStatementProvider) -> &FetchStatus {
        if self.fetch_started {
            debug!(symbol = %self.symbol, "Fetch already performed, ignoring");
            return &self.status;
        }
        self.fetch_started = true;

        debug!(
            provider = provider.name(),
            symbol = %self.symbol,
            "Fetching income statements"
        );
        let status = match provider
            .fetch_income_statements(&self.symbol, None)
            .await
        {
            Ok(records) => {
                info!(
                    provider = provider.name(),
                    symbol = %self.symbol,
                    count = records.len(),
                    "Income statements ready"
                );
                FetchStatus::Ready(records)
            }
            Err(e) => {
                warn!(
                    provider = provider.name(),
                    symbol = %self.symbol,
                    error = %e,
                    "Failed to fetch income statements"
                );
                FetchStatus::Failed(e.to_string())
            }
        };
        self.set_status(status);
        &self.status
    }

    /// Replace the fetch status.
    pub fn set_status(&mut self, status: FetchStatus) {
        self.status = status;
        self.generation += 1;
    }

    /// Replace all filter criteria.
    pub fn set_filters(&mut self, filters: FilterCriteria) {
        self.filters = filters;
    }

    /// Update one filter bound from raw user input.
    pub fn set_filter_field(&mut self, field: FilterField, input: &str) {
        self.filters.set(field, input);
        debug!(%field, input, "Filter updated");
    }

    /// Select a sort column, flipping direction if it is already active.
    pub fn set_sort(&mut self, key: SortKey) -> SortSpec {
        let spec = SortSpec::toggle(self.sort, key);
        debug!(key = %spec.key, direction = ?spec.direction, "Sort updated");
        self.sort = Some(spec);
        spec
    }

    /// Rows and chart for the current state.
    ///
    /// Empty unless the fetch succeeded.
    pub fn view(&mut self) -> &DashboardView {
        let key = ViewKey {
            generation: self.generation,
            filters: self.filters,
            sort: self.sort,
        };

        let stale = self.memo.as_ref().is_none_or(|(cached, _)| *cached != key);
        if stale {
            let view = match &self.status {
                FetchStatus::Ready(records) => {
                    let rows = apply(records, &self.filters, self.sort);
                    let chart = derive_chart_series(&rows);
                    DashboardView { rows, chart }
                }
                _ => DashboardView::default(),
            };
            self.memo = Some((key, view));
        }

        let (_, view) = self.memo.get_or_insert_with(|| (key, DashboardView::default()));
        view
    }
}
