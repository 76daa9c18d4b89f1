//! CLI argument definitions.

use clap::{Parser, ValueEnum};
use incomeview::{FilterField, SortKey};

/// Annual income statements for one company: filter, sort, chart.
///
/// Filter bounds are taken as free text; a value that is not a number is
/// ignored rather than rejected.
#[derive(Debug, Parser)]
#[command(name = "incomeview", author, version, about)]
pub(crate) struct Cli {
    /// Ticker symbol to show.
    #[arg(long, env = "INCOMEVIEW_SYMBOL", default_value = "AAPL")]
    pub(crate) symbol: String,

    /// FMP API key (falls back to FMP_API_KEY from the environment or .env).
    #[arg(long, env = "FMP_API_KEY", hide_env_values = true)]
    pub(crate) api_key: Option<String>,

    /// Override the FMP API root.
    #[arg(long, env = "FMP_BASE_URL")]
    pub(crate) base_url: Option<String>,

    /// Earliest fiscal year to keep.
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) start_year: Option<String>,

    /// Latest fiscal year to keep.
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) end_year: Option<String>,

    /// Minimum revenue, in currency units.
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) min_revenue: Option<String>,

    /// Maximum revenue, in currency units.
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) max_revenue: Option<String>,

    /// Minimum net income, in currency units.
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) min_net_income: Option<String>,

    /// Maximum net income, in currency units.
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) max_net_income: Option<String>,

    /// Sort column. Repeat to toggle direction, as with clicking a header twice.
    #[arg(long, value_enum)]
    pub(crate) sort: Vec<SortColumn>,

    /// Which sections to print.
    #[arg(long, value_enum, default_value_t = View::Both)]
    pub(crate) view: View,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub(crate) verbose: u8,
}

impl Cli {
    /// Filter inputs in the order they were declared, paired with their field.
    pub(crate) fn filter_inputs(&self) -> impl Iterator<Item = (FilterField, &str)> {
        [
            (FilterField::StartYear, &self.start_year),
            (FilterField::EndYear, &self.end_year),
            (FilterField::MinRevenue, &self.min_revenue),
            (FilterField::MaxRevenue, &self.max_revenue),
            (FilterField::MinNetIncome, &self.min_net_income),
            (FilterField::MaxNetIncome, &self.max_net_income),
        ]
        .into_iter()
        .filter_map(|(field, input)| input.as_deref().map(|s| (field, s)))
    }
}

/// Sortable table column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum SortColumn {
    /// Period end date.
    Date,
    /// Revenue.
    Revenue,
    /// Net income.
    NetIncome,
}

impl From<SortColumn> for SortKey {
    fn from(column: SortColumn) -> Self {
        match column {
            SortColumn::Date => Self::Date,
            SortColumn::Revenue => Self::Revenue,
            SortColumn::NetIncome => Self::NetIncome,
        }
    }
}

/// Sections of the dashboard to print.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum View {
    /// Income statement table only.
    Table,
    /// Chart series only.
    Chart,
    /// Table followed by chart series.
    Both,
}

impl View {
    pub(crate) const fn shows_table(self) -> bool {
        matches!(self, Self::Table | Self::Both)
    }

    pub(crate) const fn shows_chart(self) -> bool {
        matches!(self, Self::Chart | Self::Both)
    }
}

/// Output format for the rendered view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable tables.
    Text,
    /// A single JSON document.
    Json,
}
