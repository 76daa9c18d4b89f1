//! Text and JSON rendering of the dashboard view.

use comfy_table::{Cell, CellAlignment, ContentArrangement, Table, presets::UTF8_FULL};
use incomeview::{
    ChartPoint, DashboardView, FilterCriteria, IncomeStatementRecord, SortSpec, Symbol,
};
use serde::Serialize;

use crate::cli::View;

/// JSON document printed with `--format json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    symbol: &'a Symbol,
    filters: &'a FilterCriteria,
    sort: Option<SortSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rows: Option<&'a [IncomeStatementRecord]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    chart: Option<&'a [ChartPoint]>,
}

pub(crate) fn render_json(
    symbol: &Symbol,
    filters: &FilterCriteria,
    sort: Option<SortSpec>,
    view: &DashboardView,
    sections: View,
) -> serde_json::Result<String> {
    let report = JsonReport {
        symbol,
        filters,
        sort,
        rows: sections.shows_table().then_some(view.rows.as_slice()),
        chart: sections.shows_chart().then_some(view.chart.as_slice()),
    };
    serde_json::to_string_pretty(&report)
}

pub(crate) fn render_text(symbol: &Symbol, view: &DashboardView, sections: View) -> String {
    let mut out = String::new();
    if sections.shows_table() {
        out.push_str(&format!("{symbol} annual income statements\n"));
        out.push_str(&income_table(&view.rows).to_string());
        out.push('\n');
    }
    if sections.shows_chart() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("{symbol} revenue, operating margin and net income\n"));
        out.push_str(&chart_table(&view.chart).to_string());
        out.push('\n');
    }
    out
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn income_table(rows: &[IncomeStatementRecord]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Date",
        "Revenue",
        "Gross Profit",
        "Operating Income",
        "Net Income",
        "EPS",
    ]);
    for r in rows {
        table.add_row(vec![
            Cell::new(r.date),
            right(format_amount(r.revenue)),
            right(format_amount(r.gross_profit)),
            right(format_amount(r.operating_income)),
            right(format_amount(r.net_income)),
            right(format!("{:.2}", r.eps)),
        ]);
    }
    table
}

fn chart_table(points: &[ChartPoint]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Period",
        "Revenue (B)",
        "Operating Margin (%)",
        "Net Income (B)",
    ]);
    for p in points {
        let margin = p
            .operating_margin_percent
            .map_or_else(|| "n/a".to_string(), |m| format!("{m:.2}"));
        table.add_row(vec![
            Cell::new(&p.label),
            right(format!("{:.3}", p.revenue_billions)),
            right(margin),
            right(format!("{:.3}", p.net_income_billions)),
        ]);
    }
    table
}

fn right(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Currency amount with a magnitude suffix, e.g. `$383.29B`.
pub(crate) fn format_amount(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    let (scaled, suffix) = if abs >= 1e12 {
        (abs / 1e12, "T")
    } else if abs >= 1e9 {
        (abs / 1e9, "B")
    } else if abs >= 1e6 {
        (abs / 1e6, "M")
    } else {
        (abs, "")
    };
    format!("{sign}${scaled:.2}{suffix}")
}
