// src/document.rs

//! The letter document model and its pure update discipline.
//!
//! A `Document` is always a complete value; every edit derives a new whole
//! document from the old one plus one changed field. `with_field` is the
//! single choke point all mutation flows through — row and card edits clone
//! the owning sequence, replace one element, and hand the whole sequence
//! back to `with_field`.

use serde::{Deserialize, Serialize};

/// One quarter of the revenue/profit table (chart x-axis order).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRow {
    pub quarter: String,
    pub revenue: f64,
    pub operating_profit: f64,
    pub profit_rate: f64,
}

/// One quarter of the financial-ratio table. Percent values, not clamped
/// here; only the chart axis clamps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorRow {
    pub quarter: String,
    pub liquidity_ratio: f64,
    pub equity_ratio: f64,
    pub dependency_ratio: f64,
    pub debt_ratio: f64,
}

/// One narrative card of the business-highlights section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub subtitle: String,
    pub details: Vec<String>,
}

/// The whole letter. Serialized field names stay camelCase so the wire shape
/// matches what the translation round-trip must preserve.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub date: String,
    pub quarter_title: String,
    pub earnings_summary: Vec<String>,
    pub performance_history: Vec<PerformanceRow>,
    pub business_highlights: Vec<Highlight>,
    pub indicator_history: Vec<IndicatorRow>,
    pub ir_support: Vec<String>,
    pub ir_action: Vec<String>,
}

/// A whole-field replacement. One variant per top-level `Document` field;
/// the payload type fixes the value shape at compile time.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldEdit {
    Date(String),
    QuarterTitle(String),
    EarningsSummary(Vec<String>),
    PerformanceHistory(Vec<PerformanceRow>),
    BusinessHighlights(Vec<Highlight>),
    IndicatorHistory(Vec<IndicatorRow>),
    IrSupport(Vec<String>),
    IrAction(Vec<String>),
}

/// One changed cell of a `PerformanceRow`.
#[derive(Clone, Debug, PartialEq)]
pub enum PerformanceCell {
    Quarter(String),
    Revenue(f64),
    OperatingProfit(f64),
    ProfitRate(f64),
}

/// One changed cell of an `IndicatorRow`.
#[derive(Clone, Debug, PartialEq)]
pub enum IndicatorCell {
    Quarter(String),
    LiquidityRatio(f64),
    EquityRatio(f64),
    DependencyRatio(f64),
    DebtRatio(f64),
}

/// One changed field of a `Highlight` card.
#[derive(Clone, Debug, PartialEq)]
pub enum HighlightField {
    Title(String),
    Subtitle(String),
    Details(Vec<String>),
}

impl Document {
    /// Returns a new document equal to `self` in every field except the one
    /// named by `edit`. Pure; `self` is never touched.
    pub fn with_field(&self, edit: FieldEdit) -> Document {
        let mut next = self.clone();
        match edit {
            FieldEdit::Date(v) => next.date = v,
            FieldEdit::QuarterTitle(v) => next.quarter_title = v,
            FieldEdit::EarningsSummary(v) => next.earnings_summary = v,
            FieldEdit::PerformanceHistory(v) => next.performance_history = v,
            FieldEdit::BusinessHighlights(v) => next.business_highlights = v,
            FieldEdit::IndicatorHistory(v) => next.indicator_history = v,
            FieldEdit::IrSupport(v) => next.ir_support = v,
            FieldEdit::IrAction(v) => next.ir_action = v,
        }
        next
    }

    /// Row edit expressed as a whole-field replacement: clone the sequence,
    /// replace one cell of row `index`, route through `with_field`.
    /// An out-of-range index leaves the document unchanged.
    pub fn with_performance_cell(&self, index: usize, cell: PerformanceCell) -> Document {
        let mut rows = self.performance_history.clone();
        let Some(row) = rows.get_mut(index) else {
            return self.clone();
        };
        match cell {
            PerformanceCell::Quarter(v) => row.quarter = v,
            PerformanceCell::Revenue(v) => row.revenue = v,
            PerformanceCell::OperatingProfit(v) => row.operating_profit = v,
            PerformanceCell::ProfitRate(v) => row.profit_rate = v,
        }
        self.with_field(FieldEdit::PerformanceHistory(rows))
    }

    pub fn with_indicator_cell(&self, index: usize, cell: IndicatorCell) -> Document {
        let mut rows = self.indicator_history.clone();
        let Some(row) = rows.get_mut(index) else {
            return self.clone();
        };
        match cell {
            IndicatorCell::Quarter(v) => row.quarter = v,
            IndicatorCell::LiquidityRatio(v) => row.liquidity_ratio = v,
            IndicatorCell::EquityRatio(v) => row.equity_ratio = v,
            IndicatorCell::DependencyRatio(v) => row.dependency_ratio = v,
            IndicatorCell::DebtRatio(v) => row.debt_ratio = v,
        }
        self.with_field(FieldEdit::IndicatorHistory(rows))
    }

    pub fn with_highlight_field(&self, index: usize, field: HighlightField) -> Document {
        let mut cards = self.business_highlights.clone();
        let Some(card) = cards.get_mut(index) else {
            return self.clone();
        };
        match field {
            HighlightField::Title(v) => card.title = v,
            HighlightField::Subtitle(v) => card.subtitle = v,
            HighlightField::Details(v) => card.details = v,
        }
        self.with_field(FieldEdit::BusinessHighlights(cards))
    }

    /// Merge an accepted draft card at the head of the highlights list:
    /// replace the first card when one exists, append when the list is empty.
    pub fn with_lead_highlight(&self, card: Highlight) -> Document {
        let mut cards = self.business_highlights.clone();
        if cards.is_empty() {
            cards.push(card);
        } else {
            cards[0] = card;
        }
        self.with_field(FieldEdit::BusinessHighlights(cards))
    }
}

/// Multi-line text controls display a line list joined by newline.
pub fn lines_to_text(lines: &[String]) -> String {
    lines.join("\n")
}

/// Inverse of `lines_to_text`. Splitting an empty control yields `[""]`,
/// not an empty sequence — the renderer and the line count both rely on it.
pub fn text_to_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}
