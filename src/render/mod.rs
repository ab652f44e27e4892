// src/render/mod.rs

pub mod html;

use crate::document::{Document, Highlight};

/// Fixed top of the indicator chart's percent axis.
pub const INDICATOR_AXIS_MAX: f64 = 200.0;

/// Top of the hidden percent axis the profit-rate line is projected onto.
pub const RATE_AXIS_MAX: f64 = 20.0;

/// Headroom above the tallest bar so value labels stay inside the plot.
const CHART_HEADROOM: f64 = 1.15;

pub const IR_ACTION_MAX_LINES: usize = 6;

pub const COMPANY_MARK: &str = "(주) KCC";
pub const COMPANY_SITE: &str = "kccworld.irpage.co.kr";
pub const COMPANY_PHONE: &str = "02-3480-5000";

pub const COLOR_ACCENT: (u8, u8, u8) = (0, 43, 91);
pub const COLOR_REVENUE: (u8, u8, u8) = (59, 130, 246);
pub const COLOR_OPERATING_PROFIT: (u8, u8, u8) = (30, 27, 75);
pub const COLOR_PROFIT_RATE: (u8, u8, u8) = (245, 158, 11);

const COLOR_LIQUIDITY: (u8, u8, u8) = (59, 130, 246);
const COLOR_EQUITY: (u8, u8, u8) = (239, 68, 68);
const COLOR_DEPENDENCY: (u8, u8, u8) = (16, 185, 129);
const COLOR_DEBT: (u8, u8, u8) = (139, 92, 246);

/// One narrative line of the earnings summary, classified by the
/// leading-dash convention. The text keeps its dash verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryLine {
    Heading(String),
    Detail(String),
}

impl SummaryLine {
    pub fn text(&self) -> &str {
        match self {
            SummaryLine::Heading(s) | SummaryLine::Detail(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PerformancePoint {
    pub quarter: String,
    pub revenue: f64,
    pub operating_profit: f64,
    pub profit_rate: f64,

    // profit rate projected onto the value axis for the overlay line
    pub rate_on_value_axis: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceChart {
    pub points: Vec<PerformancePoint>,
    pub value_axis_max: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RatioSeries {
    pub name: &'static str,
    pub color: (u8, u8, u8),
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorChart {
    pub quarters: Vec<String>,
    pub series: [RatioSeries; 4],
    pub axis_max: f64,
}

/// Everything the preview draws, computed once per frame from the current
/// document. The frontends (egui panel, HTML export) render this verbatim
/// and compute nothing themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterView {
    pub date: String,
    pub quarter_title: String,
    pub summary: Vec<SummaryLine>,
    pub performance: PerformanceChart,
    pub indicators: IndicatorChart,
    pub highlights: Vec<Highlight>,
    pub support_lines: Vec<String>,

    // capped to IR_ACTION_MAX_LINES
    pub action_lines: Vec<String>,
}

pub fn project(document: &Document) -> LetterView {
    let summary = document
        .earnings_summary
        .iter()
        .map(|line| classify_line(line))
        .collect();

    let tallest = document
        .performance_history
        .iter()
        .flat_map(|row| [row.revenue, row.operating_profit])
        .fold(0.0_f64, f64::max);
    let value_axis_max = tallest * CHART_HEADROOM;

    let points = document
        .performance_history
        .iter()
        .map(|row| PerformancePoint {
            quarter: row.quarter.clone(),
            revenue: row.revenue,
            operating_profit: row.operating_profit,
            profit_rate: row.profit_rate,
            rate_on_value_axis: if value_axis_max > 0.0 {
                row.profit_rate / RATE_AXIS_MAX * value_axis_max
            } else {
                0.0
            },
        })
        .collect();

    let ratio = |f: fn(&crate::document::IndicatorRow) -> f64| -> Vec<f64> {
        document.indicator_history.iter().map(f).collect()
    };

    let indicators = IndicatorChart {
        quarters: document
            .indicator_history
            .iter()
            .map(|row| row.quarter.clone())
            .collect(),
        series: [
            RatioSeries {
                name: "유동비율",
                color: COLOR_LIQUIDITY,
                values: ratio(|r| r.liquidity_ratio),
            },
            RatioSeries {
                name: "자기자본비율",
                color: COLOR_EQUITY,
                values: ratio(|r| r.equity_ratio),
            },
            RatioSeries {
                name: "차입금의존도",
                color: COLOR_DEPENDENCY,
                values: ratio(|r| r.dependency_ratio),
            },
            RatioSeries {
                name: "부채비율",
                color: COLOR_DEBT,
                values: ratio(|r| r.debt_ratio),
            },
        ],
        axis_max: INDICATOR_AXIS_MAX,
    };

    LetterView {
        date: document.date.clone(),
        quarter_title: document.quarter_title.clone(),
        summary,
        performance: PerformanceChart {
            points,
            value_axis_max,
        },
        indicators,
        highlights: document.business_highlights.clone(),
        support_lines: document.ir_support.clone(),
        action_lines: document
            .ir_action
            .iter()
            .take(IR_ACTION_MAX_LINES)
            .cloned()
            .collect(),
    }
}

fn classify_line(line: &str) -> SummaryLine {
    if line.starts_with('-') {
        SummaryLine::Detail(line.to_string())
    } else {
        SummaryLine::Heading(line.to_string())
    }
}

/// "16228" -> "16,228"; used for bar value labels.
pub fn format_thousands(v: f64) -> String {
    let rounded = v.round() as i64;
    let negative = rounded < 0;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// "7.2" -> "7.2%", "8.0" -> "8%"; used for rate labels and axis ticks.
pub fn format_percent(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{:.0}%", v)
    } else {
        format!("{:.1}%", v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::FieldEdit;
    use crate::seed::seed_document;

    #[test]
    fn projection_is_pure() {
        let doc = seed_document();
        assert_eq!(project(&doc), project(&doc));
    }

    #[test]
    fn every_document_field_reaches_the_view() {
        let doc = seed_document();
        let view = project(&doc);

        assert_eq!(view.date, doc.date);
        assert_eq!(view.quarter_title, doc.quarter_title);
        assert_eq!(view.summary.len(), doc.earnings_summary.len());
        assert_eq!(view.performance.points.len(), doc.performance_history.len());
        assert_eq!(view.indicators.quarters.len(), doc.indicator_history.len());
        for series in &view.indicators.series {
            assert_eq!(series.values.len(), doc.indicator_history.len());
        }
        assert_eq!(view.highlights, doc.business_highlights);
        assert_eq!(view.support_lines, doc.ir_support);
    }

    #[test]
    fn summary_lines_follow_the_leading_dash_convention() {
        let doc = seed_document();
        let view = project(&doc);

        assert!(matches!(&view.summary[0], SummaryLine::Heading(s) if s.starts_with("(매출액)")));
        assert!(matches!(&view.summary[2], SummaryLine::Detail(s) if s.starts_with('-')));
    }

    #[test]
    fn action_lines_are_capped_for_display() {
        let doc = seed_document();
        assert!(doc.ir_action.len() > IR_ACTION_MAX_LINES);

        let view = project(&doc);
        assert_eq!(view.action_lines.len(), IR_ACTION_MAX_LINES);
        assert_eq!(view.action_lines[..], doc.ir_action[..IR_ACTION_MAX_LINES]);
    }

    #[test]
    fn profit_rate_is_projected_inside_the_value_axis() {
        let view = project(&seed_document());
        assert!(view.performance.value_axis_max > 0.0);
        for point in &view.performance.points {
            assert!(point.rate_on_value_axis > 0.0);
            assert!(point.rate_on_value_axis < view.performance.value_axis_max);
        }
    }

    #[test]
    fn empty_performance_history_projects_without_nan() {
        let doc = seed_document().with_field(FieldEdit::PerformanceHistory(Vec::new()));
        let view = project(&doc);
        assert_eq!(view.performance.value_axis_max, 0.0);
        assert!(view.performance.points.is_empty());
    }

    #[test]
    fn indicator_axis_is_pinned_to_two_hundred_percent() {
        let view = project(&seed_document());
        assert_eq!(view.indicators.axis_max, 200.0);
    }

    #[test]
    fn thousands_and_percent_formatting() {
        assert_eq!(format_thousands(16228.0), "16,228");
        assert_eq!(format_thousands(983.0), "983");
        assert_eq!(format_thousands(1_234_567.0), "1,234,567");
        assert_eq!(format_thousands(-1406.0), "-1,406");

        assert_eq!(format_percent(7.2), "7.2%");
        assert_eq!(format_percent(8.0), "8%");
    }
}
