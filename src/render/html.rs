// src/render/html.rs

use super::{
    format_percent, format_thousands, IndicatorChart, LetterView, PerformanceChart, SummaryLine,
    COLOR_OPERATING_PROFIT, COLOR_PROFIT_RATE, COLOR_REVENUE, COMPANY_MARK, COMPANY_PHONE,
    COMPANY_SITE,
};

// Chart viewports. The page column is 660 px wide; heights follow the
// on-screen preview.
const PERF_W: f64 = 660.0;
const PERF_H: f64 = 300.0;
const IND_W: f64 = 660.0;
const IND_H: f64 = 320.0;

/// Renders the letter as one self-contained HTML page: no external assets,
/// charts inlined as SVG, ready for the browser's print dialog.
pub fn render_page(view: &LetterView) -> String {
    let mut page = String::with_capacity(32 * 1024);

    page.push_str("<!DOCTYPE html>\n<html lang=\"ko\">\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str(&format!(
        "<title>{} IR LETTER</title>\n",
        esc(&view.quarter_title)
    ));
    page.push_str("<style>\n");
    page.push_str(PAGE_CSS);
    page.push_str("</style>\n</head>\n<body>\n<div class=\"page\">\n");

    push_header(&mut page, view);

    page.push_str("<div class=\"row\">\n");
    page.push_str("<section class=\"col wide\">\n");
    page.push_str(
        "<div class=\"section-bar\">최근 분기별 실적 추이 <span class=\"unit\">(단위: 억원, %)</span></div>\n",
    );
    page.push_str(&svg_performance(&view.performance));
    page.push_str("</section>\n");

    page.push_str("<section class=\"col narrow\">\n");
    page.push_str("<div class=\"section-bar\">EARNINGS SUMMARY</div>\n");
    push_summary(&mut page, view);
    page.push_str("</section>\n</div>\n");

    page.push_str("<div class=\"row\">\n");
    page.push_str("<section class=\"col half\">\n");
    page.push_str("<h2 class=\"rule\">BUSINESS HIGHLIGHTS</h2>\n");
    push_highlights(&mut page, view);
    page.push_str("</section>\n");

    page.push_str("<section class=\"col half\">\n");
    page.push_str("<h2 class=\"rule right\">KEY INDICATORS</h2>\n");
    page.push_str(&svg_indicators(&view.indicators));
    page.push_str("<h2 class=\"rule right\">KCC IR</h2>\n");
    push_ir_panels(&mut page, view);
    page.push_str("</section>\n</div>\n");

    push_footer(&mut page);

    page.push_str("</div>\n</body>\n</html>\n");
    page
}

fn push_header(page: &mut String, view: &LetterView) {
    page.push_str("<header>\n<div class=\"issue\">\n");
    page.push_str(&format!("<div class=\"date\">{}</div>\n", esc(&view.date)));
    page.push_str("<h1>IR LETTER</h1>\n</div>\n<div class=\"masthead\">\n");
    page.push_str(&format!(
        "<div class=\"company\">{}</div>\n",
        esc(COMPANY_MARK)
    ));
    page.push_str(&format!(
        "<div class=\"quarter\">{}</div>\n",
        esc(&view.quarter_title)
    ));
    page.push_str("</div>\n</header>\n");
}

fn push_summary(page: &mut String, view: &LetterView) {
    page.push_str("<ul class=\"summary\">\n");
    for line in &view.summary {
        let class = match line {
            SummaryLine::Heading(_) => "heading",
            SummaryLine::Detail(_) => "detail",
        };
        page.push_str(&format!(
            "<li class=\"{class}\">{}</li>\n",
            esc(line.text())
        ));
    }
    page.push_str("</ul>\n");
}

fn push_highlights(page: &mut String, view: &LetterView) {
    for card in &view.highlights {
        page.push_str("<div class=\"card\">\n");
        page.push_str(&format!(
            "<div class=\"card-title\">{}</div>\n",
            esc(&card.title)
        ));
        page.push_str(&format!(
            "<div class=\"card-subtitle\">&ldquo; {} &rdquo;</div>\n",
            esc(&card.subtitle)
        ));
        page.push_str("<ul class=\"card-details\">\n");
        for detail in &card.details {
            page.push_str(&format!("<li>{}</li>\n", esc(detail)));
        }
        page.push_str("</ul>\n</div>\n");
    }
}

fn push_ir_panels(page: &mut String, view: &LetterView) {
    page.push_str("<div class=\"ir-grid\">\n<div class=\"ir-panel support\">\n");
    for line in &view.support_lines {
        page.push_str(&format!("<div>{}</div>\n", esc(line)));
    }
    page.push_str("</div>\n<div class=\"ir-panel action\">\n");
    for line in &view.action_lines {
        page.push_str(&format!("<div>{}</div>\n", esc(line)));
    }
    page.push_str("</div>\n</div>\n");
}

fn push_footer(page: &mut String) {
    page.push_str(&format!(
        "<footer>\n<span>{}</span>\n<span>{}</span>\n</footer>\n",
        esc(COMPANY_SITE),
        esc(COMPANY_PHONE)
    ));
}

/// Grouped revenue/operating-profit bars with the profit-rate line overlaid,
/// matching the on-screen composed chart.
fn svg_performance(chart: &PerformanceChart) -> String {
    let (x0, x1) = (10.0, PERF_W - 10.0);
    let (y_top, y_base) = (40.0, PERF_H - 28.0);
    let plot_h = y_base - y_top;

    let mut svg = format!(
        "<svg viewBox=\"0 0 {PERF_W} {PERF_H}\" xmlns=\"http://www.w3.org/2000/svg\" role=\"img\">\n"
    );

    // horizontal dashed grid
    for level in 1..=4 {
        let y = y_base - plot_h * (level as f64) / 4.0;
        svg.push_str(&format!(
            "<line x1=\"{x0:.1}\" y1=\"{y:.1}\" x2=\"{x1:.1}\" y2=\"{y:.1}\" stroke=\"#e5e7eb\" stroke-dasharray=\"3 3\"/>\n"
        ));
    }
    svg.push_str(&format!(
        "<line x1=\"{x0:.1}\" y1=\"{y_base:.1}\" x2=\"{x1:.1}\" y2=\"{y_base:.1}\" stroke=\"#cbd5e1\"/>\n"
    ));

    let n = chart.points.len();
    if n == 0 {
        svg.push_str("</svg>\n");
        return svg;
    }

    let group_w = (x1 - x0) / n as f64;
    let bar_rev_w = group_w * 0.30;
    let bar_op_w = group_w * 0.25;
    let gap = group_w * 0.04;
    let scale = |v: f64| -> f64 {
        if chart.value_axis_max > 0.0 {
            (v.max(0.0) / chart.value_axis_max) * plot_h
        } else {
            0.0
        }
    };

    let mut line_points = String::new();
    let mut line_marks = String::new();

    for (i, point) in chart.points.iter().enumerate() {
        let cx = x0 + group_w * (i as f64 + 0.5);

        let rev_h = scale(point.revenue);
        let rev_x = cx - gap / 2.0 - bar_rev_w;
        let rev_y = y_base - rev_h;
        svg.push_str(&format!(
            "<rect x=\"{rev_x:.1}\" y=\"{rev_y:.1}\" width=\"{bar_rev_w:.1}\" height=\"{rev_h:.1}\" rx=\"3\" fill=\"{}\"/>\n",
            rgb(COLOR_REVENUE)
        ));
        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"10\" font-weight=\"900\" fill=\"#475569\">{}</text>\n",
            rev_x + bar_rev_w / 2.0,
            rev_y - 5.0,
            esc(&format_thousands(point.revenue))
        ));

        let op_h = scale(point.operating_profit);
        let op_x = cx + gap / 2.0;
        let op_y = y_base - op_h;
        svg.push_str(&format!(
            "<rect x=\"{op_x:.1}\" y=\"{op_y:.1}\" width=\"{bar_op_w:.1}\" height=\"{op_h:.1}\" rx=\"3\" fill=\"{}\"/>\n",
            rgb(COLOR_OPERATING_PROFIT)
        ));
        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"9\" font-weight=\"700\" fill=\"#64748b\">{}</text>\n",
            op_x + bar_op_w / 2.0,
            op_y - 5.0,
            esc(&format_thousands(point.operating_profit))
        ));

        let rate_y = y_base - scale(point.rate_on_value_axis);
        line_points.push_str(&format!("{cx:.1},{rate_y:.1} "));
        line_marks.push_str(&format!(
            "<circle cx=\"{cx:.1}\" cy=\"{rate_y:.1}\" r=\"4\" fill=\"{}\" stroke=\"#fff\" stroke-width=\"2\"/>\n",
            rgb(COLOR_PROFIT_RATE)
        ));
        line_marks.push_str(&format!(
            "<text x=\"{cx:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"11\" font-weight=\"900\" fill=\"#000\">{}</text>\n",
            rate_y - 10.0,
            esc(&format_percent(point.profit_rate))
        ));

        svg.push_str(&format!(
            "<text x=\"{cx:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"11\" font-weight=\"900\" fill=\"#1e293b\">{}</text>\n",
            y_base + 18.0,
            esc(&point.quarter)
        ));
    }

    svg.push_str(&format!(
        "<polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"3.5\"/>\n",
        line_points.trim_end(),
        rgb(COLOR_PROFIT_RATE)
    ));
    svg.push_str(&line_marks);
    svg.push_str("</svg>\n");
    svg
}

/// Four ratio lines on a fixed 0..200 % axis, matching the on-screen
/// indicator chart.
fn svg_indicators(chart: &IndicatorChart) -> String {
    let (x0, x1) = (46.0, IND_W - 12.0);
    let (y_top, y_base) = (34.0, IND_H - 30.0);
    let plot_h = y_base - y_top;

    let mut svg = format!(
        "<svg viewBox=\"0 0 {IND_W} {IND_H}\" xmlns=\"http://www.w3.org/2000/svg\" role=\"img\">\n"
    );

    // grid plus percent ticks
    for level in 0..=4 {
        let value = chart.axis_max * (level as f64) / 4.0;
        let y = y_base - plot_h * (level as f64) / 4.0;
        svg.push_str(&format!(
            "<line x1=\"{x0:.1}\" y1=\"{y:.1}\" x2=\"{x1:.1}\" y2=\"{y:.1}\" stroke=\"#f1f5f9\" stroke-dasharray=\"3 3\"/>\n"
        ));
        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" font-size=\"10\" font-weight=\"700\" fill=\"#94a3b8\">{}</text>\n",
            x0 - 6.0,
            y + 3.5,
            esc(&format_percent(value))
        ));
    }

    // legend
    for (i, series) in chart.series.iter().enumerate() {
        let x = x0 + (i as f64) * 140.0;
        svg.push_str(&format!(
            "<circle cx=\"{x:.1}\" cy=\"14\" r=\"4\" fill=\"{}\"/>\n",
            rgb(series.color)
        ));
        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"18\" font-size=\"10\" font-weight=\"900\" fill=\"#334155\">{}</text>\n",
            x + 9.0,
            esc(series.name)
        ));
    }

    let n = chart.quarters.len();
    if n == 0 {
        svg.push_str("</svg>\n");
        return svg;
    }

    let x_at = |i: usize| -> f64 {
        if n == 1 {
            (x0 + x1) / 2.0
        } else {
            x0 + (x1 - x0) * (i as f64) / ((n - 1) as f64)
        }
    };
    let y_at = |v: f64| -> f64 { y_base - (v.clamp(0.0, chart.axis_max) / chart.axis_max) * plot_h };

    for (i, quarter) in chart.quarters.iter().enumerate() {
        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"10\" font-weight=\"900\" fill=\"#64748b\">{}</text>\n",
            x_at(i),
            y_base + 18.0,
            esc(quarter)
        ));
    }

    for series in &chart.series {
        let mut points = String::new();
        for (i, value) in series.values.iter().enumerate() {
            points.push_str(&format!("{:.1},{:.1} ", x_at(i), y_at(*value)));
        }
        svg.push_str(&format!(
            "<polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"3.5\"/>\n",
            points.trim_end(),
            rgb(series.color)
        ));
        for (i, value) in series.values.iter().enumerate() {
            svg.push_str(&format!(
                "<circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"3.5\" fill=\"{}\" stroke=\"#fff\" stroke-width=\"1.5\"/>\n",
                x_at(i),
                y_at(*value),
                rgb(series.color)
            ));
        }
    }

    svg.push_str("</svg>\n");
    svg
}

fn esc(s: &str) -> String {
    html_escape::encode_text(s).into_owned()
}

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("rgb({r},{g},{b})")
}

const PAGE_CSS: &str = r#"
* { box-sizing: border-box; margin: 0; }
body { background: #e5e7eb; font-family: 'Malgun Gothic', 'Apple SD Gothic Neo', 'Noto Sans KR', sans-serif; color: #111827; }
.page { width: 210mm; min-height: 290mm; margin: 0 auto; background: #fff; padding: 14mm; display: flex; flex-direction: column; gap: 9mm; }
header { display: flex; justify-content: space-between; align-items: flex-start; }
.date { color: #002B5B; font-weight: 900; text-transform: uppercase; letter-spacing: 0.2em; font-size: 12px; }
h1 { color: #002B5B; font-size: 64px; font-style: italic; font-weight: 900; letter-spacing: -0.06em; line-height: 0.9; margin-top: 6px; }
.masthead { text-align: right; }
.company { font-size: 26px; font-weight: 900; color: #002B5B; border-left: 8px solid #002B5B; padding: 2px 10px; display: inline-block; }
.quarter { font-size: 26px; font-weight: 900; color: #1f2937; margin-top: 8px; }
.row { display: flex; gap: 9mm; }
.col { display: flex; flex-direction: column; gap: 4mm; }
.wide { flex: 7; min-width: 0; }
.narrow { flex: 5; min-width: 0; }
.half { flex: 1; min-width: 0; }
.section-bar { background: #002B5B; color: #fff; font-weight: 900; font-size: 14px; padding: 6px 14px; align-self: flex-start; border-radius: 0 8px 8px 0; }
.section-bar .unit { font-size: 9px; font-weight: 400; opacity: 0.7; margin-left: 6px; }
svg { width: 100%; height: auto; }
.summary { list-style: none; background: #f8fafc; border-top: 4px solid #002B5B; padding: 14px; display: flex; flex-direction: column; gap: 10px; font-size: 12px; line-height: 1.6; }
.summary .heading { font-weight: 900; border-left: 4px solid #002B5B; padding-left: 10px; }
.summary .detail { margin-left: 16px; color: #6b7280; font-style: italic; }
.rule { font-size: 26px; font-style: italic; font-weight: 900; color: #002B5B; letter-spacing: -0.04em; border-bottom: 6px solid #002B5B; padding-bottom: 6px; }
.rule.right { text-align: right; }
.card { border: 1px solid #f3f4f6; border-top: 4px solid #3b82f6; box-shadow: 0 4px 10px rgba(0,0,0,0.06); padding: 14px; margin-top: 4mm; }
.card-title { background: #5B718B; color: #fff; font-style: italic; font-weight: 900; font-size: 10px; display: inline-block; padding: 3px 10px; border-radius: 2px; }
.card-subtitle { color: #002B5B; font-weight: 900; font-style: italic; font-size: 16px; text-align: center; border-bottom: 1px dashed #e5e7eb; padding: 8px 0; margin: 8px 0; }
.card-details { list-style: none; display: flex; flex-direction: column; gap: 6px; font-size: 11px; color: #1f2937; }
.card-details li::before { content: "\2022"; color: #2563eb; font-weight: 900; margin-right: 8px; }
.ir-grid { display: flex; gap: 5mm; margin-top: 4mm; }
.ir-panel { flex: 1; color: #fff; border-radius: 8px; padding: 12px; font-size: 10px; font-weight: 700; display: flex; flex-direction: column; gap: 5px; }
.ir-panel.support { background: #1e1b4b; }
.ir-panel.action { background: #002B5B; }
footer { margin-top: auto; border-top: 10px solid #002B5B; padding-top: 8mm; display: flex; justify-content: space-between; color: #002B5B; font-weight: 900; font-size: 18px; letter-spacing: -0.03em; }
@page { size: A4; margin: 0; }
@media print {
  body { background: #fff; }
  .page { width: auto; min-height: auto; }
  * { -webkit-print-color-adjust: exact; print-color-adjust: exact; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::FieldEdit;
    use crate::render::project;
    use crate::seed::seed_document;

    #[test]
    fn page_contains_every_section() {
        let page = render_page(&project(&seed_document()));

        assert!(page.contains("IR LETTER"));
        assert!(page.contains("최근 분기별 실적 추이"));
        assert!(page.contains("EARNINGS SUMMARY"));
        assert!(page.contains("BUSINESS HIGHLIGHTS"));
        assert!(page.contains("KEY INDICATORS"));
        assert!(page.contains(COMPANY_SITE));
        assert!(page.contains(COMPANY_PHONE));
        assert!(page.contains("<svg"));
        assert!(page.contains("16,228"));
        assert!(page.contains("유동비율"));
    }

    #[test]
    fn page_caps_action_lines() {
        let doc = seed_document();
        let page = render_page(&project(&doc));

        assert!(page.contains(&esc(&doc.ir_action[5])));
        assert!(!page.contains(&esc(&doc.ir_action[6])));
    }

    #[test]
    fn page_escapes_user_text() {
        let doc = seed_document().with_field(FieldEdit::Date("<script>alert(1)</script>".into()));
        let page = render_page(&project(&doc));

        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn empty_tables_render_without_panicking() {
        let doc = seed_document()
            .with_field(FieldEdit::PerformanceHistory(Vec::new()))
            .with_field(FieldEdit::IndicatorHistory(Vec::new()));
        let page = render_page(&project(&doc));
        assert!(page.contains("<svg"));
    }
}
