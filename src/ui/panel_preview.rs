// src/ui/panel_preview.rs

use eframe::egui;
use egui_plot::{Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoints};
use irletter_lib::render::{
    format_percent, format_thousands, IndicatorChart, LetterView, PerformanceChart, SummaryLine,
    COLOR_OPERATING_PROFIT, COLOR_PROFIT_RATE, COLOR_REVENUE, COMPANY_MARK, COMPANY_PHONE,
    COMPANY_SITE,
};

use super::widgets::ACCENT;

const PAGE_TEXT: egui::Color32 = egui::Color32::from_rgb(31, 41, 55);
const PAGE_MUTED: egui::Color32 = egui::Color32::from_rgb(107, 114, 128);

/// Draws a [`LetterView`] verbatim. The projection already classified the
/// lines, capped the action list and computed the chart series; nothing is
/// derived from the document here.
pub struct PreviewPanel;

impl PreviewPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, view: &LetterView) {
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                egui::Frame::NONE
                    .fill(egui::Color32::WHITE)
                    .inner_margin(egui::Margin::same(28))
                    .show(ui, |ui| {
                        ui.visuals_mut().override_text_color = Some(PAGE_TEXT);
                        ui.set_min_width(ui.available_width());

                        header(ui, view);
                        ui.add_space(18.0);

                        section_bar(ui, "최근 분기별 실적 추이 (단위: 억원, %)");
                        performance_chart(ui, &view.performance);
                        ui.add_space(18.0);

                        section_bar(ui, "EARNINGS SUMMARY");
                        summary(ui, view);
                        ui.add_space(18.0);

                        rule(ui, "BUSINESS HIGHLIGHTS");
                        highlights(ui, view);
                        ui.add_space(18.0);

                        rule(ui, "KEY INDICATORS");
                        indicator_chart(ui, &view.indicators);
                        ui.add_space(18.0);

                        rule(ui, "KCC IR");
                        ir_panels(ui, view);
                        ui.add_space(18.0);

                        footer(ui);
                    });
                ui.add_space(30.0);
            });
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> egui::Color32 {
    egui::Color32::from_rgb(r, g, b)
}

fn header(ui: &mut egui::Ui, view: &LetterView) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new(&view.date)
                    .color(ACCENT)
                    .strong()
                    .size(12.0),
            );
            ui.label(
                egui::RichText::new("IR LETTER")
                    .color(ACCENT)
                    .strong()
                    .italics()
                    .size(42.0),
            );
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
            ui.vertical(|ui| {
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.label(
                        egui::RichText::new(COMPANY_MARK)
                            .color(ACCENT)
                            .strong()
                            .size(22.0),
                    );
                    ui.label(
                        egui::RichText::new(&view.quarter_title)
                            .color(PAGE_TEXT)
                            .strong()
                            .size(22.0),
                    );
                });
            });
        });
    });
}

fn section_bar(ui: &mut egui::Ui, title: &str) {
    egui::Frame::NONE
        .fill(ACCENT)
        .inner_margin(egui::Margin::symmetric(12, 5))
        .corner_radius(egui::CornerRadius::same(4u8))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(title)
                    .color(egui::Color32::WHITE)
                    .strong()
                    .size(13.0),
            );
        });
    ui.add_space(8.0);
}

fn rule(ui: &mut egui::Ui, title: &str) {
    ui.label(
        egui::RichText::new(title)
            .color(ACCENT)
            .strong()
            .italics()
            .size(22.0),
    );
    let rect = ui
        .allocate_exact_size(egui::vec2(ui.available_width(), 4.0), egui::Sense::hover())
        .0;
    ui.painter().rect_filled(rect, 0.0, ACCENT);
    ui.add_space(10.0);
}

fn summary(ui: &mut egui::Ui, view: &LetterView) {
    for line in &view.summary {
        match line {
            SummaryLine::Heading(text) => {
                ui.horizontal(|ui| {
                    let (tick, _) =
                        ui.allocate_exact_size(egui::vec2(4.0, 16.0), egui::Sense::hover());
                    ui.painter().rect_filled(tick, 0.0, ACCENT);
                    ui.label(egui::RichText::new(text).strong().size(13.0));
                });
            }
            SummaryLine::Detail(text) => {
                ui.horizontal(|ui| {
                    ui.add_space(18.0);
                    ui.label(
                        egui::RichText::new(text)
                            .color(PAGE_MUTED)
                            .italics()
                            .size(12.0),
                    );
                });
            }
        }
        ui.add_space(3.0);
    }
}

fn performance_chart(ui: &mut egui::Ui, chart: &PerformanceChart) {
    let quarters: Vec<String> = chart.points.iter().map(|p| p.quarter.clone()).collect();

    let mut revenue_bars = Vec::with_capacity(chart.points.len());
    let mut profit_bars = Vec::with_capacity(chart.points.len());
    let mut rate_points = Vec::with_capacity(chart.points.len());

    for (i, point) in chart.points.iter().enumerate() {
        let x = i as f64;
        revenue_bars.push(
            Bar::new(x - 0.18, point.revenue)
                .width(0.30)
                .fill(rgb(COLOR_REVENUE)),
        );
        profit_bars.push(
            Bar::new(x + 0.18, point.operating_profit)
                .width(0.26)
                .fill(rgb(COLOR_OPERATING_PROFIT)),
        );
        rate_points.push([x, point.rate_on_value_axis]);
    }

    Plot::new("performance_chart")
        .height(240.0)
        .legend(Legend::default())
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_y(false)
        .include_x(-0.6)
        .include_x(chart.points.len() as f64 - 0.4)
        .include_y(0.0)
        .include_y(chart.value_axis_max.max(1.0))
        .x_axis_formatter(move |mark: GridMark, _range| {
            let rounded = mark.value.round();
            if (mark.value - rounded).abs() < 0.05 && rounded >= 0.0 {
                quarters
                    .get(rounded as usize)
                    .cloned()
                    .unwrap_or_default()
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(revenue_bars)
                    .name("매출액")
                    .color(rgb(COLOR_REVENUE)),
            );
            plot_ui.bar_chart(
                BarChart::new(profit_bars)
                    .name("영업이익")
                    .color(rgb(COLOR_OPERATING_PROFIT)),
            );
            plot_ui.line(
                Line::new(PlotPoints::from(rate_points))
                    .name("영업이익률")
                    .color(rgb(COLOR_PROFIT_RATE))
                    .width(3.0),
            );
        });

    // numeric row under the chart; the plot itself carries no value labels
    if !chart.points.is_empty() {
        ui.add_space(4.0);
        egui::Grid::new("performance_values")
            .num_columns(chart.points.len() + 1)
            .show(ui, |ui| {
                ui.label(egui::RichText::new("매출액").small().color(PAGE_MUTED));
                for point in &chart.points {
                    ui.label(
                        egui::RichText::new(format_thousands(point.revenue))
                            .small()
                            .strong(),
                    );
                }
                ui.end_row();
                ui.label(egui::RichText::new("영업이익률").small().color(PAGE_MUTED));
                for point in &chart.points {
                    ui.label(
                        egui::RichText::new(format_percent(point.profit_rate))
                            .small()
                            .color(rgb(COLOR_PROFIT_RATE)),
                    );
                }
                ui.end_row();
            });
    }
}

fn indicator_chart(ui: &mut egui::Ui, chart: &IndicatorChart) {
    let quarters = chart.quarters.clone();

    Plot::new("indicator_chart")
        .height(220.0)
        .legend(Legend::default())
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-0.3)
        .include_x((chart.quarters.len().max(1) as f64) - 0.7)
        .include_y(0.0)
        .include_y(chart.axis_max)
        .x_axis_formatter(move |mark: GridMark, _range| {
            let rounded = mark.value.round();
            if (mark.value - rounded).abs() < 0.05 && rounded >= 0.0 {
                quarters
                    .get(rounded as usize)
                    .cloned()
                    .unwrap_or_default()
            } else {
                String::new()
            }
        })
        .y_axis_formatter(|mark: GridMark, _range| format_percent(mark.value))
        .show(ui, |plot_ui| {
            for series in &chart.series {
                let points: Vec<[f64; 2]> = series
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, v)| [i as f64, *v])
                    .collect();
                plot_ui.line(
                    Line::new(PlotPoints::from(points))
                        .name(series.name)
                        .color(rgb(series.color))
                        .width(2.5),
                );
            }
        });
}

fn highlights(ui: &mut egui::Ui, view: &LetterView) {
    for card in &view.highlights {
        egui::Frame::NONE
            .fill(egui::Color32::from_rgb(250, 250, 252))
            .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(229, 231, 235)))
            .inner_margin(egui::Margin::same(12))
            .corner_radius(egui::CornerRadius::same(4u8))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                egui::Frame::NONE
                    .fill(egui::Color32::from_rgb(91, 113, 139))
                    .inner_margin(egui::Margin::symmetric(8, 3))
                    .corner_radius(egui::CornerRadius::same(2u8))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(&card.title)
                                .color(egui::Color32::WHITE)
                                .strong()
                                .italics()
                                .size(11.0),
                        );
                    });
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(format!("“ {} ”", card.subtitle))
                            .color(ACCENT)
                            .strong()
                            .italics()
                            .size(15.0),
                    );
                });
                ui.separator();
                for detail in &card.details {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(
                            egui::RichText::new("•")
                                .color(egui::Color32::from_rgb(37, 99, 235))
                                .strong(),
                        );
                        ui.label(egui::RichText::new(detail).size(12.0));
                    });
                }
            });
        ui.add_space(8.0);
    }
}

fn ir_panels(ui: &mut egui::Ui, view: &LetterView) {
    ui.columns(2, |columns| {
        dark_panel(
            &mut columns[0],
            egui::Color32::from_rgb(30, 27, 75),
            &view.support_lines,
        );
        dark_panel(&mut columns[1], ACCENT, &view.action_lines);
    });
}

fn dark_panel(ui: &mut egui::Ui, fill: egui::Color32, lines: &[String]) {
    egui::Frame::NONE
        .fill(fill)
        .inner_margin(egui::Margin::same(12))
        .corner_radius(egui::CornerRadius::same(8u8))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            for line in lines {
                ui.label(
                    egui::RichText::new(line)
                        .color(egui::Color32::WHITE)
                        .size(11.0),
                );
            }
        });
}

fn footer(ui: &mut egui::Ui) {
    let rect = ui
        .allocate_exact_size(egui::vec2(ui.available_width(), 8.0), egui::Sense::hover())
        .0;
    ui.painter().rect_filled(rect, 0.0, ACCENT);
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(COMPANY_SITE)
                .color(ACCENT)
                .strong()
                .size(15.0),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(COMPANY_PHONE)
                    .color(ACCENT)
                    .strong()
                    .size(15.0),
            );
        });
    });
}
