// src/ui/widgets.rs

use eframe::egui;
use irletter_lib::document::{lines_to_text, text_to_lines};

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(0, 43, 91);

/// Section header of the edit surface: a small accent tick plus the title.
pub fn section_header(ui: &mut egui::Ui, title: &str) {
    ui.add_space(10.0);
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(5.0, 20.0), egui::Sense::hover());
        ui.painter()
            .rect_filled(rect, egui::CornerRadius::same(2u8), ACCENT);
        ui.label(egui::RichText::new(title).strong().size(16.0));
    });
    ui.add_space(6.0);
}

/// A small caption above a bound control.
pub fn field_label(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).small().weak());
}

/// Multi-line control over a line list. The displayed text is the lines
/// joined by newline; an edit splits it back (an emptied control comes
/// back as `[""]`). Returns the new lines only when the text changed.
pub fn lines_editor(
    ui: &mut egui::Ui,
    id: &str,
    lines: &[String],
    rows: usize,
) -> Option<Vec<String>> {
    let mut text = lines_to_text(lines);
    let response = ui.add(
        egui::TextEdit::multiline(&mut text)
            .id_salt(id)
            .desired_rows(rows)
            .desired_width(f32::INFINITY),
    );
    response.changed().then(|| text_to_lines(&text))
}

/// Single-line control over a string field. Returns the new value only
/// when the text changed.
pub fn text_field(ui: &mut egui::Ui, id: &str, value: &str) -> Option<String> {
    let mut text = value.to_string();
    let response = ui.add(
        egui::TextEdit::singleline(&mut text)
            .id_salt(id)
            .desired_width(f32::INFINITY),
    );
    response.changed().then_some(text)
}

/// Numeric table cell. Returns the new value only when it changed.
pub fn number_cell(ui: &mut egui::Ui, value: f64, speed: f64) -> Option<f64> {
    let mut v = value;
    let response = ui.add(egui::DragValue::new(&mut v).speed(speed));
    response.changed().then_some(v)
}

pub fn ui_notice(ui: &mut egui::Ui, body: &str) {
    // Intentionally bright "attention" yellow (not red, not muted).
    // Works in both dark and light mode.
    let accent = egui::Color32::from_rgb(255, 215, 90);

    // Strong border + noticeable (but not obnoxious) tint.
    let stroke = egui::Stroke::new(1.5, accent);
    let fill = egui::Color32::from_rgba_unmultiplied(accent.r(), accent.g(), accent.b(), 48);

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .stroke(stroke)
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new("Notice")
                    .size(18.0)
                    .strong()
                    .color(accent),
            );
            ui.add_space(4.0);
            ui.label(body);
        });
}
