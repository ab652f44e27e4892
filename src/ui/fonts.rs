// src/ui/fonts.rs

use eframe::egui;

// egui's bundled fonts have no Hangul coverage, so the letter text would
// render as boxes without a system font. First readable candidate wins.
const CANDIDATES: &[&str] = &[
    // Linux
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/noto/NotoSansKR-Regular.ttf",
    // macOS
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    // Windows
    "C:\\Windows\\Fonts\\malgun.ttf",
];

const FAMILY_NAME: &str = "hangul_fallback";

/// Appends a Hangul-capable system font to both egui font families. When no
/// candidate is readable the defaults stay as they are and Korean text
/// degrades to replacement glyphs instead of failing.
pub fn install_hangul_fallback(ctx: &egui::Context) {
    let Some(bytes) = CANDIDATES
        .iter()
        .find_map(|path| std::fs::read(path).ok())
    else {
        log::warn!("no Hangul-capable system font found; Korean text will not render");
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        FAMILY_NAME.to_owned(),
        egui::FontData::from_owned(bytes).into(),
    );

    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        if let Some(list) = fonts.families.get_mut(&family) {
            list.push(FAMILY_NAME.to_owned());
        }
    }

    ctx.set_fonts(fonts);
}
