use std::fs;
use std::sync::Arc;

use eframe::egui::{Context, FontData, FontDefinitions, FontFamily};

// ---------------------------------------------------------------------------
// Korean UI font – best effort
// ---------------------------------------------------------------------------

/// The dashboard labels are Korean and egui's bundled fonts carry no hangul
/// glyphs, so we probe a few well-known system font locations. A missing
/// font is not an error; egui's defaults stay in place.
const CANDIDATES: &[&str] = &[
    // Pretendard, if installed system-wide
    "/usr/share/fonts/OTF/Pretendard-Regular.otf",
    "/usr/share/fonts/truetype/pretendard/Pretendard-Regular.otf",
    // Linux distro packages
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJKkr-Regular.otf",
    // macOS
    "/System/Library/Fonts/Supplemental/AppleGothic.ttf",
    // Windows
    "C:\\Windows\\Fonts\\malgun.ttf",
];

const FONT_NAME: &str = "korean-ui";

/// Install a hangul-capable font ahead of the defaults, if one is found.
pub fn install_korean_font(ctx: &Context) {
    let found = CANDIDATES
        .iter()
        .find_map(|path| fs::read(path).ok().map(|bytes| (*path, bytes)));

    let Some((path, bytes)) = found else {
        log::warn!("no Korean system font found; hangul labels may not render");
        return;
    };

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(FONT_NAME.to_owned(), Arc::new(FontData::from_owned(bytes)));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .insert(0, FONT_NAME.to_owned());
    }
    ctx.set_fonts(fonts);

    log::info!("installed Korean UI font from {path}");
}
