//! System font discovery for card text.
//!
//! Cards are rendered headless, so there is no UI toolkit to hand us a
//! font. We look for a usable TTF in the common distro locations, with
//! an environment override for deployments that ship their own face.
//! When nothing is found, rendering proceeds without text; the export
//! path must never fail because of a missing font.

use std::sync::OnceLock;

use ab_glyph::FontVec;

static REGULAR: OnceLock<Option<FontVec>> = OnceLock::new();
static BOLD: OnceLock<Option<FontVec>> = OnceLock::new();

const REGULAR_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
];

const BOLD_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Bold.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSansBold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
];

/// The regular text face, if one could be found on this system.
pub fn regular() -> Option<&'static FontVec> {
    REGULAR
        .get_or_init(|| discover("TOMOCARD_FONT", REGULAR_CANDIDATES))
        .as_ref()
}

/// The bold text face; falls back to the regular face.
pub fn bold() -> Option<&'static FontVec> {
    BOLD.get_or_init(|| discover("TOMOCARD_FONT_BOLD", BOLD_CANDIDATES))
        .as_ref()
        .or_else(regular)
}

fn discover(env_key: &str, candidates: &[&str]) -> Option<FontVec> {
    if let Ok(path) = std::env::var(env_key) {
        match load(&path) {
            Some(font) => return Some(font),
            None => {
                tracing::warn!(path, "Configured font override could not be loaded");
            }
        }
    }

    for path in candidates {
        if let Some(font) = load(path) {
            tracing::debug!(path, "Loaded card font");
            return Some(font);
        }
    }

    tracing::warn!("No usable TTF font found; cards will render without text");
    None
}

fn load(path: &str) -> Option<FontVec> {
    let bytes = std::fs::read(path).ok()?;
    FontVec::try_from_vec(bytes).ok()
}
