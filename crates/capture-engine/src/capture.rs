//! The capture adapter: surface to print-ready bitmap.
//!
//! Mirrors the invariants of the browser rasterizer it replaces:
//! a uniform scale factor, an opaque background fill (transparent
//! pixels print badly), and a cross-origin policy that fails captures
//! of remote-tainted surfaces when restricted.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use tomocard_common::{TomocardError, TomocardResult};
use tomocard_roster_model::CardSide;

use crate::stage::Stage;
use crate::surface::Surface;

/// Policy for surfaces that embed remote-origin photo pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossOriginPolicy {
    /// Allow remote content to be captured (the default; printed
    /// cards need external photo URLs to work).
    #[default]
    Permissive,

    /// Refuse to capture tainted surfaces.
    SameOrigin,
}

/// Capture parameters, fixed per export job.
#[derive(Debug, Clone, Copy)]
pub struct CaptureOptions {
    /// Uniform raster scale applied to the logical size.
    pub scale: u32,

    /// Opaque background fill composited under the surface.
    pub background: Rgba<u8>,

    /// Remote-content policy.
    pub cross_origin: CrossOriginPolicy,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            scale: 3,
            background: Rgba([255, 255, 255, 255]),
            cross_origin: CrossOriginPolicy::Permissive,
        }
    }
}

/// Rasterize a surface into a bitmap of exactly logical × scale
/// pixels, composited over the opaque background.
pub fn capture(surface: &Surface, options: &CaptureOptions) -> TomocardResult<RgbaImage> {
    let (w, h) = (surface.width(), surface.height());
    if w == 0 || h == 0 {
        return Err(TomocardError::capture(format!(
            "Surface for card {} side {} is empty or detached",
            surface.card_id, surface.side
        )));
    }

    if surface.remote_content && options.cross_origin == CrossOriginPolicy::SameOrigin {
        return Err(TomocardError::capture(format!(
            "Surface for card {} side {} is tainted by remote content",
            surface.card_id, surface.side
        )));
    }

    let scale = options.scale.max(1);
    let scaled = imageops::resize(&surface.image, w * scale, h * scale, FilterType::Triangle);

    let mut background = options.background;
    background.0[3] = 255;
    let mut output = RgbaImage::from_pixel(w * scale, h * scale, background);
    imageops::overlay(&mut output, &scaled, 0, 0);

    Ok(output)
}

/// Capture a card that is already staged, located by the
/// (card id, side) attribute pair. A missing pair is a silent skip
/// (`Ok(None)`), not an error: absent attributes mean the card was
/// never rendered on screen.
pub fn capture_staged(
    stage: &Stage,
    card_id: &str,
    side: CardSide,
    options: &CaptureOptions,
) -> TomocardResult<Option<RgbaImage>> {
    match stage.find(card_id, side) {
        Some(surface) => capture(surface, options).map(Some),
        None => {
            tracing::debug!(card_id, %side, "No staged surface; skipping capture");
            Ok(None)
        }
    }
}
