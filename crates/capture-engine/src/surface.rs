//! Rendered surfaces: the unit the capture adapter operates on.

use image::RgbaImage;
use tomocard_roster_model::CardSide;

/// Pixel content produced by a renderer, before it is bound to a
/// stage entry or off-screen container.
pub struct SurfaceContent {
    /// Logical-size RGBA pixels.
    pub image: RgbaImage,

    /// True when remote-origin pixels are embedded (cross-origin
    /// taint analog; consulted by the capture adapter's policy).
    pub remote_content: bool,
}

/// A rendered card face bound to an address.
pub struct Surface {
    /// Card identifier (the employee id).
    pub card_id: String,

    /// Side marker.
    pub side: CardSide,

    /// Pixel content at the card's logical size.
    pub image: RgbaImage,

    /// Remote-content taint flag.
    pub remote_content: bool,
}

impl Surface {
    pub fn new(card_id: impl Into<String>, side: CardSide, content: SurfaceContent) -> Self {
        Self {
            card_id: card_id.into(),
            side,
            image: content.image,
            remote_content: content.remote_content,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}
