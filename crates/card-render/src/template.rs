//! Template metrics and the card color scheme.
//!
//! All layout values derive from the template's logical size so the
//! `Full` and `Compact` variants stay visually identical at their
//! respective scales.

use image::Rgba;
use tomocard_roster_model::CardTemplate;

/// Card background.
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Primary ink color.
pub const INK: Rgba<u8> = Rgba([23, 30, 54, 255]);

/// Secondary ink for roles, locations, and captions.
pub const MUTED: Rgba<u8> = Rgba([100, 108, 130, 255]);

/// Magnetic-stripe analog on the back face.
pub const STRIPE: Rgba<u8> = Rgba([34, 39, 57, 255]);

/// Accent palette for the front panel and initials avatar. The color
/// is picked by a stable hash of the employee name so re-exports are
/// pixel-deterministic.
pub const ACCENTS: [Rgba<u8>; 5] = [
    Rgba([67, 56, 202, 255]),  // indigo
    Rgba([13, 148, 136, 255]), // teal
    Rgba([180, 83, 9, 255]),   // amber
    Rgba([190, 24, 93, 255]),  // rose
    Rgba([109, 40, 217, 255]), // violet
];

/// Pick the accent color for a display name.
pub fn accent_for(name: &str) -> Rgba<u8> {
    let hash = name
        .bytes()
        .fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64));
    ACCENTS[(hash % ACCENTS.len() as u64) as usize]
}

/// Resolved layout metrics for one template, in logical pixels.
#[derive(Debug, Clone, Copy)]
pub struct Metrics {
    pub width: u32,
    pub height: u32,

    /// Width of the accent panel on the front face.
    pub panel_w: u32,

    /// Photo / initials avatar circle.
    pub avatar_center: (i32, i32),
    pub avatar_radius: i32,

    /// Text origin for the identity block on the front face.
    pub text_x: i32,

    /// Font pixel sizes.
    pub title_px: f32,
    pub body_px: f32,
    pub small_px: f32,

    /// Back face: magnetic-stripe band (y, height).
    pub stripe_y: i32,
    pub stripe_h: u32,

    /// Back face: QR code square (x, y, size).
    pub qr_origin: (i64, i64),
    pub qr_size: u32,
}

impl Metrics {
    pub fn for_template(template: CardTemplate) -> Self {
        let (width, height) = template.logical_size();
        let w = width as f32;
        let h = height as f32;

        let panel_w = (w * 0.34).round() as u32;
        let avatar_radius = (panel_w as f32 * 0.30).round() as i32;

        Self {
            width,
            height,
            panel_w,
            avatar_center: ((panel_w / 2) as i32, (h * 0.42).round() as i32),
            avatar_radius,
            text_x: panel_w as i32 + (w * 0.05).round() as i32,
            title_px: h * 0.085,
            body_px: h * 0.058,
            small_px: h * 0.046,
            stripe_y: (h * 0.09).round() as i32,
            stripe_h: (h * 0.14).round() as u32,
            qr_origin: ((w * 0.06).round() as i64, (h * 0.32).round() as i64),
            qr_size: (h * 0.52).round() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_choice_is_deterministic() {
        assert_eq!(accent_for("Ada Lovelace"), accent_for("Ada Lovelace"));
    }

    #[test]
    fn metrics_fit_inside_the_card() {
        for template in [CardTemplate::Full, CardTemplate::Compact] {
            let m = Metrics::for_template(template);
            assert!(m.panel_w < m.width);
            assert!(m.qr_origin.1 as u32 + m.qr_size <= m.height);
            assert!(m.avatar_center.1 + m.avatar_radius <= m.height as i32);
        }
    }
}
