//! QR code rasterization for the card back.

use image::imageops::{self, FilterType};
use image::{GrayImage, Luma};
use qrcode::QrCode;

use tomocard_common::{TomocardError, TomocardResult};

/// Encode a payload into a square grayscale QR bitmap of exactly
/// `target_px` pixels per side. Dark modules are 0, light 255.
pub fn qr_bitmap(payload: &str, target_px: u32) -> TomocardResult<GrayImage> {
    let code = QrCode::new(payload.as_bytes())
        .map_err(|e| TomocardError::render(format!("QR encoding failed: {e}")))?;

    let modules: GrayImage = code.render::<Luma<u8>>().quiet_zone(true).build();

    // Nearest-neighbour keeps module edges sharp at any target size.
    Ok(imageops::resize(
        &modules,
        target_px.max(1),
        target_px.max(1),
        FilterType::Nearest,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qr_bitmap_is_exactly_target_sized() {
        let qr = qr_bitmap("https://tomo.academy/employee/1", 140).unwrap();
        assert_eq!(qr.dimensions(), (140, 140));
    }

    #[test]
    fn qr_bitmap_contains_both_module_colors() {
        let qr = qr_bitmap("https://tomo.academy/employee/1", 120).unwrap();
        assert!(qr.pixels().any(|p| p.0[0] < 128));
        assert!(qr.pixels().any(|p| p.0[0] >= 128));
    }
}
