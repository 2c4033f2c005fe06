//! PDF assembly: captured bitmaps onto physical card-size pages.
//!
//! Every page is exactly 85.6 mm × 53.98 mm landscape with one image
//! stretched to the full page bounds. There is no letterboxing: card
//! templates share the page's aspect ratio by construction, so the
//! stretch is invisible; diverging bitmaps would visibly distort.

use std::io::Write;
use std::path::Path;

use image::{DynamicImage, RgbaImage};
use printpdf::{
    ColorBits, ColorSpace, Image, ImageTransform, ImageXObject, Mm, PdfDocument,
    PdfDocumentReference, Px,
};

use tomocard_common::{TomocardError, TomocardResult};
use tomocard_roster_model::{CARD_HEIGHT_MM, CARD_WIDTH_MM};

const MM_PER_INCH: f32 = 25.4;

/// Builds a card-size PDF document one page per bitmap.
pub struct PdfAssembler {
    doc: PdfDocumentReference,
    pages: usize,
}

impl PdfAssembler {
    /// Start an empty document. Pages are added per captured bitmap,
    /// in capture order.
    pub fn new(title: &str) -> Self {
        Self {
            doc: PdfDocument::empty(title),
            pages: 0,
        }
    }

    /// Append one full-bleed page holding the given bitmap.
    pub fn push_page(&mut self, bitmap: &RgbaImage) -> TomocardResult<()> {
        let (px_w, px_h) = bitmap.dimensions();
        if px_w == 0 || px_h == 0 {
            return Err(TomocardError::assembly("Cannot place an empty bitmap"));
        }

        let (page, layer) = self.doc.add_page(Mm(CARD_WIDTH_MM), Mm(CARD_HEIGHT_MM), "Card");
        let layer = self.doc.get_page(page).get_layer(layer);

        // Captures are composited opaque upstream; drop the alpha channel.
        let rgb = DynamicImage::ImageRgba8(bitmap.clone()).to_rgb8();
        let image = Image::from(ImageXObject {
            width: Px(px_w as usize),
            height: Px(px_h as usize),
            color_space: ColorSpace::Rgb,
            bits_per_component: ColorBits::Bit8,
            interpolate: true,
            image_data: rgb.into_raw(),
            image_filter: None,
            clipping_bbox: None,
            smask: None,
        });

        // DPI pins the rendered width to the page width; scale_y then
        // stretches the height to the exact page bounds.
        let dpi = px_w as f32 * MM_PER_INCH / CARD_WIDTH_MM;
        let natural_height_mm = px_h as f32 * MM_PER_INCH / dpi;
        image.add_to_layer(
            layer,
            ImageTransform {
                translate_x: Some(Mm(0.0)),
                translate_y: Some(Mm(0.0)),
                dpi: Some(dpi),
                scale_y: Some(CARD_HEIGHT_MM / natural_height_mm),
                ..Default::default()
            },
        );

        self.pages += 1;
        Ok(())
    }

    /// Pages added so far.
    pub fn page_count(&self) -> usize {
        self.pages
    }

    /// Serialize the document.
    pub fn save_to_bytes(self) -> TomocardResult<Vec<u8>> {
        self.doc
            .save_to_bytes()
            .map_err(|e| TomocardError::assembly(format!("PDF serialization failed: {e}")))
    }

    /// Serialize and write the document to disk.
    pub fn save(self, path: &Path) -> TomocardResult<()> {
        let bytes = self.save_to_bytes()?;
        let mut file = std::fs::File::create(path)?;
        file.write_all(&bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn bitmap() -> RgbaImage {
        RgbaImage::from_pixel(428 * 3, 270 * 3, Rgba([200, 200, 255, 255]))
    }

    #[test]
    fn page_count_tracks_pushed_bitmaps() {
        let mut assembler = PdfAssembler::new("Test Cards");
        for _ in 0..6 {
            assembler.push_page(&bitmap()).unwrap();
        }
        assert_eq!(assembler.page_count(), 6);
    }

    #[test]
    fn empty_bitmap_is_rejected() {
        let mut assembler = PdfAssembler::new("Test Cards");
        assert!(assembler.push_page(&RgbaImage::new(0, 0)).is_err());
    }

    #[test]
    fn document_serializes_to_pdf_bytes() {
        let mut assembler = PdfAssembler::new("Test Cards");
        assembler.push_page(&bitmap()).unwrap();
        assembler.push_page(&bitmap()).unwrap();
        let bytes = assembler.save_to_bytes().unwrap();
        assert!(bytes.starts_with(b"%PDF"));

        // 85.6 mm x 53.98 mm in PDF points, on every page.
        let text = String::from_utf8_lossy(&bytes);
        assert_eq!(
            text.matches("/MediaBox [0 0 242.64569 153.01419]").count(),
            2
        );
    }
}
