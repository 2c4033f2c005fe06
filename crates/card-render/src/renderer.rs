//! The card face renderer.
//!
//! Produces a logical-size RGBA bitmap for one (employee, side) pair.
//! The front face carries the identity block and photo/initials
//! avatar; the back face carries the QR-encoded profile link. Output
//! dimensions are fixed by the template and validated downstream by
//! the off-screen mount.

use std::path::PathBuf;

use ab_glyph::PxScale;
use image::imageops::FilterType;
use image::{DynamicImage, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut, draw_text_mut};
use imageproc::rect::Rect;

use tomocard_common::TomocardResult;
use tomocard_roster_model::{profile_url, CardSide, CardTemplate, Employee};

use crate::fonts;
use crate::photo::resolve_photo;
use crate::qr::qr_bitmap;
use crate::template::{accent_for, Metrics, INK, MUTED, STRIPE, WHITE};

/// Shared rendering inputs for one export job.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Template used for every card in the job.
    pub template: CardTemplate,

    /// Organization name printed on both faces.
    pub organization: String,

    /// Base URL for QR-encoded profile links.
    pub base_url: String,

    /// Directory that photo paths and cached remote photos resolve
    /// against. `None` disables remote photo resolution entirely.
    pub photo_root: Option<PathBuf>,
}

impl RenderContext {
    pub fn new(
        template: CardTemplate,
        organization: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            template,
            organization: organization.into(),
            base_url: base_url.into(),
            photo_root: None,
        }
    }
}

/// One rendered card face.
pub struct RenderedCard {
    /// Logical-size RGBA bitmap.
    pub image: RgbaImage,

    /// True when remote-origin photo pixels were embedded. The capture
    /// adapter consults this under a restrictive cross-origin policy.
    pub remote_content: bool,
}

/// Render one card face. Never fails for photo reasons; the only error
/// path is QR encoding on the back face.
pub fn render_card(
    ctx: &RenderContext,
    employee: &Employee,
    side: CardSide,
) -> TomocardResult<RenderedCard> {
    let metrics = Metrics::for_template(ctx.template);
    let mut image = RgbaImage::from_pixel(metrics.width, metrics.height, WHITE);

    let remote_content = match side {
        CardSide::Front => render_front(&mut image, &metrics, ctx, employee),
        CardSide::Back => {
            render_back(&mut image, &metrics, ctx, employee)?;
            false
        }
    };

    Ok(RenderedCard {
        image,
        remote_content,
    })
}

fn render_front(
    image: &mut RgbaImage,
    m: &Metrics,
    ctx: &RenderContext,
    employee: &Employee,
) -> bool {
    let accent = accent_for(&employee.name);
    let h = m.height as f32;

    draw_filled_rect_mut(
        image,
        Rect::at(0, 0).of_size(m.panel_w, m.height),
        accent,
    );

    let mut remote_content = false;
    let photo = employee
        .photo_source()
        .and_then(|source| resolve_photo(&source, ctx.photo_root.as_deref()));
    match photo {
        Some(resolved) => {
            remote_content = resolved.remote;
            draw_photo_circle(image, &resolved.image, m.avatar_center, m.avatar_radius);
        }
        None => draw_initials_avatar(image, m, accent, &employee.initials()),
    }

    draw_label(
        image,
        &ctx.organization.to_uppercase(),
        m.text_x,
        (h * 0.10) as i32,
        m.small_px,
        MUTED,
        false,
    );
    draw_label(
        image,
        &employee.name,
        m.text_x,
        (h * 0.26) as i32,
        m.title_px,
        INK,
        true,
    );
    draw_label(
        image,
        &employee.role,
        m.text_x,
        (h * 0.40) as i32,
        m.body_px,
        MUTED,
        false,
    );

    // Divider between the identity block and the detail lines.
    draw_filled_rect_mut(
        image,
        Rect::at(m.text_x, (h * 0.52) as i32)
            .of_size(m.width - m.text_x as u32 - m.panel_w / 4, 1),
        MUTED,
    );

    draw_label(
        image,
        &format!("ID {}", employee.employee_id),
        m.text_x,
        (h * 0.60) as i32,
        m.body_px,
        INK,
        true,
    );
    draw_label(
        image,
        &employee.location,
        m.text_x,
        (h * 0.72) as i32,
        m.body_px,
        MUTED,
        false,
    );
    if let Some(department) = &employee.department {
        draw_label(
            image,
            department,
            m.text_x,
            (h * 0.84) as i32,
            m.small_px,
            MUTED,
            false,
        );
    }

    remote_content
}

fn render_back(
    image: &mut RgbaImage,
    m: &Metrics,
    ctx: &RenderContext,
    employee: &Employee,
) -> TomocardResult<()> {
    let h = m.height as f32;

    draw_filled_rect_mut(
        image,
        Rect::at(0, m.stripe_y).of_size(m.width, m.stripe_h),
        STRIPE,
    );

    let url = profile_url(&ctx.base_url, &employee.id);
    let qr = qr_bitmap(&url, m.qr_size)?;
    let (qr_x, qr_y) = m.qr_origin;
    for (x, y, pixel) in qr.enumerate_pixels() {
        let color = if pixel.0[0] < 128 { INK } else { WHITE };
        let px = qr_x as u32 + x;
        let py = qr_y as u32 + y;
        if px < m.width && py < m.height {
            image.put_pixel(px, py, color);
        }
    }

    let text_x = (qr_x as i32) + m.qr_size as i32 + (m.width as f32 * 0.05) as i32;
    draw_label(
        image,
        &ctx.organization,
        text_x,
        (h * 0.34) as i32,
        m.body_px,
        INK,
        true,
    );
    draw_label(
        image,
        "Scan to view profile",
        text_x,
        (h * 0.46) as i32,
        m.small_px,
        MUTED,
        false,
    );
    draw_label(image, &url, text_x, (h * 0.55) as i32, m.small_px, MUTED, false);
    draw_label(
        image,
        &employee.employee_id,
        text_x,
        (h * 0.68) as i32,
        m.body_px,
        INK,
        false,
    );

    draw_filled_rect_mut(
        image,
        Rect::at(0, m.height as i32 - 6).of_size(m.width, 6),
        accent_for(&employee.name),
    );

    Ok(())
}

/// Draw a text line, silently skipping when no system font is available.
fn draw_label(
    image: &mut RgbaImage,
    text: &str,
    x: i32,
    y: i32,
    px: f32,
    color: Rgba<u8>,
    bold: bool,
) {
    let font = if bold { fonts::bold() } else { fonts::regular() };
    let Some(font) = font else {
        return;
    };
    draw_text_mut(image, color, x, y, PxScale::from(px), font, text);
}

/// Clip a photo into the avatar circle, covering it edge to edge.
fn draw_photo_circle(
    image: &mut RgbaImage,
    photo: &DynamicImage,
    center: (i32, i32),
    radius: i32,
) {
    let diameter = (radius * 2) as u32;
    let scaled = photo
        .resize_to_fill(diameter, diameter, FilterType::Triangle)
        .to_rgba8();
    let (cx, cy) = center;

    for (x, y, pixel) in scaled.enumerate_pixels() {
        let dx = x as i32 - radius;
        let dy = y as i32 - radius;
        if dx * dx + dy * dy > radius * radius {
            continue;
        }
        let px = cx - radius + x as i32;
        let py = cy - radius + y as i32;
        if px >= 0 && py >= 0 && (px as u32) < image.width() && (py as u32) < image.height() {
            image.put_pixel(px as u32, py as u32, *pixel);
        }
    }
}

/// The deterministic fallback avatar: tinted circle plus initials.
fn draw_initials_avatar(image: &mut RgbaImage, m: &Metrics, accent: Rgba<u8>, initials: &str) {
    draw_filled_circle_mut(image, m.avatar_center, m.avatar_radius, tint(accent, 0.35));

    if initials.is_empty() {
        return;
    }
    let px = m.avatar_radius as f32 * 0.9;
    // Approximate centering; good enough for one or two glyphs.
    let text_w = px * 0.6 * initials.chars().count() as f32;
    let x = m.avatar_center.0 - (text_w / 2.0) as i32;
    let y = m.avatar_center.1 - (px / 2.0) as i32;
    draw_label(image, initials, x, y, px, WHITE, true);
}

/// Mix a color toward white by `factor` (0.0 = unchanged, 1.0 = white).
fn tint(color: Rgba<u8>, factor: f32) -> Rgba<u8> {
    let mix = |c: u8| (c as f32 + (255.0 - c as f32) * factor) as u8;
    Rgba([mix(color.0[0]), mix(color.0[1]), mix(color.0[2]), 255])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> Employee {
        Employee {
            id: "1".to_string(),
            name: "Ada Lovelace".to_string(),
            role: "Engineer".to_string(),
            employee_id: "E001".to_string(),
            location: "Tokyo".to_string(),
            photo: None,
            department: Some("Research".to_string()),
            email: None,
            phone: None,
            join_date: None,
            availability: None,
            bio: None,
            skills: vec![],
        }
    }

    fn ctx(template: CardTemplate) -> RenderContext {
        RenderContext::new(template, "TOMO Academy", "https://tomo.academy")
    }

    #[test]
    fn rendered_faces_match_the_template_logical_size() {
        for template in [CardTemplate::Full, CardTemplate::Compact] {
            for side in CardSide::BOTH {
                let card = render_card(&ctx(template), &ada(), side).unwrap();
                assert_eq!(card.image.dimensions(), template.logical_size());
            }
        }
    }

    #[test]
    fn broken_photo_falls_back_without_error() {
        let mut employee = ada();
        employee.photo = Some("/nonexistent/ada.png".to_string());
        let card = render_card(&ctx(CardTemplate::Full), &employee, CardSide::Front).unwrap();
        assert!(!card.remote_content);
    }

    #[test]
    fn uncached_remote_photo_falls_back_without_taint() {
        let mut employee = ada();
        employee.photo = Some("https://cdn.example.com/avatars/ada.png".to_string());
        let card = render_card(&ctx(CardTemplate::Full), &employee, CardSide::Front).unwrap();
        assert!(!card.remote_content);
    }

    #[test]
    fn back_face_contains_dark_qr_modules() {
        let card = render_card(&ctx(CardTemplate::Full), &ada(), CardSide::Back).unwrap();
        let dark = card
            .image
            .pixels()
            .filter(|p| p.0[0] < 64 && p.0[1] < 64)
            .count();
        assert!(dark > 100, "expected QR modules and stripe, got {dark} dark pixels");
    }

    #[test]
    fn front_and_back_faces_differ() {
        let front = render_card(&ctx(CardTemplate::Full), &ada(), CardSide::Front).unwrap();
        let back = render_card(&ctx(CardTemplate::Full), &ada(), CardSide::Back).unwrap();
        assert_ne!(front.image.as_raw(), back.image.as_raw());
    }
}
