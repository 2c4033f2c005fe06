//! Card faces, templates, and physical geometry.

use serde::{Deserialize, Serialize};

/// Physical page width of a standard ID card (ISO/IEC 7810 ID-1), in mm.
pub const CARD_WIDTH_MM: f32 = 85.6;

/// Physical page height of a standard ID card, in mm.
pub const CARD_HEIGHT_MM: f32 = 53.98;

/// One renderable side of an identification card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardSide {
    Front,
    Back,
}

impl CardSide {
    /// Side marker used in stage addressing and output file names.
    pub fn as_str(self) -> &'static str {
        match self {
            CardSide::Front => "front",
            CardSide::Back => "back",
        }
    }

    /// Both sides in capture order.
    pub const BOTH: [CardSide; 2] = [CardSide::Front, CardSide::Back];
}

impl std::fmt::Display for CardSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual card template. One template is used per deployment; the
/// choice is made at job construction and never switches mid-job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardTemplate {
    /// Full-size card, 5 logical px per mm.
    Full,
    /// Compact card, 4 logical px per mm.
    Compact,
}

impl CardTemplate {
    /// Logical pixel dimensions of a rendered card face.
    ///
    /// Both templates are integer px-per-mm renderings of the physical
    /// card, so the aspect ratio matches the PDF page and full-bleed
    /// placement does not visibly distort.
    pub fn logical_size(self) -> (u32, u32) {
        match self {
            CardTemplate::Full => (428, 270),
            CardTemplate::Compact => (342, 216),
        }
    }

    /// Logical pixels per physical millimetre.
    pub fn px_per_mm(self) -> u32 {
        match self {
            CardTemplate::Full => 5,
            CardTemplate::Compact => 4,
        }
    }
}

/// Profile URL embedded in the back-face QR code: `{base_url}/employee/{id}`.
pub fn profile_url(base_url: &str, employee_id: &str) -> String {
    format!("{}/employee/{}", base_url.trim_end_matches('/'), employee_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logical_sizes_track_physical_aspect() {
        for template in [CardTemplate::Full, CardTemplate::Compact] {
            let (w, h) = template.logical_size();
            let px = template.px_per_mm();
            assert_eq!(w, (CARD_WIDTH_MM * px as f32).round() as u32);
            assert_eq!(h, (CARD_HEIGHT_MM * px as f32).round() as u32);
        }
    }

    #[test]
    fn profile_url_joins_base_and_id() {
        assert_eq!(
            profile_url("https://tomo.academy", "42"),
            "https://tomo.academy/employee/42"
        );
        assert_eq!(
            profile_url("https://tomo.academy/", "42"),
            "https://tomo.academy/employee/42"
        );
    }

    #[test]
    fn side_markers_are_stable() {
        assert_eq!(CardSide::Front.as_str(), "front");
        assert_eq!(CardSide::Back.as_str(), "back");
        assert_eq!(CardSide::BOTH, [CardSide::Front, CardSide::Back]);
    }
}
