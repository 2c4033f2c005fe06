//! The stage: a registry of on-screen surfaces plus the off-screen
//! mount count.
//!
//! Staged surfaces are addressed by the (card id, side) pair, the
//! same two attributes the capture adapter uses to locate a card that
//! is already rendered. The off-screen count tracks detached
//! containers so tests can assert that every mount is torn down.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tomocard_roster_model::CardSide;

use crate::surface::Surface;

/// Registry of rendered surfaces.
#[derive(Default)]
pub struct Stage {
    surfaces: HashMap<(String, CardSide), Surface>,
    offscreen: Arc<AtomicUsize>,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a surface, replacing any surface already staged at the
    /// same (card id, side) address.
    pub fn mount(&mut self, surface: Surface) -> Option<Surface> {
        self.surfaces
            .insert((surface.card_id.clone(), surface.side), surface)
    }

    /// Remove a staged surface.
    pub fn unmount(&mut self, card_id: &str, side: CardSide) -> Option<Surface> {
        self.surfaces.remove(&(card_id.to_string(), side))
    }

    /// Locate a staged surface by the (card id, side) attribute pair.
    pub fn find(&self, card_id: &str, side: CardSide) -> Option<&Surface> {
        self.surfaces.get(&(card_id.to_string(), side))
    }

    /// Number of staged surfaces.
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Number of off-screen containers currently attached. Zero
    /// whenever no capture is in flight; anything else is a leak.
    pub fn offscreen_mounts(&self) -> usize {
        self.offscreen.load(Ordering::SeqCst)
    }

    pub(crate) fn offscreen_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.offscreen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::SurfaceContent;
    use image::RgbaImage;

    fn surface(card_id: &str, side: CardSide) -> Surface {
        Surface::new(
            card_id,
            side,
            SurfaceContent {
                image: RgbaImage::new(4, 4),
                remote_content: false,
            },
        )
    }

    #[test]
    fn find_addresses_by_id_and_side() {
        let mut stage = Stage::new();
        stage.mount(surface("1", CardSide::Front));
        assert!(stage.find("1", CardSide::Front).is_some());
        assert!(stage.find("1", CardSide::Back).is_none());
        assert!(stage.find("2", CardSide::Front).is_none());
    }

    #[test]
    fn mount_replaces_and_unmount_removes() {
        let mut stage = Stage::new();
        assert!(stage.mount(surface("1", CardSide::Front)).is_none());
        assert!(stage.mount(surface("1", CardSide::Front)).is_some());
        assert_eq!(stage.len(), 1);
        assert!(stage.unmount("1", CardSide::Front).is_some());
        assert!(stage.is_empty());
    }
}
