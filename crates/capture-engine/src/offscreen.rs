//! Off-screen mounts: scoped containers for rendering cards that are
//! not currently staged.
//!
//! The container is registered with the stage on attach and
//! unregistered when the guard drops, so teardown happens on success,
//! on renderer error, and on renderer panic alike. The full-deck
//! export relies on this: a leaked container per failed card would
//! accumulate across a batch.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tomocard_common::{TomocardError, TomocardResult};
use tomocard_roster_model::CardSide;

use crate::stage::Stage;
use crate::surface::{Surface, SurfaceContent};

/// A detached rendering container with exact fixed pixel dimensions.
/// Dropping the mount removes the container from the stage.
pub struct OffscreenMount {
    counter: Arc<AtomicUsize>,
    card_id: String,
    side: CardSide,
    width: u32,
    height: u32,
    content: Option<SurfaceContent>,
}

impl OffscreenMount {
    /// Attach a container for one card face to the stage.
    pub fn attach(stage: &Stage, card_id: &str, side: CardSide, width: u32, height: u32) -> Self {
        let counter = stage.offscreen_counter();
        counter.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(card_id, %side, width, height, "Attached off-screen container");
        Self {
            counter,
            card_id: card_id.to_string(),
            side,
            width,
            height,
            content: None,
        }
    }

    /// Container dimensions.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Run the renderer and mount its output into the container.
    /// Output dimensions must match the container exactly.
    pub fn fill<F>(&mut self, renderer: F) -> TomocardResult<()>
    where
        F: FnOnce() -> TomocardResult<SurfaceContent>,
    {
        let content = renderer()?;
        let (w, h) = content.image.dimensions();
        if (w, h) != (self.width, self.height) {
            return Err(TomocardError::render(format!(
                "Renderer produced {w}x{h} for a {}x{} container",
                self.width, self.height
            )));
        }
        self.content = Some(content);
        Ok(())
    }

    /// Snapshot the mounted content as a capture-ready surface.
    pub fn snapshot(&self) -> TomocardResult<Surface> {
        let content = self
            .content
            .as_ref()
            .ok_or_else(|| TomocardError::capture("Off-screen container is empty"))?;
        Ok(Surface::new(
            self.card_id.clone(),
            self.side,
            SurfaceContent {
                image: content.image.clone(),
                remote_content: content.remote_content,
            },
        ))
    }
}

impl Drop for OffscreenMount {
    fn drop(&mut self) {
        self.counter.fetch_sub(1, Ordering::SeqCst);
        tracing::debug!(card_id = %self.card_id, side = %self.side, "Removed off-screen container");
    }
}

/// Render one card face through a scoped off-screen mount:
/// attach, fill, settle, snapshot, tear down.
///
/// The settle delay gives asynchronous visual effects (image decode)
/// time to complete before the snapshot; callers pass zero in tests.
pub async fn render_offscreen<F>(
    stage: &Stage,
    card_id: &str,
    side: CardSide,
    width: u32,
    height: u32,
    settle: Duration,
    renderer: F,
) -> TomocardResult<Surface>
where
    F: FnOnce() -> TomocardResult<SurfaceContent>,
{
    let mut mount = OffscreenMount::attach(stage, card_id, side, width, height);
    mount.fill(renderer)?;
    if !settle.is_zero() {
        tokio::time::sleep(settle).await;
    }
    mount.snapshot()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn content(w: u32, h: u32) -> SurfaceContent {
        SurfaceContent {
            image: RgbaImage::new(w, h),
            remote_content: false,
        }
    }

    #[tokio::test]
    async fn successful_render_tears_down_the_container() {
        let stage = Stage::new();
        let surface = render_offscreen(&stage, "1", CardSide::Front, 8, 8, Duration::ZERO, || {
            Ok(content(8, 8))
        })
        .await
        .unwrap();
        assert_eq!(surface.width(), 8);
        assert_eq!(stage.offscreen_mounts(), 0);
    }

    #[tokio::test]
    async fn renderer_error_still_tears_down_the_container() {
        let stage = Stage::new();
        let result = render_offscreen(&stage, "1", CardSide::Front, 8, 8, Duration::ZERO, || {
            Err(TomocardError::render("boom"))
        })
        .await;
        assert!(result.is_err());
        assert_eq!(stage.offscreen_mounts(), 0);
    }

    #[tokio::test]
    async fn dimension_mismatch_is_rejected_and_torn_down() {
        let stage = Stage::new();
        let result = render_offscreen(&stage, "1", CardSide::Front, 8, 8, Duration::ZERO, || {
            Ok(content(4, 4))
        })
        .await;
        assert!(result.is_err());
        assert_eq!(stage.offscreen_mounts(), 0);
    }

    #[test]
    fn renderer_panic_still_tears_down_the_container() {
        let stage = Stage::new();
        let mut mount = OffscreenMount::attach(&stage, "1", CardSide::Front, 8, 8);
        assert_eq!(stage.offscreen_mounts(), 1);

        let panicked = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            mount.fill(|| panic!("renderer exploded")).ok();
        }));
        assert!(panicked.is_err());

        drop(mount);
        assert_eq!(stage.offscreen_mounts(), 0);
    }

    #[test]
    fn snapshot_before_fill_is_an_error() {
        let stage = Stage::new();
        let mount = OffscreenMount::attach(&stage, "1", CardSide::Front, 8, 8);
        assert!(mount.snapshot().is_err());
        assert_eq!(mount.dimensions(), (8, 8));
    }
}
