//! Tomocard Capture Engine
//!
//! Turns rendered card faces into capture-ready bitmaps. The stage is
//! the in-process analog of the visible screen: a registry of surfaces
//! addressed by (card id, side). Cards that are not staged are
//! rendered through a scoped off-screen mount instead.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                    Stage                      │
//! │  staged surfaces            off-screen mounts │
//! │  (card id, side) ──▶ Surface    (counted,     │
//! │                                  scoped)      │
//! └───────────────┬───────────────────┬───────────┘
//!                 ▼                   ▼
//!           capture_staged      render_offscreen
//!                 │                   │
//!                 └──────▶ capture ◀──┘
//!                             │
//!                             ▼
//!                 RGBA bitmap (logical × scale)
//! ```

pub mod capture;
pub mod offscreen;
pub mod stage;
pub mod surface;

pub use capture::*;
pub use offscreen::*;
pub use stage::*;
pub use surface::*;
