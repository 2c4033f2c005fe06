//! Tomocard Card Renderer
//!
//! Draws one employee's card face into a fixed-size RGBA bitmap.
//! Rendering is pure presentation: no network, no persistence, and no
//! failure modes beyond QR encoding: a photo that cannot be loaded
//! always falls back to a deterministic initials avatar.
//!
//! # Pipeline position
//!
//! ```text
//! Employee record ──┐
//!                   ├── render_card ──▶ RenderedCard (logical-size RGBA)
//! CardSide ─────────┘                        │
//!                                            ▼
//!                                    capture adapter (3x raster)
//! ```

pub mod fonts;
pub mod photo;
pub mod qr;
pub mod renderer;
pub mod template;

pub use renderer::*;
pub use template::*;
