//! Tomocard Export Engine
//!
//! Drives the full export pipeline: off-screen render, capture, and
//! assembly into downloadable artifacts.
//!
//! # Pipeline Architecture
//!
//! ```text
//! roster.json ──▶ Batch Orchestrator
//!                       │  (sequential, paced)
//!          ┌────────────┴────────────┐
//!          ▼                         ▼
//!   Off-screen Mount          inter-side /
//!     + Card Renderer         inter-employee delays
//!          │
//!          ▼
//!    Capture Adapter (3x, opaque white)
//!          │
//!     ┌────┴─────────────┐
//!     ▼                  ▼
//!  PNG files      PDF Assembler (85.6 mm × 53.98 mm pages)
//! ```

pub mod job;
pub mod orchestrator;
pub mod pdf;

pub use job::*;
pub use orchestrator::*;
pub use pdf::*;
