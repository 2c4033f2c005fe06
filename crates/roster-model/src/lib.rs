//! Tomocard Roster Model
//!
//! Defines the core data contracts for Tomocard:
//! - **Employees:** identity records loaded from roster files
//! - **Cards:** face selection, templates, and physical geometry
//! - **Naming:** deterministic output-file naming for exported artifacts
//!
//! Logical card sizes are fixed per template and share the physical
//! 85.6 mm x 53.98 mm aspect ratio, so captured bitmaps map onto PDF
//! pages without letterboxing.

pub mod card;
pub mod employee;
pub mod naming;

pub use card::*;
pub use employee::*;
pub use naming::*;
