//! # Config Crate
//!
//! Centralized configuration constants for the CSG to IRMF pipeline.
//! Every default applied by the compiler and every tunable sampling
//! parameter is defined here so the crates agree on a single value.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_PRIMITIVE_SIZE, IrmfOptions};
//!
//! // Missing primitive sizes fall back to a unit size.
//! let size: Option<f64> = None;
//! assert_eq!(size.unwrap_or(DEFAULT_PRIMITIVE_SIZE), 1.0);
//!
//! // Header options default to PLA in millimetres.
//! let options = IrmfOptions::default();
//! assert_eq!(options.units, "mm");
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Plain values, usable from every crate
//! - **Well-Documented**: Every constant has a doc example

pub mod constants;
