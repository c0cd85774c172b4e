//! Centralized configuration values shared across the CSG pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRIMITIVE DEFAULTS
// =============================================================================

/// Size, radius or height used when a primitive omits the argument.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_PRIMITIVE_SIZE;
/// assert_eq!(DEFAULT_PRIMITIVE_SIZE, 1.0);
/// ```
pub const DEFAULT_PRIMITIVE_SIZE: f64 = 1.0;

/// Sweep angle in degrees used by `rotate_extrude` without an `angle` argument.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_ROTATE_EXTRUDE_ANGLE;
/// assert_eq!(DEFAULT_ROTATE_EXTRUDE_ANGLE, 360.0);
/// ```
pub const DEFAULT_ROTATE_EXTRUDE_ANGLE: f64 = 360.0;

// =============================================================================
// GEOMETRY
// =============================================================================

/// Number of parametric steps used to estimate the bounding box of a twisted
/// `linear_extrude`. The sweep is sampled at `t = i / TWIST_SAMPLE_STEPS` for
/// `i` in `0..=TWIST_SAMPLE_STEPS`.
///
/// # Examples
/// ```
/// use config::constants::TWIST_SAMPLE_STEPS;
/// let samples = TWIST_SAMPLE_STEPS + 1;
/// assert_eq!(samples, 34);
/// ```
pub const TWIST_SAMPLE_STEPS: u32 = 33;

/// Granularity of the half-extents reported for a centered design.
///
/// # Examples
/// ```
/// use config::constants::CENTER_ROUNDING_STEP;
/// let extent: f64 = 2.2;
/// let half = CENTER_ROUNDING_STEP * (0.5 + extent).round();
/// assert_eq!(half, 1.5);
/// ```
pub const CENTER_ROUNDING_STEP: f64 = 0.5;

/// Full-precision pi literal spliced into generated GLSL.
///
/// # Examples
/// ```
/// use config::constants::GLSL_PI;
/// assert!(GLSL_PI.starts_with("3.14159"));
/// ```
pub const GLSL_PI: &str = "3.1415926535897932384626433832795";

// =============================================================================
// IRMF HEADER
// =============================================================================

/// IRMF format version written to the output header.
///
/// # Examples
/// ```
/// use config::constants::IRMF_VERSION;
/// assert_eq!(IRMF_VERSION, "1.0");
/// ```
pub const IRMF_VERSION: &str = "1.0";

/// Material name used for the single material slot.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_MATERIAL;
/// assert_eq!(DEFAULT_MATERIAL, "PLA");
/// ```
pub const DEFAULT_MATERIAL: &str = "PLA";

/// Model units written to the output header.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_UNITS;
/// assert_eq!(DEFAULT_UNITS, "mm");
/// ```
pub const DEFAULT_UNITS: &str = "mm";

/// File extension of generated shader files.
///
/// # Examples
/// ```
/// use config::constants::IRMF_EXTENSION;
/// let path = std::path::Path::new("part.csg").with_extension(IRMF_EXTENSION);
/// assert_eq!(path.to_str(), Some("part.irmf"));
/// ```
pub const IRMF_EXTENSION: &str = "irmf";

// =============================================================================
// RECURSION
// =============================================================================

/// Bytes of stack space reserved when growing recursion limits using the
/// `stacker` crate.
///
/// # Examples
/// ```
/// use config::constants::STACKER_STACK_SIZE_BYTES;
/// assert!(STACKER_STACK_SIZE_BYTES >= 1024);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 8 * 1024 * 1024;

/// Remaining stack below which `stacker` allocates a new segment.
///
/// # Examples
/// ```
/// use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
/// assert!(STACKER_RED_ZONE_BYTES < STACKER_STACK_SIZE_BYTES);
/// ```
pub const STACKER_RED_ZONE_BYTES: usize = STACKER_STACK_SIZE_BYTES / 8;

// =============================================================================
// OUTPUT OPTIONS
// =============================================================================

/// Settings written into the IRMF header of a generated file.
///
/// # Examples
/// ```
/// use config::constants::IrmfOptions;
/// let options = IrmfOptions::default();
/// assert_eq!(options.material, "PLA");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrmfOptions {
    /// Name of the material occupying `materials[0]`.
    pub material: String,
    /// Length units of the model coordinates.
    pub units: String,
}

impl IrmfOptions {
    /// Builds header options, rejecting names that would break the header syntax.
    ///
    /// # Examples
    /// ```
    /// use config::constants::IrmfOptions;
    /// let options = IrmfOptions::new("PETG", "cm").expect("valid options");
    /// assert_eq!(options.units, "cm");
    /// assert!(IrmfOptions::new("", "mm").is_err());
    /// ```
    pub fn new(material: &str, units: &str) -> Result<Self, ConfigError> {
        if !is_valid_name(material) {
            return Err(ConfigError::InvalidMaterial(material.to_string()));
        }
        if !is_valid_name(units) {
            return Err(ConfigError::InvalidUnits(units.to_string()));
        }
        Ok(Self {
            material: material.to_string(),
            units: units.to_string(),
        })
    }
}

impl Default for IrmfOptions {
    fn default() -> Self {
        Self {
            material: DEFAULT_MATERIAL.to_string(),
            units: DEFAULT_UNITS.to_string(),
        }
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty() && !name.contains(['"', '\n', '*'])
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the material name is empty or contains header delimiters.
    InvalidMaterial(String),
    /// Raised when the units name is empty or contains header delimiters.
    InvalidUnits(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMaterial(value) => {
                write!(f, "invalid material name: {value:?}")
            }
            ConfigError::InvalidUnits(value) => {
                write!(f, "invalid units name: {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
