//! Tests for the centralized configuration constants.

use super::*;

#[test]
fn test_default_options_are_valid() {
    let options = IrmfOptions::default();
    assert_eq!(options.material, DEFAULT_MATERIAL);
    assert_eq!(options.units, DEFAULT_UNITS);
    assert_eq!(IrmfOptions::new(DEFAULT_MATERIAL, DEFAULT_UNITS), Ok(options));
}

#[test]
fn test_new_validates_inputs() {
    assert_eq!(
        IrmfOptions::new("", "mm").unwrap_err(),
        ConfigError::InvalidMaterial(String::new())
    );
    assert_eq!(
        IrmfOptions::new("PLA", "m\"m").unwrap_err(),
        ConfigError::InvalidUnits("m\"m".to_string())
    );
    assert!(IrmfOptions::new("PLA", "   ").is_err());
}

#[test]
fn test_error_messages_name_the_value() {
    let err = IrmfOptions::new("*/", "mm").unwrap_err();
    assert!(err.to_string().contains("*/"));
}

#[test]
fn test_center_rounding_rounds_up_to_half_steps() {
    let half = |extent: f64| CENTER_ROUNDING_STEP * (0.5 + extent).round();
    assert_eq!(half(2.0), 1.5);
    assert_eq!(half(1.0), 1.0);
    assert_eq!(half(0.4), 0.5);
}

#[test]
fn test_stacker_red_zone_fits_in_segment() {
    assert!(STACKER_RED_ZONE_BYTES > 0);
    assert!(STACKER_RED_ZONE_BYTES < STACKER_STACK_SIZE_BYTES);
}
