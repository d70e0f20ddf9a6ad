//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane and positive.
///
/// # Examples
/// ```
/// use config::constants::GeneratorConfig;
/// let cfg = GeneratorConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// ```
#[test]
fn default_constants_are_valid() {
    let cfg = GeneratorConfig::default();
    assert!(cfg.tolerance > 0.0);
    assert!(cfg.default_subdivisions >= MIN_SUBDIVISIONS);
}

/// Validates the builder rejects invalid values.
///
/// # Examples
/// ```
/// use config::constants::GeneratorConfig;
/// assert!(GeneratorConfig::new(0.0, 24).is_err());
/// ```
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GeneratorConfig::new(0.0, 24).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        GeneratorConfig::new(1.0e-9, 2).unwrap_err(),
        ConfigError::InvalidSubdivisions(2)
    );
}

#[test]
fn default_bolt_parameters_are_in_host_bounds() {
    assert!(RADIUS_BOUNDS.contains(DEFAULT_RADIUS));
    assert!(SUBDIVISIONS_BOUNDS.contains(DEFAULT_SUBDIVISIONS as f64));
    assert!(LOOPS_BOUNDS.contains(DEFAULT_LOOPS as f64));
    assert!(IDENT_BOUNDS.contains(DEFAULT_IDENT));
    assert!(SHOULDER_BOUNDS.contains(DEFAULT_SHOULDER));
}

#[test]
fn param_range_bounds_are_inclusive() {
    let range = ParamRange::new(0.0, 100.0);
    assert!(range.contains(0.0));
    assert!(range.contains(100.0));
    assert!(!range.contains(-0.001));
    assert!(!range.contains(100.001));
}

#[test]
fn approx_helpers_respect_tolerance() {
    assert!(approx_equal(1.0, 1.0 + EPSILON_TOLERANCE / 2.0));
    assert!(!approx_equal(1.0, 1.0 + EPSILON_TOLERANCE * 2.0));
    assert!(approx_zero(-EPSILON_TOLERANCE / 2.0));
    assert!(!approx_zero(EPSILON_TOLERANCE * 2.0));
}
