//! # Config Crate
//!
//! Centralized configuration constants for the bolt mesh pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON_TOLERANCE, DEFAULT_SUBDIVISIONS, MIN_SUBDIVISIONS};
//!
//! // Use EPSILON_TOLERANCE for floating-point comparisons
//! let value: f64 = 0.0000000001; // 1e-10, smaller than EPSILON_TOLERANCE (1e-9)
//! let is_zero = value.abs() < EPSILON_TOLERANCE;
//! assert!(is_zero);
//!
//! // Use the resolution default for thread tessellation
//! let subdivisions_override = 0;
//! let subdivisions = if subdivisions_override >= MIN_SUBDIVISIONS {
//!     subdivisions_override
//! } else {
//!     DEFAULT_SUBDIVISIONS
//! };
//! assert_eq!(subdivisions, DEFAULT_SUBDIVISIONS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Host-Agnostic**: No platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
