//! Configuration errors for the header engine.
//!
//! Runtime operations in [`crate::core`] never fail; absence is modelled with
//! `Option` and empty collections.  The only rejectable input is a bad
//! geometry configuration, which is caught when it is constructed.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("carousel height must be positive, got {0}")]
    NonPositiveCarouselHeight(f64),

    #[error("hysteresis threshold must lie in [0, 1), got {0}")]
    ThresholdOutOfRange(f64),

    #[error("{name} must be positive, got {value}")]
    NonPositiveMetric { name: &'static str, value: f64 },
}
