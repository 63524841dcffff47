//! Error types for airdoc-core.
//!
//! Only configuration problems are errors. Numerically degenerate inputs
//! (zero denominators, negative weights) propagate as non-finite or negative
//! values so callers can test them with `is_finite()`.
use thiserror::Error;

/// Result type for airdoc-core operations.
pub type Result<T> = std::result::Result<T, DocError>;

#[derive(Error, Debug)]
pub enum DocError {
    /// Engine shaft count outside {1, 2, 3}.
    #[error("engine_shafts must be 1, 2, or 3, got {0}")]
    InvalidShaftCount(u32),

    /// Flight time or annual flights not strictly positive where a per-flight
    /// or per-hour basis is requested.
    #[error("{field} must be > 0 to normalize costs, got {value}")]
    NonPositiveUtilization { field: &'static str, value: f64 },

    /// Name does not match any maintenance coefficient.
    #[error("unknown maintenance coefficient `{0}`")]
    UnknownCoefficient(String),

    #[error("invalid bounds for `{name}`: [{lower}, {upper}]")]
    InvalidBounds { name: String, lower: f64, upper: f64 },

    /// The same coefficient appears twice in one fit.
    #[error("maintenance coefficient `{0}` listed more than once in the fit")]
    DuplicateFitParameter(String),

    #[error("perturbation fraction must be non-zero and finite, got {0}")]
    InvalidPerturbation(f64),

    #[error("calibration requires at least one target aircraft")]
    NoTargets,

    #[error("calibration requires at least one coefficient to fit")]
    NoFitParameters,

    /// The optimizer itself failed. Non-convergence is reported through
    /// `CalibrationStatus`, not here.
    #[error("optimizer failure: {0}")]
    Optimizer(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("could not serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
