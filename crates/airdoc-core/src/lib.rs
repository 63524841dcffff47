//! airdoc: aircraft Direct Operating Cost (AEA 1989a/b) in Rust.
//!
//! Prices, weights, the seven DOC categories at annual, per-flight and
//! per-flight-hour bases, plus calibration and sensitivity analysis of the
//! maintenance sub-model.
pub mod aircraft;
pub mod calibration;
pub mod config;
pub mod doc;
pub mod error;
pub mod inflation;
pub mod method;
pub mod metrics;
pub mod pricing;
pub mod reference;
pub mod sensitivity;
pub mod traits;
pub mod weights;

pub use aircraft::{AircraftSpec, EngineShafts, PriceInput};
pub use calibration::{
    fit_maintenance, CalibrationConfig, CalibrationResult, CalibrationStatus, CalibrationTarget,
    FitParameter,
};
pub use doc::{calculate_costs, maintenance_cost_per_flight, CostBreakdown, DocResult};
pub use error::{DocError, Result};
pub use method::{DeliveryPriceMethod, FeeSchedule, MaintenanceCoefficients, MethodCoefficients};
pub use sensitivity::{maintenance_sensitivity, SensitivityReport, DEFAULT_FRACTIONS};
pub use traits::NamedCoefficients;
