//! Aircraft design and mission description.
//!
//! Plain numeric record consumed by pricing, weights and every cost
//! category. Times are decimal hours, weights kilograms, thrust newtons.
use serde::{Deserialize, Serialize};

use crate::error::{DocError, Result};

/// A price that is either given by the caller or estimated from correlations.
///
/// Supplied prices are taken as already expressed in target-year USD and are
/// never inflated.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceInput {
    Supplied(f64),
    #[default]
    Estimated,
}

impl PriceInput {
    /// Supplied value, or the result of `estimate` when not supplied.
    pub fn resolve_with<F: FnOnce() -> f64>(self, estimate: F) -> f64 {
        match self {
            PriceInput::Supplied(value) => value,
            PriceInput::Estimated => estimate(),
        }
    }

    pub fn is_supplied(&self) -> bool {
        matches!(self, PriceInput::Supplied(_))
    }
}

impl From<Option<f64>> for PriceInput {
    fn from(value: Option<f64>) -> Self {
        value.map_or(PriceInput::Estimated, PriceInput::Supplied)
    }
}

/// Engine spool layout. Selects the k4 shape factor of engine maintenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineShafts {
    Single,
    Twin,
    Triple,
}

impl TryFrom<u32> for EngineShafts {
    type Error = DocError;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            1 => Ok(EngineShafts::Single),
            2 => Ok(EngineShafts::Twin),
            3 => Ok(EngineShafts::Triple),
            other => Err(DocError::InvalidShaftCount(other)),
        }
    }
}

impl From<EngineShafts> for u32 {
    fn from(value: EngineShafts) -> Self {
        match value {
            EngineShafts::Single => 1,
            EngineShafts::Twin => 2,
            EngineShafts::Triple => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AircraftSpec {
    // -- Utilization --
    /// Block time per flight [h].
    pub block_time_hours: f64,
    /// Flight time per flight [h].
    pub flight_time_hours: f64,
    /// Flights per year.
    pub flights_per_year: f64,

    // -- Prices --
    #[serde(default)]
    pub engine_price: PriceInput,
    #[serde(default)]
    pub delivery_price: PriceInput,

    // -- Weights [kg] --
    pub max_takeoff_weight_kg: f64,
    pub operational_empty_weight_kg: f64,
    /// Bare weight of one engine.
    pub engine_weight_kg: f64,
    /// Trip fuel burned per flight.
    pub fuel_weight_kg: f64,
    pub payload_weight_kg: f64,

    // -- Mission --
    pub range_nm: f64,

    // -- Engines --
    pub engine_count: u32,
    pub bypass_ratio: f64,
    pub overall_pressure_ratio: f64,
    /// Compressor stages including the fan.
    pub compressor_stages: u32,
    /// Must be 1, 2 or 3; checked when maintenance is computed.
    pub engine_shafts: u32,
    pub takeoff_thrust_per_engine_n: f64,

    // -- Crew --
    pub cockpit_crew_count: u32,
    pub cabin_crew_count: u32,
}

impl AircraftSpec {
    pub fn shafts(&self) -> Result<EngineShafts> {
        EngineShafts::try_from(self.engine_shafts)
    }

    /// Check the utilization fields that per-flight and per-hour
    /// normalization divide by.
    pub fn check_utilization(&self) -> Result<()> {
        if !(self.flights_per_year > 0.0) {
            return Err(DocError::NonPositiveUtilization {
                field: "flights_per_year",
                value: self.flights_per_year,
            });
        }
        if !(self.flight_time_hours > 0.0) {
            return Err(DocError::NonPositiveUtilization {
                field: "flight_time_hours",
                value: self.flight_time_hours,
            });
        }
        Ok(())
    }

    /// Flight hours per year.
    pub fn annual_flight_hours(&self) -> f64 {
        self.flights_per_year * self.flight_time_hours
    }

    /// Copy with both prices supplied.
    pub fn with_prices(mut self, engine_price: f64, delivery_price: f64) -> Self {
        self.engine_price = PriceInput::Supplied(engine_price);
        self.delivery_price = PriceInput::Supplied(delivery_price);
        self
    }
}
