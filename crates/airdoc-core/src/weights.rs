//! Split of operational empty weight into installed engines and airframe.
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::aircraft::AircraftSpec;
use crate::method::MethodCoefficients;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightBreakdown {
    /// All engines including installation and reversers [kg].
    pub installed_engine_weight_kg: f64,
    pub airframe_weight_kg: f64,
}

pub fn installed_engine_weight(
    installation_factor: f64,
    reverse_thrust_factor: f64,
    engine_weight_kg: f64,
    engine_count: u32,
) -> f64 {
    installation_factor * reverse_thrust_factor * engine_weight_kg * engine_count as f64
}

/// No clamping: a negative airframe weight means inconsistent input.
pub fn decompose_weights(aircraft: &AircraftSpec, method: &MethodCoefficients) -> WeightBreakdown {
    let installed = installed_engine_weight(
        method.installed_engine_factor,
        method.reverse_thrust_factor,
        aircraft.engine_weight_kg,
        aircraft.engine_count,
    );
    let airframe = aircraft.operational_empty_weight_kg - installed;
    if airframe < 0.0 {
        warn!(
            airframe_weight_kg = airframe,
            installed_engine_weight_kg = installed,
            "installed engines outweigh the operational empty weight"
        );
    }
    WeightBreakdown {
        installed_engine_weight_kg: installed,
        airframe_weight_kg: airframe,
    }
}
