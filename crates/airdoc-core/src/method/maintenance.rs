//! Maintenance sub-model coefficients.
//!
//! Airframe terms follow
//!   labor  = (1/tf) (c1 m_AF + c2 - c3 / (m_AF + offset)) (base + slope tf)
//!   material = (1/tf) (d1 + d2 tf) P_AF
//! and engine terms follow the k1..k4 shape-factor form of AEA 1989a.
use airdoc_macros::Coefficients;
use serde::{Deserialize, Serialize};

use crate::traits::NamedCoefficients;

#[derive(Debug, Clone, Copy, PartialEq, Coefficients, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaintenanceCoefficients {
    // -- Airframe labor --
    /// c1 [h/kg].
    #[coefficients(group = "airframe")]
    pub airframe_labor_weight_coefficient: f64,
    /// c2 [h].
    #[coefficients(group = "airframe")]
    pub airframe_labor_base_hours: f64,
    /// c3 [h kg].
    #[coefficients(group = "airframe")]
    pub airframe_labor_weight_numerator_kg: f64,
    #[coefficients(group = "airframe")]
    pub airframe_labor_weight_denominator_offset_kg: f64,
    #[coefficients(group = "airframe")]
    pub airframe_labor_time_base_factor: f64,
    #[coefficients(group = "airframe")]
    pub airframe_labor_time_coefficient: f64,

    // -- Airframe material --
    #[coefficients(group = "airframe")]
    pub airframe_material_base_coefficient: f64,
    #[coefficients(group = "airframe")]
    pub airframe_material_time_coefficient: f64,

    // -- Engine shape factors --
    #[coefficients(group = "engine")]
    pub engine_k1_base: f64,
    #[coefficients(group = "engine")]
    pub engine_k1_bpr_coefficient: f64,
    #[coefficients(group = "engine")]
    pub engine_k1_bpr_exponent: f64,
    #[coefficients(group = "engine")]
    pub engine_k2_base: f64,
    #[coefficients(group = "engine")]
    pub engine_k2_opr_coefficient: f64,
    #[coefficients(group = "engine")]
    pub engine_k2_opr_exponent: f64,
    #[coefficients(group = "engine")]
    pub engine_k2_opr_divisor: f64,
    #[coefficients(group = "engine")]
    pub engine_k3_compressor_coefficient: f64,
    #[coefficients(group = "engine")]
    pub engine_k4_single_shaft: f64,
    #[coefficients(group = "engine")]
    pub engine_k4_twin_shaft: f64,
    #[coefficients(group = "engine")]
    pub engine_k4_triple_shaft: f64,

    // -- Engine labor and material --
    #[coefficients(group = "engine")]
    pub engine_labor_base_coefficient: f64,
    /// Shared by the labor and material thrust terms [1/N].
    #[coefficients(group = "engine")]
    pub engine_labor_thrust_coefficient: f64,
    #[coefficients(group = "engine")]
    pub engine_labor_thrust_exponent: f64,
    #[coefficients(group = "engine")]
    pub engine_labor_flight_time_constant: f64,
    #[coefficients(group = "engine")]
    pub engine_material_base_coefficient: f64,
    #[coefficients(group = "engine")]
    pub engine_material_thrust_exponent: f64,
    #[coefficients(group = "engine")]
    pub engine_material_flight_time_constant: f64,
}

impl Default for MaintenanceCoefficients {
    /// Published AEA 1989a values.
    fn default() -> Self {
        Self {
            airframe_labor_weight_coefficient: 9e-5,
            airframe_labor_base_hours: 6.7,
            airframe_labor_weight_numerator_kg: 350_000.0,
            airframe_labor_weight_denominator_offset_kg: 75_000.0,
            airframe_labor_time_base_factor: 0.8,
            airframe_labor_time_coefficient: 0.68,
            airframe_material_base_coefficient: 4.2e-6,
            airframe_material_time_coefficient: 2.2e-6,
            engine_k1_base: 1.27,
            engine_k1_bpr_coefficient: 0.2,
            engine_k1_bpr_exponent: 0.2,
            engine_k2_base: 0.4,
            engine_k2_opr_coefficient: 0.4,
            engine_k2_opr_exponent: 1.3,
            engine_k2_opr_divisor: 20.0,
            engine_k3_compressor_coefficient: 0.032,
            engine_k4_single_shaft: 0.5,
            engine_k4_twin_shaft: 0.57,
            engine_k4_triple_shaft: 0.64,
            engine_labor_base_coefficient: 0.21,
            engine_labor_thrust_coefficient: 1.02e-4,
            engine_labor_thrust_exponent: 0.4,
            engine_labor_flight_time_constant: 1.3,
            engine_material_base_coefficient: 2.56,
            engine_material_thrust_exponent: 0.8,
            engine_material_flight_time_constant: 1.3,
        }
    }
}

impl MaintenanceCoefficients {
    /// Coefficients fitted jointly to ERJ-145 XR, CRJ-700 and CRJ-200
    /// maintenance targets.
    pub fn fitted_regional_jets() -> Self {
        Self {
            airframe_labor_base_hours: 8.122902723888275,
            airframe_labor_time_base_factor: 0.16870063740188052,
            airframe_labor_time_coefficient: 0.9003414675473087,
            airframe_labor_weight_coefficient: 3.636374535885983e-5,
            airframe_labor_weight_denominator_offset_kg: 74999.77124528734,
            airframe_labor_weight_numerator_kg: 349999.9647928149,
            engine_k1_base: 0.5542373120826335,
            engine_k2_opr_exponent: 0.554237323109609,
            engine_labor_base_coefficient: 0.0662712266888201,
            engine_material_base_coefficient: 2.0,
            engine_material_thrust_exponent: 0.42892656740853,
            ..Self::default()
        }
    }
}

impl NamedCoefficients for MaintenanceCoefficients {
    fn names() -> &'static [&'static str] {
        Self::field_names()
    }

    fn value(&self, name: &str) -> Option<f64> {
        self.get(name)
    }

    fn value_mut(&mut self, name: &str) -> Option<&mut f64> {
        self.get_mut(name)
    }
}
