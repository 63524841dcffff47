//! Airframe and engine maintenance (AEA 1989a).
//!
//! Labor hours and material costs are rates per flight hour. The per-flight
//! cost multiplies their monetized sum by flight time; annual cost further
//! multiplies by flights per year.
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aircraft::{AircraftSpec, EngineShafts};
use crate::error::Result;
use crate::method::MaintenanceCoefficients;

/// Engine shape factors k1..k4.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeFactors {
    /// Bypass-ratio factor.
    pub k1: f64,
    /// Pressure-ratio factor.
    pub k2: f64,
    /// Compressor-stage factor, includes k4.
    pub k3: f64,
    /// Shaft-count factor.
    pub k4: f64,
}

/// Maintenance intermediates for one aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceBreakdown {
    pub shape: ShapeFactors,
    /// Airframe labor hours per flight hour.
    pub airframe_labor_hours: f64,
    /// Airframe material USD per flight hour.
    pub airframe_material_cost: f64,
    /// Engine labor hours per flight hour, all engines.
    pub engine_labor_hours: f64,
    /// Engine material USD per flight hour, all engines.
    pub engine_material_cost: f64,
    /// Target-year labor rate [USD/h].
    pub labor_rate: f64,
    pub cost_per_flight_hour: f64,
    pub cost_per_flight: f64,
}

impl MaintenanceBreakdown {
    pub fn labor_cost_per_flight(&self, flight_time_hours: f64) -> f64 {
        (self.airframe_labor_hours + self.engine_labor_hours) * self.labor_rate * flight_time_hours
    }

    pub fn material_cost_per_flight(&self, flight_time_hours: f64) -> f64 {
        (self.airframe_material_cost + self.engine_material_cost) * flight_time_hours
    }
}

pub fn k4_for(shafts: EngineShafts, c: &MaintenanceCoefficients) -> f64 {
    match shafts {
        EngineShafts::Single => c.engine_k4_single_shaft,
        EngineShafts::Twin => c.engine_k4_twin_shaft,
        EngineShafts::Triple => c.engine_k4_triple_shaft,
    }
}

pub fn shape_factors(
    bypass_ratio: f64,
    overall_pressure_ratio: f64,
    compressor_stages: u32,
    shafts: EngineShafts,
    c: &MaintenanceCoefficients,
) -> ShapeFactors {
    let k1 = c.engine_k1_base - c.engine_k1_bpr_coefficient * bypass_ratio.powf(c.engine_k1_bpr_exponent);
    let k2 = c.engine_k2_base
        + c.engine_k2_opr_coefficient * overall_pressure_ratio.powf(c.engine_k2_opr_exponent)
            / c.engine_k2_opr_divisor;
    let k4 = k4_for(shafts, c);
    let k3 = c.engine_k3_compressor_coefficient * compressor_stages as f64 + k4;
    ShapeFactors { k1, k2, k3, k4 }
}

// -- Airframe --

pub fn airframe_labor_hours(
    flight_time_hours: f64,
    airframe_weight_kg: f64,
    c: &MaintenanceCoefficients,
) -> f64 {
    let weight_term = c.airframe_labor_weight_coefficient * airframe_weight_kg
        + c.airframe_labor_base_hours
        - c.airframe_labor_weight_numerator_kg
            / (airframe_weight_kg + c.airframe_labor_weight_denominator_offset_kg);
    let time_term =
        c.airframe_labor_time_base_factor + c.airframe_labor_time_coefficient * flight_time_hours;
    weight_term * time_term / flight_time_hours
}

pub fn airframe_material_cost(
    flight_time_hours: f64,
    airframe_price: f64,
    c: &MaintenanceCoefficients,
) -> f64 {
    (c.airframe_material_base_coefficient + c.airframe_material_time_coefficient * flight_time_hours)
        * airframe_price
        / flight_time_hours
}

// -- Engines --

fn thrust_term(thrust_n: f64, exponent: f64, c: &MaintenanceCoefficients) -> f64 {
    (1.0 + c.engine_labor_thrust_coefficient * thrust_n).powf(exponent)
}

pub fn engine_labor_hours(
    aircraft: &AircraftSpec,
    k: &ShapeFactors,
    c: &MaintenanceCoefficients,
) -> f64 {
    let tf = aircraft.flight_time_hours;
    aircraft.engine_count as f64
        * c.engine_labor_base_coefficient
        * k.k1
        * k.k3
        * thrust_term(aircraft.takeoff_thrust_per_engine_n, c.engine_labor_thrust_exponent, c)
        * (1.0 + c.engine_labor_flight_time_constant / tf)
}

pub fn engine_material_cost(
    aircraft: &AircraftSpec,
    k: &ShapeFactors,
    inflation: f64,
    c: &MaintenanceCoefficients,
) -> f64 {
    let tf = aircraft.flight_time_hours;
    aircraft.engine_count as f64
        * c.engine_material_base_coefficient
        * k.k1
        * (k.k2 + k.k3)
        * thrust_term(aircraft.takeoff_thrust_per_engine_n, c.engine_material_thrust_exponent, c)
        * (1.0 + c.engine_material_flight_time_constant / tf)
        * inflation
}

/// Full maintenance computation for one aircraft.
///
/// `labor_rate` is already in target-year USD; `inflation` is the
/// method-year inflation factor applied to engine material.
///
/// # Errors
///
/// [`DocError::InvalidShaftCount`](crate::error::DocError::InvalidShaftCount)
/// when the aircraft's shaft count is not 1, 2 or 3.
pub fn maintenance_breakdown(
    aircraft: &AircraftSpec,
    airframe_weight_kg: f64,
    airframe_price: f64,
    labor_rate: f64,
    inflation: f64,
    c: &MaintenanceCoefficients,
) -> Result<MaintenanceBreakdown> {
    let shafts = aircraft.shafts()?;
    let tf = aircraft.flight_time_hours;

    let shape = shape_factors(
        aircraft.bypass_ratio,
        aircraft.overall_pressure_ratio,
        aircraft.compressor_stages,
        shafts,
        c,
    );

    let af_labor = airframe_labor_hours(tf, airframe_weight_kg, c);
    let af_material = airframe_material_cost(tf, airframe_price, c);
    let e_labor = engine_labor_hours(aircraft, &shape, c);
    let e_material = engine_material_cost(aircraft, &shape, inflation, c);

    let cost_per_flight_hour = (af_labor + e_labor) * labor_rate + af_material + e_material;

    let breakdown = MaintenanceBreakdown {
        shape,
        airframe_labor_hours: af_labor,
        airframe_material_cost: af_material,
        engine_labor_hours: e_labor,
        engine_material_cost: e_material,
        labor_rate,
        cost_per_flight_hour,
        cost_per_flight: cost_per_flight_hour * tf,
    };
    debug!(?breakdown, "maintenance");
    Ok(breakdown)
}
