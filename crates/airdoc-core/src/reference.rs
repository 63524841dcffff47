//! Reference regional jets with published data and fitted maintenance
//! targets, used to calibrate the maintenance model.
use crate::aircraft::{AircraftSpec, PriceInput};
use crate::calibration::CalibrationTarget;

const LB_PER_KG: f64 = 2.205;

/// Annual utilization assumed for the reference fleet.
pub const REFERENCE_FLIGHTS_PER_YEAR: f64 = 1200.0;

/// Reference aircraft with its maintenance cost target [USD/flight].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceAircraft {
    pub name: &'static str,
    pub aircraft: AircraftSpec,
    pub target_maintenance_per_flight: f64,
}

impl ReferenceAircraft {
    pub fn target(&self) -> CalibrationTarget {
        CalibrationTarget::new(self.name, self.aircraft, self.target_maintenance_per_flight)
    }
}

fn hours(h: u32, m: u32, s: u32) -> f64 {
    h as f64 + m as f64 / 60.0 + s as f64 / 3600.0
}

pub fn erj145_xr() -> ReferenceAircraft {
    ReferenceAircraft {
        name: "ERJ-145 XR",
        aircraft: AircraftSpec {
            block_time_hours: hours(2, 5, 0),
            flight_time_hours: hours(1, 34, 0),
            flights_per_year: REFERENCE_FLIGHTS_PER_YEAR,
            engine_price: PriceInput::Estimated,
            delivery_price: PriceInput::Estimated,
            max_takeoff_weight_kg: 48_501.0 / LB_PER_KG,
            operational_empty_weight_kg: 27_550.0 / LB_PER_KG,
            engine_weight_kg: 751.6,
            fuel_weight_kg: 1731.0,
            payload_weight_kg: 3800.0,
            range_nm: 654.0,
            engine_count: 2,
            bypass_ratio: 4.7,
            overall_pressure_ratio: 20.0,
            compressor_stages: 9,
            engine_shafts: 2,
            takeoff_thrust_per_engine_n: 39_670.0,
            cockpit_crew_count: 2,
            cabin_crew_count: 1,
        },
        target_maintenance_per_flight: 1350.0,
    }
}

pub fn crj700() -> ReferenceAircraft {
    ReferenceAircraft {
        name: "CRJ-700",
        aircraft: AircraftSpec {
            block_time_hours: hours(2, 20, 0),
            flight_time_hours: hours(1, 57, 59),
            flights_per_year: REFERENCE_FLIGHTS_PER_YEAR,
            engine_price: PriceInput::Estimated,
            delivery_price: PriceInput::Estimated,
            max_takeoff_weight_kg: 75_000.0 / LB_PER_KG,
            operational_empty_weight_kg: 43_712.0 / LB_PER_KG,
            engine_weight_kg: 1088.0,
            fuel_weight_kg: 3514.0,
            payload_weight_kg: 8431.0,
            range_nm: 689.0,
            engine_count: 2,
            bypass_ratio: 5.0,
            overall_pressure_ratio: 28.0,
            compressor_stages: 10,
            engine_shafts: 2,
            takeoff_thrust_per_engine_n: 61_300.0,
            cockpit_crew_count: 2,
            cabin_crew_count: 1,
        },
        target_maintenance_per_flight: 1450.0,
    }
}

pub fn crj200() -> ReferenceAircraft {
    ReferenceAircraft {
        name: "CRJ-200",
        aircraft: AircraftSpec {
            block_time_hours: hours(2, 20, 0),
            flight_time_hours: hours(1, 53, 57),
            flights_per_year: REFERENCE_FLIGHTS_PER_YEAR,
            engine_price: PriceInput::Estimated,
            delivery_price: PriceInput::Estimated,
            max_takeoff_weight_kg: 53_000.0 / LB_PER_KG,
            operational_empty_weight_kg: 31_904.0 / LB_PER_KG,
            engine_weight_kg: 751.6,
            fuel_weight_kg: 2650.0,
            payload_weight_kg: 5487.0,
            range_nm: 689.0,
            engine_count: 2,
            bypass_ratio: 6.2,
            overall_pressure_ratio: 14.0,
            compressor_stages: 14,
            engine_shafts: 2,
            takeoff_thrust_per_engine_n: 41_000.0,
            cockpit_crew_count: 2,
            cabin_crew_count: 1,
        },
        target_maintenance_per_flight: 1250.0,
    }
}

/// ERJ-145 XR, CRJ-700 and CRJ-200 in calibration order.
pub fn regional_jets() -> [ReferenceAircraft; 3] {
    [erj145_xr(), crj700(), crj200()]
}
