/// DOC orchestration.
///
/// - `calculate_costs()`: prices, weights, seven categories, three bases
/// - `maintenance_detail()`: prices, weights and the maintenance model only
/// - `maintenance_cost_per_flight()`: the scalar shared by calibration and
///   sensitivity
use tracing::debug;

use super::maintenance::{maintenance_breakdown, MaintenanceBreakdown};
use super::outputs::{CostBreakdown, DocResult};
use super::processes;
use crate::aircraft::AircraftSpec;
use crate::error::Result;
use crate::inflation::{inflation_factor, METHOD_REFERENCE_YEAR};
use crate::method::MethodCoefficients;
use crate::pricing::{resolve_prices, PricingResult};
use crate::weights::{decompose_weights, WeightBreakdown};

struct Resolved {
    prices: PricingResult,
    weights: WeightBreakdown,
    inflation: f64,
    maintenance: MaintenanceBreakdown,
}

fn resolve(
    aircraft: &AircraftSpec,
    method: &MethodCoefficients,
    target_year: i32,
) -> Result<Resolved> {
    let inflation = inflation_factor(method.inflation_rate, target_year, METHOD_REFERENCE_YEAR);
    let labor_rate = method.labor_rate_usd_per_hour * inflation;

    let prices = resolve_prices(aircraft, method, target_year);
    let weights = decompose_weights(aircraft, method);

    let maintenance = maintenance_breakdown(
        aircraft,
        weights.airframe_weight_kg,
        prices.airframe_price,
        labor_rate,
        inflation,
        &method.maintenance,
    )?;

    Ok(Resolved {
        prices,
        weights,
        inflation,
        maintenance,
    })
}

/// Maintenance intermediates for `aircraft` in `target_year` USD.
///
/// Does not read `flights_per_year`.
pub fn maintenance_detail(
    aircraft: &AircraftSpec,
    method: &MethodCoefficients,
    target_year: i32,
) -> Result<MaintenanceBreakdown> {
    resolve(aircraft, method, target_year).map(|r| r.maintenance)
}

/// Maintenance cost per flight [USD].
pub fn maintenance_cost_per_flight(
    aircraft: &AircraftSpec,
    method: &MethodCoefficients,
    target_year: i32,
) -> Result<f64> {
    maintenance_detail(aircraft, method, target_year).map(|m| m.cost_per_flight)
}

/// Complete DOC breakdown for `aircraft` in `target_year` USD.
///
/// # Errors
///
/// - `NonPositiveUtilization` if flights per year or flight time is not > 0
/// - `InvalidShaftCount` if the shaft count is not 1, 2 or 3
pub fn calculate_costs(
    aircraft: &AircraftSpec,
    method: &MethodCoefficients,
    target_year: i32,
) -> Result<DocResult> {
    aircraft.check_utilization()?;
    let Resolved {
        prices,
        weights,
        inflation,
        maintenance,
    } = resolve(aircraft, method, target_year)?;

    let flights = aircraft.flights_per_year;

    let annual = CostBreakdown::from_components(
        processes::depreciation(
            prices.purchase_price,
            method.depreciation_residual_fraction,
            method.depreciation_period_years,
        ),
        processes::interest(
            prices.purchase_price,
            method.interest_rate,
            method.repayment_period_years,
            method.depreciation_period_years,
            method.balloon_fraction,
        ),
        processes::insurance(prices.delivery_price, method.insurance_factor),
        processes::fuel(aircraft.fuel_weight_kg, method.fuel_price_usd_per_kg, flights),
        maintenance.cost_per_flight * flights,
        processes::crew(
            aircraft.cockpit_crew_count,
            method.cockpit_crew_rate_usd_per_hour,
            aircraft.cabin_crew_count,
            method.cabin_crew_rate_usd_per_hour,
            aircraft.block_time_hours,
            flights,
        ),
        processes::fees(
            aircraft.max_takeoff_weight_kg,
            aircraft.payload_weight_kg,
            aircraft.range_nm,
            flights,
            method.landing_fee_factor,
            method.navigation_fee_factor,
            method.ground_handling_factor,
            inflation,
        ),
    );

    let per_flight = annual.scaled_down(flights);
    let per_hour = annual.scaled_down(aircraft.annual_flight_hours());

    debug!(
        target_year,
        annual_total = annual.total,
        per_flight_total = per_flight.total,
        per_hour_total = per_hour.total,
        "DOC calculated"
    );

    Ok(DocResult {
        target_year,
        prices,
        weights,
        maintenance,
        annual,
        per_flight,
        per_hour,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocError;
    use crate::reference;
    use approx::assert_relative_eq;

    #[test]
    fn bases_are_consistent() {
        let aircraft = reference::crj700().aircraft;
        let r = calculate_costs(&aircraft, &MethodCoefficients::default(), 2025).unwrap();
        assert_relative_eq!(
            r.per_flight.total * aircraft.flights_per_year,
            r.annual.total,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            r.per_hour.total * aircraft.annual_flight_hours(),
            r.annual.total,
            max_relative = 1e-9
        );
    }

    #[test]
    fn maintenance_is_independent_of_flights_per_year() {
        let method = MethodCoefficients::default();
        let mut aircraft = reference::erj145_xr().aircraft;
        let a = maintenance_cost_per_flight(&aircraft, &method, 2025).unwrap();
        aircraft.flights_per_year = 1.0;
        let b = maintenance_cost_per_flight(&aircraft, &method, 2025).unwrap();
        assert_eq!(a, b);

        let full = calculate_costs(&aircraft, &method, 2025).unwrap();
        assert_relative_eq!(full.per_flight.maintenance, a, max_relative = 1e-12);
    }

    #[test]
    fn labor_rate_is_inflated_from_1989() {
        let aircraft = reference::erj145_xr().aircraft;
        let m = maintenance_detail(&aircraft, &MethodCoefficients::default(), 2025).unwrap();
        assert_relative_eq!(m.labor_rate, 65.0 * 1.013_f64.powi(36), max_relative = 1e-12);
    }

    #[test]
    fn zero_flights_rejected_before_anything_else() {
        let mut aircraft = reference::erj145_xr().aircraft;
        aircraft.flights_per_year = 0.0;
        aircraft.engine_shafts = 9;
        let err = calculate_costs(&aircraft, &MethodCoefficients::default(), 2025);
        assert!(matches!(err, Err(DocError::NonPositiveUtilization { .. })));
    }

    #[test]
    fn invalid_shafts_fail_full_calculation() {
        let mut aircraft = reference::crj200().aircraft;
        aircraft.engine_shafts = 0;
        let err = calculate_costs(&aircraft, &MethodCoefficients::default(), 2025);
        assert!(matches!(err, Err(DocError::InvalidShaftCount(0))));
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let aircraft = reference::crj700().aircraft;
        let method = MethodCoefficients::default();
        let a = calculate_costs(&aircraft, &method, 2030).unwrap();
        let b = calculate_costs(&aircraft, &method, 2030).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn fitted_preset_changes_erj_maintenance() {
        let aircraft = reference::erj145_xr().aircraft;
        let default = maintenance_cost_per_flight(&aircraft, &MethodCoefficients::default(), 2025).unwrap();
        let fitted_method = MethodCoefficients::default()
            .with_maintenance(crate::method::MaintenanceCoefficients::fitted_regional_jets());
        let fitted = maintenance_cost_per_flight(&aircraft, &fitted_method, 2025).unwrap();
        assert!(fitted.is_finite() && fitted > 0.0);
        assert_ne!(fitted, default);
    }
}
