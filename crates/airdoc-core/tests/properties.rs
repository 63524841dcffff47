//! Property tests for the invariants every DOC result must satisfy.
use airdoc_core::error::DocError;
use airdoc_core::reference;
use airdoc_core::{
    calculate_costs, maintenance_cost_per_flight, maintenance_sensitivity, AircraftSpec,
    DeliveryPriceMethod, MethodCoefficients, DEFAULT_FRACTIONS,
};
use proptest::prelude::*;

fn scaled_erj(flights: f64, flight_time: f64, oew_scale: f64, thrust_scale: f64) -> AircraftSpec {
    let base = reference::erj145_xr().aircraft;
    AircraftSpec {
        flights_per_year: flights,
        flight_time_hours: flight_time,
        block_time_hours: flight_time + 0.5,
        operational_empty_weight_kg: base.operational_empty_weight_kg * oew_scale,
        takeoff_thrust_per_engine_n: base.takeoff_thrust_per_engine_n * thrust_scale,
        ..base
    }
}

fn rel_close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_bases_consistent(
        flights in 100.0..4000.0f64,
        tf in 0.3..6.0f64,
        oew in 0.8..1.3f64,
        thrust in 0.7..1.4f64,
        year in 1995..2050i32,
    ) {
        let a = scaled_erj(flights, tf, oew, thrust);
        let r = calculate_costs(&a, &MethodCoefficients::default(), year).unwrap();
        prop_assert!(rel_close(r.per_flight.total * flights, r.annual.total, 1e-9));
        prop_assert!(rel_close(r.per_hour.total * flights * tf, r.annual.total, 1e-9));
        let summed: f64 = r.annual.components().iter().map(|(_, v)| v).sum();
        prop_assert!(rel_close(summed, r.annual.total, 1e-12));
    }

    #[test]
    fn prop_price_identities(
        oew in 0.5..1.5f64,
        thrust in 0.5..1.5f64,
        year in 1990..2050i32,
        correlation in any::<bool>(),
    ) {
        let a = scaled_erj(1200.0, 1.5, oew, thrust);
        let method = MethodCoefficients::default().with_delivery_price_method(if correlation {
            DeliveryPriceMethod::PurchasePriceCorrelation
        } else {
            DeliveryPriceMethod::WeightLinear
        });
        let p = calculate_costs(&a, &method, year).unwrap().prices;
        prop_assert!(rel_close(p.purchase_price, p.delivery_price + p.spares_price, 1e-12));
        prop_assert!(rel_close(
            p.airframe_price,
            p.delivery_price - a.engine_count as f64 * p.engine_price,
            1e-12
        ));
    }

    #[test]
    fn prop_bad_shaft_count_is_error(shafts in prop_oneof![Just(0u32), 4u32..1000]) {
        let mut a = reference::crj700().aircraft;
        a.engine_shafts = shafts;
        let r = calculate_costs(&a, &MethodCoefficients::default(), 2025);
        prop_assert!(matches!(r, Err(DocError::InvalidShaftCount(s)) if s == shafts));
    }

    #[test]
    fn prop_calculation_is_idempotent(
        flights in 100.0..4000.0f64,
        tf in 0.3..6.0f64,
        year in 1990..2050i32,
    ) {
        let a = scaled_erj(flights, tf, 1.0, 1.0);
        let m = MethodCoefficients::default();
        prop_assert_eq!(calculate_costs(&a, &m, year).unwrap(), calculate_costs(&a, &m, year).unwrap());
    }

    #[test]
    fn prop_maintenance_ignores_flights_per_year(flights in 1.0..5000.0f64) {
        let a = scaled_erj(flights, 1.5, 1.0, 1.0);
        let b = scaled_erj(1200.0, 1.5, 1.0, 1.0);
        let m = MethodCoefficients::default();
        prop_assert_eq!(
            maintenance_cost_per_flight(&a, &m, 2025).unwrap(),
            maintenance_cost_per_flight(&b, &m, 2025).unwrap()
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_sensitivity_scores_non_negative(
        tf in 0.5..4.0f64,
        oew in 0.8..1.3f64,
        thrust in 0.7..1.4f64,
    ) {
        let a = scaled_erj(1200.0, tf, oew, thrust);
        let report =
            maintenance_sensitivity(&a, &MethodCoefficients::default(), &DEFAULT_FRACTIONS, 2025)
                .unwrap();
        prop_assert!(report.records.iter().all(|r| r.score >= 0.0 && r.score_std >= 0.0));
        prop_assert_eq!(report.records.len() + report.excluded.len(), 26);
    }
}
