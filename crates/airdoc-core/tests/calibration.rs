//! Calibration runs against synthetic and reference targets.
use airdoc_core::calibration::{
    CalibrationConfig, CalibrationStatus, CalibrationTarget, FitParameter,
};
use airdoc_core::reference;
use airdoc_core::{fit_maintenance, maintenance_cost_per_flight, MethodCoefficients};
use approx::assert_relative_eq;

#[test]
fn recovers_single_coefficient() {
    let r = reference::erj145_xr();
    let truth = MethodCoefficients::default();
    let target = maintenance_cost_per_flight(&r.aircraft, &truth, 2025).unwrap();

    let start = truth
        .with_maintenance_overrides(&[("airframe_labor_base_hours", 6.7 * 1.3)])
        .unwrap();
    let result = fit_maintenance(
        &start,
        &[CalibrationTarget::new(r.name, r.aircraft, target)],
        &[FitParameter::new("airframe_labor_base_hours", 0.1, 20.0)],
        &CalibrationConfig::default(),
    )
    .unwrap();

    assert_ne!(result.status, CalibrationStatus::MaxItersReached);
    assert_relative_eq!(result.parameters[0].fitted, 6.7, epsilon = 1e-2);
    assert_relative_eq!(result.parameters[0].base, 6.7 * 1.3);
    assert!(result.parameters[0].change_pct < 0.0);
    assert_relative_eq!(
        result.method.maintenance.airframe_labor_base_hours,
        result.parameters[0].fitted
    );
    assert!(result.aircraft[0].residual.abs() < 1.0);
}

#[test]
fn joint_fit_improves_on_defaults() {
    let base = MethodCoefficients::default();
    let targets: Vec<_> = reference::regional_jets().iter().map(|r| r.target()).collect();
    let config = CalibrationConfig {
        max_iters: 200,
        ..CalibrationConfig::default()
    };

    let result = fit_maintenance(&base, &targets, &FitParameter::defaults(), &config).unwrap();

    let baseline_sse: f64 = result
        .aircraft
        .iter()
        .map(|a| (a.baseline - a.target).powi(2))
        .sum();
    assert!(result.objective < baseline_sse);
    assert!(result.iterations <= 200);
    assert_eq!(result.aircraft.len(), 3);
    assert_eq!(result.parameters.len(), 10);
    for (p, bounds) in result.parameters.iter().zip(FitParameter::defaults()) {
        assert!(p.fitted >= bounds.lower && p.fitted <= bounds.upper, "{}", p.name);
    }
    for a in &result.aircraft {
        assert_relative_eq!(a.residual, a.fitted - a.target);
    }
}

#[test]
fn iteration_cap_returns_best_point() {
    let base = MethodCoefficients::default();
    let targets: Vec<_> = reference::regional_jets().iter().map(|r| r.target()).collect();
    let config = CalibrationConfig {
        max_iters: 2,
        ..CalibrationConfig::default()
    };

    let result = fit_maintenance(&base, &targets, &FitParameter::defaults(), &config).unwrap();

    assert_eq!(result.status, CalibrationStatus::MaxItersReached);
    assert!(!result.status.is_success());
    assert_eq!(result.iterations, 2);
    let baseline_sse: f64 = result
        .aircraft
        .iter()
        .map(|a| (a.baseline - a.target).powi(2))
        .sum();
    assert!(result.objective < baseline_sse);
    for (p, bounds) in result.parameters.iter().zip(FitParameter::defaults()) {
        assert!(p.fitted >= bounds.lower && p.fitted <= bounds.upper, "{}", p.name);
    }
}

#[test]
fn unfitted_coefficients_held_at_base() {
    let base = MethodCoefficients::default();
    let targets = vec![reference::crj200().target()];
    let params = vec![FitParameter::new("engine_k1_base", 0.5, 2.0)];
    let config = CalibrationConfig {
        max_iters: 50,
        ..CalibrationConfig::default()
    };
    let result = fit_maintenance(&base, &targets, &params, &config).unwrap();

    let mut expected = base.maintenance;
    expected.engine_k1_base = result.method.maintenance.engine_k1_base;
    assert_eq!(result.method.maintenance, expected);
    assert_eq!(result.method.fuel_price_usd_per_kg, base.fuel_price_usd_per_kg);
}
