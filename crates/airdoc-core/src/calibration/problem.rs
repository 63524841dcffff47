//! Least-squares maintenance fit as an argmin problem.
//!
//! The optimizer works in an unbounded space `u`; each varied coefficient is
//! recovered as `x = lower + (upper - lower) / (1 + exp(-u))`, so every
//! evaluation stays strictly inside its box.
use argmin::core::{CostFunction, Error, Gradient};
use tracing::debug;

use super::{CalibrationTarget, FitParameter};
use crate::doc::maintenance_cost_per_flight;
use crate::error::Result;
use crate::method::MethodCoefficients;

/// Fraction of the box width kept between a start point and either bound.
pub(crate) const EDGE_FRACTION: f64 = 1e-6;

pub(crate) fn to_bounded(u: f64, lower: f64, upper: f64) -> f64 {
    lower + (upper - lower) / (1.0 + (-u).exp())
}

/// Inverse of [`to_bounded`]. `x` must lie strictly inside `(lower, upper)`.
pub(crate) fn to_unbounded(x: f64, lower: f64, upper: f64) -> f64 {
    let p = (x - lower) / (upper - lower);
    (p / (1.0 - p)).ln()
}

/// Sum of squared per-flight maintenance residuals over all targets.
pub(crate) struct MaintenanceFit<'a> {
    base: MethodCoefficients,
    targets: &'a [CalibrationTarget],
    parameters: &'a [FitParameter],
    target_year: i32,
    /// Mean squared target; divides the objective handed to the optimizer.
    scale: f64,
    fd_step: f64,
}

impl<'a> MaintenanceFit<'a> {
    pub(crate) fn new(
        base: MethodCoefficients,
        targets: &'a [CalibrationTarget],
        parameters: &'a [FitParameter],
        target_year: i32,
        fd_step: f64,
    ) -> Self {
        let mean_sq = targets.iter().map(|t| t.target_cost * t.target_cost).sum::<f64>()
            / targets.len() as f64;
        let scale = if mean_sq > 0.0 { mean_sq } else { 1.0 };
        Self {
            base,
            targets,
            parameters,
            target_year,
            scale,
            fd_step,
        }
    }

    pub(crate) fn bounded(&self, u: &[f64]) -> Vec<f64> {
        u.iter()
            .zip(self.parameters)
            .map(|(&ui, p)| to_bounded(ui, p.lower, p.upper))
            .collect()
    }

    pub(crate) fn unbounded(&self, x: &[f64]) -> Vec<f64> {
        x.iter()
            .zip(self.parameters)
            .map(|(&xi, p)| to_unbounded(xi, p.lower, p.upper))
            .collect()
    }

    /// Base coefficients with the varied fields set to `x`.
    pub(crate) fn method_for(&self, x: &[f64]) -> Result<MethodCoefficients> {
        let overrides: Vec<(&str, f64)> = self
            .parameters
            .iter()
            .zip(x)
            .map(|(p, &v)| (p.name.as_str(), v))
            .collect();
        self.base.with_maintenance_overrides(&overrides)
    }

    pub(crate) fn predictions(&self, method: &MethodCoefficients) -> Result<Vec<f64>> {
        self.targets
            .iter()
            .map(|t| maintenance_cost_per_flight(&t.aircraft, method, self.target_year))
            .collect()
    }

    /// Unscaled sum of squared residuals at bounded point `x`.
    pub(crate) fn sum_squared_residuals(&self, x: &[f64]) -> Result<f64> {
        let method = self.method_for(x)?;
        let predicted = self.predictions(&method)?;
        Ok(predicted
            .iter()
            .zip(self.targets)
            .map(|(p, t)| (p - t.target_cost).powi(2))
            .sum())
    }

    #[cfg(test)]
    pub(crate) fn scale(&self) -> f64 {
        self.scale
    }
}

impl CostFunction for MaintenanceFit<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, u: &Self::Param) -> std::result::Result<Self::Output, Error> {
        let x = self.bounded(u);
        let sse = self.sum_squared_residuals(&x)?;
        debug!(sse, "calibration objective");
        Ok(sse / self.scale)
    }
}

impl Gradient for MaintenanceFit<'_> {
    type Param = Vec<f64>;
    type Gradient = Vec<f64>;

    /// Central finite differences in the unbounded space.
    fn gradient(&self, u: &Self::Param) -> std::result::Result<Self::Gradient, Error> {
        let mut grad = Vec::with_capacity(u.len());
        let mut probe = u.clone();
        for i in 0..u.len() {
            let h = self.fd_step * u[i].abs().max(1.0);
            probe[i] = u[i] + h;
            let plus = self.cost(&probe)?;
            probe[i] = u[i] - h;
            let minus = self.cost(&probe)?;
            probe[i] = u[i];
            grad.push((plus - minus) / (2.0 * h));
        }
        Ok(grad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference;
    use approx::assert_relative_eq;

    #[test]
    fn transform_round_trips_inside_box() {
        for x in [0.2, 1.0, 6.7, 19.9] {
            let u = to_unbounded(x, 0.1, 20.0);
            assert_relative_eq!(to_bounded(u, 0.1, 20.0), x, max_relative = 1e-12);
        }
    }

    #[test]
    fn transform_stays_in_box_for_extreme_u() {
        assert!(to_bounded(-50.0, 0.5, 2.0) >= 0.5);
        assert!(to_bounded(50.0, 0.5, 2.0) <= 2.0);
        assert_relative_eq!(to_bounded(0.0, 0.5, 2.0), 1.25);
    }

    #[test]
    fn objective_is_zero_at_matching_targets() {
        let r = reference::erj145_xr();
        let method = MethodCoefficients::default();
        let baseline = maintenance_cost_per_flight(&r.aircraft, &method, 2025).unwrap();
        let targets = vec![CalibrationTarget::new(r.name, r.aircraft, baseline)];
        let params = vec![FitParameter::new("engine_k1_base", 0.5, 2.0)];
        let fit = MaintenanceFit::new(method, &targets, &params, 2025, 1e-6);

        assert_eq!(fit.sum_squared_residuals(&[1.27]).unwrap(), 0.0);
        assert!(fit.sum_squared_residuals(&[1.5]).unwrap() > 0.0);
        assert_relative_eq!(fit.scale(), baseline * baseline, max_relative = 1e-12);
    }

    #[test]
    fn gradient_matches_analytic_slope() {
        // Per-flight cost is linear in airframe_labor_base_hours.
        let r = reference::erj145_xr();
        let method = MethodCoefficients::default();
        let baseline = maintenance_cost_per_flight(&r.aircraft, &method, 2025).unwrap();
        let targets = vec![CalibrationTarget::new(r.name, r.aircraft, baseline)];
        let params = vec![FitParameter::new("airframe_labor_base_hours", 0.1, 20.0)];
        let fit = MaintenanceFit::new(method, &targets, &params, 2025, 1e-6);

        let x0 = 8.0;
        let u0 = to_unbounded(x0, 0.1, 20.0);
        let bumped = method.with_maintenance_overrides(&[("airframe_labor_base_hours", x0 + 1.0)]).unwrap();
        let at_x0 = method.with_maintenance_overrides(&[("airframe_labor_base_hours", x0)]).unwrap();
        let slope = maintenance_cost_per_flight(&r.aircraft, &bumped, 2025).unwrap()
            - maintenance_cost_per_flight(&r.aircraft, &at_x0, 2025).unwrap();
        let residual = maintenance_cost_per_flight(&r.aircraft, &at_x0, 2025).unwrap() - baseline;

        // d/du [r(x(u))^2 / s] = 2 r slope dx/du / s, dx/du = (x - lo)(hi - x)/(hi - lo)
        let dxdu = (x0 - 0.1) * (20.0 - x0) / (20.0 - 0.1);
        let expected = 2.0 * residual * slope * dxdu / fit.scale();

        let g = fit.gradient(&vec![u0]).unwrap();
        assert_relative_eq!(g[0], expected, max_relative = 1e-5);
    }
}
