//! Maintenance coefficient calibration.
//!
//! Fits a named subset of [`MaintenanceCoefficients`] to per-flight
//! maintenance cost targets of one or more aircraft by bounded least squares
//! (L-BFGS with a More-Thuente line search). Coefficients not named are held
//! at their base value.
//!
//! [`MaintenanceCoefficients`]: crate::method::MaintenanceCoefficients

mod problem;

use argmin::core::{Executor, State, TerminationReason};
use argmin::solver::linesearch::MoreThuenteLineSearch;
use argmin::solver::quasinewton::LBFGS;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::aircraft::AircraftSpec;
use crate::doc::maintenance_cost_per_flight;
use crate::error::{DocError, Result};
use crate::method::{MaintenanceCoefficients, MethodCoefficients};
use crate::metrics;
use crate::traits::NamedCoefficients;
use problem::{MaintenanceFit, EDGE_FRACTION};

// -- Default fit set --

/// The ten most influential maintenance coefficients, in fit order.
pub const DEFAULT_FIT_PARAMETERS: &[&str] = &[
    "airframe_labor_base_hours",
    "airframe_labor_weight_numerator_kg",
    "airframe_labor_weight_denominator_offset_kg",
    "airframe_labor_time_coefficient",
    "engine_k1_base",
    "engine_k2_opr_exponent",
    "airframe_labor_time_base_factor",
    "engine_material_thrust_exponent",
    "airframe_labor_weight_coefficient",
    "engine_labor_base_coefficient",
];

/// Bounds as (lower, upper), in DEFAULT_FIT_PARAMETERS order.
pub const DEFAULT_FIT_BOUNDS: &[(f64, f64)] = &[
    (0.1, 20.0),   // airframe_labor_base_hours
    (1e4, 1e6),    // airframe_labor_weight_numerator_kg
    (1e3, 3e5),    // airframe_labor_weight_denominator_offset_kg
    (0.1, 2.0),    // airframe_labor_time_coefficient
    (0.5, 2.0),    // engine_k1_base
    (0.5, 2.0),    // engine_k2_opr_exponent
    (0.1, 2.0),    // airframe_labor_time_base_factor
    (0.4, 1.2),    // engine_material_thrust_exponent
    (1e-6, 1e-3),  // airframe_labor_weight_coefficient
    (0.05, 0.5),   // engine_labor_base_coefficient
];

// -- Inputs --

/// A maintenance coefficient to vary within `[lower, upper]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitParameter {
    pub name: String,
    pub lower: f64,
    pub upper: f64,
}

impl FitParameter {
    pub fn new(name: impl Into<String>, lower: f64, upper: f64) -> Self {
        Self {
            name: name.into(),
            lower,
            upper,
        }
    }

    /// [`DEFAULT_FIT_PARAMETERS`] with [`DEFAULT_FIT_BOUNDS`].
    pub fn defaults() -> Vec<Self> {
        DEFAULT_FIT_PARAMETERS
            .iter()
            .zip(DEFAULT_FIT_BOUNDS)
            .map(|(name, &(lo, hi))| Self::new(*name, lo, hi))
            .collect()
    }

    fn validate(&self) -> Result<()> {
        if !MaintenanceCoefficients::contains(&self.name) {
            return Err(DocError::UnknownCoefficient(self.name.clone()));
        }
        if !(self.lower.is_finite() && self.upper.is_finite() && self.lower < self.upper) {
            return Err(DocError::InvalidBounds {
                name: self.name.clone(),
                lower: self.lower,
                upper: self.upper,
            });
        }
        Ok(())
    }

    /// Move `x` strictly inside the box.
    fn clamp_inside(&self, x: f64) -> f64 {
        let margin = EDGE_FRACTION * (self.upper - self.lower);
        x.clamp(self.lower + margin, self.upper - margin)
    }
}

/// An aircraft and its per-flight maintenance cost target [USD].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationTarget {
    pub name: String,
    pub aircraft: AircraftSpec,
    pub target_cost: f64,
}

impl CalibrationTarget {
    pub fn new(name: impl Into<String>, aircraft: AircraftSpec, target_cost: f64) -> Self {
        Self {
            name: name.into(),
            aircraft,
            target_cost,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationConfig {
    /// Year whose USD the targets are expressed in.
    pub target_year: i32,
    pub max_iters: u64,
    /// Stop when the gradient norm falls below this.
    pub tol_grad: f64,
    /// Stop when successive objective values differ by less than this.
    pub tol_cost: f64,
    /// Correction pairs kept by L-BFGS.
    pub lbfgs_memory: usize,
    /// Relative finite-difference step.
    pub fd_step: f64,
    /// Stop once the scaled objective is at or below this.
    pub target_objective: f64,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            target_year: 2025,
            max_iters: 2000,
            tol_grad: 1e-7,
            tol_cost: 1e-9,
            lbfgs_memory: 10,
            fd_step: 1e-6,
            target_objective: 1e-12,
        }
    }
}

// -- Outputs --

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalibrationStatus {
    /// Gradient or objective change below tolerance.
    Converged,
    /// Objective reached `target_objective`.
    TargetReached,
    /// Iteration cap hit; the best point found is returned.
    MaxItersReached,
    /// Optimizer stopped for another reason.
    Stopped(String),
}

impl CalibrationStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Converged | Self::TargetReached)
    }

    fn from_reason(reason: Option<&TerminationReason>) -> Self {
        match reason {
            Some(TerminationReason::SolverConverged) => Self::Converged,
            Some(TerminationReason::TargetCostReached) => Self::TargetReached,
            Some(TerminationReason::MaxItersReached) => Self::MaxItersReached,
            Some(other) => Self::Stopped(other.text().to_string()),
            None => Self::Stopped("not terminated".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedValue {
    pub name: String,
    pub base: f64,
    pub fitted: f64,
    /// Change relative to base [%].
    pub change_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftFit {
    pub name: String,
    /// Cost with the base coefficients.
    pub baseline: f64,
    pub target: f64,
    pub fitted: f64,
    /// fitted - target.
    pub residual: f64,
    /// Residual relative to target [%].
    pub residual_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationResult {
    /// Base method coefficients with the fitted maintenance values.
    pub method: MethodCoefficients,
    pub parameters: Vec<FittedValue>,
    pub status: CalibrationStatus,
    pub iterations: u64,
    /// Sum of squared residuals [USD^2].
    pub objective: f64,
    pub rmse: f64,
    pub mae: f64,
    pub pbias: f64,
    /// Worst per-aircraft residual [% of target].
    pub max_abs_pct_error: f64,
    pub aircraft: Vec<AircraftFit>,
}

impl CalibrationResult {
    pub fn fitted_values(&self) -> Vec<f64> {
        self.parameters.iter().map(|p| p.fitted).collect()
    }
}

fn percent_change(from: f64, to: f64) -> f64 {
    if from == 0.0 {
        0.0
    } else {
        (to / from - 1.0) * 100.0
    }
}

/// Fit `parameters` of `base.maintenance` to `targets`.
///
/// Non-convergence is reported through [`CalibrationResult::status`] with
/// the best point found, not as an error.
///
/// # Errors
///
/// - `NoTargets` / `NoFitParameters` for empty inputs
/// - `UnknownCoefficient` / `InvalidBounds` for a bad fit parameter
/// - `DuplicateFitParameter` if a coefficient is listed more than once
/// - `InvalidShaftCount` if any target aircraft is misconfigured
/// - `Optimizer` if the optimizer itself fails
pub fn fit_maintenance(
    base: &MethodCoefficients,
    targets: &[CalibrationTarget],
    parameters: &[FitParameter],
    config: &CalibrationConfig,
) -> Result<CalibrationResult> {
    if targets.is_empty() {
        return Err(DocError::NoTargets);
    }
    if parameters.is_empty() {
        return Err(DocError::NoFitParameters);
    }
    for (i, p) in parameters.iter().enumerate() {
        p.validate()?;
        if parameters[..i].iter().any(|q| q.name == p.name) {
            return Err(DocError::DuplicateFitParameter(p.name.clone()));
        }
    }

    let baselines: Vec<f64> = targets
        .iter()
        .map(|t| maintenance_cost_per_flight(&t.aircraft, base, config.target_year))
        .collect::<Result<_>>()?;

    let base_values: Vec<f64> = parameters
        .iter()
        .filter_map(|p| base.maintenance.value(&p.name))
        .collect();

    let start: Vec<f64> = parameters
        .iter()
        .zip(&base_values)
        .map(|(p, &x)| {
            let inside = p.clamp_inside(x);
            if inside != x {
                warn!(
                    parameter = %p.name,
                    base = x,
                    start = inside,
                    lower = p.lower,
                    upper = p.upper,
                    "start point moved inside bounds"
                );
            }
            inside
        })
        .collect();

    info!(
        targets = targets.len(),
        parameters = parameters.len(),
        target_year = config.target_year,
        "starting maintenance calibration"
    );

    let fit = MaintenanceFit::new(*base, targets, parameters, config.target_year, config.fd_step);
    let u0 = fit.unbounded(&start);

    let linesearch = MoreThuenteLineSearch::new();
    let solver = LBFGS::new(linesearch, config.lbfgs_memory)
        .with_tolerance_grad(config.tol_grad)
        .map_err(|e| DocError::Optimizer(e.to_string()))?
        .with_tolerance_cost(config.tol_cost)
        .map_err(|e| DocError::Optimizer(e.to_string()))?;

    let res = Executor::new(fit, solver)
        .configure(|state| {
            state
                .param(u0.clone())
                .max_iters(config.max_iters)
                .target_cost(config.target_objective)
        })
        .run()
        .map_err(|e| DocError::Optimizer(e.to_string()))?;

    let state = res.state();
    let status = CalibrationStatus::from_reason(state.get_termination_reason());
    let iterations = state.get_iter();
    let best_u = state.get_best_param().cloned().unwrap_or(u0);

    // A failed line search keeps the problem, so evaluate on a fresh copy.
    let fit = MaintenanceFit::new(*base, targets, parameters, config.target_year, config.fd_step);
    let best_x = fit.bounded(&best_u);
    let method = fit.method_for(&best_x)?;
    let predicted = fit.predictions(&method)?;

    let observed: Vec<f64> = targets.iter().map(|t| t.target_cost).collect();
    let objective: f64 = predicted
        .iter()
        .zip(&observed)
        .map(|(p, o)| (p - o).powi(2))
        .sum();

    let parameters_out = parameters
        .iter()
        .zip(base_values.iter().zip(&best_x))
        .map(|(p, (&b, &x))| FittedValue {
            name: p.name.clone(),
            base: b,
            fitted: x,
            change_pct: percent_change(b, x),
        })
        .collect();

    let aircraft = targets
        .iter()
        .zip(baselines.iter().zip(&predicted))
        .map(|(t, (&baseline, &fitted))| AircraftFit {
            name: t.name.clone(),
            baseline,
            target: t.target_cost,
            fitted,
            residual: fitted - t.target_cost,
            residual_pct: percent_change(t.target_cost, fitted),
        })
        .collect();

    let result = CalibrationResult {
        method,
        parameters: parameters_out,
        status,
        iterations,
        objective,
        rmse: metrics::rmse(&observed, &predicted),
        mae: metrics::mae(&observed, &predicted),
        pbias: metrics::pbias(&observed, &predicted),
        max_abs_pct_error: metrics::max_abs_pct_error(&observed, &predicted),
        aircraft,
    };

    match &result.status {
        CalibrationStatus::MaxItersReached => warn!(
            iterations,
            objective, "calibration hit the iteration cap; returning best point"
        ),
        CalibrationStatus::Stopped(reason) => {
            warn!(%reason, objective, "calibration stopped before converging")
        }
        _ => {}
    }
    info!(
        status = ?result.status,
        iterations,
        objective,
        rmse = result.rmse,
        "maintenance calibration finished"
    );

    Ok(result)
}
