use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::convert::{aircraft_from_dict, checked_slice, doc_err, method_with_overrides};

use airdoc_core::calibration::{
    self as core_calibration, CalibrationConfig, CalibrationTarget, FitParameter,
};

/// Fit maintenance coefficients to per-flight cost targets.
///
/// `names`, `lower` and `upper` default to the ten most influential
/// coefficients and their bounds; pass all three to override.
#[pyfunction]
#[pyo3(signature = (
    aircraft, targets, names=None, lower=None, upper=None,
    target_year=2025, max_iters=2000, coefficients=None
))]
#[allow(clippy::too_many_arguments)]
fn fit_maintenance<'py>(
    py: Python<'py>,
    aircraft: Vec<Bound<'py, PyDict>>,
    targets: PyReadonlyArray1<'py, f64>,
    names: Option<Vec<String>>,
    lower: Option<PyReadonlyArray1<'py, f64>>,
    upper: Option<PyReadonlyArray1<'py, f64>>,
    target_year: i32,
    max_iters: u64,
    coefficients: Option<&Bound<'py, PyDict>>,
) -> PyResult<Bound<'py, PyDict>> {
    let target_costs = checked_slice(&targets, aircraft.len(), "targets")?;
    let fit_targets = aircraft
        .iter()
        .zip(target_costs)
        .enumerate()
        .map(|(i, (a, &cost))| {
            let name = match a.get_item("name")? {
                Some(n) => n.extract::<String>()?,
                None => format!("aircraft {i}"),
            };
            Ok(CalibrationTarget::new(name, aircraft_from_dict(a)?, cost))
        })
        .collect::<PyResult<Vec<_>>>()?;

    let parameters = match (names, &lower, &upper) {
        (None, None, None) => FitParameter::defaults(),
        (Some(names), Some(lo), Some(hi)) => {
            let lo = checked_slice(lo, names.len(), "lower")?;
            let hi = checked_slice(hi, names.len(), "upper")?;
            names
                .into_iter()
                .zip(lo.iter().zip(hi))
                .map(|(n, (&l, &h))| FitParameter::new(n, l, h))
                .collect()
        }
        _ => {
            return Err(PyValueError::new_err(
                "names, lower and upper must be given together",
            ))
        }
    };

    let base = method_with_overrides(coefficients)?;
    let config = CalibrationConfig {
        target_year,
        max_iters,
        ..CalibrationConfig::default()
    };
    let result = core_calibration::fit_maintenance(&base, &fit_targets, &parameters, &config)
        .map_err(doc_err)?;

    let fitted_names: Vec<&str> = result.parameters.iter().map(|p| p.name.as_str()).collect();
    let predicted: Vec<f64> = result.aircraft.iter().map(|a| a.fitted).collect();
    let baseline: Vec<f64> = result.aircraft.iter().map(|a| a.baseline).collect();
    let residuals: Vec<f64> = result.aircraft.iter().map(|a| a.residual).collect();

    let dict = PyDict::new(py);
    dict.set_item("names", fitted_names)?;
    dict.set_item("fitted", PyArray1::from_vec(py, result.fitted_values()))?;
    dict.set_item(
        "initial",
        PyArray1::from_vec(py, result.parameters.iter().map(|p| p.base).collect()),
    )?;
    dict.set_item("status", format!("{:?}", result.status))?;
    dict.set_item("success", result.status.is_success())?;
    dict.set_item("iterations", result.iterations)?;
    dict.set_item("objective", result.objective)?;
    dict.set_item("rmse", result.rmse)?;
    dict.set_item("mae", result.mae)?;
    dict.set_item("pbias", result.pbias)?;
    dict.set_item("max_abs_pct_error", result.max_abs_pct_error)?;
    dict.set_item("baseline", PyArray1::from_vec(py, baseline))?;
    dict.set_item("predicted", PyArray1::from_vec(py, predicted))?;
    dict.set_item("residuals", PyArray1::from_vec(py, residuals))?;
    Ok(dict)
}

/// Names and (lower, upper) bounds of the default fit set.
#[pyfunction]
fn default_fit_parameters<'py>(
    py: Python<'py>,
) -> (Vec<&'static str>, Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>) {
    let defaults = FitParameter::defaults();
    (
        core_calibration::DEFAULT_FIT_PARAMETERS.to_vec(),
        PyArray1::from_vec(py, defaults.iter().map(|p| p.lower).collect()),
        PyArray1::from_vec(py, defaults.iter().map(|p| p.upper).collect()),
    )
}

/// Per-flight maintenance cost of each aircraft for sanity checks before
/// fitting.
#[pyfunction]
#[pyo3(signature = (aircraft, target_year=2025, coefficients=None))]
fn maintenance_costs<'py>(
    py: Python<'py>,
    aircraft: Vec<Bound<'py, PyDict>>,
    target_year: i32,
    coefficients: Option<&Bound<'py, PyDict>>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let method = method_with_overrides(coefficients)?;
    let costs = aircraft
        .iter()
        .map(|a| {
            let spec = aircraft_from_dict(a)?;
            airdoc_core::maintenance_cost_per_flight(&spec, &method, target_year).map_err(doc_err)
        })
        .collect::<PyResult<Vec<f64>>>()?;
    Ok(PyArray1::from_vec(py, costs))
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "calibration")?;
    m.add_function(wrap_pyfunction!(fit_maintenance, &m)?)?;
    m.add_function(wrap_pyfunction!(default_fit_parameters, &m)?)?;
    m.add_function(wrap_pyfunction!(maintenance_costs, &m)?)?;
    parent.add_submodule(&m)?;
    Ok(())
}

