use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::convert::{aircraft_from_dict, contiguous_slice, doc_err, method_with_overrides};

use airdoc_core::sensitivity::{self as core_sensitivity, DEFAULT_FRACTIONS};

/// One-at-a-time sensitivity of per-flight maintenance cost.
///
/// Returns `{"base_cost", "rows", "excluded"}`; rows are ranked by
/// descending score.
#[pyfunction]
#[pyo3(signature = (aircraft, fractions=None, target_year=2025, coefficients=None))]
fn maintenance_sensitivity<'py>(
    py: Python<'py>,
    aircraft: &Bound<'py, PyDict>,
    fractions: Option<PyReadonlyArray1<'py, f64>>,
    target_year: i32,
    coefficients: Option<&Bound<'py, PyDict>>,
) -> PyResult<Bound<'py, PyDict>> {
    let spec = aircraft_from_dict(aircraft)?;
    let method = method_with_overrides(coefficients)?;
    let fractions: &[f64] = match &fractions {
        Some(arr) => contiguous_slice(arr)?,
        None => &DEFAULT_FRACTIONS,
    };

    let report = core_sensitivity::maintenance_sensitivity(&spec, &method, fractions, target_year)
        .map_err(doc_err)?;

    let rows = PyList::empty(py);
    for r in &report.records {
        let row = PyDict::new(py);
        row.set_item("name", &r.name)?;
        row.set_item("group", &r.group)?;
        row.set_item("base_value", r.base_value)?;
        row.set_item("score", r.score)?;
        row.set_item("score_std", r.score_std)?;
        row.set_item(
            "fractions",
            PyArray1::from_vec(py, r.points.iter().map(|p| p.fraction).collect()),
        )?;
        row.set_item(
            "costs",
            PyArray1::from_vec(py, r.points.iter().map(|p| p.cost).collect()),
        )?;
        row.set_item(
            "rel_change_pct",
            PyArray1::from_vec(py, r.points.iter().map(|p| p.rel_change_pct).collect()),
        )?;
        rows.append(row)?;
    }

    let dict = PyDict::new(py);
    dict.set_item("base_cost", report.base_cost)?;
    dict.set_item("rows", rows)?;
    dict.set_item("excluded", report.excluded)?;
    Ok(dict)
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "sensitivity")?;
    m.add_function(wrap_pyfunction!(maintenance_sensitivity, &m)?)?;
    parent.add_submodule(&m)?;
    Ok(())
}
