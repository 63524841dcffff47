use numpy::PyReadonlyArray1;
use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use airdoc_core::{AircraftSpec, DocError, MethodCoefficients, PriceInput};

/// Map a core error onto `ValueError`.
pub fn doc_err(e: DocError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Validate that a numpy array is C-contiguous and return its slice.
pub fn contiguous_slice<'py>(arr: &'py PyReadonlyArray1<'py, f64>) -> PyResult<&'py [f64]> {
    arr.as_slice()
        .map_err(|_| PyValueError::new_err("array must be C-contiguous"))
}

/// Validate length + contiguity of a numpy array.
pub fn checked_slice<'py>(
    arr: &'py PyReadonlyArray1<'py, f64>,
    expected_len: usize,
    name: &str,
) -> PyResult<&'py [f64]> {
    let slice = contiguous_slice(arr)?;
    if slice.len() != expected_len {
        return Err(PyValueError::new_err(format!(
            "{} must have {} elements, got {}",
            name,
            expected_len,
            slice.len()
        )));
    }
    Ok(slice)
}

fn required_f64(dict: &Bound<'_, PyDict>, key: &str) -> PyResult<f64> {
    match dict.get_item(key)? {
        Some(v) => v.extract::<f64>(),
        None => Err(PyKeyError::new_err(format!("aircraft is missing `{key}`"))),
    }
}

fn required_u32(dict: &Bound<'_, PyDict>, key: &str) -> PyResult<u32> {
    match dict.get_item(key)? {
        Some(v) => v.extract::<u32>(),
        None => Err(PyKeyError::new_err(format!("aircraft is missing `{key}`"))),
    }
}

fn price(dict: &Bound<'_, PyDict>, key: &str) -> PyResult<PriceInput> {
    let value: Option<f64> = match dict.get_item(key)? {
        Some(v) if !v.is_none() => Some(v.extract::<f64>()?),
        _ => None,
    };
    Ok(PriceInput::from(value))
}

/// Build an `AircraftSpec` from a dict keyed by field name. Prices are
/// optional; a missing or `None` price is estimated.
pub fn aircraft_from_dict(dict: &Bound<'_, PyDict>) -> PyResult<AircraftSpec> {
    Ok(AircraftSpec {
        block_time_hours: required_f64(dict, "block_time_hours")?,
        flight_time_hours: required_f64(dict, "flight_time_hours")?,
        flights_per_year: required_f64(dict, "flights_per_year")?,
        engine_price: price(dict, "engine_price")?,
        delivery_price: price(dict, "delivery_price")?,
        max_takeoff_weight_kg: required_f64(dict, "max_takeoff_weight_kg")?,
        operational_empty_weight_kg: required_f64(dict, "operational_empty_weight_kg")?,
        engine_weight_kg: required_f64(dict, "engine_weight_kg")?,
        fuel_weight_kg: required_f64(dict, "fuel_weight_kg")?,
        payload_weight_kg: required_f64(dict, "payload_weight_kg")?,
        range_nm: required_f64(dict, "range_nm")?,
        engine_count: required_u32(dict, "engine_count")?,
        bypass_ratio: required_f64(dict, "bypass_ratio")?,
        overall_pressure_ratio: required_f64(dict, "overall_pressure_ratio")?,
        compressor_stages: required_u32(dict, "compressor_stages")?,
        engine_shafts: required_u32(dict, "engine_shafts")?,
        takeoff_thrust_per_engine_n: required_f64(dict, "takeoff_thrust_per_engine_n")?,
        cockpit_crew_count: required_u32(dict, "cockpit_crew_count")?,
        cabin_crew_count: required_u32(dict, "cabin_crew_count")?,
    })
}

/// Default method coefficients with maintenance overrides from an optional
/// `{name: value}` dict.
pub fn method_with_overrides(
    coefficients: Option<&Bound<'_, PyDict>>,
) -> PyResult<MethodCoefficients> {
    let method = MethodCoefficients::default();
    let Some(dict) = coefficients else {
        return Ok(method);
    };
    let mut owned: Vec<(String, f64)> = Vec::with_capacity(dict.len());
    for (k, v) in dict.iter() {
        owned.push((k.extract::<String>()?, v.extract::<f64>()?));
    }
    let overrides: Vec<(&str, f64)> = owned.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    method.with_maintenance_overrides(&overrides).map_err(doc_err)
}
