use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::convert::{aircraft_from_dict, doc_err, method_with_overrides};

use airdoc_core::doc::{self as core_doc, CostBreakdown};
use airdoc_core::{MaintenanceCoefficients, NamedCoefficients};

// ---------------------------------------------------------------------------
// Typed pyclass result objects
// ---------------------------------------------------------------------------

define_scalar_result! {
    /// Seven DOC categories and their total at one time basis.
    pub struct CostBreakdownResult from CostBreakdown {
        depreciation, interest, insurance, fuel, maintenance, crew, fees, total,
    }
}

#[pymethods]
impl CostBreakdownResult {
    fn cash_operating(&self) -> f64 {
        self.fuel + self.maintenance + self.crew + self.fees
    }
}

// ---------------------------------------------------------------------------
// Functions
// ---------------------------------------------------------------------------

#[pyfunction]
#[pyo3(signature = (aircraft, target_year=2025, coefficients=None))]
fn calculate_costs<'py>(
    py: Python<'py>,
    aircraft: &Bound<'py, PyDict>,
    target_year: i32,
    coefficients: Option<&Bound<'py, PyDict>>,
) -> PyResult<Bound<'py, PyDict>> {
    let spec = aircraft_from_dict(aircraft)?;
    let method = method_with_overrides(coefficients)?;
    let r = core_doc::calculate_costs(&spec, &method, target_year).map_err(doc_err)?;

    let prices = fields_to_dict!(
        py, r.prices,
        engine_price, delivery_price, airframe_price, spares_price, purchase_price,
    );
    let weights = fields_to_dict!(
        py, r.weights,
        installed_engine_weight_kg, airframe_weight_kg,
    );
    let maintenance = fields_to_dict!(
        py, r.maintenance,
        airframe_labor_hours, airframe_material_cost, engine_labor_hours,
        engine_material_cost, labor_rate, cost_per_flight_hour, cost_per_flight,
    );

    let dict = PyDict::new(py);
    dict.set_item("target_year", r.target_year)?;
    dict.set_item("prices", prices)?;
    dict.set_item("weights", weights)?;
    dict.set_item("maintenance", maintenance)?;
    dict.set_item("annual", CostBreakdownResult::from_core(&r.annual))?;
    dict.set_item("per_flight", CostBreakdownResult::from_core(&r.per_flight))?;
    dict.set_item("per_hour", CostBreakdownResult::from_core(&r.per_hour))?;
    Ok(dict)
}

#[pyfunction]
fn maintenance_coefficient_names() -> Vec<&'static str> {
    MaintenanceCoefficients::names().to_vec()
}

#[pyfunction]
fn default_coefficients(py: Python<'_>) -> PyResult<Bound<'_, PyDict>> {
    let defaults = MaintenanceCoefficients::default();
    let dict = PyDict::new(py);
    for (name, value) in defaults.iter_named() {
        dict.set_item(name, value)?;
    }
    Ok(dict)
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "doc")?;
    m.add_function(wrap_pyfunction!(calculate_costs, &m)?)?;
    m.add_function(wrap_pyfunction!(maintenance_coefficient_names, &m)?)?;
    m.add_function(wrap_pyfunction!(default_coefficients, &m)?)?;
    m.add_class::<CostBreakdownResult>()?;
    parent.add_submodule(&m)?;
    Ok(())
}
