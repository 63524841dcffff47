#[macro_use]
mod macros;
mod convert;

mod calibration;
mod doc;
mod sensitivity;

use pyo3::prelude::*;

type Register = fn(&Bound<'_, PyModule>) -> PyResult<()>;

/// Submodules of `_core`, in registration order.
const SUBMODULES: [(&str, Register); 3] = [
    ("doc", doc::register),
    ("calibration", calibration::register),
    ("sensitivity", sensitivity::register),
];

/// Add each submodule to `parent` and to `sys.modules`, so that
/// `from airdoc._core.doc import calculate_costs` resolves.
fn add_submodules(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = parent.py();
    let parent_name = parent.name()?.to_string();
    let modules = py.import("sys")?.getattr("modules")?;

    for (name, register) in SUBMODULES {
        register(parent)?;
        let child = parent.getattr(name)?;
        modules.set_item(format!("{parent_name}.{name}"), child)?;
    }
    Ok(())
}

#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    add_submodules(m)
}
