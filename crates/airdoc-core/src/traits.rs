//! Name-based access to coefficient bundles.
use crate::error::{DocError, Result};

/// A flat set of named `f64` coefficients.
///
/// Implemented by coefficient bundles that calibration and sensitivity
/// address by field name. Implementations usually forward to the methods
/// generated by `#[derive(Coefficients)]`.
pub trait NamedCoefficients: Copy {
    /// Field names in declaration order.
    fn names() -> &'static [&'static str];

    /// Value of `name`, `None` for unknown names.
    fn value(&self, name: &str) -> Option<f64>;

    fn value_mut(&mut self, name: &str) -> Option<&mut f64>;

    /// Return a copy with a sparse set of fields replaced.
    ///
    /// All names are checked before anything is applied; `self` is never
    /// modified.
    fn with_overrides(&self, overrides: &[(&str, f64)]) -> Result<Self> {
        let mut out = *self;
        for (name, value) in overrides {
            match out.value_mut(name) {
                Some(slot) => *slot = *value,
                None => return Err(DocError::UnknownCoefficient((*name).to_string())),
            }
        }
        Ok(out)
    }

    /// Whether `name` is one of this set's fields.
    fn contains(name: &str) -> bool {
        Self::names().contains(&name)
    }
}
