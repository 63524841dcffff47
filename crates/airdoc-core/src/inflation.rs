//! Compound-growth inflation between a reference year and a target year.

/// Reference year of the AEA 1989a/b method coefficients and labor rate.
pub const METHOD_REFERENCE_YEAR: i32 = 1989;

/// Reference year of the thrust-based engine price correlation.
pub const ENGINE_PRICE_REFERENCE_YEAR: i32 = 1999;

/// Reference year of the weight-linear delivery price correlation.
pub const DELIVERY_PRICE_REFERENCE_YEAR: i32 = 1999;

/// Reference year of the OEW-based purchase price correlation.
pub const PURCHASE_PRICE_REFERENCE_YEAR: i32 = 2010;

/// Inflation factor `(1 + rate)^(target_year - reference_year)`.
///
/// A target year before the reference year deflates (factor < 1).
pub fn inflation_factor(rate: f64, target_year: i32, reference_year: i32) -> f64 {
    (1.0 + rate).powi(target_year - reference_year)
}
