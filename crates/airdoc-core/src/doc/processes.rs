//! Cost category formulas other than maintenance.
//!
//! Pure functions returning USD per year. Degenerate inputs (zero periods,
//! zero interest) propagate as non-finite values.

// -- Capital costs --

/// Straight-line depreciation to the residual value.
pub fn depreciation(purchase_price: f64, residual_fraction: f64, period_years: f64) -> f64 {
    purchase_price * (1.0 - residual_fraction) / period_years
}

/// Average annual interest rate under balloon-payment amortization.
///
/// The loan is amortized over `repayment_years` but the charge is spread
/// over `depreciation_years`. Zero interest gives 0/0 and propagates NaN.
pub fn average_interest_rate(
    interest_rate: f64,
    repayment_years: f64,
    depreciation_years: f64,
    balloon_fraction: f64,
) -> f64 {
    let q = 1.0 + interest_rate;
    let qn = q.powf(repayment_years);
    ((qn - balloon_fraction) * (q - 1.0)) / (qn - 1.0) * (repayment_years / depreciation_years)
        - (1.0 - balloon_fraction) / depreciation_years
}

pub fn interest(
    purchase_price: f64,
    interest_rate: f64,
    repayment_years: f64,
    depreciation_years: f64,
    balloon_fraction: f64,
) -> f64 {
    purchase_price
        * average_interest_rate(interest_rate, repayment_years, depreciation_years, balloon_fraction)
}

pub fn insurance(delivery_price: f64, insurance_factor: f64) -> f64 {
    delivery_price * insurance_factor
}

// -- Operating costs --

pub fn fuel(fuel_weight_kg: f64, fuel_price_usd_per_kg: f64, flights_per_year: f64) -> f64 {
    fuel_weight_kg * fuel_price_usd_per_kg * flights_per_year
}

/// Crew cost, charged on block time.
pub fn crew(
    cockpit_count: u32,
    cockpit_rate: f64,
    cabin_count: u32,
    cabin_rate: f64,
    block_time_hours: f64,
    flights_per_year: f64,
) -> f64 {
    (cockpit_count as f64 * cockpit_rate + cabin_count as f64 * cabin_rate)
        * block_time_hours
        * flights_per_year
}

/// Landing, navigation and ground handling fees.
#[allow(clippy::too_many_arguments)]
pub fn fees(
    mtow_kg: f64,
    payload_kg: f64,
    range_nm: f64,
    flights_per_year: f64,
    landing_factor: f64,
    navigation_factor: f64,
    ground_handling_factor: f64,
    inflation: f64,
) -> f64 {
    let landing = landing_factor * mtow_kg;
    let navigation = navigation_factor * range_nm * mtow_kg.sqrt();
    let ground = ground_handling_factor * payload_kg;
    (landing + navigation + ground) * flights_per_year * inflation
}
