//! Published AEA 1989a/b constants and the defaults derived from them.
//!
//! Monetary values are 1989 USD unless stated otherwise.

// -- Spares --

/// Airframe spares as a fraction of airframe price.
pub const AIRFRAME_SPARES_FRACTION: f64 = 0.1;

/// Engine spares as a fraction of total engine price.
pub const ENGINE_SPARES_FRACTION: f64 = 0.3;

// -- Capital costs --

pub const DEPRECIATION_PERIOD_YEARS: f64 = 16.0;
pub const DEPRECIATION_RESIDUAL_FRACTION: f64 = 0.1;
pub const INTEREST_RATE: f64 = 0.08;
pub const REPAYMENT_PERIOD_YEARS: f64 = 16.0;
pub const BALLOON_FRACTION: f64 = 0.1;

/// Annual insurance as a fraction of delivery price.
pub const INSURANCE_FACTOR: f64 = 0.005;

// -- Economics --

/// Average annual inflation, 1.3 %.
pub const INFLATION_RATE: f64 = 0.013;

/// Fuel price [USD/kg]: 0.888 USD/kg (2.7 USD/gal) at a 0.7 discount.
pub const FUEL_PRICE_USD_PER_KG: f64 = 0.888 * 0.7;

/// Maintenance labor rate in 1989 [USD/h].
pub const LABOR_RATE_USD_PER_HOUR: f64 = 65.0;

pub const COCKPIT_CREW_RATE_USD_PER_HOUR: f64 = 295.0 / 2.0;
pub const CABIN_CREW_RATE_USD_PER_HOUR: f64 = 0.0;

// -- Engine installation --

/// Mounts, cowlings and systems of a transport jet installation.
pub const INSTALLED_ENGINE_FACTOR: f64 = 1.15;

/// Thrust reverser allowance. Use 1.0 for engines without reversers.
pub const REVERSE_THRUST_FACTOR: f64 = 1.18;

// -- Fees --

/// AEA 1989a landing fee [USD/kg MTOW].
pub const AEA_1989A_LANDING_FEE: f64 = 0.0078;
/// AEA 1989a navigation fee [USD/(nm * sqrt(kg))].
pub const AEA_1989A_NAVIGATION_FEE: f64 = 0.00414;
/// AEA 1989a ground handling [USD/kg payload].
pub const AEA_1989A_GROUND_HANDLING: f64 = 0.10;

pub const AEA_1989B_LANDING_FEE: f64 = 0.0059;
pub const AEA_1989B_NAVIGATION_FEE: f64 = 0.00166;
pub const AEA_1989B_GROUND_HANDLING: f64 = 0.11;

/// Divisor applied to the published fee factors for regional operations.
pub const REGIONAL_FEE_SCALE: f64 = 15.0;

// -- Price correlations --

/// Engine price [1999 USD] = ENGINE_PRICE_COEFFICIENT * T^ENGINE_PRICE_EXPONENT.
pub const ENGINE_PRICE_COEFFICIENT: f64 = 293.0;
pub const ENGINE_PRICE_EXPONENT: f64 = 0.81;

/// Delivery price [1999 USD] per kg of OEW.
pub const DELIVERY_PRICE_PER_KG_OEW: f64 = 860.0;

/// OEW at which the purchase price correlation switches branch [kg].
pub const PURCHASE_PRICE_OEW_THRESHOLD_KG: f64 = 10_000.0;
