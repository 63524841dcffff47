//! Price resolution: engine, delivery, airframe, spares and purchase price.
//!
//! Estimated prices come from size/thrust correlations anchored to their own
//! reference years and are inflated to the target year. Supplied prices are
//! used verbatim.
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::aircraft::AircraftSpec;
use crate::inflation::{
    inflation_factor, DELIVERY_PRICE_REFERENCE_YEAR, ENGINE_PRICE_REFERENCE_YEAR,
    PURCHASE_PRICE_REFERENCE_YEAR,
};
use crate::method::constants::{
    DELIVERY_PRICE_PER_KG_OEW, ENGINE_PRICE_COEFFICIENT, ENGINE_PRICE_EXPONENT,
    PURCHASE_PRICE_OEW_THRESHOLD_KG,
};
use crate::method::{DeliveryPriceMethod, MethodCoefficients};

/// Resolved prices in target-year USD.
///
/// `purchase_price == delivery_price + spares_price` and
/// `airframe_price == delivery_price - engine_count * engine_price` hold
/// exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Price of one engine.
    pub engine_price: f64,
    pub delivery_price: f64,
    pub airframe_price: f64,
    pub spares_price: f64,
    pub purchase_price: f64,
}

// -- Correlations --

/// Engine price [1999 USD] from takeoff thrust per engine [N].
pub fn estimate_engine_price(takeoff_thrust_n: f64) -> f64 {
    ENGINE_PRICE_COEFFICIENT * takeoff_thrust_n.powf(ENGINE_PRICE_EXPONENT)
}

/// Delivery price [1999 USD] linear in OEW [kg].
pub fn estimate_delivery_price_from_oew(oew_kg: f64) -> f64 {
    DELIVERY_PRICE_PER_KG_OEW * oew_kg
}

/// Purchase price including spares [2010 USD] from OEW [kg].
pub fn estimate_purchase_price_from_oew(oew_kg: f64) -> f64 {
    if oew_kg >= PURCHASE_PRICE_OEW_THRESHOLD_KG {
        1.0e6 * (1.18 * oew_kg.powf(0.48) - 116.0)
    } else {
        -0.002695 * oew_kg * oew_kg + 1967.0 * oew_kg - 2_158_000.0
    }
}

/// Delivery price solved out of purchase = delivery + spares.
///
/// D = (P - n_E P_E (k_sE - k_sAF)) / (1 + k_sAF). All prices in the same
/// year's USD.
pub fn delivery_price_from_purchase_price(
    purchase_price: f64,
    engine_price: f64,
    engine_count: u32,
    airframe_spares_fraction: f64,
    engine_spares_fraction: f64,
) -> f64 {
    let engines = engine_count as f64 * engine_price;
    (purchase_price - engines * (engine_spares_fraction - airframe_spares_fraction))
        / (1.0 + airframe_spares_fraction)
}

// -- Derived prices --

pub fn airframe_price(delivery_price: f64, engine_price: f64, engine_count: u32) -> f64 {
    delivery_price - engine_count as f64 * engine_price
}

pub fn spares_price(
    airframe_price: f64,
    engine_price: f64,
    engine_count: u32,
    airframe_spares_fraction: f64,
    engine_spares_fraction: f64,
) -> f64 {
    airframe_price * airframe_spares_fraction
        + engine_price * engine_count as f64 * engine_spares_fraction
}

/// Resolve all prices for `aircraft` in `target_year` USD.
pub fn resolve_prices(
    aircraft: &AircraftSpec,
    method: &MethodCoefficients,
    target_year: i32,
) -> PricingResult {
    let rate = method.inflation_rate;

    let engine_price = aircraft.engine_price.resolve_with(|| {
        estimate_engine_price(aircraft.takeoff_thrust_per_engine_n)
            * inflation_factor(rate, target_year, ENGINE_PRICE_REFERENCE_YEAR)
    });

    let delivery_price = aircraft.delivery_price.resolve_with(|| {
        let oew = aircraft.operational_empty_weight_kg;
        match method.delivery_price_method {
            DeliveryPriceMethod::WeightLinear => {
                estimate_delivery_price_from_oew(oew)
                    * inflation_factor(rate, target_year, DELIVERY_PRICE_REFERENCE_YEAR)
            }
            DeliveryPriceMethod::PurchasePriceCorrelation => {
                let purchase = estimate_purchase_price_from_oew(oew)
                    * inflation_factor(rate, target_year, PURCHASE_PRICE_REFERENCE_YEAR);
                delivery_price_from_purchase_price(
                    purchase,
                    engine_price,
                    aircraft.engine_count,
                    method.airframe_spares_fraction,
                    method.engine_spares_fraction,
                )
            }
        }
    });

    let airframe = airframe_price(delivery_price, engine_price, aircraft.engine_count);
    if airframe < 0.0 {
        warn!(
            airframe_price = airframe,
            delivery_price,
            engine_price,
            "negative airframe price: engine and delivery prices are inconsistent"
        );
    }

    let spares = spares_price(
        airframe,
        engine_price,
        aircraft.engine_count,
        method.airframe_spares_fraction,
        method.engine_spares_fraction,
    );

    let prices = PricingResult {
        engine_price,
        delivery_price,
        airframe_price: airframe,
        spares_price: spares,
        purchase_price: delivery_price + spares,
    };
    debug!(?prices, target_year, "resolved prices");
    prices
}
