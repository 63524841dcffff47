//! Method coefficients: every factor, rate and fraction the cost formulas
//! consume, defaulting to the published AEA 1989a values.

pub mod constants;
pub mod maintenance;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::traits::NamedCoefficients;
use constants::*;
pub use maintenance::MaintenanceCoefficients;

/// How the delivery price is estimated when the aircraft does not supply one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryPriceMethod {
    /// 860 USD per kg of OEW, 1999 USD.
    #[default]
    WeightLinear,
    /// Purchase price from the OEW correlation (2010 USD), with the delivery
    /// price solved algebraically out of purchase = delivery + spares.
    PurchasePriceCorrelation,
}

/// Published fee factor sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeSchedule {
    Aea1989a,
    Aea1989b,
}

/// Landing, navigation and ground handling factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeFactors {
    pub landing: f64,
    pub navigation: f64,
    pub ground_handling: f64,
}

impl FeeSchedule {
    pub fn factors(self) -> FeeFactors {
        match self {
            FeeSchedule::Aea1989a => FeeFactors {
                landing: AEA_1989A_LANDING_FEE,
                navigation: AEA_1989A_NAVIGATION_FEE,
                ground_handling: AEA_1989A_GROUND_HANDLING,
            },
            FeeSchedule::Aea1989b => FeeFactors {
                landing: AEA_1989B_LANDING_FEE,
                navigation: AEA_1989B_NAVIGATION_FEE,
                ground_handling: AEA_1989B_GROUND_HANDLING,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MethodCoefficients {
    // -- Spares --
    pub airframe_spares_fraction: f64,
    pub engine_spares_fraction: f64,

    // -- Depreciation and interest --
    pub depreciation_period_years: f64,
    pub depreciation_residual_fraction: f64,
    pub interest_rate: f64,
    pub repayment_period_years: f64,
    pub balloon_fraction: f64,

    pub insurance_factor: f64,
    pub inflation_rate: f64,
    pub fuel_price_usd_per_kg: f64,

    // -- Engine installation --
    pub installed_engine_factor: f64,
    pub reverse_thrust_factor: f64,

    /// 1989 maintenance labor rate; inflated to the target year before use.
    pub labor_rate_usd_per_hour: f64,

    // -- Crew --
    pub cockpit_crew_rate_usd_per_hour: f64,
    pub cabin_crew_rate_usd_per_hour: f64,

    // -- Fees --
    pub landing_fee_factor: f64,
    pub navigation_fee_factor: f64,
    pub ground_handling_factor: f64,

    pub delivery_price_method: DeliveryPriceMethod,

    pub maintenance: MaintenanceCoefficients,
}

impl Default for MethodCoefficients {
    fn default() -> Self {
        Self {
            airframe_spares_fraction: AIRFRAME_SPARES_FRACTION,
            engine_spares_fraction: ENGINE_SPARES_FRACTION,
            depreciation_period_years: DEPRECIATION_PERIOD_YEARS,
            depreciation_residual_fraction: DEPRECIATION_RESIDUAL_FRACTION,
            interest_rate: INTEREST_RATE,
            repayment_period_years: REPAYMENT_PERIOD_YEARS,
            balloon_fraction: BALLOON_FRACTION,
            insurance_factor: INSURANCE_FACTOR,
            inflation_rate: INFLATION_RATE,
            fuel_price_usd_per_kg: FUEL_PRICE_USD_PER_KG,
            installed_engine_factor: INSTALLED_ENGINE_FACTOR,
            reverse_thrust_factor: REVERSE_THRUST_FACTOR,
            labor_rate_usd_per_hour: LABOR_RATE_USD_PER_HOUR,
            cockpit_crew_rate_usd_per_hour: COCKPIT_CREW_RATE_USD_PER_HOUR,
            cabin_crew_rate_usd_per_hour: CABIN_CREW_RATE_USD_PER_HOUR,
            landing_fee_factor: AEA_1989A_LANDING_FEE / REGIONAL_FEE_SCALE,
            navigation_fee_factor: AEA_1989A_NAVIGATION_FEE / REGIONAL_FEE_SCALE,
            ground_handling_factor: AEA_1989A_GROUND_HANDLING / REGIONAL_FEE_SCALE,
            delivery_price_method: DeliveryPriceMethod::default(),
            maintenance: MaintenanceCoefficients::default(),
        }
    }
}

impl MethodCoefficients {
    /// Copy with the fee factors of `schedule` divided by `scale`.
    ///
    /// `scale = 1.0` applies the published factors unchanged.
    pub fn with_fee_schedule(mut self, schedule: FeeSchedule, scale: f64) -> Self {
        let f = schedule.factors();
        self.landing_fee_factor = f.landing / scale;
        self.navigation_fee_factor = f.navigation / scale;
        self.ground_handling_factor = f.ground_handling / scale;
        self
    }

    pub fn with_maintenance(mut self, maintenance: MaintenanceCoefficients) -> Self {
        self.maintenance = maintenance;
        self
    }

    /// Copy with a sparse set of maintenance coefficients replaced.
    pub fn with_maintenance_overrides(&self, overrides: &[(&str, f64)]) -> Result<Self> {
        let maintenance = self.maintenance.with_overrides(overrides)?;
        Ok(self.with_maintenance(maintenance))
    }

    pub fn with_delivery_price_method(mut self, method: DeliveryPriceMethod) -> Self {
        self.delivery_price_method = method;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_use_regional_fee_scale() {
        let m = MethodCoefficients::default();
        assert_relative_eq!(m.landing_fee_factor, 0.0078 / 15.0);
        assert_relative_eq!(m.navigation_fee_factor, 0.00414 / 15.0);
        assert_relative_eq!(m.ground_handling_factor, 0.10 / 15.0);
        assert_eq!(m.delivery_price_method, DeliveryPriceMethod::WeightLinear);
    }

    #[test]
    fn fee_schedule_applies_scale() {
        let m = MethodCoefficients::default().with_fee_schedule(FeeSchedule::Aea1989b, 1.0);
        assert_eq!(m.landing_fee_factor, 0.0059);
        assert_eq!(m.navigation_fee_factor, 0.00166);
        assert_eq!(m.ground_handling_factor, 0.11);

        let a = MethodCoefficients::default()
            .with_fee_schedule(FeeSchedule::Aea1989a, REGIONAL_FEE_SCALE);
        assert_eq!(a, MethodCoefficients::default());
    }

    #[test]
    fn maintenance_overrides_leave_base_untouched() {
        let base = MethodCoefficients::default();
        let fitted = base
            .with_maintenance_overrides(&[("engine_material_base_coefficient", 2.0)])
            .unwrap();
        assert_eq!(fitted.maintenance.engine_material_base_coefficient, 2.0);
        assert_eq!(base.maintenance.engine_material_base_coefficient, 2.56);
        assert_eq!(fitted.interest_rate, base.interest_rate);
    }

    #[test]
    fn maintenance_overrides_reject_method_fields() {
        let base = MethodCoefficients::default();
        assert!(base.with_maintenance_overrides(&[("interest_rate", 0.05)]).is_err());
    }
}
