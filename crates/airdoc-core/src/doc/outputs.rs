/// DOC output structures.
use serde::{Deserialize, Serialize};

use super::maintenance::MaintenanceBreakdown;
use crate::pricing::PricingResult;
use crate::weights::WeightBreakdown;

/// Seven cost categories and their total at one time basis
/// (per year, per flight or per flight hour).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub depreciation: f64,
    pub interest: f64,
    pub insurance: f64,
    pub fuel: f64,
    pub maintenance: f64,
    pub crew: f64,
    pub fees: f64,
    pub total: f64,
}

impl CostBreakdown {
    /// Category names in output order.
    pub const CATEGORY_NAMES: [&'static str; 7] = [
        "depreciation",
        "interest",
        "insurance",
        "fuel",
        "maintenance",
        "crew",
        "fees",
    ];

    /// Build from the seven categories; `total` is their sum.
    pub fn from_components(
        depreciation: f64,
        interest: f64,
        insurance: f64,
        fuel: f64,
        maintenance: f64,
        crew: f64,
        fees: f64,
    ) -> Self {
        Self {
            depreciation,
            interest,
            insurance,
            fuel,
            maintenance,
            crew,
            fees,
            total: depreciation + interest + insurance + fuel + maintenance + crew + fees,
        }
    }

    /// `(name, value)` for each category, total excluded.
    pub fn components(&self) -> [(&'static str, f64); 7] {
        let values = [
            self.depreciation,
            self.interest,
            self.insurance,
            self.fuel,
            self.maintenance,
            self.crew,
            self.fees,
        ];
        let mut out = [("", 0.0); 7];
        for (slot, (name, value)) in out.iter_mut().zip(Self::CATEGORY_NAMES.iter().zip(values)) {
            *slot = (*name, value);
        }
        out
    }

    /// Fuel, maintenance, crew and fees: the cash operating cost.
    pub fn cash_operating(&self) -> f64 {
        self.fuel + self.maintenance + self.crew + self.fees
    }

    /// Every component divided by `divisor`. The total is divided too, not
    /// re-summed, so ratios between bases are exact up to rounding.
    pub fn scaled_down(&self, divisor: f64) -> Self {
        Self {
            depreciation: self.depreciation / divisor,
            interest: self.interest / divisor,
            insurance: self.insurance / divisor,
            fuel: self.fuel / divisor,
            maintenance: self.maintenance / divisor,
            crew: self.crew / divisor,
            fees: self.fees / divisor,
            total: self.total / divisor,
        }
    }
}

/// Full DOC calculation result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DocResult {
    pub target_year: i32,
    pub prices: PricingResult,
    pub weights: WeightBreakdown,
    pub maintenance: MaintenanceBreakdown,
    /// USD per year.
    pub annual: CostBreakdown,
    /// USD per flight.
    pub per_flight: CostBreakdown,
    /// USD per flight hour.
    pub per_hour: CostBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> CostBreakdown {
        CostBreakdown::from_components(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0)
    }

    #[test]
    fn total_is_sum_of_components() {
        let c = sample();
        assert_eq!(c.total, 28.0);
        let summed: f64 = c.components().iter().map(|(_, v)| v).sum();
        assert_eq!(summed, c.total);
    }

    #[test]
    fn components_in_category_order() {
        let names: Vec<&str> = sample().components().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, CostBreakdown::CATEGORY_NAMES);
        assert_eq!(sample().components()[6], ("fees", 7.0));
    }

    #[test]
    fn cash_operating_excludes_capital_costs() {
        assert_eq!(sample().cash_operating(), 4.0 + 5.0 + 6.0 + 7.0);
    }

    #[test]
    fn scaled_down_divides_everything() {
        let c = sample().scaled_down(4.0);
        assert_relative_eq!(c.total, 7.0);
        assert_relative_eq!(c.crew, 1.5);
    }
}
