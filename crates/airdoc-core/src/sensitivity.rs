//! One-at-a-time sensitivity of per-flight maintenance cost to each
//! maintenance coefficient.
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{info, warn};

use crate::aircraft::AircraftSpec;
use crate::doc::maintenance_cost_per_flight;
use crate::error::{DocError, Result};
use crate::method::{MaintenanceCoefficients, MethodCoefficients};
use crate::traits::NamedCoefficients;

/// ±10 % and ±20 %.
pub const DEFAULT_FRACTIONS: [f64; 4] = [-0.2, -0.1, 0.1, 0.2];

/// Perturbation size the score is normalized to [%].
const SCORE_BASIS_PCT: f64 = 10.0;

/// Cost response to one perturbation of one coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerturbationPoint {
    /// Relative change applied to the coefficient (0.1 = +10 %).
    pub fraction: f64,
    /// Perturbed maintenance cost [USD/flight].
    pub cost: f64,
    pub abs_change: f64,
    pub rel_change_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityRecord {
    pub name: String,
    /// "airframe" or "engine".
    pub group: String,
    pub base_value: f64,
    pub points: SmallVec<[PerturbationPoint; 4]>,
    /// Mean |relative change| per 10 % perturbation.
    pub score: f64,
    /// Population standard deviation of the normalized changes.
    pub score_std: f64,
}

impl SensitivityRecord {
    pub fn point(&self, fraction: f64) -> Option<&PerturbationPoint> {
        self.points.iter().find(|p| p.fraction == fraction)
    }
}

/// Low and high relative change for a symmetric perturbation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TornadoBar {
    pub name: String,
    pub low_pct: f64,
    pub high_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityReport {
    /// Unperturbed maintenance cost [USD/flight].
    pub base_cost: f64,
    /// Sorted by descending score.
    pub records: Vec<SensitivityRecord>,
    /// Coefficients skipped because their base value is zero.
    pub excluded: Vec<String>,
}

impl SensitivityReport {
    /// The `n` most influential records.
    pub fn top(&self, n: usize) -> &[SensitivityRecord] {
        &self.records[..n.min(self.records.len())]
    }

    /// Bars for `-fraction` and `+fraction`, in ranked order. Records
    /// missing either side are skipped.
    pub fn tornado(&self, fraction: f64) -> Vec<TornadoBar> {
        let f = fraction.abs();
        self.records
            .iter()
            .filter_map(|r| {
                let low = r.point(-f)?;
                let high = r.point(f)?;
                Some(TornadoBar {
                    name: r.name.clone(),
                    low_pct: low.rel_change_pct,
                    high_pct: high.rel_change_pct,
                })
            })
            .collect()
    }

    pub fn record(&self, name: &str) -> Option<&SensitivityRecord> {
        self.records.iter().find(|r| r.name == name)
    }
}

fn validate_fractions(fractions: &[f64]) -> Result<()> {
    match fractions.iter().find(|f| !f.is_finite() || **f == 0.0) {
        Some(&bad) => Err(DocError::InvalidPerturbation(bad)),
        None => Ok(()),
    }
}

fn score(points: &[PerturbationPoint]) -> (f64, f64) {
    let normalized: SmallVec<[f64; 4]> = points
        .iter()
        .map(|p| p.rel_change_pct.abs() / (p.fraction * 100.0).abs() * SCORE_BASIS_PCT)
        .collect();
    let n = normalized.len() as f64;
    let mean = normalized.iter().sum::<f64>() / n;
    let var = normalized.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, var.sqrt())
}

/// Perturb every maintenance coefficient of `method` by each of
/// `fractions` and rank the coefficients by their effect on per-flight
/// maintenance cost.
///
/// # Errors
///
/// - `InvalidPerturbation` for an empty, zero or non-finite fraction
/// - `InvalidShaftCount` if the aircraft is misconfigured
pub fn maintenance_sensitivity(
    aircraft: &AircraftSpec,
    method: &MethodCoefficients,
    fractions: &[f64],
    target_year: i32,
) -> Result<SensitivityReport> {
    if fractions.is_empty() {
        return Err(DocError::InvalidPerturbation(0.0));
    }
    validate_fractions(fractions)?;

    let base_cost = maintenance_cost_per_flight(aircraft, method, target_year)?;

    let mut records = Vec::with_capacity(MaintenanceCoefficients::FIELD_COUNT);
    let mut excluded = Vec::new();

    for &name in MaintenanceCoefficients::names() {
        let base_value = method.maintenance.value(name).unwrap_or(0.0);
        if base_value == 0.0 {
            warn!(parameter = name, "zero base value; excluded from sensitivity");
            excluded.push(name.to_string());
            continue;
        }

        let mut points: SmallVec<[PerturbationPoint; 4]> = SmallVec::with_capacity(fractions.len());
        for &fraction in fractions {
            let perturbed =
                method.with_maintenance_overrides(&[(name, base_value * (1.0 + fraction))])?;
            let cost = maintenance_cost_per_flight(aircraft, &perturbed, target_year)?;
            let abs_change = cost - base_cost;
            let rel_change_pct = if base_cost == 0.0 {
                0.0
            } else {
                abs_change / base_cost * 100.0
            };
            points.push(PerturbationPoint {
                fraction,
                cost,
                abs_change,
                rel_change_pct,
            });
        }

        let (score, score_std) = score(&points);
        records.push(SensitivityRecord {
            name: name.to_string(),
            group: MaintenanceCoefficients::group_of(name)
                .unwrap_or_default()
                .to_string(),
            base_value,
            points,
            score,
            score_std,
        });
    }

    records.sort_by(|a, b| b.score.total_cmp(&a.score));

    if let Some(first) = records.first() {
        info!(
            base_cost,
            analysed = records.len(),
            excluded = excluded.len(),
            most_influential = %first.name,
            score = first.score,
            "maintenance sensitivity complete"
        );
    }

    Ok(SensitivityReport {
        base_cost,
        records,
        excluded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference;
    use approx::assert_relative_eq;

    fn erj_report() -> SensitivityReport {
        maintenance_sensitivity(
            &reference::erj145_xr().aircraft,
            &MethodCoefficients::default(),
            &DEFAULT_FRACTIONS,
            2025,
        )
        .unwrap()
    }

    #[test]
    fn one_record_per_nonzero_coefficient() {
        let report = erj_report();
        assert_eq!(report.records.len() + report.excluded.len(), 26);
        assert!(report.excluded.is_empty());
    }

    #[test]
    fn records_sorted_descending() {
        let report = erj_report();
        for pair in report.records.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert!(report.records.iter().all(|r| r.score >= 0.0));
    }

    #[test]
    fn linear_coefficient_scores_its_cost_share() {
        // Cost is linear in the base hours, so each point gives the same
        // normalized change and the spread is zero.
        let report = erj_report();
        let r = report.record("airframe_labor_base_hours").unwrap();
        assert_eq!(r.group, "airframe");
        assert!(r.score > 0.0);
        assert_relative_eq!(r.score_std, 0.0, epsilon = 1e-9);
        let up = r.point(0.1).unwrap();
        let down = r.point(-0.1).unwrap();
        assert_relative_eq!(up.abs_change, -down.abs_change, max_relative = 1e-9);
    }

    #[test]
    fn zero_base_value_is_excluded() {
        let method = MethodCoefficients::default()
            .with_maintenance_overrides(&[("engine_k4_single_shaft", 0.0)])
            .unwrap();
        let report = maintenance_sensitivity(
            &reference::crj700().aircraft,
            &method,
            &DEFAULT_FRACTIONS,
            2025,
        )
        .unwrap();
        assert_eq!(report.excluded, vec!["engine_k4_single_shaft".to_string()]);
        assert!(report.record("engine_k4_single_shaft").is_none());
    }

    #[test]
    fn unused_shaft_factor_scores_zero() {
        // A twin-shaft engine never reads the single-shaft k4.
        let report = erj_report();
        let r = report.record("engine_k4_single_shaft").unwrap();
        assert_eq!(r.score, 0.0);
    }

    #[test]
    fn bad_fractions_rejected() {
        let aircraft = reference::erj145_xr().aircraft;
        let method = MethodCoefficients::default();
        for bad in [0.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                maintenance_sensitivity(&aircraft, &method, &[0.1, bad], 2025),
                Err(DocError::InvalidPerturbation(_))
            ));
        }
        assert!(maintenance_sensitivity(&aircraft, &method, &[], 2025).is_err());
    }

    #[test]
    fn top_and_tornado() {
        let report = erj_report();
        assert_eq!(report.top(3).len(), 3);
        assert_eq!(report.top(100).len(), report.records.len());
        let bars = report.tornado(0.2);
        assert_eq!(bars.len(), report.records.len());
        assert_eq!(bars[0].name, report.records[0].name);
        assert!(report.tornado(0.3).is_empty());
    }
}
