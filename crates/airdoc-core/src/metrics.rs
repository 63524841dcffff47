//! Goodness-of-fit scores for calibration results.
//!
//! All metrics take target and predicted slices of equal length and return a
//! scalar score.

/// Root Mean Square Error. Range: [0, inf), 0 = perfect.
pub fn rmse(target: &[f64], predicted: &[f64]) -> f64 {
    let n = target.len() as f64;
    let mse: f64 = target
        .iter()
        .zip(predicted)
        .map(|(t, p)| (t - p).powi(2))
        .sum::<f64>()
        / n;
    mse.sqrt()
}

/// Mean Absolute Error. Range: [0, inf), 0 = perfect.
pub fn mae(target: &[f64], predicted: &[f64]) -> f64 {
    let n = target.len() as f64;
    target
        .iter()
        .zip(predicted)
        .map(|(t, p)| (t - p).abs())
        .sum::<f64>()
        / n
}

/// Percent Bias. Optimal = 0. Positive = overestimation.
pub fn pbias(target: &[f64], predicted: &[f64]) -> f64 {
    let sum_target: f64 = target.iter().sum();
    if sum_target == 0.0 {
        return f64::INFINITY;
    }
    let diff_sum: f64 = predicted.iter().zip(target).map(|(p, t)| p - t).sum();
    100.0 * diff_sum / sum_target
}

/// Largest absolute relative error [%].
pub fn max_abs_pct_error(target: &[f64], predicted: &[f64]) -> f64 {
    target
        .iter()
        .zip(predicted)
        .filter(|(t, _)| **t != 0.0)
        .map(|(t, p)| ((p - t) / t).abs() * 100.0)
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // --- RMSE tests ---

    #[test]
    fn rmse_perfect_match() {
        let t = [1350.0, 1450.0, 1250.0];
        assert_eq!(rmse(&t, &t), 0.0);
    }

    #[test]
    fn rmse_known_value() {
        // errors 3, 4 -> mse = 12.5
        assert_relative_eq!(rmse(&[10.0, 20.0], &[13.0, 16.0]), 12.5_f64.sqrt());
    }

    // --- MAE tests ---

    #[test]
    fn mae_known_value() {
        assert_relative_eq!(mae(&[10.0, 20.0], &[13.0, 16.0]), 3.5);
    }

    #[test]
    fn mae_not_above_rmse() {
        let t = [1350.0, 1450.0, 1250.0];
        let p = [1160.0, 1766.0, 1397.0];
        assert!(mae(&t, &p) <= rmse(&t, &p));
    }

    // --- PBIAS tests ---

    #[test]
    fn pbias_overestimation_positive() {
        assert_relative_eq!(pbias(&[100.0, 100.0], &[110.0, 120.0]), 15.0);
    }

    #[test]
    fn pbias_underestimation_negative() {
        assert!(pbias(&[100.0, 100.0], &[90.0, 95.0]) < 0.0);
    }

    #[test]
    fn pbias_zero_target_returns_inf() {
        assert_eq!(pbias(&[0.0, 0.0], &[1.0, 2.0]), f64::INFINITY);
    }

    // --- Max relative error tests ---

    #[test]
    fn max_abs_pct_error_picks_worst() {
        let e = max_abs_pct_error(&[100.0, 200.0], &[110.0, 150.0]);
        assert_relative_eq!(e, 25.0);
    }

    #[test]
    fn max_abs_pct_error_skips_zero_targets() {
        assert_eq!(max_abs_pct_error(&[0.0, 100.0], &[5.0, 100.0]), 0.0);
    }
}
