pub struct MseLoss;

impl MseLoss {
    /// Sum of squared errors: Σ(predicted − expected)²
    pub fn sum_squared(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum()
    }

    /// Scalar MSE: mean((predicted - expected)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len() as f64;
        MseLoss::sum_squared(predicted, expected) / n
    }

    /// Per-output gradient of the half squared error: predicted - expected
    #[inline]
    pub fn derivative(predicted: f64, expected: f64) -> f64 {
        predicted - expected
    }
}

#[cfg(test)]
mod tests {
    use super::MseLoss;

    #[test]
    fn loss_is_mean_of_sum() {
        let p = [0.5, 1.0, 0.0];
        let y = [0.0, 1.0, 1.0];
        assert_eq!(MseLoss::sum_squared(&p, &y), 1.25);
        assert!((MseLoss::loss(&p, &y) - 1.25 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn perfect_prediction_has_no_loss() {
        let y = [0.25, 0.75];
        assert_eq!(MseLoss::loss(&y, &y), 0.0);
        assert_eq!(MseLoss::derivative(0.25, 0.25), 0.0);
    }
}
