//! Descriptive statistics over sampled values.

use anyhow::{bail, Result};

/// Arithmetic mean of a sample.
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        bail!("cannot take the mean of an empty sample");
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation of a sample (divides by the sample count).
pub fn standard_deviation(values: &[f64]) -> Result<f64> {
    let mean = mean(values)?;
    let sum_of_squares: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    Ok((sum_of_squares / values.len() as f64).sqrt())
}

#[cfg(test)]
mod tests {
    use super::{mean, standard_deviation};

    fn assert_err_contains<T: std::fmt::Debug>(result: anyhow::Result<T>, needle: &str) {
        let err = result.expect_err("expected error");
        let message = format!("{err}");
        assert!(
            message.contains(needle),
            "expected error to contain \"{needle}\", got \"{message}\""
        );
    }

    #[test]
    fn mean_of_sample() {
        let m = mean(&[1.0, 2.0, 3.0, 4.0]).expect("sample is nonempty");
        assert_eq!(m, 2.5);
    }

    #[test]
    fn population_standard_deviation_of_known_sample() {
        let sigma = standard_deviation(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0])
            .expect("sample is nonempty");
        assert!((sigma - 2.0).abs() < 1e-12);
    }

    #[test]
    fn constant_sample_has_zero_deviation() {
        let sigma = standard_deviation(&[3.0, 3.0, 3.0]).expect("sample is nonempty");
        assert_eq!(sigma, 0.0);
    }

    #[test]
    fn empty_sample_is_rejected() {
        assert_err_contains(mean(&[]), "empty sample");
        assert_err_contains(standard_deviation(&[]), "empty sample");
    }
}
