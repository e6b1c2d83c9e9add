//! Small numeric helpers shared by the aggregator and the comparator.

/// Decimal places used for every reported average and deviation.
pub const REPORT_PRECISION: u32 = 2;

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10_f64.powi(places as i32);
    (value * scale).round() / scale
}

pub fn round2(value: f64) -> f64 {
    round_to(value, REPORT_PRECISION)
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Square root of the unbiased (n - 1) sample variance.
///
/// `None` below two values, where the estimator is undefined.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;
    let squared: f64 = values.iter().map(|value| (value - mean).powi(2)).sum();
    Some((squared / (values.len() - 1) as f64).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_places() {
        assert_eq!(round2(693.7649), 693.76);
        assert_eq!(round2(245.096_1), 245.1);
        assert_eq!(round2(-1.005_1), -1.01);
    }

    #[test]
    fn rounding_is_idempotent() {
        for value in [116.38, 0.0, 555.34, 1e6 + 0.01, 181.18] {
            assert_eq!(round2(value), value);
            assert_eq!(round2(round2(value * 1.000_3)), round2(value * 1.000_3));
        }
    }

    #[test]
    fn sample_std_dev_matches_hand_computation() {
        // mean 5, squared deviations sum 32, n - 1 = 7
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let sd = sample_std_dev(&values).expect("defined");
        assert!((sd - (32.0_f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn sample_std_dev_needs_two_values() {
        assert_eq!(sample_std_dev(&[]), None);
        assert_eq!(sample_std_dev(&[42.0]), None);
        assert_eq!(sample_std_dev(&[3.0, 3.0]), Some(0.0));
    }

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[1.0, 2.0]), Some(1.5));
    }
}
