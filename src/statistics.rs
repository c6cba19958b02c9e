//! Sample statistics over per-trial thresholds.

/// Summary statistics the estimator needs from its sample.
pub trait SampleStatistics {
    /// Arithmetic mean. NaN for an empty sample.
    fn mean(&self, sample: &[f64]) -> f64;

    /// Sample standard deviation (denominator `len - 1`). NaN when fewer than
    /// two values are present.
    fn stddev(&self, sample: &[f64]) -> f64;
}

/// Plain first and second moments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SampleMoments;

impl SampleStatistics for SampleMoments {
    fn mean(&self, sample: &[f64]) -> f64 {
        if sample.is_empty() {
            return f64::NAN;
        }
        sample.iter().sum::<f64>() / sample.len() as f64
    }

    fn stddev(&self, sample: &[f64]) -> f64 {
        let len = sample.len();
        if len < 2 {
            return f64::NAN;
        }
        let mu = self.mean(sample);
        let sum_sq: f64 = sample.iter().map(|x| (x - mu) * (x - mu)).sum();
        (sum_sq / (len - 1) as f64).sqrt()
    }
}
