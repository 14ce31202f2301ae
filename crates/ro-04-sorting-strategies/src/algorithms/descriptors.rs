//! Per-row time-series descriptors.
//!
//! Statistics follow the usual bias-corrected sample conventions: kurtosis is
//! excess kurtosis, both kurtosis and skewness are `0` for constant rows and
//! `NaN` when the row is too short.

use ndarray::ArrayView1;

/// Scalar summary of one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Descriptor {
    SumOfChanges,
    AbsoluteEnergy,
    AbsoluteMaximum,
    Kurtosis,
    Skewness,
    SampleEntropy,
    StandardDeviation,
    MeanSecondDerivativeCentral,
}

impl Descriptor {
    pub const ALL: [Descriptor; 8] = [
        Descriptor::SumOfChanges,
        Descriptor::AbsoluteEnergy,
        Descriptor::AbsoluteMaximum,
        Descriptor::Kurtosis,
        Descriptor::Skewness,
        Descriptor::SampleEntropy,
        Descriptor::StandardDeviation,
        Descriptor::MeanSecondDerivativeCentral,
    ];

    /// Ordering name.
    pub fn name(&self) -> &'static str {
        match self {
            Descriptor::SumOfChanges => "Sum of Changes",
            Descriptor::AbsoluteEnergy => "Absolute Energy",
            Descriptor::AbsoluteMaximum => "Absolute Maximum",
            Descriptor::Kurtosis => "Kurtosis",
            Descriptor::Skewness => "Skewness",
            Descriptor::SampleEntropy => "Sample Entropy",
            Descriptor::StandardDeviation => "Standard Deviation",
            Descriptor::MeanSecondDerivativeCentral => "Mean Second Derivative Central",
        }
    }

    pub fn compute(&self, x: ArrayView1<'_, f64>) -> f64 {
        match self {
            Descriptor::SumOfChanges => sum_of_changes(x),
            Descriptor::AbsoluteEnergy => x.iter().map(|v| v * v).sum(),
            Descriptor::AbsoluteMaximum => x.iter().fold(f64::NAN, |m, v| m.max(v.abs())),
            Descriptor::Kurtosis => kurtosis(x),
            Descriptor::Skewness => skewness(x),
            Descriptor::SampleEntropy => sample_entropy(x),
            Descriptor::StandardDeviation => population_std(x),
            Descriptor::MeanSecondDerivativeCentral => mean_second_derivative_central(x),
        }
    }
}

fn mean(x: ArrayView1<'_, f64>) -> f64 {
    x.sum() / x.len() as f64
}

/// Central moment sums `Σ (x - mean)^k` for k = 2, 3, 4.
fn moment_sums(x: ArrayView1<'_, f64>) -> (f64, f64, f64) {
    let m = mean(x);
    x.iter().fold((0.0, 0.0, 0.0), |(m2, m3, m4), v| {
        let d = v - m;
        let d2 = d * d;
        (m2 + d2, m3 + d2 * d, m4 + d2 * d2)
    })
}

pub fn sum_of_changes(x: ArrayView1<'_, f64>) -> f64 {
    (1..x.len()).map(|i| (x[i] - x[i - 1]).abs()).sum()
}

pub fn population_std(x: ArrayView1<'_, f64>) -> f64 {
    let (m2, _, _) = moment_sums(x);
    (m2 / x.len() as f64).sqrt()
}

/// Bias-corrected excess kurtosis.
pub fn kurtosis(x: ArrayView1<'_, f64>) -> f64 {
    let n = x.len() as f64;
    if x.len() < 4 {
        return f64::NAN;
    }
    let (m2, _, m4) = moment_sums(x);
    if m2 == 0.0 {
        return 0.0;
    }
    let adj = 3.0 * (n - 1.0).powi(2) / ((n - 2.0) * (n - 3.0));
    let numer = n * (n + 1.0) * (n - 1.0) * m4;
    let denom = (n - 2.0) * (n - 3.0) * m2 * m2;
    numer / denom - adj
}

/// Bias-corrected sample skewness.
pub fn skewness(x: ArrayView1<'_, f64>) -> f64 {
    let n = x.len() as f64;
    if x.len() < 3 {
        return f64::NAN;
    }
    let (m2, m3, _) = moment_sums(x);
    if m2 == 0.0 {
        return 0.0;
    }
    let g1 = (m3 / n) / (m2 / n).powf(1.5);
    (n * (n - 1.0)).sqrt() / (n - 2.0) * g1
}

/// Sample entropy with template length 2 and tolerance `0.2 * std`.
pub fn sample_entropy(x: ArrayView1<'_, f64>) -> f64 {
    const M: usize = 2;
    let tolerance = 0.2 * population_std(x);
    let values = x.to_vec();

    let matches = |len: usize| -> usize {
        if values.len() < len {
            return 0;
        }
        let count = values.len() - len + 1;
        let mut total = 0;
        for i in 0..count {
            for j in 0..count {
                if i == j {
                    continue;
                }
                let within = (0..len).all(|k| (values[i + k] - values[j + k]).abs() <= tolerance);
                if within {
                    total += 1;
                }
            }
        }
        total
    };

    let b = matches(M) as f64;
    let a = matches(M + 1) as f64;
    -(a / b).ln()
}

pub fn mean_second_derivative_central(x: ArrayView1<'_, f64>) -> f64 {
    let n = x.len();
    if n < 3 {
        return f64::NAN;
    }
    (x[n - 1] - x[n - 2] - x[1] + x[0]) / (2.0 * (n as f64 - 2.0))
}
