use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ErrorBucket {
    pub error: f64,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SampleCoverage {
    pub vehicle: &'static str,
    pub samples: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionPoint {
    pub actual: f64,
    pub predicted: f64,
}

/// Validation figures for the rating model as reported on the performance view.
#[derive(Debug, Clone, Serialize)]
pub struct ModelPerformance {
    pub accuracy: f64,
    pub error_distribution: Vec<ErrorBucket>,
    pub coverage: Vec<SampleCoverage>,
}

impl ModelPerformance {
    pub fn standard() -> Self {
        let error_distribution = [
            (-2.0, 2),
            (-1.5, 8),
            (-1.0, 24),
            (-0.5, 48),
            (0.0, 65),
            (0.5, 51),
            (1.0, 22),
            (1.5, 6),
            (2.0, 1),
        ]
        .into_iter()
        .map(|(error, count)| ErrorBucket { error, count })
        .collect();

        let coverage = [
            ("XUV700", 245),
            ("XUV300", 198),
            ("Scorpio-N", 224),
            ("Thar", 187),
            ("XUV400", 156),
            ("Bolero", 203),
        ]
        .into_iter()
        .map(|(vehicle, samples)| SampleCoverage { vehicle, samples })
        .collect();

        Self {
            accuracy: 95.6,
            error_distribution,
            coverage,
        }
    }

    pub fn total_samples(&self) -> u32 {
        self.coverage.iter().map(|entry| entry.samples).sum()
    }

    /// Share of validation errors within one rating point.
    pub fn within_one_point(&self) -> f64 {
        let total: u32 = self.error_distribution.iter().map(|b| b.count).sum();
        if total == 0 {
            return 0.0;
        }
        let within: u32 = self
            .error_distribution
            .iter()
            .filter(|bucket| bucket.error.abs() <= 1.0)
            .map(|bucket| bucket.count)
            .sum();
        within as f64 / total as f64
    }

    /// Synthetic actual-vs-predicted scatter for the parity chart.
    pub fn scatter_sample<R: Rng + ?Sized>(rng: &mut R, points: usize) -> Vec<PredictionPoint> {
        (0..points)
            .map(|_| {
                let actual = 5.0 + rng.random::<f64>() * 4.0;
                let predicted = actual + (rng.random::<f64>() - 0.5) * 1.5;
                PredictionPoint {
                    actual: round_tenth(actual),
                    predicted: round_tenth(predicted),
                }
            })
            .collect()
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
