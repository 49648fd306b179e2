//! Scenario lab: linear what-if rating model, insight ranking, and the
//! simulated analysis run.

mod analysis;
mod engine;
mod overrides;
pub mod parameters;
mod session;

pub use analysis::{
    AnalysisMetrics, AnalysisPipeline, AnalysisProgress, AnalysisReport, AnalysisStep, StepStatus,
};
pub use engine::{
    format_signed, profile_bias, ScenarioEngine, ScenarioInsight, MAX_INSIGHTS, MAX_RATING,
    MIN_RATING,
};
pub use overrides::{apply_overrides, parse_overrides, ParameterOverride};
pub use parameters::{
    DesignParameters, ParameterConfig, ParameterKey, ParameterTable, ParameterTableError, Unit,
};
pub use session::{ScenarioEvaluation, ScenarioSession, ScenarioSnapshot, NO_INSIGHTS_HINT};

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("unknown design parameter '{name}'")]
    UnknownParameter { name: String },
    #[error("invalid parameter override '{entry}' (expected key=value with a finite number)")]
    InvalidOverride { entry: String },
    #[error("baseline rating {value} must be between 1 and 10")]
    InvalidBaseline { value: f64 },
    #[error("failed to read parameter overrides: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Table(#[from] ParameterTableError),
}

/// Accepts a starting rating only when it lies on the 1-10 scale.
pub fn validate_baseline(value: f64) -> Result<f64, ScenarioError> {
    if value.is_finite() && (MIN_RATING..=MAX_RATING).contains(&value) {
        Ok(value)
    } else {
        Err(ScenarioError::InvalidBaseline { value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_must_sit_on_rating_scale() {
        assert_eq!(validate_baseline(7.2).ok(), Some(7.2));
        assert!(validate_baseline(10.0).is_ok());
        assert!(matches!(
            validate_baseline(0.5),
            Err(ScenarioError::InvalidBaseline { .. })
        ));
        assert!(validate_baseline(f64::NAN).is_err());
    }
}
