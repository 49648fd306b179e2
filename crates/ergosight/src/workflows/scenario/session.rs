use super::engine::{ScenarioEngine, ScenarioInsight};
use super::parameters::{DesignParameters, ParameterKey};
use crate::workflows::catalog::{AnthroProfile, RatingBand};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

pub const NO_INSIGHTS_HINT: &str = "Adjust parameters to see impact analysis";

/// What-if state for one scenario lab view: an immutable baseline and an editable proposal.
#[derive(Debug, Clone)]
pub struct ScenarioSession {
    engine: ScenarioEngine,
    baseline_rating: f64,
    profile: AnthroProfile,
    current: DesignParameters,
    proposed: DesignParameters,
}

impl ScenarioSession {
    pub fn new(
        engine: ScenarioEngine,
        baseline_rating: f64,
        current: DesignParameters,
        profile: AnthroProfile,
    ) -> Self {
        let current = engine.table().clamp(&current);
        Self {
            engine,
            baseline_rating,
            profile,
            current,
            proposed: current,
        }
    }

    pub fn standard(baseline_rating: f64, profile: AnthroProfile) -> Self {
        Self::new(
            ScenarioEngine::standard(),
            baseline_rating,
            DesignParameters::baseline(),
            profile,
        )
    }

    pub fn profile(&self) -> AnthroProfile {
        self.profile
    }

    pub fn set_profile(&mut self, profile: AnthroProfile) {
        self.profile = profile;
    }

    pub fn baseline_rating(&self) -> f64 {
        self.baseline_rating
    }

    pub fn current(&self) -> &DesignParameters {
        &self.current
    }

    pub fn proposed(&self) -> &DesignParameters {
        &self.proposed
    }

    /// Applies an edit, clamping silently into the configured range. Returns the stored value.
    pub fn set_parameter(&mut self, key: ParameterKey, value: f64) -> f64 {
        let applied = match self.engine.table().config(key) {
            Some(config) if value.is_nan() => config.clamp(self.proposed.get(key)),
            Some(config) => config.clamp(value),
            None => value,
        };
        if applied != value {
            debug!(parameter = %key, requested = value, applied, "clamped scenario edit");
        }
        self.proposed.set(key, applied);
        applied
    }

    /// Replaces the whole proposal, clamping every field.
    pub fn propose(&mut self, proposed: &DesignParameters) {
        self.proposed = self.engine.table().clamp(proposed);
    }

    pub fn reset_proposed(&mut self) {
        self.proposed = self.current;
    }

    pub fn predicted_rating(&self) -> f64 {
        self.engine.predict_rating(
            self.baseline_rating,
            &self.current,
            &self.proposed,
            self.profile,
        )
    }

    pub fn insights(&self) -> Vec<ScenarioInsight> {
        self.engine.rank_insights(&self.current, &self.proposed)
    }

    pub fn evaluate(&self) -> ScenarioEvaluation {
        let predicted_rating = self.predicted_rating();
        let insights = self.insights();
        let insight_hint = insights.is_empty().then_some(NO_INSIGHTS_HINT);

        ScenarioEvaluation {
            profile: self.profile,
            current_rating: self.baseline_rating,
            predicted_rating,
            delta: predicted_rating - self.baseline_rating,
            band: RatingBand::from_rating(predicted_rating),
            insights,
            insight_hint,
        }
    }

    /// Serializable record of the proposal as it stands at `now`.
    pub fn snapshot(&self, now: DateTime<Utc>) -> ScenarioSnapshot {
        ScenarioSnapshot {
            name: format!("Scenario_{}", now.format("%Y-%m-%d")),
            profile: self.profile,
            parameters: self.proposed,
            rating: self.predicted_rating(),
            timestamp: now,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioEvaluation {
    pub profile: AnthroProfile,
    pub current_rating: f64,
    pub predicted_rating: f64,
    pub delta: f64,
    pub band: RatingBand,
    pub insights: Vec<ScenarioInsight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insight_hint: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioSnapshot {
    pub name: String,
    pub profile: AnthroProfile,
    pub parameters: DesignParameters,
    pub rating: f64,
    pub timestamp: DateTime<Utc>,
}
