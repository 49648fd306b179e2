use super::parameters::{DesignParameters, ParameterKey, ParameterTable};
use crate::workflows::catalog::AnthroProfile;
use serde::Serialize;

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 10.0;
pub const MAX_INSIGHTS: usize = 4;

/// One ranked parameter change and its contribution to the predicted rating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioInsight {
    pub key: ParameterKey,
    pub label: &'static str,
    /// Signed change with unit, e.g. `+30.0 mm`.
    pub change: String,
    /// Signed one-decimal rating impact, e.g. `+0.5`.
    pub impact: String,
    #[serde(skip)]
    pub impact_value: f64,
    pub description: &'static str,
}

/// Linear sensitivity model mapping parameter deltas onto a 1-10 rating.
#[derive(Debug, Clone)]
pub struct ScenarioEngine {
    table: ParameterTable,
}

impl ScenarioEngine {
    pub fn new(table: ParameterTable) -> Self {
        Self { table }
    }

    pub fn standard() -> Self {
        Self::new(ParameterTable::standard())
    }

    pub fn table(&self) -> &ParameterTable {
        &self.table
    }

    /// Predicted rating for `proposed` relative to `current`.
    ///
    /// Parameter values are trusted to be in range; only the final rating is clamped.
    pub fn predict_rating(
        &self,
        baseline: f64,
        current: &DesignParameters,
        proposed: &DesignParameters,
        profile: AnthroProfile,
    ) -> f64 {
        let mut rating = baseline;
        for config in self.table.configs() {
            let delta = proposed.get(config.key) - current.get(config.key);
            rating += delta * config.weight;
        }
        rating += profile_bias(profile);

        rating.clamp(MIN_RATING, MAX_RATING)
    }

    /// Up to four parameter changes ordered by descending displayed impact.
    pub fn rank_insights(
        &self,
        current: &DesignParameters,
        proposed: &DesignParameters,
    ) -> Vec<ScenarioInsight> {
        let mut insights: Vec<ScenarioInsight> = self
            .table
            .configs()
            .iter()
            .filter_map(|config| {
                let delta = proposed.get(config.key) - current.get(config.key);
                if delta == 0.0 {
                    return None;
                }
                // ranked and filtered on the displayed value, not the raw product
                let impact = format_signed(delta * config.weight);
                let impact_value = impact.parse::<f64>().unwrap_or(0.0);
                if impact_value == 0.0 {
                    return None;
                }
                Some(ScenarioInsight {
                    key: config.key,
                    label: config.label,
                    change: format!("{} {}", format_signed(delta), config.unit.symbol()),
                    impact,
                    impact_value,
                    description: config.insight,
                })
            })
            .collect();

        // stable: equal magnitudes keep declaration order
        insights.sort_by(|a, b| b.impact_value.abs().total_cmp(&a.impact_value.abs()));
        insights.truncate(MAX_INSIGHTS);
        insights
    }
}

impl Default for ScenarioEngine {
    fn default() -> Self {
        Self::standard()
    }
}

pub fn profile_bias(profile: AnthroProfile) -> f64 {
    match profile {
        AnthroProfile::Senior => -0.2,
        AnthroProfile::P5Female => 0.1,
        AnthroProfile::P50Male | AnthroProfile::P95Male => 0.0,
    }
}

/// Signed fixed-point rendering: `+` for zero and positives, one decimal place.
///
/// Rounds the exact binary value, so `30.0 * 0.015` (just under 0.45) renders
/// as `+0.4`. Exact ties round away from zero and a result of zero is always `+0.0`.
pub fn format_signed(value: f64) -> String {
    let magnitude = fixed_tenth(value.abs());
    if value < 0.0 && magnitude != "0.0" {
        format!("-{magnitude}")
    } else {
        format!("+{magnitude}")
    }
}

fn fixed_tenth(magnitude: f64) -> String {
    // only quarters can sit exactly on a hundredths tie
    let quarters = magnitude * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        format!("{:.1}", (magnitude * 10.0).ceil() / 10.0)
    } else {
        format!("{magnitude:.1}")
    }
}
