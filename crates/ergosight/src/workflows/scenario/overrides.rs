use super::parameters::{DesignParameters, ParameterKey};
use super::ScenarioError;
use serde::Deserialize;
use std::io::Read;

/// A single requested parameter value, before clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterOverride {
    pub key: ParameterKey,
    pub value: f64,
}

impl ParameterOverride {
    /// Parses `key=value`, e.g. `sill_height=555`.
    pub fn parse(raw: &str) -> Result<Self, ScenarioError> {
        let (key, value) = raw
            .split_once('=')
            .ok_or_else(|| ScenarioError::InvalidOverride {
                entry: raw.to_string(),
            })?;
        build_override(key, value)
    }
}

#[derive(Debug, Deserialize)]
struct OverrideRow {
    key: String,
    value: String,
}

/// Reads `key,value` rows from a CSV export of scenario edits.
pub fn parse_overrides<R: Read>(reader: R) -> Result<Vec<ParameterOverride>, ScenarioError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut overrides = Vec::new();
    for record in csv_reader.deserialize::<OverrideRow>() {
        let row = record?;
        if row.key.is_empty() && row.value.is_empty() {
            continue;
        }
        overrides.push(build_override(&row.key, &row.value)?);
    }

    Ok(overrides)
}

/// Applies overrides in order; later entries for the same key win.
pub fn apply_overrides(base: &DesignParameters, overrides: &[ParameterOverride]) -> DesignParameters {
    overrides
        .iter()
        .fold(*base, |params, entry| params.with(entry.key, entry.value))
}

fn build_override(key: &str, value: &str) -> Result<ParameterOverride, ScenarioError> {
    let key = key
        .parse::<ParameterKey>()
        .map_err(|name| ScenarioError::UnknownParameter { name })?;
    let value = value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ScenarioError::InvalidOverride {
            entry: format!("{key}={}", value.trim()),
        })?;

    Ok(ParameterOverride { key, value })
}
