use ergosight::config::ScenarioConfig;
use ergosight::workflows::assistant::cad::{self, CadMetadata};
use ergosight::workflows::assistant::copilot::{self, CopilotVisual};
use ergosight::workflows::assistant::Dispatcher;
use ergosight::workflows::catalog::{AnthroProfile, VehicleCatalog};
use ergosight::workflows::scenario::{validate_baseline, ParameterOverride, ScenarioEngine};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) dashboard: Arc<Dashboard>,
}

/// Read-only domain services shared by every request.
pub(crate) struct Dashboard {
    pub(crate) catalog: VehicleCatalog,
    pub(crate) engine: ScenarioEngine,
    pub(crate) scenario: ScenarioConfig,
    pub(crate) copilot: Dispatcher<CopilotVisual>,
    pub(crate) cad: Dispatcher<CadMetadata>,
}

impl Dashboard {
    pub(crate) fn standard(scenario: ScenarioConfig) -> Self {
        Self {
            catalog: VehicleCatalog::standard(),
            engine: ScenarioEngine::standard(),
            scenario,
            copilot: copilot::dispatcher(),
            cad: cad::dispatcher(),
        }
    }
}

pub(crate) fn parse_profile(raw: &str) -> Result<AnthroProfile, String> {
    raw.parse::<AnthroProfile>().map_err(|err| err.to_string())
}

pub(crate) fn parse_baseline(raw: &str) -> Result<f64, String> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("failed to parse '{raw}' as a rating ({err})"))?;
    validate_baseline(value).map_err(|err| err.to_string())
}

pub(crate) fn parse_override(raw: &str) -> Result<ParameterOverride, String> {
    ParameterOverride::parse(raw).map_err(|err| err.to_string())
}

/// A file queued from the command line as `NAME:BYTES`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UploadRequest {
    pub(crate) name: String,
    pub(crate) size_bytes: u64,
}

pub(crate) fn parse_upload(raw: &str) -> Result<UploadRequest, String> {
    let (name, size) = raw
        .rsplit_once(':')
        .ok_or_else(|| format!("expected NAME:BYTES, got '{raw}'"))?;
    let size_bytes = size
        .trim()
        .parse::<u64>()
        .map_err(|err| format!("failed to parse '{size}' as a byte count ({err})"))?;
    Ok(UploadRequest {
        name: name.trim().to_string(),
        size_bytes,
    })
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    use metrics_exporter_prometheus::PrometheusBuilder;

    AppState {
        readiness: Arc::new(AtomicBool::new(true)),
        metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        dashboard: Arc::new(Dashboard::standard(ScenarioConfig {
            baseline_rating: 7.2,
            default_profile: AnthroProfile::P95Male,
        })),
    }
}
