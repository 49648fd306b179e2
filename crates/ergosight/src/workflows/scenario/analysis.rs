use crate::workflows::pacing::Pacer;
use rand::Rng;
use serde::Serialize;
use std::time::Duration;
use tracing::info;

const TICKS_PER_STEP: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Pending,
    Processing,
    Complete,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisStep {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    #[serde(serialize_with = "serialize_millis")]
    pub duration: Duration,
    pub status: StepStatus,
    pub progress: u8,
}

fn serialize_millis<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u64(duration.as_millis() as u64)
}

/// Progress notification emitted after every tick of the simulated run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisProgress {
    pub step_index: usize,
    pub step_count: usize,
    pub step_id: &'static str,
    pub step_progress: u8,
    /// Whole-run completion as shown in the header, counting the active step.
    pub overall_percent: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisMetrics {
    pub cad_processing_time_ms: u64,
    pub geometry_entities: u32,
    pub clearance_checks: u32,
    pub ai_confidence: f64,
    pub parameters_evaluated: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub steps: Vec<AnalysisStep>,
    pub metrics: AnalysisMetrics,
}

/// Cosmetic "Run Analysis" pipeline: no geometry is processed, only paced progress.
#[derive(Debug, Clone)]
pub struct AnalysisPipeline {
    steps: Vec<AnalysisStep>,
}

impl AnalysisPipeline {
    pub fn standard() -> Self {
        let step = |id: &'static str,
                    label: &'static str,
                    description: &'static str,
                    millis: u64| AnalysisStep {
            id,
            label,
            description,
            duration: Duration::from_millis(millis),
            status: StepStatus::Pending,
            progress: 0,
        };

        Self {
            steps: vec![
                step(
                    "cad-load",
                    "Loading 3D CAD Geometry",
                    "Importing .stp surfaces, edges & B-rep topology",
                    800,
                ),
                step(
                    "geometry-process",
                    "Processing 3D Geometry",
                    "Normalizing vehicle frame, extracting semantic regions",
                    900,
                ),
                step(
                    "clearance-compute",
                    "Computing 3D Clearances",
                    "Calculating hip/head paths, edge distances & KPIs",
                    1000,
                ),
                step(
                    "ai-inference",
                    "Running AI Model Inference",
                    "Gradient boosted model with 3D geometric features",
                    700,
                ),
                step(
                    "validation",
                    "Validating Results",
                    "Cross-checking constraints & generating insights",
                    500,
                ),
            ],
        }
    }

    pub fn steps(&self) -> &[AnalysisStep] {
        &self.steps
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|step| step.duration).sum()
    }

    pub fn run<P, R, F>(
        &self,
        pacer: &P,
        rng: &mut R,
        parameters_evaluated: usize,
        mut on_progress: F,
    ) -> AnalysisReport
    where
        P: Pacer + ?Sized,
        R: Rng + ?Sized,
        F: FnMut(&AnalysisProgress),
    {
        let mut steps = self.steps.clone();
        let step_count = steps.len();

        for index in 0..step_count {
            steps[index].status = StepStatus::Processing;
            let tick = steps[index].duration / TICKS_PER_STEP;
            let overall_percent = (((index + 1) * 100) / step_count.max(1)) as u8;

            for _ in 0..TICKS_PER_STEP {
                pacer.pause(tick);
                let step = &mut steps[index];
                step.progress = (step.progress + 10).min(100);
                on_progress(&AnalysisProgress {
                    step_index: index,
                    step_count,
                    step_id: step.id,
                    step_progress: step.progress,
                    overall_percent,
                });
            }

            steps[index].status = StepStatus::Complete;
            steps[index].progress = 100;
        }

        let metrics = AnalysisMetrics {
            cad_processing_time_ms: self.total_duration().as_millis() as u64,
            geometry_entities: 1247 + rng.random_range(0..200),
            clearance_checks: 43 + rng.random_range(0..10),
            ai_confidence: 0.92 + rng.random::<f64>() * 0.06,
            parameters_evaluated,
        };

        info!(
            geometry_entities = metrics.geometry_entities,
            clearance_checks = metrics.clearance_checks,
            "scenario analysis complete"
        );

        AnalysisReport { steps, metrics }
    }
}

impl Default for AnalysisPipeline {
    fn default() -> Self {
        Self::standard()
    }
}
