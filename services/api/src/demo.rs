use crate::infra::{parse_baseline, parse_override, parse_profile, parse_upload, UploadRequest};
use clap::Args;
use ergosight::config::AppConfig;
use ergosight::error::AppError;
use ergosight::workflows::assistant::cad::{self, CadMetadata};
use ergosight::workflows::assistant::copilot::{self, CopilotVisual};
use ergosight::workflows::assistant::markup::strip_markup;
use ergosight::workflows::assistant::{AssistantKind, ChatMessage, ChatSession, Role};
use ergosight::workflows::catalog::{AnthroProfile, ModelPerformance, RatingBand, VehicleCatalog};
use ergosight::workflows::pacing::{InstantPacer, Pacer, ThreadPacer};
use chrono::{DateTime, Utc};
use ergosight::workflows::scenario::{
    apply_overrides, parse_overrides, AnalysisPipeline, AnalysisReport, ParameterOverride,
    ParameterTable, ScenarioEvaluation, ScenarioSession,
};
use ergosight::workflows::upload::{
    format_file_size, UploadStatus, UploadTracker, PROGRESS_TICK,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct PortfolioArgs {
    /// Number of weakest vehicles listed per profile
    #[arg(long, default_value_t = 3)]
    pub(crate) worst: usize,
}

#[derive(Args, Debug)]
pub(crate) struct ScenarioArgs {
    /// Anthropometric profile (P5F, P50M, P95M, Senior). Defaults to ERGO_DEFAULT_PROFILE.
    #[arg(long, value_parser = parse_profile)]
    pub(crate) profile: Option<AnthroProfile>,
    /// Starting rating on the 1-10 scale. Defaults to ERGO_BASELINE_RATING.
    #[arg(long, value_parser = parse_baseline)]
    pub(crate) baseline: Option<f64>,
    /// Proposed parameter value as key=value (repeatable), e.g. sill_height=555
    #[arg(long = "set", value_parser = parse_override)]
    pub(crate) set: Vec<ParameterOverride>,
    /// CSV file with key,value rows applied before any --set values
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Also run the simulated CAD analysis pipeline
    #[arg(long)]
    pub(crate) analyze: bool,
    /// Seed for the simulated analysis metrics
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Skip the paced progress of the simulated analysis
    #[arg(long)]
    pub(crate) no_delay: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ChatArgs {
    /// Assistant to talk to: copilot or cad
    #[arg(long, default_value = "copilot")]
    pub(crate) assistant: AssistantKind,
    /// Reply immediately instead of waiting out the configured thinking delay
    #[arg(long)]
    pub(crate) no_delay: bool,
    /// Questions to ask, in order
    pub(crate) queries: Vec<String>,
}

#[derive(Args, Debug)]
pub(crate) struct UploadsArgs {
    /// Queue a STEP file as NAME:BYTES (repeatable), e.g. XUV400_EV.stp:20000000
    #[arg(long = "add", value_parser = parse_upload)]
    pub(crate) add: Vec<UploadRequest>,
    /// Maximum progress ticks to simulate
    #[arg(long, default_value_t = 40)]
    pub(crate) ticks: usize,
    /// Seed for the simulated processing progress
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Skip the pause between progress ticks
    #[arg(long)]
    pub(crate) no_delay: bool,
}

pub(crate) fn run_portfolio(args: PortfolioArgs) -> Result<(), AppError> {
    let catalog = VehicleCatalog::standard();
    let summary = catalog.portfolio_summary();

    println!("Ingress/egress portfolio");
    print!(
        "- {} models | average {:.1}/10 | {} at risk",
        summary.model_coverage, summary.average_rating, summary.at_risk_count
    );
    match &summary.best_performer {
        Some(best) => println!(" | best performer {} ({:.1})", best.name, best.avg_rating),
        None => println!(),
    }

    let performance = ModelPerformance::standard();
    println!(
        "- Model accuracy {:.1}% | {:.0}% of validation errors within one point | {} samples",
        performance.accuracy,
        performance.within_one_point() * 100.0,
        performance.total_samples()
    );

    println!("\nRating heatmap");
    print!("  {:<12}", "Vehicle");
    for profile in AnthroProfile::ordered() {
        print!(" {:>12}", profile.label());
    }
    println!();
    for row in catalog.heatmap() {
        print!("  {:<12}", row.vehicle);
        for cell in &row.cells {
            print!(" {:>12}", format!("{:.1} {}", cell.rating, band_marker(cell.band)));
        }
        println!();
    }
    println!("  (G = good, F = fair, R = at risk)");

    println!("\nWeakest vehicles per profile");
    for profile in AnthroProfile::ordered() {
        let names: Vec<String> = catalog
            .worst_for(profile, args.worst)
            .into_iter()
            .map(|vehicle| format!("{} {:.1}", vehicle.name, vehicle.ratings.get(profile)))
            .collect();
        println!("- {}: {}", profile.label(), names.join(", "));
    }

    Ok(())
}

fn band_marker(band: RatingBand) -> &'static str {
    match band {
        RatingBand::Good => "G",
        RatingBand::Fair => "F",
        RatingBand::AtRisk => "R",
    }
}

pub(crate) fn run_scenario(args: ScenarioArgs) -> Result<(), AppError> {
    let ScenarioArgs {
        profile,
        baseline,
        set,
        csv,
        analyze,
        seed,
        no_delay,
    } = args;

    let config = AppConfig::load()?;
    let profile = profile.unwrap_or(config.scenario.default_profile);
    let baseline = baseline.unwrap_or(config.scenario.baseline_rating);

    let mut overrides = match csv {
        Some(path) => parse_overrides(File::open(path)?)?,
        None => Vec::new(),
    };
    overrides.extend(set);

    let mut session = ScenarioSession::standard(baseline, profile);
    let proposed = apply_overrides(session.current(), &overrides);
    session.propose(&proposed);

    render_evaluation(&session.evaluate());

    if analyze {
        let pipeline = AnalysisPipeline::standard();
        let pacer: &dyn Pacer = if no_delay { &InstantPacer } else { &ThreadPacer };
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        println!("\nRunning analysis");
        let report = pipeline.run(pacer, &mut rng, ParameterTable::standard().len(), |progress| {
            if progress.step_progress == 100 {
                println!(
                    "  [{:>3}%] {} complete",
                    progress.overall_percent, progress.step_id
                );
            }
        });
        render_analysis(&report);
    }

    Ok(())
}

pub(crate) fn run_uploads(args: UploadsArgs) -> Result<(), AppError> {
    let UploadsArgs {
        add,
        ticks,
        seed,
        no_delay,
    } = args;

    let pacer: &dyn Pacer = if no_delay { &InstantPacer } else { &ThreadPacer };
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut tracker = UploadTracker::seeded();
    let ticked = process_uploads(&mut tracker, &add, Utc::now(), ticks, pacer, &mut rng)?;
    println!("Processed {ticked} progress tick(s)\n");
    render_uploads(&tracker);

    Ok(())
}

/// Registers `files` and advances the tracker until it settles or `max_ticks` elapse.
fn process_uploads<R: Rng + ?Sized>(
    tracker: &mut UploadTracker,
    files: &[UploadRequest],
    at: DateTime<Utc>,
    max_ticks: usize,
    pacer: &dyn Pacer,
    rng: &mut R,
) -> Result<usize, AppError> {
    for file in files {
        tracker.register(&file.name, file.size_bytes, at)?;
    }

    let mut ticks = 0;
    while !tracker.is_settled() && ticks < max_ticks {
        pacer.pause(PROGRESS_TICK);
        tracker.advance(rng);
        ticks += 1;
    }
    Ok(ticks)
}

fn render_uploads(tracker: &UploadTracker) {
    println!("CAD uploads");
    for upload in tracker.uploads() {
        let detail = match upload.status {
            UploadStatus::Completed => {
                format!("{} KPIs", upload.kpis_extracted.unwrap_or_default())
            }
            _ => format!("{:.0}%", upload.progress),
        };
        println!(
            "- {:<28} {:>10}  {:<10} {:<10} {}",
            upload.name,
            format_file_size(upload.size_bytes),
            upload.status.label(),
            detail,
            upload.vehicle.as_deref().unwrap_or("-")
        );
    }

    let stats = tracker.stats();
    println!(
        "{} files | {} completed | {} processing | {} total",
        stats.total,
        stats.completed,
        stats.processing,
        format_file_size(stats.total_bytes)
    );
}

fn render_evaluation(evaluation: &ScenarioEvaluation) {
    println!("Scenario for {}", evaluation.profile.label());
    println!(
        "- Current {:.1} -> predicted {:.1} ({:+.1}) [{}]",
        evaluation.current_rating,
        evaluation.predicted_rating,
        evaluation.delta,
        evaluation.band.label()
    );

    if let Some(hint) = evaluation.insight_hint {
        println!("- {hint}");
        return;
    }

    println!("Impact analysis");
    for insight in &evaluation.insights {
        println!(
            "- {} {} -> {} rating: {}",
            insight.label, insight.change, insight.impact, insight.description
        );
    }
}

fn render_analysis(report: &AnalysisReport) {
    let metrics = &report.metrics;
    println!(
        "- {} ms CAD processing | {} geometry entities | {} clearance checks",
        metrics.cad_processing_time_ms, metrics.geometry_entities, metrics.clearance_checks
    );
    println!(
        "- AI confidence {:.1}% | {} parameters evaluated",
        metrics.ai_confidence * 100.0,
        metrics.parameters_evaluated
    );
}

pub(crate) fn run_chat(args: ChatArgs) -> Result<(), AppError> {
    let ChatArgs {
        assistant,
        no_delay,
        queries,
    } = args;

    let config = AppConfig::load()?;
    let delay = assistant.delay(&config.assistant);
    let pacer: &dyn Pacer = if no_delay { &InstantPacer } else { &ThreadPacer };

    println!("{}", assistant.label());
    match assistant {
        AssistantKind::Copilot => {
            let mut session = ChatSession::new(copilot::dispatcher(), assistant.greeting(), delay);
            converse(&mut session, &queries, pacer, render_copilot_visual)?;
            if queries.is_empty() {
                println!("\nSuggested questions:");
                for query in VehicleCatalog::standard().suggested_queries() {
                    println!("- {query}");
                }
            }
        }
        AssistantKind::Cad => {
            let mut session = ChatSession::new(cad::dispatcher(), assistant.greeting(), delay);
            converse(&mut session, &queries, pacer, render_cad_metadata)?;
        }
    }

    Ok(())
}

fn converse<P: Clone>(
    session: &mut ChatSession<P>,
    queries: &[String],
    pacer: &dyn Pacer,
    render_payload: fn(&P),
) -> Result<(), AppError> {
    if let Some(greeting) = session.messages().first() {
        render_message(greeting, render_payload);
    }

    for query in queries {
        let reply = session.submit(query, pacer)?.clone();
        if let Some(question) = session.messages().iter().rev().nth(1) {
            render_message(question, render_payload);
        }
        render_message(&reply, render_payload);
    }

    Ok(())
}

fn render_message<P>(message: &ChatMessage<P>, render_payload: fn(&P)) {
    let speaker = match message.role {
        Role::User => "you",
        Role::Assistant => "assistant",
    };
    println!("\n[{}] {}:", message.timestamp.format("%H:%M"), speaker);
    for line in strip_markup(&message.content).lines() {
        println!("  {line}");
    }
    if let Some(payload) = &message.payload {
        render_payload(payload);
    }
}

fn render_copilot_visual(visual: &CopilotVisual) {
    match visual {
        CopilotVisual::Table { vehicles } => {
            println!("  Performance issues:");
            for (index, vehicle) in vehicles.iter().enumerate() {
                println!(
                    "    {}. {} {:.1}/10 - {}",
                    index + 1,
                    vehicle.name,
                    vehicle.rating,
                    vehicle.issue.unwrap_or("")
                );
            }
        }
        CopilotVisual::Recommendations { recommendations } => {
            println!("  Recommendations:");
            for (index, rec) in recommendations.iter().enumerate() {
                println!(
                    "    {}. {} ({} -> {}) +{:.1}: {}",
                    index + 1,
                    rec.change,
                    rec.from,
                    rec.to,
                    rec.rating,
                    rec.impact
                );
            }
        }
        CopilotVisual::Comparison(comparison) => {
            println!(
                "  {} {:.1}/10 vs {} {:.1}/10",
                comparison.left.name,
                comparison.left.rating,
                comparison.right.name,
                comparison.right.rating
            );
            for difference in &comparison.differences {
                println!("    - {difference}");
            }
        }
    }
}

fn render_cad_metadata(metadata: &CadMetadata) {
    if let Some(code) = metadata.code {
        println!("  ---");
        for line in code.lines() {
            println!("  {line}");
        }
        println!("  ---");
    }
    if let Some(accuracy) = metadata.accuracy {
        println!("  Accuracy: {accuracy}");
    }
    if let Some(complexity) = metadata.complexity {
        println!("  Complexity: {}", complexity.label());
    }
    if let Some(time) = metadata.processing_time {
        println!("  Processing time: {time}");
    }
    if !metadata.tools.is_empty() {
        println!("  Tools: {}", metadata.tools.join(", "));
    }
    for tip in &metadata.tips {
        println!("  Tip: {tip}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ergosight::workflows::upload::{UploadError, KPIS_PER_MODEL};

    #[test]
    fn queued_uploads_settle_with_extracted_kpis() {
        let mut tracker = UploadTracker::seeded();
        let files = [UploadRequest {
            name: "XUV400_EV.stp".to_string(),
            size_bytes: 20_000_000,
        }];
        let mut rng = StdRng::seed_from_u64(11);

        let ticks = process_uploads(
            &mut tracker,
            &files,
            Utc::now(),
            1_000,
            &InstantPacer,
            &mut rng,
        )
        .expect("uploads process");

        assert!(ticks > 0);
        assert!(tracker.is_settled());
        let queued = &tracker.uploads()[0];
        assert_eq!(queued.name, "XUV400_EV.stp");
        assert_eq!(queued.kpis_extracted, Some(KPIS_PER_MODEL));
        assert_eq!(tracker.stats().completed, 4);
    }

    #[test]
    fn non_step_files_are_rejected() {
        let mut tracker = UploadTracker::seeded();
        let files = [UploadRequest {
            name: "drawing.pdf".to_string(),
            size_bytes: 1_024,
        }];
        let mut rng = StdRng::seed_from_u64(11);

        let err = process_uploads(
            &mut tracker,
            &files,
            Utc::now(),
            10,
            &InstantPacer,
            &mut rng,
        )
        .expect_err("pdf is not a STEP file");
        assert!(matches!(
            err,
            AppError::Upload(UploadError::UnsupportedFormat { .. })
        ));
        assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(tracker.stats().total, 3);
    }
}
