//! CAD preprocessing assistant: guidance on turning `.stp` assemblies into
//! the geometric KPIs the rating model consumes.

mod replies;

use super::dispatcher::{AssistantReply, Dispatcher, IntentRule, Matcher, FALLBACK_INTENT};
use serde::Serialize;

pub const GREETING: &str = replies::GREETING;

pub type CadReply = AssistantReply<CadMetadata>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    pub const fn label(self) -> &'static str {
        match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
        }
    }
}

/// Supporting detail shown beneath a CAD assistant answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CadMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity: Option<Complexity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tips: Vec<&'static str>,
}

pub fn dispatcher() -> Dispatcher<CadMetadata> {
    Dispatcher::new(
        vec![
            IntentRule::new(
                "preprocessing",
                Matcher::any(&["preprocessing", "method"]),
                preprocessing,
            ),
            IntentRule::new(
                "door_geometry",
                Matcher::all(vec![
                    Matcher::Contains("door"),
                    Matcher::any(&["extract", "geometry"]),
                ]),
                door_geometry,
            ),
            IntentRule::new(
                "feature_pipeline",
                Matcher::any(&["feature", "pipeline"]),
                feature_pipeline,
            ),
            IntentRule::new(
                "seat_geometry",
                Matcher::all(vec![
                    Matcher::Contains("seat"),
                    Matcher::not(Matcher::Contains("accuracy")),
                ]),
                seat_geometry,
            ),
            IntentRule::new(
                "anthropometry",
                Matcher::any(&["anthropometry", "anthropometric"]),
                anthropometry,
            ),
            IntentRule::new(
                "accuracy",
                Matcher::any(&["accuracy", "95", "improve"]),
                accuracy,
            ),
        ],
        fallback,
    )
}

fn preprocessing() -> CadReply {
    AssistantReply::with_payload(
        "preprocessing",
        replies::PREPROCESSING,
        CadMetadata {
            accuracy: Some("95-96% with full 3D pipeline (vs 70-85% with 2D sections)"),
            complexity: Some(Complexity::High),
            processing_time: Some("15-25 min per vehicle"),
            tools: vec!["OpenCascade", "FreeCAD", "pythonOCC", "Open3D", "Trimesh", "NumPy"],
            tips: vec![
                "✅ Use FULL 3D CAD – complete .stp assemblies, not 2D cross-sections",
                "✅ Extract ALL critical edges (sill, pillar, door frame) – they constrain body movement",
                "✅ Compute TRUE 3D clearances along ingress paths, not 2D approximations",
                "✅ Maintain consistent 3D coordinate frame (SAE J1100) across all vehicles",
                "✅ Validate 3D KPIs against 2-3 physical measurements per vehicle",
            ],
            ..CadMetadata::default()
        },
    )
}

fn door_geometry() -> CadReply {
    AssistantReply::with_payload(
        "door_geometry",
        replies::DOOR_GEOMETRY,
        CadMetadata {
            code: Some(replies::DOOR_GEOMETRY_CODE),
            accuracy: Some("96-98% with validated multi-method approach"),
            complexity: Some(Complexity::Medium),
            processing_time: Some("3-7 min per vehicle"),
            tools: vec!["FreeCAD", "pythonOCC", "NumPy", "SciPy"],
            tips: vec![
                "Use multiple extraction methods and compare results for validation",
                "Always visualize extracted boundaries in 3D to catch errors",
                "Typical door widths: Sedan 750mm, SUV 850mm - flag outliers",
                "Account for door seal compression (~10mm) in measurements",
                "Maintain point cloud density of 100+ points for accuracy",
            ],
        },
    )
}

fn feature_pipeline() -> CadReply {
    AssistantReply::with_payload(
        "feature_pipeline",
        replies::FEATURE_PIPELINE,
        CadMetadata {
            accuracy: Some("95%+ when all 24 features extracted correctly"),
            ..CadMetadata::default()
        },
    )
}

fn seat_geometry() -> CadReply {
    AssistantReply::with_payload(
        "seat_geometry",
        replies::SEAT_GEOMETRY,
        CadMetadata {
            code: Some(replies::SEAT_GEOMETRY_CODE),
            accuracy: Some("95-98% with intersection method, 90-94% with statistical"),
            complexity: Some(Complexity::High),
            processing_time: Some("5-10 min per seat"),
            tools: vec!["FreeCAD", "Open3D", "NumPy", "SciPy", "scikit-learn"],
            tips: vec![
                "Use intersection method first, fallback to statistical if it fails",
                "Validate H-point against physical measurements (±10mm tolerance)",
                "Cushion angle affects comfort more than ingress difficulty",
                "Backrest angle >30° significantly increases entry difficulty for seniors",
                "Power seat adjustability provides +0.3 rating improvement on average",
            ],
        },
    )
}

fn anthropometry() -> CadReply {
    AssistantReply::with_payload(
        "anthropometry",
        replies::ANTHROPOMETRY,
        CadMetadata {
            code: Some(replies::ANTHROPOMETRY_CODE),
            accuracy: Some("95%+ with proper anthropometry scaling"),
            ..CadMetadata::default()
        },
    )
}

fn accuracy() -> CadReply {
    AssistantReply::with_payload(
        "accuracy",
        replies::ACCURACY,
        CadMetadata {
            accuracy: Some("95.5-96.5% achievable with complete strategy"),
            complexity: Some(Complexity::High),
            processing_time: Some("Model training: 2-4 hours"),
            tools: vec!["XGBoost", "LightGBM", "CatBoost", "TensorFlow", "scikit-learn", "SHAP"],
            tips: vec![
                "Start with data quality - clean data beats fancy algorithms every time",
                "Use SHAP values to interpret model predictions and identify feature issues",
                "Validate on vehicles from different model years to ensure generalization",
                "Monitor per-profile accuracy - don't let majority class dominate",
                "Set up automated alerts when predictions deviate >1.5 points from expert ratings",
            ],
            ..CadMetadata::default()
        },
    )
}

fn fallback(query: &str) -> CadReply {
    AssistantReply::with_payload(
        FALLBACK_INTENT,
        format!("You asked: \"{query}\"\n\n{}", replies::FALLBACK_TOPICS),
        CadMetadata {
            complexity: Some(Complexity::Low),
            tips: vec![
                "Be specific with your questions for more targeted answers",
                "Ask follow-up questions to dive deeper into any topic",
                "Request code examples if you need implementation details",
            ],
            ..CadMetadata::default()
        },
    )
}
