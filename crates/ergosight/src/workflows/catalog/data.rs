use super::domain::{
    AnthroProfile, FeatureContribution, GeometryKpi, ProfileRatings, VehicleModel,
};

pub(super) fn standard_vehicles() -> Vec<VehicleModel> {
    vec![
        VehicleModel {
            id: "xuv700",
            name: "XUV700",
            body_style: "SUV",
            avg_rating: 8.4,
            worst_profile: AnthroProfile::Senior,
            key_issue: "High sill for seniors",
            ratings: ratings(8.8, 8.6, 7.9, 7.4),
        },
        VehicleModel {
            id: "xuv300",
            name: "XUV300",
            body_style: "Compact SUV",
            avg_rating: 7.2,
            worst_profile: AnthroProfile::P95Male,
            key_issue: "Narrow door aperture",
            ratings: ratings(7.8, 7.4, 6.5, 7.1),
        },
        VehicleModel {
            id: "scorpio-n",
            name: "Scorpio-N",
            body_style: "SUV",
            avg_rating: 7.8,
            worst_profile: AnthroProfile::P5Female,
            key_issue: "High seat H-point",
            ratings: ratings(6.9, 8.2, 8.1, 7.9),
        },
        VehicleModel {
            id: "thar",
            name: "Thar",
            body_style: "Off-road",
            avg_rating: 6.8,
            worst_profile: AnthroProfile::Senior,
            key_issue: "High sill & step-over",
            ratings: ratings(7.2, 7.5, 6.8, 5.7),
        },
        VehicleModel {
            id: "xuv400",
            name: "XUV400 EV",
            body_style: "Electric SUV",
            avg_rating: 8.1,
            worst_profile: AnthroProfile::P95Male,
            key_issue: "Limited headroom at A-pillar",
            ratings: ratings(8.6, 8.4, 7.3, 8.1),
        },
        VehicleModel {
            id: "bolero",
            name: "Bolero",
            body_style: "MUV",
            avg_rating: 6.5,
            worst_profile: AnthroProfile::Senior,
            key_issue: "High step-in height",
            ratings: ratings(6.8, 7.1, 6.4, 5.7),
        },
    ]
}

fn ratings(p5_female: f64, p50_male: f64, p95_male: f64, senior: f64) -> ProfileRatings {
    ProfileRatings {
        p5_female,
        p50_male,
        p95_male,
        senior,
    }
}

pub(super) fn standard_geometry() -> Vec<(&'static str, Vec<GeometryKpi>)> {
    vec![
        (
            "xuv700",
            aperture_kpis([745.0, 1260.0, 560.0, 620.0, 480.0, 68.0]),
        ),
        (
            "xuv300",
            aperture_kpis([700.0, 1220.0, 540.0, 610.0, 460.0, 65.0]),
        ),
    ]
}

fn aperture_kpis(values: [f64; 6]) -> Vec<GeometryKpi> {
    const SHAPE: [(&str, &str, &str); 6] = [
        (
            "Door Aperture Width",
            "mm",
            "Horizontal opening width at seat level",
        ),
        (
            "Door Aperture Height",
            "mm",
            "Vertical opening from sill to roof",
        ),
        (
            "Sill Height from Ground",
            "mm",
            "Height of door sill above ground level",
        ),
        (
            "Seat H-point Height",
            "mm",
            "Height of seat reference point",
        ),
        (
            "Seat–Steering Distance",
            "mm",
            "Distance from seat to steering wheel center",
        ),
        ("A-Pillar Angle", "deg", "Angle of windshield A-pillar"),
    ];

    SHAPE
        .iter()
        .zip(values)
        .map(|(&(name, unit, tooltip), value)| GeometryKpi {
            name,
            value,
            unit,
            tooltip,
        })
        .collect()
}

pub(super) fn standard_contributions() -> Vec<(&'static str, Vec<FeatureContribution>)> {
    vec![
        (
            "xuv700",
            vec![
                contribution(
                    "Door Aperture Width",
                    0.9,
                    "Wide opening provides excellent access",
                ),
                contribution(
                    "Sill Height",
                    -0.8,
                    "High sill creates difficulty for seniors",
                ),
                contribution(
                    "Seat–Steering Dist.",
                    0.6,
                    "Good spacing for entry clearance",
                ),
                contribution(
                    "Headroom at A-Pillar",
                    0.4,
                    "Adequate clearance during entry",
                ),
            ],
        ),
        (
            "xuv300",
            vec![
                contribution(
                    "Door Aperture Width",
                    -0.7,
                    "Narrow opening restricts P95 male",
                ),
                contribution("Sill Height", 0.3, "Moderate height aids entry"),
                contribution("Seat Height", 0.2, "Good H-point positioning"),
                contribution(
                    "A-Pillar Angle",
                    -0.3,
                    "Tight angle limits head clearance",
                ),
            ],
        ),
    ]
}

fn contribution(
    feature: &'static str,
    impact: f64,
    description: &'static str,
) -> FeatureContribution {
    FeatureContribution {
        feature,
        impact,
        description,
    }
}

pub(super) const SUGGESTED_QUERIES: [&str; 5] = [
    "Which three models are worst for ingress for seniors?",
    "Summarize ingress performance for XUV line-up",
    "What minimal changes would improve XUV300 rating above 8?",
    "Compare Scorpio-N vs XUV700 for P95 male",
    "Write a design review summary for Thar",
];
