use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Anthropometric occupant profile a rating is expressed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnthroProfile {
    #[serde(rename = "P5F")]
    P5Female,
    #[serde(rename = "P50M")]
    P50Male,
    #[serde(rename = "P95M")]
    P95Male,
    #[serde(rename = "Senior")]
    Senior,
}

impl AnthroProfile {
    pub const fn ordered() -> [Self; 4] {
        [Self::P5Female, Self::P50Male, Self::P95Male, Self::Senior]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::P5Female => "P5F",
            Self::P50Male => "P50M",
            Self::P95Male => "P95M",
            Self::Senior => "Senior",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::P5Female => "P5 Female",
            Self::P50Male => "P50 Male",
            Self::P95Male => "P95 Male",
            Self::Senior => "Senior 65+",
        }
    }
}

impl fmt::Display for AnthroProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown anthropometric profile '{0}'")]
pub struct UnknownProfile(pub String);

impl FromStr for AnthroProfile {
    type Err = UnknownProfile;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "p5f" | "p5female" => Ok(Self::P5Female),
            "p50m" | "p50male" => Ok(Self::P50Male),
            "p95m" | "p95male" => Ok(Self::P95Male),
            "senior" | "senior65+" | "seniors" => Ok(Self::Senior),
            _ => Err(UnknownProfile(raw.to_string())),
        }
    }
}

/// Per-profile ingress/egress rating on the 1-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileRatings {
    #[serde(rename = "P5F")]
    pub p5_female: f64,
    #[serde(rename = "P50M")]
    pub p50_male: f64,
    #[serde(rename = "P95M")]
    pub p95_male: f64,
    #[serde(rename = "Senior")]
    pub senior: f64,
}

impl ProfileRatings {
    pub fn get(&self, profile: AnthroProfile) -> f64 {
        match profile {
            AnthroProfile::P5Female => self.p5_female,
            AnthroProfile::P50Male => self.p50_male,
            AnthroProfile::P95Male => self.p95_male,
            AnthroProfile::Senior => self.senior,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VehicleModel {
    pub id: &'static str,
    pub name: &'static str,
    pub body_style: &'static str,
    pub avg_rating: f64,
    pub worst_profile: AnthroProfile,
    pub key_issue: &'static str,
    pub ratings: ProfileRatings,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeometryKpi {
    pub name: &'static str,
    pub value: f64,
    pub unit: &'static str,
    pub tooltip: &'static str,
}

/// Signed contribution of a design feature to a vehicle's rating.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureContribution {
    pub feature: &'static str,
    pub impact: f64,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingBand {
    Good,
    Fair,
    AtRisk,
}

impl RatingBand {
    pub fn from_rating(rating: f64) -> Self {
        if rating >= 7.5 {
            Self::Good
        } else if rating >= 6.0 {
            Self::Fair
        } else {
            Self::AtRisk
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::AtRisk => "At Risk",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Good => "#10B981",
            Self::Fair => "#F59E0B",
            Self::AtRisk => "#EF4444",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_parses_codes_and_labels() {
        assert_eq!("P5F".parse::<AnthroProfile>(), Ok(AnthroProfile::P5Female));
        assert_eq!("p95m".parse::<AnthroProfile>(), Ok(AnthroProfile::P95Male));
        assert_eq!("P50 Male".parse::<AnthroProfile>(), Ok(AnthroProfile::P50Male));
        assert_eq!("Senior 65+".parse::<AnthroProfile>(), Ok(AnthroProfile::Senior));
        assert!("P99X".parse::<AnthroProfile>().is_err());
    }

    #[test]
    fn band_thresholds_are_inclusive() {
        assert_eq!(RatingBand::from_rating(7.5), RatingBand::Good);
        assert_eq!(RatingBand::from_rating(7.49), RatingBand::Fair);
        assert_eq!(RatingBand::from_rating(6.0), RatingBand::Fair);
        assert_eq!(RatingBand::from_rating(5.7), RatingBand::AtRisk);
        assert_eq!(RatingBand::AtRisk.label(), "At Risk");
    }
}
