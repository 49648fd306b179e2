use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Design parameters adjustable in the scenario lab, in table declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKey {
    SillHeight,
    SillWidth,
    DoorWidth,
    DoorHeight,
    SeatHeight,
    SeatSteeringDist,
    HipClearance,
    HeadClearance,
    SteeringClearance,
    IngressSweep,
}

impl ParameterKey {
    pub const fn ordered() -> [Self; 10] {
        [
            Self::SillHeight,
            Self::SillWidth,
            Self::DoorWidth,
            Self::DoorHeight,
            Self::SeatHeight,
            Self::SeatSteeringDist,
            Self::HipClearance,
            Self::HeadClearance,
            Self::SteeringClearance,
            Self::IngressSweep,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SillHeight => "sill_height",
            Self::SillWidth => "sill_width",
            Self::DoorWidth => "door_width",
            Self::DoorHeight => "door_height",
            Self::SeatHeight => "seat_height",
            Self::SeatSteeringDist => "seat_steering_dist",
            Self::HipClearance => "hip_clearance",
            Self::HeadClearance => "head_clearance",
            Self::SteeringClearance => "steering_clearance",
            Self::IngressSweep => "ingress_sweep",
        }
    }
}

impl fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParameterKey {
    type Err = String;

    /// Accepts snake_case, camelCase, or kebab-case spellings.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let folded: String = raw
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        Self::ordered()
            .into_iter()
            .find(|key| key.as_str().replace('_', "") == folded)
            .ok_or_else(|| raw.trim().to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "mm")]
    Millimeters,
    #[serde(rename = "deg")]
    Degrees,
}

impl Unit {
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Millimeters => "mm",
            Self::Degrees => "deg",
        }
    }
}

/// Values for every design parameter of one vehicle configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignParameters {
    pub sill_height: f64,
    pub sill_width: f64,
    pub door_width: f64,
    pub door_height: f64,
    pub seat_height: f64,
    pub seat_steering_dist: f64,
    pub hip_clearance: f64,
    pub head_clearance: f64,
    pub steering_clearance: f64,
    pub ingress_sweep: f64,
}

impl DesignParameters {
    /// Reference configuration the scenario lab opens with.
    pub const fn baseline() -> Self {
        Self {
            sill_height: 580.0,
            sill_width: 170.0,
            door_width: 700.0,
            door_height: 1260.0,
            seat_height: 610.0,
            seat_steering_dist: 460.0,
            hip_clearance: 70.0,
            head_clearance: 65.0,
            steering_clearance: 45.0,
            ingress_sweep: 62.0,
        }
    }

    pub fn get(&self, key: ParameterKey) -> f64 {
        match key {
            ParameterKey::SillHeight => self.sill_height,
            ParameterKey::SillWidth => self.sill_width,
            ParameterKey::DoorWidth => self.door_width,
            ParameterKey::DoorHeight => self.door_height,
            ParameterKey::SeatHeight => self.seat_height,
            ParameterKey::SeatSteeringDist => self.seat_steering_dist,
            ParameterKey::HipClearance => self.hip_clearance,
            ParameterKey::HeadClearance => self.head_clearance,
            ParameterKey::SteeringClearance => self.steering_clearance,
            ParameterKey::IngressSweep => self.ingress_sweep,
        }
    }

    pub fn set(&mut self, key: ParameterKey, value: f64) {
        let slot = match key {
            ParameterKey::SillHeight => &mut self.sill_height,
            ParameterKey::SillWidth => &mut self.sill_width,
            ParameterKey::DoorWidth => &mut self.door_width,
            ParameterKey::DoorHeight => &mut self.door_height,
            ParameterKey::SeatHeight => &mut self.seat_height,
            ParameterKey::SeatSteeringDist => &mut self.seat_steering_dist,
            ParameterKey::HipClearance => &mut self.hip_clearance,
            ParameterKey::HeadClearance => &mut self.head_clearance,
            ParameterKey::SteeringClearance => &mut self.steering_clearance,
            ParameterKey::IngressSweep => &mut self.ingress_sweep,
        };
        *slot = value;
    }

    pub fn with(mut self, key: ParameterKey, value: f64) -> Self {
        self.set(key, value);
        self
    }
}

impl Default for DesignParameters {
    fn default() -> Self {
        Self::baseline()
    }
}

/// Static metadata and linear sensitivity for one design parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterConfig {
    pub key: ParameterKey,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub unit: Unit,
    pub tooltip: &'static str,
    /// Rating points per unit of change.
    pub weight: f64,
    pub insight: &'static str,
}

impl ParameterConfig {
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterTableError {
    #[error("{key} range is inverted (min {min} > max {max})")]
    InvertedRange { key: ParameterKey, min: f64, max: f64 },
    #[error("{key} has a non-finite bound or weight")]
    NonFinite { key: ParameterKey },
    #[error("{key} is configured more than once")]
    Duplicate { key: ParameterKey },
    #[error("{key} has no configuration")]
    Missing { key: ParameterKey },
}

/// Validated, ordered set of parameter configurations.
#[derive(Debug, Clone)]
pub struct ParameterTable {
    configs: Vec<ParameterConfig>,
}

impl ParameterTable {
    pub fn new(configs: Vec<ParameterConfig>) -> Result<Self, ParameterTableError> {
        let mut seen = Vec::with_capacity(configs.len());
        for config in &configs {
            if !(config.min.is_finite() && config.max.is_finite() && config.weight.is_finite()) {
                return Err(ParameterTableError::NonFinite { key: config.key });
            }
            if config.min > config.max {
                return Err(ParameterTableError::InvertedRange {
                    key: config.key,
                    min: config.min,
                    max: config.max,
                });
            }
            if seen.contains(&config.key) {
                return Err(ParameterTableError::Duplicate { key: config.key });
            }
            seen.push(config.key);
        }

        if let Some(key) = ParameterKey::ordered()
            .into_iter()
            .find(|key| !seen.contains(key))
        {
            return Err(ParameterTableError::Missing { key });
        }

        Ok(Self { configs })
    }

    pub fn standard() -> Self {
        Self {
            configs: standard_configs(),
        }
    }

    pub fn configs(&self) -> &[ParameterConfig] {
        &self.configs
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    pub fn config(&self, key: ParameterKey) -> Option<&ParameterConfig> {
        self.configs.iter().find(|config| config.key == key)
    }

    /// Clamps every field into its configured range.
    pub fn clamp(&self, params: &DesignParameters) -> DesignParameters {
        let mut clamped = *params;
        for config in &self.configs {
            let value = params.get(config.key);
            let bounded = config.clamp(value);
            if bounded != value {
                debug!(parameter = %config.key, value, bounded, "clamped out-of-range parameter");
            }
            clamped.set(config.key, bounded);
        }
        clamped
    }
}

impl Default for ParameterTable {
    fn default() -> Self {
        Self::standard()
    }
}

pub(crate) fn standard_configs() -> Vec<ParameterConfig> {
    vec![
        ParameterConfig {
            key: ParameterKey::SillHeight,
            label: "Sill Height (Edge Z)",
            min: 520.0,
            max: 620.0,
            unit: Unit::Millimeters,
            tooltip: "Height from ground plane to sill edge. Lower values reduce step-over.",
            weight: -0.02,
            insight: "Lower sill shortens the step-over to enter the cabin.",
        },
        ParameterConfig {
            key: ParameterKey::SillWidth,
            label: "Sill Width (Edge Span)",
            min: 140.0,
            max: 210.0,
            unit: Unit::Millimeters,
            tooltip: "3D distance between inner and outer sill edges.",
            weight: 0.012,
            insight: "Wider sill surface supports better foot placement.",
        },
        ParameterConfig {
            key: ParameterKey::DoorWidth,
            label: "Door Aperture Width",
            min: 650.0,
            max: 780.0,
            unit: Unit::Millimeters,
            tooltip: "3D width measured between leading/trailing door edges at H-point height.",
            weight: 0.015,
            insight: "Wider aperture gives more lateral clearance.",
        },
        ParameterConfig {
            key: ParameterKey::DoorHeight,
            label: "Door Aperture Height",
            min: 1180.0,
            max: 1350.0,
            unit: Unit::Millimeters,
            tooltip: "Height between sill edge and roof rail edge along aperture.",
            weight: 0.01,
            insight: "Taller door cut-out improves headroom during entry.",
        },
        ParameterConfig {
            key: ParameterKey::SeatHeight,
            label: "Seat H-Point Height",
            min: 580.0,
            max: 650.0,
            unit: Unit::Millimeters,
            tooltip: "SAE J1100 H-point height above ground.",
            weight: 0.004,
            insight: "Higher H-point reduces squat effort.",
        },
        ParameterConfig {
            key: ParameterKey::SeatSteeringDist,
            label: "Seat–Steering Distance",
            min: 430.0,
            max: 520.0,
            unit: Unit::Millimeters,
            tooltip: "3D distance between seat H-point and steering rim center.",
            weight: 0.006,
            insight: "More space between seat and rim eases knee passage.",
        },
        ParameterConfig {
            key: ParameterKey::HipClearance,
            label: "Hip Path Clearance",
            min: 40.0,
            max: 120.0,
            unit: Unit::Millimeters,
            tooltip: "Minimum 3D clearance between hip trajectory and door frame edge.",
            weight: 0.02,
            insight: "Clear hip path avoids side impacts for larger occupants.",
        },
        ParameterConfig {
            key: ParameterKey::HeadClearance,
            label: "Head Clearance @ Header",
            min: 30.0,
            max: 110.0,
            unit: Unit::Millimeters,
            tooltip: "Minimum 3D clearance between head trajectory and roof header edge.",
            weight: 0.018,
            insight: "More head margin prevents roof header contact.",
        },
        ParameterConfig {
            key: ParameterKey::SteeringClearance,
            label: "Steering Rim Clearance",
            min: 20.0,
            max: 90.0,
            unit: Unit::Millimeters,
            tooltip: "Gap between thigh envelope and steering rim edge.",
            weight: 0.015,
            insight: "Extra rim clearance avoids knee interference.",
        },
        ParameterConfig {
            key: ParameterKey::IngressSweep,
            label: "Ingress Sweep Angle",
            min: 45.0,
            max: 75.0,
            unit: Unit::Degrees,
            tooltip: "Angular sweep of 3D ingress path from hip pivot.",
            weight: -0.018,
            insight: "Smaller sweep means less body rotation required.",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_passes_validation() {
        let table = ParameterTable::new(standard_configs()).expect("standard table is valid");
        assert_eq!(table.len(), 10);
        let keys: Vec<ParameterKey> = table.configs().iter().map(|c| c.key).collect();
        assert_eq!(keys, ParameterKey::ordered().to_vec());
    }

    #[test]
    fn baseline_sits_inside_every_range() {
        let table = ParameterTable::standard();
        let baseline = DesignParameters::baseline();
        for config in table.configs() {
            assert!(
                config.contains(baseline.get(config.key)),
                "{} outside range",
                config.key
            );
        }
    }

    #[test]
    fn rejects_inverted_and_non_finite_configs() {
        let mut configs = standard_configs();
        configs[2].min = 900.0;
        assert_eq!(
            ParameterTable::new(configs).unwrap_err(),
            ParameterTableError::InvertedRange {
                key: ParameterKey::DoorWidth,
                min: 900.0,
                max: 780.0,
            }
        );

        let mut configs = standard_configs();
        configs[9].weight = f64::NAN;
        assert_eq!(
            ParameterTable::new(configs).unwrap_err(),
            ParameterTableError::NonFinite {
                key: ParameterKey::IngressSweep
            }
        );
    }

    #[test]
    fn rejects_duplicate_and_missing_keys() {
        let mut configs = standard_configs();
        configs[1].key = ParameterKey::SillHeight;
        assert_eq!(
            ParameterTable::new(configs).unwrap_err(),
            ParameterTableError::Duplicate {
                key: ParameterKey::SillHeight
            }
        );

        let mut configs = standard_configs();
        configs.pop();
        assert_eq!(
            ParameterTable::new(configs).unwrap_err(),
            ParameterTableError::Missing {
                key: ParameterKey::IngressSweep
            }
        );
    }

    #[test]
    fn clamp_pins_values_to_range() {
        let table = ParameterTable::standard();
        let wild = DesignParameters::baseline()
            .with(ParameterKey::SillHeight, 400.0)
            .with(ParameterKey::IngressSweep, 90.0);
        let clamped = table.clamp(&wild);
        assert_eq!(clamped.sill_height, 520.0);
        assert_eq!(clamped.ingress_sweep, 75.0);
        assert_eq!(clamped.door_width, 700.0);
    }

    #[test]
    fn key_parsing_accepts_common_spellings() {
        assert_eq!("sill_height".parse::<ParameterKey>(), Ok(ParameterKey::SillHeight));
        assert_eq!("seatSteeringDist".parse::<ParameterKey>(), Ok(ParameterKey::SeatSteeringDist));
        assert_eq!("ingress-sweep".parse::<ParameterKey>(), Ok(ParameterKey::IngressSweep));
        assert_eq!(
            "roof_height".parse::<ParameterKey>(),
            Err("roof_height".to_string())
        );
    }
}
