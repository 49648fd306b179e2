//! Read-only vehicle portfolio: per-profile ratings, geometry KPIs, and model
//! performance figures shown on the dashboard.

mod data;
pub mod domain;
mod performance;

pub use domain::{
    AnthroProfile, FeatureContribution, GeometryKpi, ProfileRatings, RatingBand, UnknownProfile,
    VehicleModel,
};
pub use performance::{ErrorBucket, ModelPerformance, PredictionPoint, SampleCoverage};

use serde::Serialize;

const AT_RISK_THRESHOLD: f64 = 6.0;

/// Lookups against the fixed reference data that named something absent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown vehicle '{id}'")]
    UnknownVehicle { id: String },
    #[error(transparent)]
    UnknownProfile(#[from] UnknownProfile),
    #[error("unknown assistant '{name}' (expected copilot or cad)")]
    UnknownAssistant { name: String },
}

#[derive(Debug)]
pub struct VehicleCatalog {
    vehicles: Vec<VehicleModel>,
    geometry: Vec<(&'static str, Vec<GeometryKpi>)>,
    contributions: Vec<(&'static str, Vec<FeatureContribution>)>,
}

impl VehicleCatalog {
    pub fn standard() -> Self {
        Self {
            vehicles: data::standard_vehicles(),
            geometry: data::standard_geometry(),
            contributions: data::standard_contributions(),
        }
    }

    pub fn vehicles(&self) -> &[VehicleModel] {
        &self.vehicles
    }

    pub fn vehicle(&self, id: &str) -> Option<&VehicleModel> {
        self.vehicles
            .iter()
            .find(|vehicle| vehicle.id.eq_ignore_ascii_case(id.trim()))
    }

    pub fn require(&self, id: &str) -> Result<&VehicleModel, CatalogError> {
        self.vehicle(id).ok_or_else(|| CatalogError::UnknownVehicle {
            id: id.to_string(),
        })
    }

    /// Geometry KPIs measured for a vehicle; empty when none were extracted.
    pub fn geometry(&self, id: &str) -> &[GeometryKpi] {
        self.geometry
            .iter()
            .find(|(vehicle_id, _)| vehicle_id.eq_ignore_ascii_case(id.trim()))
            .map(|(_, kpis)| kpis.as_slice())
            .unwrap_or(&[])
    }

    pub fn contributions(&self, id: &str) -> &[FeatureContribution] {
        self.contributions
            .iter()
            .find(|(vehicle_id, _)| vehicle_id.eq_ignore_ascii_case(id.trim()))
            .map(|(_, entries)| entries.as_slice())
            .unwrap_or(&[])
    }

    pub fn heatmap(&self) -> Vec<HeatmapRow> {
        self.vehicles
            .iter()
            .map(|vehicle| HeatmapRow {
                vehicle: vehicle.name,
                cells: AnthroProfile::ordered()
                    .into_iter()
                    .map(|profile| {
                        let rating = vehicle.ratings.get(profile);
                        HeatmapCell {
                            profile,
                            rating,
                            band: RatingBand::from_rating(rating),
                        }
                    })
                    .collect(),
            })
            .collect()
    }

    /// Lowest-rated vehicles for a profile; ties keep catalog order.
    pub fn worst_for(&self, profile: AnthroProfile, limit: usize) -> Vec<&VehicleModel> {
        let mut ranked: Vec<&VehicleModel> = self.vehicles.iter().collect();
        ranked.sort_by(|a, b| a.ratings.get(profile).total_cmp(&b.ratings.get(profile)));
        ranked.truncate(limit);
        ranked
    }

    pub fn portfolio_summary(&self) -> PortfolioSummary {
        let model_coverage = self.vehicles.len();
        let average_rating = if model_coverage == 0 {
            0.0
        } else {
            self.vehicles.iter().map(|v| v.avg_rating).sum::<f64>() / model_coverage as f64
        };

        let at_risk_count = self
            .vehicles
            .iter()
            .filter(|vehicle| vehicle.avg_rating < AT_RISK_THRESHOLD)
            .count();

        let best_performer = self
            .vehicles
            .iter()
            .fold(None::<&VehicleModel>, |best, vehicle| match best {
                Some(current) if current.avg_rating >= vehicle.avg_rating => Some(current),
                _ => Some(vehicle),
            })
            .map(|vehicle| BestPerformer {
                id: vehicle.id,
                name: vehicle.name,
                avg_rating: vehicle.avg_rating,
            });

        PortfolioSummary {
            average_rating,
            at_risk_count,
            best_performer,
            model_coverage,
        }
    }

    pub fn suggested_queries(&self) -> &'static [&'static str] {
        &data::SUGGESTED_QUERIES
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HeatmapRow {
    pub vehicle: &'static str,
    pub cells: Vec<HeatmapCell>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeatmapCell {
    pub profile: AnthroProfile,
    pub rating: f64,
    pub band: RatingBand,
}

#[derive(Debug, Clone, Serialize)]
pub struct BestPerformer {
    pub id: &'static str,
    pub name: &'static str,
    pub avg_rating: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioSummary {
    pub average_rating: f64,
    pub at_risk_count: usize,
    pub best_performer: Option<BestPerformer>,
    pub model_coverage: usize,
}
