use super::category::{Category, PerCategory};
use super::classifier::PeerField;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapPoint {
    pub x: i64,
    pub y: i64,
    pub timestamp: u64,
    pub match_id: String,
    #[serde(flatten)]
    pub peer: PeerField,
}

/// Per-category point lists in arrival order. No binning, no dedup.
#[derive(Debug, Default)]
pub struct SpatialAggregator {
    points: PerCategory<Vec<HeatmapPoint>>,
}

impl SpatialAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, category: Category, point: HeatmapPoint) {
        self.points.get_mut(category).push(point);
    }

    pub fn into_points(self) -> PerCategory<Vec<HeatmapPoint>> {
        self.points
    }
}
