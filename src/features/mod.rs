//! Feature transform: raw answers → engineered features → fixed 28-column model row.

mod encoding;
mod engineered;
mod pipeline;
mod schema;

pub use encoding::{Indicator, OrdinalCode};
pub use engineered::{
    brand_switching_indicator, cf_ab_score, zas_score, AgeGroup, EngineeredFeatures,
};
pub use pipeline::{EncodedRecord, FeatureTransform};
pub use schema::{Column, ColumnKind, FEATURE_DIM};

use serde::{Deserialize, Serialize};

/// Model input row. Always exactly [`FEATURE_DIM`] values in [`Column::ALL`] order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: [f32; FEATURE_DIM],
}

impl FeatureVector {
    pub(crate) fn new(values: [f32; FEATURE_DIM]) -> Self {
        Self { values }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub fn get(&self, column: Column) -> f32 {
        self.values[column.index()]
    }

    /// Columns paired with their values, in model order.
    pub fn named(&self) -> impl Iterator<Item = (Column, f32)> + '_ {
        Column::ALL.iter().copied().zip(self.values.iter().copied())
    }
}
