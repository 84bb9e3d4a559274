//! Transform pipeline: answers → engineered features → encoded record → aligned vector.

use super::encoding::{Indicator, OrdinalCode};
use super::engineered::EngineeredFeatures;
use super::schema::{Column, ColumnKind, FEATURE_DIM};
use super::FeatureVector;
use crate::survey::RawAnswers;

/// Every value the encoding steps produce for one submission, before alignment.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedRecord {
    pub age_group: u8,
    pub income_levels: u8,
    pub health_concerns: u8,
    pub consume_frequency: u8,
    pub preferable_size: u8,
    pub engineered: EngineeredFeatures,
    /// One entry per indicator-encoded field; `None` when the category has no trained column.
    pub indicators: [Option<Column>; 10],
}

impl EncodedRecord {
    pub fn encode(raw: &RawAnswers, engineered: EngineeredFeatures) -> Self {
        Self {
            age_group: engineered.age_group.code(),
            income_levels: raw.income.code(),
            health_concerns: raw.health_concern.code(),
            consume_frequency: raw.consume_frequency_weekly.code(),
            preferable_size: raw.preferred_size.code(),
            engineered,
            indicators: [
                raw.gender.indicator(),
                raw.zone.indicator(),
                raw.occupation.indicator(),
                raw.current_brand.indicator(),
                raw.brand_awareness.indicator(),
                raw.reason_for_choosing.indicator(),
                raw.flavor_preference.indicator(),
                raw.purchase_channel.indicator(),
                raw.packaging_preference.indicator(),
                raw.consumption_situation.indicator(),
            ],
        }
    }

    /// Value for one model column; indicator columns nothing produced read as 0.
    pub fn value(&self, column: Column) -> f32 {
        match column.kind() {
            ColumnKind::Ordinal => f32::from(match column {
                Column::IncomeLevels => self.income_levels,
                Column::ConsumeFrequency => self.consume_frequency,
                Column::PreferableSize => self.preferable_size,
                Column::HealthConcerns => self.health_concerns,
                _ => self.age_group,
            }),
            ColumnKind::Engineered => match column {
                Column::CfAbScore => self.engineered.cf_ab_score as f32,
                Column::ZasScore => self.engineered.zas_score as f32,
                _ => f32::from(self.engineered.bsi),
            },
            ColumnKind::Indicator => {
                if self.indicators.contains(&Some(column)) {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

/// Stateless; every call rebuilds the row from the answers alone.
pub struct FeatureTransform;

impl FeatureTransform {
    pub fn transform(raw: &RawAnswers) -> FeatureVector {
        Self::align(&Self::encode(raw))
    }

    pub fn encode(raw: &RawAnswers) -> EncodedRecord {
        let engineered = EngineeredFeatures::derive(raw);
        EncodedRecord::encode(raw, engineered)
    }

    /// Walk the trained columns in order and pick each one's value.
    pub fn align(record: &EncodedRecord) -> FeatureVector {
        let mut values = [0.0f32; FEATURE_DIM];
        for (slot, column) in values.iter_mut().zip(Column::ALL) {
            *slot = record.value(column);
        }
        FeatureVector::new(values)
    }
}
