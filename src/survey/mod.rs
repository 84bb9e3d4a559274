//! Survey answers: the raw record one submission produces, plus the collector that reads it.

mod answers;
mod collector;

pub use answers::{
    BrandAwareness, ChoiceReason, ConsumeFrequency, CurrentBrand, Flavor, Gender, HealthConcern,
    Income, Occupation, PackSize, Packaging, PurchaseChannel, Situation, Zone,
};
pub use collector::AnswerCollector;

use crate::error::CollectError;
use serde::{Deserialize, Serialize};

/// Youngest accepted respondent.
pub const AGE_MIN: u32 = 18;
/// Oldest accepted respondent.
pub const AGE_MAX: u32 = 100;

/// One field per survey question. Created per submission, discarded after prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAnswers {
    pub age: u32,
    pub gender: Gender,
    pub zone: Zone,
    pub occupation: Occupation,
    pub income: Income,
    pub health_concern: HealthConcern,
    pub consume_frequency_weekly: ConsumeFrequency,
    pub current_brand: CurrentBrand,
    pub preferred_size: PackSize,
    pub brand_awareness: BrandAwareness,
    pub reason_for_choosing: ChoiceReason,
    pub flavor_preference: Flavor,
    pub purchase_channel: PurchaseChannel,
    pub packaging_preference: Packaging,
    pub consumption_situation: Situation,
}

impl RawAnswers {
    /// Check the numeric range; enumerated fields are already constrained by their types.
    pub fn validate(&self) -> Result<(), CollectError> {
        if !(AGE_MIN..=AGE_MAX).contains(&self.age) {
            return Err(CollectError::AgeOutOfRange(self.age));
        }
        Ok(())
    }
}
