//! Fixed encoding tables.
//!
//! Ordinal codes follow the label encoding the model was trained with: each field's full
//! vocabulary sorted lexicographically by survey label, codes assigned from 0. They are
//! spelled out per variant so a single submission can never shift them.
//!
//! Indicator columns exist only for the categories the trained frame kept; any other
//! category maps to no column and leaves its whole group at 0.

use super::engineered::AgeGroup;
use super::schema::Column;
use crate::survey::{
    BrandAwareness, ChoiceReason, ConsumeFrequency, CurrentBrand, Flavor, Gender, HealthConcern,
    Income, Occupation, PackSize, Packaging, PurchaseChannel, Situation, Zone,
};

/// Integer code of an ordinal-encoded field.
pub trait OrdinalCode {
    fn code(&self) -> u8;
}

/// Indicator column set by a categorical value, if the trained schema has one.
pub trait Indicator {
    fn indicator(&self) -> Option<Column>;
}

impl OrdinalCode for AgeGroup {
    fn code(&self) -> u8 {
        match self {
            AgeGroup::From18To25 => 0,
            AgeGroup::From26To35 => 1,
            AgeGroup::From36To45 => 2,
            AgeGroup::From46To55 => 3,
            AgeGroup::From56To70 => 4,
            AgeGroup::Over70 => 5,
        }
    }
}

impl OrdinalCode for Income {
    fn code(&self) -> u8 {
        match self {
            Income::From10To15L => 0,
            Income::From16To25L => 1,
            Income::From26To35L => 2,
            Income::Under10L => 3,
            Income::Above35L => 4,
            Income::None => 5,
        }
    }
}

impl OrdinalCode for HealthConcern {
    fn code(&self) -> u8 {
        match self {
            HealthConcern::High => 0,
            HealthConcern::Low => 1,
            HealthConcern::Medium => 2,
        }
    }
}

impl OrdinalCode for ConsumeFrequency {
    fn code(&self) -> u8 {
        match self {
            ConsumeFrequency::ZeroToTwo => 0,
            ConsumeFrequency::ThreeToFour => 1,
            ConsumeFrequency::FiveToSeven => 2,
        }
    }
}

impl OrdinalCode for PackSize {
    fn code(&self) -> u8 {
        match self {
            PackSize::Large => 0,
            PackSize::Medium => 1,
            PackSize::Small => 2,
        }
    }
}

impl Indicator for Gender {
    fn indicator(&self) -> Option<Column> {
        match self {
            Gender::Male => Some(Column::GenderMale),
            Gender::Female => None,
        }
    }
}

impl Indicator for Zone {
    fn indicator(&self) -> Option<Column> {
        Some(match self {
            Zone::Rural => Column::ZoneRural,
            Zone::SemiUrban => Column::ZoneSemiUrban,
            Zone::Urban => Column::ZoneUrban,
        })
    }
}

impl Indicator for Occupation {
    fn indicator(&self) -> Option<Column> {
        Some(match self {
            Occupation::Retired => Column::OccupationRetired,
            Occupation::Student => Column::OccupationStudent,
            Occupation::WorkingProfessional => Column::OccupationWorkingProfessional,
        })
    }
}

impl Indicator for CurrentBrand {
    fn indicator(&self) -> Option<Column> {
        Some(match self {
            CurrentBrand::Established => Column::CurrentBrandEstablished,
            CurrentBrand::Newcomer => Column::CurrentBrandNewcomer,
        })
    }
}

impl Indicator for BrandAwareness {
    fn indicator(&self) -> Option<Column> {
        match self {
            BrandAwareness::ZeroToOne => None,
            BrandAwareness::TwoToFour => Some(Column::AwarenessTwoToFour),
            BrandAwareness::AboveFour => Some(Column::AwarenessAboveFour),
        }
    }
}

impl Indicator for ChoiceReason {
    fn indicator(&self) -> Option<Column> {
        Some(match self {
            ChoiceReason::BrandReputation => Column::ReasonBrandReputation,
            ChoiceReason::Price => Column::ReasonPrice,
            ChoiceReason::Quality => Column::ReasonQuality,
        })
    }
}

impl Indicator for Flavor {
    fn indicator(&self) -> Option<Column> {
        match self {
            Flavor::Traditional => Some(Column::FlavorTraditional),
            Flavor::Exotic => None,
        }
    }
}

impl Indicator for PurchaseChannel {
    fn indicator(&self) -> Option<Column> {
        match self {
            PurchaseChannel::RetailStore => Some(Column::ChannelRetailStore),
            PurchaseChannel::Online => None,
        }
    }
}

impl Indicator for Packaging {
    fn indicator(&self) -> Option<Column> {
        Some(match self {
            Packaging::Premium => Column::PackagingPremium,
            Packaging::Simple => Column::PackagingSimple,
        })
    }
}

impl Indicator for Situation {
    fn indicator(&self) -> Option<Column> {
        match self {
            Situation::Casual => Some(Column::SituationCasual),
            Situation::Social => Some(Column::SituationSocial),
            Situation::Active => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::schema::ColumnKind;

    /// Codes must equal the rank of the survey label among all labels of the field.
    fn assert_lexicographic<T: OrdinalCode>(values: &[T], label: impl Fn(&T) -> &'static str) {
        let mut labels: Vec<&str> = values.iter().map(&label).collect();
        labels.sort_unstable();
        for v in values {
            let rank = labels.iter().position(|l| *l == label(v)).unwrap();
            assert_eq!(v.code() as usize, rank, "{}", label(v));
        }
    }

    #[test]
    fn ordinal_tables_match_sorted_training_labels() {
        assert_lexicographic(&AgeGroup::ALL, |g| g.label());
        assert_lexicographic(&Income::ALL, |i| i.label());
        assert_lexicographic(&HealthConcern::ALL, |h| h.label());
        assert_lexicographic(&ConsumeFrequency::ALL, |f| f.label());
        assert_lexicographic(&PackSize::ALL, |s| s.label());
    }

    #[test]
    fn income_codes_are_explicit() {
        assert_eq!(Income::From10To15L.code(), 0);
        assert_eq!(Income::Under10L.code(), 3);
        assert_eq!(Income::Above35L.code(), 4);
        assert_eq!(Income::None.code(), 5);
    }

    #[test]
    fn indicators_only_point_at_indicator_columns() {
        let mut columns = Vec::new();
        columns.extend(Gender::ALL.iter().filter_map(|v| v.indicator()));
        columns.extend(Zone::ALL.iter().filter_map(|v| v.indicator()));
        columns.extend(Occupation::ALL.iter().filter_map(|v| v.indicator()));
        columns.extend(CurrentBrand::ALL.iter().filter_map(|v| v.indicator()));
        columns.extend(BrandAwareness::ALL.iter().filter_map(|v| v.indicator()));
        columns.extend(ChoiceReason::ALL.iter().filter_map(|v| v.indicator()));
        columns.extend(Flavor::ALL.iter().filter_map(|v| v.indicator()));
        columns.extend(PurchaseChannel::ALL.iter().filter_map(|v| v.indicator()));
        columns.extend(Packaging::ALL.iter().filter_map(|v| v.indicator()));
        columns.extend(Situation::ALL.iter().filter_map(|v| v.indicator()));

        assert_eq!(columns.len(), 20);
        assert!(columns.iter().all(|c| c.kind() == ColumnKind::Indicator));
        let mut indices: Vec<usize> = columns.iter().map(|c| c.index()).collect();
        indices.sort_unstable();
        indices.dedup();
        assert_eq!(indices.len(), 20);
    }

    #[test]
    fn categories_outside_training_vocabulary_have_no_column() {
        assert_eq!(Gender::Female.indicator(), None);
        assert_eq!(BrandAwareness::ZeroToOne.indicator(), None);
        assert_eq!(Flavor::Exotic.indicator(), None);
        assert_eq!(PurchaseChannel::Online.indicator(), None);
        assert_eq!(Situation::Active.indicator(), None);
    }
}
