//! The trained model's input columns, in the order the model was fitted on.

use serde::Serialize;

/// Width of the model input row.
pub const FEATURE_DIM: usize = 28;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Ordinal,
    Engineered,
    Indicator,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Ordinal => "ordinal",
            ColumnKind::Engineered => "engineered",
            ColumnKind::Indicator => "indicator",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    IncomeLevels,
    ConsumeFrequency,
    PreferableSize,
    HealthConcerns,
    AgeGroup,
    CfAbScore,
    ZasScore,
    Bsi,
    GenderMale,
    ZoneRural,
    ZoneSemiUrban,
    ZoneUrban,
    OccupationRetired,
    OccupationStudent,
    OccupationWorkingProfessional,
    CurrentBrandEstablished,
    CurrentBrandNewcomer,
    AwarenessTwoToFour,
    AwarenessAboveFour,
    ReasonBrandReputation,
    ReasonPrice,
    ReasonQuality,
    FlavorTraditional,
    ChannelRetailStore,
    PackagingPremium,
    PackagingSimple,
    SituationCasual,
    SituationSocial,
}

impl Column {
    pub const ALL: [Column; FEATURE_DIM] = [
        Column::IncomeLevels,
        Column::ConsumeFrequency,
        Column::PreferableSize,
        Column::HealthConcerns,
        Column::AgeGroup,
        Column::CfAbScore,
        Column::ZasScore,
        Column::Bsi,
        Column::GenderMale,
        Column::ZoneRural,
        Column::ZoneSemiUrban,
        Column::ZoneUrban,
        Column::OccupationRetired,
        Column::OccupationStudent,
        Column::OccupationWorkingProfessional,
        Column::CurrentBrandEstablished,
        Column::CurrentBrandNewcomer,
        Column::AwarenessTwoToFour,
        Column::AwarenessAboveFour,
        Column::ReasonBrandReputation,
        Column::ReasonPrice,
        Column::ReasonQuality,
        Column::FlavorTraditional,
        Column::ChannelRetailStore,
        Column::PackagingPremium,
        Column::PackagingSimple,
        Column::SituationCasual,
        Column::SituationSocial,
    ];

    /// Column name as it appeared in the training frame.
    pub fn name(&self) -> &'static str {
        match self {
            Column::IncomeLevels => "income_levels",
            Column::ConsumeFrequency => "consume_frequency(weekly)",
            Column::PreferableSize => "preferable_consumption_size",
            Column::HealthConcerns => "health_concerns",
            Column::AgeGroup => "age_group",
            Column::CfAbScore => "cf_ab_score",
            Column::ZasScore => "zas_score",
            Column::Bsi => "bsi",
            Column::GenderMale => "gender_M",
            Column::ZoneRural => "zone_Rural",
            Column::ZoneSemiUrban => "zone_Semi-Urban",
            Column::ZoneUrban => "zone_Urban",
            Column::OccupationRetired => "occupation_Retired",
            Column::OccupationStudent => "occupation_Student",
            Column::OccupationWorkingProfessional => "occupation_Working Professional",
            Column::CurrentBrandEstablished => "current_brand_Established",
            Column::CurrentBrandNewcomer => "current_brand_Newcomer",
            Column::AwarenessTwoToFour => "awareness_of_other_brands_2 to 4",
            Column::AwarenessAboveFour => "awareness_of_other_brands_above 4",
            Column::ReasonBrandReputation => "reasons_for_choosing_brands_Brand Reputation",
            Column::ReasonPrice => "reasons_for_choosing_brands_Price",
            Column::ReasonQuality => "reasons_for_choosing_brands_Quality",
            Column::FlavorTraditional => "flavor_preference_Traditional",
            Column::ChannelRetailStore => "purchase_channel_Retail Store",
            Column::PackagingPremium => "packaging_preference_Premium",
            Column::PackagingSimple => "packaging_preference_Simple",
            Column::SituationCasual => "typical_consumption_situations_Casual (eg. At home)",
            Column::SituationSocial => "typical_consumption_situations_Social (eg. Parties)",
        }
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            Column::IncomeLevels
            | Column::ConsumeFrequency
            | Column::PreferableSize
            | Column::HealthConcerns
            | Column::AgeGroup => ColumnKind::Ordinal,
            Column::CfAbScore | Column::ZasScore | Column::Bsi => ColumnKind::Engineered,
            _ => ColumnKind::Indicator,
        }
    }

    /// Position in the model input row.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_declaration_order() {
        for (i, col) in Column::ALL.iter().enumerate() {
            assert_eq!(col.index(), i, "{}", col.name());
        }
    }

    #[test]
    fn kind_counts() {
        let count = |k| Column::ALL.iter().filter(|c| c.kind() == k).count();
        assert_eq!(count(ColumnKind::Ordinal), 5);
        assert_eq!(count(ColumnKind::Engineered), 3);
        assert_eq!(count(ColumnKind::Indicator), 20);
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = Column::ALL.iter().map(|c| c.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), FEATURE_DIM);
    }
}
