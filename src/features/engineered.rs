//! Engineered features derived from the raw answers: age bucket, frequency/awareness
//! ratio, zone-income product and the brand switching indicator.

use crate::survey::{BrandAwareness, ChoiceReason, ConsumeFrequency, CurrentBrand, Income, RawAnswers, Zone};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "18-25")]
    From18To25,
    #[serde(rename = "26-35")]
    From26To35,
    #[serde(rename = "36-45")]
    From36To45,
    #[serde(rename = "46-55")]
    From46To55,
    #[serde(rename = "56-70")]
    From56To70,
    #[serde(rename = "70+")]
    Over70,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 6] = [
        AgeGroup::From18To25,
        AgeGroup::From26To35,
        AgeGroup::From36To45,
        AgeGroup::From46To55,
        AgeGroup::From56To70,
        AgeGroup::Over70,
    ];

    /// Bounds are inclusive; everything above 70 is the open last bucket.
    pub fn from_age(age: u32) -> Self {
        match age {
            0..=25 => AgeGroup::From18To25,
            26..=35 => AgeGroup::From26To35,
            36..=45 => AgeGroup::From36To45,
            46..=55 => AgeGroup::From46To55,
            56..=70 => AgeGroup::From56To70,
            _ => AgeGroup::Over70,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::From18To25 => "18-25",
            AgeGroup::From26To35 => "26-35",
            AgeGroup::From36To45 => "36-45",
            AgeGroup::From46To55 => "46-55",
            AgeGroup::From56To70 => "56-70",
            AgeGroup::Over70 => "70+",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineeredFeatures {
    pub age_group: AgeGroup,
    /// Frequency rank over frequency plus awareness rank; in (0, 1).
    pub cf_ab_score: f64,
    /// Zone rank times income rank.
    pub zas_score: u32,
    /// Brand switching indicator, 0 or 1.
    pub bsi: u8,
}

impl EngineeredFeatures {
    pub fn derive(raw: &RawAnswers) -> Self {
        Self {
            age_group: AgeGroup::from_age(raw.age),
            cf_ab_score: cf_ab_score(raw.consume_frequency_weekly, raw.brand_awareness),
            zas_score: zas_score(raw.zone, raw.income),
            bsi: brand_switching_indicator(raw.current_brand, raw.reason_for_choosing),
        }
    }
}

fn frequency_rank(freq: ConsumeFrequency) -> u32 {
    match freq {
        ConsumeFrequency::ZeroToTwo => 1,
        ConsumeFrequency::ThreeToFour => 2,
        ConsumeFrequency::FiveToSeven => 3,
    }
}

fn awareness_rank(awareness: BrandAwareness) -> u32 {
    match awareness {
        BrandAwareness::ZeroToOne => 1,
        BrandAwareness::TwoToFour => 2,
        BrandAwareness::AboveFour => 3,
    }
}

fn zone_rank(zone: Zone) -> u32 {
    match zone {
        Zone::Rural => 1,
        Zone::SemiUrban => 2,
        Zone::Urban => 3,
    }
}

fn income_rank(income: Income) -> u32 {
    match income {
        Income::None => 0,
        Income::Under10L => 1,
        Income::From10To15L => 2,
        Income::From16To25L => 3,
        Income::From26To35L => 4,
        Income::Above35L => 5,
    }
}

/// Both ranks are at least 1, so the denominator is never zero.
pub fn cf_ab_score(freq: ConsumeFrequency, awareness: BrandAwareness) -> f64 {
    let cf = frequency_rank(freq) as f64;
    let ab = awareness_rank(awareness) as f64;
    cf / (cf + ab)
}

pub fn zas_score(zone: Zone, income: Income) -> u32 {
    zone_rank(zone) * income_rank(income)
}

/// 1 when the respondent is not on an established brand and picks on price or quality.
pub fn brand_switching_indicator(brand: CurrentBrand, reason: ChoiceReason) -> u8 {
    let price_or_quality = matches!(reason, ChoiceReason::Price | ChoiceReason::Quality);
    u8::from(brand != CurrentBrand::Established && price_or_quality)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_buckets_cover_their_ranges() {
        let cases = [
            (18..=25, AgeGroup::From18To25),
            (26..=35, AgeGroup::From26To35),
            (36..=45, AgeGroup::From36To45),
            (46..=55, AgeGroup::From46To55),
            (56..=70, AgeGroup::From56To70),
            (71..=100, AgeGroup::Over70),
        ];
        for (range, expected) in cases {
            for age in range {
                assert_eq!(AgeGroup::from_age(age), expected, "age {age}");
            }
        }
    }

    #[test]
    fn age_bucket_edges() {
        assert_eq!(AgeGroup::from_age(70).label(), "56-70");
        assert_eq!(AgeGroup::from_age(71).label(), "70+");
        assert_eq!(AgeGroup::from_age(25).label(), "18-25");
        assert_eq!(AgeGroup::from_age(26).label(), "26-35");
    }

    #[test]
    fn cf_ab_score_stays_inside_unit_interval() {
        for freq in ConsumeFrequency::ALL {
            for awareness in BrandAwareness::ALL {
                let s = cf_ab_score(freq, awareness);
                assert!(s > 0.0 && s < 1.0, "{freq:?}/{awareness:?} -> {s}");
            }
        }
        assert_eq!(cf_ab_score(ConsumeFrequency::ZeroToTwo, BrandAwareness::ZeroToOne), 0.5);
        assert_eq!(cf_ab_score(ConsumeFrequency::FiveToSeven, BrandAwareness::ZeroToOne), 0.75);
    }

    #[test]
    fn zas_score_products() {
        assert_eq!(zas_score(Zone::Urban, Income::Above35L), 15);
        assert_eq!(zas_score(Zone::Rural, Income::None), 0);
        assert_eq!(zas_score(Zone::SemiUrban, Income::From10To15L), 4);
    }

    #[test]
    fn bsi_requires_non_established_brand_and_price_or_quality() {
        assert_eq!(brand_switching_indicator(CurrentBrand::Newcomer, ChoiceReason::Price), 1);
        assert_eq!(brand_switching_indicator(CurrentBrand::Newcomer, ChoiceReason::Quality), 1);
        assert_eq!(brand_switching_indicator(CurrentBrand::Established, ChoiceReason::Price), 0);
        assert_eq!(
            brand_switching_indicator(CurrentBrand::Newcomer, ChoiceReason::BrandReputation),
            0
        );
    }
}
