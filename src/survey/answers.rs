//! Enumerated answer domains, one type per survey question.
//! Serialized form is the label shown on the survey form; snake_case variant names are accepted too.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(alias = "male")]
    Male,
    #[serde(alias = "female")]
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    #[serde(alias = "urban")]
    Urban,
    #[serde(alias = "rural")]
    Rural,
    #[serde(rename = "Semi-Urban", alias = "semi_urban")]
    SemiUrban,
}

impl Zone {
    pub const ALL: [Zone; 3] = [Zone::Urban, Zone::Rural, Zone::SemiUrban];

    pub fn label(&self) -> &'static str {
        match self {
            Zone::Urban => "Urban",
            Zone::Rural => "Rural",
            Zone::SemiUrban => "Semi-Urban",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupation {
    #[serde(rename = "Working Professional", alias = "working_professional")]
    WorkingProfessional,
    #[serde(alias = "student")]
    Student,
    #[serde(alias = "retired")]
    Retired,
}

impl Occupation {
    pub const ALL: [Occupation; 3] = [
        Occupation::WorkingProfessional,
        Occupation::Student,
        Occupation::Retired,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Occupation::WorkingProfessional => "Working Professional",
            Occupation::Student => "Student",
            Occupation::Retired => "Retired",
        }
    }
}

/// Annual income bracket (lakh rupees).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Income {
    #[serde(alias = "none")]
    None,
    #[serde(rename = "<10L", alias = "under_10l")]
    Under10L,
    #[serde(rename = "10L - 15L", alias = "from_10_to_15l")]
    From10To15L,
    #[serde(rename = "16L - 25L", alias = "from_16_to_25l")]
    From16To25L,
    #[serde(rename = "26L - 35L", alias = "from_26_to_35l")]
    From26To35L,
    #[serde(rename = "> 35L", alias = "above_35l")]
    Above35L,
}

impl Income {
    pub const ALL: [Income; 6] = [
        Income::None,
        Income::Under10L,
        Income::From10To15L,
        Income::From16To25L,
        Income::From26To35L,
        Income::Above35L,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Income::None => "None",
            Income::Under10L => "<10L",
            Income::From10To15L => "10L - 15L",
            Income::From16To25L => "16L - 25L",
            Income::From26To35L => "26L - 35L",
            Income::Above35L => "> 35L",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthConcern {
    #[serde(rename = "Low (Not very concerned)", alias = "low")]
    Low,
    #[serde(rename = "Medium (Moderately health-conscious)", alias = "medium")]
    Medium,
    #[serde(rename = "High (Very health-conscious)", alias = "high")]
    High,
}

impl HealthConcern {
    pub const ALL: [HealthConcern; 3] = [
        HealthConcern::Low,
        HealthConcern::Medium,
        HealthConcern::High,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            HealthConcern::Low => "Low (Not very concerned)",
            HealthConcern::Medium => "Medium (Moderately health-conscious)",
            HealthConcern::High => "High (Very health-conscious)",
        }
    }
}

/// Weekly consumption frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsumeFrequency {
    #[serde(rename = "0-2 times", alias = "zero_to_two")]
    ZeroToTwo,
    #[serde(rename = "3-4 times", alias = "three_to_four")]
    ThreeToFour,
    #[serde(rename = "5-7 times", alias = "five_to_seven")]
    FiveToSeven,
}

impl ConsumeFrequency {
    pub const ALL: [ConsumeFrequency; 3] = [
        ConsumeFrequency::ZeroToTwo,
        ConsumeFrequency::ThreeToFour,
        ConsumeFrequency::FiveToSeven,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ConsumeFrequency::ZeroToTwo => "0-2 times",
            ConsumeFrequency::ThreeToFour => "3-4 times",
            ConsumeFrequency::FiveToSeven => "5-7 times",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurrentBrand {
    #[serde(alias = "established")]
    Established,
    #[serde(alias = "newcomer")]
    Newcomer,
}

impl CurrentBrand {
    pub const ALL: [CurrentBrand; 2] = [CurrentBrand::Established, CurrentBrand::Newcomer];

    pub fn label(&self) -> &'static str {
        match self {
            CurrentBrand::Established => "Established",
            CurrentBrand::Newcomer => "Newcomer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PackSize {
    #[serde(rename = "Small (250 ml)", alias = "small")]
    Small,
    #[serde(rename = "Medium (500 ml)", alias = "medium")]
    Medium,
    #[serde(rename = "Large (1 L)", alias = "large")]
    Large,
}

impl PackSize {
    pub const ALL: [PackSize; 3] = [PackSize::Small, PackSize::Medium, PackSize::Large];

    pub fn label(&self) -> &'static str {
        match self {
            PackSize::Small => "Small (250 ml)",
            PackSize::Medium => "Medium (500 ml)",
            PackSize::Large => "Large (1 L)",
        }
    }
}

/// Number of other brands the respondent knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrandAwareness {
    #[serde(rename = "0 to 1", alias = "zero_to_one")]
    ZeroToOne,
    #[serde(rename = "2 to 4", alias = "two_to_four")]
    TwoToFour,
    #[serde(rename = "above 4", alias = "above_four")]
    AboveFour,
}

impl BrandAwareness {
    pub const ALL: [BrandAwareness; 3] = [
        BrandAwareness::ZeroToOne,
        BrandAwareness::TwoToFour,
        BrandAwareness::AboveFour,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BrandAwareness::ZeroToOne => "0 to 1",
            BrandAwareness::TwoToFour => "2 to 4",
            BrandAwareness::AboveFour => "above 4",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChoiceReason {
    #[serde(alias = "price")]
    Price,
    #[serde(alias = "quality")]
    Quality,
    #[serde(rename = "Brand Reputation", alias = "brand_reputation")]
    BrandReputation,
}

impl ChoiceReason {
    pub const ALL: [ChoiceReason; 3] = [
        ChoiceReason::Price,
        ChoiceReason::Quality,
        ChoiceReason::BrandReputation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ChoiceReason::Price => "Price",
            ChoiceReason::Quality => "Quality",
            ChoiceReason::BrandReputation => "Brand Reputation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flavor {
    #[serde(alias = "traditional")]
    Traditional,
    #[serde(alias = "exotic")]
    Exotic,
}

impl Flavor {
    pub const ALL: [Flavor; 2] = [Flavor::Traditional, Flavor::Exotic];

    pub fn label(&self) -> &'static str {
        match self {
            Flavor::Traditional => "Traditional",
            Flavor::Exotic => "Exotic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PurchaseChannel {
    #[serde(rename = "Retail Store", alias = "retail_store")]
    RetailStore,
    #[serde(alias = "online")]
    Online,
}

impl PurchaseChannel {
    pub const ALL: [PurchaseChannel; 2] = [PurchaseChannel::RetailStore, PurchaseChannel::Online];

    pub fn label(&self) -> &'static str {
        match self {
            PurchaseChannel::RetailStore => "Retail Store",
            PurchaseChannel::Online => "Online",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Packaging {
    #[serde(alias = "simple")]
    Simple,
    #[serde(alias = "premium")]
    Premium,
}

impl Packaging {
    pub const ALL: [Packaging; 2] = [Packaging::Simple, Packaging::Premium];

    pub fn label(&self) -> &'static str {
        match self {
            Packaging::Simple => "Simple",
            Packaging::Premium => "Premium",
        }
    }
}

/// Typical consumption situation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Situation {
    #[serde(rename = "Casual (eg. At home)", alias = "casual")]
    Casual,
    #[serde(rename = "Social (eg. Parties)", alias = "social")]
    Social,
    #[serde(rename = "Active (eg. Sports, gym)", alias = "active")]
    Active,
}

impl Situation {
    pub const ALL: [Situation; 3] = [Situation::Casual, Situation::Social, Situation::Active];

    pub fn label(&self) -> &'static str {
        match self {
            Situation::Casual => "Casual (eg. At home)",
            Situation::Social => "Social (eg. Parties)",
            Situation::Active => "Active (eg. Sports, gym)",
        }
    }
}
