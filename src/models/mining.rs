use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::ship::{Cooldown, ShipCargo};
use crate::models::validate;

/// How much a survey's deposit can yield before it is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SurveySize {
    Small,
    Moderate,
    Large,
}

/// Goods a refinery module can produce from raw ore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RefineProduce {
    Iron,
    Copper,
    Silver,
    Gold,
    Aluminum,
    Platinum,
    Uranite,
    Meritium,
    Fuel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyDeposit {
    pub symbol: String,
}

/// Reusable extraction target. The signature is verified by the server when
/// the survey is sent back in an extract request; a symbol appearing more
/// than once in `deposits` means a higher chance of that yield.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    #[serde(deserialize_with = "validate::non_empty")]
    pub signature: String,
    /// Waypoint the survey targets.
    #[serde(deserialize_with = "validate::non_empty")]
    pub symbol: String,
    pub deposits: Vec<SurveyDeposit>,
    /// Past this instant the survey is no longer accepted for extraction.
    pub expiration: DateTime<Utc>,
    pub size: SurveySize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionYield {
    #[serde(deserialize_with = "validate::non_empty")]
    pub symbol: String,
    /// Units placed into the ship's cargo hold.
    pub units: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extraction {
    #[serde(deserialize_with = "validate::non_empty")]
    pub ship_symbol: String,
    #[serde(rename = "yield")]
    pub extraction_yield: ExtractionYield,
}

/// One line of a refinery run; the same shape reports goods produced and
/// goods consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinedGood {
    pub trade_symbol: Option<String>,
    pub units: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyData {
    pub cooldown: Cooldown,
    pub surveys: Vec<Survey>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionData {
    pub cooldown: Cooldown,
    pub extraction: Extraction,
    pub cargo: ShipCargo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefineData {
    pub cargo: ShipCargo,
    pub cooldown: Cooldown,
    pub produced: Vec<RefinedGood>,
    pub consumed: Vec<RefinedGood>,
}
