use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::agent::Agent;
use crate::models::ship::ShipCargo;
use crate::models::validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractType {
    Procurement,
    Transport,
    Shuttle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractPayment {
    /// Credits paid up front for accepting the contract.
    pub on_accepted: i64,
    /// Credits paid when the contract is fulfilled.
    pub on_fulfilled: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractDeliverGood {
    #[serde(deserialize_with = "validate::non_empty")]
    pub trade_symbol: String,
    #[serde(deserialize_with = "validate::non_empty")]
    pub destination_symbol: String,
    pub units_required: u32,
    pub units_fulfilled: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractTerms {
    pub deadline: DateTime<Utc>,
    pub payment: ContractPayment,
    pub deliver: Option<Vec<ContractDeliverGood>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    #[serde(deserialize_with = "validate::non_empty")]
    pub id: String,
    #[serde(deserialize_with = "validate::non_empty")]
    pub faction_symbol: String,
    #[serde(rename = "type")]
    pub contract_type: ContractType,
    pub terms: ContractTerms,
    pub accepted: bool,
    pub fulfilled: bool,
    pub expiration: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcceptContractData {
    pub agent: Agent,
    pub contract: Contract,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliverContractData {
    pub contract: Contract,
    pub cargo: ShipCargo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FulfillContractData {
    pub agent: Agent,
    pub contract: Contract,
}
