//! Payload of the unauthenticated GET `/` endpoint: server status, universe
//! counts, and leaderboards. The body arrives without the usual `data`
//! envelope.

use serde::{Deserialize, Serialize};

use crate::models::validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerStats {
    pub agents: u64,
    pub ships: u64,
    pub systems: u64,
    pub waypoints: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditLeader {
    #[serde(rename = "agentSymbol", deserialize_with = "validate::non_empty")]
    pub agent: String,
    pub credits: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartLeader {
    #[serde(rename = "agentSymbol", deserialize_with = "validate::non_empty")]
    pub agent: String,
    #[serde(rename = "chartCount")]
    pub chart_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboards {
    pub most_credits: Vec<CreditLeader>,
    pub most_submitted_charts: Vec<ChartLeader>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerStatus {
    pub status: String,
    pub stats: ServerStats,
    pub leaderboards: Leaderboards,
}
