use serde::{Deserialize, Serialize};

use crate::models::validate;
use crate::models::waypoint::WaypointType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SystemType {
    NeutronStar,
    RedStar,
    OrangeStar,
    BlueStar,
    YoungStar,
    WhiteDwarf,
    BlackHole,
    Hypergiant,
    Nebula,
    Unstable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemWaypoint {
    pub symbol: String,
    #[serde(rename = "type")]
    pub waypoint_type: WaypointType,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemFaction {
    #[serde(deserialize_with = "validate::non_empty")]
    pub symbol: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct System {
    #[serde(deserialize_with = "validate::non_empty")]
    pub symbol: String,
    #[serde(deserialize_with = "validate::non_empty")]
    pub sector_symbol: String,
    #[serde(rename = "type")]
    pub system_type: SystemType,
    pub x: i32,
    pub y: i32,
    pub waypoints: Vec<SystemWaypoint>,
    pub factions: Vec<SystemFaction>,
}

/// System as seen through a ship's sensor array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannedSystem {
    #[serde(deserialize_with = "validate::non_empty")]
    pub symbol: String,
    #[serde(deserialize_with = "validate::non_empty")]
    pub sector_symbol: String,
    #[serde(rename = "type")]
    pub system_type: SystemType,
    pub x: i32,
    pub y: i32,
    pub distance: i32,
}
