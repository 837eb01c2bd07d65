use serde::{Deserialize, Serialize};

use crate::models::ship::{Cooldown, ShipFuel, ShipNav, ShipRegistration};
use crate::models::system::{ScannedSystem, SystemType};
use crate::models::validate;
use crate::models::waypoint::{Chart, Waypoint};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedSystem {
    #[serde(deserialize_with = "validate::non_empty")]
    pub symbol: String,
    #[serde(deserialize_with = "validate::non_empty")]
    pub sector_symbol: String,
    #[serde(rename = "type")]
    pub system_type: SystemType,
    /// Owner of the connected gate, if any.
    pub faction_symbol: Option<String>,
    pub x: i32,
    pub y: i32,
    pub distance: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JumpGate {
    pub jump_range: f64,
    pub faction_symbol: Option<String>,
    /// Systems in range that have a corresponding gate.
    pub connected_systems: Vec<ConnectedSystem>,
}

// Scanned ships expose component symbols only, not full component detail.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedFrame {
    pub symbol: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedReactor {
    pub symbol: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedEngine {
    pub symbol: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedMount {
    pub symbol: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScannedShip {
    pub symbol: String,
    pub registration: ShipRegistration,
    pub nav: ShipNav,
    pub frame: Option<ScannedFrame>,
    pub reactor: Option<ScannedReactor>,
    pub engine: ScannedEngine,
    pub mounts: Option<Vec<ScannedMount>>,
}

/// Jump outcome; `nav` is absent when the gate handled the jump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JumpData {
    pub cooldown: Cooldown,
    pub nav: Option<ShipNav>,
}

/// Shared by navigate and warp: the consumed fuel plus the new route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigateData {
    pub fuel: ShipFuel,
    pub nav: ShipNav,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub chart: Chart,
    pub waypoint: Waypoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanSystemsData {
    pub cooldown: Cooldown,
    pub systems: Vec<ScannedSystem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanWaypointsData {
    pub cooldown: Cooldown,
    pub waypoints: Vec<Waypoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanShipsData {
    pub cooldown: Cooldown,
    pub ships: Vec<ScannedShip>,
}
