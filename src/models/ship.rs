use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::agent::Agent;
use crate::models::validate;
use crate::models::waypoint::WaypointType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipRole {
    Fabricator,
    Harvester,
    Hauler,
    Interceptor,
    Excavator,
    Transport,
    Repair,
    Surveyor,
    Command,
    Carrier,
    Patrol,
    Satellite,
    Explorer,
    Refinery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipNavStatus {
    InTransit,
    InOrbit,
    Docked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipNavFlightMode {
    Drift,
    Stealth,
    Cruise,
    Burn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CrewRotation {
    Strict,
    Relaxed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FrameSymbol {
    FrameProbe,
    FrameDrone,
    FrameInterceptor,
    FrameRacer,
    FrameFighter,
    FrameFrigate,
    FrameShuttle,
    FrameExplorer,
    FrameMiner,
    FrameLightFreighter,
    FrameHeavyFreighter,
    FrameTransport,
    FrameDestroyer,
    FrameCruiser,
    FrameCarrier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReactorSymbol {
    ReactorSolarI,
    ReactorFusionI,
    ReactorFissionI,
    ReactorChemicalI,
    ReactorAntimatterI,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EngineSymbol {
    EngineImpulseDriveI,
    EngineIonDriveI,
    EngineIonDriveIi,
    EngineHyperDriveI,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModuleSymbol {
    ModuleMineralProcessorI,
    ModuleCargoHoldI,
    ModuleCrewQuartersI,
    ModuleEnvoyQuartersI,
    ModulePassengerCabinI,
    ModuleMicroRefineryI,
    ModuleOreRefineryI,
    ModuleFuelRefineryI,
    ModuleScienceLabI,
    ModuleJumpDriveI,
    ModuleJumpDriveIi,
    ModuleJumpDriveIii,
    ModuleWarpDriveI,
    ModuleWarpDriveIi,
    ModuleWarpDriveIii,
    ModuleShieldGeneratorI,
    ModuleShieldGeneratorIi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MountSymbol {
    MountGasSiphonI,
    MountGasSiphonIi,
    MountGasSiphonIii,
    MountSurveyorI,
    MountSurveyorIi,
    MountSurveyorIii,
    MountSensorArrayI,
    MountSensorArrayIi,
    MountSensorArrayIii,
    MountMiningLaserI,
    MountMiningLaserIi,
    MountMiningLaserIii,
    MountLaserCannonI,
    MountMissileLauncherI,
    MountTurretI,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DepositSymbol {
    QuartzSand,
    SiliconCrystals,
    PreciousStones,
    IceWater,
    AmmoniaIce,
    IronOre,
    CopperOre,
    SilverOre,
    AluminumOre,
    GoldOre,
    PlatinumOre,
    Diamonds,
    UraniteOre,
    MeritiumOre,
}

/// Hull configurations purchasable at a shipyard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipType {
    ShipProbe,
    ShipMiningDrone,
    ShipInterceptor,
    ShipLightHauler,
    ShipCommandFrigate,
    ShipExplorer,
    ShipHeavyFreighter,
    ShipLightShuttle,
    ShipOreHound,
    ShipRefiningFreighter,
}

/// Wear level from 0 (worn out) to 100 (brand new). A bare integer on the
/// wire; construction fails outside the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ShipCondition(u32);

impl ShipCondition {
    pub fn value(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for ShipCondition {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value > 100 {
            return Err(format!("condition {value} is out of range 0..=100"));
        }
        Ok(Self(value))
    }
}

impl From<ShipCondition> for u32 {
    fn from(condition: ShipCondition) -> Self {
        condition.0
    }
}

/// What a component demands from the rest of the ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipRequirements {
    pub power: Option<i32>,
    pub crew: Option<i32>,
    pub slots: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipRegistration {
    #[serde(deserialize_with = "validate::non_empty")]
    pub name: String,
    pub faction_symbol: Option<String>,
    pub role: ShipRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipNavRouteWaypoint {
    #[serde(deserialize_with = "validate::non_empty")]
    pub symbol: String,
    #[serde(rename = "type")]
    pub waypoint_type: WaypointType,
    #[serde(deserialize_with = "validate::non_empty")]
    pub system_symbol: String,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipNavRoute {
    pub destination: ShipNavRouteWaypoint,
    pub departure: ShipNavRouteWaypoint,
    pub departure_time: DateTime<Utc>,
    /// Expected time of arrival while in transit.
    pub arrival: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipNav {
    pub system_symbol: String,
    /// Current waypoint, or the destination while in transit.
    pub waypoint_symbol: String,
    pub route: ShipNavRoute,
    pub status: ShipNavStatus,
    pub flight_mode: ShipNavFlightMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipCrew {
    pub current: i32,
    pub required: i32,
    pub capacity: i32,
    /// Stricter rotations favor performance, relaxed ones morale.
    pub rotation: CrewRotation,
    #[serde(deserialize_with = "validate::percent")]
    pub morale: u32,
    /// Credits per crew member per hour, paid on docking.
    pub wages: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipFrame {
    pub symbol: FrameSymbol,
    pub name: String,
    pub description: String,
    pub condition: Option<ShipCondition>,
    pub module_slots: u32,
    pub mounting_points: u32,
    pub fuel_capacity: u32,
    pub requirements: ShipRequirements,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipReactor {
    pub symbol: ReactorSymbol,
    pub name: String,
    pub description: String,
    pub condition: Option<ShipCondition>,
    #[serde(deserialize_with = "validate::at_least_one")]
    pub power_output: u32,
    pub requirements: ShipRequirements,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipEngine {
    pub symbol: EngineSymbol,
    pub name: String,
    pub description: String,
    pub condition: Option<ShipCondition>,
    #[serde(deserialize_with = "validate::min_speed")]
    pub speed: f64,
    pub requirements: ShipRequirements,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipModule {
    pub symbol: ModuleSymbol,
    pub capacity: Option<u32>,
    pub range: Option<u32>,
    pub name: String,
    pub description: Option<String>,
    pub requirements: ShipRequirements,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipMount {
    pub symbol: MountSymbol,
    pub name: String,
    pub description: Option<String>,
    pub strength: Option<u32>,
    pub deposits: Option<Vec<DepositSymbol>>,
    pub requirements: ShipRequirements,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipCargoItem {
    pub symbol: String,
    pub name: String,
    pub description: String,
    #[serde(deserialize_with = "validate::at_least_one")]
    pub units: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipCargo {
    pub capacity: u32,
    pub units: u32,
    pub inventory: Vec<ShipCargoItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelConsumed {
    pub amount: u32,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipFuel {
    pub current: u32,
    pub capacity: u32,
    /// Most recent transit or action; absent until the ship first burns fuel.
    pub consumed: Option<FuelConsumed>,
}

/// Reactor cooldown after a taxing action (jump, scan, extract, survey).
/// The client never tracks or simulates this locally; it is only what the
/// server last reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cooldown {
    #[serde(deserialize_with = "validate::non_empty")]
    pub ship_symbol: String,
    pub total_seconds: u32,
    pub remaining_seconds: u32,
    pub expiration: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub symbol: String,
    pub registration: ShipRegistration,
    pub nav: ShipNav,
    pub crew: ShipCrew,
    pub frame: ShipFrame,
    pub reactor: ShipReactor,
    pub engine: ShipEngine,
    pub modules: Vec<ShipModule>,
    pub mounts: Vec<ShipMount>,
    pub cargo: ShipCargo,
    pub fuel: ShipFuel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefuelData {
    pub agent: Agent,
    pub fuel: ShipFuel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_is_a_bare_integer_on_the_wire() {
        let condition: ShipCondition = serde_json::from_str("87").unwrap();
        assert_eq!(condition.value(), 87);
        assert_eq!(serde_json::to_string(&condition).unwrap(), "87");
    }

    #[test]
    fn condition_above_100_fails() {
        assert!(serde_json::from_str::<ShipCondition>("101").is_err());
    }

    #[test]
    fn unknown_ship_role_fails_construction() {
        let err = serde_json::from_str::<ShipRole>("\"JANITOR\"").unwrap_err();
        assert!(err.to_string().contains("JANITOR"));
    }

    #[test]
    fn registration_with_known_role_parses() {
        let json = r#"{"name": "HEART-OF-GOLD", "factionSymbol": "COSMIC", "role": "COMMAND"}"#;
        let registration: ShipRegistration = serde_json::from_str(json).unwrap();
        assert_eq!(registration.role, ShipRole::Command);
        assert_eq!(registration.faction_symbol.as_deref(), Some("COSMIC"));
    }
}
