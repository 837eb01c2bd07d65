use reqwest::Method;
use serde::Deserialize;
use serde_json::json;

use crate::client::wrapper::HttpWrapper;
use crate::error::Error;
use crate::models::market::{PurchaseCargoData, SellCargoData, TradeSymbol};
use crate::models::meta::{Page, Paginated};
use crate::models::mining::{ExtractionData, RefineData, RefineProduce, Survey, SurveyData};
use crate::models::navigation::{
    ChartData, JumpData, NavigateData, ScanShipsData, ScanSystemsData, ScanWaypointsData,
};
use crate::models::ship::{
    Cooldown, RefuelData, Ship, ShipCargo, ShipNav, ShipNavFlightMode, ShipType,
};
use crate::models::shipyard::PurchaseShipData;

// Some endpoints nest their payload one level below `data`; these envelopes
// pull the interesting field out.

#[derive(Deserialize)]
struct NavData {
    nav: ShipNav,
}

#[derive(Deserialize)]
struct CargoData {
    cargo: ShipCargo,
}

#[derive(Clone)]
pub struct FleetResource {
    client: HttpWrapper,
    cargo: CargoResource,
    scan: ScanResource,
}

impl FleetResource {
    pub(crate) fn new(client: HttpWrapper) -> Self {
        Self {
            cargo: CargoResource::new(client.clone()),
            scan: ScanResource::new(client.clone()),
            client,
        }
    }

    /// Cargo hold operations.
    pub fn cargo(&self) -> &CargoResource {
        &self.cargo
    }

    /// Sensor array scans.
    pub fn scan(&self) -> &ScanResource {
        &self.scan
    }

    /// Retrieve a page of your ships.
    pub async fn list(&self, page: Page) -> Result<Paginated<Ship>, Error> {
        self.client
            .request_to_paginated(Method::GET, "/my/ships", &page.to_query(), None)
            .await
    }

    /// Retrieve the details of one of your ships.
    pub async fn get(&self, ship: &str) -> Result<Ship, Error> {
        self.client
            .request_to_model(Method::GET, &format!("/my/ships/{ship}"), &[], None)
            .await
    }

    /// Purchase a ship of the given type from the shipyard at `waypoint`.
    pub async fn purchase(
        &self,
        ship_type: ShipType,
        waypoint: &str,
    ) -> Result<PurchaseShipData, Error> {
        let body = json!({
            "shipType": ship_type,
            "waypointSymbol": waypoint,
        });
        self.client
            .request_to_model(Method::POST, "/my/ships", &[], Some(&body))
            .await
    }

    /// Move the ship into orbit at its current location. Idempotent.
    pub async fn orbit(&self, ship: &str) -> Result<ShipNav, Error> {
        let data: NavData = self
            .client
            .request_to_model(Method::POST, &format!("/my/ships/{ship}/orbit"), &[], None)
            .await?;
        Ok(data.nav)
    }

    /// Dock the ship at its current location. Idempotent.
    pub async fn dock(&self, ship: &str) -> Result<ShipNav, Error> {
        let data: NavData = self
            .client
            .request_to_model(Method::POST, &format!("/my/ships/{ship}/dock"), &[], None)
            .await?;
        Ok(data.nav)
    }

    /// Refine raw cargo into the requested produce. Requires a refinery
    /// module.
    pub async fn refine(&self, ship: &str, produce: RefineProduce) -> Result<RefineData, Error> {
        let body = json!({ "produce": produce });
        self.client
            .request_to_model(
                Method::POST,
                &format!("/my/ships/{ship}/refine"),
                &[],
                Some(&body),
            )
            .await
    }

    /// Chart the current waypoint, recording your agent as its discoverer.
    pub async fn chart(&self, ship: &str) -> Result<ChartData, Error> {
        self.client
            .request_to_model(Method::POST, &format!("/my/ships/{ship}/chart"), &[], None)
            .await
    }

    /// Retrieve the ship's reactor cooldown. `None` means the reactor is
    /// ready: the server answers 204, which is not an error and not an
    /// empty cooldown.
    pub async fn cooldown(&self, ship: &str) -> Result<Option<Cooldown>, Error> {
        self.client
            .request_to_model_optioned(Method::GET, &format!("/my/ships/{ship}/cooldown"), &[], None)
            .await
    }

    /// Survey the current waypoint for targetable extraction yields. Puts
    /// the reactor on cooldown; surveys expire after a while.
    pub async fn survey(&self, ship: &str) -> Result<SurveyData, Error> {
        self.client
            .request_to_model(Method::POST, &format!("/my/ships/{ship}/survey"), &[], None)
            .await
    }

    /// Extract resources at the current waypoint. Pass a survey to target
    /// its specific yields.
    pub async fn extract(
        &self,
        ship: &str,
        survey: Option<&Survey>,
    ) -> Result<ExtractionData, Error> {
        let body = match survey {
            Some(survey) => json!({ "survey": survey }),
            None => json!({}),
        };
        self.client
            .request_to_model(
                Method::POST,
                &format!("/my/ships/{ship}/extract"),
                &[],
                Some(&body),
            )
            .await
    }

    /// Jump instantly to a target system. Consumes a unit of antimatter.
    pub async fn jump(&self, ship: &str, system: &str) -> Result<JumpData, Error> {
        let body = json!({ "systemSymbol": system });
        self.client
            .request_to_model(
                Method::POST,
                &format!("/my/ships/{ship}/jump"),
                &[],
                Some(&body),
            )
            .await
    }

    /// Navigate to a waypoint in the same system. Consumes fuel; most ship
    /// actions stay unavailable until arrival.
    pub async fn navigate(&self, ship: &str, waypoint: &str) -> Result<NavigateData, Error> {
        let body = json!({ "waypointSymbol": waypoint });
        self.client
            .request_to_model(
                Method::POST,
                &format!("/my/ships/{ship}/navigate"),
                &[],
                Some(&body),
            )
            .await
    }

    /// Warp to a waypoint in another system.
    pub async fn warp(&self, ship: &str, waypoint: &str) -> Result<NavigateData, Error> {
        let body = json!({ "waypointSymbol": waypoint });
        self.client
            .request_to_model(
                Method::POST,
                &format!("/my/ships/{ship}/warp"),
                &[],
                Some(&body),
            )
            .await
    }

    /// Get the ship's current nav status.
    pub async fn nav(&self, ship: &str) -> Result<ShipNav, Error> {
        self.client
            .request_to_model(Method::GET, &format!("/my/ships/{ship}/nav"), &[], None)
            .await
    }

    /// Update the ship's flight mode.
    pub async fn flight_mode(
        &self,
        ship: &str,
        mode: ShipNavFlightMode,
    ) -> Result<ShipNav, Error> {
        let body = json!({ "flightMode": mode });
        self.client
            .request_to_model(
                Method::PATCH,
                &format!("/my/ships/{ship}/nav"),
                &[],
                Some(&body),
            )
            .await
    }

    /// Refuel from the local market.
    pub async fn refuel(&self, ship: &str) -> Result<RefuelData, Error> {
        self.client
            .request_to_model(Method::POST, &format!("/my/ships/{ship}/refuel"), &[], None)
            .await
    }
}

#[derive(Clone)]
pub struct CargoResource {
    client: HttpWrapper,
}

impl CargoResource {
    pub(crate) fn new(client: HttpWrapper) -> Self {
        Self { client }
    }

    /// Retrieve the ship's cargo hold.
    pub async fn get(&self, ship: &str) -> Result<ShipCargo, Error> {
        self.client
            .request_to_model(Method::GET, &format!("/my/ships/{ship}/cargo"), &[], None)
            .await
    }

    /// Jettison cargo overboard.
    pub async fn jettison(
        &self,
        ship: &str,
        cargo: TradeSymbol,
        units: u32,
    ) -> Result<ShipCargo, Error> {
        let body = json!({ "symbol": cargo, "units": units });
        let data: CargoData = self
            .client
            .request_to_model(
                Method::POST,
                &format!("/my/ships/{ship}/jettison"),
                &[],
                Some(&body),
            )
            .await?;
        Ok(data.cargo)
    }

    /// Sell cargo at the local market.
    pub async fn sell(
        &self,
        ship: &str,
        cargo: TradeSymbol,
        units: u32,
    ) -> Result<SellCargoData, Error> {
        let body = json!({ "symbol": cargo, "units": units });
        self.client
            .request_to_model(
                Method::POST,
                &format!("/my/ships/{ship}/sell"),
                &[],
                Some(&body),
            )
            .await
    }

    /// Purchase cargo from the local market.
    pub async fn purchase(
        &self,
        ship: &str,
        cargo: TradeSymbol,
        units: u32,
    ) -> Result<PurchaseCargoData, Error> {
        let body = json!({ "symbol": cargo, "units": units });
        self.client
            .request_to_model(
                Method::POST,
                &format!("/my/ships/{ship}/purchase"),
                &[],
                Some(&body),
            )
            .await
    }

    /// Transfer cargo to another of your ships at the same waypoint.
    /// Returns the sending ship's updated hold.
    pub async fn transfer(
        &self,
        from_ship: &str,
        to_ship: &str,
        cargo: TradeSymbol,
        units: u32,
    ) -> Result<ShipCargo, Error> {
        let body = json!({
            "tradeSymbol": cargo,
            "units": units,
            "shipSymbol": to_ship,
        });
        let data: CargoData = self
            .client
            .request_to_model(
                Method::POST,
                &format!("/my/ships/{from_ship}/transfer"),
                &[],
                Some(&body),
            )
            .await?;
        Ok(data.cargo)
    }
}

/// Sensor array scans. Each one taxes the reactor and starts a cooldown.
#[derive(Clone)]
pub struct ScanResource {
    client: HttpWrapper,
}

impl ScanResource {
    pub(crate) fn new(client: HttpWrapper) -> Self {
        Self { client }
    }

    /// Scan for systems in range.
    pub async fn systems(&self, ship: &str) -> Result<ScanSystemsData, Error> {
        self.client
            .request_to_model(
                Method::POST,
                &format!("/my/ships/{ship}/scan/systems"),
                &[],
                None,
            )
            .await
    }

    /// Scan the waypoints of the current system.
    pub async fn waypoints(&self, ship: &str) -> Result<ScanWaypointsData, Error> {
        self.client
            .request_to_model(
                Method::POST,
                &format!("/my/ships/{ship}/scan/waypoints"),
                &[],
                None,
            )
            .await
    }

    /// Scan for ships in range.
    pub async fn ships(&self, ship: &str) -> Result<ScanShipsData, Error> {
        self.client
            .request_to_model(
                Method::POST,
                &format!("/my/ships/{ship}/scan/ships"),
                &[],
                None,
            )
            .await
    }
}
