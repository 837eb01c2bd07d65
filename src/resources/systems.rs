use reqwest::Method;

use crate::client::wrapper::HttpWrapper;
use crate::error::Error;
use crate::models::market::Market;
use crate::models::meta::{Page, Paginated};
use crate::models::navigation::JumpGate;
use crate::models::shipyard::Shipyard;
use crate::models::system::System;
use crate::models::waypoint::Waypoint;

#[derive(Clone)]
pub struct SystemsResource {
    client: HttpWrapper,
    waypoints: WaypointsResource,
}

impl SystemsResource {
    pub(crate) fn new(client: HttpWrapper) -> Self {
        Self {
            waypoints: WaypointsResource::new(client.clone()),
            client,
        }
    }

    /// Waypoint-level detail within a system.
    pub fn waypoints(&self) -> &WaypointsResource {
        &self.waypoints
    }

    /// Return a page of all systems.
    pub async fn list(&self, page: Page) -> Result<Paginated<System>, Error> {
        self.client
            .request_to_paginated(Method::GET, "/systems", &page.to_query(), None)
            .await
    }

    /// Get the details of a system.
    pub async fn get(&self, system: &str) -> Result<System, Error> {
        self.client
            .request_to_model(Method::GET, &format!("/systems/{system}"), &[], None)
            .await
    }

    /// Fetch every system at once from the undocumented bulk endpoint.
    /// The body is a bare array with no envelope.
    pub async fn all(&self) -> Result<Vec<System>, Error> {
        let tree = self
            .client
            .raw_request(Method::GET, "/systems.json", &[], None)
            .await?
            .ok_or(Error::MissingData)?;
        serde_json::from_value(tree).map_err(Error::Validation)
    }
}

#[derive(Clone)]
pub struct WaypointsResource {
    client: HttpWrapper,
}

impl WaypointsResource {
    pub(crate) fn new(client: HttpWrapper) -> Self {
        Self { client }
    }

    /// Fetch a page of waypoints for a system. The system must be charted
    /// or a ship must be present for details to come back.
    pub async fn list(&self, system: &str, page: Page) -> Result<Paginated<Waypoint>, Error> {
        self.client
            .request_to_paginated(
                Method::GET,
                &format!("/systems/{system}/waypoints"),
                &page.to_query(),
                None,
            )
            .await
    }

    /// View the details of a waypoint.
    pub async fn get(&self, system: &str, waypoint: &str) -> Result<Waypoint, Error> {
        self.client
            .request_to_model(
                Method::GET,
                &format!("/systems/{system}/waypoints/{waypoint}"),
                &[],
                None,
            )
            .await
    }

    /// Retrieve imports, exports, and exchange data from a marketplace.
    /// Trade good prices and recent transactions require a ship at the
    /// waypoint.
    pub async fn market(&self, system: &str, waypoint: &str) -> Result<Market, Error> {
        self.client
            .request_to_model(
                Method::GET,
                &format!("/systems/{system}/waypoints/{waypoint}/market"),
                &[],
                None,
            )
            .await
    }

    /// Get the shipyard for a waypoint. Available stock and recent
    /// transactions require a ship at the waypoint.
    pub async fn shipyard(&self, system: &str, waypoint: &str) -> Result<Shipyard, Error> {
        self.client
            .request_to_model(
                Method::GET,
                &format!("/systems/{system}/waypoints/{waypoint}/shipyard"),
                &[],
                None,
            )
            .await
    }

    /// Get jump gate details for a waypoint.
    pub async fn jump_gate(&self, system: &str, waypoint: &str) -> Result<JumpGate, Error> {
        self.client
            .request_to_model(
                Method::GET,
                &format!("/systems/{system}/waypoints/{waypoint}/jump-gate"),
                &[],
                None,
            )
            .await
    }
}
