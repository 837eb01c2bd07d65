use reqwest::Method;

use crate::client::wrapper::HttpWrapper;
use crate::error::Error;
use crate::models::faction::Faction;
use crate::models::meta::{Page, Paginated};

#[derive(Clone)]
pub struct FactionsResource {
    client: HttpWrapper,
}

impl FactionsResource {
    pub(crate) fn new(client: HttpWrapper) -> Self {
        Self { client }
    }

    /// List a page of all discovered factions.
    pub async fn list(&self, page: Page) -> Result<Paginated<Faction>, Error> {
        self.client
            .request_to_paginated(Method::GET, "/factions", &page.to_query(), None)
            .await
    }

    /// View the details of a faction.
    pub async fn get(&self, faction: &str) -> Result<Faction, Error> {
        self.client
            .request_to_model(Method::GET, &format!("/factions/{faction}"), &[], None)
            .await
    }
}
