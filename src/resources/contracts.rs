use reqwest::Method;
use serde_json::json;

use crate::client::wrapper::HttpWrapper;
use crate::error::Error;
use crate::models::contract::{
    AcceptContractData, Contract, DeliverContractData, FulfillContractData,
};
use crate::models::meta::{Page, Paginated};

#[derive(Clone)]
pub struct ContractsResource {
    client: HttpWrapper,
}

impl ContractsResource {
    pub(crate) fn new(client: HttpWrapper) -> Self {
        Self { client }
    }

    /// List a page of your contracts.
    pub async fn list(&self, page: Page) -> Result<Paginated<Contract>, Error> {
        self.client
            .request_to_paginated(Method::GET, "/my/contracts", &page.to_query(), None)
            .await
    }

    /// Get the details of a contract by ID.
    pub async fn get(&self, contract_id: &str) -> Result<Contract, Error> {
        self.client
            .request_to_model(Method::GET, &format!("/my/contracts/{contract_id}"), &[], None)
            .await
    }

    /// Accept a contract. Pays out the on-accepted advance.
    pub async fn accept(&self, contract_id: &str) -> Result<AcceptContractData, Error> {
        self.client
            .request_to_model(
                Method::POST,
                &format!("/my/contracts/{contract_id}/accept"),
                &[],
                None,
            )
            .await
    }

    /// Deliver cargo from a ship's hold against a contract.
    pub async fn deliver(
        &self,
        contract_id: &str,
        ship: &str,
        trade: &str,
        units: u32,
    ) -> Result<DeliverContractData, Error> {
        let body = json!({
            "shipSymbol": ship,
            "tradeSymbol": trade,
            "units": units,
        });
        self.client
            .request_to_model(
                Method::POST,
                &format!("/my/contracts/{contract_id}/deliver"),
                &[],
                Some(&body),
            )
            .await
    }

    /// Fulfill a contract whose delivery terms are met.
    pub async fn fulfill(&self, contract_id: &str) -> Result<FulfillContractData, Error> {
        self.client
            .request_to_model(
                Method::POST,
                &format!("/my/contracts/{contract_id}/fulfill"),
                &[],
                None,
            )
            .await
    }
}
