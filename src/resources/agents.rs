use reqwest::Method;

use crate::client::wrapper::HttpWrapper;
use crate::error::Error;
use crate::models::agent::Agent;

#[derive(Clone)]
pub struct AgentsResource {
    client: HttpWrapper,
}

impl AgentsResource {
    pub(crate) fn new(client: HttpWrapper) -> Self {
        Self { client }
    }

    /// Fetch your agent's details.
    pub async fn info(&self) -> Result<Agent, Error> {
        self.client
            .request_to_model(Method::GET, "/my/agent", &[], None)
            .await
    }
}
