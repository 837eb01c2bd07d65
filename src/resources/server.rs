use reqwest::Method;

use crate::client::wrapper::HttpWrapper;
use crate::error::Error;
use crate::models::server::ServerStatus;

#[derive(Clone)]
pub struct ServerResource {
    client: HttpWrapper,
}

impl ServerResource {
    pub(crate) fn new(client: HttpWrapper) -> Self {
        Self { client }
    }

    /// Server status, universe stats, and leaderboards. The body of GET `/`
    /// comes back without the usual `data` envelope.
    pub async fn stats(&self) -> Result<ServerStatus, Error> {
        let tree = self
            .client
            .raw_request(Method::GET, "/", &[], None)
            .await?
            .ok_or(Error::MissingData)?;
        serde_json::from_value(tree).map_err(Error::Validation)
    }
}
