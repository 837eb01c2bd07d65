//! Request/response marshalling around the injected transport.
//!
//! `raw_request` is the single chokepoint every API call goes through:
//! it encodes the body, dispatches, runs the error-envelope interception
//! stage, and hands back a generic JSON tree (or nothing, for 204). The
//! three typed variants layered on top unwrap the `{"data": ...}` envelope
//! in the three shapes the API uses.

use reqwest::Method;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::client::codec;
use crate::error::Error;
use crate::models::meta::Paginated;

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    message: String,
    code: i64,
    data: Option<Value>,
}

/// Interception stage every decoded response passes through before any
/// model construction. A present `error` object aborts normal processing.
fn check_error_envelope(tree: &Value) -> Result<(), Error> {
    let Some(error) = tree.get("error") else {
        return Ok(());
    };
    let envelope: ErrorEnvelope =
        serde_json::from_value(error.clone()).map_err(Error::Validation)?;
    warn!(code = envelope.code, message = %envelope.message, "api reported an error");
    Err(Error::Api {
        message: envelope.message,
        code: envelope.code,
        data: envelope.data,
    })
}

/// Thin wrapper over a configured `reqwest::Client`. Connection handling,
/// TLS, redirects, and timeouts all belong to the transport; cloning is
/// cheap and shares the same pool.
#[derive(Clone)]
pub struct HttpWrapper {
    http: reqwest::Client,
    base_url: String,
}

impl HttpWrapper {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Perform one HTTP call and return the decoded body, or `None` for a
    /// 204 response. Callers that can legitimately receive 204 (cooldown
    /// queries) must treat `None` as "no value", not as an error.
    pub async fn raw_request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<Option<Value>, Error> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method.clone(), &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(codec::encode(body)?);
        }

        debug!(%method, path, "dispatching request");
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        debug!(status = status.as_u16(), bytes = bytes.len(), "response received");

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        let tree = codec::decode(&bytes)?;
        check_error_envelope(&tree)?;
        Ok(Some(tree))
    }

    /// Unwrap `data` and construct exactly one model. A missing envelope or
    /// a missing `data` key is [`Error::MissingData`].
    pub async fn request_to_model<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<T, Error> {
        let mut tree = self
            .raw_request(method, path, query, body)
            .await?
            .ok_or(Error::MissingData)?;
        let data = tree
            .get_mut("data")
            .map(Value::take)
            .ok_or(Error::MissingData)?;
        serde_json::from_value(data).map_err(Error::Validation)
    }

    /// Like [`request_to_model`](Self::request_to_model), but an absent
    /// result (204, or an envelope carrying no `data`) is `Ok(None)`.
    pub async fn request_to_model_optioned<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<Option<T>, Error> {
        let Some(mut tree) = self.raw_request(method, path, query, body).await? else {
            return Ok(None);
        };
        match tree.get_mut("data") {
            Some(data) if !data.is_null() => serde_json::from_value(data.take())
                .map(Some)
                .map_err(Error::Validation),
            _ => Ok(None),
        }
    }

    /// Construct the whole pagination envelope: a `data` list of models
    /// plus `meta`.
    pub async fn request_to_paginated<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<Paginated<T>, Error> {
        let tree = self
            .raw_request(method, path, query, body)
            .await?
            .ok_or(Error::MissingData)?;
        serde_json::from_value(tree).map_err(Error::Validation)
    }
}
