use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::RETRY_AFTER, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use url::Url;

use super::{
    errors::{Error, RemoteErr, Result},
    params::Variables,
    queries::QueryTemplate,
};

/// The `data` object of a GraphQL response.
pub type QueryResult = Value;

/// Sends one query template to the remote and returns its decoded `data` payload.
///
/// Implementations perform exactly one round trip per call and never retry.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute(&self, template: QueryTemplate, variables: &Variables) -> Result<QueryResult>;
}

/// [`QueryExecutor`] that POSTs GraphQL documents over HTTP.
#[derive(Clone, Debug)]
pub struct HttpExecutor {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpExecutor {
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|err| Error::Transport(format!("failed to build http client: {err}")))?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn map_transport_error(err: reqwest::Error) -> Error {
        match err.status() {
            Some(status) => Error::Http {
                status: status.as_u16(),
                body: err.to_string(),
            },
            None => Error::Transport(err.to_string()),
        }
    }
}

#[async_trait]
impl QueryExecutor for HttpExecutor {
    async fn execute(&self, template: QueryTemplate, variables: &Variables) -> Result<QueryResult> {
        let body = json!({
            "query": template.document(),
            "operationName": template.operation_name(),
            "variables": variables.as_value(),
        });

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.trim().parse::<u64>().ok());
            return Err(Error::RateLimited { retry_after });
        }

        let text = response.text().await.map_err(Self::map_transport_error)?;
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        decode_envelope(&text)
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<RemoteErr>,
}

/// Splits a GraphQL response body into its `data` object or an error.
pub(crate) fn decode_envelope(body: &str) -> Result<QueryResult> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|err| Error::schema("response", err))?;

    if !envelope.errors.is_empty() {
        return Err(Error::Remote {
            messages: envelope.errors.into_iter().map(|e| e.message).collect(),
        });
    }

    match envelope.data {
        Some(data @ Value::Object(_)) => Ok(data),
        Some(_) => Err(Error::schema("data", "expected an object")),
        None => Err(Error::schema("data", "missing from response")),
    }
}
