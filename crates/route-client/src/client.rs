//! Typed client for the route service endpoints

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;

use route_core::{Place, ProcessedBatch};

use crate::error::{Result, RouteClientError};

/// A batch is processed synchronously, including the artifact write
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Echo returned by `GET /items/{item_id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemEcho {
    pub item_id: i64,
    pub q: Option<String>,
}

/// `{error, message}` body of a failed request
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for one route server
#[derive(Debug, Clone)]
pub struct RouteClient {
    http: Client,
    base_url: Url,
}

impl RouteClient {
    /// Connect to the server at `base_url` (e.g. "http://localhost:8000")
    pub fn new(base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: Url::parse(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Submit places; the server answers with the deduplicated, reversed
    /// list and one directions link per route group
    #[instrument(skip(self, places), fields(count = places.len()))]
    pub async fn submit_places(&self, places: &[Place]) -> Result<ProcessedBatch> {
        let url = self.endpoint("/places")?;
        debug!(%url, "Submitting places");

        let response = self.dispatch(self.http.post(url).json(places)).await?;
        decode(response).await
    }

    /// GET /
    pub async fn root(&self) -> Result<serde_json::Value> {
        let response = self.dispatch(self.http.get(self.endpoint("/")?)).await?;
        decode(response).await
    }

    /// GET /items/{item_id}?q=
    #[instrument(skip(self))]
    pub async fn get_item(&self, item_id: i64, q: Option<&str>) -> Result<ItemEcho> {
        let mut url = self.endpoint(&format!("/items/{}", item_id))?;
        if let Some(q) = q {
            url.query_pairs_mut().append_pair("q", q);
        }

        let response = self.dispatch(self.http.get(url)).await?;
        decode(response).await
    }

    /// GET /health, returns the plain-text body
    pub async fn health(&self) -> Result<String> {
        let response = self.dispatch(self.http.get(self.endpoint("/health")?)).await?;
        Ok(response.text().await?)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Send the request and turn non-2xx answers into errors
    async fn dispatch(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                RouteClientError::Timeout
            } else {
                RouteClientError::HttpError(e)
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| format!("HTTP {}", status));

        Err(match status {
            StatusCode::UNPROCESSABLE_ENTITY => RouteClientError::Validation(message),
            StatusCode::GATEWAY_TIMEOUT => RouteClientError::Timeout,
            _ => RouteClientError::server_error(status.as_u16(), message),
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    response
        .json()
        .await
        .map_err(|e| RouteClientError::ParseError(e.to_string()))
}
