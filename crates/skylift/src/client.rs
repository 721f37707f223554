//! Skylift client implementation.

use crate::config::{Config, SkyliftBuilder};
use crate::pullzone::PullZoneService;
use crate::response;
use crate::storagezone::StorageZoneService;
use crate::types::Pagination;
use crate::Error;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// Name of the authentication header expected by the API.
const ACCESS_KEY_HEADER: &str = "AccessKey";

/// Skylift API client.
///
/// All state is per-call; a single client can be shared freely across
/// tasks. Every call is exactly one attempt — no retries, no backoff.
///
/// # Example
///
/// ```rust,no_run
/// use skylift::Skylift;
///
/// #[tokio::main]
/// async fn main() -> Result<(), skylift::Error> {
///     let client = Skylift::builder("sk_xxx").build()?;
///
///     let zone = client.pull_zone().get(1234).await?;
///     println!("pull zone name: {:?}", zone.name);
///
///     Ok(())
/// }
/// ```
pub struct Skylift {
    config: Config,
    http: reqwest::Client,
}

impl Skylift {
    /// Create a new builder with the given API key.
    pub fn builder(api_key: impl Into<String>) -> SkyliftBuilder {
        SkyliftBuilder::new(api_key)
    }

    /// Create a new client from config and an optional pre-built transport.
    pub(crate) fn from_config(
        config: Config,
        http: Option<reqwest::Client>,
    ) -> Result<Self, Error> {
        let http = match http {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(config.timeout())
                .build()?,
        };

        Ok(Self { config, http })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Pull zone operations.
    pub fn pull_zone(&self) -> PullZoneService<'_> {
        PullZoneService::new(self)
    }

    /// Storage zone operations.
    pub fn storage_zone(&self) -> StorageZoneService<'_> {
        StorageZoneService::new(self)
    }

    // ============================================
    // INTERNAL
    // ============================================

    fn request(&self, method: Method, path: &str) -> (String, reqwest::RequestBuilder) {
        let url = format!("{}/{}", self.config.base_url(), path);
        let req = self
            .http
            .request(method, &url)
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, self.config.user_agent())
            .header(ACCESS_KEY_HEADER, self.config.api_key());
        (url, req)
    }

    /// Send the request and classify the outcome.
    ///
    /// A transport failure surfaces as [`Error::Request`] before
    /// classification ever runs.
    async fn execute(
        &self,
        url: &str,
        req: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, Error> {
        debug!(url, "sending request");

        let resp = req.send().await?;
        let status = resp.status().as_u16();

        match response::check_resp(url, resp).await {
            Ok(resp) => {
                debug!(url, status, "request succeeded");
                Ok(resp)
            }
            Err(err) => {
                warn!(url, status, error = %err, "request failed");
                Err(err)
            }
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        pagination: Option<&Pagination>,
    ) -> Result<T, Error> {
        let (url, mut req) = self.request(Method::GET, path);
        if let Some(pagination) = pagination {
            req = req.query(pagination);
        }

        let resp = self.execute(&url, req).await?;
        response::unmarshal_json(resp, &url).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let (url, req) = self.request(Method::POST, path);
        let resp = self.execute(&url, req.json(body)).await?;
        response::unmarshal_json(resp, &url).await
    }

    /// POST for endpoints that reply without a body.
    pub(crate) async fn post_no_reply<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), Error> {
        let (url, req) = self.request(Method::POST, path);
        self.execute(&url, req.json(body)).await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), Error> {
        let (url, req) = self.request(Method::DELETE, path);
        self.execute(&url, req).await?;
        Ok(())
    }

    /// DELETE for endpoints that take a JSON body naming what to remove.
    pub(crate) async fn delete_with_body<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), Error> {
        let (url, req) = self.request(Method::DELETE, path);
        self.execute(&url, req.json(body)).await?;
        Ok(())
    }
}

impl SkyliftBuilder {
    /// Build the Skylift client.
    pub fn build(self) -> Result<Skylift, Error> {
        let config = self.build_config()?;
        Skylift::from_config(config, self.http_client)
    }
}
