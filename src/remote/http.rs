//! reqwest-backed implementation of `RemoteStore`.

use std::marker::PhantomData;

use reqwest::header::CONTENT_DISPOSITION;
use serde::de::DeserializeOwned;
use reqwest::{Client, RequestBuilder, Response};
use url::Url;

use crate::config::Config;
use crate::entity::Resource;
use crate::error::{PressError, Result};

use super::error::check_status;
use super::form::{FormMode, ResourceForm};
use super::{Download, RemoteStore};

/// HTTP store for one resource family on a fixed origin
pub struct HttpStore<T> {
    client: Client,
    origin: Url,
    _resource: PhantomData<fn() -> T>,
}

impl<T> Clone for HttpStore<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            origin: self.origin.clone(),
            _resource: PhantomData,
        }
    }
}

impl<T: Resource> HttpStore<T> {
    /// Create a store against `origin` with a default client (no timeout)
    pub fn new(origin: &str) -> Result<Self> {
        Self::with_client(Client::builder().build()?, origin)
    }

    /// Create a store from configuration.
    ///
    /// Requests only time out when `request.timeout` is configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Self::with_client(builder.build()?, &config.api_url())
    }

    /// Create a store sharing an existing client
    pub fn with_client(client: Client, origin: &str) -> Result<Self> {
        let origin = Url::parse(origin)?;
        if origin.cannot_be_a_base() {
            return Err(PressError::Config(format!(
                "API origin '{}' cannot be used as a base URL",
                origin
            )));
        }
        Ok(Self {
            client,
            origin,
            _resource: PhantomData,
        })
    }

    pub fn origin(&self) -> &str {
        self.origin.as_str().trim_end_matches('/')
    }

    /// `{origin}/api/{path}/{segments...}` with each segment percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.origin.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                PressError::Config(format!("API origin '{}' has no path", self.origin))
            })?;
            path.pop_if_empty().push("api").push(T::PATH);
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder, id: Option<&str>) -> Result<Response> {
        let response = request.send().await?;
        check_status(response, T::LABEL, id).await
    }
}

/// Decode a successful response body.
///
/// A body that arrived but does not parse is a `Json` error, not a network one.
async fn decode<D: DeserializeOwned>(response: Response) -> Result<D> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| {
        tracing::warn!("undecodable response body ({} bytes): {e}", bytes.len());
        PressError::Json(e)
    })
}

impl<T: Resource> RemoteStore<T> for HttpStore<T> {
    async fn list(&self) -> Result<Vec<T>> {
        let url = self.endpoint(&[])?;
        tracing::debug!("GET {url}");
        let response = self.send(self.client.get(url), None).await?;
        decode(response).await
    }

    async fn fetch(&self, id: &str) -> Result<T> {
        let url = self.endpoint(&[id])?;
        tracing::debug!("GET {url}");
        let response = self.send(self.client.get(url), Some(id)).await?;
        decode(response).await
    }

    async fn create(&self, form: T::Form) -> Result<T> {
        form.validate(FormMode::Create)?;
        let body = form.into_multipart()?;

        let url = self.endpoint(&[])?;
        tracing::debug!("POST {url}");
        let response = self
            .send(self.client.post(url).multipart(body), None)
            .await?;
        decode(response).await
    }

    async fn update(&self, id: &str, form: T::Form) -> Result<T> {
        form.validate(FormMode::Update)?;
        let body = form.into_multipart()?;

        let url = self.endpoint(&[id])?;
        tracing::debug!("PUT {url}");
        let response = self
            .send(self.client.put(url).multipart(body), Some(id))
            .await?;
        decode(response).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let url = self.endpoint(&[id])?;
        tracing::debug!("DELETE {url}");
        self.send(self.client.delete(url), Some(id)).await?;
        Ok(())
    }

    async fn download(&self, id: &str) -> Result<Download> {
        let url = self.endpoint(&["download", id])?;
        tracing::debug!("GET {url}");
        let response = self.send(self.client.get(url), Some(id)).await?;
        let disposition = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await?;
        Ok(Download::new(disposition.as_deref(), bytes.to_vec()))
    }

    fn asset_url(&self, path: &str) -> String {
        super::asset_url(self.origin(), path)
    }
}
