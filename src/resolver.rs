use reqwest::{Client, Proxy};
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::config::ResolverConfig;
use crate::error::{PubProxyError, Result};
use crate::models::{ProxyList, ProxyRecord};
use crate::options::QueryOptions;

/// A proxy picked from the API together with the reqwest routing for it.
#[derive(Debug, Clone)]
pub struct ProxyTransport {
    url: Url,
    record: ProxyRecord,
    proxy: Proxy,
}

impl ProxyTransport {
    /// Build the transport for a single record.
    ///
    /// The proxy URL is the record's `type` glued directly onto its `ipPort`.
    /// All outbound schemes are routed through it.
    pub fn from_record(record: ProxyRecord) -> Result<Self> {
        let url = Url::parse(&record.proxy_target())?;
        let proxy = Proxy::all(url.as_str()).map_err(PubProxyError::Transport)?;

        Ok(Self { url, record, proxy })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn record(&self) -> &ProxyRecord {
        &self.record
    }

    pub fn proxy(&self) -> Proxy {
        self.proxy.clone()
    }

    /// A client whose only configuration is this proxy.
    pub fn client(&self) -> Result<Client> {
        Client::builder()
            .proxy(self.proxy())
            .build()
            .map_err(PubProxyError::Transport)
    }
}

/// Queries the proxy API and turns its first answer into a transport.
///
/// Holds no per-call state: each resolution builds its own URL, performs
/// exactly one GET and decodes its own response. Nothing is cached or retried.
#[derive(Debug, Clone)]
pub struct ProxyResolver {
    client: Client,
    endpoint: String,
    timeout: Option<Duration>,
    options: QueryOptions,
}

impl ProxyResolver {
    /// Resolver for the public endpoint with default options and no deadline.
    pub fn new() -> Result<Self> {
        Self::from_config(&ResolverConfig::default())
    }

    pub fn from_config(config: &ResolverConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if !config.system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(PubProxyError::Transport)?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            timeout: config.timeout(),
            options: config.query_options(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Options used when a call passes `None`.
    pub fn default_options(&self) -> &QueryOptions {
        &self.options
    }

    /// Endpoint with the encoded options as its query.
    pub fn request_url(&self, options: &QueryOptions) -> Result<Url> {
        let mut url = Url::parse(&self.endpoint)?;
        options.apply_to(&mut url);
        Ok(url)
    }

    /// Fetch and decode the proxy list without picking an entry.
    pub async fn fetch(&self, options: Option<&QueryOptions>) -> Result<ProxyList> {
        let options = options.unwrap_or(&self.options);
        let url = self.request_url(options)?;

        debug!(endpoint = %self.endpoint, "Requesting proxy list");

        let mut request = self.client.get(url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(PubProxyError::Network)?;
        let status = response.status();
        let body = response.bytes().await.map_err(PubProxyError::Network)?;

        debug!(%status, bytes = body.len(), "Proxy API responded");

        let list = serde_json::from_slice(&body)?;
        Ok(list)
    }

    /// Resolve a proxy and build the transport for the first record returned.
    ///
    /// An empty list is reported as [`PubProxyError::NoProxy`]; any further
    /// records are ignored.
    pub async fn resolve(&self, options: Option<&QueryOptions>) -> Result<ProxyTransport> {
        let list = self.fetch(options).await?;

        let Some(record) = list.into_first() else {
            debug!("Proxy API returned an empty list");
            return Err(PubProxyError::NoProxy);
        };

        let transport = ProxyTransport::from_record(record)?;
        debug!(proxy = %transport.url(), country = %transport.record().country, "Resolved proxy");

        Ok(transport)
    }

    /// Resolve a proxy and wrap it in a ready-to-use client.
    pub async fn client(&self, options: Option<&QueryOptions>) -> Result<Client> {
        self.resolve(options).await?.client()
    }
}

/// Resolve a proxy from the public endpoint.
pub async fn resolve(options: Option<&QueryOptions>) -> Result<ProxyTransport> {
    ProxyResolver::new()?.resolve(options).await
}

/// Client routed through a proxy resolved with the default options.
pub async fn new_client() -> Result<Client> {
    resolve(None).await?.client()
}
