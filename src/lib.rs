//! # pubproxy
//!
//! A thin client for the [pubproxy.com](http://pubproxy.com) proxy-list API.
//!
//! ## Overview
//!
//! One resolution is a single linear pipeline:
//! - **Encode** a sparse [`QueryOptions`] into the request query
//! - **Fetch** `http://pubproxy.com/api/proxy?<query>` once
//! - **Decode** the JSON list, adapting the API's integer booleans
//! - **Build** a [`reqwest::Proxy`] for the first entry and, if wanted, a client
//!
//! There is no caching, retrying or rotation. Every error is returned to the
//! caller as a [`PubProxyError`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pubproxy::{ProxyResolver, QueryOptions};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! // Default filters: google=true, last_check=10, country=US
//! let client = pubproxy::new_client().await?;
//!
//! // Or pick the filters yourself
//! let mut options = QueryOptions::empty();
//! options.kind = "http".to_string();
//! options.https = Some(true);
//!
//! let transport = ProxyResolver::new()?.resolve(Some(&options)).await?;
//! println!("routing through {}", transport.url());
//! let client = transport.client()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Resolver configuration from TOML and environment
//! - [`error`] - Error types
//! - [`models`] - API response shapes and the integer boolean adapter
//! - [`options`] - Query options and their encoding
//! - [`resolver`] - The resolver and the resulting transport

pub mod config;
pub mod error;
pub mod models;
pub mod options;
pub mod resolver;

pub use config::{ENDPOINT, ResolverConfig};
pub use error::{PubProxyError, Result};
pub use models::{ProxyList, ProxyRecord, Support, tri_state};
pub use options::{ApiKey, QueryOptions};
pub use resolver::{ProxyResolver, ProxyTransport, new_client, resolve};
