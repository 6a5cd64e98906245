use anyhow::Context;
use clap::Parser;
use pubproxy::{ApiKey, ProxyResolver, QueryOptions, ResolverConfig};
use tracing_subscriber::EnvFilter;

/// Resolve a proxy from pubproxy.com and optionally fetch a URL through it.
#[derive(Debug, Parser)]
#[command(name = "resolve")]
struct Args {
    /// TOML config file; environment variables still apply
    #[arg(long)]
    config: Option<String>,

    /// Start from empty filters instead of the defaults
    #[arg(long)]
    no_defaults: bool,

    #[arg(long)]
    api_key: Option<String>,

    /// Proxy type: http, socks4 or socks5
    #[arg(long = "type")]
    kind: Option<String>,

    #[arg(long)]
    country: Option<String>,

    #[arg(long)]
    not_country: Option<String>,

    #[arg(long)]
    level: Option<String>,

    #[arg(long)]
    https: Option<bool>,

    #[arg(long)]
    limit: Option<i32>,

    /// URL to request through the resolved proxy
    #[arg(long)]
    fetch: Option<String>,
}

impl Args {
    fn options(&self, base: QueryOptions) -> QueryOptions {
        let mut options = if self.no_defaults {
            QueryOptions::empty()
        } else {
            base
        };

        if let Some(key) = &self.api_key {
            options.api = ApiKey::new(key.as_str());
        }
        if let Some(kind) = &self.kind {
            options.kind = kind.clone();
        }
        if let Some(country) = &self.country {
            options.country = country.clone();
        }
        if let Some(not_country) = &self.not_country {
            options.not_country = not_country.clone();
        }
        if let Some(level) = &self.level {
            options.level = level.clone();
        }
        if self.https.is_some() {
            options.https = self.https;
        }
        if self.limit.is_some() {
            options.limit = self.limit;
        }

        options
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pubproxy=debug")),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ResolverConfig::from_file(path)?,
        None => ResolverConfig::from_env()?,
    };
    config.validate()?;

    let resolver = ProxyResolver::from_config(&config)?;
    let options = args.options(config.query_options());

    let transport = resolver
        .resolve(Some(&options))
        .await
        .context("failed to resolve a proxy")?;

    let record = transport.record();
    println!("Proxy:   {}", transport.url());
    println!("Country: {}", record.country);
    println!("Level:   {}", record.proxy_level);
    println!("Speed:   {}", record.speed);
    println!("Support: {:?}", record.support);

    if let Some(url) = &args.fetch {
        let client = transport.client()?;
        let response = client
            .get(url)
            .send()
            .await
            .with_context(|| format!("request to {} through proxy failed", url))?;

        println!("\n{} -> {}", url, response.status());
        println!("{}", response.text().await?);
    }

    Ok(())
}
