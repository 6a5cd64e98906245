use serde::Deserialize;
use std::fmt;
use url::Url;
use url::form_urlencoded;

/// Credential token for the pubproxy API.
///
/// The raw value is only reachable through [`ApiKey::expose`]; `Debug` and
/// `Display` print a mask so the token never ends up in logs.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey({})", self)
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            Ok(())
        } else {
            write!(f, "********")
        }
    }
}

/// Filters sent to the proxy API as query parameters.
///
/// Every field is optional on its own. String fields are omitted when empty,
/// everything else is omitted when `None`. `Some(0)` and `Some(false)` are
/// sent as-is.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryOptions {
    #[serde(default)]
    pub api: ApiKey,

    /// Response format (`json` or `txt`). Only `json` can be decoded.
    #[serde(default)]
    pub format: String,

    /// Anonymity level, e.g. `anonymous` or `elite`.
    #[serde(default)]
    pub level: String,

    /// Proxy type, e.g. `http`, `socks4`, `socks5`.
    #[serde(default, rename = "type")]
    pub kind: String,

    /// Maximum minutes since the proxy was last checked.
    #[serde(default)]
    pub last_check: Option<i32>,

    #[serde(default)]
    pub speed: Option<i32>,

    #[serde(default)]
    pub limit: Option<i32>,

    /// Comma separated country codes to include.
    #[serde(default)]
    pub country: String,

    /// Comma separated country codes to exclude.
    #[serde(default)]
    pub not_country: String,

    #[serde(default)]
    pub google: Option<bool>,
    #[serde(default)]
    pub https: Option<bool>,
    #[serde(default)]
    pub post: Option<bool>,
    #[serde(default)]
    pub user_agent: Option<bool>,
    #[serde(default)]
    pub cookies: Option<bool>,
    #[serde(default)]
    pub referer: Option<bool>,
}

impl QueryOptions {
    /// Options used when resolution is invoked without any:
    /// google-passed proxies in the US checked within the last 10 minutes.
    pub fn new() -> Self {
        Self {
            google: Some(true),
            last_check: Some(10),
            country: "US".to_string(),
            ..Self::empty()
        }
    }

    /// Options with every field unset.
    pub fn empty() -> Self {
        Self {
            api: ApiKey::default(),
            format: String::new(),
            level: String::new(),
            kind: String::new(),
            last_check: None,
            speed: None,
            limit: None,
            country: String::new(),
            not_country: String::new(),
            google: None,
            https: None,
            post: None,
            user_agent: None,
            cookies: None,
            referer: None,
        }
    }

    /// Encode the set fields as query key/value pairs, in field order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        push_str(&mut pairs, "api", self.api.expose());
        push_str(&mut pairs, "format", &self.format);
        push_str(&mut pairs, "level", &self.level);
        push_str(&mut pairs, "type", &self.kind);

        push_int(&mut pairs, "last_check", self.last_check);
        push_int(&mut pairs, "speed", self.speed);
        push_int(&mut pairs, "limit", self.limit);

        push_str(&mut pairs, "country", &self.country);
        push_str(&mut pairs, "not_country", &self.not_country);

        push_bool(&mut pairs, "google", self.google);
        push_bool(&mut pairs, "https", self.https);
        push_bool(&mut pairs, "post", self.post);
        push_bool(&mut pairs, "user_agent", self.user_agent);
        push_bool(&mut pairs, "cookies", self.cookies);
        push_bool(&mut pairs, "referer", self.referer);

        pairs
    }

    /// Form-urlencoded query string, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query_pairs())
            .finish()
    }

    /// Replace the query of `url` with the encoded options.
    pub fn apply_to(&self, url: &mut Url) {
        url.set_query(None);

        let pairs = self.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
    }
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self::new()
    }
}

fn push_str(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: &str) {
    if !value.is_empty() {
        pairs.push((key, value.to_string()));
    }
}

fn push_int(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<i32>) {
    if let Some(v) = value {
        pairs.push((key, v.to_string()));
    }
}

fn push_bool(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<bool>) {
    if let Some(v) = value {
        pairs.push((key, v.to_string()));
    }
}
