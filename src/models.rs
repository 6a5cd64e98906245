use serde::{Deserialize, Deserializer};

/// Response envelope of `GET /api/proxy`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProxyList {
    /// May be empty (or `null`) when nothing matched the filters
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<ProxyRecord>,
}

impl ProxyList {
    pub fn into_first(self) -> Option<ProxyRecord> {
        self.data.into_iter().next()
    }
}

/// One proxy as described by the API. Everything except the support block
/// arrives as a string; `null` reads as the empty value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProxyRecord {
    /// `"ip:port"`
    #[serde(rename = "ipPort", deserialize_with = "null_as_default")]
    pub ip_port: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ip: String,
    #[serde(deserialize_with = "null_as_default")]
    pub port: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_checked: String,
    #[serde(deserialize_with = "null_as_default")]
    pub proxy_level: String,
    /// Scheme prefix including the separator, e.g. `"http://"`
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub speed: String,
    #[serde(deserialize_with = "null_as_default")]
    pub support: Support,
}

impl ProxyRecord {
    /// Proxy address as the API spells it: the type prefix followed by `ip:port`.
    pub fn proxy_target(&self) -> String {
        format!("{}{}", self.kind, self.ip_port)
    }
}

/// Capabilities reported for a proxy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Support {
    #[serde(default, deserialize_with = "tri_state_bool")]
    pub https: bool,
    #[serde(default, deserialize_with = "tri_state_bool")]
    pub get: bool,
    #[serde(default, deserialize_with = "tri_state_bool")]
    pub post: bool,
    #[serde(default, deserialize_with = "tri_state_bool")]
    pub cookies: bool,
    #[serde(default, deserialize_with = "tri_state_bool")]
    pub referer: bool,
    #[serde(default, deserialize_with = "tri_state_bool")]
    pub user_agent: bool,
    #[serde(default, deserialize_with = "tri_state_bool")]
    pub google: bool,
}

/// The API encodes booleans as integers: only `1` is true.
pub fn tri_state(value: i64) -> bool {
    value == 1
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn tri_state_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<i64>::deserialize(deserializer)?;
    Ok(value.is_some_and(tri_state))
}
