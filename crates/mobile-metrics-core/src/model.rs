//! Client metric payload model (JSON).
//!
//! Field names follow the wire format (`clientId`, `type`, `data.app.appId`, ...).
//! Unknown fields are ignored so newer SDKs can add keys without being rejected.
//! Required-ness is enforced by the validator, not by deserialization: a payload
//! with a missing `clientId` still decodes and is then rejected with a reason.

use serde::{Deserialize, Deserializer, Serialize};

/// One client-submitted telemetry event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    /// Client clock in milliseconds. Kept as text; validated as i64 later.
    #[serde(
        rename = "timestamp",
        default,
        deserialize_with = "timestamp_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub client_timestamp: Option<String>,
    #[serde(rename = "clientId", default)]
    pub client_id: String,
    /// Event type (field name is `type` in JSON).
    #[serde(rename = "type", default)]
    pub event_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<MetricData>,
}

impl Metric {
    pub fn kind(&self) -> EventKind {
        EventKind::from(self.event_type.as_str())
    }
}

/// Container for the per-type sub-records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<AppMetric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<DeviceMetric>,
    #[serde(
        default,
        deserialize_with = "security_entries",
        skip_serializing_if = "Option::is_none"
    )]
    pub security: Option<SecurityMetrics>,
}

impl MetricData {
    /// True when no sub-record is present at all.
    pub fn is_empty(&self) -> bool {
        self.app.is_none() && self.device.is_none() && self.security.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppMetric {
    /// e.g. `com.example.myapp`
    #[serde(rename = "appId", default)]
    pub id: String,
    #[serde(rename = "sdkVersion", default)]
    pub sdk_version: String,
    #[serde(rename = "appVersion", default)]
    pub app_version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceMetric {
    /// e.g. `android`
    #[serde(default)]
    pub platform: String,
    #[serde(rename = "platformVersion", default)]
    pub platform_version: String,
}

pub type SecurityMetrics = Vec<SecurityMetric>;

/// A named pass/fail check result reported by the client SDK.
///
/// All fields are required by validation, but kept optional here so that an
/// absent `passed` can be told apart from `passed: false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityMetric {
    /// e.g. `com.example.DeveloperMode`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// e.g. `Developer Mode`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passed: Option<bool>,
}

/// Validation ruleset selected by `Metric::event_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Init,
    Security,
    Unknown,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Init => "init",
            EventKind::Security => "security",
            EventKind::Unknown => "unknown",
        }
    }
}

impl From<&str> for EventKind {
    fn from(s: &str) -> Self {
        match s {
            "init" => EventKind::Init,
            "security" => EventKind::Security,
            _ => EventKind::Unknown,
        }
    }
}

/// `timestamp` may arrive as a JSON number or as a string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Number(serde_json::Number),
    Text(String),
}

fn timestamp_text<'de, D>(de: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawTimestamp>::deserialize(de)?;
    Ok(match raw {
        Some(RawTimestamp::Number(n)) => Some(n.to_string()),
        Some(RawTimestamp::Text(s)) if !s.is_empty() => Some(s),
        _ => None,
    })
}

/// A `null` entry decodes as an entry with every field absent, so validation
/// reports it by position instead of failing the whole payload.
fn security_entries<'de, D>(de: D) -> std::result::Result<Option<SecurityMetrics>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Option<SecurityMetric>>>::deserialize(de)?;
    Ok(raw.map(|entries| entries.into_iter().map(Option::unwrap_or_default).collect()))
}
