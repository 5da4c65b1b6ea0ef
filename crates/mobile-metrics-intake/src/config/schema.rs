use serde::Deserialize;
use mobile_metrics_core::error::{MetricsError, Result};
use mobile_metrics_core::validate::{
    Limits, CLIENT_ID_MAX_LENGTH, EVENT_TYPE_MAX_LENGTH, SECURITY_METRICS_MAX_LENGTH,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntakeConfig {
    pub version: u32,

    #[serde(default)]
    pub limits: LimitsSection,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            limits: LimitsSection::default(),
        }
    }
}

impl IntakeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MetricsError::UnsupportedVersion);
        }

        self.limits.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimitsSection {
    #[serde(default = "default_client_id_max_len")]
    pub client_id_max_len: usize,

    #[serde(default = "default_event_type_max_len")]
    pub event_type_max_len: usize,

    #[serde(default = "default_security_metrics_max_len")]
    pub security_metrics_max_len: usize,

    #[serde(default = "default_max_payload_bytes")]
    pub max_payload_bytes: usize,
}

impl Default for LimitsSection {
    fn default() -> Self {
        Self {
            client_id_max_len: default_client_id_max_len(),
            event_type_max_len: default_event_type_max_len(),
            security_metrics_max_len: default_security_metrics_max_len(),
            max_payload_bytes: default_max_payload_bytes(),
        }
    }
}

impl LimitsSection {
    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("limits.client_id_max_len", self.client_id_max_len),
            ("limits.event_type_max_len", self.event_type_max_len),
            ("limits.security_metrics_max_len", self.security_metrics_max_len),
        ];
        for (name, v) in lengths {
            if !(1..=4096).contains(&v) {
                return Err(MetricsError::BadRequest(format!(
                    "{name} must be between 1 and 4096"
                )));
            }
        }
        if !(256..=1_048_576).contains(&self.max_payload_bytes) {
            return Err(MetricsError::BadRequest(
                "limits.max_payload_bytes must be between 256 and 1048576".into(),
            ));
        }
        Ok(())
    }

    /// Validator limits (payload size is enforced by the intake, not the validator).
    pub fn validation_limits(&self) -> Limits {
        Limits {
            client_id_max_len: self.client_id_max_len,
            event_type_max_len: self.event_type_max_len,
            security_metrics_max_len: self.security_metrics_max_len,
        }
    }
}

fn default_client_id_max_len() -> usize {
    CLIENT_ID_MAX_LENGTH
}
fn default_event_type_max_len() -> usize {
    EVENT_TYPE_MAX_LENGTH
}
fn default_security_metrics_max_len() -> usize {
    SECURITY_METRICS_MAX_LENGTH
}
fn default_max_payload_bytes() -> usize {
    65536
}
