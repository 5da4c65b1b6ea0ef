//! Metric validation.
//!
//! Checks run in a fixed order and the first failure wins, so the reason a
//! client sees is stable when a payload has several problems at once.
//! Validation is pure: no I/O, no shared state, safe from any thread.

use crate::error::{SecurityField, ValidationError};
use crate::model::{EventKind, Metric, MetricData};

pub const CLIENT_ID_MAX_LENGTH: usize = 128;
pub const EVENT_TYPE_MAX_LENGTH: usize = 128;
pub const SECURITY_METRICS_MAX_LENGTH: usize = 30;

/// Length limits applied during validation. Lengths are in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub client_id_max_len: usize,
    pub event_type_max_len: usize,
    pub security_metrics_max_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            client_id_max_len: CLIENT_ID_MAX_LENGTH,
            event_type_max_len: EVENT_TYPE_MAX_LENGTH,
            security_metrics_max_len: SECURITY_METRICS_MAX_LENGTH,
        }
    }
}

/// Validation result in the form callers branch on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub valid: bool,
    /// Empty when `valid`.
    pub reason: String,
}

impl Verdict {
    pub fn ok() -> Self {
        Self {
            valid: true,
            reason: String::new(),
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: reason.into(),
        }
    }
}

impl From<Result<(), ValidationError>> for Verdict {
    fn from(res: Result<(), ValidationError>) -> Self {
        match res {
            Ok(()) => Verdict::ok(),
            Err(e) => Verdict::rejected(e.to_string()),
        }
    }
}

impl Metric {
    /// Validate with the default limits.
    pub fn validate(&self) -> Verdict {
        self.validate_with(&Limits::default())
    }

    pub fn validate_with(&self, limits: &Limits) -> Verdict {
        self.check(limits).into()
    }

    /// Typed form of [`Metric::validate_with`].
    pub fn check(&self, limits: &Limits) -> Result<(), ValidationError> {
        if self.client_id.is_empty() {
            return Err(ValidationError::MissingClientId);
        }
        if self.client_id.len() > limits.client_id_max_len {
            return Err(ValidationError::ClientIdTooLong {
                max: limits.client_id_max_len,
            });
        }

        if self.event_type.is_empty() {
            return Err(ValidationError::MissingEventType);
        }
        if self.event_type.len() > limits.event_type_max_len {
            return Err(ValidationError::EventTypeTooLong {
                max: limits.event_type_max_len,
            });
        }

        if let Some(ts) = self.client_timestamp.as_deref() {
            if !ts.is_empty() && ts.parse::<i64>().is_err() {
                return Err(ValidationError::InvalidTimestamp);
            }
        }

        // `data` missing, null, or `{}` with every sub-record absent
        let data = match &self.data {
            Some(d) if !d.is_empty() => d,
            _ => return Err(ValidationError::MissingData),
        };

        match self.kind() {
            EventKind::Init => check_init(data),
            EventKind::Security => check_security(data, limits),
            EventKind::Unknown => Err(ValidationError::UnknownType),
        }
    }
}

fn check_init(data: &MetricData) -> Result<(), ValidationError> {
    if data.app.is_none() {
        return Err(ValidationError::MissingApp);
    }
    if data.device.is_none() {
        return Err(ValidationError::MissingDevice);
    }
    Ok(())
}

fn check_security(data: &MetricData, limits: &Limits) -> Result<(), ValidationError> {
    // security events carry the init data too
    check_init(data)?;

    let entries = data
        .security
        .as_ref()
        .ok_or(ValidationError::MissingSecurity)?;

    if entries.is_empty() {
        return Err(ValidationError::SecurityEmpty);
    }
    if entries.len() > limits.security_metrics_max_len {
        return Err(ValidationError::SecurityTooLong {
            max: limits.security_metrics_max_len,
        });
    }

    for (index, sm) in entries.iter().enumerate() {
        let missing = if sm.id.is_none() {
            Some(SecurityField::Id)
        } else if sm.name.is_none() {
            Some(SecurityField::Name)
        } else if sm.passed.is_none() {
            Some(SecurityField::Passed)
        } else {
            None
        };
        if let Some(field) = missing {
            return Err(ValidationError::SecurityElementIncomplete { index, field });
        }
    }
    Ok(())
}
