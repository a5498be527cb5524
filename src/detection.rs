//! Classification result types
//!
//! The `Verdict` produced for each payload, the attack/safe status it carries,
//! and the persisted event shape consumed by log stores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Classification outcome for one payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadStatus {
    Attack,
    Safe,
}

impl std::fmt::Display for PayloadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayloadStatus::Attack => write!(f, "attack"),
            PayloadStatus::Safe => write!(f, "safe"),
        }
    }
}

impl std::str::FromStr for PayloadStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "attack" => Ok(PayloadStatus::Attack),
            "safe" => Ok(PayloadStatus::Safe),
            other => Err(format!("unknown payload status: {other}")),
        }
    }
}

/// Classification verdict for one payload.
///
/// Produced once per `classify` call and handed to the caller; the engine
/// holds no reference to it afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Whether any signature matched
    pub is_attack: bool,
    /// ID of the first matching signature, or None when safe
    pub matched_signature_id: Option<String>,
}

impl Verdict {
    /// Verdict for a payload that matched no signature
    pub fn safe() -> Self {
        Self {
            is_attack: false,
            matched_signature_id: None,
        }
    }

    /// Verdict for a payload that matched the given signature
    pub fn attack(signature_id: &str) -> Self {
        Self {
            is_attack: true,
            matched_signature_id: Some(signature_id.to_string()),
        }
    }

    /// The attack/safe status of this verdict
    pub fn status(&self) -> PayloadStatus {
        if self.is_attack {
            PayloadStatus::Attack
        } else {
            PayloadStatus::Safe
        }
    }
}

/// A persisted classification event.
///
/// The boundary layer assigns the timestamp when it turns a verdict into an
/// event; the engine never creates these itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationEvent {
    /// When the classification was recorded
    pub timestamp: DateTime<Utc>,
    /// The raw payload that was classified
    pub payload: String,
    /// Attack or safe
    pub status: PayloadStatus,
}

impl ClassificationEvent {
    /// Build an event for a verdict, stamped with the current time.
    pub fn now(payload: &str, verdict: &Verdict) -> Self {
        Self {
            timestamp: Utc::now(),
            payload: payload.to_string(),
            status: verdict.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PayloadStatus::Attack).unwrap(),
            r#""attack""#
        );
        assert_eq!(
            serde_json::to_string(&PayloadStatus::Safe).unwrap(),
            r#""safe""#
        );
    }

    #[test]
    fn test_status_roundtrip() {
        assert_eq!("attack".parse::<PayloadStatus>(), Ok(PayloadStatus::Attack));
        assert_eq!("safe".parse::<PayloadStatus>(), Ok(PayloadStatus::Safe));
        assert!("blocked".parse::<PayloadStatus>().is_err());
    }

    #[test]
    fn test_verdict_constructors() {
        let safe = Verdict::safe();
        assert!(!safe.is_attack);
        assert_eq!(safe.matched_signature_id, None);
        assert_eq!(safe.status(), PayloadStatus::Safe);

        let attack = Verdict::attack("sql_union_select");
        assert!(attack.is_attack);
        assert_eq!(
            attack.matched_signature_id.as_deref(),
            Some("sql_union_select")
        );
        assert_eq!(attack.status(), PayloadStatus::Attack);
    }

    #[test]
    fn test_event_carries_verdict_status() {
        let event = ClassificationEvent::now("1 OR 1=1", &Verdict::attack("sql_boolean_tautology"));
        assert_eq!(event.status, PayloadStatus::Attack);
        assert_eq!(event.payload, "1 OR 1=1");
    }
}
