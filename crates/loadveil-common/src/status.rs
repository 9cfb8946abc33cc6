//! Load status data model.
//!
//! `LoadStatus` is the single value the loading overlay renders from. It is
//! replaced wholesale on every transition, never merged.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Two progress ratios closer than this are considered the same status.
pub const PROGRESS_EPSILON: f64 = 1e-4;

/// Where loading of the embedded resource currently stands.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum LoadStatus {
    /// No load attempted yet.
    #[default]
    Standby,
    /// Load underway. The ratio is whatever the surface reported.
    Progressing(f64),
    /// The resource finished loading.
    Finished,
    /// The load failed; carries a human-readable diagnostic.
    Failed(String),
    /// Connectivity is unavailable.
    Offline,
}

/// Tag of a [`LoadStatus`] without its payload, ordered by lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatusKind {
    Standby = 0,
    Progressing,
    Finished,
    Failed,
    Offline,
}

impl StatusKind {
    pub const ALL: [StatusKind; 5] = [
        StatusKind::Standby,
        StatusKind::Progressing,
        StatusKind::Finished,
        StatusKind::Failed,
        StatusKind::Offline,
    ];

    /// Short human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            StatusKind::Standby => "Standby",
            StatusKind::Progressing => "Loading",
            StatusKind::Finished => "Finished",
            StatusKind::Failed => "Error",
            StatusKind::Offline => "No connection",
        }
    }
}

impl LoadStatus {
    pub fn kind(&self) -> StatusKind {
        match self {
            LoadStatus::Standby => StatusKind::Standby,
            LoadStatus::Progressing(_) => StatusKind::Progressing,
            LoadStatus::Finished => StatusKind::Finished,
            LoadStatus::Failed(_) => StatusKind::Failed,
            LoadStatus::Offline => StatusKind::Offline,
        }
    }

    /// True iff the load completed.
    pub fn is_successful(&self) -> bool {
        matches!(self, LoadStatus::Finished)
    }

    /// True for both a failed load and a lost connection.
    pub fn has_error(&self) -> bool {
        matches!(self, LoadStatus::Failed(_) | LoadStatus::Offline)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Progressing(_))
    }

    /// Progress ratio, present only while progressing.
    pub fn progress_ratio(&self) -> Option<f64> {
        match self {
            LoadStatus::Progressing(ratio) => Some(*ratio),
            _ => None,
        }
    }

    /// Failure diagnostic, present only for a failed load.
    pub fn error_reason(&self) -> Option<&str> {
        match self {
            LoadStatus::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

impl PartialEq for LoadStatus {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (LoadStatus::Standby, LoadStatus::Standby)
            | (LoadStatus::Finished, LoadStatus::Finished)
            | (LoadStatus::Offline, LoadStatus::Offline) => true,
            (LoadStatus::Progressing(a), LoadStatus::Progressing(b)) => {
                (a - b).abs() < PROGRESS_EPSILON
            }
            (LoadStatus::Failed(a), LoadStatus::Failed(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadStatus::Progressing(ratio) => {
                write!(f, "{} ({}%)", self.kind().label(), (ratio * 100.0) as i64)
            }
            LoadStatus::Failed(reason) => write!(f, "{} ({reason})", self.kind().label()),
            _ => f.write_str(self.kind().label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Equivalence --

    #[test]
    fn progressing_within_epsilon_is_equal() {
        assert_eq!(LoadStatus::Progressing(0.5), LoadStatus::Progressing(0.50005));
        assert_eq!(LoadStatus::Progressing(0.0), LoadStatus::Progressing(0.00009));
    }

    #[test]
    fn progressing_beyond_epsilon_is_not_equal() {
        assert_ne!(LoadStatus::Progressing(0.5), LoadStatus::Progressing(0.5002));
        assert_ne!(LoadStatus::Progressing(0.1), LoadStatus::Progressing(0.9));
    }

    #[test]
    fn failed_compares_reason_exactly() {
        assert_eq!(
            LoadStatus::Failed("timeout".into()),
            LoadStatus::Failed("timeout".into())
        );
        assert_ne!(
            LoadStatus::Failed("timeout".into()),
            LoadStatus::Failed("Timeout".into())
        );
    }

    #[test]
    fn unit_variants_compare_by_tag() {
        assert_eq!(LoadStatus::Standby, LoadStatus::Standby);
        assert_eq!(LoadStatus::Finished, LoadStatus::Finished);
        assert_eq!(LoadStatus::Offline, LoadStatus::Offline);
        assert_ne!(LoadStatus::Finished, LoadStatus::Offline);
        assert_ne!(LoadStatus::Standby, LoadStatus::Progressing(0.0));
        assert_ne!(LoadStatus::Failed(String::new()), LoadStatus::Offline);
    }

    // -- Predicates --

    #[test]
    fn only_finished_is_successful() {
        for status in [
            LoadStatus::Standby,
            LoadStatus::Progressing(1.0),
            LoadStatus::Failed("x".into()),
            LoadStatus::Offline,
        ] {
            assert!(!status.is_successful(), "{status:?}");
        }
        assert!(LoadStatus::Finished.is_successful());
    }

    #[test]
    fn failed_and_offline_have_error() {
        assert!(LoadStatus::Failed("dns".into()).has_error());
        assert!(LoadStatus::Offline.has_error());
        assert!(!LoadStatus::Standby.has_error());
        assert!(!LoadStatus::Progressing(0.3).has_error());
        assert!(!LoadStatus::Finished.has_error());
    }

    #[test]
    fn payload_accessors() {
        assert_eq!(LoadStatus::Progressing(0.25).progress_ratio(), Some(0.25));
        assert_eq!(LoadStatus::Finished.progress_ratio(), None);
        assert_eq!(LoadStatus::Failed("tls".into()).error_reason(), Some("tls"));
        assert_eq!(LoadStatus::Offline.error_reason(), None);
        assert!(LoadStatus::Progressing(0.0).is_loading());
        assert!(!LoadStatus::Standby.is_loading());
    }

    #[test]
    fn default_is_standby() {
        assert_eq!(LoadStatus::default(), LoadStatus::Standby);
    }

    // -- Kind --

    #[test]
    fn kind_ordinals_follow_lifecycle() {
        let ordinals: Vec<i32> = StatusKind::ALL.iter().map(|k| *k as i32).collect();
        assert_eq!(ordinals, vec![0, 1, 2, 3, 4]);
        assert_eq!(LoadStatus::Offline.kind(), StatusKind::Offline);
        assert_eq!(LoadStatus::Progressing(0.4).kind(), StatusKind::Progressing);
    }

    // -- Display --

    #[test]
    fn display_formats() {
        assert_eq!(LoadStatus::Standby.to_string(), "Standby");
        assert_eq!(LoadStatus::Progressing(0.42).to_string(), "Loading (42%)");
        assert_eq!(LoadStatus::Finished.to_string(), "Finished");
        assert_eq!(
            LoadStatus::Failed("connection reset".into()).to_string(),
            "Error (connection reset)"
        );
        assert_eq!(LoadStatus::Offline.to_string(), "No connection");
    }

    // -- Serde --

    #[test]
    fn serializes_adjacently_tagged() {
        let json = serde_json::to_string(&LoadStatus::Progressing(0.5)).unwrap();
        assert_eq!(json, r#"{"status":"progressing","value":0.5}"#);

        let json = serde_json::to_string(&LoadStatus::Offline).unwrap();
        assert_eq!(json, r#"{"status":"offline"}"#);
    }

    #[test]
    fn deserializes_failed_with_reason() {
        let status: LoadStatus =
            serde_json::from_str(r#"{"status":"failed","value":"not found"}"#).unwrap();
        assert_eq!(status, LoadStatus::Failed("not found".into()));
    }
}
