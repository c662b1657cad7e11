use serde::{Deserialize, Serialize};

int_enum! {
    /// Severity of a main log entry.
    pub enum LogType {
        Normal = 1,
        Info = 2,
        Warning = 4,
        Critical = 8,
    }
}

/// Filter for [`Log::main`](crate::log::Log::main).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogOptions {
    pub normal: bool,
    pub info: bool,
    pub warning: bool,
    pub critical: bool,
    /// Only entries with a greater id are returned; `-1` returns everything.
    pub last_known_id: i64,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            normal: true,
            info: true,
            warning: true,
            critical: true,
            last_known_id: -1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: i64,
    pub message: String,
    /// Milliseconds since the epoch.
    pub timestamp: i64,
    #[serde(rename = "type")]
    pub kind: LogType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeerLogEntry {
    pub id: i64,
    pub ip: String,
    pub timestamp: i64,
    pub blocked: bool,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_want_everything() {
        let opts = LogOptions::default();
        assert!(opts.normal && opts.info && opts.warning && opts.critical);
        assert_eq!(opts.last_known_id, -1);
    }

    #[test]
    fn entry_type_is_decoded() {
        let entry: LogEntry = serde_json::from_str(
            r#"{"id":3,"message":"qBittorrent v4.6.2 started","timestamp":1700000000000,"type":1}"#,
        )
        .unwrap();
        assert_eq!(entry.kind, LogType::Normal);
        assert_eq!(entry.message, "qBittorrent v4.6.2 started");
    }

    #[test]
    fn unlisted_log_type_still_decodes() {
        let entry: LogEntry =
            serde_json::from_str(r#"{"id":4,"message":"x","timestamp":0,"type":16}"#).unwrap();
        assert_eq!(entry.kind, LogType::Other(16));
    }
}
