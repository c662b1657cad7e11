use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QbitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Connected,
    Firewalled,
    Disconnected,
}

/// Global transfer statistics from `/transfer/info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferInfo {
    pub connection_status: ConnectionStatus,
    #[serde(default)]
    pub dht_nodes: i64,
    /// Bytes downloaded this session.
    pub dl_info_data: i64,
    /// Bytes per second.
    pub dl_info_speed: i64,
    /// Bytes per second, `0` if unlimited.
    pub dl_rate_limit: i64,
    pub up_info_data: i64,
    pub up_info_speed: i64,
    pub up_rate_limit: i64,
}

/// Whether the alternative speed limits are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedLimitsMode {
    Normal,
    Alternative,
}

impl FromStr for SpeedLimitsMode {
    type Err = QbitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(Self::Normal),
            "1" => Ok(Self::Alternative),
            other => Err(QbitError::UnexpectedResponse(format!(
                "speed limits mode {other:?}"
            ))),
        }
    }
}

impl fmt::Display for SpeedLimitsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => f.write_str("0"),
            Self::Alternative => f.write_str("1"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_limits_mode_from_text() {
        assert_eq!("0".parse::<SpeedLimitsMode>().unwrap(), SpeedLimitsMode::Normal);
        assert_eq!("1".parse::<SpeedLimitsMode>().unwrap(), SpeedLimitsMode::Alternative);
        assert!(matches!(
            "2".parse::<SpeedLimitsMode>(),
            Err(QbitError::UnexpectedResponse(_))
        ));
    }

    #[test]
    fn transfer_info_decodes() {
        let info: TransferInfo = serde_json::from_str(
            r#"{"connection_status":"firewalled","dht_nodes":312,"dl_info_data":1024,
                "dl_info_speed":0,"dl_rate_limit":0,"up_info_data":2048,
                "up_info_speed":12,"up_rate_limit":102400}"#,
        )
        .unwrap();
        assert_eq!(info.connection_status, ConnectionStatus::Firewalled);
        assert_eq!(info.up_rate_limit, 102_400);
    }
}
