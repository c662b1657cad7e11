use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::transfer::ConnectionStatus;
use super::TorrentInfo;

/// A torrent category.
///
/// Used both as the value of `/torrents/categories` and as the argument of
/// [`Torrents::create_category`](crate::torrents::Torrents::create_category).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub name: String,
    #[serde(rename = "savePath")]
    pub save_path: String,
}

impl Category {
    pub fn new(name: impl Into<String>, save_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            save_path: save_path.into(),
        }
    }
}

/// `/sync/maindata` snapshot or delta.
///
/// With `rid = 0` (or when the server decides so) `full_update` is set and
/// every map is complete. Otherwise only changed entries and changed fields
/// are present, and removals are listed in the `*_removed` vectors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MainData {
    pub rid: i64,
    pub full_update: bool,
    pub torrents: HashMap<String, TorrentInfo>,
    pub torrents_removed: Vec<String>,
    pub categories: HashMap<String, Category>,
    pub categories_removed: Vec<String>,
    pub tags: Vec<String>,
    pub tags_removed: Vec<String>,
    pub server_state: Option<ServerState>,
    pub trackers: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerState {
    pub alltime_dl: i64,
    pub alltime_ul: i64,
    pub average_time_queue: i64,
    pub connection_status: Option<ConnectionStatus>,
    pub dht_nodes: i64,
    pub dl_info_data: i64,
    pub dl_info_speed: i64,
    pub dl_rate_limit: i64,
    pub free_space_on_disk: i64,
    /// Formatted by the server, e.g. `"1.52"`.
    pub global_ratio: String,
    pub queued_io_jobs: i64,
    pub queueing: bool,
    pub read_cache_hits: String,
    pub read_cache_overload: String,
    pub refresh_interval: i64,
    pub total_buffers_size: i64,
    pub total_peer_connections: i64,
    pub total_queued_size: i64,
    pub total_wasted_session: i64,
    pub up_info_data: i64,
    pub up_info_speed: i64,
    pub up_rate_limit: i64,
    pub use_alt_speed_limits: bool,
    pub write_cache_overload: String,
}

/// `/sync/torrentPeers` snapshot or delta, keyed by `ip:port`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TorrentPeers {
    pub rid: i64,
    pub full_update: bool,
    pub show_flags: bool,
    pub peers: HashMap<String, Peer>,
    pub peers_removed: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Peer {
    pub client: String,
    pub connection: String,
    pub country: String,
    pub country_code: String,
    pub dl_speed: i64,
    pub downloaded: i64,
    pub files: String,
    pub flags: String,
    pub flags_desc: String,
    pub ip: String,
    pub peer_id_client: String,
    pub port: u16,
    /// `0.0` to `1.0`.
    pub progress: f64,
    pub relevance: f64,
    pub up_speed: i64,
    pub uploaded: i64,
}
