use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::params::{flag, join_comma, join_lines};
use crate::{Hashes, RatioLimit, SeedingTimeLimit};

/// Torrent list filter for `/torrents/info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TorrentFilter {
    All,
    Downloading,
    Seeding,
    Completed,
    Paused,
    Active,
    Inactive,
    Resumed,
    Stalled,
    StalledUploading,
    StalledDownloading,
    Errored,
}

impl TorrentFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Downloading => "downloading",
            Self::Seeding => "seeding",
            Self::Completed => "completed",
            Self::Paused => "paused",
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Resumed => "resumed",
            Self::Stalled => "stalled",
            Self::StalledUploading => "stalled_uploading",
            Self::StalledDownloading => "stalled_downloading",
            Self::Errored => "errored",
        }
    }
}

impl fmt::Display for TorrentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TorrentFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_value(serde_json::Value::String(s.to_owned()))
            .map_err(|_| format!("unknown torrent filter {s:?}"))
    }
}

/// Torrent state as reported by the server.
///
/// States introduced by newer servers decode as [`Unknown`](Self::Unknown).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TorrentState {
    Error,
    MissingFiles,
    Uploading,
    #[serde(rename = "pausedUP")]
    PausedUp,
    #[serde(rename = "stoppedUP")]
    StoppedUp,
    #[serde(rename = "queuedUP")]
    QueuedUp,
    #[serde(rename = "stalledUP")]
    StalledUp,
    #[serde(rename = "checkingUP")]
    CheckingUp,
    #[serde(rename = "forcedUP")]
    ForcedUp,
    Allocating,
    Downloading,
    #[serde(rename = "metaDL")]
    MetaDl,
    #[serde(rename = "forcedMetaDL")]
    ForcedMetaDl,
    #[serde(rename = "pausedDL")]
    PausedDl,
    #[serde(rename = "stoppedDL")]
    StoppedDl,
    #[serde(rename = "queuedDL")]
    QueuedDl,
    #[serde(rename = "stalledDL")]
    StalledDl,
    #[serde(rename = "checkingDL")]
    CheckingDl,
    #[serde(rename = "forcedDL")]
    ForcedDl,
    CheckingResumeData,
    Moving,
    #[default]
    #[serde(other)]
    Unknown,
}

impl TorrentState {
    /// Paused or stopped, in either direction.
    pub fn is_paused(self) -> bool {
        matches!(
            self,
            Self::PausedUp | Self::PausedDl | Self::StoppedUp | Self::StoppedDl
        )
    }
}

/// One entry of `/torrents/info`, also used for `/sync/maindata` torrents.
///
/// Sizes are bytes, speeds bytes per second, times Unix seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TorrentInfo {
    pub added_on: i64,
    pub amount_left: i64,
    pub auto_tmm: bool,
    /// Distributed copies; `-1` when unknown.
    pub availability: f64,
    pub category: String,
    pub completed: i64,
    pub completion_on: i64,
    pub content_path: String,
    pub dl_limit: i64,
    pub dlspeed: i64,
    pub download_path: String,
    pub downloaded: i64,
    pub downloaded_session: i64,
    pub eta: i64,
    pub f_l_piece_prio: bool,
    pub force_start: bool,
    pub hash: String,
    pub infohash_v1: String,
    pub infohash_v2: String,
    pub last_activity: i64,
    pub magnet_uri: String,
    pub max_ratio: f64,
    pub max_seeding_time: i64,
    pub name: String,
    pub num_complete: i64,
    pub num_incomplete: i64,
    pub num_leechs: i64,
    pub num_seeds: i64,
    pub priority: i64,
    /// `0.0` to `1.0`.
    pub progress: f64,
    pub ratio: f64,
    pub ratio_limit: f64,
    pub save_path: String,
    pub seeding_time: i64,
    pub seeding_time_limit: i64,
    pub seen_complete: i64,
    pub seq_dl: bool,
    pub size: i64,
    pub state: TorrentState,
    pub super_seeding: bool,
    /// Comma separated.
    pub tags: String,
    pub time_active: i64,
    pub total_size: i64,
    pub tracker: String,
    pub trackers_count: i64,
    pub up_limit: i64,
    pub uploaded: i64,
    pub uploaded_session: i64,
    pub upspeed: i64,
}

/// Generic properties of one torrent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TorrentProperties {
    pub addition_date: i64,
    pub comment: String,
    pub completion_date: i64,
    pub created_by: String,
    pub creation_date: i64,
    pub dl_limit: i64,
    pub dl_speed: i64,
    pub dl_speed_avg: i64,
    pub download_path: String,
    pub eta: i64,
    pub hash: String,
    pub infohash_v1: String,
    pub infohash_v2: String,
    pub is_private: bool,
    pub last_seen: i64,
    pub name: String,
    pub nb_connections: i64,
    pub nb_connections_limit: i64,
    pub peers: i64,
    pub peers_total: i64,
    pub piece_size: i64,
    pub pieces_have: i64,
    pub pieces_num: i64,
    pub reannounce: i64,
    pub save_path: String,
    pub seeding_time: i64,
    pub seeds: i64,
    pub seeds_total: i64,
    pub share_ratio: f64,
    pub time_elapsed: i64,
    pub total_downloaded: i64,
    pub total_downloaded_session: i64,
    pub total_size: i64,
    pub total_uploaded: i64,
    pub total_uploaded_session: i64,
    pub total_wasted: i64,
    pub up_limit: i64,
    pub up_speed: i64,
    pub up_speed_avg: i64,
}

int_enum! {
    pub enum TrackerStatus {
        Disabled = 0,
        NotContacted = 1,
        Working = 2,
        Updating = 3,
        NotWorking = 4,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tracker {
    pub url: String,
    pub status: TrackerStatus,
    /// `-1` for the DHT, PeX and LSD pseudo trackers.
    #[serde(default)]
    pub tier: i64,
    #[serde(default)]
    pub num_peers: i64,
    #[serde(default)]
    pub num_seeds: i64,
    #[serde(default)]
    pub num_leeches: i64,
    #[serde(default)]
    pub num_downloaded: i64,
    #[serde(default)]
    pub msg: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebSeed {
    pub url: String,
}

int_enum! {
    /// Download priority of a file inside a torrent.
    pub enum FilePriority {
        DoNotDownload = 0,
        Normal = 1,
        High = 6,
        Maximal = 7,
    }
}

/// One file of a torrent, from `/torrents/files`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TorrentContent {
    #[serde(default)]
    pub index: i64,
    pub name: String,
    pub size: i64,
    pub progress: f64,
    pub priority: FilePriority,
    #[serde(default)]
    pub is_seed: bool,
    /// First and last piece index, inclusive.
    #[serde(default)]
    pub piece_range: Vec<i64>,
    #[serde(default)]
    pub availability: f64,
}

int_enum! {
    pub enum PieceState {
        NotDownloaded = 0,
        Downloading = 1,
        Downloaded = 2,
    }
}

/// Peers added per torrent by `/torrents/addPeers`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddPeerResult {
    pub added: i64,
    pub failed: i64,
}

/// Query for [`Torrents::info`](crate::torrents::Torrents::info).
///
/// Every field is optional; the default lists every torrent.
///
/// ```
/// use qbittorrent_api::types::{TorrentFilter, TorrentListOptions};
///
/// let opts = TorrentListOptions {
///     filter: Some(TorrentFilter::Downloading),
///     sort: Some("ratio".into()),
///     ..TorrentListOptions::default()
/// };
/// assert!(opts.category.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TorrentListOptions {
    pub filter: Option<TorrentFilter>,
    /// `Some("")` selects torrents without a category.
    pub category: Option<String>,
    /// `Some("")` selects torrents without a tag.
    pub tag: Option<String>,
    /// Any [`TorrentInfo`] field name.
    pub sort: Option<String>,
    pub reverse: Option<bool>,
    pub limit: Option<i64>,
    /// Negative offsets count from the end.
    pub offset: Option<i64>,
    pub hashes: Option<Hashes>,
}

/// Arguments for [`Torrents::add`](crate::torrents::Torrents::add).
///
/// At least one of `urls` or `torrents` must be non-empty. Unset options are
/// not sent, leaving the server's defaults in charge.
///
/// ```
/// use qbittorrent_api::types::AddTorrent;
///
/// let add = AddTorrent::urls(["magnet:?xt=urn:btih:8c21"])
///     .category("linux")
///     .paused(true);
/// assert_eq!(add.urls.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddTorrent {
    /// Magnet links or HTTP(S) URLs.
    pub urls: Vec<String>,
    /// Local `.torrent` files to upload.
    pub torrents: Vec<PathBuf>,
    pub savepath: Option<String>,
    /// Cookie sent when the server fetches `urls`.
    pub cookie: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub skip_checking: Option<bool>,
    pub paused: Option<bool>,
    pub root_folder: Option<bool>,
    pub rename: Option<String>,
    /// Bytes per second.
    pub up_limit: Option<i64>,
    /// Bytes per second.
    pub dl_limit: Option<i64>,
    pub ratio_limit: Option<RatioLimit>,
    pub seeding_time_limit: Option<SeedingTimeLimit>,
    pub auto_tmm: Option<bool>,
    pub sequential_download: Option<bool>,
    pub first_last_piece_prio: Option<bool>,
}

impl AddTorrent {
    pub fn urls<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            urls: urls.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn files<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            torrents: files.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn savepath(mut self, path: impl Into<String>) -> Self {
        self.savepath = Some(path.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn paused(mut self, paused: bool) -> Self {
        self.paused = Some(paused);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty() && self.torrents.is_empty()
    }

    /// The multipart text fields, in wire order. Files are not included.
    pub(crate) fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        if !self.urls.is_empty() {
            fields.push(("urls", join_lines(&self.urls)));
        }
        let mut push = |key: &'static str, value: Option<String>| {
            if let Some(value) = value {
                fields.push((key, value));
            }
        };
        push("savepath", self.savepath.clone());
        push("cookie", self.cookie.clone());
        push("category", self.category.clone());
        push(
            "tags",
            (!self.tags.is_empty()).then(|| join_comma(&self.tags)),
        );
        push("skip_checking", self.skip_checking.map(flag));
        push("paused", self.paused.map(flag));
        push("root_folder", self.root_folder.map(flag));
        push("rename", self.rename.clone());
        push("upLimit", self.up_limit.map(|v| v.to_string()));
        push("dlLimit", self.dl_limit.map(|v| v.to_string()));
        push("ratioLimit", self.ratio_limit.map(|v| v.to_string()));
        push(
            "seedingTimeLimit",
            self.seeding_time_limit.map(|v| v.to_string()),
        );
        push("autoTMM", self.auto_tmm.map(flag));
        push("sequentialDownload", self.sequential_download.map(flag));
        push("firstLastPiecePrio", self.first_last_piece_prio.map(flag));
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_state_is_tolerated() {
        let info: TorrentInfo =
            serde_json::from_str(r#"{"hash":"8c21","state":"someFutureState"}"#).unwrap();
        assert_eq!(info.state, TorrentState::Unknown);
    }

    #[test]
    fn states_use_wire_names() {
        let state: TorrentState = serde_json::from_str(r#""pausedUP""#).unwrap();
        assert_eq!(state, TorrentState::PausedUp);
        assert!(state.is_paused());
        let state: TorrentState = serde_json::from_str(r#""checkingResumeData""#).unwrap();
        assert_eq!(state, TorrentState::CheckingResumeData);
    }

    #[test]
    fn filter_round_trips_through_text() {
        assert_eq!(TorrentFilter::StalledUploading.to_string(), "stalled_uploading");
        assert_eq!(
            "stalled_uploading".parse::<TorrentFilter>().unwrap(),
            TorrentFilter::StalledUploading
        );
        assert!("bogus".parse::<TorrentFilter>().is_err());
    }

    #[test]
    fn file_priority_values() {
        let file: TorrentContent = serde_json::from_str(
            r#"{"index":0,"name":"a.iso","size":10,"progress":1,"priority":6,"piece_range":[0,3]}"#,
        )
        .unwrap();
        assert_eq!(file.priority, FilePriority::High);
        assert_eq!(FilePriority::Maximal.value(), 7);
    }

    #[test]
    fn unlisted_tracker_status_still_decodes() {
        let trackers: Vec<Tracker> = serde_json::from_str(
            r#"[{"url":"udp://tracker.example:1337","status":5,"tier":0},
                {"url":"** [DHT] **","status":2,"tier":-1}]"#,
        )
        .unwrap();
        assert_eq!(trackers[0].status, TrackerStatus::Other(5));
        assert_eq!(trackers[0].status.value(), 5);
        assert_eq!(trackers[1].status, TrackerStatus::Working);
    }

    #[test]
    fn only_set_add_fields_are_written() {
        let add = AddTorrent::urls(["magnet:?xt=a", "http://b/x.torrent"]);
        assert_eq!(
            add.text_fields(),
            vec![("urls", "magnet:?xt=a\nhttp://b/x.torrent".to_owned())]
        );
    }

    #[test]
    fn add_fields_use_wire_encoding() {
        let add = AddTorrent {
            tags: vec!["linux".into(), "iso".into()],
            skip_checking: Some(false),
            up_limit: Some(1024),
            ratio_limit: Some(RatioLimit::Ratio(1.5)),
            seeding_time_limit: Some(SeedingTimeLimit::Unlimited),
            auto_tmm: Some(true),
            ..AddTorrent::files(["/tmp/a.torrent"])
        };
        assert_eq!(
            add.text_fields(),
            vec![
                ("tags", "linux,iso".to_owned()),
                ("skip_checking", "false".to_owned()),
                ("upLimit", "1024".to_owned()),
                ("ratioLimit", "1.5".to_owned()),
                ("seedingTimeLimit", "-1".to_owned()),
                ("autoTMM", "true".to_owned()),
            ]
        );
    }

    #[test]
    fn empty_add_is_detected() {
        assert!(AddTorrent::default().is_empty());
        assert!(!AddTorrent::files(["a.torrent"]).is_empty());
    }
}
