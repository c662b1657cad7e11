//! Request and response types for the WebUI API.
//!
//! These types are deserialized from the JSON returned by the `/api/v2`
//! endpoints. Field names follow Rust conventions (`snake_case`); where the
//! API uses camelCase the wire key is kept with `#[serde(rename)]`.
//!
//! Response structs use `#[serde(default)]` throughout: qBittorrent adds and
//! drops fields between releases, and `/sync/maindata` sends partial objects
//! on incremental updates.

/// Declares an enum the API carries as an integer.
///
/// Values outside the listed ones decode to `Other` and are sent back as is.
macro_rules! int_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "i64", into = "i64")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value newer than this client.
            Other(i64),
        }

        impl $name {
            /// The integer sent over the wire.
            pub fn value(self) -> i64 {
                match self {
                    $( Self::$variant => $value, )+
                    Self::Other(value) => value,
                }
            }
        }

        impl From<$name> for i64 {
            fn from(v: $name) -> i64 {
                v.value()
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                match value {
                    $( $value => Self::$variant, )+
                    other => Self::Other(other),
                }
            }
        }
    };
}

mod app;
mod log;
mod rss;
mod search;
mod sync;
mod torrents;
mod transfer;

pub use app::{
    BittorrentProtocol, BuildInfo, DyndnsService, Encryption, MaxRatioAction, Preferences,
    SchedulerDays, UploadChokingAlgorithm, UploadSlotsBehavior, UtpTcpMixedMode,
};
pub use log::{LogEntry, LogOptions, LogType, PeerLogEntry};
pub use rss::{RssArticle, RssFeed, RssItem, RssRule};
pub use search::{
    PluginCategory, SearchJob, SearchOptions, SearchPlugin, SearchPlugins, SearchResult,
    SearchResults, SearchState, SearchStatus,
};
pub use sync::{Category, MainData, Peer, ServerState, TorrentPeers};
pub use torrents::{
    AddPeerResult, AddTorrent, FilePriority, PieceState, TorrentContent, TorrentFilter,
    TorrentInfo, TorrentListOptions, TorrentProperties, TorrentState, Tracker, TrackerStatus,
    WebSeed,
};
pub use transfer::{ConnectionStatus, SpeedLimitsMode, TransferInfo};
