use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Library versions the server was built against.
///
/// Returned by [`App::build_info`](crate::app::App::build_info).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildInfo {
    pub qt: String,
    pub libtorrent: String,
    pub boost: String,
    pub openssl: String,
    pub zlib: String,
    /// 32 or 64.
    pub bitness: i64,
}

int_enum! {
    /// Days on which the alternative speed limit scheduler runs.
    pub enum SchedulerDays {
        EveryDay = 0,
        EveryWeekday = 1,
        EveryWeekend = 2,
        Monday = 3,
        Tuesday = 4,
        Wednesday = 5,
        Thursday = 6,
        Friday = 7,
        Saturday = 8,
        Sunday = 9,
    }
}

int_enum! {
    /// Peer connection encryption policy.
    pub enum Encryption {
        Prefer = 0,
        ForceOn = 1,
        ForceOff = 2,
    }
}

int_enum! {
    pub enum DyndnsService {
        DynDns = 0,
        NoIp = 1,
    }
}

int_enum! {
    /// What happens when a torrent reaches its share limit.
    pub enum MaxRatioAction {
        Pause = 0,
        Remove = 1,
        EnableSuperSeeding = 2,
        RemoveWithFiles = 3,
    }
}

int_enum! {
    pub enum BittorrentProtocol {
        TcpAndUtp = 0,
        Tcp = 1,
        Utp = 2,
    }
}

int_enum! {
    pub enum UploadChokingAlgorithm {
        RoundRobin = 0,
        FastestUpload = 1,
        AntiLeech = 2,
    }
}

int_enum! {
    pub enum UploadSlotsBehavior {
        FixedSlots = 0,
        UploadRateBased = 1,
    }
}

int_enum! {
    pub enum UtpTcpMixedMode {
        PreferTcp = 0,
        PeerProportional = 1,
    }
}

/// Declares [`Preferences`]: every known key as an optional field.
macro_rules! preferences {
    ( $( $(#[$meta:meta])* $field:ident : $ty:ty, )+ ) => {
        /// Application preferences.
        ///
        /// Returned by [`App::preferences`](crate::app::App::preferences) and
        /// accepted by [`App::set_preferences`](crate::app::App::set_preferences).
        /// Every field is optional: a `None` field is left out of the JSON
        /// sent to `setPreferences`, so only the fields you set are changed.
        /// Keys this type does not know are kept in [`other`](Self::other).
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct Preferences {
            $(
                $(#[$meta])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )+
            /// Keys not modelled above, passed through unchanged.
            #[serde(flatten)]
            pub other: Map<String, Value>,
        }
    };
}

preferences! {
    locale: String,
    create_subfolder_enabled: bool,
    start_paused_enabled: bool,
    auto_delete_mode: i64,
    preallocate_all: bool,
    incomplete_files_ext: bool,
    auto_tmm_enabled: bool,
    torrent_changed_tmm_enabled: bool,
    save_path_changed_tmm_enabled: bool,
    category_changed_tmm_enabled: bool,
    save_path: String,
    temp_path_enabled: bool,
    temp_path: String,
    /// Watched folder → target. `0`: download into the watched folder,
    /// `1`: default save path, string: that path.
    scan_dirs: HashMap<String, Value>,
    export_dir: String,
    export_dir_fin: String,
    mail_notification_enabled: bool,
    mail_notification_sender: String,
    mail_notification_email: String,
    mail_notification_smtp: String,
    mail_notification_ssl_enabled: bool,
    mail_notification_auth_enabled: bool,
    mail_notification_username: String,
    mail_notification_password: String,
    autorun_enabled: bool,
    autorun_program: String,
    queueing_enabled: bool,
    max_active_downloads: i64,
    max_active_torrents: i64,
    max_active_uploads: i64,
    dont_count_slow_torrents: bool,
    slow_torrent_dl_rate_threshold: i64,
    slow_torrent_ul_rate_threshold: i64,
    slow_torrent_inactive_timer: i64,
    max_ratio_enabled: bool,
    max_ratio: f64,
    max_ratio_act: MaxRatioAction,
    listen_port: i64,
    upnp: bool,
    random_port: bool,
    dl_limit: i64,
    up_limit: i64,
    max_connec: i64,
    max_connec_per_torrent: i64,
    max_uploads: i64,
    max_uploads_per_torrent: i64,
    stop_tracker_timeout: i64,
    enable_piece_extent_affinity: bool,
    bittorrent_protocol: BittorrentProtocol,
    limit_utp_rate: bool,
    limit_tcp_overhead: bool,
    limit_lan_peers: bool,
    alt_dl_limit: i64,
    alt_up_limit: i64,
    scheduler_enabled: bool,
    schedule_from_hour: i64,
    schedule_from_min: i64,
    schedule_to_hour: i64,
    schedule_to_min: i64,
    scheduler_days: SchedulerDays,
    dht: bool,
    pex: bool,
    lsd: bool,
    encryption: Encryption,
    anonymous_mode: bool,
    /// Integer before qBittorrent 4.5, a string such as `"SOCKS5"` after.
    proxy_type: Value,
    proxy_ip: String,
    proxy_port: i64,
    proxy_peer_connections: bool,
    proxy_auth_enabled: bool,
    proxy_username: String,
    proxy_password: String,
    proxy_torrents_only: bool,
    ip_filter_enabled: bool,
    ip_filter_path: String,
    ip_filter_trackers: bool,
    web_ui_domain_list: String,
    web_ui_address: String,
    web_ui_port: i64,
    web_ui_upnp: bool,
    web_ui_username: String,
    /// Write-only: the server never returns it.
    web_ui_password: String,
    web_ui_csrf_protection_enabled: bool,
    web_ui_clickjacking_protection_enabled: bool,
    web_ui_secure_cookie_enabled: bool,
    web_ui_max_auth_fail_count: i64,
    web_ui_ban_duration: i64,
    web_ui_session_timeout: i64,
    web_ui_host_header_validation_enabled: bool,
    bypass_local_auth: bool,
    bypass_auth_subnet_whitelist_enabled: bool,
    bypass_auth_subnet_whitelist: String,
    alternative_webui_enabled: bool,
    alternative_webui_path: String,
    use_https: bool,
    ssl_key: String,
    ssl_cert: String,
    web_ui_https_key_path: String,
    web_ui_https_cert_path: String,
    dyndns_enabled: bool,
    dyndns_service: DyndnsService,
    dyndns_username: String,
    dyndns_password: String,
    dyndns_domain: String,
    rss_refresh_interval: i64,
    rss_max_articles_per_feed: i64,
    rss_processing_enabled: bool,
    rss_auto_downloading_enabled: bool,
    rss_download_repack_proper_episodes: bool,
    rss_smart_episode_filters: String,
    add_trackers_enabled: bool,
    add_trackers: String,
    web_ui_use_custom_http_headers_enabled: bool,
    web_ui_custom_http_headers: String,
    max_seeding_time_enabled: bool,
    max_seeding_time: i64,
    announce_ip: String,
    announce_to_all_tiers: bool,
    announce_to_all_trackers: bool,
    async_io_threads: i64,
    #[serde(rename = "banned_IPs")]
    banned_ips: String,
    checking_memory_use: i64,
    current_interface_address: String,
    current_network_interface: String,
    disk_cache: i64,
    disk_cache_ttl: i64,
    embedded_tracker_port: i64,
    enable_coalesce_read_write: bool,
    enable_embedded_tracker: bool,
    enable_multi_connections_from_same_ip: bool,
    enable_os_cache: bool,
    enable_upload_suggestions: bool,
    file_pool_size: i64,
    outgoing_ports_max: i64,
    outgoing_ports_min: i64,
    recheck_completed_torrents: bool,
    resolve_peer_countries: bool,
    save_resume_data_interval: i64,
    send_buffer_low_watermark: i64,
    send_buffer_watermark: i64,
    send_buffer_watermark_factor: i64,
    socket_backlog_size: i64,
    upload_choking_algorithm: UploadChokingAlgorithm,
    upload_slots_behavior: UploadSlotsBehavior,
    upnp_lease_duration: i64,
    utp_tcp_mixed_mode: UtpTcpMixedMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_preferences_serialize_to_empty_object() {
        let json = serde_json::to_string(&Preferences::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn only_set_fields_are_sent() {
        let prefs = Preferences {
            dl_limit: Some(0),
            scheduler_days: Some(SchedulerDays::EveryWeekend),
            banned_ips: Some("10.0.0.1".into()),
            ..Preferences::default()
        };
        let value = serde_json::to_value(&prefs).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"dl_limit": 0, "scheduler_days": 2, "banned_IPs": "10.0.0.1"})
        );
    }

    #[test]
    fn unknown_keys_survive_a_round_trip() {
        let prefs: Preferences = serde_json::from_str(
            r#"{"listen_port": 6881, "encryption": 1, "i2p_enabled": false}"#,
        )
        .unwrap();
        assert_eq!(prefs.listen_port, Some(6881));
        assert_eq!(prefs.encryption, Some(Encryption::ForceOn));
        assert_eq!(prefs.other.get("i2p_enabled"), Some(&Value::Bool(false)));
    }

    #[test]
    fn unknown_enum_value_is_kept() {
        let prefs: Preferences = serde_json::from_str(r#"{"encryption": 7}"#).unwrap();
        assert_eq!(prefs.encryption, Some(Encryption::Other(7)));
        let value = serde_json::to_value(&prefs).unwrap();
        assert_eq!(value, serde_json::json!({"encryption": 7}));
    }
}
