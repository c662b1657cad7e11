//! Blocking client for the qBittorrent WebUI API (`/api/v2`).
//!
//! A [`QbitClient`] holds the base address and a cookie-carrying HTTP
//! client. Endpoint groups are reached through short-lived views borrowed
//! from it; every call is one HTTP round trip through
//! [`QbitClient::send`].
//!
//! ```no_run
//! use qbittorrent_api::{Hashes, QbitClient};
//! use qbittorrent_api::types::TorrentListOptions;
//!
//! let client = QbitClient::new("http://localhost:8080")?;
//! client.auth().login("admin", "adminadmin")?;
//!
//! for torrent in client.torrents().info(&TorrentListOptions::default())? {
//!     println!("{} {:.1}%", torrent.name, torrent.progress * 100.0);
//! }
//! client.torrents().pause(&Hashes::All)?;
//! # Ok::<(), qbittorrent_api::QbitError>(())
//! ```
//!
//! # Endpoint groups
//!
//! | Accessor                        | View                       | Prefix               |
//! |---------------------------------|----------------------------|----------------------|
//! | [`QbitClient::auth`]            | [`auth::Auth`]             | `/api/v2/auth`       |
//! | [`QbitClient::app`]             | [`app::App`]               | `/api/v2/app`        |
//! | [`QbitClient::log`]             | [`log::Log`]               | `/api/v2/log`        |
//! | [`QbitClient::sync`]            | [`sync::SyncApi`]          | `/api/v2/sync`       |
//! | [`QbitClient::transfer`]        | [`transfer::Transfer`]     | `/api/v2/transfer`   |
//! | [`QbitClient::torrents`]        | [`torrents::Torrents`]     | `/api/v2/torrents`   |
//! | [`QbitClient::rss`]             | [`rss::Rss`]               | `/api/v2/rss`        |
//! | [`QbitClient::search`]          | [`search::Search`]         | `/api/v2/search`     |
//!
//! # Errors
//!
//! Any status other than `200` is a [`QbitError::Api`] whose message is the
//! response body. No call is retried.

pub mod app;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod log;
mod params;
pub mod rss;
pub mod search;
pub mod sync;
pub mod torrents;
pub mod transfer;
pub mod types;

pub use client::{Expect, Payload, QbitClient, Request};
pub use config::ClientConfig;
pub use error::{QbitError, Result};
pub use params::{Hashes, RatioLimit, SeedingTimeLimit};
