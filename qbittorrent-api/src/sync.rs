//! Sync API.
//!
//! | Method                       | Endpoint                         |
//! |------------------------------|----------------------------------|
//! | [`SyncApi::main_data`]       | `GET /api/v2/sync/maindata`      |
//! | [`SyncApi::torrent_peers`]   | `GET /api/v2/sync/torrentPeers`  |
//!
//! Both endpoints are incremental. Pass `rid = 0` for a full snapshot, then
//! the `rid` of the last answer to receive only what changed since.

use crate::client::{QbitClient, Request};
use crate::error::Result;
use crate::types::{MainData, TorrentPeers};

/// `/api/v2/sync` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct SyncApi<'a> {
    client: &'a QbitClient,
}

impl<'a> SyncApi<'a> {
    pub(crate) fn new(client: &'a QbitClient) -> Self {
        Self { client }
    }

    pub fn main_data(&self, rid: i64) -> Result<MainData> {
        self.client
            .json(Request::get("/sync/maindata").query("rid", rid))
    }

    /// Peers of the torrent `hash`.
    pub fn torrent_peers(&self, hash: &str, rid: i64) -> Result<TorrentPeers> {
        let request = Request::get("/sync/torrentPeers")
            .query("hash", hash)
            .query("rid", rid);
        self.client.json(request)
    }
}
