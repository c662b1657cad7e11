//! Torrent management API.
//!
//! | Method                                         | Endpoint                                   |
//! |------------------------------------------------|--------------------------------------------|
//! | [`Torrents::info`]                             | `GET /api/v2/torrents/info`                |
//! | [`Torrents::properties`]                       | `GET /api/v2/torrents/properties`          |
//! | [`Torrents::trackers`]                         | `GET /api/v2/torrents/trackers`            |
//! | [`Torrents::webseeds`]                         | `GET /api/v2/torrents/webseeds`            |
//! | [`Torrents::files`]                            | `GET /api/v2/torrents/files`               |
//! | [`Torrents::piece_states`]                     | `GET /api/v2/torrents/pieceStates`         |
//! | [`Torrents::piece_hashes`]                     | `GET /api/v2/torrents/pieceHashes`         |
//! | [`Torrents::pause`] / [`Torrents::resume`]     | `POST /api/v2/torrents/pause`, `resume`    |
//! | [`Torrents::delete`]                           | `POST /api/v2/torrents/delete`             |
//! | [`Torrents::recheck`] / [`Torrents::reannounce`] | `POST /api/v2/torrents/recheck`, `reannounce` |
//! | [`Torrents::add`]                              | `POST /api/v2/torrents/add` (multipart)    |
//! | [`Torrents::add_trackers`]                     | `POST /api/v2/torrents/addTrackers`        |
//! | [`Torrents::edit_tracker`]                     | `POST /api/v2/torrents/editTracker`        |
//! | [`Torrents::remove_trackers`]                  | `POST /api/v2/torrents/removeTrackers`     |
//! | [`Torrents::add_peers`]                        | `POST /api/v2/torrents/addPeers`           |
//! | [`Torrents::increase_priority`] and friends    | `POST /api/v2/torrents/increasePrio`, ...  |
//! | [`Torrents::set_file_priority`]                | `POST /api/v2/torrents/filePrio`           |
//! | [`Torrents::download_limit`] / [`Torrents::set_download_limit`] | `POST /api/v2/torrents/downloadLimit`, `setDownloadLimit` |
//! | [`Torrents::set_share_limits`]                 | `POST /api/v2/torrents/setShareLimits`     |
//! | [`Torrents::upload_limit`] / [`Torrents::set_upload_limit`] | `POST /api/v2/torrents/uploadLimit`, `setUploadLimit` |
//! | [`Torrents::set_location`]                     | `POST /api/v2/torrents/setLocation`        |
//! | [`Torrents::rename`]                           | `POST /api/v2/torrents/rename`             |
//! | [`Torrents::set_category`]                     | `POST /api/v2/torrents/setCategory`        |
//! | [`Torrents::categories`]                       | `GET /api/v2/torrents/categories`          |
//! | [`Torrents::create_category`] / [`Torrents::edit_category`] | `POST /api/v2/torrents/createCategory`, `editCategory` |
//! | [`Torrents::remove_categories`]                | `POST /api/v2/torrents/removeCategories`   |
//! | [`Torrents::add_tags`] / [`Torrents::remove_tags`] | `POST /api/v2/torrents/addTags`, `removeTags` |
//! | [`Torrents::tags`]                             | `GET /api/v2/torrents/tags`                |
//! | [`Torrents::create_tags`] / [`Torrents::delete_tags`] | `POST /api/v2/torrents/createTags`, `deleteTags` |
//! | [`Torrents::set_auto_management`]              | `POST /api/v2/torrents/setAutoManagement`  |
//! | [`Torrents::toggle_sequential_download`]       | `POST /api/v2/torrents/toggleSequentialDownload` |
//! | [`Torrents::toggle_first_last_piece_priority`] | `POST /api/v2/torrents/toggleFirstLastPiecePrio` |
//! | [`Torrents::set_force_start`]                  | `POST /api/v2/torrents/setForceStart`      |
//! | [`Torrents::set_super_seeding`]                | `POST /api/v2/torrents/setSuperSeeding`    |
//! | [`Torrents::rename_file`] / [`Torrents::rename_folder`] | `POST /api/v2/torrents/renameFile`, `renameFolder` |
//!
//! Most mutations take a [`Hashes`] selector and answer `200` with an empty
//! body. An unknown hash usually answers `404`.

use std::collections::HashMap;
use std::fs;

use reqwest::blocking::multipart::{Form, Part};
use serde::de::IgnoredAny;

use crate::client::{Expect, QbitClient, Request};
use crate::error::{QbitError, Result};
use crate::params::{flag, join_comma, join_lines, join_numbers, join_pipe};
use crate::types::{
    AddPeerResult, AddTorrent, Category, FilePriority, PieceState, TorrentContent, TorrentInfo,
    TorrentListOptions, TorrentProperties, Tracker, WebSeed,
};
use crate::{Hashes, RatioLimit, SeedingTimeLimit};

const TORRENT_MIME: &str = "application/x-bittorrent";

/// `/api/v2/torrents` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Torrents<'a> {
    client: &'a QbitClient,
}

impl<'a> Torrents<'a> {
    pub(crate) fn new(client: &'a QbitClient) -> Self {
        Self { client }
    }

    /// List torrents. Unset options are not sent.
    pub fn info(&self, options: &TorrentListOptions) -> Result<Vec<TorrentInfo>> {
        let request = Request::get("/torrents/info")
            .query_opt("filter", options.filter)
            .query_opt("category", options.category.as_deref())
            .query_opt("tag", options.tag.as_deref())
            .query_opt("sort", options.sort.as_deref())
            .query_opt("reverse", options.reverse.map(flag))
            .query_opt("limit", options.limit)
            .query_opt("offset", options.offset)
            .query_opt("hashes", options.hashes.as_ref());
        self.client.json(request)
    }

    pub fn properties(&self, hash: &str) -> Result<TorrentProperties> {
        self.client
            .json(Request::get("/torrents/properties").query("hash", hash))
    }

    pub fn trackers(&self, hash: &str) -> Result<Vec<Tracker>> {
        self.client
            .json(Request::get("/torrents/trackers").query("hash", hash))
    }

    pub fn webseeds(&self, hash: &str) -> Result<Vec<WebSeed>> {
        self.client
            .json(Request::get("/torrents/webseeds").query("hash", hash))
    }

    /// Files of a torrent. An empty `indexes` returns every file.
    pub fn files(&self, hash: &str, indexes: &[i64]) -> Result<Vec<TorrentContent>> {
        let indexes = (!indexes.is_empty()).then(|| join_numbers(indexes));
        let request = Request::get("/torrents/files")
            .query("hash", hash)
            .query_opt("indexes", indexes);
        self.client.json(request)
    }

    pub fn piece_states(&self, hash: &str) -> Result<Vec<PieceState>> {
        self.client
            .json(Request::get("/torrents/pieceStates").query("hash", hash))
    }

    /// SHA-1 hashes of every piece, hex encoded.
    pub fn piece_hashes(&self, hash: &str) -> Result<Vec<String>> {
        self.client
            .json(Request::get("/torrents/pieceHashes").query("hash", hash))
    }

    pub fn pause(&self, hashes: &Hashes) -> Result<()> {
        self.on_hashes("/torrents/pause", hashes)
    }

    pub fn resume(&self, hashes: &Hashes) -> Result<()> {
        self.on_hashes("/torrents/resume", hashes)
    }

    /// Remove torrents, and their downloaded data if `delete_files` is set.
    pub fn delete(&self, hashes: &Hashes, delete_files: bool) -> Result<()> {
        let request = Request::post("/torrents/delete")
            .form("hashes", hashes)
            .form("deleteFiles", flag(delete_files));
        self.client.execute(request)
    }

    pub fn recheck(&self, hashes: &Hashes) -> Result<()> {
        self.on_hashes("/torrents/recheck", hashes)
    }

    pub fn reannounce(&self, hashes: &Hashes) -> Result<()> {
        self.on_hashes("/torrents/reannounce", hashes)
    }

    /// Add torrents from URLs and/or local `.torrent` files.
    ///
    /// Each file goes in its own `torrents` part, named after the file. The
    /// body answer is returned as is: `Ok.`, or `Fails.` when nothing could be
    /// added.
    ///
    /// # Errors
    ///
    /// [`QbitError::InvalidRequest`] without contacting the server when
    /// `torrent` names no URL and no file; [`QbitError::Io`] when a file
    /// cannot be read.
    pub fn add(&self, torrent: &AddTorrent) -> Result<String> {
        if torrent.is_empty() {
            return Err(QbitError::InvalidRequest(
                "no URL or torrent file to add".into(),
            ));
        }
        let form = build_add_form(torrent)?;
        tracing::debug!(
            urls = torrent.urls.len(),
            files = torrent.torrents.len(),
            "adding torrents"
        );
        self.client
            .send_multipart::<IgnoredAny>(Request::post("/torrents/add"), form, Expect::Text)?
            .into_text()
    }

    pub fn add_trackers<S: AsRef<str>>(&self, hash: &str, urls: &[S]) -> Result<()> {
        let request = Request::post("/torrents/addTrackers")
            .form("hash", hash)
            .form("urls", join_lines(urls));
        self.client.execute(request)
    }

    pub fn edit_tracker(&self, hash: &str, orig_url: &str, new_url: &str) -> Result<()> {
        let request = Request::post("/torrents/editTracker")
            .form("hash", hash)
            .form("origUrl", orig_url)
            .form("newUrl", new_url);
        self.client.execute(request)
    }

    pub fn remove_trackers<S: AsRef<str>>(&self, hash: &str, urls: &[S]) -> Result<()> {
        let request = Request::post("/torrents/removeTrackers")
            .form("hash", hash)
            .form("urls", join_pipe(urls));
        self.client.execute(request)
    }

    /// Add peers (`host:port`) to torrents. Returns counts per torrent hash.
    pub fn add_peers<S: AsRef<str>>(
        &self,
        hashes: &Hashes,
        peers: &[S],
    ) -> Result<HashMap<String, AddPeerResult>> {
        let request = Request::post("/torrents/addPeers")
            .form("hashes", hashes)
            .form("peers", join_pipe(peers));
        self.client.json(request)
    }

    /// Queue position changes. These answer `409` when queueing is disabled.
    pub fn increase_priority(&self, hashes: &Hashes) -> Result<()> {
        self.on_hashes("/torrents/increasePrio", hashes)
    }

    pub fn decrease_priority(&self, hashes: &Hashes) -> Result<()> {
        self.on_hashes("/torrents/decreasePrio", hashes)
    }

    pub fn top_priority(&self, hashes: &Hashes) -> Result<()> {
        self.on_hashes("/torrents/topPrio", hashes)
    }

    pub fn bottom_priority(&self, hashes: &Hashes) -> Result<()> {
        self.on_hashes("/torrents/bottomPrio", hashes)
    }

    /// Set the priority of the files at `ids` (indexes from [`files`](Self::files)).
    pub fn set_file_priority(&self, hash: &str, ids: &[i64], priority: FilePriority) -> Result<()> {
        let request = Request::post("/torrents/filePrio")
            .form("hash", hash)
            .form("id", join_numbers(ids))
            .form("priority", priority.value());
        self.client.execute(request)
    }

    /// Download limit per torrent hash, bytes per second.
    pub fn download_limit(&self, hashes: &Hashes) -> Result<HashMap<String, i64>> {
        self.client
            .json(Request::post("/torrents/downloadLimit").form("hashes", hashes))
    }

    pub fn set_download_limit(&self, hashes: &Hashes, limit: i64) -> Result<()> {
        let request = Request::post("/torrents/setDownloadLimit")
            .form("hashes", hashes)
            .form("limit", limit);
        self.client.execute(request)
    }

    pub fn set_share_limits(
        &self,
        hashes: &Hashes,
        ratio: RatioLimit,
        seeding_time: SeedingTimeLimit,
    ) -> Result<()> {
        let request = Request::post("/torrents/setShareLimits")
            .form("hashes", hashes)
            .form("ratioLimit", ratio)
            .form("seedingTimeLimit", seeding_time);
        self.client.execute(request)
    }

    pub fn upload_limit(&self, hashes: &Hashes) -> Result<HashMap<String, i64>> {
        self.client
            .json(Request::post("/torrents/uploadLimit").form("hashes", hashes))
    }

    pub fn set_upload_limit(&self, hashes: &Hashes, limit: i64) -> Result<()> {
        let request = Request::post("/torrents/setUploadLimit")
            .form("hashes", hashes)
            .form("limit", limit);
        self.client.execute(request)
    }

    /// Move torrent data to `location`, which is created if missing.
    pub fn set_location(&self, hashes: &Hashes, location: &str) -> Result<()> {
        let request = Request::post("/torrents/setLocation")
            .form("hashes", hashes)
            .form("location", location);
        self.client.execute(request)
    }

    pub fn rename(&self, hash: &str, name: &str) -> Result<()> {
        let request = Request::post("/torrents/rename")
            .form("hash", hash)
            .form("name", name);
        self.client.execute(request)
    }

    /// Assign a category; an empty `category` removes it.
    pub fn set_category(&self, hashes: &Hashes, category: &str) -> Result<()> {
        let request = Request::post("/torrents/setCategory")
            .form("hashes", hashes)
            .form("category", category);
        self.client.execute(request)
    }

    pub fn categories(&self) -> Result<HashMap<String, Category>> {
        self.client.json(Request::get("/torrents/categories"))
    }

    pub fn create_category(&self, category: &Category) -> Result<()> {
        self.category_action("/torrents/createCategory", category)
    }

    pub fn edit_category(&self, category: &Category) -> Result<()> {
        self.category_action("/torrents/editCategory", category)
    }

    pub fn remove_categories<S: AsRef<str>>(&self, names: &[S]) -> Result<()> {
        self.client.execute(
            Request::post("/torrents/removeCategories").form("categories", join_lines(names)),
        )
    }

    pub fn add_tags<S: AsRef<str>>(&self, hashes: &Hashes, tags: &[S]) -> Result<()> {
        let request = Request::post("/torrents/addTags")
            .form("hashes", hashes)
            .form("tags", join_comma(tags));
        self.client.execute(request)
    }

    pub fn remove_tags<S: AsRef<str>>(&self, hashes: &Hashes, tags: &[S]) -> Result<()> {
        let request = Request::post("/torrents/removeTags")
            .form("hashes", hashes)
            .form("tags", join_comma(tags));
        self.client.execute(request)
    }

    pub fn tags(&self) -> Result<Vec<String>> {
        self.client.json(Request::get("/torrents/tags"))
    }

    pub fn create_tags<S: AsRef<str>>(&self, tags: &[S]) -> Result<()> {
        self.client
            .execute(Request::post("/torrents/createTags").form("tags", join_comma(tags)))
    }

    pub fn delete_tags<S: AsRef<str>>(&self, tags: &[S]) -> Result<()> {
        self.client
            .execute(Request::post("/torrents/deleteTags").form("tags", join_comma(tags)))
    }

    pub fn set_auto_management(&self, hashes: &Hashes, enable: bool) -> Result<()> {
        let request = Request::post("/torrents/setAutoManagement")
            .form("hashes", hashes)
            .form("enable", flag(enable));
        self.client.execute(request)
    }

    pub fn toggle_sequential_download(&self, hashes: &Hashes) -> Result<()> {
        self.on_hashes("/torrents/toggleSequentialDownload", hashes)
    }

    pub fn toggle_first_last_piece_priority(&self, hashes: &Hashes) -> Result<()> {
        self.on_hashes("/torrents/toggleFirstLastPiecePrio", hashes)
    }

    pub fn set_force_start(&self, hashes: &Hashes, value: bool) -> Result<()> {
        self.on_hashes_with_value("/torrents/setForceStart", hashes, value)
    }

    pub fn set_super_seeding(&self, hashes: &Hashes, value: bool) -> Result<()> {
        self.on_hashes_with_value("/torrents/setSuperSeeding", hashes, value)
    }

    pub fn rename_file(&self, hash: &str, old_path: &str, new_path: &str) -> Result<()> {
        self.rename_path("/torrents/renameFile", hash, old_path, new_path)
    }

    pub fn rename_folder(&self, hash: &str, old_path: &str, new_path: &str) -> Result<()> {
        self.rename_path("/torrents/renameFolder", hash, old_path, new_path)
    }

    fn on_hashes(&self, path: &'static str, hashes: &Hashes) -> Result<()> {
        self.client
            .execute(Request::post(path).form("hashes", hashes))
    }

    fn on_hashes_with_value(&self, path: &'static str, hashes: &Hashes, value: bool) -> Result<()> {
        let request = Request::post(path)
            .form("hashes", hashes)
            .form("value", flag(value));
        self.client.execute(request)
    }

    fn category_action(&self, path: &'static str, category: &Category) -> Result<()> {
        let request = Request::post(path)
            .form("category", &category.name)
            .form("savePath", &category.save_path);
        self.client.execute(request)
    }

    fn rename_path(&self, path: &'static str, hash: &str, old: &str, new: &str) -> Result<()> {
        let request = Request::post(path)
            .form("hash", hash)
            .form("oldPath", old)
            .form("newPath", new);
        self.client.execute(request)
    }
}

fn build_add_form(torrent: &AddTorrent) -> Result<Form> {
    let mut form = Form::new();
    for (key, value) in torrent.text_fields() {
        form = form.text(key, value);
    }
    for path in &torrent.torrents {
        let bytes = fs::read(path)?;
        let name = path
            .file_name()
            .map_or_else(|| "upload.torrent".to_owned(), |n| n.to_string_lossy().into_owned());
        let part = Part::bytes(bytes).file_name(name).mime_str(TORRENT_MIME)?;
        form = form.part("torrents", part);
    }
    Ok(form)
}
