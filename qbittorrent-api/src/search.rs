//! Search API.
//!
//! | Method                       | Endpoint                              |
//! |------------------------------|---------------------------------------|
//! | [`Search::start`]            | `POST /api/v2/search/start`           |
//! | [`Search::stop`]             | `POST /api/v2/search/stop`            |
//! | [`Search::status`]           | `GET /api/v2/search/status`           |
//! | [`Search::results`]          | `GET /api/v2/search/results`          |
//! | [`Search::delete`]           | `POST /api/v2/search/delete`          |
//! | [`Search::plugins`]          | `GET /api/v2/search/plugins`          |
//! | [`Search::install_plugin`]   | `POST /api/v2/search/installPlugin`   |
//! | [`Search::uninstall_plugin`] | `POST /api/v2/search/uninstallPlugin` |
//! | [`Search::enable_plugin`]    | `POST /api/v2/search/enablePlugin`    |
//! | [`Search::update_plugins`]   | `POST /api/v2/search/updatePlugins`   |
//!
//! A search runs in the background on the server. Start it, poll
//! [`Search::status`] or [`Search::results`], then [`Search::delete`] it.
//! The server answers `409` once too many searches are running.

use crate::client::{QbitClient, Request};
use crate::error::Result;
use crate::params::{flag, join_pipe};
use crate::types::{SearchJob, SearchOptions, SearchPlugin, SearchResults, SearchStatus};

/// `/api/v2/search` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Search<'a> {
    client: &'a QbitClient,
}

impl<'a> Search<'a> {
    pub(crate) fn new(client: &'a QbitClient) -> Self {
        Self { client }
    }

    pub fn start(&self, options: &SearchOptions) -> Result<SearchJob> {
        let request = Request::post("/search/start")
            .form("pattern", &options.pattern)
            .form("plugins", &options.plugins)
            .form("category", &options.category);
        let job: SearchJob = self.client.json(request)?;
        tracing::debug!(id = job.id, pattern = %options.pattern, "search started");
        Ok(job)
    }

    pub fn stop(&self, id: i64) -> Result<()> {
        self.client
            .execute(Request::post("/search/stop").form("id", id))
    }

    /// Status of one job, or of every job when `id` is `None`.
    pub fn status(&self, id: Option<i64>) -> Result<Vec<SearchStatus>> {
        self.client
            .json(Request::get("/search/status").query_opt("id", id))
    }

    /// Results found so far. `offset` may be negative to count from the end.
    pub fn results(
        &self,
        id: i64,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<SearchResults> {
        let request = Request::get("/search/results")
            .query("id", id)
            .query_opt("limit", limit)
            .query_opt("offset", offset);
        self.client.json(request)
    }

    /// Stop the job if needed and forget its results.
    pub fn delete(&self, id: i64) -> Result<()> {
        self.client
            .execute(Request::post("/search/delete").form("id", id))
    }

    pub fn plugins(&self) -> Result<Vec<SearchPlugin>> {
        self.client.json(Request::get("/search/plugins"))
    }

    /// Install plugins from URLs or local file paths.
    pub fn install_plugin<S: AsRef<str>>(&self, sources: &[S]) -> Result<()> {
        self.client.execute(
            Request::post("/search/installPlugin").form("sources", join_pipe(sources)),
        )
    }

    pub fn uninstall_plugin<S: AsRef<str>>(&self, names: &[S]) -> Result<()> {
        self.client.execute(
            Request::post("/search/uninstallPlugin").form("names", join_pipe(names)),
        )
    }

    pub fn enable_plugin<S: AsRef<str>>(&self, names: &[S], enable: bool) -> Result<()> {
        let request = Request::post("/search/enablePlugin")
            .form("names", join_pipe(names))
            .form("enable", flag(enable));
        self.client.execute(request)
    }

    pub fn update_plugins(&self) -> Result<()> {
        self.client.execute(Request::post("/search/updatePlugins"))
    }
}
