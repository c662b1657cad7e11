//! RSS API.
//!
//! | Method                       | Endpoint                           |
//! |------------------------------|------------------------------------|
//! | [`Rss::add_folder`]          | `POST /api/v2/rss/addFolder`       |
//! | [`Rss::add_feed`]            | `POST /api/v2/rss/addFeed`         |
//! | [`Rss::remove_item`]         | `POST /api/v2/rss/removeItem`      |
//! | [`Rss::move_item`]           | `POST /api/v2/rss/moveItem`        |
//! | [`Rss::items`]               | `GET /api/v2/rss/items`            |
//! | [`Rss::mark_as_read`]        | `POST /api/v2/rss/markAsRead`      |
//! | [`Rss::refresh_item`]        | `POST /api/v2/rss/refreshItem`     |
//! | [`Rss::set_rule`]            | `POST /api/v2/rss/setRule`         |
//! | [`Rss::rename_rule`]         | `POST /api/v2/rss/renameRule`      |
//! | [`Rss::remove_rule`]         | `POST /api/v2/rss/removeRule`      |
//! | [`Rss::rules`]               | `GET /api/v2/rss/rules`            |
//! | [`Rss::matching_articles`]   | `GET /api/v2/rss/matchingArticles` |
//!
//! Item paths use `\` as separator, e.g. `Linux\Debian`.

use std::collections::HashMap;

use crate::client::{QbitClient, Request};
use crate::error::Result;
use crate::params::flag;
use crate::types::{RssItem, RssRule};

/// `/api/v2/rss` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Rss<'a> {
    client: &'a QbitClient,
}

impl<'a> Rss<'a> {
    pub(crate) fn new(client: &'a QbitClient) -> Self {
        Self { client }
    }

    pub fn add_folder(&self, path: &str) -> Result<()> {
        self.client
            .execute(Request::post("/rss/addFolder").form("path", path))
    }

    /// Subscribe to `url`, optionally at `path` in the tree.
    pub fn add_feed(&self, url: &str, path: Option<&str>) -> Result<()> {
        let request = Request::post("/rss/addFeed")
            .form("url", url)
            .form_opt("path", path);
        self.client.execute(request)
    }

    pub fn remove_item(&self, path: &str) -> Result<()> {
        self.client
            .execute(Request::post("/rss/removeItem").form("path", path))
    }

    pub fn move_item(&self, item_path: &str, dest_path: &str) -> Result<()> {
        let request = Request::post("/rss/moveItem")
            .form("itemPath", item_path)
            .form("destPath", dest_path);
        self.client.execute(request)
    }

    /// The whole feed tree. With `with_data`, feeds carry their articles.
    pub fn items(&self, with_data: bool) -> Result<HashMap<String, RssItem>> {
        self.client
            .json(Request::get("/rss/items").query("withData", flag(with_data)))
    }

    /// Mark one article, or the whole item when `article_id` is `None`, as read.
    pub fn mark_as_read(&self, item_path: &str, article_id: Option<&str>) -> Result<()> {
        let request = Request::post("/rss/markAsRead")
            .form("itemPath", item_path)
            .form_opt("articleId", article_id);
        self.client.execute(request)
    }

    pub fn refresh_item(&self, item_path: &str) -> Result<()> {
        self.client
            .execute(Request::post("/rss/refreshItem").form("itemPath", item_path))
    }

    /// Create or replace the auto-downloading rule `name`.
    pub fn set_rule(&self, name: &str, rule: &RssRule) -> Result<()> {
        let definition = serde_json::to_string(rule)?;
        let request = Request::post("/rss/setRule")
            .form("ruleName", name)
            .form("ruleDef", definition);
        self.client.execute(request)
    }

    pub fn rename_rule(&self, name: &str, new_name: &str) -> Result<()> {
        let request = Request::post("/rss/renameRule")
            .form("ruleName", name)
            .form("newRuleName", new_name);
        self.client.execute(request)
    }

    pub fn remove_rule(&self, name: &str) -> Result<()> {
        self.client
            .execute(Request::post("/rss/removeRule").form("ruleName", name))
    }

    pub fn rules(&self) -> Result<HashMap<String, RssRule>> {
        self.client.json(Request::get("/rss/rules"))
    }

    /// Article titles matched by the rule, grouped by feed name.
    pub fn matching_articles(&self, name: &str) -> Result<HashMap<String, Vec<String>>> {
        self.client
            .json(Request::get("/rss/matchingArticles").query("ruleName", name))
    }
}
