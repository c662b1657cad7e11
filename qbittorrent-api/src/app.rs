//! Application API.
//!
//! | Method                      | Endpoint                          |
//! |-----------------------------|-----------------------------------|
//! | [`App::version`]            | `GET /api/v2/app/version`         |
//! | [`App::webapi_version`]     | `GET /api/v2/app/webapiVersion`   |
//! | [`App::build_info`]         | `GET /api/v2/app/buildInfo`       |
//! | [`App::shutdown`]           | `POST /api/v2/app/shutdown`       |
//! | [`App::preferences`]        | `GET /api/v2/app/preferences`     |
//! | [`App::set_preferences`]    | `POST /api/v2/app/setPreferences` |
//! | [`App::default_save_path`]  | `GET /api/v2/app/defaultSavePath` |

use crate::client::{QbitClient, Request};
use crate::error::Result;
use crate::types::{BuildInfo, Preferences};

/// `/api/v2/app` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct App<'a> {
    client: &'a QbitClient,
}

impl<'a> App<'a> {
    pub(crate) fn new(client: &'a QbitClient) -> Self {
        Self { client }
    }

    /// Application version, e.g. `v4.6.2`.
    pub fn version(&self) -> Result<String> {
        self.client.text(Request::get("/app/version"))
    }

    /// WebUI API version, e.g. `2.9.3`.
    pub fn webapi_version(&self) -> Result<String> {
        self.client.text(Request::get("/app/webapiVersion"))
    }

    pub fn build_info(&self) -> Result<BuildInfo> {
        self.client.json(Request::get("/app/buildInfo"))
    }

    /// Ask the application to exit.
    pub fn shutdown(&self) -> Result<String> {
        self.client.text(Request::post("/app/shutdown"))
    }

    pub fn preferences(&self) -> Result<Preferences> {
        self.client.json(Request::get("/app/preferences"))
    }

    /// Change the preferences whose fields are `Some`; the rest stay as they are.
    pub fn set_preferences(&self, preferences: &Preferences) -> Result<()> {
        let json = serde_json::to_string(preferences)?;
        self.client
            .execute(Request::post("/app/setPreferences").form("json", json))
    }

    pub fn default_save_path(&self) -> Result<String> {
        self.client.text(Request::get("/app/defaultSavePath"))
    }
}
