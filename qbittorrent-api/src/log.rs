//! Log API.
//!
//! | Method          | Endpoint                 |
//! |-----------------|--------------------------|
//! | [`Log::main`]   | `GET /api/v2/log/main`   |
//! | [`Log::peers`]  | `GET /api/v2/log/peers`  |

use crate::client::{QbitClient, Request};
use crate::error::Result;
use crate::params::flag;
use crate::types::{LogEntry, LogOptions, PeerLogEntry};

/// `/api/v2/log` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Log<'a> {
    client: &'a QbitClient,
}

impl<'a> Log<'a> {
    pub(crate) fn new(client: &'a QbitClient) -> Self {
        Self { client }
    }

    /// Application log entries matching `options`.
    pub fn main(&self, options: &LogOptions) -> Result<Vec<LogEntry>> {
        let request = Request::get("/log/main")
            .query("normal", flag(options.normal))
            .query("info", flag(options.info))
            .query("warning", flag(options.warning))
            .query("critical", flag(options.critical))
            .query("last_known_id", options.last_known_id);
        self.client.json(request)
    }

    /// Peer log entries newer than `last_known_id` (`-1` for all).
    pub fn peers(&self, last_known_id: i64) -> Result<Vec<PeerLogEntry>> {
        self.client
            .json(Request::get("/log/peers").query("last_known_id", last_known_id))
    }
}
