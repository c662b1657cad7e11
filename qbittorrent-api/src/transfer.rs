//! Transfer info API.
//!
//! | Method                                  | Endpoint                                   |
//! |-----------------------------------------|--------------------------------------------|
//! | [`Transfer::info`]                      | `GET /api/v2/transfer/info`                |
//! | [`Transfer::speed_limits_mode`]         | `GET /api/v2/transfer/speedLimitsMode`     |
//! | [`Transfer::toggle_speed_limits_mode`]  | `POST /api/v2/transfer/toggleSpeedLimitsMode` |
//! | [`Transfer::download_limit`]            | `GET /api/v2/transfer/downloadLimit`       |
//! | [`Transfer::set_download_limit`]        | `POST /api/v2/transfer/setDownloadLimit`   |
//! | [`Transfer::upload_limit`]              | `GET /api/v2/transfer/uploadLimit`         |
//! | [`Transfer::set_upload_limit`]          | `POST /api/v2/transfer/setUploadLimit`     |
//! | [`Transfer::ban_peers`]                 | `POST /api/v2/transfer/banPeers`           |
//!
//! Limits are bytes per second; `0` means unlimited.

use crate::client::{QbitClient, Request};
use crate::error::Result;
use crate::params::join_pipe;
use crate::types::{SpeedLimitsMode, TransferInfo};

/// `/api/v2/transfer` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Transfer<'a> {
    client: &'a QbitClient,
}

impl<'a> Transfer<'a> {
    pub(crate) fn new(client: &'a QbitClient) -> Self {
        Self { client }
    }

    pub fn info(&self) -> Result<TransferInfo> {
        self.client.json(Request::get("/transfer/info"))
    }

    /// # Errors
    ///
    /// [`QbitError::UnexpectedResponse`](crate::QbitError::UnexpectedResponse)
    /// if the server answers anything but `0` or `1`.
    pub fn speed_limits_mode(&self) -> Result<SpeedLimitsMode> {
        self.client
            .text(Request::get("/transfer/speedLimitsMode"))?
            .parse()
    }

    pub fn toggle_speed_limits_mode(&self) -> Result<()> {
        self.client
            .execute(Request::post("/transfer/toggleSpeedLimitsMode"))
    }

    pub fn download_limit(&self) -> Result<i64> {
        self.client.json(Request::get("/transfer/downloadLimit"))
    }

    pub fn set_download_limit(&self, limit: i64) -> Result<()> {
        self.client
            .execute(Request::post("/transfer/setDownloadLimit").form("limit", limit))
    }

    pub fn upload_limit(&self) -> Result<i64> {
        self.client.json(Request::get("/transfer/uploadLimit"))
    }

    pub fn set_upload_limit(&self, limit: i64) -> Result<()> {
        self.client
            .execute(Request::post("/transfer/setUploadLimit").form("limit", limit))
    }

    /// Ban peers given as `host:port`.
    pub fn ban_peers<S: AsRef<str>>(&self, peers: &[S]) -> Result<()> {
        self.client
            .execute(Request::post("/transfer/banPeers").form("peers", join_pipe(peers)))
    }
}
