//! Authentication API.
//!
//! | Method                    | Endpoint                 |
//! |---------------------------|--------------------------|
//! | [`Auth::login`]           | `POST /api/v2/auth/login`  |
//! | [`Auth::logout`]          | `POST /api/v2/auth/logout` |
//!
//! A successful login answers `200 Ok.` and sets the `SID` cookie, which the
//! client's jar then attaches to every other call. Wrong credentials still
//! answer `200`, with body `Fails.`. Too many failures get the IP banned and
//! every request answers `403`.

use crate::client::{QbitClient, Request};
use crate::error::Result;

/// `/api/v2/auth` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Auth<'a> {
    client: &'a QbitClient,
}

impl<'a> Auth<'a> {
    pub(crate) fn new(client: &'a QbitClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for a session cookie.
    ///
    /// Returns the body text: `Ok.` on success, `Fails.` on bad credentials.
    pub fn login(&self, username: &str, password: &str) -> Result<String> {
        let request = Request::post("/auth/login")
            .form("username", username)
            .form("password", password);
        let text = self.client.text(request)?;
        tracing::debug!(response = %text, "login answered");
        Ok(text)
    }

    /// Invalidate the session cookie server-side.
    pub fn logout(&self) -> Result<String> {
        self.client.text(Request::post("/auth/logout"))
    }
}
