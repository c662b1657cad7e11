//! Session and request dispatcher for the qBittorrent WebUI API.
//!
//! Every endpoint method funnels into [`QbitClient::send`]:
//!
//! 1. Join the base address, `/api/v2` and the endpoint path
//! 2. Attach query pairs, and a URL-encoded form or multipart body
//! 3. Perform exactly one round trip through the shared cookie-carrying client
//! 4. Status `200` is success; anything else becomes
//!    [`QbitError::Api`](crate::QbitError::Api) carrying the raw body
//! 5. Decode the body as text or JSON, as the caller asked
//!
//! # Authentication
//!
//! `POST /api/v2/auth/login` answers with a `SID` cookie. The client keeps it
//! in an in-memory [`Jar`] and attaches it to every following request, so no
//! token is threaded through the API. The jar is lock-protected; a
//! `QbitClient` can be shared across threads.

use crate::app::App;
use crate::auth::Auth;
use crate::config::ClientConfig;
use crate::error::{QbitError, Result};
use crate::log::Log;
use crate::rss::Rss;
use crate::search::Search;
use crate::sync::SyncApi;
use crate::torrents::Torrents;
use crate::transfer::Transfer;
use reqwest::Method;
use reqwest::StatusCode;
use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::blocking::multipart::Form;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::REFERER;
use serde::de::{DeserializeOwned, IgnoredAny};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

const API_PREFIX: &str = "/api/v2";

/// How the response body should be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    /// Hand back the body unchanged.
    Text,
    /// Parse the body as JSON into the requested type.
    Json,
}

/// A decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<T> {
    Text(String),
    Json(T),
}

impl<T> Payload<T> {
    pub fn into_text(self) -> Result<String> {
        match self {
            Self::Text(text) => Ok(text),
            Self::Json(_) => Err(QbitError::UnexpectedResponse(
                "expected a text body, got JSON".into(),
            )),
        }
    }

    pub fn into_json(self) -> Result<T> {
        match self {
            Self::Json(value) => Ok(value),
            Self::Text(_) => Err(QbitError::UnexpectedResponse(
                "expected a JSON body, got text".into(),
            )),
        }
    }
}

enum Body {
    Empty,
    Form(Vec<(&'static str, String)>),
    Multipart(Form),
}

/// One WebUI call: method, endpoint path, parameters and body.
///
/// Paths are relative to `/api/v2`, e.g. `/torrents/info`.
///
/// ```
/// use qbittorrent_api::Request;
///
/// let request = Request::get("/torrents/info")
///     .query("filter", "downloading")
///     .query_opt("category", None::<String>);
/// assert_eq!(request.path(), "/torrents/info");
/// ```
pub struct Request {
    method: Method,
    path: &'static str,
    query: Vec<(&'static str, String)>,
    body: Body,
}

impl Request {
    pub fn new(method: Method, path: &'static str) -> Self {
        Self {
            method,
            path,
            query: Vec::new(),
            body: Body::Empty,
        }
    }

    pub fn get(path: &'static str) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: &'static str) -> Self {
        Self::new(Method::POST, path)
    }

    #[must_use]
    pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Add a query pair only when `value` is present.
    #[must_use]
    pub fn query_opt(self, key: &'static str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Add a URL-encoded form field.
    ///
    /// Replaces a multipart body if one was set.
    #[must_use]
    pub fn form(mut self, key: &'static str, value: impl ToString) -> Self {
        let pair = (key, value.to_string());
        match &mut self.body {
            Body::Form(fields) => fields.push(pair),
            _ => self.body = Body::Form(vec![pair]),
        }
        self
    }

    /// Add a form field only when `value` is present.
    #[must_use]
    pub fn form_opt(self, key: &'static str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.form(key, value),
            None => self,
        }
    }

    /// Send `form` as a `multipart/form-data` body.
    ///
    /// The content type, boundary included, comes from the form itself.
    #[must_use]
    pub fn multipart(mut self, form: Form) -> Self {
        self.body = Body::Multipart(form);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        self.path
    }
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = match &self.body {
            Body::Empty => "empty",
            Body::Form(_) => "form",
            Body::Multipart(_) => "multipart",
        };
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("query", &self.query)
            .field("body", &body)
            .finish()
    }
}

/// Blocking client for one qBittorrent WebUI.
///
/// Holds a [`reqwest::blocking::Client`] with a cookie jar. Endpoint groups
/// are reached through borrowed views: [`auth`](Self::auth),
/// [`app`](Self::app), [`log`](Self::log), [`sync`](Self::sync),
/// [`transfer`](Self::transfer), [`torrents`](Self::torrents),
/// [`rss`](Self::rss) and [`search`](Self::search).
pub struct QbitClient {
    http: Client,
    jar: Arc<Jar>,
    address: String,
    base: Url,
    debug: bool,
}

impl QbitClient {
    /// Create a client for the WebUI at `address` with default settings.
    pub fn new(address: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(address))
    }

    /// Create a client from explicit settings.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base = Url::parse(config.address()).map_err(|e| {
            QbitError::InvalidRequest(format!("invalid address {:?}: {e}", config.address()))
        })?;
        let jar = Arc::new(Jar::default());
        let http = Client::builder()
            .user_agent(config.agent())
            .timeout(config.request_timeout())
            .cookie_provider(Arc::clone(&jar))
            .build()?;
        Ok(Self {
            http,
            jar,
            address: config.address().to_owned(),
            base,
            debug: config.is_debug(),
        })
    }

    /// Base address, without trailing slash.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The `Cookie` header value the next request will carry, if any.
    ///
    /// `Some` after a successful login, `None` on a fresh client.
    pub fn cookie_header(&self) -> Option<String> {
        let value = self.jar.cookies(&self.base)?;
        value.to_str().ok().map(str::to_owned)
    }

    pub fn auth(&self) -> Auth<'_> {
        Auth::new(self)
    }

    pub fn app(&self) -> App<'_> {
        App::new(self)
    }

    pub fn log(&self) -> Log<'_> {
        Log::new(self)
    }

    pub fn sync(&self) -> SyncApi<'_> {
        SyncApi::new(self)
    }

    pub fn transfer(&self) -> Transfer<'_> {
        Transfer::new(self)
    }

    pub fn torrents(&self) -> Torrents<'_> {
        Torrents::new(self)
    }

    pub fn rss(&self) -> Rss<'_> {
        Rss::new(self)
    }

    pub fn search(&self) -> Search<'_> {
        Search::new(self)
    }

    /// Perform `request` and decode the body according to `expect`.
    ///
    /// # Errors
    ///
    /// - [`QbitError::Http`]: the request could not be sent or the body
    ///   could not be read
    /// - [`QbitError::Api`]: any status other than 200; the message is the
    ///   response body verbatim
    /// - [`QbitError::Decode`]: `expect` is [`Expect::Json`] and the body
    ///   does not parse into `T`
    pub fn send<T: DeserializeOwned>(
        &self,
        request: Request,
        expect: Expect,
    ) -> Result<Payload<T>> {
        let body = self.fetch(request)?;
        decode(&body, expect)
    }

    /// [`send`](Self::send) with `form` as the `multipart/form-data` body.
    ///
    /// The `Content-Type` header, boundary included, is taken from `form`.
    pub fn send_multipart<T: DeserializeOwned>(
        &self,
        request: Request,
        form: Form,
        expect: Expect,
    ) -> Result<Payload<T>> {
        self.send(request.multipart(form), expect)
    }

    pub(crate) fn text(&self, request: Request) -> Result<String> {
        self.send::<IgnoredAny>(request, Expect::Text)?.into_text()
    }

    pub(crate) fn json<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        self.send(request, Expect::Json)?.into_json()
    }

    /// For endpoints whose body carries nothing of interest.
    pub(crate) fn execute(&self, request: Request) -> Result<()> {
        self.text(request).map(drop)
    }

    fn fetch(&self, request: Request) -> Result<Vec<u8>> {
        let Request {
            method,
            path,
            query,
            body,
        } = request;
        let url = format!("{}{API_PREFIX}{path}", self.address);
        debug!(%method, path, "sending request");

        let mut req = self
            .http
            .request(method.clone(), &url)
            .header(REFERER, &self.address);
        if !query.is_empty() {
            req = req.query(&query);
        }
        req = match body {
            Body::Empty => req,
            Body::Form(fields) => req.form(&fields),
            Body::Multipart(form) => req.multipart(form),
        };

        let resp = req.send()?;
        let status = resp.status();
        let bytes = resp.bytes()?.to_vec();
        debug!(%method, path, status = status.as_u16(), len = bytes.len(), "received response");

        if self.debug {
            info!(
                target: "qbittorrent_api::wire",
                status = status.as_u16(),
                body = %String::from_utf8_lossy(&bytes),
                "{method} {path}",
            );
        }

        if status != StatusCode::OK {
            return Err(QbitError::Api {
                status: status.as_u16(),
                message: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }
        Ok(bytes)
    }
}

impl fmt::Debug for QbitClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QbitClient")
            .field("address", &self.address)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

/// Decode a successful response body.
fn decode<T: DeserializeOwned>(body: &[u8], expect: Expect) -> Result<Payload<T>> {
    match expect {
        Expect::Text => Ok(Payload::Text(String::from_utf8_lossy(body).into_owned())),
        Expect::Json => Ok(Payload::Json(serde_json::from_slice(body)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn text_is_verbatim() {
        let body = b"  v4.6.2\n";
        let payload: Payload<IgnoredAny> = decode(body, Expect::Text).unwrap();
        assert_eq!(payload.into_text().unwrap(), "  v4.6.2\n");
    }

    #[test]
    fn json_is_parsed() {
        let payload: Payload<HashMap<String, i64>> =
            decode(br#"{"8c21":1024}"#, Expect::Json).unwrap();
        assert_eq!(payload.into_json().unwrap()["8c21"], 1024);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = decode::<Vec<String>>(b"[\"a\",", Expect::Json).unwrap_err();
        assert!(matches!(err, QbitError::Decode(_)));
    }

    #[test]
    fn empty_json_array_is_empty() {
        let payload: Payload<Vec<String>> = decode(b"[]", Expect::Json).unwrap();
        assert!(payload.into_json().unwrap().is_empty());
    }

    #[test]
    fn form_fields_accumulate() {
        let request = Request::post("/torrents/delete")
            .form("hashes", "a|b")
            .form_opt("deleteFiles", Some(true))
            .form_opt("missing", None::<&str>);
        match request.body {
            Body::Form(fields) => assert_eq!(
                fields,
                vec![("hashes", "a|b".to_owned()), ("deleteFiles", "true".to_owned())]
            ),
            _ => panic!("expected form body"),
        }
    }

    #[test]
    fn rejects_unparseable_address() {
        let err = QbitClient::new("not a url").unwrap_err();
        assert!(matches!(err, QbitError::InvalidRequest(_)));
    }

    #[test]
    fn fresh_client_has_no_cookie() {
        let client = QbitClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.address(), "http://localhost:8080");
        assert_eq!(client.cookie_header(), None);
    }
}
