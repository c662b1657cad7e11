//! Session configuration.

use std::time::Duration;

/// Timeout applied to every request unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// User agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("qbittorrent-api/", env!("CARGO_PKG_VERSION"));

/// Settings used to build a [`QbitClient`](crate::QbitClient).
///
/// ```
/// use std::time::Duration;
/// use qbittorrent_api::ClientConfig;
///
/// let config = ClientConfig::new("http://localhost:8080/")
///     .timeout(Duration::from_secs(30))
///     .debug(true);
/// assert_eq!(config.address(), "http://localhost:8080");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    address: String,
    timeout: Duration,
    debug: bool,
    user_agent: String,
}

impl ClientConfig {
    /// Start from defaults for the WebUI at `address`.
    ///
    /// A trailing `/` is stripped so paths can be appended directly.
    pub fn new(address: impl Into<String>) -> Self {
        let address = address.into();
        Self {
            address: address.trim_end_matches('/').to_owned(),
            timeout: DEFAULT_TIMEOUT,
            debug: false,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Timeout for each request, connect through body read.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Echo every response status and body through `tracing` before decoding.
    #[must_use]
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn request_timeout(&self) -> Duration {
        self.timeout
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn agent(&self) -> &str {
        &self.user_agent
    }
}
