use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use wormhole_core::Shortener;

use crate::auth::Credentials;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(4);

#[derive(Clone)]
pub struct AppState {
    shortener: Arc<dyn Shortener>,
    credentials: Option<Arc<Credentials>>,
    shutdown: CancellationToken,
    request_timeout: Duration,
}

impl AppState {
    pub fn new(shortener: Arc<dyn Shortener>) -> Self {
        Self {
            shortener,
            credentials: None,
            shutdown: CancellationToken::new(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Requires HTTP basic auth on the mutating routes.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(Arc::new(credentials));
        self
    }

    /// Cancelling `shutdown` stops in-flight saves before their next attempt.
    pub fn with_shutdown(mut self, shutdown: CancellationToken) -> Self {
        self.shutdown = shutdown;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn shortener(&self) -> &dyn Shortener {
        self.shortener.as_ref()
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_deref()
    }

    pub fn shutdown(&self) -> &CancellationToken {
        &self.shutdown
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}
