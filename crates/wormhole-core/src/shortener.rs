use crate::alias::Alias;
use crate::error::Result;
use crate::repository::RecordId;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Parameters for saving a URL.
#[derive(Debug, Clone, Default)]
pub struct SaveParams {
    /// The target URL to be shortened.
    pub url: String,
    /// Optional caller-chosen alias. An empty string counts as absent.
    pub alias: Option<String>,
    /// Checked before every insert attempt.
    pub cancel: CancellationToken,
}

impl SaveParams {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Returns the requested alias, treating an empty one as absent.
    pub fn requested_alias(&self) -> Option<&str> {
        self.alias.as_deref().filter(|alias| !alias.is_empty())
    }
}

/// The outcome of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedUrl {
    /// The alias actually stored.
    pub alias: Alias,
    pub id: RecordId,
}

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Stores a URL under the requested alias, or under a generated one.
    async fn save(&self, params: SaveParams) -> Result<SavedUrl>;

    /// Returns the URL stored under `alias`.
    async fn resolve(&self, alias: &str) -> Result<String>;

    /// Removes the record stored under `alias`.
    async fn remove(&self, alias: &str) -> Result<()>;
}
