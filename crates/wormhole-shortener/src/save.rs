use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use typed_builder::TypedBuilder;
use url::Url;
use wormhole_core::error::Result;
use wormhole_core::{Alias, SaveParams, SavedUrl, ShortenerError, StorageError, WriteRepository};
use wormhole_generator::Generator;

/// Total insert attempts for a generated alias: the first try plus one retry.
///
/// Two attempts is a thin margin under heavy allocation traffic; raise it
/// through [`RetryPolicy::builder`] when collisions start to show up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 2;

/// Bounds how often a generated alias is replaced after a collision.
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct RetryPolicy {
    /// Values below 1 are raised to 1.
    #[builder(default = DEFAULT_MAX_ATTEMPTS, setter(transform = |attempts: u32| attempts.max(1)))]
    max_attempts: u32,
}

impl RetryPolicy {
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Checks that `raw` is an absolute URL with a host.
///
/// The parsed form is only used for the check; the original string is what
/// gets stored.
pub fn validate_url(raw: &str) -> Result<Url> {
    if raw.is_empty() {
        return Err(ShortenerError::InvalidUrl("url is empty".to_string()));
    }

    let parsed =
        Url::parse(raw).map_err(|e| ShortenerError::InvalidUrl(format!("{raw}: {e}")))?;

    if !parsed.has_host() {
        return Err(ShortenerError::InvalidUrl(format!(
            "url must be absolute and have a host: {raw}"
        )));
    }

    Ok(parsed)
}

/// The save operation: validates input, picks an alias and inserts it.
///
/// Depends only on the write side of the store.
#[derive(Debug)]
pub struct SaveUrl<W, G> {
    store: W,
    generator: G,
    policy: RetryPolicy,
}

impl<W: WriteRepository, G: Generator> SaveUrl<W, G> {
    pub fn new(store: W, generator: G, policy: RetryPolicy) -> Self {
        Self {
            store,
            generator,
            policy,
        }
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    pub async fn execute(&self, params: SaveParams) -> Result<SavedUrl> {
        validate_url(&params.url)?;

        match params.requested_alias() {
            Some(requested) => {
                let alias = Alias::new(requested)?;
                self.insert_requested(alias, &params.url, &params.cancel)
                    .await
            }
            None => self.insert_generated(&params.url, &params.cancel).await,
        }
    }

    /// A caller-chosen alias is attempted exactly once; a conflict is final.
    async fn insert_requested(
        &self,
        alias: Alias,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<SavedUrl> {
        if cancel.is_cancelled() {
            return Err(ShortenerError::Cancelled);
        }

        let id = self.store.insert(&alias, url).await?;
        debug!(alias = %alias, id = %id, "saved url under requested alias");
        Ok(SavedUrl { alias, id })
    }

    async fn insert_generated(&self, url: &str, cancel: &CancellationToken) -> Result<SavedUrl> {
        let max_attempts = self.policy.max_attempts;

        for attempt in 1..=max_attempts {
            if cancel.is_cancelled() {
                debug!(attempt, "save cancelled before insert");
                return Err(ShortenerError::Cancelled);
            }

            let alias = self.generator.generate();
            match self.store.insert(&alias, url).await {
                Ok(id) => {
                    debug!(alias = %alias, id = %id, attempt, "saved url under generated alias");
                    return Ok(SavedUrl { alias, id });
                }
                Err(StorageError::Conflict(_)) => {
                    warn!(alias = %alias, attempt, max_attempts, "alias collision");
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(ShortenerError::AliasUnavailable {
            attempts: max_attempts,
        })
    }
}
