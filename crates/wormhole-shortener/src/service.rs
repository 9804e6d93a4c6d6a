use crate::remove::RemoveUrl;
use crate::resolve::ResolveUrl;
use crate::save::{RetryPolicy, SaveUrl};
use async_trait::async_trait;
use std::sync::Arc;
use wormhole_core::{Repository, SaveParams, SavedUrl, Shortener, ShortenerError};
use wormhole_generator::Generator;

/// A concrete implementation of the `Shortener` trait.
///
/// This service shares one `Repository` between the three operations:
/// - save: URL validation, alias generation or acceptance, bounded retry
/// - resolve: alias lookup
/// - remove: alias deletion
#[derive(Debug)]
pub struct ShortenerService<R, G> {
    save: SaveUrl<Arc<R>, G>,
    resolve: ResolveUrl<Arc<R>>,
    remove: RemoveUrl<Arc<R>>,
}

impl<R: Repository, G: Generator> ShortenerService<R, G> {
    /// Creates a new `ShortenerService` with the default retry policy.
    pub fn new(repository: R, generator: G) -> Self {
        Self::with_policy(repository, generator, RetryPolicy::default())
    }

    pub fn with_policy(repository: R, generator: G, policy: RetryPolicy) -> Self {
        Self::from_shared(Arc::new(repository), generator, policy)
    }

    /// Builds the service over a repository the caller keeps a handle to.
    pub fn from_shared(repository: Arc<R>, generator: G, policy: RetryPolicy) -> Self {
        Self {
            save: SaveUrl::new(Arc::clone(&repository), generator, policy),
            resolve: ResolveUrl::new(Arc::clone(&repository)),
            remove: RemoveUrl::new(repository),
        }
    }
}

#[async_trait]
impl<R: Repository, G: Generator> Shortener for ShortenerService<R, G> {
    async fn save(&self, params: SaveParams) -> Result<SavedUrl, ShortenerError> {
        self.save.execute(params).await
    }

    async fn resolve(&self, alias: &str) -> Result<String, ShortenerError> {
        self.resolve.execute(alias).await
    }

    async fn remove(&self, alias: &str) -> Result<(), ShortenerError> {
        self.remove.execute(alias).await
    }
}
