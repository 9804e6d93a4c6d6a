use tracing::trace;
use wormhole_core::error::Result;
use wormhole_core::{Alias, ReadRepository};

/// The lookup operation. Depends only on the read side of the store.
#[derive(Debug)]
pub struct ResolveUrl<R> {
    store: R,
}

impl<R: ReadRepository> ResolveUrl<R> {
    pub fn new(store: R) -> Self {
        Self { store }
    }

    /// Returns the URL stored under `alias`, exactly as it was saved.
    ///
    /// Whether that URL is still well-formed is for the caller to judge.
    pub async fn execute(&self, alias: &str) -> Result<String> {
        let alias = Alias::lookup(alias)?;
        trace!(alias = %alias, "resolving alias");

        let url = self.store.get(&alias).await?;
        trace!(alias = %alias, url = %url, "resolved alias");
        Ok(url)
    }
}
