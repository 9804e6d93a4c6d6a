use tracing::debug;
use wormhole_core::error::Result;
use wormhole_core::{Alias, DeleteRepository};

/// The delete operation. Depends only on the delete side of the store.
#[derive(Debug)]
pub struct RemoveUrl<D> {
    store: D,
}

impl<D: DeleteRepository> RemoveUrl<D> {
    pub fn new(store: D) -> Self {
        Self { store }
    }

    /// Removes the record stored under `alias`.
    ///
    /// Removing an alias that is already gone reports `AliasNotFound`.
    pub async fn execute(&self, alias: &str) -> Result<()> {
        let alias = Alias::lookup(alias)?;
        self.store.delete(&alias).await?;
        debug!(alias = %alias, "removed alias");
        Ok(())
    }
}
