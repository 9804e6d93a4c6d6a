pub mod memory;
pub mod sqlite;

pub use memory::InMemoryRepository;
pub use sqlite::SqliteRepository;
pub use wormhole_core::error::StorageError;
pub use wormhole_core::repository::{
    DeleteRepository, ReadRepository, Repository, Result, WriteRepository,
};
