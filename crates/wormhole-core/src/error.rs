use thiserror::Error;

/// Errors related to the core functionality of the URL shortener service.
pub type Result<T> = std::result::Result<T, ShortenerError>;

/// Coarse classification shared by every error the shortener can report.
///
/// Transports map a kind to their own status codes; the core never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or missing input, detected before any store access.
    InvalidInput,
    /// The alias is already taken, or no free alias could be allocated.
    AliasExists,
    /// No active record exists for the alias.
    AliasNotFound,
    /// Reserved for referential constraints on records. Nothing produces it yet.
    AliasHasReferences,
    /// The store could not complete the operation.
    StorageFailure,
    /// The caller cancelled the operation before it completed.
    Cancelled,
}

#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("alias already exists: {0}")]
    Conflict(String),
    #[error("alias not found: {0}")]
    NotFound(String),
    #[error("alias is still referenced: {0}")]
    HasReferences(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

impl StorageError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StorageError::Conflict(_) => ErrorKind::AliasExists,
            StorageError::NotFound(_) => ErrorKind::AliasNotFound,
            StorageError::HasReferences(_) => ErrorKind::AliasHasReferences,
            StorageError::Unavailable(_)
            | StorageError::Timeout(_)
            | StorageError::Query(_)
            | StorageError::InvalidData(_)
            | StorageError::Operation(_) => ErrorKind::StorageFailure,
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum ShortenerError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("invalid alias: {0}")]
    InvalidAlias(String),
    #[error("alias already exists: {0}")]
    AliasExists(String),
    #[error("no free alias after {attempts} attempts")]
    AliasUnavailable { attempts: u32 },
    #[error("alias not found: {0}")]
    AliasNotFound(String),
    #[error("alias is still referenced: {0}")]
    AliasHasReferences(String),
    #[error("storage error: {0}")]
    Storage(#[source] StorageError),
    #[error("operation cancelled")]
    Cancelled,
}

impl ShortenerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShortenerError::InvalidUrl(_) | ShortenerError::InvalidAlias(_) => {
                ErrorKind::InvalidInput
            }
            ShortenerError::AliasExists(_) | ShortenerError::AliasUnavailable { .. } => {
                ErrorKind::AliasExists
            }
            ShortenerError::AliasNotFound(_) => ErrorKind::AliasNotFound,
            ShortenerError::AliasHasReferences(_) => ErrorKind::AliasHasReferences,
            ShortenerError::Storage(_) => ErrorKind::StorageFailure,
            ShortenerError::Cancelled => ErrorKind::Cancelled,
        }
    }
}

impl From<StorageError> for ShortenerError {
    fn from(value: StorageError) -> Self {
        match value {
            StorageError::Conflict(alias) => Self::AliasExists(alias),
            StorageError::NotFound(alias) => Self::AliasNotFound(alias),
            StorageError::HasReferences(alias) => Self::AliasHasReferences(alias),
            other => Self::Storage(other),
        }
    }
}
