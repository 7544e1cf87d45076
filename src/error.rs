use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigToolError {
    #[error("List item is not a number: {0}")]
    InvalidListItem(String),

    #[error("No token mapped for display label: {0}")]
    UnmappedLabel(String),

    #[error("An account named {0} already exists")]
    DuplicateIdentity(String),

    #[error("No account named {0}")]
    IdentityNotFound(String),

    #[error("Failed to read config: {0}")]
    StorageUnavailable(String),

    #[error("Failed to write config: {0}")]
    StorageWriteFailed(String),

    #[error("Failed to launch helper: {0}")]
    Launch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigToolError>;
