use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not logged in; run `labfolder auth login`")]
    NotAuthenticated,

    #[error("keyring error: {0}")]
    KeyringError(String),

    #[error("token store error: {0}")]
    TokenStoreError(String),

    #[error("stored session is unreadable: {0}")]
    Serialization(#[from] serde_json::Error),
}
