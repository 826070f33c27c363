//! # lf-auth
//!
//! Session persistence for the Labfolder CLI.
//!
//! A login produces a bearer token. It is kept in the OS keychain
//! (`keyring`), with a `LABFOLDER_AUTH__TOKEN` override for CI and a
//! `~/.labfolder/credentials` file fallback for hosts without a keychain.

pub mod error;
pub mod session;
pub mod token_store;

pub use error::AuthError;
pub use session::StoredSession;
pub use token_store::{TOKEN_ENV, TOKEN_ENV_NOTE, TokenSource, TokenStore};

/// Resolve the best available session for `service`, or fail with
/// [`AuthError::NotAuthenticated`].
///
/// # Errors
///
/// Returns `AuthError::NotAuthenticated` when no tier holds a token.
pub fn resolve_session(store: &TokenStore) -> Result<StoredSession, AuthError> {
    store.load().ok_or(AuthError::NotAuthenticated)
}
