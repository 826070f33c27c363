use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;
use crate::session::StoredSession;

const KEYRING_USER: &str = "labfolder-session";
const CREDENTIALS_DIR: &str = ".labfolder";
const CREDENTIALS_FILE_NAME: &str = "credentials";

/// Environment variable holding a bare session token (CI, scripts).
pub const TOKEN_ENV: &str = "LABFOLDER_AUTH__TOKEN";
const SERVER_ENV: &str = "LABFOLDER_SERVER__URL";

/// Shown when a logout cannot remove a token that lives in the environment.
pub const TOKEN_ENV_NOTE: &str =
    "the token comes from LABFOLDER_AUTH__TOKEN; unset it to stay logged out";

/// Where a loaded session came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Keyring,
    Env,
    File,
}

impl TokenSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyring => "keyring",
            Self::Env => "env",
            Self::File => "file",
        }
    }
}

impl std::fmt::Display for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three-tier session storage: OS keychain, then environment, then a
/// `0600` file under `~/.labfolder/`.
#[derive(Debug, Clone)]
pub struct TokenStore {
    service: String,
    credentials_path: Option<PathBuf>,
    use_keyring: bool,
}

impl TokenStore {
    /// Store backed by the keychain entry `service` and the default
    /// credentials file.
    #[must_use]
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            credentials_path: default_credentials_path(),
            use_keyring: true,
        }
    }

    /// Keychain-backed store with its fallback file at `path`.
    #[must_use]
    pub fn with_credentials_path(service: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            service: service.into(),
            credentials_path: Some(path.into()),
            use_keyring: true,
        }
    }

    /// Store that never touches the keychain. Used by tests and headless hosts.
    #[must_use]
    pub fn file_only(path: impl Into<PathBuf>) -> Self {
        Self {
            service: String::new(),
            credentials_path: Some(path.into()),
            use_keyring: false,
        }
    }

    #[must_use]
    pub fn credentials_path(&self) -> Option<&Path> {
        self.credentials_path.as_deref()
    }

    /// Persist a session in the keychain, falling back to the credentials file.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` if both keyring and file storage fail.
    pub fn store(&self, session: &StoredSession) -> Result<(), AuthError> {
        let payload = serde_json::to_string(session)?;
        if !self.use_keyring {
            return self.store_file(&payload);
        }
        match self.store_keyring(&payload) {
            Ok(()) => Ok(()),
            Err(error) => {
                tracing::warn!(%error, "keyring store failed; falling back to file");
                self.store_file(&payload)
            }
        }
    }

    /// Write to the keychain and read the entry back through a fresh handle.
    /// Backends that accept writes without persisting them fail the read-back.
    fn store_keyring(&self, payload: &str) -> Result<(), AuthError> {
        let keyring_error = |e: keyring::Error| AuthError::KeyringError(e.to_string());
        keyring::Entry::new(&self.service, KEYRING_USER)
            .and_then(|entry| entry.set_password(payload))
            .map_err(keyring_error)?;
        let stored = keyring::Entry::new(&self.service, KEYRING_USER)
            .and_then(|entry| entry.get_password())
            .map_err(keyring_error)?;
        if stored != payload {
            return Err(AuthError::KeyringError(
                "stored session could not be read back".into(),
            ));
        }
        Ok(())
    }

    /// Load a session. Priority: keyring → `LABFOLDER_AUTH__TOKEN` → file.
    #[must_use]
    pub fn load(&self) -> Option<StoredSession> {
        self.load_with_source().map(|(session, _)| session)
    }

    /// Like [`load`](Self::load) but also reports which tier answered.
    #[must_use]
    pub fn load_with_source(&self) -> Option<(StoredSession, TokenSource)> {
        if let Some(session) = self.load_keyring() {
            return Some((session, TokenSource::Keyring));
        }
        if let Ok(token) = std::env::var(TOKEN_ENV)
            && !token.trim().is_empty()
        {
            let server = std::env::var(SERVER_ENV).unwrap_or_default();
            return Some((StoredSession::new(server, token.trim()), TokenSource::Env));
        }
        self.load_file().map(|session| (session, TokenSource::File))
    }

    /// Which tier the current session came from (for status display).
    #[must_use]
    pub fn detect_token_source(&self) -> Option<TokenSource> {
        self.load_with_source().map(|(_, source)| source)
    }

    /// Remove the session from keyring and file. The environment is left alone.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
    pub fn delete(&self) -> Result<(), AuthError> {
        if self.use_keyring
            && let Ok(entry) = keyring::Entry::new(&self.service, KEYRING_USER)
            && let Err(error) = entry.delete_credential()
            && !matches!(error, keyring::Error::NoEntry)
        {
            tracing::debug!(%error, "keyring delete failed");
        }

        if let Some(path) = &self.credentials_path
            && path.exists()
        {
            fs::remove_file(path).map_err(|e| {
                AuthError::TokenStoreError(format!("failed to delete {}: {e}", path.display()))
            })?;
        }
        Ok(())
    }

    fn load_keyring(&self) -> Option<StoredSession> {
        if !self.use_keyring {
            return None;
        }
        let entry = keyring::Entry::new(&self.service, KEYRING_USER).ok()?;
        let raw = entry.get_password().ok()?;
        parse_session(&raw, "keyring")
    }

    fn store_file(&self, payload: &str) -> Result<(), AuthError> {
        let path = self.credentials_path.as_ref().ok_or_else(|| {
            AuthError::TokenStoreError("home directory not found; cannot store credentials".into())
        })?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AuthError::TokenStoreError(format!("mkdir {}: {e}", parent.display()))
            })?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }
        fs::write(path, payload)
            .map_err(|e| AuthError::TokenStoreError(format!("write {}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                AuthError::TokenStoreError(format!("chmod {}: {e}", path.display()))
            })?;
        }
        Ok(())
    }

    fn load_file(&self) -> Option<StoredSession> {
        let path = self.credentials_path.as_ref()?;
        let raw = fs::read_to_string(path).ok()?;
        parse_session(&raw, "file")
    }
}

fn default_credentials_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CREDENTIALS_DIR).join(CREDENTIALS_FILE_NAME))
}

fn parse_session(raw: &str, tier: &str) -> Option<StoredSession> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match serde_json::from_str::<StoredSession>(raw) {
        Ok(session) if !session.token.is_empty() => Some(session),
        Ok(_) => None,
        Err(error) => {
            tracing::warn!(%error, tier, "ignoring unreadable stored session");
            None
        }
    }
}
