//! Persisted shop credentials.
//!
//! The first run asks the operator for a shop name and access token and
//! writes them to a JSON file; later runs read that file without
//! prompting. The file is never updated or deleted by the publisher.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::AccessToken;
use crate::prompt::{ask_credentials, PromptError, Prompter};

/// File name of the credentials file.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding the credentials file location.
pub const CONFIG_PATH_ENV: &str = "SHOPIFY_PUBLISHER_CONFIG";

/// Shop name and access token, as stored on disk.
///
/// Serialized as `{ "shopName": ..., "accessToken": ... }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    /// The shop name, e.g. `acme` for `acme.myshopify.com`.
    pub shop_name: String,
    /// The Admin API access token.
    pub access_token: AccessToken,
}

/// Errors reading or creating the credentials file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// The credentials file.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The file is not valid credentials JSON.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// The credentials file.
        path: PathBuf,
        /// The underlying parse error.
        source: serde_json::Error,
    },

    /// The new credentials could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// The credentials file.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The credentials could not be serialized.
    #[error("failed to serialize credentials: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Collecting new credentials failed or was cancelled.
    #[error("failed to collect credentials: {0}")]
    Prompt(#[from] PromptError),
}

/// Read-or-create access to the credentials file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Creates a store backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns `config.json` in the directory holding the executable.
    ///
    /// Falls back to the current directory when the executable location is
    /// unavailable.
    #[must_use]
    pub fn default_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_default()
            .join(CONFIG_FILE_NAME)
    }

    /// Returns the path of the credentials file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the stored credentials, prompting for and saving them first
    /// if the file does not exist yet.
    ///
    /// The write completes before this returns. It goes to a sibling `.tmp`
    /// file first and is renamed into place, so an interrupted run never
    /// leaves a partial credentials file behind.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Read`] / [`StoreError::Parse`] for an unreadable or
    ///   malformed file
    /// - [`StoreError::Prompt`] if the operator cancels
    /// - [`StoreError::Write`] if the new file cannot be written
    pub fn load<P>(&self, prompter: &mut P) -> Result<Credentials, StoreError>
    where
        P: Prompter + ?Sized,
    {
        if self.path.exists() {
            return self.read();
        }

        tracing::info!(path = %self.path.display(), "no credentials file, asking operator");
        let credentials = ask_credentials(prompter)?;
        self.write(&credentials)?;
        Ok(credentials)
    }

    fn read(&self) -> Result<Credentials, StoreError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;

        let credentials =
            serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(path = %self.path.display(), "loaded credentials");
        Ok(credentials)
    }

    fn write(&self, credentials: &Credentials) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(credentials).map_err(StoreError::Serialize)?;

        let tmp = self.path.with_extension("tmp");

        fs::write(&tmp, json).map_err(|source| StoreError::Write {
            path: tmp.clone(),
            source,
        })?;

        if let Err(source) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(StoreError::Write {
                path: self.path.clone(),
                source,
            });
        }

        tracing::info!(path = %self.path.display(), "saved credentials");
        Ok(())
    }
}
