use crate::models::Credentials;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum CredentialsError {
    #[error("Error opening credentials file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Error parsing credentials in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub fn load_credentials(path: &Path) -> Result<Credentials, CredentialsError> {
    debug!("Reading credentials from {}", path.display());
    let content = fs::read(path).map_err(|source| CredentialsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&content).map_err(|source| CredentialsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
