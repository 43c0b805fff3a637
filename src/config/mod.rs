pub mod models;

pub use models::Credentials;

use crate::error::{Error, Result};
use std::{fs::File, io::Read, path::Path};
use validator::Validate;

pub const DEFAULT_CREDENTIALS_FILE: &str = "cloudflare_credentials.json";

/// Reads the credential file once. JSON and YAML are both accepted since the
/// YAML parser takes JSON documents as-is.
pub fn load(path: &Path) -> Result<Credentials> {
    let mut file = File::open(path).map_err(|e| {
        Error::Config(format!(
            "failed to open credentials file {}: {}",
            path.display(),
            e
        ))
    })?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        Error::Config(format!(
            "failed to read credentials file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse(&contents)
}

pub fn parse(contents: &str) -> Result<Credentials> {
    let credentials: Credentials = serde_yaml::from_str(contents)
        .map_err(|e| Error::Config(format!("failed to parse credentials: {}", e)))?;

    credentials
        .validate()
        .map_err(|e| Error::Config(e.to_string()))?;

    Ok(credentials)
}
