use std::{env, fmt, path::Path};

use tracing::debug;

use crate::error::{Error, Result};

pub const API_KEY: &str = "API_KEY";
pub const SHEET_ID: &str = "SHEET_ID";
pub const SHEET_NAME: &str = "SHEET_NAME";

/// Spreadsheet access settings, read once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub sheet_id: String,
    pub sheet_name: String,
}

impl Config {
    /// Loads `env_file` into the environment (if it exists) and reads the
    /// settings from there.
    pub fn load(env_file: &Path) -> Result<Self> {
        match dotenvy::from_path(env_file) {
            Ok(()) => debug!("loaded {}", env_file.display()),
            Err(e) if e.not_found() => debug!("no {}, using process environment", env_file.display()),
            Err(e) => {
                return Err(Error::EnvFile {
                    path: env_file.to_path_buf(),
                    source: e,
                })
            }
        }
        Self::from_env()
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self> {
        let get = |key| match lookup(key) {
            Some(x) if !x.trim().is_empty() => Ok(x),
            _ => Err(Error::Config(key)),
        };

        Ok(Self {
            api_key: get(API_KEY)?,
            sheet_id: get(SHEET_ID)?,
            sheet_name: get(SHEET_NAME)?,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("sheet_id", &self.sheet_id)
            .field("sheet_name", &self.sheet_name)
            .finish()
    }
}
