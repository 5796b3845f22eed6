//! Runtime configuration resolved from the environment.

use std::path::PathBuf;

/// Path of the tracking CSV on platforms with a file system.
pub const DATA_PATH_ENV: &str = "METABO_DATA_PATH";
/// Shared dashboard password.
pub const PASSWORD_ENV: &str = "METABO_APP_PASSWORD";

pub const DEFAULT_DATA_PATH: &str = "data/metabo_data.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub password: Option<String>,
}

impl AppConfig {
    /// Read the process environment, falling back to the password baked in at build time
    /// (the only option for WASM builds).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok(), option_env!("METABO_APP_PASSWORD"))
    }

    /// Resolution rules with an injectable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F, baked_password: Option<&str>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        let data_path = non_empty(lookup(DATA_PATH_ENV))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let password = non_empty(lookup(PASSWORD_ENV))
            .or_else(|| non_empty(baked_password.map(str::to_string)));

        Self {
            data_path,
            password,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            password: None,
        }
    }
}
