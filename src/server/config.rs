//! Application settings read from the environment.

use std::path::PathBuf;

use chrono_tz::Tz;

use crate::server::{
    error::config::ConfigError,
    util::locale::{Locale, DEFAULT_LANGUAGE_CODE, DEFAULT_TIME_ZONE},
};

/// Languages the interface is offered in, primary first.
pub static LANGUAGES: &[(&str, &str)] = &[("ko", "Korean"), ("en", "English")];

pub static DEFAULT_SECRET_KEY_FILE: &str = "LOCAL_DEV_ENV/SECRET_KEY.txt";
pub static DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8000";

/// Minimum secret key length accepted for signing session cookies.
pub const MIN_SECRET_KEY_BYTES: usize = 64;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub secret_key: Vec<u8>,
    pub bind_address: String,
    pub language_code: String,
    pub time_zone: Tz,
    pub static_root: PathBuf,
    pub media_root: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// `SECRET_KEY` takes precedence; without it the key is read from `SECRET_KEY_FILE`
    /// (default `LOCAL_DEV_ENV/SECRET_KEY.txt`) with newlines removed.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
        };

        let database_url = required("DATABASE_URL")?;

        let secret_key = match lookup("SECRET_KEY").filter(|value| !value.is_empty()) {
            Some(key) => key,
            None => {
                let path = lookup("SECRET_KEY_FILE")
                    .unwrap_or_else(|| DEFAULT_SECRET_KEY_FILE.to_string());

                std::fs::read_to_string(&path)
                    .map(|contents| contents.replace('\n', ""))
                    .map_err(|_| ConfigError::MissingEnvVar("SECRET_KEY".to_string()))?
            }
        };

        if secret_key.len() < MIN_SECRET_KEY_BYTES {
            return Err(ConfigError::InvalidEnvValue {
                var: "SECRET_KEY".to_string(),
                reason: format!("must be at least {} bytes long", MIN_SECRET_KEY_BYTES),
            });
        }

        let language_code =
            lookup("LANGUAGE_CODE").unwrap_or_else(|| DEFAULT_LANGUAGE_CODE.to_string());
        let language = language_code.split('-').next().unwrap_or_default();
        if !LANGUAGES.iter().any(|(code, _)| *code == language) {
            return Err(ConfigError::InvalidEnvValue {
                var: "LANGUAGE_CODE".to_string(),
                reason: format!("unsupported language {:?}", language_code),
            });
        }

        let time_zone = match lookup("TIME_ZONE") {
            Some(name) => name
                .parse::<Tz>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "TIME_ZONE".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_TIME_ZONE,
        };

        Ok(Self {
            database_url,
            secret_key: secret_key.into_bytes(),
            bind_address: lookup("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            language_code,
            time_zone,
            static_root: PathBuf::from(lookup("STATIC_ROOT").unwrap_or_else(|| "static/".into())),
            media_root: PathBuf::from(lookup("MEDIA_ROOT").unwrap_or_else(|| "media/".into())),
        })
    }

    /// Language and time zone used when rendering pages
    pub fn locale(&self) -> Locale {
        Locale {
            language_code: self.language_code.clone(),
            time_zone: self.time_zone,
        }
    }
}
