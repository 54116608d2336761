//! Process configuration read from the environment.

use crate::logic::GenerateOptions;
use std::env;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// `BRACKET_STRICT_CAPACITY`: reject tournaments with more confirmed teams than capacity.
    pub strict_capacity: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            strict_capacity: false,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl Config {
    /// Read `HOST`, `PORT` and `BRACKET_STRICT_CAPACITY`; missing or unparsable values fall back
    /// to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST").unwrap_or_else(default_host);
        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or_else(default_port);
        let strict_capacity = lookup("BRACKET_STRICT_CAPACITY")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);
        Self {
            host,
            port,
            strict_capacity,
        }
    }

    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            strict_capacity: self.strict_capacity,
        }
    }
}
