// Runtime configuration read from the environment.
//
// Variables
// - BIND_ADDR: listen address, default 0.0.0.0:8080.
// - BOOKINGS_FEED_URL: backend endpoint returning the full bookings list. When set, the HTTP feed is used.
// - BOOKINGS_SEED_PATH: JSON file seeding the in memory feed when no URL is configured.
// - DEFAULT_PAGE_SIZE: page size when a request gives none. A positive number or ALL, default 10.

use crate::modules::bookings::core::view_params::{PageSize, ParamsError};
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid BIND_ADDR {value}: {reason}")]
    BindAddr { value: String, reason: String },

    #[error("invalid DEFAULT_PAGE_SIZE: {0}")]
    PageSize(#[from] ParamsError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    Http { url: String },
    InMemory { seed_path: Option<PathBuf> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub feed: FeedSource,
    pub default_page_size: PageSize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let raw_addr = non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::BindAddr {
                value: raw_addr.clone(),
                reason: e.to_string(),
            })?;

        let feed = match non_empty("BOOKINGS_FEED_URL") {
            Some(url) => FeedSource::Http { url },
            None => FeedSource::InMemory {
                seed_path: non_empty("BOOKINGS_SEED_PATH").map(PathBuf::from),
            },
        };

        let default_page_size = non_empty("DEFAULT_PAGE_SIZE")
            .map(|value| value.parse::<PageSize>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            bind_addr,
            feed,
            default_page_size,
        })
    }
}
