//! Process configuration, read from the environment.
//!
//! | variable                 | default                          |
//! |--------------------------|----------------------------------|
//! | `STOREFRONT_BIND`        | `0.0.0.0:8080`                   |
//! | `STOREFRONT_DATA_DIR`    | `<platform data dir>/storefront` |
//! | `STOREFRONT_SEED`        | `true`                           |
//! | `STOREFRONT_STYLIST_URL` | unset (no style advisor)         |

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{bail, Context};
use reqwest::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Directory for wishlist storage. `None` keeps the wishlist in memory.
    pub data_dir: Option<PathBuf>,
    /// Start with the twelve reference products.
    pub seed_catalog: bool,
    /// Endpoint outfit-suggestion requests are forwarded to.
    pub stylist_url: Option<Url>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            data_dir: storefront_wishlist::default_data_dir(),
            seed_catalog: true,
            stylist_url: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(bind) = lookup("STOREFRONT_BIND") {
            config.bind_addr = bind
                .trim()
                .parse()
                .with_context(|| format!("STOREFRONT_BIND is not a socket address: {bind:?}"))?;
        }

        if let Some(dir) = lookup("STOREFRONT_DATA_DIR") {
            let dir = dir.trim();
            if dir.is_empty() {
                bail!("STOREFRONT_DATA_DIR must not be empty");
            }
            config.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(seed) = lookup("STOREFRONT_SEED") {
            config.seed_catalog = parse_bool(&seed)
                .with_context(|| format!("STOREFRONT_SEED is not a boolean: {seed:?}"))?;
        }

        if let Some(raw) = lookup("STOREFRONT_STYLIST_URL") {
            let raw = raw.trim();
            if !raw.is_empty() {
                let url = Url::parse(raw)
                    .with_context(|| format!("STOREFRONT_STYLIST_URL is not a URL: {raw:?}"))?;
                if !matches!(url.scheme(), "http" | "https") {
                    bail!("STOREFRONT_STYLIST_URL must be http(s), got {:?}", url.scheme());
                }
                config.stylist_url = Some(url);
            }
        }

        Ok(config)
    }
}

fn parse_bool(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected true/false, got {other:?}"),
    }
}
