use std::net::SocketAddr;

use anyhow::{Context, Result};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BUILD: &str = "local";
pub const DEFAULT_ENVIRONMENT: &str = "development";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub port: u16,
    pub build_number: String,
    pub environment: String,
}

impl ServiceConfig {
    /// Resolve the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated the same as missing ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid u16, got {:?}", raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            build_number: var("BUILD_NUMBER").unwrap_or_else(|| DEFAULT_BUILD.to_string()),
            environment: var("NODE_ENV").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            build_number: DEFAULT_BUILD.to_string(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}
