use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

use super::errors::ConfigError;

/// a.root-servers.net
pub const DEFAULT_ROOT_NAMESERVER: &str = "198.41.0.4";
pub const DEFAULT_MAX_ITERATIONS: u32 = 5;
pub const DEFAULT_MAX_DEPTH: u32 = 8;
pub const DEFAULT_DNS_PORT: u16 = 53;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// First nameserver queried for every resolution (IPv4 only)
    #[serde(default = "default_root_nameserver")]
    pub root_nameserver: String,

    /// Queries allowed per resolution call; nested lookups get their own budget
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// How many nameserver-name lookups may be nested inside each other
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,

    /// Per-query timeout in seconds
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub recursion_desired: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_nameserver: default_root_nameserver(),
            max_iterations: default_max_iterations(),
            max_depth: default_max_depth(),
            query_timeout: default_query_timeout(),
            port: default_port(),
            recursion_desired: false,
        }
    }
}

impl ResolverConfig {
    /// Parsed root nameserver. An empty value means the built-in root.
    pub fn root_address(&self) -> Result<Ipv4Addr, ConfigError> {
        let raw = self.root_nameserver.trim();
        let raw = if raw.is_empty() {
            DEFAULT_ROOT_NAMESERVER
        } else {
            raw
        };

        raw.parse::<Ipv4Addr>().map_err(|_| {
            ConfigError::Validation(format!(
                "root_nameserver '{}' is not an IPv4 address",
                self.root_nameserver
            ))
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.root_address()?;

        if self.max_iterations == 0 {
            return Err(ConfigError::Validation(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if self.query_timeout == 0 {
            return Err(ConfigError::Validation(
                "query_timeout cannot be 0".to_string(),
            ));
        }
        if self.port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        Ok(())
    }
}

fn default_root_nameserver() -> String {
    DEFAULT_ROOT_NAMESERVER.to_string()
}

fn default_max_iterations() -> u32 {
    DEFAULT_MAX_ITERATIONS
}

fn default_max_depth() -> u32 {
    DEFAULT_MAX_DEPTH
}

fn default_query_timeout() -> u64 {
    3
}

fn default_port() -> u16 {
    DEFAULT_DNS_PORT
}
