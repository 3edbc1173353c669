//! iterdns domain layer
pub mod config;
pub mod dns_query;
pub mod domain_name;
pub mod errors;
pub mod record_type;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, ResolverConfig};
pub use dns_query::DnsQuery;
pub use domain_name::DomainName;
pub use errors::DomainError;
pub use record_type::RecordType;
