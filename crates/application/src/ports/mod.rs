mod dns_exchange;
mod resolution_observer;

pub use dns_exchange::DnsExchange;
pub use resolution_observer::{NoopObserver, ResolutionObserver};

// Re-export for convenience
pub use iterdns_domain::DnsQuery;
