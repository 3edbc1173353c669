use iterdns_application::ports::ResolutionObserver;
use iterdns_domain::{DomainError, DomainName};
use std::net::Ipv4Addr;
use tracing::{debug, info};

/// Reports resolver progress as log events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ResolutionObserver for TracingObserver {
    fn on_query(&self, target: &DomainName, nameserver: Ipv4Addr, iteration: u32, depth: u32) {
        info!(
            domain = %target,
            nameserver = %nameserver,
            iteration,
            depth,
            "Querying nameserver"
        );
    }

    fn on_answer(&self, target: &DomainName, address: Ipv4Addr) {
        info!(domain = %target, address = %address, "Answer record");
    }

    fn on_glue(&self, target: &DomainName, nameserver: Ipv4Addr) {
        info!(domain = %target, nameserver = %nameserver, "Following glue record");
    }

    fn on_referral(&self, target: &DomainName, nameserver: &DomainName) {
        info!(
            domain = %target,
            nameserver = %nameserver,
            "Referral without glue, resolving nameserver"
        );
    }

    fn on_failure(&self, target: &DomainName, error: &DomainError) {
        debug!(domain = %target, error = %error, "Lookup failed");
    }
}
