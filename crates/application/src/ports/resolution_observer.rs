use iterdns_domain::{DomainError, DomainName};
use std::net::Ipv4Addr;

/// Receives progress events from the resolver.
///
/// Every method defaults to doing nothing so implementations only pick the
/// events they care about.
pub trait ResolutionObserver: Send + Sync {
    fn on_query(&self, _target: &DomainName, _nameserver: Ipv4Addr, _iteration: u32, _depth: u32) {
    }

    fn on_answer(&self, _target: &DomainName, _address: Ipv4Addr) {}

    fn on_glue(&self, _target: &DomainName, _nameserver: Ipv4Addr) {}

    fn on_referral(&self, _target: &DomainName, _nameserver: &DomainName) {}

    fn on_failure(&self, _target: &DomainName, _error: &DomainError) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ResolutionObserver for NoopObserver {}
