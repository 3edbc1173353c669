//! iterdns infrastructure: UDP transport, wire-format adapters and
//! log-backed observation for the resolver.
pub mod dns;
