use async_trait::async_trait;
use hickory_proto::op::Message;
use iterdns_domain::{DnsQuery, DomainError};
use std::net::Ipv4Addr;

#[async_trait]
pub trait DnsExchange: Send + Sync {
    /// Send one query to `server` and wait for its reply.
    ///
    /// `Ok(None)` is an empty reply: the server answered with nothing that
    /// could be read as a message. Socket errors, timeouts and undecodable
    /// replies are `DomainError::TransportFailure`.
    async fn exchange(
        &self,
        query: &DnsQuery,
        server: Ipv4Addr,
    ) -> Result<Option<Message>, DomainError>;
}
