use crate::dns::forwarding::MessageBuilder;
use crate::dns::transport::{udp::validate_response_id, DnsTransport, UdpTransport};
use async_trait::async_trait;
use hickory_proto::op::{Message, MessageType};
use iterdns_application::ports::DnsExchange;
use iterdns_domain::{DnsQuery, DomainError, ResolverConfig};
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;
use tracing::{debug, warn};

/// [`DnsExchange`] over plain UDP: one datagram out, one datagram back.
#[derive(Debug, Clone)]
pub struct UdpDnsExchange {
    port: u16,
    timeout: Duration,
    recursion_desired: bool,
}

impl UdpDnsExchange {
    pub fn new(port: u16, timeout: Duration) -> Self {
        Self {
            port,
            timeout,
            recursion_desired: false,
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(config.port, Duration::from_secs(config.query_timeout))
            .with_recursion_desired(config.recursion_desired)
    }

    pub fn with_recursion_desired(mut self, recursion_desired: bool) -> Self {
        self.recursion_desired = recursion_desired;
        self
    }
}

#[async_trait]
impl DnsExchange for UdpDnsExchange {
    async fn exchange(
        &self,
        query: &DnsQuery,
        server: Ipv4Addr,
    ) -> Result<Option<Message>, DomainError> {
        let server_addr = SocketAddr::from((server, self.port));
        let (id, query_bytes) = MessageBuilder::build_query_with_id(query, self.recursion_desired)?;

        debug!(
            "dig -r @{} {} {}",
            server, query.domain, query.record_type
        );

        let transport = UdpTransport::new(server, self.port);
        let response = transport.send(&query_bytes, self.timeout).await?;

        if response.bytes.is_empty() {
            debug!(server = %server_addr, "Empty UDP response");
            return Ok(None);
        }

        validate_response_id(&query_bytes, &response.bytes, server_addr)?;

        let message = Message::from_vec(&response.bytes).map_err(|e| {
            DomainError::TransportFailure {
                server: server_addr.to_string(),
                reason: format!("Failed to parse DNS response: {}", e),
            }
        })?;

        if message.message_type() != MessageType::Response {
            return Err(DomainError::TransportFailure {
                server: server_addr.to_string(),
                reason: format!("Reply {:#06x} is not a response", id),
            });
        }

        if message.truncated() {
            warn!(server = %server_addr, "Truncated response, using partial records");
        }

        debug!(
            server = %server_addr,
            rcode = ?message.response_code(),
            answers = message.answers().len(),
            authority = message.name_servers().len(),
            additional = message.additionals().len(),
            "DNS response parsed"
        );

        Ok(Some(message))
    }
}
