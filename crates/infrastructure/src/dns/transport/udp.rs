//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Standard DNS transport. Messages are sent as-is (no framing).
//! Truncated replies are handed back unchanged; there is no TCP fallback
//! and no retry.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use iterdns_domain::DomainError;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP transport to a single IPv4 server
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server: Ipv4Addr, port: u16) -> Self {
        Self {
            server_addr: SocketAddr::from((server, port)),
        }
    }

    fn failure(&self, reason: impl Into<String>) -> DomainError {
        DomainError::TransportFailure {
            server: self.server_addr.to_string(),
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        // Ephemeral port (0 = OS assigns)
        let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))
            .await
            .map_err(|e| self.failure(format!("Failed to bind UDP socket: {}", e)))?;

        let bytes_sent =
            tokio::time::timeout(timeout, socket.send_to(message_bytes, self.server_addr))
                .await
                .map_err(|_| self.failure("Timeout sending UDP query"))?
                .map_err(|e| self.failure(format!("Failed to send UDP query: {}", e)))?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        let (bytes_received, from_addr) =
            tokio::time::timeout(timeout, socket.recv_from(&mut recv_buf))
                .await
                .map_err(|_| self.failure("Timeout waiting for UDP response"))?
                .map_err(|e| self.failure(format!("Failed to receive UDP response: {}", e)))?;

        if from_addr.ip() != self.server_addr.ip() {
            warn!(
                expected = %self.server_addr,
                received_from = %from_addr,
                "UDP response from unexpected source"
            );
        }

        recv_buf.truncate(bytes_received);

        debug!(
            server = %self.server_addr,
            bytes_received = bytes_received,
            "UDP response received"
        );

        Ok(TransportResponse { bytes: recv_buf })
    }
}

/// Reject replies whose ID does not match the query's.
pub fn validate_response_id(
    query: &[u8],
    response: &[u8],
    server: SocketAddr,
) -> Result<(), DomainError> {
    if query.len() < 2 || response.len() < 2 {
        return Err(DomainError::TransportFailure {
            server: server.to_string(),
            reason: "Message too short to carry a DNS ID".to_string(),
        });
    }

    let query_id = u16::from_be_bytes([query[0], query[1]]);
    let response_id = u16::from_be_bytes([response[0], response[1]]);

    if query_id != response_id {
        return Err(DomainError::TransportFailure {
            server: server.to_string(),
            reason: format!(
                "DNS ID mismatch: sent {:#06x}, received {:#06x}",
                query_id, response_id
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
#[path = "udp_test.rs"]
mod tests;
