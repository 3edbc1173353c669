//! DNS Message Builder
//!
//! Constructs DNS query messages in wire format using `hickory-proto`.
//! Queries sent while walking the delegation tree leave the RD flag clear
//! unless the operator asks for it (useful when pointing the resolver at a
//! recursive server instead of a root).

use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use iterdns_domain::{DnsQuery, DomainError};
use std::str::FromStr;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a query message and return its ID together with the wire bytes
    ///
    /// The ID is random and is used to match the reply to this query.
    pub fn build_query_with_id(
        query: &DnsQuery,
        recursion_desired: bool,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let id = fastrand::u16(..);
        let message = Self::build_message(id, query, recursion_desired)?;
        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    fn build_message(
        id: u16,
        query: &DnsQuery,
        recursion_desired: bool,
    ) -> Result<Message, DomainError> {
        let name = Name::from_str(query.domain.as_str()).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", query.domain, e))
        })?;

        let mut question = Query::new();
        question.set_name(name);
        question.set_query_type(RecordTypeMapper::to_hickory(&query.record_type));
        question.set_query_class(DNSClass::IN);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(recursion_desired);
        message.add_query(question);

        Ok(message)
    }

    /// Serialize a Message to wire format bytes
    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDomainName(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
