use super::{DomainName, RecordType};

/// One question sent to one nameserver. Built fresh for every step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub domain: DomainName,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(domain: DomainName, record_type: RecordType) -> Self {
        Self {
            domain,
            record_type,
        }
    }

    pub fn address(domain: DomainName) -> Self {
        Self::new(domain, RecordType::A)
    }
}
