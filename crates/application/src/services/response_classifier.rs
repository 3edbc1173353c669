use hickory_proto::op::Message;
use hickory_proto::rr::{RData, Record};
use iterdns_domain::DomainName;
use std::net::Ipv4Addr;
use tracing::{debug, warn};

/// What a single response tells the resolver to do next.
///
/// Only the highest-priority finding is kept: an answer beats glue, glue
/// beats a referral by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Answer(Ipv4Addr),
    Glue(Ipv4Addr),
    Referral(DomainName),
    Nothing,
}

pub struct ResponseClassifier;

impl ResponseClassifier {
    pub fn classify(message: &Message) -> Classification {
        if let Some(address) = Self::answer(message) {
            return Classification::Answer(address);
        }
        if let Some(nameserver) = Self::glue(message) {
            return Classification::Glue(nameserver);
        }
        if let Some(name) = Self::referral(message) {
            return Classification::Referral(name);
        }
        Classification::Nothing
    }

    /// First A record of the answer section.
    pub fn answer(message: &Message) -> Option<Ipv4Addr> {
        let address = first_address(message.answers())?;
        debug!(section = "answer", address = %address, "A record found");
        Some(address)
    }

    /// First A record of the additional section.
    pub fn glue(message: &Message) -> Option<Ipv4Addr> {
        let address = first_address(message.additionals())?;
        debug!(section = "additional", address = %address, "Glue record found");
        Some(address)
    }

    /// First NS record of the authority section.
    pub fn referral(message: &Message) -> Option<DomainName> {
        for record in message.name_servers() {
            if let RData::NS(ns) = record.data() {
                let raw = ns.0.to_utf8();
                match DomainName::parse(&raw) {
                    Ok(name) => {
                        debug!(section = "authority", nameserver = %name, "NS record found");
                        return Some(name);
                    }
                    // The first NS record decides; an unusable one ends the search.
                    Err(e) => {
                        warn!(nameserver = %raw, error = %e, "Ignoring unusable NS record");
                        return None;
                    }
                }
            }
        }
        None
    }
}

fn first_address(records: &[Record]) -> Option<Ipv4Addr> {
    records.iter().find_map(|record| match record.data() {
        RData::A(a) => Some(a.0),
        _ => None,
    })
}
