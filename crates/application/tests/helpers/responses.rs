use hickory_proto::op::{Message, MessageType, OpCode};
use hickory_proto::rr::rdata::{A, NS};
use hickory_proto::rr::{Name, RData, Record};
use std::net::Ipv4Addr;
use std::str::FromStr;

pub struct ResponseBuilder {
    message: Message,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self {
            message: Message::new(0x1d1d, MessageType::Response, OpCode::Query),
        }
    }

    pub fn answer(mut self, owner: &str, ip: &str) -> Self {
        self.message.add_answer(a_record(owner, ip));
        self
    }

    pub fn glue(mut self, owner: &str, ip: &str) -> Self {
        self.message.add_additional(a_record(owner, ip));
        self
    }

    pub fn authority_ns(mut self, zone: &str, nameserver: &str) -> Self {
        self.message.add_name_server(Record::from_rdata(
            Name::from_str(zone).unwrap(),
            172_800,
            RData::NS(NS(Name::from_str(nameserver).unwrap())),
        ));
        self
    }

    pub fn build(self) -> Message {
        self.message
    }
}

pub fn answer(ip: &str) -> Message {
    ResponseBuilder::new().answer("answer.test.", ip).build()
}

pub fn glue(nameserver: &str, ip: &str) -> Message {
    ResponseBuilder::new()
        .authority_ns("test.", nameserver)
        .glue(nameserver, ip)
        .build()
}

pub fn referral(zone: &str, nameserver: &str) -> Message {
    ResponseBuilder::new().authority_ns(zone, nameserver).build()
}

pub fn empty() -> Message {
    ResponseBuilder::new().build()
}

fn a_record(owner: &str, ip: &str) -> Record {
    let ip: Ipv4Addr = ip.parse().unwrap();
    Record::from_rdata(Name::from_str(owner).unwrap(), 300, RData::A(A(ip)))
}
