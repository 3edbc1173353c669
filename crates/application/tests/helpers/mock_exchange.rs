use async_trait::async_trait;
use hickory_proto::op::Message;
use iterdns_application::ports::{DnsExchange, ResolutionObserver};
use iterdns_domain::{DnsQuery, DomainError, DomainName, RecordType};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::Mutex;
use tokio_util::sync::CancellationToken;

#[derive(Clone)]
pub enum MockReply {
    Message(Message),
    Empty,
    Fail(String),
}

/// Scripted transport: replies are looked up by (target, server) first, then
/// by target alone. Unscripted queries get an empty reply.
#[derive(Default)]
pub struct MockDnsExchange {
    by_server: Mutex<HashMap<(String, Ipv4Addr), MockReply>>,
    by_target: Mutex<HashMap<String, MockReply>>,
    calls: Mutex<Vec<(String, Ipv4Addr)>>,
    cancel_after: Mutex<Option<(usize, CancellationToken)>>,
}

impl MockDnsExchange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(self, target: &str, server: &str, reply: MockReply) -> Self {
        self.by_server
            .lock()
            .unwrap()
            .insert((target.to_string(), server.parse().unwrap()), reply);
        self
    }

    pub fn on_any_server(self, target: &str, reply: MockReply) -> Self {
        self.by_target
            .lock()
            .unwrap()
            .insert(target.to_string(), reply);
        self
    }

    /// Fire `token` once `calls` queries have been answered.
    pub fn cancel_after(self, calls: usize, token: CancellationToken) -> Self {
        *self.cancel_after.lock().unwrap() = Some((calls, token));
        self
    }

    pub fn calls(&self) -> Vec<(String, Ipv4Addr)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn servers_queried_for(&self, target: &str) -> Vec<Ipv4Addr> {
        self.calls()
            .into_iter()
            .filter(|(t, _)| t == target)
            .map(|(_, server)| server)
            .collect()
    }
}

#[async_trait]
impl DnsExchange for MockDnsExchange {
    async fn exchange(
        &self,
        query: &DnsQuery,
        server: Ipv4Addr,
    ) -> Result<Option<Message>, DomainError> {
        assert_eq!(query.record_type, RecordType::A, "resolver must ask for A");

        let target = query.domain.to_string();
        let count = {
            let mut calls = self.calls.lock().unwrap();
            calls.push((target.clone(), server));
            calls.len()
        };

        if let Some((limit, token)) = self.cancel_after.lock().unwrap().as_ref() {
            if count >= *limit {
                token.cancel();
            }
        }

        let reply = self
            .by_server
            .lock()
            .unwrap()
            .get(&(target.clone(), server))
            .cloned()
            .or_else(|| self.by_target.lock().unwrap().get(&target).cloned())
            .unwrap_or(MockReply::Empty);

        match reply {
            MockReply::Message(message) => Ok(Some(message)),
            MockReply::Empty => Ok(None),
            MockReply::Fail(reason) => Err(DomainError::TransportFailure {
                server: format!("{}:53", server),
                reason,
            }),
        }
    }
}

#[derive(Default)]
pub struct RecordingObserver {
    pub events: Mutex<Vec<String>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl ResolutionObserver for RecordingObserver {
    fn on_query(&self, target: &DomainName, nameserver: Ipv4Addr, iteration: u32, depth: u32) {
        self.events.lock().unwrap().push(format!(
            "query {} @{} #{} depth={}",
            target, nameserver, iteration, depth
        ));
    }

    fn on_answer(&self, target: &DomainName, address: Ipv4Addr) {
        self.events
            .lock()
            .unwrap()
            .push(format!("answer {} {}", target, address));
    }

    fn on_glue(&self, target: &DomainName, nameserver: Ipv4Addr) {
        self.events
            .lock()
            .unwrap()
            .push(format!("glue {} {}", target, nameserver));
    }

    fn on_referral(&self, target: &DomainName, nameserver: &DomainName) {
        self.events
            .lock()
            .unwrap()
            .push(format!("referral {} {}", target, nameserver));
    }

    fn on_failure(&self, target: &DomainName, _error: &DomainError) {
        self.events
            .lock()
            .unwrap()
            .push(format!("failure {}", target));
    }
}
