use hickory_proto::op::{Message, MessageType};
use hickory_proto::serialize::binary::BinEncodable;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

#[derive(Clone)]
pub enum MockResponse {
    /// Sent back with the query's ID and question copied in
    Message(Message),
    /// Zero-length datagram
    Empty,
    /// Bytes sent verbatim
    Raw(Vec<u8>),
    /// Swallow the query
    Silent,
}

/// UDP server on 127.0.0.1 that replays a script, one entry per query.
/// Once the script runs out the last entry repeats.
pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<Mutex<Vec<Message>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(script: Vec<MockResponse>) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let queries = Arc::new(Mutex::new(Vec::new()));

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();
        let seen = Arc::clone(&queries);

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];
            let mut step = 0usize;

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { continue };
                        let Ok(query) = Message::from_vec(&buf[..len]) else { continue };

                        let entry = script
                            .get(step)
                            .or_else(|| script.last())
                            .cloned()
                            .unwrap_or(MockResponse::Silent);
                        step += 1;

                        let reply = Self::render(&query, entry);
                        seen.lock().unwrap().push(query);

                        if let Some(bytes) = reply {
                            let _ = socket.send_to(&bytes, peer).await;
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    fn render(query: &Message, entry: MockResponse) -> Option<Vec<u8>> {
        match entry {
            MockResponse::Message(mut reply) => {
                let mut header = *reply.header();
                header.set_id(query.id());
                header.set_message_type(MessageType::Response);
                reply.set_header(header);
                for question in query.queries() {
                    reply.add_query(question.clone());
                }
                reply.to_vec().ok()
            }
            MockResponse::Empty => Some(Vec::new()),
            MockResponse::Raw(bytes) => Some(bytes),
            MockResponse::Silent => None,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn queries(&self) -> Vec<Message> {
        self.queries.lock().unwrap().clone()
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
