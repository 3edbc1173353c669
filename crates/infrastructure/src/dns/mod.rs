pub mod exchange;
pub mod forwarding;
pub mod observer;
pub mod transport;

pub use exchange::UdpDnsExchange;
pub use forwarding::{MessageBuilder, RecordTypeMapper};
pub use observer::TracingObserver;
pub use transport::{DnsTransport, TransportResponse, UdpTransport};
