#![allow(dead_code)]

mod mock_exchange;
mod responses;

pub use mock_exchange::{MockDnsExchange, MockReply, RecordingObserver};
pub use responses::{answer, empty, glue, referral, ResponseBuilder};
