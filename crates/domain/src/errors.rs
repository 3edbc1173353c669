use std::net::Ipv4Addr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("No usable record in response from {nameserver}")]
    NoUsableRecord { nameserver: Ipv4Addr },

    #[error("Iteration budget of {max_iterations} exhausted while resolving {target}")]
    IterationBudgetExhausted { target: String, max_iterations: u32 },

    #[error("Failed to resolve nameserver {nameserver}: {source}")]
    SubResolutionFailed {
        nameserver: String,
        #[source]
        source: Box<DomainError>,
    },

    #[error("Transport failure talking to {server}: {reason}")]
    TransportFailure { server: String, reason: String },

    #[error("Referral depth {max_depth} exceeded while resolving {name}")]
    RecursionDepthExceeded { name: String, max_depth: u32 },

    #[error("Resolution cancelled")]
    Cancelled,
}

impl DomainError {
    /// Innermost error of a chain of failed sub-resolutions.
    pub fn root_cause(&self) -> &DomainError {
        let mut current = self;
        while let DomainError::SubResolutionFailed { source, .. } = current {
            current = source;
        }
        current
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(self.root_cause(), DomainError::TransportFailure { .. })
    }
}
