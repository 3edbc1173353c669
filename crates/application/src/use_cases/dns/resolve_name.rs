use crate::ports::{DnsExchange, NoopObserver, ResolutionObserver};
use crate::services::{Classification, ResponseClassifier};
use futures::future::{BoxFuture, FutureExt};
use iterdns_domain::config::resolver::{
    DEFAULT_MAX_DEPTH, DEFAULT_MAX_ITERATIONS, DEFAULT_ROOT_NAMESERVER,
};
use iterdns_domain::{DnsQuery, DomainError, DomainName, ResolverConfig};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Immutable parameters shared by every resolution made through one use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverSettings {
    pub root_nameserver: Ipv4Addr,
    pub max_iterations: u32,
    /// Nested nameserver-name lookups allowed below the top-level call
    pub max_depth: u32,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            root_nameserver: DEFAULT_ROOT_NAMESERVER
                .parse()
                .unwrap_or(Ipv4Addr::new(198, 41, 0, 4)),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ResolverSettings {
    pub fn from_config(config: &ResolverConfig) -> Result<Self, DomainError> {
        let root_nameserver = config
            .root_address()
            .map_err(|e| DomainError::InvalidIpAddress(e.to_string()))?;

        Ok(Self {
            root_nameserver,
            max_iterations: config.max_iterations,
            max_depth: config.max_depth,
        })
    }
}

/// Walks the delegation tree from the root nameserver down to an A record.
///
/// All per-resolution state (current nameserver, iteration count, referral
/// depth) lives on the call stack, so one instance can serve independent
/// resolutions concurrently.
pub struct ResolveNameUseCase {
    exchange: Arc<dyn DnsExchange>,
    observer: Arc<dyn ResolutionObserver>,
    settings: ResolverSettings,
}

impl ResolveNameUseCase {
    pub fn new(exchange: Arc<dyn DnsExchange>, settings: ResolverSettings) -> Self {
        Self {
            exchange,
            observer: Arc::new(NoopObserver),
            settings,
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn ResolutionObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub async fn execute(&self, target: &DomainName) -> Result<Ipv4Addr, DomainError> {
        self.execute_with_cancel(target, &CancellationToken::new())
            .await
    }

    /// Like [`execute`](Self::execute), but stops before the next query once
    /// `cancel` fires. A query already in flight is allowed to finish.
    pub async fn execute_with_cancel(
        &self,
        target: &DomainName,
        cancel: &CancellationToken,
    ) -> Result<Ipv4Addr, DomainError> {
        let result = self.resolve_at_depth(target, 0, cancel).await;

        match &result {
            Ok(address) => info!(domain = %target, address = %address, "Resolution succeeded"),
            Err(e) => warn!(domain = %target, error = %e, "Resolution failed"),
        }

        result
    }

    fn resolve_at_depth<'a>(
        &'a self,
        target: &'a DomainName,
        depth: u32,
        cancel: &'a CancellationToken,
    ) -> BoxFuture<'a, Result<Ipv4Addr, DomainError>> {
        async move {
            let result = self.walk(target, depth, cancel).await;
            if let Err(e) = &result {
                self.observer.on_failure(target, e);
            }
            result
        }
        .boxed()
    }

    async fn walk(
        &self,
        target: &DomainName,
        depth: u32,
        cancel: &CancellationToken,
    ) -> Result<Ipv4Addr, DomainError> {
        if depth > self.settings.max_depth {
            return Err(DomainError::RecursionDepthExceeded {
                name: target.to_string(),
                max_depth: self.settings.max_depth,
            });
        }

        let mut nameserver = self.settings.root_nameserver;
        let mut iteration = 0;

        while iteration < self.settings.max_iterations {
            if cancel.is_cancelled() {
                return Err(DomainError::Cancelled);
            }
            iteration += 1;

            debug!(
                domain = %target,
                nameserver = %nameserver,
                iteration,
                depth,
                "Attempt to perform dns query"
            );
            self.observer.on_query(target, nameserver, iteration, depth);

            let query = DnsQuery::address(target.clone());
            let reply = self.exchange.exchange(&query, nameserver).await?;

            let classification = reply
                .as_ref()
                .map(ResponseClassifier::classify)
                .unwrap_or(Classification::Nothing);

            match classification {
                Classification::Answer(address) => {
                    self.observer.on_answer(target, address);
                    return Ok(address);
                }
                Classification::Glue(next) => {
                    self.observer.on_glue(target, next);
                    nameserver = next;
                }
                Classification::Referral(ns_name) => {
                    self.observer.on_referral(target, &ns_name);
                    if cancel.is_cancelled() {
                        return Err(DomainError::Cancelled);
                    }

                    nameserver = match self.resolve_at_depth(&ns_name, depth + 1, cancel).await {
                        Ok(address) => address,
                        // Cancellation is reported as is at every level.
                        Err(DomainError::Cancelled) => return Err(DomainError::Cancelled),
                        Err(e) => {
                            return Err(DomainError::SubResolutionFailed {
                                nameserver: ns_name.to_string(),
                                source: Box::new(e),
                            })
                        }
                    };
                }
                Classification::Nothing => {
                    return Err(DomainError::NoUsableRecord { nameserver });
                }
            }
        }

        Err(DomainError::IterationBudgetExhausted {
            target: target.to_string(),
            max_iterations: self.settings.max_iterations,
        })
    }
}
