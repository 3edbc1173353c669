use iterdns_application::use_cases::{ResolveNameUseCase, ResolverSettings};
use iterdns_domain::Config;
use iterdns_infrastructure::dns::{TracingObserver, UdpDnsExchange};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub resolve_name: Arc<ResolveNameUseCase>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let settings = ResolverSettings::from_config(&config.resolver)?;
        let exchange = Arc::new(UdpDnsExchange::from_config(&config.resolver));

        info!(
            root = %settings.root_nameserver,
            max_iterations = settings.max_iterations,
            max_depth = settings.max_depth,
            timeout_secs = config.resolver.query_timeout,
            "Resolver ready"
        );

        let resolve_name = ResolveNameUseCase::new(exchange, settings)
            .with_observer(Arc::new(TracingObserver));

        Ok(Self {
            resolve_name: Arc::new(resolve_name),
        })
    }
}
