use rootwalk_application::use_cases::{IterativeLookupUseCase, RecursiveLookupUseCase};
use rootwalk_domain::{Config, NameserverCandidate};
use rootwalk_infrastructure::dns::UdpQueryDispatcher;
use rootwalk_infrastructure::system::SystemHostLookup;
use std::sync::Arc;
use std::time::Duration;

pub struct Services {
    pub iterative: IterativeLookupUseCase,
    pub recursive: RecursiveLookupUseCase,
}

impl Services {
    pub fn new(config: &Config) -> Self {
        let dispatcher = Arc::new(UdpQueryDispatcher::new(Duration::from_secs(
            config.resolver.query_timeout_secs,
        )));
        let host_lookup = Arc::new(SystemHostLookup::new());

        let roots: Vec<NameserverCandidate> = config
            .resolver
            .root_servers
            .iter()
            .map(|root| NameserverCandidate::seed(root.label.clone(), root.address))
            .collect();

        Self {
            iterative: IterativeLookupUseCase::new(
                dispatcher,
                host_lookup.clone(),
                roots,
                config.resolver.max_steps,
            ),
            recursive: RecursiveLookupUseCase::new(host_lookup),
        }
    }
}
