use crate::ports::HostLookup;
use rootwalk_domain::ResolveError;
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::{debug, info};

/// Recursive mode: one call through the host resolver, which does all
/// the walking itself. No state, no retries added.
pub struct RecursiveLookupUseCase {
    resolver: Arc<dyn HostLookup>,
}

impl RecursiveLookupUseCase {
    pub fn new(resolver: Arc<dyn HostLookup>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, domain: &str) -> Result<Ipv4Addr, ResolveError> {
        info!(domain = %domain, "Recursive lookup via system resolver");

        let addresses = self.resolver.lookup_ipv4(domain).await?;
        for address in &addresses {
            debug!(domain = %domain, address = %address, "System resolver answer");
        }

        addresses
            .first()
            .copied()
            .ok_or_else(|| ResolveError::NoAddress(domain.to_string()))
    }
}
