use async_trait::async_trait;
use rootwalk_application::ports::HostLookup;
use rootwalk_domain::ResolveError;
use std::net::{IpAddr, Ipv4Addr};
use tracing::debug;

/// Forward lookup through the operating system's resolver.
///
/// Serves both glue resolution during the walk and the recursive mode
/// pass-through. IPv6 results are dropped; the walk only queries over
/// IPv4.
pub struct SystemHostLookup;

impl SystemHostLookup {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemHostLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostLookup for SystemHostLookup {
    async fn lookup_ipv4(&self, hostname: &str) -> Result<Vec<Ipv4Addr>, ResolveError> {
        let addresses: Vec<Ipv4Addr> = tokio::net::lookup_host((hostname, 0))
            .await
            .map_err(|e| ResolveError::HostLookup {
                hostname: hostname.to_string(),
                reason: e.to_string(),
            })?
            .filter_map(|addr| match addr.ip() {
                IpAddr::V4(v4) => Some(v4),
                IpAddr::V6(_) => None,
            })
            .collect();

        debug!(
            hostname = %hostname,
            addresses = addresses.len(),
            "System resolver lookup"
        );

        Ok(addresses)
    }
}
