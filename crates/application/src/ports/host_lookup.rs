use async_trait::async_trait;
use rootwalk_domain::ResolveError;
use std::net::Ipv4Addr;

/// Forward lookup through whatever resolution the host environment
/// provides.
///
/// Backs two collaborators that the iterative engine itself never
/// reimplements: glue resolution of referred NS hostnames, and the
/// recursive mode pass-through.
#[async_trait]
pub trait HostLookup: Send + Sync {
    async fn lookup_ipv4(&self, hostname: &str) -> Result<Vec<Ipv4Addr>, ResolveError>;
}
