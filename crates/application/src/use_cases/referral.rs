use crate::ports::HostLookup;
use rootwalk_domain::NameserverCandidate;
use std::sync::Arc;
use tracing::debug;

/// Next-hop candidates extracted from one referral response.
#[derive(Debug, Clone, Default)]
pub struct NextHops {
    /// NS hostnames seen in the authority section, whether or not their
    /// glue resolved.
    pub referred: usize,

    /// Resolved candidates, in the order the hostnames were presented.
    /// Duplicate addresses are kept.
    pub candidates: Vec<NameserverCandidate>,
}

impl NextHops {
    /// No referral at all: the response named no nameservers.
    pub fn is_dead_end(&self) -> bool {
        self.referred == 0
    }

    /// Referral present, but every glue lookup came up empty.
    pub fn is_unresolved(&self) -> bool {
        self.referred > 0 && self.candidates.is_empty()
    }
}

/// Turns the NS hostnames of a referral into queryable addresses.
pub struct ReferralExtractor {
    glue: Arc<dyn HostLookup>,
}

impl ReferralExtractor {
    pub fn new(glue: Arc<dyn HostLookup>) -> Self {
        Self { glue }
    }

    /// Resolve every referred hostname, in presented order. A hostname
    /// whose glue lookup fails contributes nothing and does not abort
    /// the scan; it only matters if every hostname fails.
    pub async fn extract(&self, authority_ns: &[String]) -> NextHops {
        let mut candidates = Vec::new();

        for hostname in authority_ns {
            debug!(hostname = %hostname, "Extracted NS hostname");

            match self.glue.lookup_ipv4(hostname).await {
                Ok(addresses) => {
                    candidates.extend(
                        addresses
                            .into_iter()
                            .map(|address| NameserverCandidate::referred(hostname.clone(), address)),
                    );
                }
                Err(e) => {
                    debug!(
                        hostname = %hostname,
                        error = %e,
                        "Glue lookup failed, skipping nameserver"
                    );
                }
            }
        }

        NextHops {
            referred: authority_ns.len(),
            candidates,
        }
    }
}
