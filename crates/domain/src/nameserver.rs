use std::fmt;
use std::net::Ipv4Addr;

/// A nameserver eligible to be queried next.
///
/// Seeds carry their well-known label; referred hops carry the NS
/// hostname their glue address was resolved from. Candidates live for a
/// single resolution attempt and are discarded with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameserverCandidate {
    pub hostname: Option<String>,
    pub address: Ipv4Addr,
}

impl NameserverCandidate {
    /// Seed candidate from the configured root server table.
    pub fn seed(label: impl Into<String>, address: Ipv4Addr) -> Self {
        Self {
            hostname: Some(label.into()),
            address,
        }
    }

    /// Candidate produced by following a referral.
    pub fn referred(hostname: impl Into<String>, address: Ipv4Addr) -> Self {
        Self {
            hostname: Some(hostname.into()),
            address,
        }
    }
}

impl fmt::Display for NameserverCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.hostname {
            Some(hostname) => write!(f, "{} ({})", self.address, hostname),
            None => write!(f, "{}", self.address),
        }
    }
}
