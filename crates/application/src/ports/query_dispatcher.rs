use async_trait::async_trait;
use rootwalk_domain::ResolveError;
use std::net::Ipv4Addr;

/// Transport-agnostic view of one DNS response, reduced to what the
/// walk consumes.
#[derive(Debug, Clone, Default)]
pub struct QueryReply {
    /// A addresses of the answer section, in answer order.
    pub answers: Vec<Ipv4Addr>,

    /// NS target hostnames of the authority section, in the order the
    /// server returned them. The order carries no guarantee; it is used
    /// as presented.
    pub authority_ns: Vec<String>,

    /// Response code, for diagnostics only.
    pub rcode: &'static str,
}

impl QueryReply {
    pub fn is_answer(&self) -> bool {
        !self.answers.is_empty()
    }
}

/// Sends one A-record query to one server and returns the parsed reply.
///
/// A single timeout is a single failure; retry and fallback policy, if
/// any, belong to the caller.
#[async_trait]
pub trait QueryDispatcher: Send + Sync {
    async fn query(&self, server: Ipv4Addr, domain: &str) -> Result<QueryReply, ResolveError>;
}
