#![allow(dead_code)]
use async_trait::async_trait;
use rootwalk_application::ports::{HostLookup, QueryDispatcher, QueryReply};
use rootwalk_domain::{NameserverCandidate, ResolveError};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Scripted dispatcher: each server address maps to a canned reply or a
/// failure. Counts queries so tests can assert how far the walk went.
pub struct ScriptedDispatcher {
    replies: HashMap<Ipv4Addr, Result<QueryReply, ResolveError>>,
    queries: AtomicUsize,
}

impl ScriptedDispatcher {
    pub fn new() -> Self {
        Self {
            replies: HashMap::new(),
            queries: AtomicUsize::new(0),
        }
    }

    pub fn answer(mut self, server: Ipv4Addr, addresses: &[Ipv4Addr]) -> Self {
        self.replies.insert(
            server,
            Ok(QueryReply {
                answers: addresses.to_vec(),
                authority_ns: vec![],
                rcode: "NOERROR",
            }),
        );
        self
    }

    pub fn referral(mut self, server: Ipv4Addr, nameservers: &[&str]) -> Self {
        self.replies.insert(
            server,
            Ok(QueryReply {
                answers: vec![],
                authority_ns: nameservers.iter().map(|ns| ns.to_string()).collect(),
                rcode: "NOERROR",
            }),
        );
        self
    }

    pub fn dead_end(mut self, server: Ipv4Addr) -> Self {
        self.replies.insert(
            server,
            Ok(QueryReply {
                answers: vec![],
                authority_ns: vec![],
                rcode: "NOERROR",
            }),
        );
        self
    }

    pub fn unreachable(mut self, server: Ipv4Addr) -> Self {
        self.replies.insert(
            server,
            Err(ResolveError::QueryTimeout {
                server: server.to_string(),
            }),
        );
        self
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QueryDispatcher for ScriptedDispatcher {
    async fn query(&self, server: Ipv4Addr, _domain: &str) -> Result<QueryReply, ResolveError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        match self.replies.get(&server) {
            Some(reply) => reply.clone(),
            None => Err(ResolveError::QueryTimeout {
                server: server.to_string(),
            }),
        }
    }
}

/// Scripted glue/system lookup keyed by hostname; unknown hostnames
/// fail like an NXDOMAIN from the host resolver would.
pub struct ScriptedHostLookup {
    entries: HashMap<String, Vec<Ipv4Addr>>,
}

impl ScriptedHostLookup {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn entry(mut self, hostname: &str, addresses: &[Ipv4Addr]) -> Self {
        self.entries.insert(hostname.to_string(), addresses.to_vec());
        self
    }
}

#[async_trait]
impl HostLookup for ScriptedHostLookup {
    async fn lookup_ipv4(&self, hostname: &str) -> Result<Vec<Ipv4Addr>, ResolveError> {
        match self.entries.get(hostname) {
            Some(addresses) => Ok(addresses.clone()),
            None => Err(ResolveError::HostLookup {
                hostname: hostname.to_string(),
                reason: "no scripted entry".to_string(),
            }),
        }
    }
}

/// Dispatcher that panics on contact. Used to prove a code path never
/// reaches the iterative engine.
pub struct PanickingDispatcher;

#[async_trait]
impl QueryDispatcher for PanickingDispatcher {
    async fn query(&self, server: Ipv4Addr, _domain: &str) -> Result<QueryReply, ResolveError> {
        panic!("iterative dispatcher queried unexpectedly (server {})", server);
    }
}

pub fn roots(addresses: &[Ipv4Addr]) -> Vec<NameserverCandidate> {
    addresses
        .iter()
        .map(|address| NameserverCandidate::seed(format!("seed {}", address), *address))
        .collect()
}

pub fn ip(s: &str) -> Ipv4Addr {
    s.parse().unwrap()
}
