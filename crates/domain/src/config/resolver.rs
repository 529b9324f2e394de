use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// One entry of the root server seed table.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RootServer {
    pub address: Ipv4Addr,
    pub label: String,
}

/// Settings for the iterative resolution engine.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Per-query UDP timeout, in seconds. One timeout is one failed
    /// query; there is no retry.
    #[serde(default = "default_query_timeout_secs")]
    pub query_timeout_secs: u64,

    /// Hard bound on iterative steps per attempt. Required so the walk
    /// terminates even against a server chain that keeps referring.
    #[serde(default = "default_max_steps")]
    pub max_steps: u32,

    /// Seed servers the walk starts from. Overridable so the engine can
    /// be pointed at a synthetic server set.
    #[serde(default = "default_root_servers")]
    pub root_servers: Vec<RootServer>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            query_timeout_secs: default_query_timeout_secs(),
            max_steps: default_max_steps(),
            root_servers: default_root_servers(),
        }
    }
}

fn default_query_timeout_secs() -> u64 {
    3
}

fn default_max_steps() -> u32 {
    10
}

fn default_root_servers() -> Vec<RootServer> {
    [
        (Ipv4Addr::new(198, 41, 0, 4), "a.root-servers.net"),
        (Ipv4Addr::new(199, 9, 14, 201), "b.root-servers.net"),
        (Ipv4Addr::new(192, 33, 4, 12), "c.root-servers.net"),
        (Ipv4Addr::new(199, 7, 91, 13), "d.root-servers.net"),
        (Ipv4Addr::new(192, 203, 230, 10), "e.root-servers.net"),
    ]
    .into_iter()
    .map(|(address, label)| RootServer {
        address,
        label: label.to_string(),
    })
    .collect()
}
