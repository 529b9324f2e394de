use thiserror::Error;

/// Errors raised by the resolver's collaborators.
///
/// The orchestrator does not branch on the variant: any error from a
/// dispatched query ends the attempt the same way. The variants exist so
/// the trace can say what actually went wrong at a given server.
#[derive(Error, Debug, Clone)]
pub enum ResolveError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Failed to build DNS query: {0}")]
    BuildQuery(String),

    #[error("Query timeout contacting {server}")]
    QueryTimeout { server: String },

    #[error("Transport error contacting {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Invalid DNS response from {server}: {reason}")]
    InvalidResponse { server: String, reason: String },

    #[error("Host lookup failed for {hostname}: {reason}")]
    HostLookup { hostname: String, reason: String },

    #[error("No IPv4 address found for {0}")]
    NoAddress(String),
}
