//! Rootwalk Infrastructure Layer
//!
//! Network adapters behind the application ports: the UDP query
//! dispatcher and the system-resolver lookup.
pub mod dns;
pub mod system;
