mod host_lookup;
mod query_dispatcher;

pub use host_lookup::HostLookup;
pub use query_dispatcher::{QueryDispatcher, QueryReply};
