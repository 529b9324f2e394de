//! DNS Message Builder
//!
//! Constructs the wire-format A-record query the dispatcher sends,
//! using `hickory-proto`.

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use rootwalk_domain::ResolveError;
use std::str::FromStr;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Build an A-record query for `domain` and serialize it to wire
    /// format. The message carries a random ID for response matching
    /// and the RD flag, matching a stub query; servers queried
    /// iteratively ignore RD.
    pub fn build_a_query(domain: &str) -> Result<Vec<u8>, ResolveError> {
        let name = Name::from_str(domain).map_err(|e| {
            ResolveError::InvalidDomainName(format!("'{}': {}", domain, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordType::A);
        query.set_query_class(DNSClass::IN);

        let mut message = Message::new(fastrand::u16(..), MessageType::Query, OpCode::Query);
        message.metadata.recursion_desired = true;
        message.add_query(query);

        Self::serialize_message(&message)
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, ResolveError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message
            .emit(&mut encoder)
            .map_err(|e| ResolveError::BuildQuery(e.to_string()))?;

        Ok(buf)
    }
}
