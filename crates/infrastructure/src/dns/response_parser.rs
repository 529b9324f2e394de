use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use rootwalk_application::ports::QueryReply;
use rootwalk_domain::ResolveError;
use std::net::Ipv4Addr;
use tracing::debug;

/// Reduces a wire-format response to the view the orchestrator
/// consumes: answer-section A addresses and authority-section NS
/// targets, both in response order.
pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(server: Ipv4Addr, response_bytes: &[u8]) -> Result<QueryReply, ResolveError> {
        let message =
            Message::from_vec(response_bytes).map_err(|e| ResolveError::InvalidResponse {
                server: server.to_string(),
                reason: e.to_string(),
            })?;

        let mut answers = Vec::new();
        for record in &message.answers {
            if let RData::A(a) = &record.data {
                answers.push(a.0);
            }
        }

        let mut authority_ns = Vec::new();
        for record in &message.authorities {
            if let RData::NS(ns) = &record.data {
                authority_ns.push(ns.to_utf8());
            }
        }

        let rcode = Self::rcode_to_status(message.metadata.response_code);

        debug!(
            server = %server,
            rcode = rcode,
            answers = answers.len(),
            authority = authority_ns.len(),
            "DNS response parsed"
        );

        Ok(QueryReply {
            answers,
            authority_ns,
            rcode,
        })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
