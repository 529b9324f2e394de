#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode};
use hickory_proto::rr::rdata::{A, NS};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// What the mock server does with each query it receives.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Reply with the given A addresses in the answer section.
    Answer(Vec<Ipv4Addr>),
    /// Reply with NS records for the given targets in the authority
    /// section.
    Referral(Vec<&'static str>),
    /// Reply with an empty NOERROR response.
    Empty,
    /// Swallow the query so the client times out.
    NoResponse,
    /// Reply with bytes that do not parse as a DNS message.
    Garbage,
}

/// Single-purpose UDP DNS server bound to an ephemeral localhost port.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behavior: MockBehavior) -> Result<(Self, SocketAddr), std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let local_addr = socket.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            match &behavior {
                                MockBehavior::NoResponse => {}
                                MockBehavior::Garbage => {
                                    let _ = socket.send_to(&[0xde, 0xad], peer).await;
                                }
                                behavior => {
                                    let response = build_response(&buf[..len], behavior);
                                    let _ = socket.send_to(&response, peer).await;
                                }
                            }
                        }
                    }
                }
            }
        });

        Ok((
            Self {
                addr: local_addr,
                shutdown_tx: Some(shutdown_tx),
            },
            local_addr,
        ))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn build_response(query: &[u8], behavior: &MockBehavior) -> Vec<u8> {
    let query_message = match Message::from_vec(query) {
        Ok(message) => message,
        Err(_) => return vec![],
    };

    let qname = query_message
        .queries
        .first()
        .map(|q| q.name().clone())
        .unwrap_or_else(Name::root);

    let mut response = Message::new(query_message.id, MessageType::Response, OpCode::Query);
    for query in &query_message.queries {
        response.add_query(query.clone());
    }

    match behavior {
        MockBehavior::Answer(addresses) => {
            for address in addresses {
                response.add_answer(Record::from_rdata(qname.clone(), 60, RData::A(A(*address))));
            }
        }
        MockBehavior::Referral(targets) => {
            let zone = qname.base_name();
            for target in targets {
                response.add_authority(Record::from_rdata(
                    zone.clone(),
                    60,
                    RData::NS(NS(Name::from_str(target).unwrap())),
                ));
            }
        }
        _ => {}
    }

    let mut bytes = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut bytes);
    response.emit(&mut encoder).expect("mock response encodes");
    bytes
}
