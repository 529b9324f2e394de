use crate::ports::{HostLookup, QueryDispatcher};
use crate::use_cases::referral::ReferralExtractor;
use rootwalk_domain::{FailureReason, NameserverCandidate, ResolutionOutcome, Stage};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of one full walk: the terminal outcome plus the number of
/// referrals followed to get there.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub outcome: ResolutionOutcome,
    pub referral_hops: u32,
}

impl Resolution {
    fn failed(reason: FailureReason, referral_hops: u32) -> Self {
        Self {
            outcome: ResolutionOutcome::Failed(reason),
            referral_hops,
        }
    }
}

/// Deterministic head-of-list choice. A separate function so the
/// selection policy can change without touching the state machine.
fn select_candidate(candidates: &[NameserverCandidate]) -> &NameserverCandidate {
    &candidates[0]
}

/// The iterative resolution engine.
///
/// Walks the delegation chain: query the current candidate, follow the
/// referral it returns, repeat until an answer, a dead end, a failed
/// query, or the step bound. Each attempt owns its candidate list and
/// stage; nothing survives the call.
pub struct IterativeLookupUseCase {
    dispatcher: Arc<dyn QueryDispatcher>,
    extractor: ReferralExtractor,
    roots: Vec<NameserverCandidate>,
    max_steps: u32,
}

impl IterativeLookupUseCase {
    pub fn new(
        dispatcher: Arc<dyn QueryDispatcher>,
        glue: Arc<dyn HostLookup>,
        roots: Vec<NameserverCandidate>,
        max_steps: u32,
    ) -> Self {
        Self {
            dispatcher,
            extractor: ReferralExtractor::new(glue),
            roots,
            max_steps,
        }
    }

    pub async fn execute(&self, domain: &str) -> Resolution {
        info!(domain = %domain, "Iterative lookup starting at the root servers");

        let mut candidates = self.roots.clone();
        let mut stage = Stage::Root;
        let mut hops = 0u32;

        for _ in 0..self.max_steps {
            if candidates.is_empty() {
                return Resolution::failed(FailureReason::DeadEnd { stage }, hops);
            }

            let target = select_candidate(&candidates);
            let server = target.address;
            debug!(stage = %stage, candidate = %target, "Querying nameserver");

            let reply = match self.dispatcher.query(server, domain).await {
                Ok(reply) => reply,
                Err(e) => {
                    // One failed query ends the whole attempt; siblings in
                    // the candidate list are not tried.
                    warn!(stage = %stage, server = %server, error = %e, "Query failed");
                    return Resolution::failed(FailureReason::QueryFailed { stage, server }, hops);
                }
            };

            debug!(
                stage = %stage,
                server = %server,
                rcode = reply.rcode,
                answers = reply.answers.len(),
                authority = reply.authority_ns.len(),
                "Query succeeded"
            );

            if let Some(address) = reply.answers.first() {
                info!(domain = %domain, address = %address, hops = hops, "Answer received");
                return Resolution {
                    outcome: ResolutionOutcome::Answered(*address),
                    referral_hops: hops,
                };
            }

            let next = self.extractor.extract(&reply.authority_ns).await;
            if next.is_dead_end() {
                return Resolution::failed(FailureReason::DeadEnd { stage }, hops);
            }
            if next.is_unresolved() {
                return Resolution::failed(FailureReason::ReferralUnresolved { stage }, hops);
            }

            candidates = next.candidates;
            stage = stage.advance();
            hops += 1;
        }

        Resolution::failed(
            FailureReason::Exhausted {
                steps: self.max_steps,
            },
            hops,
        )
    }
}
