use super::stage::Stage;
use std::net::Ipv4Addr;
use thiserror::Error;

/// Terminal state of one resolution attempt.
///
/// A failed attempt is a normal, reportable outcome, not a process
/// error; the reason renders as the one-line diagnostic shown to the
/// user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    Answered(Ipv4Addr),
    Failed(FailureReason),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The selected server did not produce a usable response. Ends the
    /// attempt immediately: siblings in the candidate list are not tried.
    #[error("query failed at {stage} server {server}")]
    QueryFailed { stage: Stage, server: Ipv4Addr },

    /// Response carried neither an answer nor any NS referral.
    #[error("dead end at {stage}: no answer and no referral")]
    DeadEnd { stage: Stage },

    /// NS referral present, but no referred hostname resolved to an
    /// address.
    #[error("referral at {stage} yielded no reachable nameservers")]
    ReferralUnresolved { stage: Stage },

    /// Step bound reached before an answer; guards against referral
    /// chains that never converge.
    #[error("gave up after {steps} steps without an answer")]
    Exhausted { steps: u32 },
}
