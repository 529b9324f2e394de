use std::fmt;

/// Delegation depth reached by the iterative walk.
///
/// Diagnostic only: the stage advances by one on every referral followed,
/// regardless of how deep the zone cut actually was. It never moves
/// backwards within one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Root,
    Tld,
    Auth,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Root => "ROOT",
            Stage::Tld => "TLD",
            Stage::Auth => "AUTH",
        }
    }

    /// Stage after following one referral. ROOT moves to TLD; anything
    /// deeper stays AUTH.
    pub fn advance(&self) -> Stage {
        match self {
            Stage::Root => Stage::Tld,
            _ => Stage::Auth,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
