mod iterative_lookup;
mod recursive_lookup;
mod referral;

pub use iterative_lookup::{IterativeLookupUseCase, Resolution};
pub use recursive_lookup::RecursiveLookupUseCase;
pub use referral::{NextHops, ReferralExtractor};
