pub mod breakdown;
pub mod candidate;
pub mod facets;
pub mod job;

pub use breakdown::{Dimension, MatchBreakdown, MatchDetail};
pub use candidate::{CandidateProfile, VerificationStats, VerifiedSkillStat};
pub use job::{CompanyProfile, HiringManagerPreferences, JobPosting};
