//! Logistics dimensions: timezone overlap, visa/relocation, salary, seniority
//! and work mode.

use crate::models::job::{OverlapMode, Seniority, WorkMode};
use crate::models::{CandidateProfile, CompanyProfile, JobPosting, MatchDetail};

const UNKNOWN_TIMEZONE: u32 = 50;
const SPONSORSHIP_FRICTION: u32 = 50;
const SENIORITY_MISMATCH: u32 = 50;

// ────────────────────────────────────────────────────────────────────────────
// Timezone
// ────────────────────────────────────────────────────────────────────────────

/// Fixed UTC offsets (hours). Daylight saving is ignored.
const TIMEZONE_OFFSETS: &[(&str, f64)] = &[
    ("utc", 0.0),
    ("gmt", 0.0),
    ("etc/utc", 0.0),
    ("europe/london", 0.0),
    ("europe/lisbon", 0.0),
    ("wet", 0.0),
    ("cet", 1.0),
    ("europe/paris", 1.0),
    ("europe/berlin", 1.0),
    ("europe/madrid", 1.0),
    ("europe/amsterdam", 1.0),
    ("europe/stockholm", 1.0),
    ("europe/warsaw", 1.0),
    ("africa/lagos", 1.0),
    ("eet", 2.0),
    ("europe/athens", 2.0),
    ("europe/kyiv", 2.0),
    ("africa/cairo", 2.0),
    ("africa/johannesburg", 2.0),
    ("europe/istanbul", 3.0),
    ("europe/moscow", 3.0),
    ("africa/nairobi", 3.0),
    ("asia/dubai", 4.0),
    ("asia/karachi", 5.0),
    ("ist", 5.5),
    ("asia/kolkata", 5.5),
    ("asia/dhaka", 6.0),
    ("asia/bangkok", 7.0),
    ("asia/jakarta", 7.0),
    ("asia/ho_chi_minh", 7.0),
    ("asia/singapore", 8.0),
    ("asia/shanghai", 8.0),
    ("asia/hong_kong", 8.0),
    ("asia/manila", 8.0),
    ("australia/perth", 8.0),
    ("jst", 9.0),
    ("asia/tokyo", 9.0),
    ("asia/seoul", 9.0),
    ("aest", 10.0),
    ("australia/sydney", 10.0),
    ("australia/melbourne", 10.0),
    ("nzst", 12.0),
    ("pacific/auckland", 12.0),
    ("hst", -10.0),
    ("pacific/honolulu", -10.0),
    ("akst", -9.0),
    ("america/anchorage", -9.0),
    ("pst", -8.0),
    ("america/los_angeles", -8.0),
    ("america/vancouver", -8.0),
    ("mst", -7.0),
    ("america/denver", -7.0),
    ("america/phoenix", -7.0),
    ("cst", -6.0),
    ("america/chicago", -6.0),
    ("america/mexico_city", -6.0),
    ("est", -5.0),
    ("america/new_york", -5.0),
    ("america/toronto", -5.0),
    ("america/bogota", -5.0),
    ("america/lima", -5.0),
    ("ast", -4.0),
    ("america/halifax", -4.0),
    ("america/sao_paulo", -3.0),
    ("america/argentina/buenos_aires", -3.0),
];

/// Resolves a timezone name or a literal `UTC±H[:MM]` / `GMT±H[:MM]` to hours.
pub fn utc_offset(timezone: &str) -> Option<f64> {
    let tz = timezone.trim().to_ascii_lowercase();
    if let Some((_, offset)) = TIMEZONE_OFFSETS.iter().find(|(name, _)| *name == tz) {
        return Some(*offset);
    }

    let rest = tz.strip_prefix("utc").or_else(|| tz.strip_prefix("gmt"))?;
    let (sign, digits) = match rest.chars().next()? {
        '+' => (1.0, &rest[1..]),
        '-' => (-1.0, &rest[1..]),
        _ => return None,
    };
    let (hours, minutes) = match digits.split_once(':') {
        Some((h, m)) => (h.parse::<f64>().ok()?, m.parse::<f64>().ok()?),
        None => (digits.parse::<f64>().ok()?, 0.0),
    };
    if !(0.0..=14.0).contains(&hours) || !(0.0..60.0).contains(&minutes) {
        return None;
    }
    Some(sign * (hours + minutes / 60.0))
}

/// Scoring policy per overlap mode; each variant carries its own thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlapPolicy {
    Unrestricted,
    /// 100 within `grace_hours`, else `100 − penalty × (diff − decay_from)`, floored at 0.
    LinearDecay {
        grace_hours: f64,
        decay_from: f64,
        penalty_per_hour: f64,
    },
    /// 100 within `max_hours`, else a flat `beyond` score.
    Threshold { max_hours: f64, beyond: f64 },
}

impl OverlapMode {
    pub fn policy(self) -> OverlapPolicy {
        match self {
            OverlapMode::AsyncFirst => OverlapPolicy::Unrestricted,
            OverlapMode::FullOverlap => OverlapPolicy::LinearDecay {
                grace_hours: 1.0,
                decay_from: 0.0,
                penalty_per_hour: 15.0,
            },
            OverlapMode::Overlap4Plus => OverlapPolicy::LinearDecay {
                grace_hours: 4.0,
                decay_from: 4.0,
                penalty_per_hour: 20.0,
            },
            OverlapMode::Overlap2Plus => OverlapPolicy::Threshold {
                max_hours: 6.0,
                beyond: 50.0,
            },
        }
    }
}

impl OverlapPolicy {
    pub fn score(&self, diff_hours: f64) -> f64 {
        match *self {
            OverlapPolicy::Unrestricted => 100.0,
            OverlapPolicy::LinearDecay {
                grace_hours,
                decay_from,
                penalty_per_hour,
            } => {
                if diff_hours <= grace_hours {
                    100.0
                } else {
                    (100.0 - penalty_per_hour * (diff_hours - decay_from)).max(0.0)
                }
            }
            OverlapPolicy::Threshold { max_hours, beyond } => {
                if diff_hours <= max_hours {
                    100.0
                } else {
                    beyond
                }
            }
        }
    }
}

/// Team timezone: the job's own, else the company default.
fn team_timezone<'a>(job: &'a JobPosting, company: Option<&'a CompanyProfile>) -> Option<&'a str> {
    job.timezone
        .as_deref()
        .or_else(|| company.and_then(|c| c.default_timezone.as_deref()))
}

/// Absolute offset difference in hours, when both sides resolve.
pub fn timezone_gap_hours(
    job: &JobPosting,
    company: Option<&CompanyProfile>,
    candidate: &CandidateProfile,
) -> Option<f64> {
    let team = utc_offset(team_timezone(job, company)?)?;
    let own = utc_offset(candidate.timezone.as_deref()?)?;
    Some((team - own).abs())
}

pub fn score_timezone(
    job: &JobPosting,
    company: Option<&CompanyProfile>,
    candidate: &CandidateProfile,
) -> MatchDetail {
    let policy = job.overlap_mode.unwrap_or_default().policy();
    if policy == OverlapPolicy::Unrestricted {
        return MatchDetail::new(100, "Async-first team; no overlap required");
    }

    let team = match team_timezone(job, company).and_then(utc_offset) {
        Some(offset) => offset,
        None => return MatchDetail::new(100, "No team timezone declared"),
    };

    let own = match candidate.timezone.as_deref().and_then(utc_offset) {
        Some(offset) => offset,
        None => return MatchDetail::new(UNKNOWN_TIMEZONE, "Candidate timezone unknown"),
    };

    let diff = (team - own).abs();
    MatchDetail::rounded(
        policy.score(diff),
        format!("{diff:.1}h difference from team timezone"),
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Visa / relocation
// ────────────────────────────────────────────────────────────────────────────

/// Returns `(visa, relocation)` details.
pub fn score_visa_relocation(
    job: &JobPosting,
    candidate: &CandidateProfile,
) -> (MatchDetail, MatchDetail) {
    let visa = if candidate.requires_sponsorship && !job.offers_sponsorship {
        MatchDetail::new(
            SPONSORSHIP_FRICTION,
            "Candidate requires sponsorship; job does not offer it",
        )
    } else if candidate.requires_sponsorship {
        MatchDetail::new(100, "Sponsorship required and offered")
    } else {
        MatchDetail::new(100, "No sponsorship needed")
    };

    let relocation = if candidate.willing_to_relocate && job.offers_relocation {
        MatchDetail::new(100, "Willing to relocate; relocation assistance offered")
    } else {
        MatchDetail::new(100, "No relocation friction")
    };

    (visa, relocation)
}

// ────────────────────────────────────────────────────────────────────────────
// Threshold checks
// ────────────────────────────────────────────────────────────────────────────

pub fn score_salary(job: &JobPosting, candidate: &CandidateProfile) -> MatchDetail {
    match (candidate.salary_min, job.salary_max) {
        (Some(min), Some(max)) if min > max => MatchDetail::new(
            0,
            format!("Candidate minimum {min} exceeds job maximum {max}"),
        ),
        (Some(min), Some(max)) => {
            MatchDetail::new(100, format!("Candidate minimum {min} within budget {max}"))
        }
        _ => MatchDetail::new(100, "No salary conflict"),
    }
}

pub fn score_seniority(job: &JobPosting, candidate: &CandidateProfile) -> MatchDetail {
    let Some(level) = job.seniority else {
        return MatchDetail::new(100, "No seniority requirement");
    };
    if candidate.desired_seniority.is_empty() {
        return MatchDetail::new(100, "Candidate open to any seniority");
    }
    if candidate.desired_seniority.contains(&level) {
        MatchDetail::new(100, format!("{} matches desired seniority", seniority_label(level)))
    } else {
        MatchDetail::new(
            SENIORITY_MISMATCH,
            format!("{} outside desired seniority", seniority_label(level)),
        )
    }
}

pub fn score_work_mode(job: &JobPosting, candidate: &CandidateProfile) -> MatchDetail {
    let Some(mode) = job.work_mode else {
        return MatchDetail::new(100, "No work mode declared");
    };
    if candidate.accepted_work_modes.is_empty() {
        return MatchDetail::new(100, "Candidate accepts any work mode");
    }
    if candidate.accepted_work_modes.contains(&mode) {
        MatchDetail::new(100, format!("{} accepted", work_mode_label(mode)))
    } else {
        MatchDetail::new(0, format!("{} not accepted by candidate", work_mode_label(mode)))
    }
}

fn seniority_label(level: Seniority) -> &'static str {
    match level {
        Seniority::Intern => "Intern",
        Seniority::Junior => "Junior",
        Seniority::Mid => "Mid-level",
        Seniority::Senior => "Senior",
        Seniority::Lead => "Lead",
        Seniority::Principal => "Principal",
        Seniority::Executive => "Executive",
    }
}

fn work_mode_label(mode: WorkMode) -> &'static str {
    match mode {
        WorkMode::Remote => "Remote",
        WorkMode::Hybrid => "Hybrid",
        WorkMode::Onsite => "Onsite",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_in(timezone: &str, mode: OverlapMode) -> JobPosting {
        JobPosting {
            timezone: Some(timezone.to_string()),
            overlap_mode: Some(mode),
            ..JobPosting::default()
        }
    }

    fn candidate_in(timezone: &str) -> CandidateProfile {
        CandidateProfile {
            timezone: Some(timezone.to_string()),
            ..CandidateProfile::default()
        }
    }

    #[test]
    fn test_utc_offset_table_and_literals() {
        assert_eq!(utc_offset("America/New_York"), Some(-5.0));
        assert_eq!(utc_offset(" EST "), Some(-5.0));
        assert_eq!(utc_offset("UTC+5:30"), Some(5.5));
        assert_eq!(utc_offset("GMT-3"), Some(-3.0));
        assert_eq!(utc_offset("UTC"), Some(0.0));
        assert_eq!(utc_offset("Mars/Olympus"), None);
        assert_eq!(utc_offset("UTC+99"), None);
    }

    #[test]
    fn test_async_first_ignores_gap() {
        let job = job_in("Asia/Tokyo", OverlapMode::AsyncFirst);
        let detail = score_timezone(&job, None, &candidate_in("America/Los_Angeles"));
        assert_eq!(detail.score, 100);

        let unset = JobPosting {
            timezone: Some("Asia/Tokyo".to_string()),
            ..JobPosting::default()
        };
        assert_eq!(score_timezone(&unset, None, &candidate_in("PST")).score, 100);
    }

    #[test]
    fn test_full_overlap_decay() {
        let job = job_in("UTC", OverlapMode::FullOverlap);
        assert_eq!(score_timezone(&job, None, &candidate_in("CET")).score, 100);
        // 3h → 100 − 45
        assert_eq!(score_timezone(&job, None, &candidate_in("UTC+3")).score, 55);
        // 8h → floored at 0
        assert_eq!(score_timezone(&job, None, &candidate_in("PST")).score, 0);
    }

    #[test]
    fn test_overlap_4_plus_decay() {
        let job = job_in("UTC", OverlapMode::Overlap4Plus);
        assert_eq!(score_timezone(&job, None, &candidate_in("UTC-4")).score, 100);
        // 6h → 100 − 40
        assert_eq!(score_timezone(&job, None, &candidate_in("UTC-6")).score, 60);
    }

    #[test]
    fn test_overlap_2_plus_threshold() {
        let job = job_in("UTC", OverlapMode::Overlap2Plus);
        assert_eq!(score_timezone(&job, None, &candidate_in("UTC+6")).score, 100);
        assert_eq!(score_timezone(&job, None, &candidate_in("JST")).score, 50);
    }

    #[test]
    fn test_company_default_timezone_fallback() {
        let job = JobPosting {
            overlap_mode: Some(OverlapMode::FullOverlap),
            ..JobPosting::default()
        };
        let company = CompanyProfile {
            default_timezone: Some("Europe/Berlin".to_string()),
            ..CompanyProfile::default()
        };
        assert_eq!(
            timezone_gap_hours(&job, Some(&company), &candidate_in("UTC")),
            Some(1.0)
        );
        assert_eq!(score_timezone(&job, None, &candidate_in("UTC")).score, 100);
    }

    #[test]
    fn test_unknown_candidate_timezone_is_neutral() {
        let job = job_in("UTC", OverlapMode::FullOverlap);
        let detail = score_timezone(&job, None, &CandidateProfile::default());
        assert_eq!(detail.score, 50);
    }

    #[test]
    fn test_visa_friction() {
        let job = JobPosting::default();
        let candidate = CandidateProfile {
            requires_sponsorship: true,
            ..CandidateProfile::default()
        };
        let (visa, relocation) = score_visa_relocation(&job, &candidate);
        assert_eq!(visa.score, 50);
        assert_eq!(relocation.score, 100);

        let sponsoring = JobPosting {
            offers_sponsorship: true,
            ..JobPosting::default()
        };
        assert_eq!(score_visa_relocation(&sponsoring, &candidate).0.score, 100);
    }

    #[test]
    fn test_salary_strictly_exceeds() {
        let job = JobPosting {
            salary_max: Some(120_000),
            ..JobPosting::default()
        };
        let mut candidate = CandidateProfile {
            salary_min: Some(120_000),
            ..CandidateProfile::default()
        };
        assert_eq!(score_salary(&job, &candidate).score, 100);
        candidate.salary_min = Some(120_001);
        assert_eq!(score_salary(&job, &candidate).score, 0);
    }

    #[test]
    fn test_seniority_and_work_mode() {
        let job = JobPosting {
            seniority: Some(Seniority::Senior),
            work_mode: Some(WorkMode::Onsite),
            ..JobPosting::default()
        };
        let candidate = CandidateProfile {
            desired_seniority: vec![Seniority::Lead],
            accepted_work_modes: vec![WorkMode::Remote, WorkMode::Hybrid],
            ..CandidateProfile::default()
        };
        assert_eq!(score_seniority(&job, &candidate).score, 50);
        assert_eq!(score_work_mode(&job, &candidate).score, 0);

        let open = CandidateProfile::default();
        assert_eq!(score_seniority(&job, &open).score, 100);
        assert_eq!(score_work_mode(&job, &open).score, 100);
    }
}
