//! Gap analyzer — deterministic comparison of candidate skills against the
//! job's required/preferred skill lists. No LLM call; always succeeds.
//!
//! Matching is case-insensitive, bidirectional substring containment: a
//! candidate skill covers a required skill if either string contains the
//! other ("SQL" vs "Advanced SQL"). Kept intact for compatibility with the
//! scoring downstream consumers expect; note that very short skill tokens can
//! over-match ("R" inside "HR").

use crate::models::job::{GapAnalysis, JobRequirements};
use crate::models::profile::ExtractedProfile;

/// Match percentage reported when the posting lists no required skills at
/// all — a neutral "probably fine" rather than a spurious 0 or 100.
const NO_REQUIREMENTS_PERCENTAGE: u8 = 70;

/// Compares the profile's skills with the job requirements.
/// Pure and idempotent: identical inputs yield a bit-identical report.
pub fn compare(profile: &ExtractedProfile, requirements: &JobRequirements) -> GapAnalysis {
    let mut matched_required = Vec::new();
    let mut missing_required = Vec::new();

    for required in &requirements.required_skills {
        if profile.skills.iter().any(|s| skills_match(s, required)) {
            matched_required.push(required.clone());
        } else {
            missing_required.push(required.clone());
        }
    }

    let matched_preferred: Vec<String> = requirements
        .preferred_skills
        .iter()
        .filter(|preferred| profile.skills.iter().any(|s| skills_match(s, preferred)))
        .cloned()
        .collect();

    let match_percentage = if requirements.required_skills.is_empty() {
        NO_REQUIREMENTS_PERCENTAGE
    } else {
        let ratio = matched_required.len() as f64 / requirements.required_skills.len() as f64;
        (ratio * 100.0).round() as u8
    };

    GapAnalysis {
        matched_required,
        missing_required,
        matched_preferred,
        match_percentage,
    }
}

/// Case-insensitive bidirectional containment.
fn skills_match(candidate: &str, required: &str) -> bool {
    let candidate = candidate.trim().to_lowercase();
    let required = required.trim().to_lowercase();
    if candidate.is_empty() || required.is_empty() {
        return false;
    }
    candidate.contains(&required) || required.contains(&candidate)
}
