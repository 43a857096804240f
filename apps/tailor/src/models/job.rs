//! Job-side records: the raw posting handed in by the ingestion layer, the
//! structured requirements the analyzer extracts from it, and the
//! deterministic gap report comparing them against the candidate's skills.

use serde::{Deserialize, Serialize};

use crate::models::null_to_default;

/// Raw job posting as received from the upstream ingestion layer.
/// `title`/`company`/`location` are optional hints the uploader may supply;
/// the analyzer fills them from the text when absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobPosting {
    pub raw_text: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Structured requirements extracted from a job posting.
/// Created once per request; immutable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRequirements {
    #[serde(default, deserialize_with = "null_to_default")]
    pub job_title: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub company: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    #[serde(default)]
    pub key_responsibilities: Vec<String>,
    #[serde(default)]
    pub years_required: Option<String>,
    #[serde(default)]
    pub must_haves: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Deterministic skill-gap report. Pure function of a profile and a
/// `JobRequirements` — bit-identical for identical inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub matched_required: Vec<String>,
    pub missing_required: Vec<String>,
    pub matched_preferred: Vec<String>,
    /// Integer 0–100; 70 by convention when the posting lists no required skills.
    pub match_percentage: u8,
}
