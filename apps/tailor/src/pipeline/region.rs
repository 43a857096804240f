//! Region classifier — maps a job posting to a jurisdiction tag.
//!
//! Pure substring matching against curated gazetteers, no LLM call. The tag
//! only *gates* whether jurisdiction-specific fields (nationality, visa
//! status) already present in the extracted profile may appear on the CV —
//! it never causes those fields to be invented.

use serde::{Deserialize, Serialize};

/// Jurisdiction tag for a job posting. Priority order on classification is
/// EU → UK → US → GLOBAL, first match wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    Eu,
    Uk,
    Us,
    #[default]
    Global,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Eu => "EU",
            Region::Uk => "UK",
            Region::Us => "US",
            Region::Global => "GLOBAL",
        }
    }

    /// Whether CVs for this jurisdiction customarily carry personal details
    /// (nationality, work-permit status). US-style résumés omit them.
    pub fn includes_personal_details(&self) -> bool {
        matches!(self, Region::Eu | Region::Uk)
    }
}

const EU_MARKERS: &[&str] = &[
    "germany", "berlin", "munich", "hamburg", "frankfurt",
    "france", "paris", "lyon",
    "netherlands", "amsterdam", "rotterdam",
    "spain", "madrid", "barcelona",
    "italy", "milan", "rome",
    "ireland", "dublin",
    "belgium", "brussels",
    "austria", "vienna",
    "poland", "warsaw", "krakow",
    "portugal", "lisbon",
    "sweden", "stockholm",
    "denmark", "copenhagen",
    "finland", "helsinki",
    "czech", "prague",
    "romania", "bucharest",
    "hungary", "budapest",
    "greece", "athens",
    "european union", "schengen", "emea",
];

const UK_MARKERS: &[&str] = &[
    "united kingdom", "england", "scotland", "wales",
    "london", "manchester", "birmingham", "edinburgh", "glasgow",
    "leeds", "bristol", "cambridge, uk", "oxford, uk",
    ", uk", "(uk)", "uk-based", "uk based",
];

const US_MARKERS: &[&str] = &[
    "united states", "usa", "u.s.",
    "new york", "san francisco", "bay area", "silicon valley",
    "california", "texas", "seattle", "boston", "chicago",
    "austin", "denver", "atlanta", "miami", "los angeles",
    "washington, dc", "remote (us)", "remote - us", "us-based", "us based",
];

/// Classifies a job into a jurisdiction from its text and location string.
/// Deterministic and idempotent: identical input always yields the same tag.
pub fn classify(job_text: &str, location: &str) -> Region {
    let haystack = format!("{} {}", location, job_text).to_lowercase();

    for (markers, region) in [
        (EU_MARKERS, Region::Eu),
        (UK_MARKERS, Region::Uk),
        (US_MARKERS, Region::Us),
    ] {
        if markers.iter().any(|m| haystack.contains(m)) {
            return region;
        }
    }
    Region::Global
}
