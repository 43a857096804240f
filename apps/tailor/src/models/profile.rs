//! ExtractedProfile — the verified fact set for one candidate.
//!
//! Every scalar in this record must appear verbatim in the source documents.
//! Created once per generation request by the fact extractor and immutable
//! afterwards; the tailoring and cover-letter stages may rephrase around these
//! facts but the identity overwrite copies them back into the final CV as-is.

use serde::{Deserialize, Serialize};

use crate::models::null_to_default;

/// One position in the candidate's work history, in the order given by the
/// source (insertion order = chronological as written).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default, deserialize_with = "null_to_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub dates: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default, deserialize_with = "null_to_default")]
    pub degree: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub institution: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageEntry {
    #[serde(default, deserialize_with = "null_to_default")]
    pub language: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub level: String,
}

/// The full fact set extracted from profile text and uploaded CVs.
///
/// `name` is the only required field — extraction hard-fails without it.
/// All other fields are `None`/empty when absent from the source, never
/// inferred. An explicit JSON `null` anywhere decodes as absent rather than
/// failing the parse: validation decides what absence means.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedProfile {
    #[serde(default, deserialize_with = "null_to_default")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Only ever shown on CVs for jurisdictions where it is customary.
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub visa_status: Option<String>,
    #[serde(default)]
    pub current_title: Option<String>,
    #[serde(default)]
    pub years_experience: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub languages: Vec<LanguageEntry>,
}
