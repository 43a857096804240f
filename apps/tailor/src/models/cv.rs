//! Candidate-facing document models handed to the rendering collaborator.
//!
//! `CvContent` identity fields (`name`, `contact.{email, phone, linkedin}`,
//! `education`, `languages`) are guaranteed to equal the `ExtractedProfile`
//! values after the identity overwrite in `pipeline::tailor`. Only the
//! headline, summary, competencies, and experience wording are free text.

use serde::{Deserialize, Serialize};

use crate::models::null_to_default;
use crate::models::profile::{EducationEntry, LanguageEntry};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactBlock {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// A named group of related skills, e.g. "Data & Analytics": ["SQL", "dbt"].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetencyGroup {
    #[serde(default, deserialize_with = "null_to_default")]
    pub category: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// One position on the tailored CV. Achievements may be rephrased and
/// reordered relative to the source, but title/company/dates come from the
/// verified profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvExperience {
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

/// The tailored CV content model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CvContent {
    #[serde(default, deserialize_with = "null_to_default")]
    pub name: String,
    #[serde(default)]
    pub contact: ContactBlock,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub visa_status: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub headline: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub summary: String,
    #[serde(default)]
    pub core_competencies: Vec<CompetencyGroup>,
    #[serde(default)]
    pub experience: Vec<CvExperience>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub languages: Vec<LanguageEntry>,
}

/// The tailored cover-letter content model. No hard identity invariant beyond
/// referencing only verified achievements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverLetterContent {
    #[serde(default)]
    pub recipient_name: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub company_name: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub job_title: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub opening: String,
    /// Ordered body paragraphs.
    #[serde(default)]
    pub body: Vec<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub closing: String,
}
