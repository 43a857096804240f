//! CV tailorer — rewrites and reorders the candidate's verified experience to
//! emphasize relevance to the target job, then re-injects identity fields.
//!
//! The no-fabrication guarantee is layered: prompt constraints first, then the
//! deterministic [`enforce_identity`] overwrite, which runs on EVERY path —
//! whether the model produced the CV or the fallback synthesized it. The
//! overwrite is the load-bearing layer; the model is never trusted with
//! identity fields.

use tracing::warn;

use crate::llm_client::prompts::NO_FABRICATION_INSTRUCTION;
use crate::llm_client::{infer_json, InferenceProvider};
use crate::models::cv::{CompetencyGroup, ContactBlock, CvContent, CvExperience};
use crate::models::job::{GapAnalysis, JobRequirements};
use crate::models::profile::ExtractedProfile;
use crate::pipeline::prompts::{TAILOR_PROMPT_TEMPLATE, TAILOR_SYSTEM};
use crate::pipeline::region::Region;

const TAILOR_MAX_TOKENS: u32 = 4096;

/// Produces the tailored CV. Never fails: inference or parse problems degrade
/// to a deterministic CV built straight from the profile, and the identity
/// overwrite runs unconditionally at the end.
pub async fn tailor_cv(
    provider: &dyn InferenceProvider,
    profile: &ExtractedProfile,
    requirements: &JobRequirements,
    gap: &GapAnalysis,
    region: Region,
) -> CvContent {
    let mut cv = match build_tailor_prompt(profile, requirements, gap) {
        Ok(prompt) => {
            match infer_json::<CvContent>(provider, &prompt, TAILOR_SYSTEM, TAILOR_MAX_TOKENS).await
            {
                Ok(cv) => cv,
                Err(e) => {
                    warn!("Tailoring failed, falling back to profile-derived CV: {e}");
                    fallback_cv(profile, requirements)
                }
            }
        }
        Err(e) => {
            warn!("Could not serialize tailoring prompt inputs: {e}");
            fallback_cv(profile, requirements)
        }
    };

    enforce_identity(&mut cv, profile, region);
    cv
}

fn build_tailor_prompt(
    profile: &ExtractedProfile,
    requirements: &JobRequirements,
    gap: &GapAnalysis,
) -> Result<String, serde_json::Error> {
    Ok(TAILOR_PROMPT_TEMPLATE
        .replace("{no_fabrication}", NO_FABRICATION_INSTRUCTION)
        .replace("{profile_json}", &serde_json::to_string_pretty(profile)?)
        .replace(
            "{requirements_json}",
            &serde_json::to_string_pretty(requirements)?,
        )
        .replace("{gap_json}", &serde_json::to_string_pretty(gap)?))
}

/// Overwrites identity fields with the exact extracted values.
///
/// Unconditional: runs after both the generated and the fallback path. Only
/// non-null contact fields are copied; fields absent from the profile are
/// left as the generation produced them (the prompt already forbids inventing
/// them). Nationality/visa are cleared unless the jurisdiction admits them
/// AND the profile actually contains them.
pub fn enforce_identity(cv: &mut CvContent, profile: &ExtractedProfile, region: Region) {
    cv.name = profile.name.clone();

    if profile.email.is_some() {
        cv.contact.email = profile.email.clone();
    }
    if profile.phone.is_some() {
        cv.contact.phone = profile.phone.clone();
    }
    if profile.linkedin.is_some() {
        cv.contact.linkedin = profile.linkedin.clone();
    }

    cv.education = profile.education.clone();
    cv.languages = profile.languages.clone();

    if region.includes_personal_details() {
        cv.nationality = profile.nationality.clone();
        cv.visa_status = profile.visa_status.clone();
    } else {
        cv.nationality = None;
        cv.visa_status = None;
    }
}

/// Minimal CV synthesized directly from the verified profile. No generation,
/// no job-specific rewriting — but never empty, and never outside the facts.
fn fallback_cv(profile: &ExtractedProfile, requirements: &JobRequirements) -> CvContent {
    let headline = profile
        .current_title
        .clone()
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| requirements.job_title.clone());

    let mut summary = String::new();
    if let Some(title) = &profile.current_title {
        summary.push_str(title);
    } else {
        summary.push_str(&profile.name);
    }
    if let Some(years) = &profile.years_experience {
        summary.push_str(&format!(" with {years} of experience"));
    }
    summary.push('.');
    if !profile.skills.is_empty() {
        summary.push_str(&format!(" Skilled in {}.", profile.skills.join(", ")));
    }

    let core_competencies = if profile.skills.is_empty() {
        Vec::new()
    } else {
        vec![CompetencyGroup {
            category: "Core Skills".to_string(),
            skills: profile.skills.clone(),
        }]
    };

    CvContent {
        name: profile.name.clone(),
        contact: ContactBlock {
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            linkedin: profile.linkedin.clone(),
            location: profile.location.clone(),
        },
        nationality: profile.nationality.clone(),
        visa_status: profile.visa_status.clone(),
        headline,
        summary,
        core_competencies,
        experience: profile
            .experience
            .iter()
            .map(|e| CvExperience {
                title: e.title.clone(),
                company: e.company.clone(),
                location: e.location.clone(),
                dates: e.dates.clone(),
                achievements: e.achievements.clone(),
            })
            .collect(),
        education: profile.education.clone(),
        certifications: profile.certifications.clone(),
        languages: profile.languages.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{EducationEntry, ExperienceEntry, LanguageEntry};
    use crate::pipeline::testing::MockProvider;

    fn sample_profile() -> ExtractedProfile {
        ExtractedProfile {
            name: "Jane Doe".to_string(),
            email: Some("jane@x.com".to_string()),
            phone: Some("+49 151 0000000".to_string()),
            linkedin: None,
            current_title: Some("Senior Product Manager".to_string()),
            years_experience: Some("5 years".to_string()),
            nationality: Some("German".to_string()),
            skills: vec!["Agile".to_string(), "SQL".to_string()],
            experience: vec![ExperienceEntry {
                title: "Senior Product Manager".to_string(),
                company: "Acme GmbH".to_string(),
                location: Some("Berlin".to_string()),
                dates: Some("2021 - present".to_string()),
                achievements: vec!["Launched self-serve onboarding".to_string()],
            }],
            education: vec![EducationEntry {
                degree: "BSc Computer Science".to_string(),
                institution: "TU Berlin".to_string(),
                year: "2016".to_string(),
            }],
            languages: vec![LanguageEntry {
                language: "English".to_string(),
                level: "Fluent".to_string(),
            }],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_identity_overwrite_wins_over_model_output() {
        // Regression: the model returns a different name and email — the
        // deterministic overwrite must win.
        let provider = MockProvider::new(vec![
            r#"{
                "name": "John Smith",
                "contact": {"email": "john@fabricated.com", "phone": null, "linkedin": null, "location": null},
                "headline": "Product leader",
                "summary": "A summary.",
                "education": [{"degree": "PhD", "institution": "Fabricated U", "year": "1999"}],
                "languages": [{"language": "Klingon", "level": "Native"}]
            }"#,
        ]);
        let profile = sample_profile();
        let cv = tailor_cv(
            &provider,
            &profile,
            &JobRequirements::default(),
            &crate::pipeline::gap::compare(&profile, &JobRequirements::default()),
            Region::Global,
        )
        .await;

        assert_eq!(cv.name, "Jane Doe");
        assert_eq!(cv.contact.email.as_deref(), Some("jane@x.com"));
        assert_eq!(cv.contact.phone.as_deref(), Some("+49 151 0000000"));
        assert_eq!(cv.education, profile.education);
        assert_eq!(cv.languages, profile.languages);
        // Free-text fields stay as generated.
        assert_eq!(cv.headline, "Product leader");
    }

    #[tokio::test]
    async fn test_unparsable_response_falls_back_to_profile_cv() {
        let provider = MockProvider::new(vec!["I'd be happy to help with that!"]);
        let profile = sample_profile();
        let cv = tailor_cv(
            &provider,
            &profile,
            &JobRequirements::default(),
            &crate::pipeline::gap::compare(&profile, &JobRequirements::default()),
            Region::Eu,
        )
        .await;

        assert_eq!(cv.name, "Jane Doe");
        assert_eq!(cv.headline, "Senior Product Manager");
        assert!(!cv.summary.is_empty());
        assert_eq!(cv.experience.len(), 1);
        assert_eq!(cv.experience[0].company, "Acme GmbH");
    }

    #[tokio::test]
    async fn test_transport_failure_also_falls_back() {
        let provider = MockProvider::failing();
        let profile = sample_profile();
        let cv = tailor_cv(
            &provider,
            &profile,
            &JobRequirements::default(),
            &crate::pipeline::gap::compare(&profile, &JobRequirements::default()),
            Region::Global,
        )
        .await;
        assert_eq!(cv.name, "Jane Doe");
        assert!(!cv.core_competencies.is_empty());
    }

    #[test]
    fn test_personal_details_gated_by_region() {
        let profile = sample_profile();

        let mut eu_cv = CvContent::default();
        enforce_identity(&mut eu_cv, &profile, Region::Eu);
        assert_eq!(eu_cv.nationality.as_deref(), Some("German"));

        let mut us_cv = CvContent::default();
        enforce_identity(&mut us_cv, &profile, Region::Us);
        assert!(us_cv.nationality.is_none());
        assert!(us_cv.visa_status.is_none());
    }

    #[test]
    fn test_overwrite_skips_contact_fields_absent_from_profile() {
        let profile = sample_profile(); // linkedin: None
        let mut cv = CvContent::default();
        cv.contact.linkedin = Some("linkedin.com/in/generated".to_string());
        enforce_identity(&mut cv, &profile, Region::Global);
        // Null profile fields are not overwritten; the prompt layer guards them.
        assert_eq!(
            cv.contact.linkedin.as_deref(),
            Some("linkedin.com/in/generated")
        );
    }

    #[test]
    fn test_fallback_cv_uses_only_profile_vocabulary() {
        let profile = sample_profile();
        let cv = fallback_cv(&profile, &JobRequirements::default());
        assert!(cv.summary.contains("5 years"));
        assert!(cv.summary.contains("Agile"));
        assert_eq!(cv.certifications, profile.certifications);
    }
}
