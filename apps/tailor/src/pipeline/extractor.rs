//! Fact extractor — converts raw profile/CV text into an `ExtractedProfile`.
//!
//! This is the only stage allowed to abort the pipeline: without a minimum of
//! source text there is nothing to verify against, and without a name there is
//! no CV subject. Everything downstream degrades instead of failing.

use tracing::info;

use crate::errors::PipelineError;
use crate::llm_client::prompts::NULL_FOR_MISSING_INSTRUCTION;
use crate::llm_client::{infer_json, InferenceProvider, LlmError};
use crate::models::profile::ExtractedProfile;
use crate::pipeline::prompts::{EXTRACTION_PROMPT_TEMPLATE, EXTRACTION_SYSTEM};
use crate::pipeline::CvDocument;

/// Minimum combined input length. Below this the model has nothing real to
/// extract and would be tempted to pad.
const MIN_INPUT_CHARS: usize = 100;

const EXTRACTION_MAX_TOKENS: u32 = 4096;

/// Extracts the verified fact set from profile text plus any uploaded CVs.
pub async fn extract_profile(
    provider: &dyn InferenceProvider,
    profile_text: &str,
    cv_texts: &[CvDocument],
) -> Result<ExtractedProfile, PipelineError> {
    let source_text = combine_sources(profile_text, cv_texts);

    let chars = source_text.chars().count();
    if chars < MIN_INPUT_CHARS {
        return Err(PipelineError::InsufficientData { chars });
    }

    let prompt = EXTRACTION_PROMPT_TEMPLATE
        .replace("{null_instruction}", NULL_FOR_MISSING_INSTRUCTION)
        .replace("{source_text}", &source_text);

    let raw: ExtractedProfile =
        infer_json(provider, &prompt, EXTRACTION_SYSTEM, EXTRACTION_MAX_TOKENS)
            .await
            .map_err(|e| match e {
                LlmError::NoJson => {
                    PipelineError::ExtractionParse("no JSON object found in response".to_string())
                }
                LlmError::Parse(err) => PipelineError::ExtractionParse(err.to_string()),
                other => PipelineError::Llm(other),
            })?;

    let profile = normalize_profile(raw)?;
    info!(
        "Extracted profile for '{}': {} skills, {} positions",
        profile.name,
        profile.skills.len(),
        profile.experience.len()
    );
    Ok(profile)
}

/// Concatenates the profile text and each CV under a filename header.
fn combine_sources(profile_text: &str, cv_texts: &[CvDocument]) -> String {
    let mut combined = profile_text.trim().to_string();
    for doc in cv_texts {
        combined.push_str("\n\n--- ");
        combined.push_str(&doc.filename);
        combined.push_str(" ---\n");
        combined.push_str(doc.text.trim());
    }
    combined
}

/// Cleans model-output artifacts and enforces the name requirement.
///
/// - `"null"` placeholder strings collapse to `None`
/// - education rows with no institution are dropped
/// - an education year of `"null"` becomes the empty string
fn normalize_profile(mut profile: ExtractedProfile) -> Result<ExtractedProfile, PipelineError> {
    profile.name = profile.name.trim().to_string();
    if profile.name.is_empty() || profile.name.eq_ignore_ascii_case("null") {
        return Err(PipelineError::NameMissing);
    }

    for field in [
        &mut profile.email,
        &mut profile.phone,
        &mut profile.linkedin,
        &mut profile.location,
        &mut profile.nationality,
        &mut profile.visa_status,
        &mut profile.current_title,
        &mut profile.years_experience,
    ] {
        clean_scalar(field);
    }

    profile
        .education
        .retain(|entry| !entry.institution.trim().is_empty());
    for entry in &mut profile.education {
        if entry.year.trim().eq_ignore_ascii_case("null") {
            entry.year = String::new();
        }
    }

    Ok(profile)
}

/// Trims a scalar; `""` and the `"null"` placeholder collapse to `None`.
fn clean_scalar(field: &mut Option<String>) {
    if let Some(value) = field.take() {
        let trimmed = value.trim();
        if !trimmed.is_empty() && !trimmed.eq_ignore_ascii_case("null") {
            *field = Some(trimmed.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::EducationEntry;
    use crate::pipeline::testing::MockProvider;

    fn doc(filename: &str, text: &str) -> CvDocument {
        CvDocument {
            filename: filename.to_string(),
            text: text.to_string(),
        }
    }

    const PROFILE_TEXT: &str = "Jane Doe, jane@x.com, Berlin. Senior Product Manager with \
        5 years of experience across B2B SaaS. Skills: Agile, SQL, stakeholder management.";

    #[tokio::test]
    async fn test_short_input_fails_with_insufficient_data() {
        let provider = MockProvider::new(vec![]);
        let result = extract_profile(&provider, "Jane Doe", &[]).await;
        assert!(matches!(
            result,
            Err(PipelineError::InsufficientData { .. })
        ));
    }

    #[tokio::test]
    async fn test_cv_texts_count_toward_minimum_length() {
        let provider = MockProvider::new(vec![r#"{"name": "Jane Doe"}"#]);
        let cvs = vec![doc("cv.pdf", PROFILE_TEXT)];
        let result = extract_profile(&provider, "short", &cvs).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_missing_name_fails_with_name_missing() {
        let provider = MockProvider::new(vec![r#"{"name": null, "skills": ["SQL"]}"#]);
        let result = extract_profile(&provider, PROFILE_TEXT, &[]).await;
        assert!(matches!(result, Err(PipelineError::NameMissing)));
    }

    #[tokio::test]
    async fn test_literal_null_name_fails_with_name_missing() {
        let provider = MockProvider::new(vec![r#"{"name": "null"}"#]);
        let result = extract_profile(&provider, PROFILE_TEXT, &[]).await;
        assert!(matches!(result, Err(PipelineError::NameMissing)));
    }

    #[tokio::test]
    async fn test_null_nested_scalars_are_normalized_not_fatal() {
        // The prompt instructs the model to null absent scalars; an explicit
        // null inside a nested entry must normalize, never abort extraction.
        let provider = MockProvider::new(vec![
            r#"{
                "name": "Jane Doe",
                "email": null,
                "education": [{"degree": "BSc", "institution": "TU Berlin", "year": null}],
                "languages": [{"language": "English", "level": null}],
                "experience": [{"title": null, "company": "Acme", "achievements": []}]
            }"#,
        ]);
        let profile = extract_profile(&provider, PROFILE_TEXT, &[]).await.unwrap();
        assert_eq!(profile.education.len(), 1);
        assert_eq!(profile.education[0].year, "");
        assert_eq!(profile.languages[0].level, "");
        assert_eq!(profile.experience[0].company, "Acme");
        assert!(profile.email.is_none());
    }

    #[tokio::test]
    async fn test_non_json_response_fails_with_extraction_parse() {
        let provider = MockProvider::new(vec!["I'm sorry, I can't produce that."]);
        let result = extract_profile(&provider, PROFILE_TEXT, &[]).await;
        assert!(matches!(result, Err(PipelineError::ExtractionParse(_))));
    }

    #[tokio::test]
    async fn test_extracts_profile_from_valid_response() {
        let provider = MockProvider::new(vec![
            r#"{"name": "Jane Doe", "email": "jane@x.com", "skills": ["Agile", "SQL"]}"#,
        ]);
        let profile = extract_profile(&provider, PROFILE_TEXT, &[]).await.unwrap();
        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.email.as_deref(), Some("jane@x.com"));
        assert_eq!(profile.skills, vec!["Agile", "SQL"]);
    }

    #[test]
    fn test_normalize_drops_education_without_institution() {
        let profile = ExtractedProfile {
            name: "Jane Doe".to_string(),
            education: vec![
                EducationEntry {
                    degree: "BSc".to_string(),
                    institution: "TU Berlin".to_string(),
                    year: "2016".to_string(),
                },
                EducationEntry {
                    degree: "Online course".to_string(),
                    institution: "".to_string(),
                    year: "2020".to_string(),
                },
            ],
            ..Default::default()
        };
        let normalized = normalize_profile(profile).unwrap();
        assert_eq!(normalized.education.len(), 1);
        assert_eq!(normalized.education[0].institution, "TU Berlin");
    }

    #[test]
    fn test_normalize_clears_null_year() {
        let profile = ExtractedProfile {
            name: "Jane Doe".to_string(),
            education: vec![EducationEntry {
                degree: "BSc".to_string(),
                institution: "TU Berlin".to_string(),
                year: "null".to_string(),
            }],
            ..Default::default()
        };
        let normalized = normalize_profile(profile).unwrap();
        assert_eq!(normalized.education[0].year, "");
    }

    #[test]
    fn test_normalize_collapses_null_placeholder_scalars() {
        let profile = ExtractedProfile {
            name: "Jane Doe".to_string(),
            email: Some("null".to_string()),
            phone: Some("  ".to_string()),
            linkedin: Some("linkedin.com/in/janedoe".to_string()),
            ..Default::default()
        };
        let normalized = normalize_profile(profile).unwrap();
        assert!(normalized.email.is_none());
        assert!(normalized.phone.is_none());
        assert_eq!(normalized.linkedin.as_deref(), Some("linkedin.com/in/janedoe"));
    }
}
