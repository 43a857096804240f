//! Cover-letter writer — one inference call constrained to verified facts,
//! with a factually-neutral template fallback so the pipeline always yields a
//! usable letter.

use tracing::warn;

use crate::llm_client::prompts::NO_FABRICATION_INSTRUCTION;
use crate::llm_client::{infer_json, InferenceProvider};
use crate::models::cv::CoverLetterContent;
use crate::models::job::JobRequirements;
use crate::models::profile::ExtractedProfile;
use crate::pipeline::prompts::{COVER_LETTER_PROMPT_TEMPLATE, COVER_LETTER_SYSTEM};

const COVER_LETTER_MAX_TOKENS: u32 = 2048;

/// Writes the cover letter. Never fails: any inference or parse problem
/// degrades to a generic template that makes no claims beyond the role name.
pub async fn write_cover_letter(
    provider: &dyn InferenceProvider,
    profile: &ExtractedProfile,
    requirements: &JobRequirements,
) -> CoverLetterContent {
    let letter = match build_prompt(profile, requirements) {
        Ok(prompt) => {
            match infer_json::<CoverLetterContent>(
                provider,
                &prompt,
                COVER_LETTER_SYSTEM,
                COVER_LETTER_MAX_TOKENS,
            )
            .await
            {
                Ok(letter) => Some(letter),
                Err(e) => {
                    warn!("Cover letter generation failed, using template fallback: {e}");
                    None
                }
            }
        }
        Err(e) => {
            warn!("Could not serialize cover letter prompt inputs: {e}");
            None
        }
    };

    letter.unwrap_or_else(|| fallback_letter(profile, requirements))
}

fn build_prompt(
    profile: &ExtractedProfile,
    requirements: &JobRequirements,
) -> Result<String, serde_json::Error> {
    Ok(COVER_LETTER_PROMPT_TEMPLATE
        .replace("{no_fabrication}", NO_FABRICATION_INSTRUCTION)
        .replace("{profile_json}", &serde_json::to_string_pretty(profile)?)
        .replace(
            "{requirements_json}",
            &serde_json::to_string_pretty(requirements)?,
        )
        .replace("{job_title}", &requirements.job_title)
        .replace("{company}", &requirements.company))
}

/// Generic but factually-neutral letter. Mentions the role and the
/// candidate's name; claims nothing the profile does not contain.
fn fallback_letter(profile: &ExtractedProfile, requirements: &JobRequirements) -> CoverLetterContent {
    let role = if requirements.job_title.is_empty() {
        "the advertised role".to_string()
    } else {
        format!("the {} role", requirements.job_title)
    };
    let at_company = if requirements.company.is_empty() {
        String::new()
    } else {
        format!(" at {}", requirements.company)
    };

    let background = match &profile.current_title {
        Some(title) => format!("my background as {title}"),
        None => "my professional background".to_string(),
    };

    CoverLetterContent {
        recipient_name: None,
        company_name: requirements.company.clone(),
        job_title: requirements.job_title.clone(),
        opening: format!("I am writing to apply for {role}{at_company}."),
        body: vec![
            format!(
                "I believe {background} is a good match for this position, and my \
                 attached CV sets out the relevant experience in detail."
            ),
            "I would welcome the opportunity to discuss how my experience aligns \
             with your team's needs."
                .to_string(),
        ],
        closing: format!("Thank you for your consideration.\n\n{}", profile.name),
    }
}
