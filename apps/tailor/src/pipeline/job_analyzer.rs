//! Job requirement analyzer — converts posting text into `JobRequirements`.
//!
//! Deliberately never fails the pipeline: a posting the model can't parse
//! still leaves the candidate's own verified data able to support a CV, so
//! any failure here degrades to an empty-requirements record.

use tracing::{info, warn};

use crate::llm_client::{infer_json, InferenceProvider};
use crate::models::job::{JobPosting, JobRequirements};
use crate::pipeline::prompts::{JOB_ANALYSIS_PROMPT_TEMPLATE, JOB_ANALYSIS_SYSTEM};

const ANALYSIS_MAX_TOKENS: u32 = 2048;

/// Analyzes a job posting. Falls back to empty requirements (seeded with any
/// title/company hints the caller supplied) on any inference or parse failure.
pub async fn analyze_job(provider: &dyn InferenceProvider, job: &JobPosting) -> JobRequirements {
    let prompt = JOB_ANALYSIS_PROMPT_TEMPLATE.replace("{job_text}", &job.raw_text);

    match infer_json::<JobRequirements>(provider, &prompt, JOB_ANALYSIS_SYSTEM, ANALYSIS_MAX_TOKENS)
        .await
    {
        Ok(mut requirements) => {
            // Uploader-supplied hints win over whatever the model read out.
            if let Some(title) = &job.title {
                requirements.job_title = title.clone();
            }
            if let Some(company) = &job.company {
                requirements.company = company.clone();
            }
            info!(
                "Job analyzed: '{}' at '{}', {} required / {} preferred skills",
                requirements.job_title,
                requirements.company,
                requirements.required_skills.len(),
                requirements.preferred_skills.len()
            );
            requirements
        }
        Err(e) => {
            warn!("Job analysis failed, degrading to empty requirements: {e}");
            fallback_requirements(job)
        }
    }
}

/// Empty-lists requirements so downstream stages degrade gracefully.
fn fallback_requirements(job: &JobPosting) -> JobRequirements {
    JobRequirements {
        job_title: job.title.clone().unwrap_or_default(),
        company: job.company.clone().unwrap_or_default(),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::testing::MockProvider;

    fn posting(raw_text: &str, title: Option<&str>, company: Option<&str>) -> JobPosting {
        JobPosting {
            raw_text: raw_text.to_string(),
            title: title.map(String::from),
            company: company.map(String::from),
            location: None,
        }
    }

    #[tokio::test]
    async fn test_parses_requirements_from_valid_response() {
        let provider = MockProvider::new(vec![
            r#"{"job_title": "Senior PM", "company": "Acme",
                "required_skills": ["Agile", "SQL"], "preferred_skills": ["Roadmapping"]}"#,
        ]);
        let req = analyze_job(&provider, &posting("Senior PM wanted...", None, None)).await;
        assert_eq!(req.job_title, "Senior PM");
        assert_eq!(req.required_skills, vec!["Agile", "SQL"]);
    }

    #[tokio::test]
    async fn test_parse_failure_degrades_to_empty_requirements() {
        let provider = MockProvider::new(vec!["no json at all"]);
        let req = analyze_job(&provider, &posting("Some job", None, None)).await;
        assert!(req.required_skills.is_empty());
        assert!(req.preferred_skills.is_empty());
        assert!(req.keywords.is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_degrades_to_empty_requirements() {
        let provider = MockProvider::failing();
        let req = analyze_job(&provider, &posting("Some job", None, None)).await;
        assert!(req.required_skills.is_empty());
    }

    #[tokio::test]
    async fn test_fallback_keeps_caller_supplied_title_and_company() {
        let provider = MockProvider::new(vec!["garbage"]);
        let req = analyze_job(
            &provider,
            &posting("Some job", Some("Senior PM"), Some("Acme")),
        )
        .await;
        assert_eq!(req.job_title, "Senior PM");
        assert_eq!(req.company, "Acme");
    }

    #[tokio::test]
    async fn test_caller_hints_override_model_output() {
        let provider = MockProvider::new(vec![
            r#"{"job_title": "PM (m/f/d)", "company": "ACME GmbH & Co. KG"}"#,
        ]);
        let req = analyze_job(
            &provider,
            &posting("Some job", Some("Senior PM"), Some("Acme")),
        )
        .await;
        assert_eq!(req.job_title, "Senior PM");
        assert_eq!(req.company, "Acme");
    }
}
