//! The tailoring pipeline — explicit typed stages composed by [`run_pipeline`].
//!
//! Flow: region classification (pure) → fact extraction ∥ job analysis →
//! gap analysis → CV tailoring + identity overwrite → optional cover letter.
//!
//! Fact extraction is the only stage that can abort (insufficient input,
//! missing name, unparseable model output). Every later stage degrades to a
//! deterministic fallback: a formatting problem in job analysis or generation
//! must not deny a result that the candidate's own verified data can support.

pub mod cover_letter;
pub mod extractor;
pub mod gap;
pub mod job_analyzer;
pub mod progress;
pub mod prompts;
pub mod region;
pub mod tailor;

use serde::Deserialize;
use tracing::info;

use crate::errors::PipelineError;
use crate::llm_client::InferenceProvider;
use crate::models::cv::{CoverLetterContent, CvContent};
use crate::models::job::{GapAnalysis, JobPosting, JobRequirements};
use crate::models::profile::ExtractedProfile;
use crate::pipeline::progress::ProgressReporter;
use crate::pipeline::region::Region;

/// One uploaded CV, already reduced to text by the ingestion layer.
#[derive(Debug, Clone, Deserialize)]
pub struct CvDocument {
    pub filename: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateOptions {
    #[serde(default = "default_true")]
    pub generate_cover_letter: bool,
}

fn default_true() -> bool {
    true
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            generate_cover_letter: true,
        }
    }
}

/// Everything one generation request needs, as handed over by the upstream
/// ingestion layer (file parsing and posting scraping happen there).
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineRequest {
    pub profile_text: String,
    #[serde(default)]
    pub cv_texts: Vec<CvDocument>,
    pub job: JobPosting,
    #[serde(default)]
    pub options: GenerateOptions,
}

/// The full result of one pipeline run, ready for the rendering collaborator.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub region: Region,
    pub profile: ExtractedProfile,
    pub requirements: JobRequirements,
    pub gap: GapAnalysis,
    pub cv: CvContent,
    pub cover_letter: Option<CoverLetterContent>,
}

/// Runs the full tailoring pipeline for one request.
///
/// Region classification and job analysis have no data dependency on fact
/// extraction, so extraction and job analysis run concurrently; all later
/// stages consume their predecessor's output and are strictly sequential.
pub async fn run_pipeline(
    provider: &dyn InferenceProvider,
    request: &PipelineRequest,
    progress: &ProgressReporter,
) -> Result<PipelineOutput, PipelineError> {
    let location = request.job.location.as_deref().unwrap_or("");
    let region = region::classify(&request.job.raw_text, location);
    info!("Job classified as {} jurisdiction", region.as_str());

    progress.report("Reading your documents and analyzing the job posting...");
    let (profile, requirements) = tokio::join!(
        extractor::extract_profile(provider, &request.profile_text, &request.cv_texts),
        job_analyzer::analyze_job(provider, &request.job),
    );
    let profile = profile?;

    progress.report("Comparing your skills with the job requirements...");
    let gap = gap::compare(&profile, &requirements);
    info!(
        "Gap analysis: {}% match, {} required skills missing",
        gap.match_percentage,
        gap.missing_required.len()
    );

    progress.report("Tailoring your CV to the role...");
    let cv = tailor::tailor_cv(provider, &profile, &requirements, &gap, region).await;

    progress.report("Verifying your personal details...");

    let cover_letter = if request.options.generate_cover_letter {
        progress.report("Writing your cover letter...");
        Some(cover_letter::write_cover_letter(provider, &profile, &requirements).await)
    } else {
        None
    };

    progress.report("Done! Your documents are ready.");

    Ok(PipelineOutput {
        region,
        profile,
        requirements,
        gap,
        cv,
        cover_letter,
    })
}
