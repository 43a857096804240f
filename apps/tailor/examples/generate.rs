//! Runs the tailoring pipeline against the live API with inline sample data.
//!
//! Usage: ANTHROPIC_API_KEY=... cargo run --example generate

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tailor::config::Config;
use tailor::llm_client::LlmClient;
use tailor::models::job::JobPosting;
use tailor::pipeline::progress::ProgressReporter;
use tailor::pipeline::{run_pipeline, GenerateOptions, PipelineRequest};
use tailor::session::{RenderedArtifact, SessionStore};

const PROFILE_TEXT: &str = "Jane Doe, jane@x.com, Berlin. Senior Product Manager with 5 years \
    of experience in B2B SaaS. Skills: Agile, SQL, stakeholder management. At Acme GmbH \
    (2021 - present) launched the self-serve onboarding flow and cut churn by 12%.";

const JOB_TEXT: &str = "Senior Product Manager at Initech, Berlin, Germany. \
    Required: Agile, SQL, Roadmapping. Preferred: B2B SaaS background. \
    You will own the quarterly roadmap and partner with engineering.";

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let llm = LlmClient::new(config.anthropic_api_key.clone());
    let store = SessionStore::new(config.session_ttl_ms);

    let request = PipelineRequest {
        profile_text: PROFILE_TEXT.to_string(),
        cv_texts: vec![],
        job: JobPosting {
            raw_text: JOB_TEXT.to_string(),
            title: None,
            company: Some("Initech".to_string()),
            location: Some("Berlin, Germany".to_string()),
        },
        options: GenerateOptions::default(),
    };

    let (progress, mut rx) = ProgressReporter::channel();
    let relay = tokio::spawn(async move {
        while let Some(status) = rx.recv().await {
            println!(">> {status}");
        }
    });

    let output = run_pipeline(&llm, &request, &progress).await?;
    drop(progress);
    relay.await?;

    println!("\nRegion: {}", output.region.as_str());
    println!("Match: {}%", output.gap.match_percentage);
    println!("CV:\n{}", serde_json::to_string_pretty(&output.cv)?);
    if let Some(letter) = &output.cover_letter {
        println!("Cover letter:\n{}", serde_json::to_string_pretty(letter)?);
    }

    // Rendering is a separate collaborator; stash the content snapshot so a
    // download endpoint could serve it later.
    let session_id = store.put(
        RenderedArtifact {
            bytes: bytes::Bytes::new(),
            filename: format!("{}_CV.pdf", output.cv.name.replace(' ', "_")),
            content: serde_json::to_value(&output.cv)?,
        },
        None,
    );
    info!("Artifacts stored under session {session_id}");

    Ok(())
}
