//! Tailor — fact-verified CV and cover-letter generation pipeline.
//!
//! Takes a job seeker's raw profile text (LinkedIn export, prior CVs) and a
//! target job posting, and produces job-aligned `CvContent` and
//! `CoverLetterContent` models ready for document rendering.
//!
//! The pipeline is a sequence of typed stages composed in [`pipeline`]:
//! region classification → fact extraction ∥ job analysis → gap analysis →
//! CV tailoring → identity verification → cover letter. Every LLM exchange
//! goes through [`llm_client`]; no other module talks to the model directly.
//!
//! The hard guarantee: identity fields (name, contact, education, languages)
//! in the final CV are byte-identical to what fact extraction pulled from the
//! source documents, enforced by a deterministic overwrite that runs after
//! generation on every code path — including fallbacks.

pub mod config;
pub mod errors;
pub mod llm_client;
pub mod models;
pub mod pipeline;
pub mod session;
pub mod storage;
