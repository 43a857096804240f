use thiserror::Error;

use crate::llm_client::LlmError;

/// Pipeline-level error type.
///
/// Only `InsufficientData` and `NameMissing` represent user-correctable
/// problems; they are the only errors a caller should surface verbatim.
/// Everything else is an internal failure of the extraction stage — later
/// stages never return errors, they degrade to deterministic fallbacks.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Not enough profile data to work with ({chars} characters)")]
    InsufficientData { chars: usize },

    #[error("No candidate name found in the provided documents")]
    NameMissing,

    #[error("Extraction output could not be parsed: {0}")]
    ExtractionParse(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl PipelineError {
    /// True when the user can fix the problem by changing their input.
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            PipelineError::InsufficientData { .. } | PipelineError::NameMissing
        )
    }

    /// A message safe to show the end user. Gives self-correction guidance
    /// for input problems and a generic line otherwise — never internals.
    pub fn user_message(&self) -> String {
        match self {
            PipelineError::InsufficientData { .. } => {
                "We couldn't find enough text in your profile or CV to work with. \
                 Please upload a fuller CV or paste more of your profile."
                    .to_string()
            }
            PipelineError::NameMissing => {
                "We could not find your name in the documents you provided — \
                 check that your CV text is readable and includes your name."
                    .to_string()
            }
            PipelineError::ExtractionParse(_)
            | PipelineError::Llm(_)
            | PipelineError::Internal(_) => {
                "Something went wrong while reading your documents. Please try again."
                    .to_string()
            }
        }
    }
}
