use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No planning assistant configured")]
    AssistantUnavailable,

    #[error("Assistant invocation failed: {0}")]
    AssistantFailed(String),

    #[error("Assistant output contained no parseable plan: {0}")]
    MalformedAssistantOutput(String),
}

pub type Result<T> = std::result::Result<T, MenuError>;
