// src/infra/errors.rs — Error types for secret-santa

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SantaError {
    // Configuration errors (caller must fix input and re-run)
    #[error("Participant '{name}' is listed more than once")]
    DuplicateParticipant { name: String },

    #[error("Category '{name}' is listed more than once")]
    DuplicateCategory { name: String },

    #[error(
        "Too few participants: {participants} participant(s) for {categories} categor(ies). \
         There must be more participants than categories."
    )]
    TooFewParticipants {
        participants: usize,
        categories: usize,
    },

    #[error("Participant and category names must not be empty")]
    EmptyName,

    #[error("Participant '{name}' has no email address")]
    MissingAddress { name: String },

    #[error("Output directory '{path}' does not exist")]
    MissingOutputDir { path: String },

    // Algorithmic failure
    #[error("No valid assignment found within the attempt budget ({attempts} attempts)")]
    AttemptsExhausted { attempts: u32 },

    // Collaborators
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Mail error: {0}")]
    Mail(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SantaError {
    /// Whether the error was caused by structurally invalid input, detected
    /// before any generation attempt.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            SantaError::DuplicateParticipant { .. }
                | SantaError::DuplicateCategory { .. }
                | SantaError::TooFewParticipants { .. }
                | SantaError::EmptyName
                | SantaError::MissingAddress { .. }
                | SantaError::MissingOutputDir { .. }
                | SantaError::Config(_)
        )
    }

    /// Process exit code the CLI maps this error to.
    pub fn exit_code(&self) -> i32 {
        match self {
            e if e.is_configuration() => 2,
            SantaError::AttemptsExhausted { .. } => 3,
            _ => 1,
        }
    }
}
