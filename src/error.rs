use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum KappaError {
    #[error("answer key is incomplete: question {question} has no valid expected answer")]
    IncompleteAnswerKey { question: usize },

    #[error("candidate answers must be an ordered list")]
    NotASequence,

    #[error("expected {expected} answers, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("answer to question {question} is not 0 or 1")]
    InvalidAnswerAtPosition { question: usize },

    #[error("kappa is undefined: expected agreement pe={pe} leaves no room above chance")]
    DegenerateKappa { pe: f64 },
}

impl KappaError {
    pub fn kind(&self) -> &'static str {
        match self {
            KappaError::IncompleteAnswerKey { .. } => "incomplete_answer_key",
            KappaError::NotASequence => "not_a_sequence",
            KappaError::WrongLength { .. } => "wrong_length",
            KappaError::InvalidAnswerAtPosition { .. } => "invalid_answer_at_position",
            KappaError::DegenerateKappa { .. } => "degenerate_kappa",
        }
    }
}
