use crate::modules::quiz::core::events::QuizEvent;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("answer does not match")]
    WrongAnswer,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    /// Correct answer. `events` is empty when the question was already answered.
    Accepted { events: Vec<QuizEvent> },
    Rejected { reason: DecideError },
}
