use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnsweredQuestion {
    pub id: u32,
    pub correct: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserState {
    pub progress: usize,
    pub answered_questions: Vec<AnsweredQuestion>,
}

impl UserState {
    pub fn has_answered(&self, question_id: u32) -> bool {
        self.answered_questions.iter().any(|a| a.id == question_id)
    }
}
