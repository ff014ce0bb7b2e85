#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    QuestionAnsweredV1 { question_id: u32 },
}
