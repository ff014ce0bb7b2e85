use crate::modules::quiz::core::events::QuizEvent;
use crate::modules::quiz::core::state::{AnsweredQuestion, UserState};

pub fn evolve(mut state: UserState, event: QuizEvent) -> UserState {
    match event {
        QuizEvent::QuestionAnsweredV1 { question_id } if !state.has_answered(question_id) => {
            state.answered_questions.push(AnsweredQuestion {
                id: question_id,
                correct: true,
            });
            state.progress += 1;
            state
        }
        _ => state,
    }
}
