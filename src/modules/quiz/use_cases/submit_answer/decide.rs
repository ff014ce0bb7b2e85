// Pure decision function for answer submission.
//
// - A wrong answer is rejected and never touches state.
// - A first correct answer emits QuestionAnsweredV1.
// - A repeated correct answer is accepted without events.

use crate::modules::quiz::core::answer::answer_matches;
use crate::modules::quiz::core::events::QuizEvent;
use crate::modules::quiz::core::question::Question;
use crate::modules::quiz::core::state::UserState;
use crate::modules::quiz::use_cases::submit_answer::decision::{DecideError, Decision};

pub fn decide_submit(state: &UserState, question: &Question, answer: &str) -> Decision {
    if !answer_matches(question.expected_answer, answer) {
        return Decision::Rejected {
            reason: DecideError::WrongAnswer,
        };
    }
    if state.has_answered(question.id) {
        return Decision::Accepted { events: vec![] };
    }
    Decision::Accepted {
        events: vec![QuizEvent::QuestionAnsweredV1 {
            question_id: question.id,
        }],
    }
}
