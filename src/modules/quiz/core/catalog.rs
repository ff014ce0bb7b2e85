// Fixed, ordered question catalog.
//
// A user's progress is an index into this list, so the order is part of the
// quiz flow and must not change while the process runs.

use crate::modules::quiz::core::question::{DeliveryMethod, Question};

static QUESTIONS: [Question; 4] = [
    Question {
        id: 10001,
        text: "What is 5 + 7?",
        expected_answer: "12",
        delivery_method: DeliveryMethod::Query,
    },
    Question {
        id: 10002,
        text: "Capital of France?",
        expected_answer: "Paris",
        delivery_method: DeliveryMethod::Params,
    },
    Question {
        id: 10003,
        text: "HTTP method for fetching data?",
        expected_answer: "GET",
        delivery_method: DeliveryMethod::Header,
    },
    Question {
        id: 10004,
        text: "2 * 6 = ?",
        expected_answer: "12",
        delivery_method: DeliveryMethod::Body,
    },
];

pub fn all() -> &'static [Question] {
    &QUESTIONS
}

pub fn len() -> usize {
    all().len()
}

pub fn at(index: usize) -> Option<&'static Question> {
    all().get(index)
}

pub fn find_by_id(id: u32) -> Option<&'static Question> {
    all().iter().find(|q| q.id == id)
}

/// Parses a question id as received in a path, query string or header.
pub fn parse_id(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// Accepts JSON numbers that are whole, so `10004` and `10004.0` are the
/// same id.
pub fn json_id(value: &serde_json::Value) -> Option<u32> {
    if let Some(id) = value.as_u64() {
        return u32::try_from(id).ok();
    }
    value
        .as_f64()
        .filter(|f| f.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(f))
        .map(|f| f as u32)
}

/// Looks a question up for a delivery-specific route. A question fetched the
/// "wrong" way is treated as missing.
pub fn find_for_delivery(id: u32, method: DeliveryMethod) -> Option<&'static Question> {
    find_by_id(id).filter(|q| q.delivery_method == method)
}
