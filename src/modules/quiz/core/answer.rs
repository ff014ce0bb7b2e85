/// Case-insensitive comparison after trimming the submitted answer.
pub fn answer_matches(expected: &str, submitted: &str) -> bool {
    submitted.trim().to_lowercase() == expected.to_lowercase()
}
