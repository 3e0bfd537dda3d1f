//! Answer tallying.
//!
//! Answers align with questions by position: answer *i* belongs to question
//! *i*. A short answer list leaves the tail of the questions uncounted, extra
//! answers are ignored, and anything that is not a yes contributes nothing.

use crate::models::survey::{CategoryCounts, Question};

/// Counts per-category yes answers. Only `"yes"` and `"y"` count, compared
/// case-insensitively after trimming; questions without a trait category are
/// skipped even when answered yes.
pub fn tally_answers(answers: &[String], questions: &[Question]) -> CategoryCounts {
    let mut counts = CategoryCounts::new();
    for (answer, question) in answers.iter().zip(questions) {
        if !is_yes(answer) {
            continue;
        }
        if let Some(category) = question.category {
            counts.increment(category);
        }
    }
    counts
}

fn is_yes(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y")
}
