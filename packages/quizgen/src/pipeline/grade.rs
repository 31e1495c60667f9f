//! Grading - score a submission against a question set.

use crate::error::GradeError;
use crate::types::grade::{AnswerSubmission, GradeResult};
use crate::types::quiz::QuestionSet;

/// Score a submission against a question set.
///
/// Comparison is case-insensitive and whitespace-trimmed. A missing
/// response counts as incorrect. Grading an empty set is a caller
/// contract violation, not a degraded result. No side effects; persisting
/// the result belongs to the caller.
pub fn grade(
    quiz: &QuestionSet,
    submission: &AnswerSubmission,
) -> std::result::Result<GradeResult, GradeError> {
    if quiz.items.is_empty() {
        return Err(GradeError::EmptyQuestionSet);
    }

    let per_question: Vec<bool> = quiz
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            submission
                .responses
                .get(&index)
                .map(|chosen| answers_match(chosen, &item.answer))
                .unwrap_or(false)
        })
        .collect();

    let correct_count = per_question.iter().filter(|correct| **correct).count();
    let total_count = per_question.len();
    let score_percent = round2(100.0 * correct_count as f64 / total_count as f64);

    Ok(GradeResult {
        per_question,
        correct_count,
        total_count,
        score_percent,
    })
}

fn answers_match(submitted: &str, expected: &str) -> bool {
    submitted.trim().to_lowercase() == expected.trim().to_lowercase()
}

/// Round to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::quiz::{Provenance, QuestionItem};

    fn three_item_quiz() -> QuestionSet {
        let item = |question: &str, answer: &str| {
            QuestionItem::new(
                question,
                vec![
                    answer.to_string(),
                    "wrong one".to_string(),
                    "wrong two".to_string(),
                    "wrong three".to_string(),
                ],
                answer,
            )
        };
        QuestionSet::new(
            vec![
                item("First?", "alpha"),
                item("Second?", "beta"),
                item("Third?", "gamma"),
            ],
            QuestionSet::digest("source"),
            Provenance::Service,
        )
    }

    #[test]
    fn test_two_of_three_scores_66_67() {
        let quiz = three_item_quiz();
        let submission = AnswerSubmission::new()
            .with_response(0, "alpha")
            .with_response(1, "beta")
            .with_response(2, "wrong one");

        let result = grade(&quiz, &submission).unwrap();
        assert_eq!(result.per_question, [true, true, false]);
        assert_eq!(result.correct_count, 2);
        assert_eq!(result.total_count, 3);
        assert_eq!(result.score_percent, 66.67);
    }

    #[test]
    fn test_comparison_ignores_case_and_whitespace() {
        let quiz = three_item_quiz();
        let submission = AnswerSubmission::new()
            .with_response(0, "  ALPHA ")
            .with_response(1, "Beta")
            .with_response(2, "gamma");

        let result = grade(&quiz, &submission).unwrap();
        assert_eq!(result.correct_count, 3);
        assert_eq!(result.score_percent, 100.0);
    }

    #[test]
    fn test_missing_response_is_incorrect() {
        let quiz = three_item_quiz();
        let submission = AnswerSubmission::new().with_response(0, "alpha");

        let result = grade(&quiz, &submission).unwrap();
        assert_eq!(result.per_question, [true, false, false]);
        assert_eq!(result.score_percent, 33.33);
    }

    #[test]
    fn test_empty_set_is_rejected() {
        let quiz = QuestionSet::new(vec![], QuestionSet::digest(""), Provenance::Service);
        let err = grade(&quiz, &AnswerSubmission::new()).unwrap_err();
        assert!(matches!(err, GradeError::EmptyQuestionSet));
    }
}
