//! Offline Quiz - Reference Usage
//!
//! Demonstrates the fully local path: generating a quiz from pasted notes
//! without any generation-service call, then grading a submission. This is
//! the same code path the engine takes when the service is unreachable.
//!
//! ```bash
//! cargo run --example offline_quiz
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;

use quizgen::{fallback_quiz, grade, AnswerSubmission, QuizConfig, SessionStats};

const NOTES: &str = "Photosynthesis converts sunlight into chemical energy inside chloroplasts. \
    Cellular respiration releases energy stored in glucose molecules. \
    Mitochondria produce adenosine triphosphate for cellular processes. \
    Ribosomes assemble proteins according to messenger instructions. \
    Chromosomes carry hereditary information encoded in nucleotide sequences.";

fn main() {
    let config = QuizConfig::default().with_question_count(3);
    let mut rng = StdRng::seed_from_u64(42);

    let quiz = fallback_quiz(NOTES, config.question_count, &config, &mut rng);
    println!("provenance: {:?}", quiz.provenance);

    for (index, item) in quiz.items.iter().enumerate() {
        println!("\nQ{}. {}", index + 1, item.question);
        for (letter, option) in ["A", "B", "C", "D"].iter().zip(&item.options) {
            println!("  {}. {}", letter, option);
        }
    }

    // Answer every question with its first option.
    let mut submission = AnswerSubmission::new();
    for index in 0..quiz.len() {
        submission = submission.with_response(index, quiz.items[index].options[0].clone());
    }

    let result = grade(&quiz, &submission).expect("non-empty quiz");
    println!(
        "\nScore: {}/{} ({}%) - {:?}",
        result.correct_count, result.total_count, result.score_percent,
        result.band()
    );

    let mut stats = SessionStats::new();
    stats.record(&result);
    println!(
        "Session: {} attempt(s), average {}%",
        stats.attempts, stats.average_accuracy
    );
}
