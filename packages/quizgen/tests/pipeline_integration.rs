//! Integration tests for the full generation pipeline.
//!
//! These tests drive the engine end to end through its mock collaborator:
//! service reply parsing, the repair path, every fallback trigger, and
//! grading of the produced sets.

use rand::rngs::StdRng;
use rand::SeedableRng;

use quizgen::testing::MockGenerator;
use quizgen::{
    generate_quiz, grade, AnswerSubmission, Provenance, QuizConfig, QuizEngine, SessionStats,
    PLACEHOLDER_OPTION,
};

const SOURCE: &str = "Photosynthesis converts sunlight into chemical energy inside chloroplasts. \
    Cellular respiration releases energy stored in glucose molecules. \
    Mitochondria produce adenosine triphosphate for cellular processes. \
    Ribosomes assemble proteins according to messenger instructions. \
    Chromosomes carry hereditary information encoded in nucleotide sequences.";

fn seeded() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[tokio::test]
async fn test_service_reply_with_noise_and_fences_is_accepted() {
    let reply = r#"Sure! Here is your quiz:
```json
[
    {"question": "What converts sunlight?", "options": ["photosynthesis", "respiration", "digestion", "osmosis"], "answer": "photosynthesis"},
    {"question": "What do ribosomes assemble?", "options": ["proteins", "lipids", "sugars", "acids"], "answer": "proteins"}
]
```
Let me know if you need more."#;

    let generator = MockGenerator::new().with_reply(reply);
    let quiz = generate_quiz(generator, SOURCE, 2).await;

    assert_eq!(quiz.provenance, Provenance::Service);
    assert_eq!(quiz.len(), 2);
    for item in &quiz.items {
        assert!(item.is_well_formed());
    }
}

#[tokio::test]
async fn test_root_key_wrapped_reply_is_unwrapped() {
    let reply = r#"{"questions": [
        {"question": "What converts sunlight?", "options": ["photosynthesis", "respiration", "digestion", "osmosis"], "answer": "photosynthesis"}
    ]}"#;

    let generator = MockGenerator::new().with_reply(reply);
    let quiz = generate_quiz(generator, SOURCE, 3).await;

    assert_eq!(quiz.provenance, Provenance::Service);
    assert_eq!(quiz.len(), 1);
}

#[tokio::test]
async fn test_prompt_carries_source_and_count() {
    let generator = MockGenerator::new();
    let probe = generator.clone();

    let _ = generate_quiz(generator, SOURCE, 2).await;

    let calls = probe.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].contains("Create 2 high-quality"));
    assert!(calls[0].contains("Photosynthesis"));
}

#[tokio::test]
async fn test_transport_failure_falls_back_locally() {
    let engine = QuizEngine::with_config(
        MockGenerator::new().failing(),
        QuizConfig::default().with_question_count(3),
    );
    let quiz = engine.generate_with_rng(SOURCE, &mut seeded()).await;

    assert_eq!(quiz.provenance, Provenance::Fallback);
    assert!(!quiz.is_empty());
    assert!(quiz.len() <= 3);
    for item in &quiz.items {
        assert!(item.is_well_formed());
    }
}

#[tokio::test]
async fn test_prose_reply_falls_back_locally() {
    let engine = QuizEngine::new(
        MockGenerator::new().with_reply("I am sorry, I cannot produce a quiz for this text."),
    );
    let quiz = engine.generate_with_rng(SOURCE, &mut seeded()).await;

    assert_eq!(quiz.provenance, Provenance::Fallback);
    assert!(!quiz.is_empty());
}

#[tokio::test]
async fn test_unsalvageable_items_fall_back_locally() {
    let reply = r#"[{"question": "", "answer": ""}, {"irrelevant": true}]"#;
    let engine = QuizEngine::new(MockGenerator::new().with_reply(reply));
    let quiz = engine.generate_with_rng(SOURCE, &mut seeded()).await;

    assert_eq!(quiz.provenance, Provenance::Fallback);
    assert!(!quiz.is_empty());
}

#[tokio::test]
async fn test_empty_source_with_failing_service_yields_placeholder() {
    let engine = QuizEngine::new(MockGenerator::new().failing());
    let quiz = engine.generate_with_rng("", &mut seeded()).await;

    assert_eq!(quiz.provenance, Provenance::Placeholder);
    assert_eq!(quiz.len(), 1);
    assert!(quiz.items[0].options.iter().all(|o| o == PLACEHOLDER_OPTION));
    assert_eq!(quiz.items[0].answer, PLACEHOLDER_OPTION);
}

#[tokio::test]
async fn test_two_sentence_source_offline() {
    let text = "The mitochondria is the powerhouse of the cell. DNA carries genetic information.";
    let engine = QuizEngine::with_config(
        MockGenerator::new().failing(),
        QuizConfig::default().with_question_count(2),
    );
    let quiz = engine.generate_with_rng(text, &mut seeded()).await;

    assert_eq!(quiz.provenance, Provenance::Fallback);
    assert!(quiz.len() <= 2);
    for item in &quiz.items {
        assert!(item.is_well_formed());
    }
}

#[tokio::test]
async fn test_degraded_answer_is_flagged_not_dropped() {
    let reply = r#"[{"question": "Pick one.", "options": ["a", "b", "c", "d"], "answer": "missing"}]"#;
    let generator = MockGenerator::new().with_reply(reply);
    let quiz = generate_quiz(generator, SOURCE, 1).await;

    assert_eq!(quiz.provenance, Provenance::Service);
    assert!(quiz.items[0].degraded);
    assert!(quiz.is_degraded());
    assert_eq!(quiz.items[0].answer, "a");
}

#[tokio::test]
async fn test_generate_then_grade_end_to_end() {
    let quiz = generate_quiz(MockGenerator::new(), SOURCE, 1).await;
    assert_eq!(quiz.provenance, Provenance::Service);

    let submission = AnswerSubmission::new().with_response(0, quiz.items[0].answer.clone());
    let result = grade(&quiz, &submission).unwrap();

    assert_eq!(result.correct_count, 1);
    assert_eq!(result.score_percent, 100.0);

    let mut stats = SessionStats::new();
    stats.record(&result);
    assert_eq!(stats.attempts, 1);
    assert!((stats.average_accuracy - 100.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_fallback_is_deterministic_per_seed() {
    let engine = QuizEngine::new(MockGenerator::new().failing());

    let first = engine.generate_with_rng(SOURCE, &mut seeded()).await;
    let second = engine.generate_with_rng(SOURCE, &mut seeded()).await;

    assert_eq!(first.items, second.items);
    assert_eq!(first.source_digest, second.source_digest);
}

#[tokio::test]
async fn test_regenerate_produces_fresh_set_with_same_digest() {
    let engine = QuizEngine::new(MockGenerator::new().failing());

    let first = engine.generate_with_rng(SOURCE, &mut StdRng::seed_from_u64(1)).await;
    let second = engine.generate_with_rng(SOURCE, &mut StdRng::seed_from_u64(2)).await;

    assert_eq!(first.source_digest, second.source_digest);
}

#[tokio::test]
async fn test_zero_requested_count_clamps_to_one() {
    let quiz = generate_quiz(MockGenerator::new(), SOURCE, 0).await;
    assert_eq!(quiz.len(), 1);
}
