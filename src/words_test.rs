use std::collections::HashSet;

use rand::{rngs::StdRng, SeedableRng};

use crate::words::*;

fn words() -> WordLists {
    WordLists::new(
        ["sheep", "crane", "slate"].map(String::from),
        ["peeps", "hello"].map(String::from),
    )
    .unwrap()
}

#[test]
fn normalizes_entries() {
    let words = WordLists::new(
        [" CRANE ", "toolong", "abc", "sl4te", "crane", "Sheep"].map(String::from),
        ["PEEPS", ""].map(String::from),
    )
    .unwrap();
    assert_eq!(words.answers(), ["crane", "sheep"]);
    assert!(words.is_valid_guess("peeps"));
    assert!(!words.is_valid_guess("toolong"));
}

#[test]
fn no_answers_is_an_error() {
    assert!(WordLists::new(["abc".to_string()], ["peeps".to_string()]).is_err());
}

#[test]
fn valid_guesses_come_from_both_lists() {
    let words = words();
    assert!(words.is_valid_guess("sheep"));
    assert!(words.is_valid_guess("hello"));
    assert!(!words.is_valid_guess("zzzzz"));
    assert!(words.is_answer("crane"));
    assert!(!words.is_answer("hello"));
}

#[test]
fn is_word_checks_shape() {
    assert!(is_word("crane"));
    assert!(!is_word("Crane"));
    assert!(!is_word("cran"));
    assert!(!is_word("cr4ne"));
}

#[test]
fn sample_answer_skips_excluded() {
    let words = words();
    let mut rng = StdRng::seed_from_u64(7);
    let exclude: HashSet<String> = ["sheep", "crane"].map(String::from).into();
    for _ in 0..20 {
        assert_eq!(words.sample_answer(&exclude, &mut rng), "slate");
    }
}

#[test]
fn sample_answer_allows_repeats_once_exhausted() {
    let words = words();
    let mut rng = StdRng::seed_from_u64(7);
    let exclude: HashSet<String> = words.answers().iter().cloned().collect();
    let answer = words.sample_answer(&exclude, &mut rng);
    assert!(words.is_answer(answer));
}

#[tokio::test]
async fn read_words_skips_comments_and_blanks() {
    let path = std::env::temp_dir().join(format!("bobble-words-{}.txt", std::process::id()));
    tokio::fs::write(&path, "# answers\ncrane\n\n  \nsheep\n")
        .await
        .unwrap();

    let words = read_words(path.to_str().unwrap()).await.unwrap();
    assert_eq!(words, vec!["crane", "sheep"]);

    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn read_words_missing_file_is_an_error() {
    assert!(read_words("/nonexistent/bobble/words.txt").await.is_err());
}
