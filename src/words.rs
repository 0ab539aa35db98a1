/// Word lists for the game. There are two of them: the answers, which are the words a game
/// can be played for, and the guesses, a much larger dictionary of words the player may
/// enter. Both are loaded once at startup and never change.
use std::collections::HashSet;

use anyhow::{bail, Context, Result};
use log::*;
use rand::{seq::SliceRandom, Rng};

use crate::game::WORD_LENGTH;

/// Returns true if `word` is exactly WORD_LENGTH lowercase ASCII letters.
pub fn is_word(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_lowercase())
}

// normalize lowercases and trims every entry, dropping anything that isn't a playable word.
fn normalize(words: impl IntoIterator<Item = String>) -> (Vec<String>, usize) {
    let mut dropped = 0;
    let words = words
        .into_iter()
        .map(|w| w.trim().to_ascii_lowercase())
        .filter(|w| {
            let ok = is_word(w);
            if !ok {
                dropped += 1;
            }
            ok
        })
        .collect();
    (words, dropped)
}

/// WordLists holds the answer list and the valid guess dictionary.
#[derive(Debug, Clone)]
pub struct WordLists {
    answers: Vec<String>,
    answer_set: HashSet<String>,
    guesses: HashSet<String>,
}

impl WordLists {
    /// Builds the word lists. Entries are normalized, and anything that isn't a five letter
    /// word is dropped. Fails if no answers remain.
    pub fn new(
        answers: impl IntoIterator<Item = String>,
        guesses: impl IntoIterator<Item = String>,
    ) -> Result<WordLists> {
        let (answers, dropped_answers) = normalize(answers);
        let (guesses, dropped_guesses) = normalize(guesses);
        if dropped_answers + dropped_guesses > 0 {
            warn!(
                "Dropped {} answers and {} guesses that were not {}-letter words.",
                dropped_answers, dropped_guesses, WORD_LENGTH
            );
        }

        // Dedup answers, keeping the first occurrence so the list order is stable.
        let mut answer_set = HashSet::new();
        let answers: Vec<String> = answers
            .into_iter()
            .filter(|w| answer_set.insert(w.clone()))
            .collect();

        if answers.is_empty() {
            bail!("no answer words found")
        }

        Ok(WordLists {
            answers,
            answer_set,
            guesses: HashSet::from_iter(guesses),
        })
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Returns true if the word may be submitted as a guess, i.e. it's in either list.
    pub fn is_valid_guess(&self, word: &str) -> bool {
        self.answer_set.contains(word) || self.guesses.contains(word)
    }

    /// Returns true if the word is one of the answers.
    pub fn is_answer(&self, word: &str) -> bool {
        self.answer_set.contains(word)
    }

    /// Picks a random answer that isn't in `exclude`. Once every answer has been excluded,
    /// repeats are allowed and the pick is made from the whole list.
    pub fn sample_answer<R: Rng + ?Sized>(&self, exclude: &HashSet<String>, rng: &mut R) -> &str {
        let fresh: Vec<&String> = self
            .answers
            .iter()
            .filter(|w| !exclude.contains(*w))
            .collect();

        let pick = match fresh.choose(rng) {
            Some(word) => *word,
            None => {
                warn!(
                    "All {} answers have been played, allowing repeats.",
                    self.answers.len()
                );
                // answers is never empty, see new().
                &self.answers[rng.gen_range(0..self.answers.len())]
            }
        };
        pick.as_str()
    }
}

// read_words reads a file containing one word per line, and returns a vector of
// strings. It filters out empty lines and lines that start with a '#'.
pub async fn read_words(path: impl AsRef<str>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .context(format!("Error reading word list {}", path))?;

    Ok(contents
        .lines()
        .map(String::from)
        .filter(|s| !s.starts_with('#'))
        .filter(|s| !s.trim().is_empty())
        .collect())
}
