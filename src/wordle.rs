/// Scoring for Wordle guesses. Every letter of a guess is classified against the answer as
/// an exact match, present elsewhere in the answer, or absent.
///
/// Duplicate letters are attributed the way Wordle does it: exact matches claim their
/// letters first, and the leftover answer letters are then handed out to the remaining
/// guess positions from left to right. A letter is never marked more times than it appears
/// in the answer.
use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::game::WORD_LENGTH;

/// Outcome is the classification of a single letter in a guess.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum Outcome {
    /// Right letter, right spot.
    Exact,
    /// Right letter, wrong spot.
    Present,
    /// Not in the remaining answer letters.
    Absent,
}

/// KeyState is the best classification a letter has received across all the guesses of a
/// game. The variants are ordered so that a better state compares greater.
#[derive(Debug, Eq, PartialEq, Ord, PartialOrd, Clone, Copy)]
pub enum KeyState {
    Unused,
    Absent,
    Present,
    Exact,
}

impl From<Outcome> for KeyState {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Exact => KeyState::Exact,
            Outcome::Present => KeyState::Present,
            Outcome::Absent => KeyState::Absent,
        }
    }
}

/// `score` compares `guess` to `answer` and returns the outcome for each position of the
/// guess. Positions the answer doesn't have are Absent.
pub fn score(answer: &str, guess: &str) -> [Outcome; WORD_LENGTH] {
    let answer: Vec<char> = answer.chars().collect();
    let guess: Vec<char> = guess.chars().collect();
    let mut outcomes = [Outcome::Absent; WORD_LENGTH];
    let mut consumed = [false; WORD_LENGTH];

    for i in 0..WORD_LENGTH {
        if let (Some(a), Some(g)) = (answer.get(i), guess.get(i)) {
            if a == g {
                outcomes[i] = Outcome::Exact;
                consumed[i] = true;
            }
        }
    }

    // Count the answer letters not taken by an exact match.
    let mut remaining: HashMap<char, usize> = HashMap::new();
    for (i, c) in answer.iter().take(WORD_LENGTH).enumerate() {
        if !consumed[i] {
            *remaining.entry(*c).or_insert(0) += 1;
        }
    }

    for i in 0..WORD_LENGTH {
        if consumed[i] {
            continue;
        }
        let Some(c) = guess.get(i) else {
            continue;
        };
        if let Some(count) = remaining.get_mut(c).filter(|n| **n > 0) {
            *count -= 1;
            outcomes[i] = Outcome::Present;
        }
    }

    outcomes
}

/// `keyboard` returns the state of every letter from 'a' to 'z' given the guesses made so far.
/// It is derived from `score`, so the keyboard always agrees with the board.
pub fn keyboard<S: AsRef<str>>(answer: &str, guesses: &[S]) -> BTreeMap<char, KeyState> {
    let mut keys: BTreeMap<char, KeyState> = ('a'..='z').map(|c| (c, KeyState::Unused)).collect();

    for guess in guesses {
        let guess = guess.as_ref();
        for (c, outcome) in guess.chars().zip(score(answer, guess)) {
            let key = keys.entry(c).or_insert(KeyState::Unused);
            *key = (*key).max(outcome.into());
        }
    }

    keys
}
