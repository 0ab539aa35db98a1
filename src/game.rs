/// Game implements the lifecycle of a single round: the player builds up a guess one letter
/// at a time and submits it. Accepted guesses are appended to the history until the answer
/// is found or the guesses run out.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::wordle::{self, KeyState, Outcome};
use crate::words::WordLists;

pub const WORD_LENGTH: usize = 5;
pub const MAX_GUESSES: usize = 6;

/// State represents the current player state of a game.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum State {
    Playing,
    Won,
    Lost,
}

/// Move is the result of submitting the current guess.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum Move {
    /// Nothing to submit, or the game is already over.
    Ignored,
    InvalidLength,
    InvalidWord,
    Repeated,
    Valid,
    Won,
    Lost,
}

impl Move {
    /// Returns true if the guess was rejected and the invalid flag raised.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Move::InvalidLength | Move::InvalidWord | Move::Repeated)
    }

    /// Returns true if the guess was appended to the history.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Move::Valid | Move::Won | Move::Lost)
    }
}

/// Game represents a single Wordle round.
#[derive(Deserialize, Serialize, Debug, Clone, Eq, PartialEq)]
pub struct Game {
    /// The word the player is trying to guess.
    pub answer: String,

    /// Letters typed so far for the next guess.
    #[serde(default)]
    pub current_guess: String,

    /// Set when the last submission was rejected, cleared on the next edit.
    #[serde(default)]
    pub is_current_guess_invalid: bool,

    /// Accepted guesses, oldest first.
    #[serde(default)]
    pub previous_guesses: Vec<String>,
}

impl Game {
    /// `new` creates a new game for the given answer.
    pub fn new(answer: impl Into<String>) -> Game {
        Game {
            answer: answer.into(),
            current_guess: String::new(),
            is_current_guess_invalid: false,
            previous_guesses: Vec::new(),
        }
    }

    pub fn is_done(&self) -> bool {
        self.previous_guesses.len() >= MAX_GUESSES || self.did_win()
    }

    pub fn did_win(&self) -> bool {
        self.previous_guesses.last() == Some(&self.answer)
    }

    pub fn state(&self) -> State {
        if self.did_win() {
            State::Won
        } else if self.is_done() {
            State::Lost
        } else {
            State::Playing
        }
    }

    /// `add_letter` appends a letter to the current guess. Non-letters are ignored, as are
    /// letters typed into a full guess or a finished game. Returns true if the guess changed.
    pub fn add_letter(&mut self, letter: char) -> bool {
        if self.is_done() || self.current_guess.len() >= WORD_LENGTH || !letter.is_ascii_alphabetic()
        {
            return false;
        }

        self.current_guess.push(letter.to_ascii_lowercase());
        self.is_current_guess_invalid = false;
        true
    }

    /// `remove_letter` drops the last letter of the current guess. Returns true if the guess
    /// changed.
    pub fn remove_letter(&mut self) -> bool {
        if self.is_done() || self.current_guess.pop().is_none() {
            return false;
        }

        self.is_current_guess_invalid = false;
        true
    }

    /// `submit_guess` plays the current guess. Rejected guesses leave the history untouched
    /// and raise `is_current_guess_invalid` so the player can fix the word and retry.
    pub fn submit_guess(&mut self, words: &WordLists) -> Move {
        if self.is_done() || self.current_guess.is_empty() {
            return Move::Ignored;
        }

        let rejection = if self.current_guess.len() != WORD_LENGTH {
            Some(Move::InvalidLength)
        } else if !words.is_valid_guess(&self.current_guess) {
            Some(Move::InvalidWord)
        } else if self.previous_guesses.contains(&self.current_guess) {
            Some(Move::Repeated)
        } else {
            None
        };

        if let Some(rejection) = rejection {
            self.is_current_guess_invalid = true;
            return rejection;
        }

        let guess = std::mem::take(&mut self.current_guess);
        self.previous_guesses.push(guess);
        self.is_current_guess_invalid = false;

        match self.state() {
            State::Playing => Move::Valid,
            State::Won => Move::Won,
            State::Lost => Move::Lost,
        }
    }

    /// `outcomes` scores every previous guess against the answer.
    pub fn outcomes(&self) -> Vec<[Outcome; WORD_LENGTH]> {
        self.previous_guesses
            .iter()
            .map(|guess| wordle::score(&self.answer, guess))
            .collect()
    }

    /// `keyboard` returns the best state of every letter across the previous guesses.
    pub fn keyboard(&self) -> BTreeMap<char, KeyState> {
        wordle::keyboard(&self.answer, &self.previous_guesses)
    }
}
