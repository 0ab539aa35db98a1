/// App is the session manager. It owns the player's game history and routes every input
/// to the current game, which is always the last game in the history. Earlier games are
/// finished (or abandoned) and never change again.
use std::{collections::HashSet, sync::Arc};

use log::*;
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::events::{Event, Observer};
use crate::game::{Game, Move};
use crate::stats::{compute_stats, Stats};
use crate::words::WordLists;

/// Palette is the color scheme the board is drawn with.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum Palette {
    #[default]
    Dark,
    Light,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct Preferences {
    #[serde(default)]
    pub palette: Palette,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct AnimationData {
    /// Set when a guess is accepted, cleared once the reveal has been shown.
    #[serde(default)]
    pub should_animate_last_guess: bool,
}

/// UserState is everything that is saved for a player between runs.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct UserState {
    #[serde(default)]
    pub games: Vec<Game>,
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub animation: AnimationData,
}

impl UserState {
    pub fn current_game(&self) -> Option<&Game> {
        self.games.last()
    }

    /// Answers of every game in the history, including the current one.
    pub fn used_answers(&self) -> HashSet<String> {
        self.games.iter().map(|g| g.answer.clone()).collect()
    }
}

/// Intent is an input from the front end.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Intent {
    StartGame(Option<String>),
    AddLetter(char),
    RemoveLetter,
    SubmitGuess,
    AckAnimation,
}

/// Dispatch reports what an intent did to the session.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Dispatch {
    /// A new game was started with this answer.
    Started(String),
    /// A guess was submitted.
    Moved(Move),
    /// A letter edit or acknowledgement; false if it was a no-op.
    Changed(bool),
    /// There is no current game to apply the intent to.
    NoGame,
}

/// App represents the session state for one player.
pub struct App {
    words: Arc<WordLists>,
    state: UserState,
    rng: StdRng,
    observers: Vec<Box<dyn Observer>>,
}

impl App {
    /// Creates a new App over a (possibly restored) user state.
    pub fn new(words: Arc<WordLists>, state: UserState) -> App {
        App {
            words,
            state,
            rng: StdRng::from_entropy(),
            observers: Vec::new(),
        }
    }

    /// Makes answer selection reproducible.
    pub fn with_seed(mut self, seed: u64) -> App {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_observer(mut self, observer: impl Observer + 'static) -> App {
        self.observers.push(Box::new(observer));
        self
    }

    pub fn state(&self) -> &UserState {
        &self.state
    }

    pub fn current_game(&self) -> Option<&Game> {
        self.state.current_game()
    }

    pub fn is_playing(&self) -> bool {
        self.current_game().map_or(false, |g| !g.is_done())
    }

    /// Applies an intent to the session.
    pub fn dispatch(&mut self, intent: Intent) -> Dispatch {
        match intent {
            Intent::StartGame(forced) => Dispatch::Started(self.start_new_game(forced.as_deref())),
            Intent::AddLetter(letter) => self.add_letter(letter),
            Intent::RemoveLetter => self.remove_letter(),
            Intent::SubmitGuess => self.submit_guess(),
            Intent::AckAnimation => Dispatch::Changed(self.acknowledge_animation()),
        }
    }

    /// Starts a new game and returns its answer. A forced answer is used as is if it's one of
    /// the answers; otherwise an answer not yet played in this session is drawn.
    pub fn start_new_game(&mut self, forced_answer: Option<&str>) -> String {
        let forced = forced_answer
            .map(|w| w.trim().to_ascii_lowercase())
            .filter(|w| {
                let ok = self.words.is_answer(w);
                if !ok {
                    warn!("Ignoring forced answer '{}', it is not in the answer list.", w);
                }
                ok
            });

        let answer = match &forced {
            Some(word) => word.clone(),
            None => {
                let used = self.state.used_answers();
                self.words.sample_answer(&used, &mut self.rng).to_string()
            }
        };

        self.state.games.push(Game::new(answer.clone()));
        self.notify(Event::GameStarted {
            answer: answer.clone(),
            forced: forced.is_some(),
        });
        answer
    }

    /// Starts the first game of an empty session. Returns true if a game was started.
    pub fn ensure_game(&mut self) -> bool {
        if self.state.games.is_empty() {
            self.start_new_game(None);
            return true;
        }
        false
    }

    pub fn add_letter(&mut self, letter: char) -> Dispatch {
        match self.state.games.last_mut() {
            Some(game) => Dispatch::Changed(game.add_letter(letter)),
            None => Dispatch::NoGame,
        }
    }

    pub fn remove_letter(&mut self) -> Dispatch {
        match self.state.games.last_mut() {
            Some(game) => Dispatch::Changed(game.remove_letter()),
            None => Dispatch::NoGame,
        }
    }

    /// Submits the current guess. Accepting a guess also asks the front end to animate it.
    pub fn submit_guess(&mut self) -> Dispatch {
        let Some(game) = self.state.games.last_mut() else {
            return Dispatch::NoGame;
        };

        let guess = game.current_guess.clone();
        let turn = game.submit_guess(&self.words);

        let mut events = Vec::new();
        if turn.is_accepted() {
            self.state.animation.should_animate_last_guess = true;
            events.push(Event::GuessAccepted {
                guess,
                attempt: game.previous_guesses.len(),
            });
            if game.is_done() {
                events.push(Event::GameOver {
                    answer: game.answer.clone(),
                    won: game.did_win(),
                    attempts: game.previous_guesses.len(),
                });
            }
        } else if turn.is_rejected() {
            events.push(Event::GuessRejected {
                guess,
                reason: turn,
            });
        }

        for event in events {
            self.notify(event);
        }
        Dispatch::Moved(turn)
    }

    /// Clears the animation flag once the front end has finished revealing the last guess.
    /// Returns true if the flag was set.
    pub fn acknowledge_animation(&mut self) -> bool {
        std::mem::take(&mut self.state.animation.should_animate_last_guess)
    }

    /// Switches between the dark and light palettes.
    pub fn toggle_palette(&mut self) -> Palette {
        let preferences = &mut self.state.preferences;
        preferences.palette = match preferences.palette {
            Palette::Dark => Palette::Light,
            Palette::Light => Palette::Dark,
        };
        preferences.palette
    }

    /// Returns the player's statistics, computed from the full history.
    pub fn stats(&mut self) -> Stats {
        let stats = compute_stats(&self.state.games);
        self.notify(Event::StatsShown);
        stats
    }

    fn notify(&mut self, event: Event) {
        for observer in self.observers.iter_mut() {
            observer.notify(&event);
        }
    }
}
