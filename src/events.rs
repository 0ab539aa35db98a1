/// Notifications about committed session transitions. Observers see what happened after
/// the state has changed and can't change it themselves.
use log::*;

use crate::game::Move;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Event {
    GameStarted { answer: String, forced: bool },
    GuessAccepted { guess: String, attempt: usize },
    GuessRejected { guess: String, reason: Move },
    GameOver { answer: String, won: bool, attempts: usize },
    StatsShown,
}

/// Observer is notified after every transition that produced an event.
pub trait Observer {
    fn notify(&mut self, event: &Event);
}

/// LogObserver writes every event to the log.
#[derive(Default)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn notify(&mut self, event: &Event) {
        match event {
            Event::GameStarted { answer, forced } => {
                info!("Starting new game, target word: {} (forced: {}).", answer, forced)
            }
            Event::GuessAccepted { guess, attempt } => {
                info!("Guessed {} on attempt {}.", guess, attempt)
            }
            Event::GuessRejected { guess, reason } => {
                debug!("Rejected guess '{}': {:?}.", guess, reason)
            }
            Event::GameOver {
                answer,
                won,
                attempts,
            } => info!(
                "Game over: {} the word {} after {} attempts.",
                if *won { "won" } else { "lost" },
                answer,
                attempts
            ),
            Event::StatsShown => debug!("Stats shown."),
        }
    }
}
