/// Player statistics, derived on demand from the game history.
use std::{collections::BTreeMap, fmt::Display};

use crate::game::{Game, MAX_GUESSES};

/// Stats summarizes the finished games of a session. Unfinished games are not counted.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Stats {
    pub played: u32,
    pub won: u32,
    /// Rounded win percentage, or None if nothing has been played yet.
    pub win_rate: Option<u32>,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Number of won games per guess count. Every count from 1 to MAX_GUESSES is present.
    pub win_distribution: BTreeMap<usize, u32>,
}

impl Stats {
    /// Width of each distribution bar as a percentage of the biggest bucket.
    pub fn bar_widths(&self) -> BTreeMap<usize, u32> {
        let max = self.win_distribution.values().copied().max().unwrap_or(0);
        self.win_distribution
            .iter()
            .map(|(&guesses, &count)| {
                let width = if max == 0 {
                    0
                } else {
                    (100.0 * count as f64 / max as f64).round() as u32
                };
                (guesses, width)
            })
            .collect()
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.win_rate {
            Some(rate) => write!(f, "{}% ({}/{})", rate, self.won, self.played),
            None => write!(f, "no games played"),
        }
    }
}

/// `compute_stats` scans the games in order. The current streak is the run of wins at the
/// end of the history, and the max streak is the longest run seen during the scan.
pub fn compute_stats(games: &[Game]) -> Stats {
    let mut win_distribution: BTreeMap<usize, u32> = (1..=MAX_GUESSES).map(|n| (n, 0)).collect();
    let mut played = 0;
    let mut won = 0;
    let mut current_streak = 0;
    let mut max_streak = 0;

    for game in games.iter().filter(|g| g.is_done()) {
        played += 1;
        if game.did_win() {
            won += 1;
            current_streak += 1;
            *win_distribution
                .entry(game.previous_guesses.len())
                .or_insert(0) += 1;
        } else {
            current_streak = 0;
        }
        max_streak = max_streak.max(current_streak);
    }

    let win_rate = if played == 0 {
        None
    } else {
        Some((100.0 * won as f64 / played as f64).round() as u32)
    };

    Stats {
        played,
        won,
        win_rate,
        current_streak,
        max_streak,
        win_distribution,
    }
}
