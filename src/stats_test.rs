use std::collections::BTreeMap;

use crate::game::Game;
use crate::stats::*;

fn game(answer: &str, guesses: &[&str]) -> Game {
    let mut game = Game::new(answer);
    game.previous_guesses = guesses.iter().map(|g| g.to_string()).collect();
    game
}

fn won_in(n: usize) -> Game {
    let mut guesses = vec!["raise", "slate", "peeps", "hello", "esses"][..n - 1].to_vec();
    guesses.push("crane");
    game("crane", &guesses)
}

fn lost() -> Game {
    game(
        "crane",
        &["raise", "slate", "peeps", "hello", "esses", "eerie"],
    )
}

fn distribution(counts: [u32; 6]) -> BTreeMap<usize, u32> {
    counts
        .iter()
        .enumerate()
        .map(|(i, c)| (i + 1, *c))
        .collect()
}

#[test]
fn empty_history() {
    let stats = compute_stats(&[]);
    assert_eq!(stats.played, 0);
    assert_eq!(stats.won, 0);
    assert_eq!(stats.win_rate, None);
    assert_eq!(stats.current_streak, 0);
    assert_eq!(stats.max_streak, 0);
    assert_eq!(stats.win_distribution, distribution([0; 6]));
    assert!(stats.bar_widths().values().all(|w| *w == 0));
    assert_eq!(stats.to_string(), "no games played");
}

#[test]
fn won_lost_won() {
    let stats = compute_stats(&[won_in(3), lost(), won_in(5)]);
    assert_eq!(stats.played, 3);
    assert_eq!(stats.won, 2);
    assert_eq!(stats.win_rate, Some(67));
    assert_eq!(stats.current_streak, 1);
    assert_eq!(stats.max_streak, 1);
    assert_eq!(stats.win_distribution, distribution([0, 0, 1, 0, 1, 0]));
    assert_eq!(stats.to_string(), "67% (2/3)");
}

#[test]
fn unfinished_games_are_not_counted() {
    let in_progress = game("crane", &["raise"]);
    let abandoned = game("sheep", &[]);
    let stats = compute_stats(&[won_in(1), abandoned, lost(), in_progress]);
    assert_eq!(stats.played, 2);
    assert_eq!(stats.won, 1);
    assert_eq!(stats.win_rate, Some(50));
    assert_eq!(stats.current_streak, 0);
    assert_eq!(stats.max_streak, 1);
}

#[test]
fn current_streak_is_the_tail() {
    let stats = compute_stats(&[won_in(2), won_in(2), won_in(4), lost(), won_in(6)]);
    assert_eq!(stats.current_streak, 1);
    assert_eq!(stats.max_streak, 3);
    assert_eq!(stats.win_distribution, distribution([0, 2, 0, 1, 0, 1]));

    let stats = compute_stats(&[lost(), won_in(2), won_in(3), won_in(1)]);
    assert_eq!(stats.current_streak, 3);
    assert_eq!(stats.max_streak, 3);
}

#[test]
fn bar_widths_are_relative_to_largest_bucket() {
    let stats = compute_stats(&[won_in(3), won_in(3), won_in(5)]);
    let widths = stats.bar_widths();
    assert_eq!(widths[&3], 100);
    assert_eq!(widths[&5], 50);
    assert_eq!(widths[&1], 0);
    assert_eq!(widths.len(), 6);
}
