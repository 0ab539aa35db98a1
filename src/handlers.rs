/// Terminal front end. Each line the player types is turned into intents for the App, and
/// the result is rendered back as text.
use crate::app::*;
use crate::game::{Game, Move, MAX_GUESSES, WORD_LENGTH};
use crate::stats::{compute_stats, Stats};
use crate::wordle::{KeyState, Outcome};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Command is a parsed input line.
#[derive(Debug, Eq, PartialEq)]
pub enum Command {
    Guess(String),
    New(Option<String>),
    Stats,
    Theme,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_line(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }
    if !line.starts_with('/') {
        return Command::Guess(line.to_string());
    }

    let mut parts = line.split_whitespace();
    match parts.next().unwrap_or_default() {
        "/new" | "/start" => Command::New(parts.next().map(String::from)),
        "/stats" | "/score" => Command::Stats,
        "/theme" => Command::Theme,
        "/help" => Command::Help,
        "/quit" | "/exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

/// Reply is the text to show the player after handling a line.
#[derive(Debug, Default)]
pub struct Reply {
    pub text: String,
    pub quit: bool,
}

impl Reply {
    fn text(text: impl Into<String>) -> Reply {
        Reply {
            text: text.into(),
            quit: false,
        }
    }
}

/// emoji_letter takes a letter and returns the corresponding emoji letter
/// inside the Regional Indicator Symbol range.
fn emoji_letter(l: char) -> char {
    let base = 0x1F1E6;
    let a = 'A' as u32;
    let target = l.to_ascii_uppercase() as u32;

    std::char::from_u32(base + target - a).unwrap_or('?')
}

fn tile(outcome: Outcome, palette: Palette) -> &'static str {
    match (outcome, palette) {
        (Outcome::Exact, _) => "\u{1F7E9}",
        (Outcome::Present, _) => "\u{1F7E8}",
        (Outcome::Absent, Palette::Dark) => "\u{2B1B}",
        (Outcome::Absent, Palette::Light) => "\u{2B1C}",
    }
}

const BLANK_TILE: &str = "\u{1F533}";
const INVALID_TILE: &str = "\u{1F7E5}";

fn render_letters(word: &str) -> String {
    word.chars()
        .map(|c| format!("{} ", emoji_letter(c)))
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// render_board draws all six rows of the game. Only the first `revealed` tiles of the last
/// guess are colored, which is how the reveal animation is drawn.
pub fn render_board(game: &Game, palette: Palette, revealed: usize) -> String {
    let outcomes = game.outcomes();
    let mut s = String::new();

    for row in 0..MAX_GUESSES {
        let mut tiles = String::new();
        let letters;

        if let Some(guess) = game.previous_guesses.get(row) {
            let shown = if row + 1 == game.previous_guesses.len() {
                revealed
            } else {
                WORD_LENGTH
            };
            for (i, outcome) in outcomes[row].iter().enumerate() {
                tiles.push_str(if i < shown {
                    tile(*outcome, palette)
                } else {
                    BLANK_TILE
                });
            }
            letters = render_letters(guess);
        } else if row == game.previous_guesses.len() && !game.is_done() {
            let current = if game.is_current_guess_invalid {
                INVALID_TILE
            } else {
                BLANK_TILE
            };
            for _ in 0..WORD_LENGTH {
                tiles.push_str(current);
            }
            letters = render_letters(&game.current_guess);
        } else {
            for _ in 0..WORD_LENGTH {
                tiles.push_str(BLANK_TILE);
            }
            letters = String::new();
        }

        s.push_str(tiles.as_str());
        if !letters.is_empty() {
            s.push_str("  ");
            s.push_str(letters.as_str());
        }
        s.push('\n');
    }
    s
}

/// render_keyboard draws the keyboard with each letter marked by its best state so far:
/// [X] exact, (X) present, blank for absent.
pub fn render_keyboard(game: &Game) -> String {
    let keys = game.keyboard();
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys = row
                .chars()
                .map(|c| {
                    let upper = c.to_ascii_uppercase();
                    match keys.get(&c).copied().unwrap_or(KeyState::Unused) {
                        KeyState::Exact => format!("[{}]", upper),
                        KeyState::Present => format!("({})", upper),
                        KeyState::Absent => "   ".to_string(),
                        KeyState::Unused => format!(" {} ", upper),
                    }
                })
                .collect::<String>();
            format!("{}{}", " ".repeat(indent), keys)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// render_stats draws the stats summary and the distribution of winning guess counts.
pub fn render_stats(stats: &Stats) -> String {
    let win_rate = stats
        .win_rate
        .map(|r| r.to_string())
        .unwrap_or_else(|| "-".to_string());
    let mut s = format!(
        "Played: {}  Win %: {}  Current streak: {}  Best streak: {}\n\nWinning game guesses:\n",
        stats.played, win_rate, stats.current_streak, stats.max_streak
    );

    let widths = stats.bar_widths();
    for (guesses, count) in &stats.win_distribution {
        let width = widths.get(guesses).copied().unwrap_or(0) as usize;
        s.push_str(&format!("{} {} {}\n", guesses, "#".repeat(width / 5), count));
    }
    s
}

/// Frames of the reveal animation for the last guess, one more tile colored per frame. The
/// fully revealed board is not included.
pub fn reveal_frames(game: &Game, palette: Palette) -> Vec<String> {
    (0..WORD_LENGTH)
        .map(|revealed| render_board(game, palette, revealed))
        .collect()
}

fn render_game(game: &Game, palette: Palette) -> String {
    format!(
        "{}\n{}\n",
        render_board(game, palette, WORD_LENGTH),
        render_keyboard(game)
    )
}

pub fn help_text(game_name: &str) -> String {
    format!(
        "Welcome to {}! The goal of the game is to guess the {}-letter word within {} tries.

Type a word and press enter to guess it. Commands:
  /new [word]  start a new game
  /stats       show your stats
  /theme       switch between the dark and light palette
  /quit        leave the game",
        game_name, WORD_LENGTH, MAX_GUESSES
    )
}

// type_guess replaces whatever is in the current guess with `word`, then submits it.
fn type_guess(app: &mut App, word: &str) -> Dispatch {
    while app.dispatch(Intent::RemoveLetter) == Dispatch::Changed(true) {}
    for letter in word.chars() {
        app.dispatch(Intent::AddLetter(letter));
    }
    app.dispatch(Intent::SubmitGuess)
}

fn handle_guess(app: &mut App, word: &str) -> Reply {
    let palette = app.state().preferences.palette;

    if !app.is_playing() {
        return Reply::text("The game is over. Type /new to play again.");
    }

    // Letters past the fifth would be dropped by the game, so reject the line outright.
    if word.chars().count() > WORD_LENGTH || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Reply::text(format!(
            "Sorry, the word must be {} letters long. Try again.",
            WORD_LENGTH
        ));
    }

    let turn = match type_guess(app, word) {
        Dispatch::Moved(turn) => turn,
        _ => return Reply::text("Type /new to start a game."),
    };

    // is_playing() guaranteed a current game.
    let Some(game) = app.current_game() else {
        return Reply::text("Type /new to start a game.");
    };
    let answer = game.answer.to_uppercase();
    let attempts = game.previous_guesses.len();
    let mut reply = render_game(game, palette);

    match turn {
        Move::Ignored => {}
        Move::InvalidLength => reply.push_str(&format!(
            "Sorry, the word must be {} letters long. Try again.",
            WORD_LENGTH
        )),
        Move::InvalidWord => reply.push_str("Sorry, that's not a valid word. Try again."),
        Move::Repeated => reply.push_str("You already tried that word. Try another."),
        Move::Valid => reply.push_str("Nice try. Guess another word?"),
        Move::Won => {
            let stats = compute_stats(&app.state().games);
            reply.push_str(&format!(
                "You won! You guessed {} in {} attempts.\nYour score: {}\nType /new to play again.",
                answer, attempts, stats
            ));
        }
        Move::Lost => {
            let stats = compute_stats(&app.state().games);
            reply.push_str(&format!(
                "You lost! The answer was {}.\nYour score: {}\nType /new to play again.",
                answer, stats
            ));
        }
    }

    Reply::text(reply)
}

/// handle_line is the main handler for a line of player input.
pub fn handle_line(app: &mut App, game_name: &str, line: &str) -> Reply {
    match parse_line(line) {
        Command::Empty => Reply::default(),
        Command::Guess(word) => handle_guess(app, &word),
        Command::New(forced) => {
            app.dispatch(Intent::StartGame(forced));
            let palette = app.state().preferences.palette;
            match app.current_game() {
                Some(game) => Reply::text(format!(
                    "{}Guess the {}-letter word.",
                    render_game(game, palette),
                    WORD_LENGTH
                )),
                None => Reply::text("Could not start a game."),
            }
        }
        Command::Stats => Reply::text(render_stats(&app.stats())),
        Command::Theme => Reply::text(format!("Palette: {:?}", app.toggle_palette())),
        Command::Help => Reply::text(help_text(game_name)),
        Command::Quit => Reply {
            text: "Bye!".into(),
            quit: true,
        },
        Command::Unknown(command) => Reply::text(format!(
            "I don't know the command {}. Type /help for help.",
            command
        )),
    }
}

/// Greeting shown when the game starts.
pub fn welcome(app: &App, game_name: &str) -> String {
    let stats = compute_stats(&app.state().games);
    let score = if stats.played == 0 {
        "This is your first game.".to_string()
    } else {
        format!("Your score: {}.", stats)
    };

    let palette = app.state().preferences.palette;
    let board = app
        .current_game()
        .map(|g| render_game(g, palette))
        .unwrap_or_default();

    format!(
        "Welcome to {}!\n\n{}\nGuess the {}-letter word. Type /help for help.\n\n{}",
        game_name, score, WORD_LENGTH, board
    )
}
