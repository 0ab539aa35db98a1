use std::{path::Path, sync::Arc, time::Duration};

use anyhow::Context;
use argh::FromArgs;
use log::*;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::app::{App, Intent, UserState};
use crate::events::LogObserver;
use crate::words::{read_words, WordLists};

mod app;
mod events;
mod game;
mod handlers;
mod stats;
mod store;
mod wordle;
mod words;

#[cfg(test)]
mod stats_test;
#[cfg(test)]
mod store_test;
#[cfg(test)]
mod words_test;

/// Time between revealing two tiles of a guess.
const REVEAL_TICK: Duration = Duration::from_millis(400);

#[derive(FromArgs)]
/// Guess the five-letter word in six tries.
struct Args {
    /// file containing answer words, one per line
    #[argh(option, short = 'a', default = "String::from(\"data/answers.txt\")")]
    answers: String,

    /// file containing other valid guesses, one per line
    #[argh(option, short = 'g', default = "String::from(\"data/guesses.txt\")")]
    guesses: String,

    /// file the game history is saved to
    #[argh(option, short = 's')]
    save: Option<String>,

    /// start with a game for this word
    #[argh(option, short = 'w')]
    word: Option<String>,

    /// seed for picking answers
    #[argh(option)]
    seed: Option<u64>,

    /// show guesses without the reveal animation
    #[argh(switch)]
    no_animate: bool,

    /// name of the game
    #[argh(option, default = "String::from(\"Bobble\")")]
    name: String,
}

async fn load_state(save: &Option<String>) -> anyhow::Result<UserState> {
    match save {
        Some(path) if Path::new(path).exists() => store::load(path).await,
        Some(path) => {
            warn!("No saved game state at {}, starting fresh.", path);
            Ok(UserState::default())
        }
        None => Ok(UserState::default()),
    }
}

async fn save_state(app: &App, save: &Option<String>) {
    if let Some(path) = save {
        if let Err(e) = store::save(path, app.state()).await {
            error!("Error saving game state: {:#}", e);
        }
    }
}

// animate reveals the last guess one tile at a time.
async fn animate(app: &App) {
    let Some(game) = app.current_game() else {
        return;
    };
    for frame in handlers::reveal_frames(game, app.state().preferences.palette) {
        println!("{}", frame);
        tokio::time::sleep(REVEAL_TICK).await;
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args: Args = argh::from_env();

    let words = WordLists::new(
        read_words(&args.answers).await?,
        read_words(&args.guesses).await?,
    )?;
    info!(
        "Loaded {} answers from {} and guesses from {}.",
        words.answers().len(),
        args.answers,
        args.guesses
    );

    let state = load_state(&args.save).await?;
    let mut app = App::new(Arc::new(words), state).with_observer(LogObserver);
    if let Some(seed) = args.seed {
        app = app.with_seed(seed);
    }

    // An interrupted reveal from a previous run is not replayed.
    app.acknowledge_animation();

    match args.word.clone() {
        Some(word) => {
            app.dispatch(Intent::StartGame(Some(word)));
        }
        None => {
            if !app.ensure_game() && !app.is_playing() {
                app.dispatch(Intent::StartGame(None));
            }
        }
    }

    println!("{}", handlers::welcome(&app, &args.name));
    save_state(&app, &args.save).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Error reading input")? {
        let reply = handlers::handle_line(&mut app, &args.name, &line);

        if app.state().animation.should_animate_last_guess {
            if !args.no_animate {
                animate(&app).await;
            }
            app.dispatch(Intent::AckAnimation);
        }

        if !reply.text.is_empty() {
            println!("{}", reply.text);
        }
        save_state(&app, &args.save).await;

        if reply.quit {
            break;
        }
    }

    Ok(())
}
