use std::path::PathBuf;

use crate::app::*;
use crate::game::Game;
use crate::store;

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("bobble-{}-{}.json", name, std::process::id()))
}

#[tokio::test]
async fn save_and_load_keep_full_history() {
    let path = temp_file("roundtrip");
    let filename = path.to_str().unwrap();

    let mut finished = Game::new("sheep");
    finished.previous_guesses = vec!["peeps".into(), "sheep".into()];
    let mut current = Game::new("crane");
    current.previous_guesses = vec!["raise".into()];
    current.current_guess = "zzz".into();
    current.is_current_guess_invalid = true;

    let state = UserState {
        games: vec![finished, current],
        preferences: Preferences {
            palette: Palette::Light,
        },
        animation: AnimationData {
            should_animate_last_guess: true,
        },
    };

    store::save(filename, &state).await.unwrap();
    let loaded = store::load(filename).await.unwrap();
    assert_eq!(loaded, state);

    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn missing_fields_get_defaults() {
    let path = temp_file("partial");
    let filename = path.to_str().unwrap();
    tokio::fs::write(&path, r#"{"games": [{"answer": "sheep"}]}"#)
        .await
        .unwrap();

    let loaded = store::load(filename).await.unwrap();
    assert_eq!(loaded.games, vec![Game::new("sheep")]);
    assert_eq!(loaded.preferences.palette, Palette::Dark);
    assert!(!loaded.animation.should_animate_last_guess);

    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn load_errors() {
    assert!(store::load("/nonexistent/bobble/state.json").await.is_err());

    let path = temp_file("garbage");
    tokio::fs::write(&path, "not json").await.unwrap();
    assert!(store::load(path.to_str().unwrap()).await.is_err());
    tokio::fs::remove_file(&path).await.unwrap();
}
