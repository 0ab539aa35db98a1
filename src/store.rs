/// Persistence for the user state. The whole history is saved as a single JSON document so
/// that nothing is lost between runs.
use anyhow::*;
use tokio::{
    fs::File,
    io::{AsyncReadExt, AsyncWriteExt},
};

use crate::app::UserState;

/// Save the user state to `filename`.
pub async fn save(filename: &str, state: &UserState) -> anyhow::Result<()> {
    let mut file = File::create(filename)
        .await
        .context(format!("Error creating file {}", filename))?;

    file.write_all(
        serde_json::to_vec_pretty(state)
            .context("Error serializing game state")?
            .as_ref(),
    )
    .await
    .context(format!("Error writing file {}", filename))?;

    file.flush()
        .await
        .context(format!("Error flushing file {}", filename))
}

/// Load the user state from `filename`.
pub async fn load(filename: &str) -> anyhow::Result<UserState> {
    let mut file = File::open(filename)
        .await
        .context(format!("Error opening file {}", filename))?;

    let mut contents = vec![];
    file.read_to_end(&mut contents)
        .await
        .context(format!("Error reading file {}", filename))?;

    serde_json::from_slice(&contents)
        .context(format!("Error deserializing game state from {}", filename))
}
