use serde::{Deserialize, Serialize};

/// Rules that the [`Game`](crate::Game) follows.
///
/// Missing keys in a config file take their default value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Probability that a spawned tile is a 4 instead of a 2.
    pub four_probability: f64,
    /// Spawn a tile even when a move did not change the board.
    ///
    /// The score is unaffected either way.
    pub spawn_on_unchanged_move: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            four_probability: 0.5,
            spawn_on_unchanged_move: false,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&self.four_probability) {
            anyhow::bail!(
                "four_probability must be between 0 and 1, got {}",
                self.four_probability
            );
        }
        Ok(())
    }
}
