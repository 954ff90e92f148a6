use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;
use gomoku::Mark;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Which player places the first mark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FirstMark {
    #[default]
    A,
    B,
    Random,
}

impl FirstMark {
    pub fn resolve(self, rng: &mut impl Rng) -> Mark {
        match self {
            FirstMark::A => Mark::A,
            FirstMark::B => Mark::B,
            FirstMark::Random => {
                if rng.gen::<bool>() {
                    Mark::B
                } else {
                    Mark::A
                }
            }
        }
    }
}

/// The settings of one game. Missing fields in a config file take their default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board.
    pub size: usize,
    /// How many marks in a row win the game.
    pub win_length: usize,
    pub first: FirstMark,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: 10,
            win_length: 2,
            first: FirstMark::A,
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open config file '{}'", path.display()))?;
        let config = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Could not parse config file '{}'", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.size == 0 {
            anyhow::bail!("The board size must be at least 1");
        }
        if self.win_length == 0 {
            anyhow::bail!("The win length must be at least 1");
        }
        if self.win_length > self.size {
            warn!(
                size = self.size,
                win_length = self.win_length,
                "The win length exceeds the board size, the game can only end in a tie"
            );
        }
        Ok(())
    }
}
