//! Command-line options shared by the interactive game and autoplay.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::core::{random_seed, GameConfig};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, INITIAL_FILL_PERCENT, OFFERED_SHAPE_COUNT};

#[derive(Debug, Parser)]
#[command(name = "reverse-tetris", version, about)]
pub struct Cli {
    /// RNG seed; a random one is picked when omitted
    #[arg(long, env = "REVERSE_TETRIS_SEED", global = true)]
    pub seed: Option<u64>,

    /// Board width in cells
    #[arg(long, default_value_t = BOARD_WIDTH, global = true)]
    pub width: usize,

    /// Board height in cells
    #[arg(long, default_value_t = BOARD_HEIGHT, global = true)]
    pub height: usize,

    /// Chance, in percent, that a generated cell starts filled
    #[arg(
        long,
        env = "REVERSE_TETRIS_FILL",
        default_value_t = INITIAL_FILL_PERCENT,
        value_parser = clap::value_parser!(u8).range(0..=100),
        global = true
    )]
    pub fill: u8,

    /// Number of shapes offered at a time
    #[arg(long, default_value_t = OFFERED_SHAPE_COUNT, global = true)]
    pub offered: usize,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Play greedily without a terminal UI, printing one JSON line per move
    Autoplay(AutoplayArgs),
}

#[derive(Debug, Args)]
pub struct AutoplayArgs {
    /// Stop after this many moves even if the game is not over
    #[arg(long)]
    pub max_moves: Option<u32>,
}

impl Cli {
    /// Build and validate the game configuration from the flags.
    pub fn game_config(&self) -> Result<GameConfig> {
        let config = GameConfig::default()
            .with_board(self.width, self.height)
            .with_fill_probability(f64::from(self.fill) / 100.0)
            .with_offered_count(self.offered);
        config.validate().context("invalid game configuration")?;
        Ok(config)
    }

    /// The seed to play, drawing one when none was given.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(random_seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["reverse-tetris"]).unwrap();
        assert!(cli.command.is_none());
        let config = cli.game_config().unwrap();
        assert_eq!((config.width, config.height), (BOARD_WIDTH, BOARD_HEIGHT));
        assert!((config.fill_probability - 0.8).abs() < 1e-9);
        assert_eq!(config.offered_count, OFFERED_SHAPE_COUNT);
    }

    #[test]
    fn test_autoplay_with_global_flags() {
        let cli = Cli::try_parse_from([
            "reverse-tetris",
            "autoplay",
            "--max-moves",
            "5",
            "--seed",
            "7",
            "--width",
            "6",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.resolve_seed(), 7);
        assert_eq!(cli.width, 6);
        match cli.command {
            Some(Command::Autoplay(args)) => assert_eq!(args.max_moves, Some(5)),
            None => panic!("expected autoplay"),
        }
    }

    #[test]
    fn test_fill_out_of_range_is_rejected() {
        assert!(Cli::try_parse_from(["reverse-tetris", "--fill", "101"]).is_err());
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let cli = Cli::try_parse_from(["reverse-tetris", "--offered", "4"]).unwrap();
        let err = cli.game_config().unwrap_err();
        assert!(format!("{err:#}").contains("invalid game configuration"));
    }
}
