//! Match runner for playing game series between difficulty tiers.

use reversi_core::{Difficulty, Disc, Engine, Position, Ruleset};
use serde::{Deserialize, Serialize};

use crate::policy::{create_engine, search_limits, PolicyError};
use crate::results::{GameOutcome, MatchResult};

/// Configuration for a series of games.
///
/// Every field falls back to its default when absent, so a TOML config
/// file only needs the settings it overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Othello opening rules; false selects the Classic variant
    pub othello_rules: bool,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Base RNG seed; game N uses seed + N for the random tier
    pub seed: u64,
    /// Print progress during the match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            othello_rules: true,
            alternate_colors: true,
            seed: 0,
            verbose: true,
        }
    }
}

impl MatchConfig {
    /// Load a config from a TOML file.
    pub fn from_toml_file(path: &std::path::Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        toml::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }

    pub fn ruleset(&self) -> Ruleset {
        if self.othello_rules {
            Ruleset::Othello
        } else {
            Ruleset::Classic
        }
    }
}

/// Plays series of games between two difficulty tiers.
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a series between two difficulties.
    ///
    /// Returns the result from `difficulty1`'s perspective.
    pub fn run_match(
        &self,
        difficulty1: Difficulty,
        difficulty2: Difficulty,
    ) -> Result<MatchResult, PolicyError> {
        let mut result = MatchResult::default();

        for game_num in 0..self.config.num_games {
            let seed = self.config.seed + game_num as u64;
            let mut first = create_engine(difficulty1, Some(seed))?;
            let mut second = create_engine(difficulty2, Some(seed.wrapping_add(0x9e37)))?;

            // Alternate who plays Dark if configured
            let first_is_dark = !self.config.alternate_colors || game_num % 2 == 0;

            let outcome = if first_is_dark {
                self.play_game(
                    first.as_mut(),
                    difficulty1,
                    second.as_mut(),
                    difficulty2,
                )
            } else {
                self.play_game(
                    second.as_mut(),
                    difficulty2,
                    first.as_mut(),
                    difficulty1,
                )
                .flipped()
            };

            result.record(outcome);

            if self.config.verbose {
                let color = if first_is_dark { "D" } else { "L" };
                println!(
                    "Game {}/{}: {:?} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    color,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        Ok(result)
    }

    /// Play a single game; the outcome is from the dark player's
    /// perspective.
    fn play_game(
        &self,
        dark: &mut dyn Engine,
        dark_tier: Difficulty,
        light: &mut dyn Engine,
        light_tier: Difficulty,
    ) -> GameOutcome {
        let mut pos = Position::initial(self.config.ruleset(), Disc::Dark);
        dark.new_game();
        light.new_game();

        while !pos.is_terminal() {
            let result = if pos.side_to_move == Disc::Dark {
                dark.search(&pos, search_limits(dark_tier))
            } else {
                light.search(&pos, search_limits(light_tier))
            };

            match result.best_move {
                Some(mv) => pos = pos.apply(mv),
                // Engines only fail to move on terminal positions.
                None => break,
            }
        }

        let score = pos.score();
        if score.dark > score.light {
            GameOutcome::Win
        } else if score.light > score.dark {
            GameOutcome::Loss
        } else {
            GameOutcome::Draw
        }
    }
}

/// Quick utility to run a short series.
pub fn quick_match(
    difficulty1: Difficulty,
    difficulty2: Difficulty,
    num_games: u32,
    seed: u64,
) -> Result<MatchResult, PolicyError> {
    let config = MatchConfig {
        num_games,
        seed,
        verbose: false,
        ..Default::default()
    };
    MatchRunner::new(config).run_match(difficulty1, difficulty2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_self_play_completes() {
        let result = quick_match(Difficulty::Random, Difficulty::Random, 2, 5).unwrap();
        assert_eq!(result.total_games(), 2);
    }

    #[test]
    fn shallow_self_play_is_reproducible() {
        let first = quick_match(Difficulty::ShallowSearch, Difficulty::ShallowSearch, 2, 1);
        let second = quick_match(Difficulty::ShallowSearch, Difficulty::ShallowSearch, 2, 1);
        assert_eq!(first.unwrap(), second.unwrap());
    }

    #[test]
    fn human_tier_cannot_play_a_match() {
        let err = quick_match(Difficulty::None, Difficulty::Random, 1, 0).unwrap_err();
        assert!(matches!(err, PolicyError::UnsupportedDifficulty(_)));
    }

    #[test]
    fn config_loads_from_toml_file() {
        let path = std::env::temp_dir().join(format!("matchplay_cfg_{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "num_games = 4\nothello_rules = false\nalternate_colors = false\nseed = 9\nverbose = false\n",
        )
        .unwrap();

        let config = MatchConfig::from_toml_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.num_games, 4);
        assert_eq!(config.ruleset(), Ruleset::Classic);
        assert!(!config.alternate_colors);
        assert_eq!(config.seed, 9);
        assert!(!config.verbose);
    }

    #[test]
    fn sparse_toml_config_falls_back_to_defaults() {
        let path =
            std::env::temp_dir().join(format!("matchplay_cfg_sparse_{}.toml", std::process::id()));
        std::fs::write(&path, "num_games = 4\n").unwrap();

        let config = MatchConfig::from_toml_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.num_games, 4);
        let defaults = MatchConfig::default();
        assert_eq!(config.othello_rules, defaults.othello_rules);
        assert_eq!(config.alternate_colors, defaults.alternate_colors);
        assert_eq!(config.seed, defaults.seed);
        assert_eq!(config.verbose, defaults.verbose);
    }

    #[test]
    fn classic_ruleset_match_completes() {
        let config = MatchConfig {
            num_games: 1,
            othello_rules: false,
            seed: 3,
            verbose: false,
            ..Default::default()
        };
        let result = MatchRunner::new(config)
            .run_match(Difficulty::Random, Difficulty::Random)
            .unwrap();
        assert_eq!(result.total_games(), 1);
    }
}
