//! Match results storage and reporting.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Outcome of one game, from the first engine's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Win,
    Loss,
    Draw,
}

impl GameOutcome {
    /// The same game seen from the other side.
    pub fn flipped(self) -> GameOutcome {
        match self {
            GameOutcome::Win => GameOutcome::Loss,
            GameOutcome::Loss => GameOutcome::Win,
            GameOutcome::Draw => GameOutcome::Draw,
        }
    }
}

/// Aggregate result of a series of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win => self.wins += 1,
            GameOutcome::Loss => self.losses += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score fraction in [0, 1], draws counting half.
    pub fn score(&self) -> f64 {
        if self.total_games() == 0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / self.total_games() as f64
    }
}

/// A recorded series between two difficulty tiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesEntry {
    pub first: String,
    pub second: String,
    pub result: MatchResult,
}

/// Full results of one matchplay session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesResults {
    pub name: String,
    pub series: Vec<SeriesEntry>,
}

impl SeriesResults {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            series: Vec::new(),
        }
    }

    pub fn add_series(&mut self, first: &str, second: &str, result: MatchResult) {
        self.series.push(SeriesEntry {
            first: first.to_string(),
            second: second.to_string(),
            result,
        });
    }

    /// Save results to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
    }

    /// Load results from a JSON file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }

    /// Generate a text report.
    pub fn report(&self) -> String {
        let mut out = format!("=== {} ===\n", self.name);
        for entry in &self.series {
            out.push_str(&format!(
                "{} vs {}: {}-{}-{} ({:.1}%)\n",
                entry.first,
                entry.second,
                entry.result.wins,
                entry.result.losses,
                entry.result.draws,
                entry.result.score() * 100.0
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_and_score() {
        let mut result = MatchResult::default();
        result.record(GameOutcome::Win);
        result.record(GameOutcome::Win);
        result.record(GameOutcome::Draw);
        result.record(GameOutcome::Loss);
        assert_eq!(result.total_games(), 4);
        assert_eq!(result.score(), 0.625);
    }

    #[test]
    fn flipped_outcome_swaps_sides() {
        assert_eq!(GameOutcome::Win.flipped(), GameOutcome::Loss);
        assert_eq!(GameOutcome::Draw.flipped(), GameOutcome::Draw);
    }

    #[test]
    fn save_and_load_round_trip() {
        let mut results = SeriesResults::new("round trip");
        results.add_series(
            "deep",
            "random",
            MatchResult {
                wins: 7,
                losses: 2,
                draws: 1,
            },
        );

        let path =
            std::env::temp_dir().join(format!("matchplay_results_{}.json", std::process::id()));
        results.save(&path).unwrap();
        let loaded = SeriesResults::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.name, results.name);
        assert_eq!(loaded.series.len(), 1);
        assert_eq!(loaded.series[0].first, "deep");
        assert_eq!(loaded.series[0].second, "random");
        assert_eq!(loaded.series[0].result, results.series[0].result);
    }

    #[test]
    fn report_lists_each_series() {
        let mut results = SeriesResults::new("smoke");
        results.add_series(
            "random",
            "shallow",
            MatchResult {
                wins: 1,
                losses: 3,
                draws: 0,
            },
        );
        let report = results.report();
        assert!(report.contains("random vs shallow: 1-3-0"));
    }
}
