//! Simulation report generation.

use serde::Serialize;

use super::runner::RunStats;
use crate::engine::Badge;

/// Badge totals across every level of every run.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct BadgeCounts {
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub none: u32,
}

impl BadgeCounts {
    fn add(&mut self, badge: Badge) {
        match badge {
            Badge::Gold => self.gold += 1,
            Badge::Silver => self.silver += 1,
            Badge::Bronze => self.bronze += 1,
            Badge::None => self.none += 1,
        }
    }
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub avg_completion_percent: f64,
    pub avg_total_score: f64,
    pub max_total_score: u32,
    pub avg_score_per_level: Vec<f64>,
    pub badge_counts: BadgeCounts,
    pub battle_failures: u32,
    pub total_timeouts: u32,
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>, level_count: usize) -> Self {
        let num_runs = runs.len() as u32;
        let denom = f64::from(num_runs.max(1));

        let avg_completion_percent =
            runs.iter().map(|r| r.completion_percent).sum::<f64>() / denom;
        let avg_total_score = runs.iter().map(|r| f64::from(r.total_score)).sum::<f64>() / denom;
        let max_total_score = runs.iter().map(|r| r.total_score).max().unwrap_or(0);

        let mut avg_score_per_level = vec![0.0; level_count];
        for run in &runs {
            for (i, score) in run.per_level_score.iter().enumerate() {
                avg_score_per_level[i] += f64::from(*score);
            }
        }
        for slot in &mut avg_score_per_level {
            *slot /= denom;
        }

        let mut badge_counts = BadgeCounts::default();
        for run in &runs {
            for badge in &run.badges {
                badge_counts.add(*badge);
            }
        }

        let battle_failures = runs.iter().map(|r| r.failed_battles).sum();
        let total_timeouts = runs.iter().map(|r| r.timeouts).sum();

        Self {
            num_runs,
            avg_completion_percent,
            avg_total_score,
            max_total_score,
            avg_score_per_level,
            badge_counts,
            battle_failures,
            total_timeouts,
            run_stats: runs,
        }
    }

    /// Human-readable summary for the terminal.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("═══ SIMULATION RESULTS ═══\n");
        out.push_str(&format!("Runs:            {}\n", self.num_runs));
        out.push_str(&format!(
            "Avg completion:  {:.1}%\n",
            self.avg_completion_percent
        ));
        out.push_str(&format!("Avg total score: {:.1}\n", self.avg_total_score));
        out.push_str(&format!("Max total score: {}\n", self.max_total_score));
        out.push_str(&format!(
            "Badges:          {} gold / {} silver / {} bronze / {} none\n",
            self.badge_counts.gold,
            self.badge_counts.silver,
            self.badge_counts.bronze,
            self.badge_counts.none
        ));
        out.push_str(&format!("Battle failures: {}\n", self.battle_failures));
        out.push_str(&format!("Timeouts:        {}\n", self.total_timeouts));
        out.push_str("\nAvg score per level:\n");
        for (i, score) in self.avg_score_per_level.iter().enumerate() {
            out.push_str(&format!("  Level {}: {:.1}\n", i + 1, score));
        }
        out
    }

    /// Full report as pretty-printed JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("report serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(total_score: u32, completion: f64, badges: Vec<Badge>) -> RunStats {
        RunStats {
            levels_completed: badges.iter().filter(|b| **b != Badge::None).count(),
            total_score,
            per_level_score: vec![total_score],
            badges,
            failed_battles: 0,
            timeouts: 0,
            completion_percent: completion,
        }
    }

    #[test]
    fn aggregates_averages_and_badges() {
        let runs = vec![
            stats(100, 100.0, vec![Badge::Gold]),
            stats(50, 50.0, vec![Badge::Bronze]),
        ];
        let report = SimReport::from_runs(runs, 1);
        assert_eq!(report.num_runs, 2);
        assert_eq!(report.avg_total_score, 75.0);
        assert_eq!(report.avg_completion_percent, 75.0);
        assert_eq!(report.max_total_score, 100);
        assert_eq!(report.badge_counts.gold, 1);
        assert_eq!(report.badge_counts.bronze, 1);
    }

    #[test]
    fn empty_run_set_does_not_divide_by_zero() {
        let report = SimReport::from_runs(Vec::new(), 3);
        assert_eq!(report.num_runs, 0);
        assert_eq!(report.avg_total_score, 0.0);
    }

    #[test]
    fn json_round_trips_as_valid_json() {
        let report = SimReport::from_runs(vec![stats(10, 100.0, vec![Badge::Silver])], 1);
        let value: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(value["num_runs"], 1);
    }
}
