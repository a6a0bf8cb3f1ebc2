//! Simulation report generation.

use super::config::SimConfig;
use super::stats::RunStats;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregated results from a simulation batch.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub level_ups_per_run: u32,
    pub cards_per_level: usize,

    // Offer totals
    pub total_offers: u64,
    pub empty_offers: u64,
    pub short_offers: u64,
    pub guarantee_violations: u64,
    pub cards_offered_by_kind: BTreeMap<String, u64>,

    // Choices
    pub cards_applied: u64,
    pub cards_ignored: u64,

    // End-of-run averages
    pub avg_final_level: f64,
    pub avg_final_weapons: f64,
    pub avg_final_stat_levels: BTreeMap<String, f64>,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, config: &SimConfig) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;

        let sum = |f: fn(&RunStats) -> u32| runs.iter().map(|r| f(r) as u64).sum::<u64>();
        let total_offers = sum(|r| r.offers);
        let empty_offers = sum(|r| r.empty_offers);
        let short_offers = sum(|r| r.short_offers);
        let guarantee_violations = sum(|r| r.guarantee_violations);
        let cards_applied = sum(|r| r.cards_applied);
        let cards_ignored = sum(|r| r.cards_ignored);

        let mut cards_offered_by_kind = BTreeMap::new();
        for run in &runs {
            for (kind, count) in &run.cards_offered {
                *cards_offered_by_kind
                    .entry(kind.name().to_string())
                    .or_insert(0) += count;
            }
        }

        let avg_final_level = sum(|r| r.final_level) as f64 / divisor;
        let avg_final_weapons = sum(|r| r.final_weapons) as f64 / divisor;

        let mut avg_final_stat_levels: BTreeMap<String, f64> = BTreeMap::new();
        for run in &runs {
            for (name, level) in &run.final_stat_levels {
                *avg_final_stat_levels.entry(name.clone()).or_insert(0.0) += *level as f64;
            }
        }
        for total in avg_final_stat_levels.values_mut() {
            *total /= divisor;
        }

        Self {
            num_runs,
            level_ups_per_run: config.level_ups_per_run,
            cards_per_level: config.cards_per_level,
            total_offers,
            empty_offers,
            short_offers,
            guarantee_violations,
            cards_offered_by_kind,
            cards_applied,
            cards_ignored,
            avg_final_level,
            avg_final_weapons,
            avg_final_stat_levels,
            run_stats: runs,
        }
    }

    pub fn total_cards_offered(&self) -> u64 {
        self.cards_offered_by_kind.values().sum()
    }

    /// Share of dealt cards that were stat cards, 0.0..1.0
    pub fn stat_card_share(&self) -> f64 {
        let total = self.total_cards_offered();
        if total == 0 {
            return 0.0;
        }
        let stats: u64 = self
            .cards_offered_by_kind
            .iter()
            .filter(|(name, _)| name.starts_with("Stat"))
            .map(|(_, count)| count)
            .sum();
        stats as f64 / total as f64
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                 UPGRADE CARD SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} x {} level-ups, {} cards per level\n\n",
            self.num_runs, self.level_ups_per_run, self.cards_per_level
        ));

        report.push_str("── OFFERS ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Total Offers:        {}\n", self.total_offers));
        report.push_str(&format!("  Empty Offers:        {}\n", self.empty_offers));
        report.push_str(&format!("  Short Offers:        {}\n", self.short_offers));
        report.push_str(&format!(
            "  Guarantee Misses:    {}\n\n",
            self.guarantee_violations
        ));

        report.push_str("── CARDS DEALT ──────────────────────────────────────────────────\n");
        let total = self.total_cards_offered().max(1) as f64;
        for (kind, count) in &self.cards_offered_by_kind {
            let pct = *count as f64 / total * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  {:<15} {:>7} {:>5.1}% {}\n", kind, count, pct, bar));
        }
        report.push_str(&format!(
            "  Stat Share:     {:.1}%\n\n",
            self.stat_card_share() * 100.0
        ));

        report.push_str("── CHOICES ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Applied:             {}\n", self.cards_applied));
        report.push_str(&format!("  Ignored:             {}\n\n", self.cards_ignored));

        report.push_str("── END OF RUN ───────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Final Level:     {:.1}\n",
            self.avg_final_level
        ));
        report.push_str(&format!(
            "  Avg Weapons:         {:.2}\n",
            self.avg_final_weapons
        ));
        for (stat, level) in &self.avg_final_stat_levels {
            report.push_str(&format!("  Avg {:<18} Lv.{:.2}\n", stat, level));
        }
        report.push('\n');

        report.push_str("── ASSESSMENT ───────────────────────────────────────────────────\n");
        let verdict = if self.guarantee_violations > 0 {
            "BROKEN - Stat guarantee missed"
        } else if self.empty_offers > 0 {
            "DRY - Some level-ups had nothing to offer"
        } else {
            "OK - Every offer honored the stat guarantee"
        };
        report.push_str(&format!("  {}\n", verdict));

        report
    }

    /// Generate a JSON report.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
