//! Summary statistics for a computed layout

use crate::layout::{LayoutMode, LayoutResult};
use grove_domain::{AttentionTier, GardenTier, HealthTier};
use std::collections::HashMap;

/// Tier counts for one layout
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutStats {
    /// Mode the layout was computed for
    pub mode: LayoutMode,
    /// Total placed contacts
    pub total: usize,
    /// Contacts per tier
    pub per_tier: HashMap<HealthTier, usize>,
    /// Contacts with no readable interaction date
    pub never_contacted: usize,
}

impl LayoutStats {
    /// Count tiers in a layout
    pub fn from_layout(layout: &LayoutResult) -> Self {
        let mut stats = Self {
            mode: layout.mode,
            total: layout.entries.len(),
            ..Self::default()
        };
        for entry in &layout.entries {
            *stats.per_tier.entry(entry.tier).or_insert(0) += 1;
            if entry.days_since.is_none() {
                stats.never_contacted += 1;
            }
        }
        stats
    }

    /// Count for one tier
    pub fn count(&self, tier: impl Into<HealthTier>) -> usize {
        self.per_tier.get(&tier.into()).copied().unwrap_or(0)
    }

    /// Tiers of the layout's policy, best first
    fn tiers(&self) -> Vec<HealthTier> {
        match self.mode {
            LayoutMode::Garden => GardenTier::ALL.iter().map(|&t| t.into()).collect(),
            LayoutMode::Tree => vec![
                AttentionTier::Healthy.into(),
                AttentionTier::NeedsAttention.into(),
            ],
        }
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Layout Summary ({})", self.mode),
            "======================".to_string(),
            format!("Contacts: {}", self.total),
            format!("Never contacted: {}", self.never_contacted),
            String::new(),
            "By tier:".to_string(),
        ];
        for tier in self.tiers() {
            lines.push(format!("  {}: {}", tier, self.count(tier)));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LayoutEngine;
    use chrono::{Duration, TimeZone, Utc};
    use grove_domain::Contact;

    #[test]
    fn test_counts_and_summary() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let recent = (now - Duration::days(2)).to_rfc3339();
        let contacts = vec![
            Contact::new("1", "work").with_last_interaction(recent.clone()),
            Contact::new("2", "work").with_last_interaction(recent),
            Contact::new("3", "work"),
        ];
        let layout = LayoutEngine::default().compute_layout(&contacts, LayoutMode::Garden, now);
        let stats = LayoutStats::from_layout(&layout);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.count(GardenTier::Blooming), 2);
        assert_eq!(stats.count(GardenTier::Fading), 1);
        assert_eq!(stats.count(GardenTier::Thirsty), 0);
        assert_eq!(stats.never_contacted, 1);

        let summary = stats.summary();
        assert!(summary.contains("Layout Summary (garden)"));
        assert!(summary.contains("blooming: 2"));
        assert!(summary.contains("nourished: 0"));
        assert!(summary.contains("fading: 1"));
    }

    #[test]
    fn test_tree_summary_lists_attention_tiers() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let contacts = vec![Contact::new("1", "family")];
        let layout = LayoutEngine::default().compute_layout(&contacts, LayoutMode::Tree, now);
        let summary = LayoutStats::from_layout(&layout).summary();
        assert!(summary.contains("healthy: 0"));
        assert!(summary.contains("needs_attention: 1"));
    }
}
