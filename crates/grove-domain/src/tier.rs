//! Tier module - health buckets and their render colors
//!
//! Two independent tier families exist. Garden tiers are cosmetic and color
//! the garden rings. Attention tiers are actionable and drive nudge lists
//! and the tree view. Each family orders from best to worst, so `a < b`
//! means `a` is healthier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Garden-view freshness tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GardenTier {
    /// Recently in touch
    Blooming,
    /// In touch within the last few weeks
    Nourished,
    /// Drifting
    Thirsty,
    /// Long silent or never contacted
    Fading,
}

impl GardenTier {
    /// All garden tiers, innermost ring first
    pub const ALL: [GardenTier; 4] = [
        GardenTier::Blooming,
        GardenTier::Nourished,
        GardenTier::Thirsty,
        GardenTier::Fading,
    ];

    /// Get the tier name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            GardenTier::Blooming => "blooming",
            GardenTier::Nourished => "nourished",
            GardenTier::Thirsty => "thirsty",
            GardenTier::Fading => "fading",
        }
    }

    /// Parse a tier from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "blooming" => Some(GardenTier::Blooming),
            "nourished" => Some(GardenTier::Nourished),
            "thirsty" => Some(GardenTier::Thirsty),
            "fading" => Some(GardenTier::Fading),
            _ => None,
        }
    }

    /// Fixed render color (hex)
    pub fn color(&self) -> &'static str {
        match self {
            GardenTier::Blooming => "#22c55e",
            GardenTier::Nourished => "#84cc16",
            GardenTier::Thirsty => "#f59e0b",
            GardenTier::Fading => "#a8a29e",
        }
    }

    /// Ring index, 0 for the innermost band
    pub fn ring_index(&self) -> usize {
        *self as usize
    }
}

/// Attention-policy tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttentionTier {
    /// Within the contact's expected cadence
    Healthy,
    /// Overdue or never contacted
    NeedsAttention,
}

impl AttentionTier {
    /// Get the tier name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            AttentionTier::Healthy => "healthy",
            AttentionTier::NeedsAttention => "needs_attention",
        }
    }

    /// Fixed render color (hex)
    pub fn color(&self) -> &'static str {
        match self {
            AttentionTier::Healthy => "#10b981",
            AttentionTier::NeedsAttention => "#ef4444",
        }
    }
}

/// A tier from either policy, as attached to a layout entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HealthTier {
    /// Garden policy tier
    Garden(GardenTier),
    /// Attention policy tier
    Attention(AttentionTier),
}

impl HealthTier {
    /// Get the tier name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthTier::Garden(t) => t.as_str(),
            HealthTier::Attention(t) => t.as_str(),
        }
    }

    /// Fixed render color for this tier
    pub fn color(&self) -> &'static str {
        match self {
            HealthTier::Garden(t) => t.color(),
            HealthTier::Attention(t) => t.color(),
        }
    }
}

impl From<GardenTier> for HealthTier {
    fn from(tier: GardenTier) -> Self {
        HealthTier::Garden(tier)
    }
}

impl From<AttentionTier> for HealthTier {
    fn from(tier: AttentionTier) -> Self {
        HealthTier::Attention(tier)
    }
}

impl fmt::Display for HealthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garden_ordering() {
        assert!(GardenTier::Blooming < GardenTier::Nourished);
        assert!(GardenTier::Nourished < GardenTier::Thirsty);
        assert!(GardenTier::Thirsty < GardenTier::Fading);
        assert!(AttentionTier::Healthy < AttentionTier::NeedsAttention);
    }

    #[test]
    fn test_ring_index() {
        for (i, tier) in GardenTier::ALL.iter().enumerate() {
            assert_eq!(tier.ring_index(), i);
        }
    }

    #[test]
    fn test_palette_is_distinct() {
        let mut colors: Vec<&str> = GardenTier::ALL.iter().map(|t| t.color()).collect();
        colors.push(AttentionTier::Healthy.color());
        colors.push(AttentionTier::NeedsAttention.color());
        let mut deduped = colors.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(colors.len(), deduped.len());
    }

    #[test]
    fn test_health_tier_delegates() {
        let tier: HealthTier = GardenTier::Thirsty.into();
        assert_eq!(tier.as_str(), "thirsty");
        assert_eq!(tier.color(), GardenTier::Thirsty.color());

        let tier: HealthTier = AttentionTier::NeedsAttention.into();
        assert_eq!(tier.to_string(), "needs_attention");
    }

    #[test]
    fn test_parse_roundtrip() {
        for tier in GardenTier::ALL {
            assert_eq!(GardenTier::parse(tier.as_str()), Some(tier));
        }
        assert_eq!(GardenTier::parse("wilted"), None);
    }
}
