//! Health classification
//!
//! Turns a contact's last-interaction date into a tier under one of two
//! independent policies. The garden policy colors the garden rings; the
//! attention policy decides who shows up in nudge lists. Their thresholds
//! differ on purpose and are configured separately.

use chrono::{DateTime, Utc};
use grove_domain::{
    days_between, parse_timestamp, AttentionTier, Contact, GardenTier, HealthTier, Importance,
};
use serde::{Deserialize, Serialize};

/// Day count standing in for "never contacted" wherever a number is needed
pub const NEVER_CONTACTED_DAYS: i64 = 999;

/// Whole days since the contact's last interaction
///
/// `None` when there is no interaction on record or the date cannot be read.
pub fn days_since(contact: &Contact, now: DateTime<Utc>) -> Option<i64> {
    contact
        .last_interaction_date
        .as_deref()
        .and_then(parse_timestamp)
        .map(|last| days_between(last, now))
}

/// Day thresholds for the garden tiers (inclusive upper bounds)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GardenPolicy {
    /// Last day still counted as Blooming
    pub blooming_max_days: i64,
    /// Last day still counted as Nourished
    pub nourished_max_days: i64,
    /// Last day still counted as Thirsty; anything older is Fading
    pub thirsty_max_days: i64,
    /// Day count used for contacts with no interaction on record
    pub never_contacted_days: i64,
}

impl Default for GardenPolicy {
    fn default() -> Self {
        Self {
            blooming_max_days: 14,
            nourished_max_days: 45,
            thirsty_max_days: 120,
            never_contacted_days: NEVER_CONTACTED_DAYS,
        }
    }
}

impl GardenPolicy {
    /// Day count used for ordering and thresholds
    pub fn effective_days(&self, days_since: Option<i64>) -> i64 {
        days_since.unwrap_or(self.never_contacted_days)
    }

    /// Garden tier for a day count
    pub fn tier_for(&self, days_since: Option<i64>) -> GardenTier {
        let days = self.effective_days(days_since);
        if days <= self.blooming_max_days {
            GardenTier::Blooming
        } else if days <= self.nourished_max_days {
            GardenTier::Nourished
        } else if days <= self.thirsty_max_days {
            GardenTier::Thirsty
        } else {
            GardenTier::Fading
        }
    }
}

/// Importance-adjusted thresholds for the attention policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttentionPolicy {
    /// Days before a high-importance contact needs attention
    pub high_threshold_days: i64,
    /// Days before a medium-importance contact needs attention
    pub medium_threshold_days: i64,
    /// Days before a low-importance contact needs attention
    pub low_threshold_days: i64,
    /// Let a contact's `targetFrequencyDays` replace the importance threshold
    pub honor_frequency_override: bool,
}

impl Default for AttentionPolicy {
    fn default() -> Self {
        Self {
            high_threshold_days: 14,
            medium_threshold_days: 30,
            low_threshold_days: 90,
            honor_frequency_override: false,
        }
    }
}

impl AttentionPolicy {
    /// Threshold for a given importance
    pub fn threshold_for_importance(&self, importance: Importance) -> i64 {
        match importance {
            Importance::High => self.high_threshold_days,
            Importance::Medium => self.medium_threshold_days,
            Importance::Low => self.low_threshold_days,
        }
    }

    /// Threshold that applies to a contact
    pub fn threshold_for(&self, contact: &Contact) -> i64 {
        match contact.target_frequency_days {
            Some(days) if self.honor_frequency_override && days > 0 => i64::from(days),
            _ => self.threshold_for_importance(contact.importance()),
        }
    }

    /// Attention tier for a day count against a threshold
    pub fn tier_for(&self, days_since: Option<i64>, threshold_days: i64) -> AttentionTier {
        match days_since {
            Some(days) if days < threshold_days => AttentionTier::Healthy,
            _ => AttentionTier::NeedsAttention,
        }
    }
}

/// Which policy to classify under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Garden rings
    Garden,
    /// Nudge lists and tree coloring
    Attention,
}

/// Outcome of classifying one contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification<T> {
    /// Tier under the chosen policy
    pub tier: T,
    /// Whole days since last interaction, `None` if never contacted
    pub days_since: Option<i64>,
}

/// Classifier holding both policies
#[derive(Debug, Clone, Default)]
pub struct HealthClassifier {
    garden: GardenPolicy,
    attention: AttentionPolicy,
}

impl HealthClassifier {
    /// Create a classifier from explicit policies
    pub fn new(garden: GardenPolicy, attention: AttentionPolicy) -> Self {
        Self { garden, attention }
    }

    /// Garden policy in use
    pub fn garden_policy(&self) -> &GardenPolicy {
        &self.garden
    }

    /// Attention policy in use
    pub fn attention_policy(&self) -> &AttentionPolicy {
        &self.attention
    }

    /// Classify under the garden policy
    pub fn garden(&self, contact: &Contact, now: DateTime<Utc>) -> Classification<GardenTier> {
        let days = days_since(contact, now);
        Classification {
            tier: self.garden.tier_for(days),
            days_since: days,
        }
    }

    /// Classify under the attention policy
    pub fn attention(
        &self,
        contact: &Contact,
        now: DateTime<Utc>,
    ) -> Classification<AttentionTier> {
        let days = days_since(contact, now);
        Classification {
            tier: self.attention.tier_for(days, self.attention.threshold_for(contact)),
            days_since: days,
        }
    }

    /// Classify under either policy
    pub fn classify(
        &self,
        contact: &Contact,
        now: DateTime<Utc>,
        policy: Policy,
    ) -> Classification<HealthTier> {
        match policy {
            Policy::Garden => {
                let c = self.garden(contact, now);
                Classification {
                    tier: c.tier.into(),
                    days_since: c.days_since,
                }
            }
            Policy::Attention => {
                let c = self.attention(contact, now);
                Classification {
                    tier: c.tier.into(),
                    days_since: c.days_since,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn contacted(days_ago: i64) -> Contact {
        let last = now() - Duration::days(days_ago);
        Contact::new("c", "work").with_last_interaction(last.to_rfc3339())
    }

    #[test]
    fn test_garden_thresholds() {
        let classifier = HealthClassifier::default();
        let tier = |d| classifier.garden(&contacted(d), now()).tier;

        assert_eq!(tier(0), GardenTier::Blooming);
        assert_eq!(tier(14), GardenTier::Blooming);
        assert_eq!(tier(15), GardenTier::Nourished);
        assert_eq!(tier(45), GardenTier::Nourished);
        assert_eq!(tier(46), GardenTier::Thirsty);
        assert_eq!(tier(120), GardenTier::Thirsty);
        assert_eq!(tier(121), GardenTier::Fading);
    }

    #[test]
    fn test_never_contacted_is_fading() {
        let classifier = HealthClassifier::default();
        let result = classifier.garden(&Contact::new("c", "work"), now());
        assert_eq!(result.tier, GardenTier::Fading);
        assert_eq!(result.days_since, None);
    }

    #[test]
    fn test_malformed_date_is_never_contacted() {
        let classifier = HealthClassifier::default();
        let contact = Contact::new("c", "work").with_last_interaction("yesterday-ish");
        let garden = classifier.garden(&contact, now());
        assert_eq!(garden.tier, GardenTier::Fading);
        assert_eq!(garden.days_since, None);

        let attention = classifier.attention(&contact, now());
        assert_eq!(attention.tier, AttentionTier::NeedsAttention);
    }

    #[test]
    fn test_attention_thresholds_by_importance() {
        let classifier = HealthClassifier::default();
        let tier = |d, importance| {
            classifier
                .attention(&contacted(d).with_importance(importance), now())
                .tier
        };

        assert_eq!(tier(13, Importance::High), AttentionTier::Healthy);
        assert_eq!(tier(14, Importance::High), AttentionTier::NeedsAttention);
        assert_eq!(tier(29, Importance::Medium), AttentionTier::Healthy);
        assert_eq!(tier(30, Importance::Medium), AttentionTier::NeedsAttention);
        assert_eq!(tier(89, Importance::Low), AttentionTier::Healthy);
        assert_eq!(tier(90, Importance::Low), AttentionTier::NeedsAttention);
    }

    #[test]
    fn test_missing_importance_uses_medium() {
        let classifier = HealthClassifier::default();
        assert_eq!(
            classifier.attention(&contacted(29), now()).tier,
            AttentionTier::Healthy
        );
        assert_eq!(
            classifier.attention(&contacted(30), now()).tier,
            AttentionTier::NeedsAttention
        );
    }

    #[test]
    fn test_frequency_override_is_opt_in() {
        let contact = contacted(10).with_target_frequency(7);

        let default = HealthClassifier::default();
        assert_eq!(default.attention(&contact, now()).tier, AttentionTier::Healthy);

        let policy = AttentionPolicy {
            honor_frequency_override: true,
            ..AttentionPolicy::default()
        };
        let honoring = HealthClassifier::new(GardenPolicy::default(), policy);
        assert_eq!(
            honoring.attention(&contact, now()).tier,
            AttentionTier::NeedsAttention
        );
        // A zero override is ignored
        assert_eq!(
            honoring
                .attention(&contacted(10).with_target_frequency(0), now())
                .tier,
            AttentionTier::Healthy
        );
    }

    #[test]
    fn test_policies_configured_independently() {
        let garden = GardenPolicy {
            blooming_max_days: 3,
            ..GardenPolicy::default()
        };
        let classifier = HealthClassifier::new(garden, AttentionPolicy::default());
        let contact = contacted(5);

        assert_eq!(classifier.garden(&contact, now()).tier, GardenTier::Nourished);
        assert_eq!(classifier.attention(&contact, now()).tier, AttentionTier::Healthy);
    }

    #[test]
    fn test_classify_dispatch() {
        let classifier = HealthClassifier::default();
        let contact = contacted(20);
        let garden = classifier.classify(&contact, now(), Policy::Garden);
        assert_eq!(garden.tier, HealthTier::Garden(GardenTier::Nourished));
        assert_eq!(garden.days_since, Some(20));

        let attention = classifier.classify(&contact, now(), Policy::Attention);
        assert_eq!(attention.tier, HealthTier::Attention(AttentionTier::Healthy));
    }
}
