//! Tribe aggregation
//!
//! A tribe is the set of contacts carrying one tag. Each tribe gets a
//! neglect score (average days since contact) and the list comes back most
//! neglected first.

use crate::classifier::{days_since, NEVER_CONTACTED_DAYS};
use chrono::{DateTime, Utc};
use grove_domain::{Contact, ContactId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Tunables for tribe scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TribePolicy {
    /// A tribe is thirsty when its average strictly exceeds this
    pub thirsty_avg_days: f64,
    /// Day count used for never-contacted members
    pub never_contacted_days: i64,
}

impl Default for TribePolicy {
    fn default() -> Self {
        Self {
            thirsty_avg_days: 90.0,
            never_contacted_days: NEVER_CONTACTED_DAYS,
        }
    }
}

/// Aggregate health of one tribe
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TribeHealth {
    /// Tag defining the tribe
    pub tag_name: String,
    /// Number of members
    pub count: usize,
    /// Mean days since contact across members
    pub avg_days_since: f64,
    /// Longest silence among members
    pub max_days_since: i64,
    /// Average exceeds the thirst threshold
    pub is_thirsty: bool,
    /// Member ids in input order
    pub members: Vec<ContactId>,
}

/// Groups contacts by tag and ranks the groups by neglect
#[derive(Debug, Clone, Default)]
pub struct TribeAggregator {
    policy: TribePolicy,
}

impl TribeAggregator {
    /// Create an aggregator with the given policy
    pub fn new(policy: TribePolicy) -> Self {
        Self { policy }
    }

    /// Build per-tribe health, most neglected first
    ///
    /// Contacts without tags join no tribe. Blank tags are skipped and a tag
    /// repeated on one contact counts once. Ties on the average order by tag
    /// name.
    pub fn aggregate(
        &self,
        contacts: &[Contact],
        tags_by_contact_id: &HashMap<ContactId, Vec<String>>,
        now: DateTime<Utc>,
    ) -> Vec<TribeHealth> {
        let mut tribes: BTreeMap<&str, Vec<(&ContactId, i64)>> = BTreeMap::new();

        for contact in contacts {
            let Some(tags) = tags_by_contact_id.get(&contact.id) else {
                continue;
            };
            let days = days_since(contact, now).unwrap_or(self.policy.never_contacted_days);

            let distinct: BTreeSet<&str> = tags
                .iter()
                .map(|tag| tag.trim())
                .filter(|tag| !tag.is_empty())
                .collect();
            for tag in distinct {
                tribes.entry(tag).or_default().push((&contact.id, days));
            }
        }

        let mut result: Vec<TribeHealth> = tribes
            .into_iter()
            .map(|(tag, members)| self.score(tag, &members))
            .collect();

        result.sort_by(|a, b| {
            b.avg_days_since
                .total_cmp(&a.avg_days_since)
                .then_with(|| a.tag_name.cmp(&b.tag_name))
        });

        tracing::debug!("Aggregated {} tribes from {} contacts", result.len(), contacts.len());
        result
    }

    fn score(&self, tag: &str, members: &[(&ContactId, i64)]) -> TribeHealth {
        let count = members.len();
        let total: i64 = members.iter().map(|(_, days)| days).sum();
        // Every tribe has at least one member, but keep the division guarded
        let avg_days_since = total as f64 / count.max(1) as f64;
        let max_days_since = members.iter().map(|(_, days)| *days).max().unwrap_or(0);

        TribeHealth {
            tag_name: tag.to_string(),
            count,
            avg_days_since,
            max_days_since,
            is_thirsty: avg_days_since > self.policy.thirsty_avg_days,
            members: members.iter().map(|(id, _)| (*id).clone()).collect(),
        }
    }
}
