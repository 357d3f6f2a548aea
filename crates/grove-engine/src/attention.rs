//! Needs-attention queue
//!
//! The actionable counterpart of the garden: who to reach out to, most
//! urgent first.

use crate::classifier::{days_since, AttentionPolicy};
use chrono::{DateTime, Utc};
use grove_domain::{AttentionTier, Contact, ContactId, Importance};
use serde::Serialize;
use std::cmp::Ordering;

/// One contact due for a check-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttentionItem {
    /// Contact id
    pub id: ContactId,
    /// Effective importance
    pub importance: Importance,
    /// Whole days since last interaction, `None` if never contacted
    pub days_since: Option<i64>,
    /// Threshold that was crossed
    pub threshold_days: i64,
    /// Days past the threshold, `None` if never contacted
    pub overdue_days: Option<i64>,
}

/// Builds the ordered needs-attention list
#[derive(Debug, Clone, Default)]
pub struct AttentionQueue {
    policy: AttentionPolicy,
}

impl AttentionQueue {
    /// Create a queue over the given attention policy
    pub fn new(policy: AttentionPolicy) -> Self {
        Self { policy }
    }

    /// Contacts needing attention, most urgent first
    ///
    /// Never-contacted people lead (high importance first), followed by
    /// everyone else ordered by how far past their threshold they are.
    pub fn build(&self, contacts: &[Contact], now: DateTime<Utc>) -> Vec<AttentionItem> {
        let mut items: Vec<AttentionItem> = contacts
            .iter()
            .filter_map(|contact| {
                let days = days_since(contact, now);
                let threshold = self.policy.threshold_for(contact);
                if self.policy.tier_for(days, threshold) != AttentionTier::NeedsAttention {
                    return None;
                }
                Some(AttentionItem {
                    id: contact.id.clone(),
                    importance: contact.importance(),
                    days_since: days,
                    threshold_days: threshold,
                    overdue_days: days.map(|d| d - threshold),
                })
            })
            .collect();

        items.sort_by(urgency);
        items
    }
}

fn urgency(a: &AttentionItem, b: &AttentionItem) -> Ordering {
    let overdue = match (a.overdue_days, b.overdue_days) {
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (a_overdue, b_overdue) => b_overdue.cmp(&a_overdue),
    };
    overdue
        .then_with(|| a.importance.cmp(&b.importance))
        .then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn contacted(id: &str, days_ago: i64, importance: Importance) -> Contact {
        Contact::new(id, "work")
            .with_last_interaction((now() - Duration::days(days_ago)).to_rfc3339())
            .with_importance(importance)
    }

    #[test]
    fn test_only_overdue_contacts_listed() {
        let contacts = vec![
            contacted("fresh", 3, Importance::High),
            contacted("due", 14, Importance::High),
        ];
        let queue = AttentionQueue::default().build(&contacts, now());
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].id, "due");
        assert_eq!(queue[0].overdue_days, Some(0));
        assert_eq!(queue[0].threshold_days, 14);
    }

    #[test]
    fn test_urgency_order() {
        let contacts = vec![
            contacted("low-long", 200, Importance::Low),
            contacted("med-short", 35, Importance::Medium),
            Contact::new("never-low", "work").with_importance(Importance::Low),
            Contact::new("never-high", "work").with_importance(Importance::High),
            contacted("high-mid", 50, Importance::High),
        ];
        let queue = AttentionQueue::default().build(&contacts, now());
        let ids: Vec<&str> = queue.iter().map(|i| i.id.as_str()).collect();

        // overdue: low-long 110, high-mid 36, med-short 5
        assert_eq!(
            ids,
            vec!["never-high", "never-low", "low-long", "high-mid", "med-short"]
        );
    }

    #[test]
    fn test_equal_overdue_ranks_importance() {
        let contacts = vec![
            contacted("m", 40, Importance::Medium),
            contacted("h", 24, Importance::High),
        ];
        let queue = AttentionQueue::default().build(&contacts, now());
        let ids: Vec<&str> = queue.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["h", "m"]);
    }

    #[test]
    fn test_malformed_dates_are_never_contacted() {
        let contacts = vec![Contact::new("x", "work").with_last_interaction("n/a")];
        let queue = AttentionQueue::default().build(&contacts, now());
        assert_eq!(queue[0].days_since, None);
        assert_eq!(queue[0].overdue_days, None);
    }
}
