//! Contact module - the person records the engine scores and places

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Stable contact identifier as issued by the persistence layer
pub type ContactId = String;

/// Relationship category of a contact
///
/// Categories decide which branch cluster a contact lands in for the tree view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Colleagues
    Work,
    /// Relatives
    Family,
    /// Personal friends
    Friends,
    /// Customers and accounts
    Clients,
    /// Loose professional ties
    Networking,
}

impl Category {
    /// All categories in canonical order
    pub const ALL: [Category; 5] = [
        Category::Work,
        Category::Family,
        Category::Friends,
        Category::Clients,
        Category::Networking,
    ];

    /// Get the category name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Family => "family",
            Category::Friends => "friends",
            Category::Clients => "clients",
            Category::Networking => "networking",
        }
    }

    /// Parse a category label, ignoring case and surrounding whitespace
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "work" => Some(Category::Work),
            "family" => Some(Category::Family),
            "friends" => Some(Category::Friends),
            "clients" => Some(Category::Clients),
            "networking" => Some(Category::Networking),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much a relationship matters to the user
///
/// Drives the attention threshold: important people need contact sooner.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    /// Check in often
    High,
    /// The default when nothing is recorded
    #[default]
    Medium,
    /// Occasional contact is fine
    Low,
}

impl Importance {
    /// Get the importance name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Importance::High => "high",
            Importance::Medium => "medium",
            Importance::Low => "low",
        }
    }

    /// Parse an importance label, ignoring case and surrounding whitespace
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" => Some(Importance::High),
            "medium" => Some(Importance::Medium),
            "low" => Some(Importance::Low),
            _ => None,
        }
    }
}

/// A contact record as delivered by the persistence collaborator
///
/// Fields are kept close to the wire: `category` and `last_interaction_date`
/// stay raw strings because unknown categories and malformed dates are
/// ordinary input that the engine resolves, not errors at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Stable identifier
    pub id: ContactId,

    /// Category label (work, family, friends, clients, networking)
    #[serde(default, deserialize_with = "lenient_category")]
    pub category: String,

    /// ISO-8601 timestamp of the last logged interaction
    #[serde(default, deserialize_with = "lenient_text")]
    pub last_interaction_date: Option<String>,

    /// Importance; unknown labels degrade to `None` (treated as medium)
    #[serde(default, deserialize_with = "lenient_importance")]
    pub importance: Option<Importance>,

    /// Desired days between interactions, overriding the importance default
    #[serde(default, deserialize_with = "lenient_days")]
    pub target_frequency_days: Option<u32>,
}

impl Contact {
    /// Create a contact with no interaction history and default importance
    pub fn new(id: impl Into<ContactId>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            last_interaction_date: None,
            importance: None,
            target_frequency_days: None,
        }
    }

    /// Set the last interaction timestamp
    pub fn with_last_interaction(mut self, timestamp: impl Into<String>) -> Self {
        self.last_interaction_date = Some(timestamp.into());
        self
    }

    /// Set the importance
    pub fn with_importance(mut self, importance: Importance) -> Self {
        self.importance = Some(importance);
        self
    }

    /// Set the target frequency override
    pub fn with_target_frequency(mut self, days: u32) -> Self {
        self.target_frequency_days = Some(days);
        self
    }

    /// Parsed category, if the label is one of the known categories
    pub fn category(&self) -> Option<Category> {
        Category::parse(&self.category)
    }

    /// Effective importance (medium when unset)
    pub fn importance(&self) -> Importance {
        self.importance.unwrap_or_default()
    }
}

/// Any JSON value; the wrong kind for a field reads as absent
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseValue {
    Text(String),
    Integer(i64),
    Other(#[allow(dead_code)] IgnoredAny),
}

impl LooseValue {
    fn into_text(self) -> Option<String> {
        match self {
            LooseValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

fn loose<'de, D>(deserializer: D) -> Result<Option<LooseValue>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::deserialize(deserializer)
}

fn lenient_category<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(loose(deserializer)?.and_then(LooseValue::into_text))
}

fn lenient_importance<'de, D>(deserializer: D) -> Result<Option<Importance>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.as_deref().and_then(Importance::parse))
}

fn lenient_days<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match loose(deserializer)? {
        Some(LooseValue::Integer(n)) => u32::try_from(n).ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!(Category::parse("work"), Some(Category::Work));
        assert_eq!(Category::parse(" Family "), Some(Category::Family));
        assert_eq!(Category::parse("NETWORKING"), Some(Category::Networking));
        assert_eq!(Category::parse("acquaintances"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn test_importance_defaults_to_medium() {
        let contact = Contact::new("1", "work");
        assert_eq!(contact.importance(), Importance::Medium);
        assert_eq!(
            contact.with_importance(Importance::Low).importance(),
            Importance::Low
        );
    }

    #[test]
    fn test_deserialize_wire_record() {
        let json = r#"{
            "id": "c-42",
            "category": "friends",
            "lastInteractionDate": "2024-03-01T09:30:00Z",
            "importance": "high",
            "targetFrequencyDays": 7
        }"#;

        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.id, "c-42");
        assert_eq!(contact.category(), Some(Category::Friends));
        assert_eq!(
            contact.last_interaction_date.as_deref(),
            Some("2024-03-01T09:30:00Z")
        );
        assert_eq!(contact.importance(), Importance::High);
        assert_eq!(contact.target_frequency_days, Some(7));
    }

    #[test]
    fn test_deserialize_sparse_record() {
        let json = r#"{"id": "c-1", "importance": null, "lastInteractionDate": null}"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.category, "");
        assert_eq!(contact.category(), None);
        assert!(contact.last_interaction_date.is_none());
        assert_eq!(contact.importance(), Importance::Medium);
    }

    #[test]
    fn test_unknown_importance_degrades() {
        let json = r#"{"id": "c-1", "category": "work", "importance": "critical"}"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.importance, None);
        assert_eq!(contact.importance(), Importance::Medium);
    }

    #[test]
    fn test_null_category_falls_back() {
        let json = r#"{"id": "c-1", "category": null}"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.category, "");
        assert_eq!(contact.category(), None);
    }

    #[test]
    fn test_non_string_fields_degrade() {
        let json = r#"{
            "id": "c-1",
            "category": 7,
            "lastInteractionDate": 1717200000000,
            "importance": 3
        }"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.category, "");
        assert!(contact.last_interaction_date.is_none());
        assert_eq!(contact.importance, None);
    }

    #[test]
    fn test_bad_target_frequency_degrades() {
        for raw in ["-1", "2.5", "\"weekly\"", "99999999999", "{}"] {
            let json = format!(r#"{{"id": "c-1", "targetFrequencyDays": {}}}"#, raw);
            let contact: Contact = serde_json::from_str(&json).unwrap();
            assert_eq!(contact.target_frequency_days, None, "input {}", raw);
        }
        let contact: Contact =
            serde_json::from_str(r#"{"id": "c-1", "targetFrequencyDays": 21}"#).unwrap();
        assert_eq!(contact.target_frequency_days, Some(21));
    }

    #[test]
    fn test_contact_list_survives_one_bad_record() {
        let json = r#"[
            {"id": "1", "category": null},
            {"id": "2", "category": "work", "lastInteractionDate": false},
            {"id": "3", "category": "family", "targetFrequencyDays": -1}
        ]"#;
        let contacts: Vec<Contact> = serde_json::from_str(json).unwrap();
        assert_eq!(contacts.len(), 3);
        assert_eq!(contacts[2].category(), Some(Category::Family));
    }
}
