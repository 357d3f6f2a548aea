//! Layout orchestration
//!
//! Ties classification and placement together per view mode and produces
//! the renderer-facing result. Every call is a fresh recompute; nothing is
//! cached between calls.

use crate::attention::{AttentionItem, AttentionQueue};
use crate::classifier::HealthClassifier;
use crate::clusters::ClusterAssigner;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::rings::{RingAllocator, TierBand};
use crate::tribe::{TribeAggregator, TribeHealth};
use chrono::{DateTime, Utc};
use grove_domain::{
    BranchCluster, ClusterSlot, Contact, ContactId, GardenTier, HealthTier, Position,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Which visualization to lay out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Concentric tier rings
    #[default]
    Garden,
    /// Category branch clusters
    Tree,
}

impl LayoutMode {
    /// Get the mode name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutMode::Garden => "garden",
            LayoutMode::Tree => "tree",
        }
    }

    /// Parse a mode from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "garden" => Some(LayoutMode::Garden),
            "tree" => Some(LayoutMode::Tree),
            _ => None,
        }
    }
}

impl std::str::FromStr for LayoutMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid layout mode: {}", s))
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One renderable contact
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutEntry {
    /// Contact id
    pub id: ContactId,
    /// Position in layout space
    pub position: Position,
    /// Tier label under the mode's policy
    pub tier: HealthTier,
    /// Hex color derived from the tier
    pub render_color: &'static str,
    /// Whole days since last interaction, `None` if never contacted
    pub days_since: Option<i64>,
    /// Branch cluster (tree mode only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<ClusterSlot>,
}

/// Complete layout for one view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    /// Mode that produced this layout
    pub mode: LayoutMode,
    /// Placed contacts
    pub entries: Vec<LayoutEntry>,
    /// Ring bands (garden mode)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bands: Vec<TierBand>,
    /// Branch clusters (tree mode)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub clusters: Vec<BranchCluster>,
}

impl LayoutResult {
    /// Look up an entry by contact id
    pub fn entry(&self, id: &str) -> Option<&LayoutEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Number of placed contacts
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// No contacts were placed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Stateless scoring and layout engine
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use grove_domain::Contact;
/// use grove_engine::{LayoutEngine, LayoutMode};
///
/// let engine = LayoutEngine::default();
/// let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
/// let contacts = vec![
///     Contact::new("1", "family").with_last_interaction("2024-05-27T00:00:00Z"),
///     Contact::new("2", "work"),
/// ];
///
/// let layout = engine.compute_layout(&contacts, LayoutMode::Garden, now);
/// assert_eq!(layout.entry("1").unwrap().tier.as_str(), "blooming");
/// assert_eq!(layout.entry("2").unwrap().tier.as_str(), "fading");
/// ```
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: EngineConfig,
    classifier: HealthClassifier,
    rings: RingAllocator,
    clusters: ClusterAssigner,
    tribes: TribeAggregator,
    attention: AttentionQueue,
}

impl LayoutEngine {
    /// Build an engine from a configuration, validating it first
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            classifier: HealthClassifier::new(config.garden.clone(), config.attention.clone()),
            rings: RingAllocator::new(config.rings.clone(), config.garden.clone()),
            clusters: ClusterAssigner::new(config.clusters.clone()),
            tribes: TribeAggregator::new(config.tribes.clone()),
            attention: AttentionQueue::new(config.attention.clone()),
            config,
        })
    }

    /// Configuration in use
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Classifier in use
    pub fn classifier(&self) -> &HealthClassifier {
        &self.classifier
    }

    /// Lay out contacts for a view
    ///
    /// Garden entries run innermost ring first; tree entries run by cluster.
    pub fn compute_layout(
        &self,
        contacts: &[Contact],
        mode: LayoutMode,
        now: DateTime<Utc>,
    ) -> LayoutResult {
        tracing::debug!("Computing {} layout for {} contacts", mode, contacts.len());
        match mode {
            LayoutMode::Garden => self.garden_layout(contacts, now),
            LayoutMode::Tree => self.tree_layout(contacts, now),
        }
    }

    /// Per-tribe health, most neglected first
    pub fn aggregate_tribes(
        &self,
        contacts: &[Contact],
        tags_by_contact_id: &HashMap<ContactId, Vec<String>>,
        now: DateTime<Utc>,
    ) -> Vec<TribeHealth> {
        self.tribes.aggregate(contacts, tags_by_contact_id, now)
    }

    /// Contacts due for a check-in, most urgent first
    pub fn needs_attention(&self, contacts: &[Contact], now: DateTime<Utc>) -> Vec<AttentionItem> {
        self.attention.build(contacts, now)
    }

    fn garden_layout(&self, contacts: &[Contact], now: DateTime<Utc>) -> LayoutResult {
        let placements = self.rings.allocate(contacts, now);
        let blooming = placements
            .iter()
            .filter(|p| p.tier == GardenTier::Blooming)
            .count();

        let entries = placements
            .into_iter()
            .map(|p| {
                let tier = HealthTier::from(p.tier);
                LayoutEntry {
                    id: p.contact.id.clone(),
                    position: p.position,
                    tier,
                    render_color: tier.color(),
                    days_since: p.days_since,
                    cluster: None,
                }
            })
            .collect();

        LayoutResult {
            mode: LayoutMode::Garden,
            entries,
            bands: self.rings.bands(blooming),
            clusters: Vec::new(),
        }
    }

    fn tree_layout(&self, contacts: &[Contact], now: DateTime<Utc>) -> LayoutResult {
        let entries = self
            .clusters
            .assign(contacts)
            .into_iter()
            .map(|p| {
                let health = self.classifier.attention(p.contact, now);
                let tier = HealthTier::from(health.tier);
                LayoutEntry {
                    id: p.contact.id.clone(),
                    position: p.position,
                    tier,
                    render_color: tier.color(),
                    days_since: health.days_since,
                    cluster: Some(p.slot),
                }
            })
            .collect();

        LayoutResult {
            mode: LayoutMode::Tree,
            entries,
            bands: Vec::new(),
            clusters: self.clusters.config().clusters(),
        }
    }
}
