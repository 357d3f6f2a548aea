//! Cluster assignment for the tree view
//!
//! Seven fixed branch clusters hold contacts by category. Work and friends
//! each own a primary and an overflow branch and alternate between them.
//! Inside a cluster every member is jittered by a generator seeded from its
//! own id and index, so a contact's spot does not depend on who else was
//! fetched or in what order.

use grove_domain::{BranchCluster, Category, ClusterSlot, Contact, Position, SeededRandom};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default angular step between consecutive members of a cluster
pub const CLUSTER_ANGLE_STEP: f64 = 2.4;

/// Center and radius of one branch slot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotGeometry {
    /// Center, horizontal
    pub center_x: f64,
    /// Center, vertical
    pub center_y: f64,
    /// Nominal radius
    pub radius: f64,
}

impl SlotGeometry {
    /// Create slot geometry
    pub const fn new(center_x: f64, center_y: f64, radius: f64) -> Self {
        Self {
            center_x,
            center_y,
            radius,
        }
    }
}

/// Tree-view cluster geometry and jitter parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    /// Angular step between consecutive members
    pub angle_step: f64,
    /// Spread factor for an empty cluster
    pub spread_base: f64,
    /// Members needed to add 1.0 to the spread factor
    pub spread_member_divisor: f64,
    /// Upper bound on the spread factor
    pub spread_cap: f64,
    /// Member count above which a cluster is reported as crowded
    pub crowding_warn_threshold: usize,
    /// Work, primary
    pub work: SlotGeometry,
    /// Work, overflow
    pub work_overflow: SlotGeometry,
    /// Family
    pub family: SlotGeometry,
    /// Friends, primary
    pub friends: SlotGeometry,
    /// Friends, overflow
    pub friends_overflow: SlotGeometry,
    /// Clients
    pub clients: SlotGeometry,
    /// Networking and unrecognized categories
    pub networking: SlotGeometry,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            work: SlotGeometry::new(-250.0, -150.0, 95.0),
            work_overflow: SlotGeometry::new(-360.0, 40.0, 75.0),
            family: SlotGeometry::new(0.0, -290.0, 110.0),
            friends: SlotGeometry::new(250.0, -150.0, 95.0),
            friends_overflow: SlotGeometry::new(360.0, 40.0, 75.0),
            clients: SlotGeometry::new(-170.0, 190.0, 80.0),
            networking: SlotGeometry::new(170.0, 190.0, 80.0),
            angle_step: CLUSTER_ANGLE_STEP,
            spread_base: 0.4,
            spread_member_divisor: 20.0,
            spread_cap: 1.2,
            crowding_warn_threshold: 40,
        }
    }
}

impl ClusterConfig {
    /// Geometry of one slot
    pub fn geometry(&self, slot: ClusterSlot) -> SlotGeometry {
        match slot {
            ClusterSlot::Work => self.work,
            ClusterSlot::WorkOverflow => self.work_overflow,
            ClusterSlot::Family => self.family,
            ClusterSlot::Friends => self.friends,
            ClusterSlot::FriendsOverflow => self.friends_overflow,
            ClusterSlot::Clients => self.clients,
            ClusterSlot::Networking => self.networking,
        }
    }

    /// All seven clusters, in slot order
    pub fn clusters(&self) -> Vec<BranchCluster> {
        ClusterSlot::ALL
            .iter()
            .map(|&slot| {
                let g = self.geometry(slot);
                BranchCluster::new(slot, g.center_x, g.center_y, g.radius)
            })
            .collect()
    }

    /// `min(cap, base + members / divisor)`
    pub fn spread_factor(&self, member_count: usize) -> f64 {
        let growth = if self.spread_member_divisor > 0.0 {
            member_count as f64 / self.spread_member_divisor
        } else {
            0.0
        };
        (self.spread_base + growth).min(self.spread_cap)
    }
}

/// Where one contact lands in the tree
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterPlacement<'a> {
    /// The placed contact
    pub contact: &'a Contact,
    /// Branch cluster holding the contact
    pub slot: ClusterSlot,
    /// Index within the cluster
    pub index: usize,
    /// Cartesian position
    pub position: Position,
}

/// Distributes contacts over the branch clusters
#[derive(Debug, Clone, Default)]
pub struct ClusterAssigner {
    config: ClusterConfig,
}

impl ClusterAssigner {
    /// Create an assigner from cluster geometry
    pub fn new(config: ClusterConfig) -> Self {
        Self { config }
    }

    /// Cluster geometry in use
    pub fn config(&self) -> &ClusterConfig {
        &self.config
    }

    /// Slot each contact belongs to, grouped per slot in member order
    ///
    /// Members of a category are ordered by id, then dealt to the primary
    /// branch on even positions and the overflow branch on odd ones.
    pub fn distribute<'a>(
        &self,
        contacts: &'a [Contact],
    ) -> BTreeMap<ClusterSlot, Vec<&'a Contact>> {
        let mut by_category: BTreeMap<Category, Vec<&'a Contact>> = BTreeMap::new();
        for contact in contacts {
            let category = contact.category().unwrap_or(Category::Networking);
            by_category.entry(category).or_default().push(contact);
        }

        let mut members: BTreeMap<ClusterSlot, Vec<&'a Contact>> = BTreeMap::new();
        for (category, mut group) in by_category {
            group.sort_by(|a, b| a.id.cmp(&b.id));
            let primary = ClusterSlot::primary_for(category);
            let overflow = ClusterSlot::overflow_for(category);

            for (i, contact) in group.into_iter().enumerate() {
                let slot = match overflow {
                    Some(overflow) if i % 2 == 1 => overflow,
                    _ => primary,
                };
                members.entry(slot).or_default().push(contact);
            }
        }

        members
    }

    /// Place every contact in its branch cluster
    ///
    /// Output is grouped by slot, members in index order.
    pub fn assign<'a>(&self, contacts: &'a [Contact]) -> Vec<ClusterPlacement<'a>> {
        let members = self.distribute(contacts);
        let mut placements = Vec::with_capacity(contacts.len());

        for (slot, list) in members {
            let geometry = self.config.geometry(slot);
            let count = list.len();
            let spread = self.config.spread_factor(count);
            let center = Position::new(geometry.center_x, geometry.center_y);

            if count > self.config.crowding_warn_threshold {
                tracing::warn!(
                    "Cluster {} holds {} members (threshold {}); spread is capped at {}",
                    slot,
                    count,
                    self.config.crowding_warn_threshold,
                    self.config.spread_cap
                );
            } else {
                tracing::debug!("Cluster {} holds {} members", slot, count);
            }

            for (index, contact) in list.into_iter().enumerate() {
                let mut rng = SeededRandom::from_key(&format!("{}{}", contact.id, index));
                let angle = index as f64 * self.config.angle_step + rng.next_f64();
                let radius = geometry.radius * rng.next_f64().sqrt() * spread;

                placements.push(ClusterPlacement {
                    contact,
                    slot,
                    index,
                    position: Position::polar(center, radius, angle),
                });
            }
        }

        placements
    }
}
