//! Geometry module - positions, ring bands and branch clusters
//!
//! All coordinates live in an abstract space centered at the origin. Screen
//! transforms belong to the renderer.

use crate::contact::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in layout space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Position {
    /// Create a new position
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Position at `radius` from `origin` along `angle` (radians)
    pub fn polar(origin: Position, radius: f64, angle: f64) -> Self {
        Self {
            x: origin.x + radius * angle.cos(),
            y: origin.y + radius * angle.sin(),
        }
    }

    /// Euclidean distance from the origin
    pub fn radius(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to another position
    pub fn distance_to(&self, other: &Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Both coordinates are finite (no NaN or infinity)
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Annular radius range for one garden ring
///
/// Serializes with snake_case keys to match the rest of the engine TOML.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingBand {
    /// Inner radius
    #[serde(alias = "minRadius")]
    pub min_radius: f64,
    /// Outer radius
    #[serde(alias = "maxRadius")]
    pub max_radius: f64,
}

impl RingBand {
    /// Create a new band
    pub fn new(min_radius: f64, max_radius: f64) -> Self {
        Self {
            min_radius,
            max_radius,
        }
    }

    /// Check if a radius falls within the band (inclusive)
    pub fn contains(&self, radius: f64) -> bool {
        radius >= self.min_radius && radius <= self.max_radius
    }

    /// Area of the disc bounded by the inner radius
    pub fn inner_area(&self) -> f64 {
        std::f64::consts::PI * self.min_radius * self.min_radius
    }

    /// Area of the disc bounded by the outer radius
    pub fn outer_area(&self) -> f64 {
        std::f64::consts::PI * self.max_radius * self.max_radius
    }

    /// Radius enclosing `fraction` of the annulus area, measured outwards
    ///
    /// `fraction` is clamped to [0, 1], so the result never leaves the band.
    pub fn radius_at_area_fraction(&self, fraction: f64) -> f64 {
        let t = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let area = self.inner_area() + (self.outer_area() - self.inner_area()) * t;
        // Rounding in the area round-trip must not push past either edge
        (area / std::f64::consts::PI)
            .sqrt()
            .max(self.min_radius)
            .min(self.max_radius)
    }
}

/// One of the seven fixed branch slots in the tree view
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusterSlot {
    /// Work, primary branch
    Work,
    /// Work, overflow branch
    WorkOverflow,
    /// Family
    Family,
    /// Friends, primary branch
    Friends,
    /// Friends, overflow branch
    FriendsOverflow,
    /// Clients
    Clients,
    /// Networking, also the home of unrecognized categories
    Networking,
}

impl ClusterSlot {
    /// All slots in canonical order
    pub const ALL: [ClusterSlot; 7] = [
        ClusterSlot::Work,
        ClusterSlot::WorkOverflow,
        ClusterSlot::Family,
        ClusterSlot::Friends,
        ClusterSlot::FriendsOverflow,
        ClusterSlot::Clients,
        ClusterSlot::Networking,
    ];

    /// Get the slot name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ClusterSlot::Work => "work",
            ClusterSlot::WorkOverflow => "work_overflow",
            ClusterSlot::Family => "family",
            ClusterSlot::Friends => "friends",
            ClusterSlot::FriendsOverflow => "friends_overflow",
            ClusterSlot::Clients => "clients",
            ClusterSlot::Networking => "networking",
        }
    }

    /// Category whose members this slot holds
    pub fn category_affinity(&self) -> Category {
        match self {
            ClusterSlot::Work | ClusterSlot::WorkOverflow => Category::Work,
            ClusterSlot::Family => Category::Family,
            ClusterSlot::Friends | ClusterSlot::FriendsOverflow => Category::Friends,
            ClusterSlot::Clients => Category::Clients,
            ClusterSlot::Networking => Category::Networking,
        }
    }

    /// Primary slot for a category
    pub fn primary_for(category: Category) -> Self {
        match category {
            Category::Work => ClusterSlot::Work,
            Category::Family => ClusterSlot::Family,
            Category::Friends => ClusterSlot::Friends,
            Category::Clients => ClusterSlot::Clients,
            Category::Networking => ClusterSlot::Networking,
        }
    }

    /// Overflow slot for a category, if it has one
    pub fn overflow_for(category: Category) -> Option<Self> {
        match category {
            Category::Work => Some(ClusterSlot::WorkOverflow),
            Category::Friends => Some(ClusterSlot::FriendsOverflow),
            _ => None,
        }
    }
}

impl fmt::Display for ClusterSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A circular region of the tree view bound to one slot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchCluster {
    /// Slot identifier
    pub id: ClusterSlot,
    /// Center, horizontal
    pub center_x: f64,
    /// Center, vertical
    pub center_y: f64,
    /// Nominal radius before spread scaling
    pub radius: f64,
    /// Category whose members gather here
    pub category_affinity: Category,
}

impl BranchCluster {
    /// Create a cluster for a slot; affinity follows from the slot
    pub fn new(id: ClusterSlot, center_x: f64, center_y: f64, radius: f64) -> Self {
        Self {
            id,
            center_x,
            center_y,
            radius,
            category_affinity: id.category_affinity(),
        }
    }

    /// Cluster center as a position
    pub fn center(&self) -> Position {
        Position::new(self.center_x, self.center_y)
    }
}
