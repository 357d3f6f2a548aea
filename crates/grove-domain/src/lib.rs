//! Grove Domain Layer
//!
//! Value types shared by the scoring and layout engine and its callers.
//! Nothing in this crate performs I/O or reads the clock: every function is
//! a pure transformation of its arguments.
//!
//! ## Key Concepts
//!
//! - **Contact**: a person record as handed over by the persistence layer
//! - **Health tiers**: discrete freshness buckets, one set per policy
//!   (garden: Blooming → Fading, attention: Healthy / NeedsAttention)
//! - **Geometry**: positions, ring bands and branch clusters in an abstract
//!   coordinate space centered at the origin
//! - **Seeded randomness**: a portable linear-congruential generator so that
//!   every port of the engine produces the same tree layout
//!
//! ## Architecture
//!
//! The only external crates are `serde` (contact wire format) and `chrono`
//! (timestamp parsing). Algorithms live in `grove-engine`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contact;
pub mod geometry;
pub mod prng;
pub mod tier;
pub mod timestamp;

// Re-exports for convenience
pub use contact::{Category, Contact, ContactId, Importance};
pub use geometry::{BranchCluster, ClusterSlot, Position, RingBand};
pub use prng::{stable_hash, SeededRandom};
pub use tier::{AttentionTier, GardenTier, HealthTier};
pub use timestamp::{days_between, parse_timestamp};
