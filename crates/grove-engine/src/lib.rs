//! Grove Engine
//!
//! Relationship-health scoring and spatial layout for the Garden and Tree
//! views, plus the tribe and needs-attention lists.
//!
//! # Overview
//!
//! The engine is a stateless pipeline: `(contacts, now, mode) → positions`.
//! It never reads the clock, performs no I/O, and keeps no state between
//! calls, so it is safe to call on every refresh and from any thread.
//!
//! - **Classification**: days since last interaction → tier, under the
//!   garden policy or the attention policy
//! - **Tribes**: tag groups ranked by average neglect
//! - **Garden**: equal-area tier rings with golden-angle spacing
//! - **Tree**: seven category branch clusters with seeded jitter
//!
//! ## Garden Rings
//!
//! | Tier | Days since contact | Radius band |
//! |------|--------------------|-------------|
//! | **Blooming** | ≤ 14 | 30–80 (30–120 once it holds 10+) |
//! | **Nourished** | ≤ 45 | 130–200 |
//! | **Thirsty** | ≤ 120 | 210–350 |
//! | **Fading** | older or never | 360–550 |
//!
//! ## Attention Thresholds
//!
//! | Importance | Needs attention after |
//! |------------|-----------------------|
//! | high | 14 days |
//! | medium | 30 days |
//! | low | 90 days |
//!
//! # Usage
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use grove_domain::Contact;
//! use grove_engine::{LayoutEngine, LayoutMode, LayoutStats};
//!
//! let engine = LayoutEngine::default();
//! let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
//! let contacts = vec![
//!     Contact::new("ada", "friends").with_last_interaction("2024-05-20"),
//!     Contact::new("bo", "work"),
//! ];
//!
//! let garden = engine.compute_layout(&contacts, LayoutMode::Garden, now);
//! let tree = engine.compute_layout(&contacts, LayoutMode::Tree, now);
//! assert_eq!(garden.len(), 2);
//! assert_eq!(tree.len(), 2);
//!
//! println!("{}", LayoutStats::from_layout(&garden).summary());
//! ```
//!
//! # Configuration
//!
//! Every threshold and geometry constant can be overridden via TOML. Unset
//! fields keep their defaults:
//!
//! ```toml
//! [garden]
//! blooming_max_days = 14
//! nourished_max_days = 45
//! thirsty_max_days = 120
//!
//! [attention]
//! high_threshold_days = 14
//! medium_threshold_days = 30
//! low_threshold_days = 90
//! honor_frequency_override = false
//!
//! [tribes]
//! thirsty_avg_days = 90.0
//!
//! [rings]
//! blooming_dense_threshold = 10
//!
//! [rings.fading]
//! min_radius = 360.0
//! max_radius = 550.0
//!
//! [clusters]
//! spread_cap = 1.2
//! crowding_warn_threshold = 40
//! ```

#![warn(missing_docs)]

mod attention;
mod classifier;
mod clusters;
mod config;
mod error;
mod layout;
mod rings;
mod stats;
mod tribe;

pub use attention::{AttentionItem, AttentionQueue};
pub use classifier::{
    days_since, AttentionPolicy, Classification, GardenPolicy, HealthClassifier, Policy,
    NEVER_CONTACTED_DAYS,
};
pub use clusters::{
    ClusterAssigner, ClusterConfig, ClusterPlacement, SlotGeometry, CLUSTER_ANGLE_STEP,
};
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use layout::{LayoutEngine, LayoutEntry, LayoutMode, LayoutResult};
pub use rings::{RingAllocator, RingConfig, RingPlacement, TierBand, GOLDEN_ANGLE_RADIANS};
pub use stats::LayoutStats;
pub use tribe::{TribeAggregator, TribeHealth, TribePolicy};
