//! Engine configuration
//!
//! Gathers every tunable constant in one TOML-loadable structure. Each
//! section fills missing fields from its defaults, so a file only needs to
//! name what it changes.

use crate::classifier::{AttentionPolicy, GardenPolicy};
use crate::clusters::ClusterConfig;
use crate::error::{EngineError, Result};
use crate::rings::RingConfig;
use crate::tribe::TribePolicy;
use grove_domain::{ClusterSlot, RingBand};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the scoring and layout engine
///
/// # Examples
///
/// ```
/// use grove_engine::EngineConfig;
///
/// let config = EngineConfig::from_toml_str(r#"
///     [garden]
///     blooming_max_days = 7
///
///     [clusters]
///     spread_cap = 1.5
/// "#).unwrap();
///
/// assert_eq!(config.garden.blooming_max_days, 7);
/// assert_eq!(config.garden.nourished_max_days, 45);
/// assert_eq!(config.clusters.spread_cap, 1.5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Garden tier thresholds
    pub garden: GardenPolicy,
    /// Attention thresholds
    pub attention: AttentionPolicy,
    /// Tribe scoring
    pub tribes: TribePolicy,
    /// Garden ring geometry
    pub rings: RingConfig,
    /// Tree cluster geometry
    pub clusters: ClusterConfig,
}

impl EngineConfig {
    /// Load and validate configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::info!("Loaded engine configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Render as pretty TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check that every tunable is usable
    pub fn validate(&self) -> Result<()> {
        let result = self.check();
        if let Err(e) = &result {
            tracing::warn!("Rejected engine configuration: {}", e);
        }
        result
    }

    fn check(&self) -> Result<()> {
        let g = &self.garden;
        if !(0 <= g.blooming_max_days
            && g.blooming_max_days < g.nourished_max_days
            && g.nourished_max_days < g.thirsty_max_days)
        {
            return Err(EngineError::Config(format!(
                "garden thresholds must be non-negative and strictly increasing, got {}/{}/{}",
                g.blooming_max_days, g.nourished_max_days, g.thirsty_max_days
            )));
        }
        if g.never_contacted_days <= g.thirsty_max_days {
            return Err(EngineError::Config(format!(
                "garden never_contacted_days ({}) must exceed thirsty_max_days ({})",
                g.never_contacted_days, g.thirsty_max_days
            )));
        }

        let a = &self.attention;
        for (name, days) in [
            ("high", a.high_threshold_days),
            ("medium", a.medium_threshold_days),
            ("low", a.low_threshold_days),
        ] {
            if days <= 0 {
                return Err(EngineError::Config(format!(
                    "attention {} threshold must be positive, got {}",
                    name, days
                )));
            }
        }

        let t = &self.tribes;
        if !t.thirsty_avg_days.is_finite() || t.never_contacted_days < 0 {
            return Err(EngineError::Config(
                "tribe thresholds must be finite and non-negative".to_string(),
            ));
        }

        self.check_rings()?;
        self.check_clusters()
    }

    fn check_rings(&self) -> Result<()> {
        let r = &self.rings;
        if !(r.golden_angle.is_finite() && r.golden_angle > 0.0) {
            return Err(EngineError::Config(format!(
                "golden_angle must be finite and positive, got {}",
                r.golden_angle
            )));
        }

        let blooming = RingBand::new(r.blooming_min_radius, r.blooming_outer_limit());
        let sparse = RingBand::new(r.blooming_min_radius, r.blooming_max_radius);
        let dense = RingBand::new(r.blooming_min_radius, r.blooming_dense_max_radius);
        let rings = [
            ("blooming (sparse)", sparse),
            ("blooming (dense)", dense),
            ("nourished", r.nourished),
            ("thirsty", r.thirsty),
            ("fading", r.fading),
        ];
        for (name, band) in rings {
            if !(band.min_radius.is_finite() && band.max_radius.is_finite())
                || band.min_radius < 0.0
                || band.min_radius >= band.max_radius
            {
                return Err(EngineError::Config(format!(
                    "{} ring must satisfy 0 <= min < max, got [{}, {}]",
                    name, band.min_radius, band.max_radius
                )));
            }
        }

        let ordered = [
            ("blooming", blooming),
            ("nourished", r.nourished),
            ("thirsty", r.thirsty),
            ("fading", r.fading),
        ];
        for pair in ordered.windows(2) {
            let (inner_name, inner) = pair[0];
            let (outer_name, outer) = pair[1];
            if inner.max_radius >= outer.min_radius {
                return Err(EngineError::Config(format!(
                    "{} ring [{}, {}] overlaps {} ring [{}, {}]",
                    inner_name,
                    inner.min_radius,
                    inner.max_radius,
                    outer_name,
                    outer.min_radius,
                    outer.max_radius
                )));
            }
        }
        Ok(())
    }

    fn check_clusters(&self) -> Result<()> {
        let c = &self.clusters;
        for slot in ClusterSlot::ALL {
            let g = c.geometry(slot);
            if !(g.center_x.is_finite() && g.center_y.is_finite() && g.radius.is_finite())
                || g.radius <= 0.0
            {
                return Err(EngineError::Config(format!(
                    "cluster {} needs a finite center and a positive radius",
                    slot
                )));
            }
        }

        let spread = [
            ("angle_step", c.angle_step),
            ("spread_base", c.spread_base),
            ("spread_member_divisor", c.spread_member_divisor),
            ("spread_cap", c.spread_cap),
        ];
        for (name, value) in spread {
            if !(value.is_finite() && value > 0.0) {
                return Err(EngineError::Config(format!(
                    "clusters.{} must be finite and positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
