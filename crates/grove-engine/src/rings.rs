//! Ring allocation for the garden view
//!
//! Contacts are bucketed by garden tier and each bucket is laid out in its
//! own annulus. Angles advance by the golden angle across the whole garden,
//! and radii are spaced by equal area so density stays uniform from the
//! center to the rim. No randomness is involved.

use crate::classifier::{days_since, GardenPolicy};
use chrono::{DateTime, Utc};
use grove_domain::{Contact, GardenTier, Position, RingBand};
use serde::{Deserialize, Serialize};

/// π(3 − √5), the golden angle in radians (≈137.5°)
pub const GOLDEN_ANGLE_RADIANS: f64 = 2.399_963_229_728_653;

/// Ring geometry for the garden view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingConfig {
    /// Angular step between consecutive contacts
    pub golden_angle: f64,
    /// Inner edge of the Blooming ring
    pub blooming_min_radius: f64,
    /// Outer edge of the Blooming ring while it is sparsely populated
    pub blooming_max_radius: f64,
    /// Outer edge of the Blooming ring once it reaches `blooming_dense_threshold`
    pub blooming_dense_max_radius: f64,
    /// Population at which the Blooming ring widens
    pub blooming_dense_threshold: usize,
    /// Nourished ring
    pub nourished: RingBand,
    /// Thirsty ring
    pub thirsty: RingBand,
    /// Fading ring
    pub fading: RingBand,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            golden_angle: GOLDEN_ANGLE_RADIANS,
            blooming_min_radius: 30.0,
            blooming_max_radius: 80.0,
            blooming_dense_max_radius: 120.0,
            blooming_dense_threshold: 10,
            nourished: RingBand::new(130.0, 200.0),
            thirsty: RingBand::new(210.0, 350.0),
            fading: RingBand::new(360.0, 550.0),
        }
    }
}

impl RingConfig {
    /// Band for a tier given how many contacts it holds
    pub fn band_for(&self, tier: GardenTier, population: usize) -> RingBand {
        match tier {
            GardenTier::Blooming => {
                let max = if population < self.blooming_dense_threshold {
                    self.blooming_max_radius
                } else {
                    self.blooming_dense_max_radius
                };
                RingBand::new(self.blooming_min_radius, max)
            }
            GardenTier::Nourished => self.nourished,
            GardenTier::Thirsty => self.thirsty,
            GardenTier::Fading => self.fading,
        }
    }

    /// Widest band the Blooming ring can take
    pub fn blooming_outer_limit(&self) -> f64 {
        self.blooming_max_radius.max(self.blooming_dense_max_radius)
    }
}

/// A ring band tagged with the tier it holds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "TierBandWire")]
pub struct TierBand {
    /// Tier drawn in this ring
    pub tier: GardenTier,
    /// Radius range
    pub band: RingBand,
}

/// Renderer-facing shape of a [`TierBand`]
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TierBandWire {
    tier: GardenTier,
    min_radius: f64,
    max_radius: f64,
}

impl From<TierBand> for TierBandWire {
    fn from(band: TierBand) -> Self {
        Self {
            tier: band.tier,
            min_radius: band.band.min_radius,
            max_radius: band.band.max_radius,
        }
    }
}

/// Where one contact lands in the garden
#[derive(Debug, Clone, PartialEq)]
pub struct RingPlacement<'a> {
    /// The placed contact
    pub contact: &'a Contact,
    /// Garden tier
    pub tier: GardenTier,
    /// Whole days since last interaction
    pub days_since: Option<i64>,
    /// Band the radius was drawn from
    pub band: RingBand,
    /// Cartesian position
    pub position: Position,
}

/// Places contacts into concentric tier rings
#[derive(Debug, Clone, Default)]
pub struct RingAllocator {
    config: RingConfig,
    policy: GardenPolicy,
}

impl RingAllocator {
    /// Create an allocator from ring geometry and the garden policy
    pub fn new(config: RingConfig, policy: GardenPolicy) -> Self {
        Self { config, policy }
    }

    /// Ring geometry in use
    pub fn config(&self) -> &RingConfig {
        &self.config
    }

    /// Bands for all four tiers given the Blooming population
    pub fn bands(&self, blooming_population: usize) -> Vec<TierBand> {
        GardenTier::ALL
            .iter()
            .map(|&tier| TierBand {
                tier,
                band: self.config.band_for(tier, blooming_population),
            })
            .collect()
    }

    /// Place every contact in its tier ring
    ///
    /// Output runs innermost ring first; within a ring, freshest first with
    /// ties broken by id.
    pub fn allocate<'a>(
        &self,
        contacts: &'a [Contact],
        now: DateTime<Utc>,
    ) -> Vec<RingPlacement<'a>> {
        let mut buckets: [Vec<(&'a Contact, Option<i64>)>; 4] = Default::default();
        for contact in contacts {
            let days = days_since(contact, now);
            buckets[self.policy.tier_for(days).ring_index()].push((contact, days));
        }

        for bucket in &mut buckets {
            bucket.sort_by(|(a, a_days), (b, b_days)| {
                self.policy
                    .effective_days(*a_days)
                    .cmp(&self.policy.effective_days(*b_days))
                    .then_with(|| a.id.cmp(&b.id))
            });
        }

        tracing::debug!(
            blooming = buckets[0].len(),
            nourished = buckets[1].len(),
            thirsty = buckets[2].len(),
            fading = buckets[3].len(),
            "Allocating garden rings"
        );

        let golden_angle = self.golden_angle();
        let mut placements = Vec::with_capacity(contacts.len());
        let mut placed_before = 0usize;

        for (tier, bucket) in GardenTier::ALL.into_iter().zip(buckets) {
            let count = bucket.len();
            let band = self.config.band_for(tier, count);
            let running_offset = placed_before as f64 * golden_angle;

            for (i, (contact, days)) in bucket.into_iter().enumerate() {
                let angle = i as f64 * golden_angle + running_offset;
                // (i + 1) / (N + 1) stays strictly inside (0, 1) and N + 1 > 0
                let fraction = (i + 1) as f64 / (count + 1) as f64;
                let radius = band.radius_at_area_fraction(fraction);

                placements.push(RingPlacement {
                    contact,
                    tier,
                    days_since: days,
                    band,
                    position: Position::polar(Position::default(), radius, angle),
                });
            }

            placed_before += count;
        }

        placements
    }

    fn golden_angle(&self) -> f64 {
        if self.config.golden_angle.is_finite() {
            self.config.golden_angle
        } else {
            GOLDEN_ANGLE_RADIANS
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

    fn contacted(id: &str, days_ago: i64) -> Contact {
        Contact::new(id, "friends")
            .with_last_interaction((now() - Duration::days(days_ago)).to_rfc3339())
    }

    #[test]
    fn test_golden_angle_constant() {
        let expected = std::f64::consts::PI * (3.0 - 5.0_f64.sqrt());
        assert!((GOLDEN_ANGLE_RADIANS - expected).abs() < 1e-15);
    }

    #[test]
    fn test_blooming_band_widens_when_dense() {
        let config = RingConfig::default();
        assert_eq!(config.band_for(GardenTier::Blooming, 9).max_radius, 80.0);
        assert_eq!(config.band_for(GardenTier::Blooming, 10).max_radius, 120.0);
        assert_eq!(config.band_for(GardenTier::Fading, 0), RingBand::new(360.0, 550.0));
    }

    #[test]
    fn test_empty_input() {
        let allocator = RingAllocator::default();
        assert!(allocator.allocate(&[], now()).is_empty());
    }

    #[test]
    fn test_buckets_sorted_freshest_first() {
        let contacts = vec![contacted("late", 12), contacted("early", 2), contacted("mid", 7)];
        let placements = RingAllocator::default().allocate(&contacts, now());
        let ids: Vec<&str> = placements.iter().map(|p| p.contact.id.as_str()).collect();
        assert_eq!(ids, vec!["early", "mid", "late"]);
    }

    #[test]
    fn test_ties_break_by_id() {
        let contacts = vec![contacted("b", 3), contacted("a", 3)];
        let placements = RingAllocator::default().allocate(&contacts, now());
        assert_eq!(placements[0].contact.id, "a");
        assert_eq!(placements[1].contact.id, "b");
    }

    #[test]
    fn test_running_offset_carries_across_tiers() {
        let contacts = vec![
            contacted("b1", 1),
            contacted("b2", 2),
            contacted("n1", 20),
        ];
        let placements = RingAllocator::default().allocate(&contacts, now());

        let nourished = &placements[2];
        assert_eq!(nourished.tier, GardenTier::Nourished);
        // First Nourished contact starts two golden-angle steps in
        let angle = nourished.position.y.atan2(nourished.position.x);
        let expected = (2.0 * GOLDEN_ANGLE_RADIANS).rem_euclid(std::f64::consts::TAU);
        assert!((angle.rem_euclid(std::f64::consts::TAU) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_single_contact_sits_at_half_area() {
        let contacts = vec![contacted("solo", 60)];
        let placements = RingAllocator::default().allocate(&contacts, now());
        let band = RingBand::new(210.0, 350.0);
        let expected = ((210.0_f64.powi(2) + 350.0_f64.powi(2)) / 2.0).sqrt();
        assert_eq!(placements[0].band, band);
        assert!((placements[0].position.radius() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_never_contacted_matches_sentinel_form() {
        let never = vec![Contact::new("n", "work")];
        let sentinel = vec![contacted("n", 999)];
        let allocator = RingAllocator::default();

        let a = &allocator.allocate(&never, now())[0];
        let b = &allocator.allocate(&sentinel, now())[0];
        assert_eq!(a.tier, GardenTier::Fading);
        assert_eq!(a.tier, b.tier);
        assert_eq!(a.position, b.position);
        assert!(a.position.is_finite());
    }
}
