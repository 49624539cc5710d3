//! Configuration types for dataset generation.

use rand::Rng;
use serde::{Deserialize, Serialize};
use time::macros::date;
use time::{Date, Duration, OffsetDateTime};

/// Inclusive calendar window the generated activity falls into.
///
/// The range is pinned in configuration rather than read from the wall clock
/// so that two runs with the same seed produce identical output.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Date,
    pub end: Date,
}

impl DateRange {
    pub const fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// Builds a range covering the `days` days leading up to `end`.
    pub fn trailing_days(end: Date, days: i64) -> Self {
        Self {
            start: end - Duration::days(days),
            end,
        }
    }

    /// Number of whole days the range spans.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).whole_days()
    }

    /// Returns a uniformly random date within the range.
    pub fn random_date(&self, rng: &mut impl Rng) -> Date {
        self.start + Duration::days(rng.gen_range(0..=self.num_days()))
    }

    /// Midnight UTC at the end of the range, for event-walk cutoffs.
    pub fn end_datetime(&self) -> OffsetDateTime {
        self.end.midnight().assume_utc()
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self::trailing_days(date!(2025 - 09 - 30), 90)
    }
}

/// A weighted handicap band in the skill mixture.
#[derive(Debug, Clone, Copy)]
pub struct HandicapBand {
    pub weight: f64,
    pub min: f64,
    pub max: f64,
}

/// Mixture of handicap bands the player population is drawn from.
///
/// The default mirrors observed simulator demographics: a sliver of elite
/// players, a fat middle, and a tail of high handicappers.
#[derive(Debug, Clone)]
pub struct HandicapMixture {
    pub bands: Vec<HandicapBand>,
}

impl Default for HandicapMixture {
    fn default() -> Self {
        Self {
            bands: vec![
                HandicapBand { weight: 0.05, min: -2.0, max: 5.0 },
                HandicapBand { weight: 0.35, min: 5.0, max: 15.0 },
                HandicapBand { weight: 0.45, min: 15.0, max: 25.0 },
                HandicapBand { weight: 0.15, min: 25.0, max: 36.0 },
            ],
        }
    }
}

impl HandicapMixture {
    /// Draws a handicap: pick a band by weight, then uniform within it.
    pub fn sample(&self, rng: &mut impl Rng) -> f64 {
        let total: f64 = self.bands.iter().map(|b| b.weight).sum();
        let mut roll = rng.r#gen::<f64>() * total;

        for band in &self.bands {
            if roll < band.weight {
                return rng.gen_range(band.min..band.max);
            }
            roll -= band.weight;
        }

        let last = self.bands.last().expect("mixture has at least one band");
        rng.gen_range(last.min..last.max)
    }
}

/// Top-level knobs for a generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the run's random source. Everything, including row ids,
    /// derives from this.
    pub seed: u64,
    /// Number of players to generate.
    pub players: usize,
    /// Number of facilities to generate.
    pub facilities: usize,
    /// Target number of simulator sessions.
    pub target_sessions: usize,
    /// Calendar window sessions and events fall into.
    pub date_range: DateRange,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            players: 500,
            facilities: 50,
            target_sessions: 10_000,
            date_range: DateRange::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_trailing_days() {
        let range = DateRange::trailing_days(date!(2025 - 09 - 30), 90);
        assert_eq!(range.num_days(), 90);
        assert_eq!(range.start, date!(2025 - 07 - 02));
    }

    #[test]
    fn test_random_date_within_range() {
        let range = DateRange::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let d = range.random_date(&mut rng);
            assert!(d >= range.start && d <= range.end);
        }
    }

    #[test]
    fn test_handicap_mixture_bounds() {
        let mixture = HandicapMixture::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1000 {
            let h = mixture.sample(&mut rng);
            assert!((-2.0..36.0).contains(&h), "handicap {h} outside mixture bounds");
        }
    }
}
