//! Entity generators for the synthetic dataset.
//!
//! This module provides generators for every table in the output:
//! - [`PlayerGenerator`]: players with demographics and skill profiles
//! - [`CourseGenerator`]: virtual courses with their 18-hole layouts
//! - [`FacilityGenerator`]: facilities with their simulator bays
//! - [`simulate_shot`]: the shot physics model
//! - [`score_hole`]: the hole scoring model
//! - [`SessionGenerator`]: the session driver tying the above together
//! - [`derive_bookings`]: bay occupancy derived from sessions
//! - [`SubscriptionEventGenerator`], [`MarketingEventGenerator`]: event streams

pub mod booking;
pub mod course;
pub mod events;
pub mod facility;
pub mod player;
pub mod reference;
pub mod scoring;
pub mod session;
pub mod shot;

pub use booking::{GeneratedBooking, derive_bookings};
pub use course::{CourseGenerator, GeneratedCourse, GeneratedHole};
pub use events::{
    EventGenConfig, GeneratedMarketingEvent, GeneratedSubscriptionEvent, MarketingEventGenerator,
    SubscriptionEventGenerator,
};
pub use facility::{FacilityGenConfig, FacilityGenerator, GeneratedBay, GeneratedFacility};
pub use player::{GeneratedPlayer, PlayerGenConfig, PlayerGenerator};
pub use reference::{GeneratedClub, GeneratedGameType, GeneratedTier, club_rows, game_type_rows, tier_rows};
pub use scoring::{HoleOutcome, ScoreType, score_hole};
pub use session::{
    GeneratedGameSession, GeneratedHoleScore, GeneratedScorecard, GeneratedSession, GeneratedShot,
    SessionBatch, SessionGenConfig, SessionGenerator,
};
pub use shot::{ShotMeasurement, simulate_shot};

use rand::Rng;
use uuid::Uuid;

/// Draws a v4-shaped UUID from the threaded rng.
///
/// `Uuid::new_v4()` pulls from OS entropy and would break the fixed-seed
/// reproducibility contract, so every row id goes through here instead.
pub(crate) fn new_id(rng: &mut impl Rng) -> Uuid {
    uuid::Builder::from_random_bytes(rng.r#gen()).into_uuid()
}

pub(crate) fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

pub(crate) fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_id_is_deterministic() {
        let a: Vec<Uuid> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..10).map(|_| new_id(&mut rng)).collect()
        };
        let b: Vec<Uuid> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..10).map(|_| new_id(&mut rng)).collect()
        };

        assert_eq!(a, b);
        assert_eq!(a.iter().collect::<std::collections::HashSet<_>>().len(), 10);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round1(1.26), 1.3);
        assert_eq!(round2(1.267), 1.27);
        assert_eq!(round3(0.91234), 0.912);
    }
}
