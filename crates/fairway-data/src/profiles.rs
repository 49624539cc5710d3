//! Player skill profiles.
//!
//! A profile collapses a sampled handicap into the derived ratings the shot
//! physics and scoring models consume. All derived fields are affine in the
//! skill factor, so better players are strictly faster, more consistent, and
//! more accurate.

use rand::Rng;

use crate::config::HandicapMixture;

/// Derived skill ratings for one player.
///
/// Field bounds, for any handicap:
/// - `skill_factor` in [0.3, 1.0] (plus handicaps saturate at 1.0)
/// - `consistency` in [0.4, 0.9]
/// - `accuracy` in [0.3, 0.9]
#[derive(Debug, Clone, Copy)]
pub struct SkillProfile {
    pub handicap: f64,
    pub skill_factor: f64,
    /// Driver-reference club head speed in mph.
    pub club_speed_base: f64,
    pub consistency: f64,
    pub accuracy: f64,
}

impl SkillProfile {
    /// Derives the full profile from a handicap index.
    pub fn from_handicap(handicap: f64) -> Self {
        let skill_factor = (1.0 - handicap / 36.0).clamp(0.3, 1.0);

        Self {
            handicap,
            skill_factor,
            club_speed_base: 70.0 + skill_factor * 45.0,
            consistency: 0.4 + skill_factor * 0.5,
            accuracy: 0.3 + skill_factor * 0.6,
        }
    }

    /// Samples a handicap from the mixture and derives the profile.
    pub fn sample(mixture: &HandicapMixture, rng: &mut impl Rng) -> Self {
        Self::from_handicap(mixture.sample(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_scratch_player() {
        let profile = SkillProfile::from_handicap(0.0);
        assert!((profile.skill_factor - 1.0).abs() < 1e-9);
        assert!((profile.accuracy - 0.9).abs() < 1e-9);
        assert!((profile.consistency - 0.9).abs() < 1e-9);
        assert!((profile.club_speed_base - 115.0).abs() < 1e-9);
    }

    #[test]
    fn test_max_handicap_floors_skill() {
        let profile = SkillProfile::from_handicap(36.0);
        assert!((profile.skill_factor - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_skill_monotone_in_handicap() {
        let mut last = f64::MAX;
        for h in [-2.0, 0.0, 5.0, 12.0, 20.0, 30.0] {
            let skill = SkillProfile::from_handicap(h).skill_factor;
            assert!(skill <= last, "skill factor must not increase with handicap");
            last = skill;
        }
    }

    #[test]
    fn test_sampled_profiles_within_bounds() {
        let mixture = HandicapMixture::default();
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..1000 {
            let p = SkillProfile::sample(&mixture, &mut rng);
            assert!((0.3..=1.0).contains(&p.skill_factor));
            assert!((0.4..=0.9).contains(&p.consistency));
            assert!((0.3..=0.9).contains(&p.accuracy));
        }
    }
}
