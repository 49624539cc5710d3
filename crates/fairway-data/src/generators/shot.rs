//! Shot physics model.
//!
//! Synthesizes one launch-monitor measurement from a player's skill profile
//! and a club specification. The pipeline runs speed -> strike quality ->
//! smash -> ball speed -> face geometry -> spin -> distance, with every
//! quantity clamped to plausible ranges for the club.

use rand::Rng;
use rand_distr::{Beta, Distribution, Normal};

use super::{round1, round3};
use crate::catalog::{self, CatalogError, ClubSpec};
use crate::profiles::SkillProfile;

/// One simulated launch-monitor reading.
///
/// Angles in degrees, speeds in mph, distances in yards, spin in rpm.
#[derive(Debug, Clone, Copy)]
pub struct ShotMeasurement {
    pub club_speed: f64,
    pub ball_speed: f64,
    pub smash_factor: f64,
    pub attack_angle: f64,
    pub club_path: f64,
    pub face_angle: f64,
    pub face_to_path: f64,
    pub spin_rate: i64,
    pub spin_axis: f64,
    pub launch_angle: f64,
    pub apex_height: f64,
    pub carry_distance: f64,
    pub total_distance: f64,
}

/// Reference smash factor the club-speed base is calibrated against (driver).
const DRIVER_SMASH: f64 = 1.48;

/// Hard ceiling on swing efficiency; beyond this the radar flags a misread.
const SMASH_CAP: f64 = 1.52;

/// Simulates one shot for `club_id`, looking the club up in the catalog.
///
/// Unknown club ids return [`CatalogError::UnknownClub`] rather than falling
/// back to some default spec.
pub fn simulate_shot(
    profile: &SkillProfile,
    club_id: &str,
    rng: &mut impl Rng,
) -> Result<ShotMeasurement, CatalogError> {
    Ok(simulate_shot_with(profile, catalog::club(club_id)?, rng))
}

/// Simulates one shot against an already-resolved club spec.
pub fn simulate_shot_with(
    profile: &SkillProfile,
    club: &ClubSpec,
    rng: &mut impl Rng,
) -> ShotMeasurement {
    let skill = profile.skill_factor;
    let consistency = profile.consistency;

    // Club head speed scales the player's base speed down for shorter clubs,
    // with noise shrinking as consistency rises.
    let speed_noise = Normal::new(1.0, 0.05 * (1.0 - consistency)).unwrap();
    let club_speed = (profile.club_speed_base * (club.smash_target / DRIVER_SMASH)
        * speed_noise.sample(rng))
    .clamp(40.0, 130.0);

    // Strike quality: better players concentrate probability mass near 1.
    let quality = Beta::new(2.0 + skill * 3.0, 2.0).unwrap().sample(rng);

    let smash = (club.smash_target
        * (0.85 + 0.15 * quality)
        * Normal::new(1.0, 0.02).unwrap().sample(rng))
    .min(SMASH_CAP);

    let ball_speed = club_speed * smash;

    let attack_angle = Normal::new(club.attack_bias(), 2.0 * (1.0 - consistency))
        .unwrap()
        .sample(rng);

    let optimal_launch = club.loft * 0.75;
    let launch_angle = (optimal_launch
        + Normal::new(0.0, 3.0 * (1.0 - consistency)).unwrap().sample(rng))
    .clamp(0.0, 45.0);

    let club_path = Normal::new(0.0, (4.0 * (1.0 - skill)).max(0.1))
        .unwrap()
        .sample(rng);
    let face_angle = Normal::new(0.0, (3.0 * (1.0 - skill)).max(0.1))
        .unwrap()
        .sample(rng);
    let face_to_path = face_angle - club_path;

    let spin_rate = (club.spin_mid() * Normal::new(1.0, 0.15).unwrap().sample(rng))
        .clamp(club.spin_range.0 * 0.7, club.spin_range.1 * 1.3);

    // Sidespin tilt follows the face-to-path delta, capped at a full slice.
    let spin_axis = (face_to_path * 8.0).clamp(-30.0, 30.0);

    let speed_factor = ball_speed / (club_speed * club.smash_target);
    let carry_noise = Normal::new(1.0, 0.08 * (1.0 - consistency)).unwrap();
    let carry = (club.carry_mid() * speed_factor * quality * carry_noise.sample(rng))
        .clamp(club.carry_range.0 * 0.6, club.carry_range.1 * 1.15);

    let roll_fraction = if club.short_rollout() {
        rng.gen_range(0.01..0.05)
    } else {
        rng.gen_range(0.02..0.12)
    };
    let roll = carry * roll_fraction;
    let total_distance = carry + roll;

    let apex_height = (carry * launch_angle.to_radians().sin() * 0.4).clamp(5.0, 150.0);

    ShotMeasurement {
        club_speed: round1(club_speed),
        ball_speed: round1(ball_speed),
        smash_factor: round3(smash),
        attack_angle: round1(attack_angle),
        club_path: round1(club_path),
        face_angle: round1(face_angle),
        face_to_path: round1(face_to_path),
        spin_rate: spin_rate.round() as i64,
        spin_axis: round1(spin_axis),
        launch_angle: round1(launch_angle),
        apex_height: round1(apex_height),
        carry_distance: round1(carry),
        total_distance: round1(total_distance),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_unknown_club_is_an_error() {
        let profile = SkillProfile::from_handicap(10.0);
        let mut rng = StdRng::seed_from_u64(1);

        assert!(matches!(
            simulate_shot(&profile, "1_iron", &mut rng),
            Err(CatalogError::UnknownClub(_))
        ));
    }

    #[test]
    fn test_shot_within_physical_bounds() {
        let mut rng = StdRng::seed_from_u64(2024);

        for handicap in [0.0, 12.0, 30.0] {
            let profile = SkillProfile::from_handicap(handicap);
            for club in catalog::CLUBS {
                for _ in 0..50 {
                    let shot = simulate_shot_with(&profile, club, &mut rng);

                    assert!((40.0..=130.0).contains(&shot.club_speed));
                    assert!(shot.smash_factor <= 1.52);
                    assert!(
                        (club.spin_range.0 * 0.7..=club.spin_range.1 * 1.3)
                            .contains(&(shot.spin_rate as f64)),
                        "{} spin {} outside widened range",
                        club.name,
                        shot.spin_rate
                    );
                    assert!(shot.spin_axis.abs() <= 30.0);
                    assert!((0.0..=45.0).contains(&shot.launch_angle));
                    assert!((5.0..=150.0).contains(&shot.apex_height));
                    assert!(shot.total_distance >= shot.carry_distance);
                }
            }
        }
    }

    #[test]
    fn test_carry_clamped_to_club_range() {
        let profile = SkillProfile::from_handicap(36.0);
        let mut rng = StdRng::seed_from_u64(5);
        let driver = catalog::club("driver").unwrap();

        for _ in 0..200 {
            let shot = simulate_shot_with(&profile, driver, &mut rng);
            assert!(shot.carry_distance >= driver.carry_range.0 * 0.6 - 0.1);
            assert!(shot.carry_distance <= driver.carry_range.1 * 1.15 + 0.1);
        }
    }

    #[test]
    fn test_better_players_hit_farther_on_average() {
        let mut rng = StdRng::seed_from_u64(77);
        let seven_iron = catalog::club("7_iron").unwrap();

        let mean_carry = |profile: &SkillProfile, rng: &mut StdRng| {
            (0..300)
                .map(|_| simulate_shot_with(profile, seven_iron, rng).carry_distance)
                .sum::<f64>()
                / 300.0
        };

        let elite = mean_carry(&SkillProfile::from_handicap(0.0), &mut rng);
        let novice = mean_carry(&SkillProfile::from_handicap(34.0), &mut rng);

        assert!(elite > novice, "elite {elite} should out-carry novice {novice}");
    }
}
