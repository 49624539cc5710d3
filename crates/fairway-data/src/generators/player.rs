//! Player generation with demographics and skill profiles.

use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use super::{new_id, round1, round3};
use crate::catalog::{self, RegionSpec};
use crate::config::{DateRange, HandicapMixture};
use crate::profiles::SkillProfile;

/// Generated player dimension row.
#[derive(Debug, Clone, serde::Serialize)]
pub struct GeneratedPlayer {
    pub player_id: Uuid,
    pub player_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub country: String,
    pub region: String,
    pub handicap_index: f64,
    pub skill_factor: f64,
    pub club_speed_base: f64,
    pub consistency_rating: f64,
    pub accuracy_rating: f64,
    pub age: u8,
    pub gender: &'static str,
    pub membership_tier: &'static str,
    pub tee_preference: &'static str,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub is_active: bool,
    pub is_guest: bool,
}

impl GeneratedPlayer {
    /// Rebuilds the skill profile the physics and scoring models consume.
    pub fn skill_profile(&self) -> SkillProfile {
        SkillProfile::from_handicap(self.handicap_index)
    }
}

/// Configuration for player generation.
#[derive(Debug, Clone)]
pub struct PlayerGenConfig {
    /// Handicap mixture the population is drawn from.
    pub handicap_mixture: HandicapMixture,
    /// Age range of simulator users.
    pub age_range: (u8, u8),
    /// Share of accounts marked inactive.
    pub inactive_rate: f64,
    /// Share of players who play as guests (no login).
    pub guest_rate: f64,
    /// Account creation window before the range end, in days.
    pub signup_window_days: (i64, i64),
}

impl Default for PlayerGenConfig {
    fn default() -> Self {
        Self {
            handicap_mixture: HandicapMixture::default(),
            age_range: (18, 75),
            inactive_rate: 0.1,
            guest_rate: 0.3,
            signup_window_days: (30, 365),
        }
    }
}

const TEE_PREFERENCES: &[&str] = &["Gold", "Blue", "White", "Red"];

/// Generates realistic player rows.
pub struct PlayerGenerator {
    config: PlayerGenConfig,
    region_weights: WeightedIndex<f64>,
    tier_weights: WeightedIndex<f64>,
}

impl PlayerGenerator {
    /// Creates a new player generator with default configuration.
    pub fn new() -> Self {
        Self::with_config(PlayerGenConfig::default())
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: PlayerGenConfig) -> Self {
        let region_weights =
            WeightedIndex::new(catalog::REGIONS.iter().map(|r| r.weight)).unwrap();
        let tier_weights =
            WeightedIndex::new(catalog::SUBSCRIPTION_TIERS.iter().map(|t| t.weight)).unwrap();

        Self {
            config,
            region_weights,
            tier_weights,
        }
    }

    /// Generates a single player.
    pub fn generate(&self, range: &DateRange, rng: &mut impl Rng) -> GeneratedPlayer {
        let player_id = new_id(rng);
        let first_name: String = FirstName().fake_with_rng(rng);
        let last_name: String = LastName().fake_with_rng(rng);
        let email = self.generate_email(&first_name, &last_name, rng);

        let region: &RegionSpec = &catalog::REGIONS[self.region_weights.sample(rng)];
        let country = region.countries[rng.gen_range(0..region.countries.len())];

        let skill = SkillProfile::sample(&self.config.handicap_mixture, rng);

        // Display name mirrors the scoreboard convention: first name plus
        // last initial.
        let player_name = format!(
            "{first_name}{}",
            last_name.chars().next().unwrap_or('X')
        );

        let (min_days, max_days) = self.config.signup_window_days;
        let created_at = range.end_datetime()
            - Duration::days(rng.gen_range(min_days..=max_days))
            + Duration::minutes(rng.gen_range(0..24 * 60));

        let gender = if rng.r#gen::<f64>() < 0.85 {
            if rng.r#gen::<bool>() { "M" } else { "F" }
        } else {
            "M"
        };

        GeneratedPlayer {
            player_id,
            player_name,
            first_name,
            last_name,
            email,
            country: country.to_string(),
            region: region.name.to_string(),
            handicap_index: round1(skill.handicap),
            skill_factor: round3(skill.skill_factor),
            club_speed_base: round1(skill.club_speed_base),
            consistency_rating: round3(skill.consistency),
            accuracy_rating: round3(skill.accuracy),
            age: rng.gen_range(self.config.age_range.0..=self.config.age_range.1),
            gender,
            membership_tier: catalog::SUBSCRIPTION_TIERS[self.tier_weights.sample(rng)].id,
            tee_preference: TEE_PREFERENCES[rng.gen_range(0..TEE_PREFERENCES.len())],
            created_at,
            is_active: rng.r#gen::<f64>() >= self.config.inactive_rate,
            is_guest: rng.r#gen::<f64>() < self.config.guest_rate,
        }
    }

    /// Generates multiple players.
    pub fn generate_batch(
        &self,
        count: usize,
        range: &DateRange,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedPlayer> {
        (0..count).map(|_| self.generate(range, rng)).collect()
    }

    /// Generates an email from a name.
    fn generate_email(&self, first: &str, last: &str, rng: &mut impl Rng) -> String {
        let normalized: String = format!("{first}.{last}")
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '.')
            .collect();

        let suffix: u32 = rng.gen_range(1..9999);
        let domains = ["gmail.com", "outlook.com", "yahoo.com", "proton.me"];
        let domain = domains[rng.gen_range(0..domains.len())];

        format!("{normalized}{suffix}@{domain}")
    }
}

impl Default for PlayerGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generate_player() {
        let player_gen = PlayerGenerator::new();
        let range = DateRange::default();
        let mut rng = StdRng::seed_from_u64(3);

        let player = player_gen.generate(&range, &mut rng);

        assert!(!player.player_name.is_empty());
        assert!(player.email.contains('@'));
        assert!(player.created_at < range.end_datetime());
        assert!((0.3..=1.0).contains(&player.skill_factor));
        assert!((0.4..=0.9).contains(&player.consistency_rating));
        assert!((0.3..=0.9).contains(&player.accuracy_rating));
    }

    #[test]
    fn test_generate_batch_unique_ids() {
        let player_gen = PlayerGenerator::new();
        let range = DateRange::default();
        let mut rng = StdRng::seed_from_u64(4);

        let players = player_gen.generate_batch(50, &range, &mut rng);

        assert_eq!(players.len(), 50);
        let ids: std::collections::HashSet<_> = players.iter().map(|p| p.player_id).collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_skill_fields_within_documented_bounds() {
        let player_gen = PlayerGenerator::new();
        let range = DateRange::default();
        let mut rng = StdRng::seed_from_u64(5);

        for player in player_gen.generate_batch(500, &range, &mut rng) {
            assert!((0.3..=1.0).contains(&player.skill_factor));
            assert!((0.4..=0.9).contains(&player.consistency_rating));
            assert!((0.3..=0.9).contains(&player.accuracy_rating));
            assert!((18..=75).contains(&player.age));
        }
    }
}
