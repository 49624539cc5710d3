//! Fluent builder producing a complete dataset.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::catalog::{self, CatalogError};
use crate::config::{DateRange, GeneratorConfig};
use crate::generators::{
    CourseGenerator, FacilityGenerator, GeneratedBay, GeneratedBooking, GeneratedClub,
    GeneratedCourse, GeneratedFacility, GeneratedGameSession, GeneratedGameType,
    GeneratedHole, GeneratedHoleScore, GeneratedMarketingEvent, GeneratedPlayer,
    GeneratedScorecard, GeneratedSession, GeneratedShot, GeneratedSubscriptionEvent,
    GeneratedTier, MarketingEventGenerator, PlayerGenConfig, PlayerGenerator, SessionGenConfig,
    SessionGenerator, SubscriptionEventGenerator, club_rows, derive_bookings, game_type_rows,
    tier_rows,
};

/// Every table of a generated run, in memory.
#[derive(Debug)]
pub struct Dataset {
    pub players: Vec<GeneratedPlayer>,
    pub courses: Vec<GeneratedCourse>,
    pub holes: Vec<GeneratedHole>,
    pub clubs: Vec<GeneratedClub>,
    pub game_types: Vec<GeneratedGameType>,
    pub subscription_tiers: Vec<GeneratedTier>,
    pub facilities: Vec<GeneratedFacility>,
    pub bays: Vec<GeneratedBay>,
    pub sessions: Vec<GeneratedSession>,
    pub scorecards: Vec<GeneratedScorecard>,
    pub hole_scores: Vec<GeneratedHoleScore>,
    pub shots: Vec<GeneratedShot>,
    pub game_sessions: Vec<GeneratedGameSession>,
    pub bookings: Vec<GeneratedBooking>,
    pub subscription_events: Vec<GeneratedSubscriptionEvent>,
    pub marketing_events: Vec<GeneratedMarketingEvent>,
}

impl Dataset {
    /// Table names and row counts, in write order.
    pub fn row_counts(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("dim_players", self.players.len()),
            ("dim_courses", self.courses.len()),
            ("dim_course_holes", self.holes.len()),
            ("dim_clubs", self.clubs.len()),
            ("dim_facilities", self.facilities.len()),
            ("dim_bays", self.bays.len()),
            ("dim_game_types", self.game_types.len()),
            ("dim_subscription_tiers", self.subscription_tiers.len()),
            ("fact_sessions", self.sessions.len()),
            ("fact_scorecards", self.scorecards.len()),
            ("fact_hole_scores", self.hole_scores.len()),
            ("fact_shots", self.shots.len()),
            ("fact_game_sessions", self.game_sessions.len()),
            ("fact_bay_bookings", self.bookings.len()),
            ("subscription_events", self.subscription_events.len()),
            ("marketing_events", self.marketing_events.len()),
        ]
    }
}

/// Builder for a full generation run.
///
/// # Example
///
/// ```rust,ignore
/// let dataset = DatasetBuilder::new()
///     .with_seed(42)
///     .with_players(500)
///     .with_facilities(50)
///     .with_sessions(10_000)
///     .build()?;
/// ```
pub struct DatasetBuilder {
    config: GeneratorConfig,
    player_config: PlayerGenConfig,
    session_config: SessionGenConfig,
}

impl DatasetBuilder {
    /// Creates a builder with default configuration.
    pub fn new() -> Self {
        Self::from_config(GeneratorConfig::default())
    }

    /// Creates a builder from an explicit configuration.
    pub fn from_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            player_config: PlayerGenConfig::default(),
            session_config: SessionGenConfig::default(),
        }
    }

    /// Sets the run seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Sets the number of players.
    pub fn with_players(mut self, count: usize) -> Self {
        self.config.players = count;
        self
    }

    /// Sets the number of facilities.
    pub fn with_facilities(mut self, count: usize) -> Self {
        self.config.facilities = count;
        self
    }

    /// Sets the target session count.
    pub fn with_sessions(mut self, count: usize) -> Self {
        self.config.target_sessions = count;
        self
    }

    /// Sets the calendar window.
    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.config.date_range = range;
        self
    }

    /// Sets the player generation configuration.
    pub fn with_player_config(mut self, config: PlayerGenConfig) -> Self {
        self.player_config = config;
        self
    }

    /// Sets the session generation configuration.
    pub fn with_session_config(mut self, config: SessionGenConfig) -> Self {
        self.session_config = config;
        self
    }

    /// Validates the catalogs and generates the full dataset in dependency
    /// order: dimensions, then session facts, then derived events.
    ///
    /// All randomness (row ids included) flows from a `StdRng` seeded with
    /// the configured seed, so identical configurations produce identical
    /// datasets.
    pub fn build(self) -> Result<Dataset, CatalogError> {
        catalog::validate()?;

        let range = self.config.date_range;
        let mut rng = StdRng::seed_from_u64(self.config.seed);

        info!(
            "generating dataset: {} players, {} facilities, {} sessions, {} to {}",
            self.config.players,
            self.config.facilities,
            self.config.target_sessions,
            range.start,
            range.end
        );

        let players = PlayerGenerator::with_config(self.player_config)
            .generate_batch(self.config.players, &range, &mut rng);
        info!("generated {} players", players.len());

        let (courses, holes) = CourseGenerator::generate_all(&mut rng);
        info!("generated {} courses with {} holes", courses.len(), holes.len());

        let (facilities, bays) = FacilityGenerator::new()
            .generate_batch(self.config.facilities, &range, &mut rng);
        info!("generated {} facilities with {} bays", facilities.len(), bays.len());

        let batch = SessionGenerator::with_config(self.session_config).generate_batch(
            self.config.target_sessions,
            &players,
            &bays,
            &courses,
            &holes,
            &range,
            &mut rng,
        )?;
        info!(
            "generated {} sessions: {} scorecards, {} hole scores, {} shots, {} game sessions",
            batch.sessions.len(),
            batch.scorecards.len(),
            batch.hole_scores.len(),
            batch.shots.len(),
            batch.game_sessions.len()
        );

        let bookings = derive_bookings(&batch.sessions, &bays, &facilities, &mut rng);
        info!("derived {} bay bookings", bookings.len());

        let subscription_events =
            SubscriptionEventGenerator::new().generate(&players, &range, &mut rng);
        let marketing_events = MarketingEventGenerator::new().generate(&players, &range, &mut rng);
        info!(
            "generated {} subscription events, {} marketing events",
            subscription_events.len(),
            marketing_events.len()
        );

        Ok(Dataset {
            players,
            courses,
            holes,
            clubs: club_rows(),
            game_types: game_type_rows(),
            subscription_tiers: tier_rows(),
            facilities,
            bays,
            sessions: batch.sessions,
            scorecards: batch.scorecards,
            hole_scores: batch.hole_scores,
            shots: batch.shots,
            game_sessions: batch.game_sessions,
            bookings,
            subscription_events,
            marketing_events,
        })
    }
}

impl Default for DatasetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_small_dataset() {
        let dataset = DatasetBuilder::new()
            .with_seed(7)
            .with_players(25)
            .with_facilities(5)
            .with_sessions(100)
            .build()
            .unwrap();

        assert_eq!(dataset.players.len(), 25);
        assert_eq!(dataset.courses.len(), catalog::COURSES.len());
        assert_eq!(dataset.holes.len(), catalog::COURSES.len() * 18);
        assert_eq!(dataset.sessions.len(), 100);
        assert!(!dataset.subscription_events.is_empty());
    }

    #[test]
    fn test_row_counts_cover_all_tables() {
        let dataset = DatasetBuilder::new()
            .with_seed(8)
            .with_players(10)
            .with_facilities(3)
            .with_sessions(20)
            .build()
            .unwrap();

        let counts = dataset.row_counts();
        assert_eq!(counts.len(), 16);
        assert!(counts.iter().any(|(name, n)| *name == "dim_players" && *n == 10));
    }
}
