//! Session orchestration: the central generation loop.
//!
//! For each target session this picks participants, a bay, a session type,
//! and a start time, then dispatches into the scoring model (course play and
//! tournaments), the shot physics model (practice categories), or a game
//! record. Scorecard aggregates are always recomputed from the hole scores
//! generated for that card, never sampled independently; that is the
//! consistency contract the downstream warehouse relies on.

use std::collections::HashMap;

use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use time::{Date, Duration, OffsetDateTime};
use tracing::debug;
use uuid::Uuid;

use super::course::{GeneratedCourse, GeneratedHole};
use super::facility::GeneratedBay;
use super::player::GeneratedPlayer;
use super::scoring::{ScoreType, score_hole};
use super::shot::simulate_shot;
use super::{new_id, round1, round2};
use crate::catalog::{self, CatalogError, SessionCategory, SessionTypeSpec};
use crate::config::DateRange;

/// Generated session fact row.
#[derive(Debug, Clone, serde::Serialize)]
pub struct GeneratedSession {
    pub session_id: Uuid,
    pub facility_id: Uuid,
    pub bay_id: Uuid,
    pub bay_name: String,
    pub session_type: &'static str,
    pub session_category: SessionCategory,
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub ended_at: OffsetDateTime,
    pub duration_minutes: i64,
    pub session_date: Date,
    pub day_of_week: String,
    pub hour_of_day: u8,
    pub num_players: u8,
    pub is_logged_in: bool,
    pub is_guest: bool,
}

/// Generated scorecard fact row. Aggregates derive from the card's hole
/// scores.
#[derive(Debug, Clone, serde::Serialize)]
pub struct GeneratedScorecard {
    pub scorecard_id: Uuid,
    pub session_id: Uuid,
    pub player_id: Uuid,
    pub player_name: String,
    pub course_id: &'static str,
    pub course_name: &'static str,
    pub tee: &'static str,
    pub holes_played: u8,
    pub total_strokes: u32,
    pub front_nine: Option<u32>,
    pub back_nine: Option<u32>,
    pub total_par: u32,
    pub score_vs_par: i32,
    pub gross_score: u32,
    pub net_score: i32,
    pub handicap: f64,
    pub gir_count: u32,
    pub gir_percentage: f64,
    pub fir_percentage: Option<f64>,
    pub putts_total: u32,
    pub putts_per_hole: f64,
    pub is_complete: bool,
    pub is_tournament: bool,
    pub round_date: Date,
    #[serde(with = "time::serde::rfc3339")]
    pub round_datetime: OffsetDateTime,
}

/// Generated hole score fact row.
#[derive(Debug, Clone, serde::Serialize)]
pub struct GeneratedHoleScore {
    pub hole_score_id: Uuid,
    pub scorecard_id: Uuid,
    pub session_id: Uuid,
    pub player_id: Uuid,
    pub course_id: &'static str,
    pub hole_number: u8,
    pub par: u8,
    pub yardage: u32,
    pub stroke_index: u8,
    pub strokes: u32,
    pub putts: u32,
    pub gir: bool,
    pub fir: Option<bool>,
    pub score_type: ScoreType,
    pub vs_par: i32,
    pub score_date: Date,
}

/// Generated shot fact row with the full launch-monitor vector.
#[derive(Debug, Clone, serde::Serialize)]
pub struct GeneratedShot {
    pub shot_id: Uuid,
    pub session_id: Uuid,
    pub player_id: Uuid,
    pub bay_id: Uuid,
    pub club_id: &'static str,
    pub shot_number: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub shot_timestamp: OffsetDateTime,
    pub shot_date: Date,
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

/// Generated game session fact row.
#[derive(Debug, Clone, serde::Serialize)]
pub struct GeneratedGameSession {
    pub game_session_id: Uuid,
    pub session_id: Uuid,
    pub game_type_id: &'static str,
    pub game_name: &'static str,
    pub num_players: u8,
    pub num_shots: u32,
    pub total_strokes: u32,
    pub score: u32,
    pub duration_minutes: i64,
    pub game_date: Date,
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
}

/// Everything one orchestrator run produces.
#[derive(Debug, Default)]
pub struct SessionBatch {
    pub sessions: Vec<GeneratedSession>,
    pub scorecards: Vec<GeneratedScorecard>,
    pub hole_scores: Vec<GeneratedHoleScore>,
    pub shots: Vec<GeneratedShot>,
    pub game_sessions: Vec<GeneratedGameSession>,
}

/// Configuration for session generation.
#[derive(Debug, Clone)]
pub struct SessionGenConfig {
    /// Weights for 1..=4 participants.
    pub participant_weights: [f64; 4],
    /// Start-hour weights across the full day; midday and early evening
    /// dominate, overnight hours are nearly dead.
    pub hour_weights: [f64; 24],
    /// Probability a course-play round is 18 holes rather than 9.
    pub eighteen_hole_probability: f64,
    /// Shots hit in a practice-category session.
    pub practice_shot_range: (u32, u32),
    /// Seconds between consecutive practice shots.
    pub shot_spacing_seconds: i64,
    /// Jitter applied to the session type's average duration, in minutes.
    pub duration_jitter_min: (i64, i64),
}

impl Default for SessionGenConfig {
    fn default() -> Self {
        Self {
            participant_weights: [0.35, 0.35, 0.20, 0.10],
            hour_weights: [
                0.01, 0.01, 0.01, 0.01, 0.01, 0.01, // 00:00 - 05:00
                0.03, 0.05, 0.08, 0.10, 0.10, 0.12, // 06:00 - 11:00
                0.10, 0.08, 0.06, 0.08, 0.06, 0.04, // 12:00 - 17:00
                0.02, 0.01, 0.01, 0.01, 0.01, 0.01, // 18:00 - 23:00
            ],
            eighteen_hole_probability: 0.55,
            practice_shot_range: (80, 150),
            shot_spacing_seconds: 30,
            duration_jitter_min: (-20, 40),
        }
    }
}

/// Drives the bulk session generation loop.
pub struct SessionGenerator {
    config: SessionGenConfig,
    type_weights: WeightedIndex<f64>,
    hour_weights: WeightedIndex<f64>,
    participant_weights: WeightedIndex<f64>,
}

impl SessionGenerator {
    /// Creates a new session generator with default configuration.
    pub fn new() -> Self {
        Self::with_config(SessionGenConfig::default())
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: SessionGenConfig) -> Self {
        let type_weights =
            WeightedIndex::new(catalog::SESSION_TYPES.iter().map(|t| t.weight)).unwrap();
        let hour_weights = WeightedIndex::new(config.hour_weights).unwrap();
        let participant_weights = WeightedIndex::new(config.participant_weights).unwrap();

        Self {
            config,
            type_weights,
            hour_weights,
            participant_weights,
        }
    }

    /// Generates `target_sessions` sessions with their dependent fact rows.
    pub fn generate_batch(
        &self,
        target_sessions: usize,
        players: &[GeneratedPlayer],
        bays: &[GeneratedBay],
        courses: &[GeneratedCourse],
        holes: &[GeneratedHole],
        range: &DateRange,
        rng: &mut impl Rng,
    ) -> Result<SessionBatch, CatalogError> {
        let mut batch = SessionBatch::default();
        if players.is_empty() || bays.is_empty() || courses.is_empty() {
            return Ok(batch);
        }

        // Holes grouped per course, in play order.
        let mut holes_by_course: HashMap<&str, Vec<&GeneratedHole>> = HashMap::new();
        for hole in holes {
            holes_by_course.entry(hole.course_id).or_default().push(hole);
        }
        for course_holes in holes_by_course.values_mut() {
            course_holes.sort_by_key(|h| h.hole_number);
        }

        let swing_club_ids: Vec<&'static str> = catalog::swing_clubs().map(|c| c.id).collect();

        for session_idx in 0..target_sessions {
            if session_idx > 0 && session_idx % 1000 == 0 {
                debug!("generated {session_idx}/{target_sessions} sessions");
            }

            let num_players = self.participant_weights.sample(rng) + 1;
            let participants: Vec<&GeneratedPlayer> = players
                .choose_multiple(rng, num_players.min(players.len()))
                .collect();
            let primary = participants[0];

            let bay = bays.choose(rng).expect("bays checked non-empty");
            let session_type: &SessionTypeSpec =
                &catalog::SESSION_TYPES[self.type_weights.sample(rng)];

            let session_date = range.random_date(rng);
            let hour = self.hour_weights.sample(rng) as u8;
            let started_at = session_date
                .with_hms(hour, rng.gen_range(0..60), 0)
                .expect("sampled time of day is valid")
                .assume_utc();

            let (jitter_min, jitter_max) = self.config.duration_jitter_min;
            let duration_minutes =
                (session_type.avg_duration_min + rng.gen_range(jitter_min..=jitter_max)).max(15);
            let ended_at = started_at + Duration::minutes(duration_minutes);

            let session_id = new_id(rng);
            let is_logged_in = !primary.is_guest;

            batch.sessions.push(GeneratedSession {
                session_id,
                facility_id: bay.facility_id,
                bay_id: bay.bay_id,
                bay_name: bay.bay_name.clone(),
                session_type: session_type.id,
                session_category: session_type.category,
                started_at,
                ended_at,
                duration_minutes,
                session_date,
                day_of_week: started_at.weekday().to_string(),
                hour_of_day: hour,
                num_players: participants.len() as u8,
                is_logged_in,
                is_guest: !is_logged_in,
            });

            match session_type.category {
                SessionCategory::Courses => {
                    let holes_played =
                        if rng.r#gen::<f64>() < self.config.eighteen_hole_probability {
                            18
                        } else {
                            9
                        };
                    self.play_round(
                        &mut batch,
                        session_id,
                        &participants,
                        courses,
                        &holes_by_course,
                        holes_played,
                        false,
                        started_at,
                        rng,
                    );
                }
                SessionCategory::Tournament => {
                    self.play_round(
                        &mut batch,
                        session_id,
                        &participants,
                        courses,
                        &holes_by_course,
                        18,
                        true,
                        started_at,
                        rng,
                    );
                }
                SessionCategory::Game => {
                    let game = catalog::GAMES.choose(rng).expect("game catalog is non-empty");
                    let num_shots = rng.gen_range(game.min_shots..=game.max_shots);

                    batch.game_sessions.push(GeneratedGameSession {
                        game_session_id: new_id(rng),
                        session_id,
                        game_type_id: game.id,
                        game_name: game.name,
                        num_players: participants.len() as u8,
                        num_shots,
                        total_strokes: num_shots,
                        score: rng.gen_range(50..=100) * participants.len() as u32,
                        duration_minutes,
                        game_date: session_date,
                        started_at,
                    });
                }
                SessionCategory::Practice => {
                    let (min_shots, max_shots) = self.config.practice_shot_range;
                    let num_shots = rng.gen_range(min_shots..=max_shots);
                    let profile = primary.skill_profile();

                    for shot_number in 1..=num_shots {
                        let club_id =
                            *swing_club_ids.choose(rng).expect("swing clubs are non-empty");
                        let m = simulate_shot(&profile, club_id, rng)?;
                        let shot_timestamp = started_at
                            + Duration::seconds(
                                i64::from(shot_number - 1) * self.config.shot_spacing_seconds,
                            );

                        batch.shots.push(GeneratedShot {
                            shot_id: new_id(rng),
                            session_id,
                            player_id: primary.player_id,
                            bay_id: bay.bay_id,
                            club_id,
                            shot_number,
                            shot_timestamp,
                            shot_date: session_date,
                            club_speed: m.club_speed,
                            ball_speed: m.ball_speed,
                            smash_factor: m.smash_factor,
                            attack_angle: m.attack_angle,
                            club_path: m.club_path,
                            face_angle: m.face_angle,
                            face_to_path: m.face_to_path,
                            spin_rate: m.spin_rate,
                            spin_axis: m.spin_axis,
                            launch_angle: m.launch_angle,
                            apex_height: m.apex_height,
                            carry_distance: m.carry_distance,
                            total_distance: m.total_distance,
                        });
                    }
                }
            }
        }

        Ok(batch)
    }

    /// Plays one round per participant, emitting a scorecard whose aggregates
    /// are recomputed from the hole scores just generated for it.
    #[allow(clippy::too_many_arguments)]
    fn play_round(
        &self,
        batch: &mut SessionBatch,
        session_id: Uuid,
        participants: &[&GeneratedPlayer],
        courses: &[GeneratedCourse],
        holes_by_course: &HashMap<&str, Vec<&GeneratedHole>>,
        holes_played: u8,
        is_tournament: bool,
        started_at: OffsetDateTime,
        rng: &mut impl Rng,
    ) {
        let course = courses.choose(rng).expect("courses checked non-empty");
        let Some(course_holes) = holes_by_course.get(course.course_id) else {
            return;
        };
        let played = &course_holes[..usize::from(holes_played).min(course_holes.len())];

        for player in participants {
            let scorecard_id = new_id(rng);
            let profile = player.skill_profile();

            let mut strokes_per_hole = Vec::with_capacity(played.len());
            let mut putts_total = 0u32;
            let mut gir_count = 0u32;
            let mut fir_count = 0u32;
            let mut fir_holes = 0u32;

            for hole in played {
                let outcome = score_hole(&profile, hole.par, rng);
                strokes_per_hole.push(outcome.strokes);
                putts_total += outcome.putts;
                if outcome.gir {
                    gir_count += 1;
                }
                if let Some(hit) = outcome.fir {
                    fir_holes += 1;
                    if hit {
                        fir_count += 1;
                    }
                }

                batch.hole_scores.push(GeneratedHoleScore {
                    hole_score_id: new_id(rng),
                    scorecard_id,
                    session_id,
                    player_id: player.player_id,
                    course_id: course.course_id,
                    hole_number: hole.hole_number,
                    par: hole.par,
                    yardage: hole.yardage,
                    stroke_index: hole.stroke_index,
                    strokes: outcome.strokes,
                    putts: outcome.putts,
                    gir: outcome.gir,
                    fir: outcome.fir,
                    score_type: outcome.score_type,
                    vs_par: outcome.vs_par,
                    score_date: started_at.date(),
                });
            }

            let total_strokes: u32 = strokes_per_hole.iter().sum();
            let total_par: u32 = played.iter().map(|h| u32::from(h.par)).sum();
            let front_nine: u32 = strokes_per_hole.iter().take(9).sum();
            let back_nine =
                (holes_played == 18).then(|| strokes_per_hole.iter().skip(9).sum::<u32>());

            let net_score = if is_tournament {
                total_strokes as i32 - player.handicap_index as i32
            } else {
                total_strokes as i32
                    - (player.handicap_index * f64::from(holes_played) / 18.0) as i32
            };

            let holes = f64::from(holes_played);
            batch.scorecards.push(GeneratedScorecard {
                scorecard_id,
                session_id,
                player_id: player.player_id,
                player_name: player.player_name.clone(),
                course_id: course.course_id,
                course_name: course.course_name,
                tee: player.tee_preference,
                holes_played,
                total_strokes,
                front_nine: Some(front_nine),
                back_nine,
                total_par,
                score_vs_par: total_strokes as i32 - total_par as i32,
                gross_score: total_strokes,
                net_score,
                handicap: player.handicap_index,
                gir_count,
                gir_percentage: round1(f64::from(gir_count) / holes * 100.0),
                fir_percentage: (fir_holes > 0)
                    .then(|| round1(f64::from(fir_count) / f64::from(fir_holes) * 100.0)),
                putts_total,
                putts_per_hole: round2(f64::from(putts_total) / holes),
                is_complete: holes_played == 18,
                is_tournament,
                round_date: started_at.date(),
                round_datetime: started_at,
            });
        }
    }
}

impl Default for SessionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::course::CourseGenerator;
    use crate::generators::facility::FacilityGenerator;
    use crate::generators::player::PlayerGenerator;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn make_batch(target: usize, seed: u64) -> SessionBatch {
        let mut rng = StdRng::seed_from_u64(seed);
        let range = DateRange::default();

        let players = PlayerGenerator::new().generate_batch(30, &range, &mut rng);
        let (_, bays) = FacilityGenerator::new().generate_batch(6, &range, &mut rng);
        let (courses, holes) = CourseGenerator::generate_all(&mut rng);

        SessionGenerator::new()
            .generate_batch(target, &players, &bays, &courses, &holes, &range, &mut rng)
            .expect("catalog clubs are all known")
    }

    #[test]
    fn test_scorecard_aggregates_match_hole_scores() {
        let batch = make_batch(300, 1);
        assert!(!batch.scorecards.is_empty());

        for card in &batch.scorecards {
            let holes: Vec<_> = batch
                .hole_scores
                .iter()
                .filter(|h| h.scorecard_id == card.scorecard_id)
                .collect();

            assert_eq!(holes.len(), usize::from(card.holes_played));
            assert_eq!(card.total_strokes, holes.iter().map(|h| h.strokes).sum::<u32>());
            assert_eq!(card.putts_total, holes.iter().map(|h| h.putts).sum::<u32>());
            assert_eq!(card.gir_count, holes.iter().filter(|h| h.gir).count() as u32);

            if card.holes_played == 18 {
                let front = card.front_nine.unwrap();
                let back = card.back_nine.unwrap();
                assert_eq!(front + back, card.total_strokes);

                let mut numbers: Vec<u8> = holes.iter().map(|h| h.hole_number).collect();
                numbers.sort_unstable();
                assert_eq!(numbers, (1..=18).collect::<Vec<u8>>());
            }
        }
    }

    #[test]
    fn test_hole_score_invariants() {
        let batch = make_batch(300, 2);

        for h in &batch.hole_scores {
            assert!(h.putts >= 1 && h.putts <= h.strokes);
            assert_eq!(h.vs_par, h.strokes as i32 - i32::from(h.par));
            assert_eq!(h.gir, h.strokes.saturating_sub(h.putts) as i32 <= i32::from(h.par) - 2);
            if h.par == 3 {
                assert!(h.fir.is_none());
            }
        }
    }

    #[test]
    fn test_practice_sessions_emit_bounded_shots() {
        let batch = make_batch(400, 3);

        let practice: Vec<_> = batch
            .sessions
            .iter()
            .filter(|s| s.session_category == SessionCategory::Practice)
            .collect();
        assert!(!practice.is_empty(), "expected some practice sessions in 400");

        for session in practice {
            let shots: Vec<_> = batch
                .shots
                .iter()
                .filter(|s| s.session_id == session.session_id)
                .collect();

            assert!(
                (80..=150).contains(&shots.len()),
                "practice session produced {} shots",
                shots.len()
            );
            assert!(shots.iter().all(|s| s.bay_id == session.bay_id));
            for (i, shot) in shots.iter().enumerate() {
                assert_eq!(shot.shot_number, i as u32 + 1);
                assert_eq!(
                    shot.shot_timestamp,
                    session.started_at + Duration::seconds(i as i64 * 30)
                );
            }
        }
    }

    #[test]
    fn test_tournaments_always_play_eighteen() {
        let batch = make_batch(400, 4);

        for card in batch.scorecards.iter().filter(|c| c.is_tournament) {
            assert_eq!(card.holes_played, 18);
            assert!(card.is_complete);
        }
    }

    #[test]
    fn test_game_sessions_within_catalog_bounds() {
        let batch = make_batch(400, 5);

        let games: Vec<_> = batch.game_sessions.iter().collect();
        assert!(!games.is_empty(), "expected some game sessions in 400");

        for g in games {
            let spec = catalog::GAMES.iter().find(|s| s.id == g.game_type_id).unwrap();
            assert!((spec.min_shots..=spec.max_shots).contains(&g.num_shots));
            assert_eq!(g.total_strokes, g.num_shots);
        }
    }

    #[test]
    fn test_every_row_carries_owning_session() {
        let batch = make_batch(200, 6);
        let session_ids: std::collections::HashSet<_> =
            batch.sessions.iter().map(|s| s.session_id).collect();

        assert!(batch.scorecards.iter().all(|c| session_ids.contains(&c.session_id)));
        assert!(batch.hole_scores.iter().all(|h| session_ids.contains(&h.session_id)));
        assert!(batch.shots.iter().all(|s| session_ids.contains(&s.session_id)));
        assert!(batch.game_sessions.iter().all(|g| session_ids.contains(&g.session_id)));
    }
}
