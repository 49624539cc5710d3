//! Static reference catalogs: virtual courses, club specifications, arcade
//! games, session types, simulator hardware, facility types, subscription
//! tiers, sales regions, and marketing campaigns.
//!
//! The catalogs are validated once at startup via [`validate`]; after that,
//! lookups like [`club`] fail loudly on unknown keys instead of silently
//! defaulting.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown club id: {0}")]
    UnknownClub(String),
    #[error("invalid reference data: {0}")]
    InvalidReference(String),
}

/// A virtual course available on the simulator.
#[derive(Debug, Clone, Copy)]
pub struct CourseSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub country: &'static str,
    pub par: u8,
    pub yardage: u32,
    pub rating: f64,
    pub slope: u8,
}

pub const COURSES: &[CourseSpec] = &[
    CourseSpec { id: "pebble_beach", name: "Pebble Beach Golf Links", country: "USA", par: 72, yardage: 6828, rating: 4.8, slope: 145 },
    CourseSpec { id: "st_andrews", name: "St Andrews Old Course", country: "Scotland", par: 72, yardage: 6721, rating: 4.7, slope: 132 },
    CourseSpec { id: "augusta_national", name: "Augusta National Golf Club", country: "USA", par: 72, yardage: 7475, rating: 4.9, slope: 148 },
    CourseSpec { id: "links_spanish_bay", name: "The Links at Spanish Bay", country: "USA", par: 72, yardage: 6821, rating: 4.5, slope: 140 },
    CourseSpec { id: "bethpage_black", name: "Bethpage Black", country: "USA", par: 71, yardage: 7468, rating: 4.5, slope: 155 },
    CourseSpec { id: "valhalla", name: "Valhalla Golf Club", country: "USA", par: 72, yardage: 7458, rating: 4.6, slope: 150 },
    CourseSpec { id: "adare_manor", name: "Adare Manor", country: "Ireland", par: 72, yardage: 7509, rating: 4.7, slope: 147 },
    CourseSpec { id: "cabot_cliffs", name: "Cabot Cliffs", country: "Canada", par: 72, yardage: 6764, rating: 4.8, slope: 142 },
    CourseSpec { id: "torrey_pines", name: "Torrey Pines South", country: "USA", par: 72, yardage: 7698, rating: 4.4, slope: 144 },
    CourseSpec { id: "innisbrook", name: "Innisbrook Copperhead", country: "USA", par: 71, yardage: 7340, rating: 4.3, slope: 141 },
    CourseSpec { id: "hong_kong_gc", name: "Hong Kong Golf Club", country: "Hong Kong", par: 70, yardage: 6703, rating: 4.2, slope: 138 },
    CourseSpec { id: "lofoten_links", name: "Lofoten Links", country: "Norway", par: 71, yardage: 6590, rating: 4.4, slope: 135 },
    CourseSpec { id: "abu_dhabi", name: "Abu Dhabi Golf Club - National Course", country: "UAE", par: 72, yardage: 7583, rating: 4.3, slope: 143 },
    CourseSpec { id: "barnbougle", name: "Barnbougle Dunes", country: "Australia", par: 71, yardage: 6586, rating: 4.6, slope: 137 },
    CourseSpec { id: "bellerive", name: "Bellerive CC", country: "USA", par: 71, yardage: 7547, rating: 4.4, slope: 146 },
    CourseSpec { id: "black_desert", name: "Black Desert Resort", country: "USA", par: 72, yardage: 7432, rating: 4.5, slope: 144 },
    CourseSpec { id: "carnoustie", name: "Carnoustie Golf Links", country: "Scotland", par: 72, yardage: 7412, rating: 4.5, slope: 149 },
    CourseSpec { id: "conway_farms", name: "Conway Farms GC", country: "USA", par: 71, yardage: 7195, rating: 4.3, slope: 140 },
    CourseSpec { id: "cabot_links", name: "Cabot Links", country: "Canada", par: 70, yardage: 6810, rating: 4.5, slope: 136 },
    CourseSpec { id: "achmer_gc", name: "Achmer GC", country: "Germany", par: 72, yardage: 6450, rating: 4.1, slope: 130 },
];

/// Per-hole par layout for a given course total par. Shuffled per course
/// before assignment so courses with the same total differ hole-by-hole.
pub fn par_template(total_par: u8) -> Option<[u8; 18]> {
    match total_par {
        72 => Some([4, 5, 4, 3, 4, 4, 3, 4, 5, 4, 4, 3, 5, 4, 4, 3, 4, 5]),
        71 => Some([4, 4, 4, 3, 4, 4, 3, 4, 5, 4, 4, 3, 5, 4, 4, 3, 4, 5]),
        70 => Some([4, 4, 4, 3, 4, 4, 3, 4, 4, 4, 4, 3, 5, 4, 4, 3, 4, 5]),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClubCategory {
    Wood,
    Hybrid,
    Iron,
    Wedge,
    Putter,
}

/// Manufacturer specification for one club.
#[derive(Debug, Clone, Copy)]
pub struct ClubSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub category: ClubCategory,
    pub loft: f64,
    /// Typical carry distance (min, max) in yards.
    pub carry_range: (f64, f64),
    /// Typical spin rate (min, max) in rpm.
    pub spin_range: (f64, f64),
    pub smash_target: f64,
}

impl ClubSpec {
    pub fn carry_mid(&self) -> f64 {
        (self.carry_range.0 + self.carry_range.1) / 2.0
    }

    pub fn spin_mid(&self) -> f64 {
        (self.spin_range.0 + self.spin_range.1) / 2.0
    }

    /// Mean attack angle in degrees: irons and wedges hit down on the ball,
    /// the driver sweeps up, everything else is near level.
    pub fn attack_bias(&self) -> f64 {
        match self.category {
            ClubCategory::Iron | ClubCategory::Wedge => -2.0,
            ClubCategory::Wood if self.loft < 12.0 => 2.0,
            _ => 0.0,
        }
    }

    /// High-loft wedges and the putter stop quickly after landing.
    pub fn short_rollout(&self) -> bool {
        self.category == ClubCategory::Putter
            || (self.category == ClubCategory::Wedge && self.loft >= 54.0)
    }
}

pub const CLUBS: &[ClubSpec] = &[
    ClubSpec { id: "driver", name: "Driver", category: ClubCategory::Wood, loft: 10.5, carry_range: (220.0, 280.0), spin_range: (2000.0, 3000.0), smash_target: 1.48 },
    ClubSpec { id: "3_wood", name: "3-Wood", category: ClubCategory::Wood, loft: 15.0, carry_range: (200.0, 250.0), spin_range: (3000.0, 4500.0), smash_target: 1.45 },
    ClubSpec { id: "5_wood", name: "5-Wood", category: ClubCategory::Wood, loft: 18.0, carry_range: (180.0, 230.0), spin_range: (3500.0, 5000.0), smash_target: 1.43 },
    ClubSpec { id: "hybrid", name: "Hybrid", category: ClubCategory::Hybrid, loft: 21.0, carry_range: (170.0, 210.0), spin_range: (4000.0, 5500.0), smash_target: 1.40 },
    ClubSpec { id: "4_iron", name: "4-Iron", category: ClubCategory::Iron, loft: 24.0, carry_range: (170.0, 200.0), spin_range: (4500.0, 5500.0), smash_target: 1.36 },
    ClubSpec { id: "5_iron", name: "5-Iron", category: ClubCategory::Iron, loft: 27.0, carry_range: (160.0, 190.0), spin_range: (5000.0, 6000.0), smash_target: 1.34 },
    ClubSpec { id: "6_iron", name: "6-Iron", category: ClubCategory::Iron, loft: 30.0, carry_range: (150.0, 180.0), spin_range: (5500.0, 6500.0), smash_target: 1.32 },
    ClubSpec { id: "7_iron", name: "7-Iron", category: ClubCategory::Iron, loft: 34.0, carry_range: (140.0, 170.0), spin_range: (6000.0, 7500.0), smash_target: 1.30 },
    ClubSpec { id: "8_iron", name: "8-Iron", category: ClubCategory::Iron, loft: 38.0, carry_range: (130.0, 160.0), spin_range: (7000.0, 8500.0), smash_target: 1.28 },
    ClubSpec { id: "9_iron", name: "9-Iron", category: ClubCategory::Iron, loft: 42.0, carry_range: (120.0, 145.0), spin_range: (8000.0, 9500.0), smash_target: 1.26 },
    ClubSpec { id: "pw", name: "PW", category: ClubCategory::Wedge, loft: 46.0, carry_range: (100.0, 130.0), spin_range: (9000.0, 10500.0), smash_target: 1.24 },
    ClubSpec { id: "gw", name: "GW", category: ClubCategory::Wedge, loft: 50.0, carry_range: (90.0, 115.0), spin_range: (9500.0, 11000.0), smash_target: 1.22 },
    ClubSpec { id: "sw", name: "SW", category: ClubCategory::Wedge, loft: 54.0, carry_range: (70.0, 100.0), spin_range: (10000.0, 12000.0), smash_target: 1.20 },
    ClubSpec { id: "lw", name: "LW", category: ClubCategory::Wedge, loft: 58.0, carry_range: (50.0, 80.0), spin_range: (10500.0, 13000.0), smash_target: 1.18 },
    ClubSpec { id: "putter", name: "Putter", category: ClubCategory::Putter, loft: 3.0, carry_range: (1.0, 60.0), spin_range: (0.0, 500.0), smash_target: 1.0 },
];

/// Looks up a club by id. Unknown ids are an error rather than a fallback so
/// a typo in generated data surfaces immediately.
pub fn club(id: &str) -> Result<&'static ClubSpec, CatalogError> {
    CLUBS
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| CatalogError::UnknownClub(id.to_string()))
}

/// All clubs a player would swing on the range (everything but the putter).
pub fn swing_clubs() -> impl Iterator<Item = &'static ClubSpec> {
    CLUBS.iter().filter(|c| c.category != ClubCategory::Putter)
}

/// An arcade-style game mode offered on the simulator.
#[derive(Debug, Clone, Copy)]
pub struct GameSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub min_shots: u32,
    pub max_shots: u32,
}

pub const GAMES: &[GameSpec] = &[
    GameSpec { id: "bulls_eye", name: "Bulls Eye", description: "Accuracy challenge - hit targets", min_shots: 10, max_shots: 30 },
    GameSpec { id: "capture_flag", name: "Capture The Flag", description: "Strategic target capture game", min_shots: 15, max_shots: 40 },
    GameSpec { id: "closest_pin", name: "Closest To The Pin", description: "Precision approach shots", min_shots: 10, max_shots: 25 },
    GameSpec { id: "streets_neon", name: "Streets of Neon", description: "Virtual putting adventure", min_shots: 18, max_shots: 36 },
    GameSpec { id: "magic_pond", name: "Magic Pond", description: "Target creature capture game", min_shots: 15, max_shots: 35 },
    GameSpec { id: "mystic_sands", name: "Mystic Sands", description: "Desert monster challenge", min_shots: 15, max_shots: 35 },
    GameSpec { id: "cannon_bowl", name: "Cannon Bowl", description: "Bowling with golf balls", min_shots: 10, max_shots: 21 },
    GameSpec { id: "hit_it", name: "Hit It!", description: "Long drive competition", min_shots: 5, max_shots: 15 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionCategory {
    Courses,
    Practice,
    Game,
    Tournament,
}

/// One bookable session type, with its share of overall simulator usage.
#[derive(Debug, Clone, Copy)]
pub struct SessionTypeSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub category: SessionCategory,
    pub avg_duration_min: i64,
    pub weight: f64,
}

pub const SESSION_TYPES: &[SessionTypeSpec] = &[
    SessionTypeSpec { id: "course_play", name: "Course Play", category: SessionCategory::Courses, avg_duration_min: 120, weight: 0.25 },
    SessionTypeSpec { id: "practice_range", name: "Practice Range", category: SessionCategory::Practice, avg_duration_min: 45, weight: 0.20 },
    SessionTypeSpec { id: "on_course_practice", name: "On Course Practice", category: SessionCategory::Practice, avg_duration_min: 60, weight: 0.10 },
    SessionTypeSpec { id: "combine_test", name: "Combine Test", category: SessionCategory::Practice, avg_duration_min: 50, weight: 0.08 },
    SessionTypeSpec { id: "game", name: "Game", category: SessionCategory::Game, avg_duration_min: 30, weight: 0.18 },
    SessionTypeSpec { id: "tournament", name: "Tournament", category: SessionCategory::Tournament, avg_duration_min: 150, weight: 0.10 },
    SessionTypeSpec { id: "lesson", name: "Lesson/Coaching", category: SessionCategory::Practice, avg_duration_min: 60, weight: 0.05 },
    SessionTypeSpec { id: "fitting", name: "Club Fitting", category: SessionCategory::Practice, avg_duration_min: 90, weight: 0.04 },
];

/// Simulator hardware model installed in a bay.
#[derive(Debug, Clone, Copy)]
pub struct SimulatorModel {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub weight: f64,
}

pub const SIMULATOR_MODELS: &[SimulatorModel] = &[
    SimulatorModel { code: "FW4", name: "Fairway 4", description: "Outdoor/Indoor dual radar", weight: 0.35 },
    SimulatorModel { code: "iQ", name: "Fairway iQ", description: "Indoor ceiling-mounted", weight: 0.50 },
    SimulatorModel { code: "iQ_DUO", name: "Fairway iQ DUO", description: "Indoor dual-handed narrow bay", weight: 0.15 },
];

#[derive(Debug, Clone, Copy)]
pub struct FacilityTypeSpec {
    pub id: &'static str,
    pub weight: f64,
    /// Residential installs have a single bay and no hourly rate.
    pub residential: bool,
}

pub const FACILITY_TYPES: &[FacilityTypeSpec] = &[
    FacilityTypeSpec { id: "home_residential", weight: 0.20, residential: true },
    FacilityTypeSpec { id: "commercial_indoor", weight: 0.35, residential: false },
    FacilityTypeSpec { id: "golf_range", weight: 0.20, residential: false },
    FacilityTypeSpec { id: "country_club", weight: 0.10, residential: false },
    FacilityTypeSpec { id: "resort", weight: 0.10, residential: false },
    FacilityTypeSpec { id: "retail_fitting", weight: 0.05, residential: false },
];

pub const FACILITY_NAMES: &[&str] = &[
    "Carl's Place", "Golf Lab", "Swing Studio", "Indoor Golf Center", "Pro Golf Academy",
    "The Golf House", "Precision Golf", "Urban Golf", "Golf Zone", "Fairway Indoor",
    "Links Indoor", "Drive Zone", "Golf Performance Center", "Virtual Golf Club", "Tour Golf",
];

#[derive(Debug, Clone, Copy)]
pub struct SubscriptionTier {
    pub id: &'static str,
    pub name: &'static str,
    pub monthly_price: f64,
    pub features: &'static [&'static str],
    pub weight: f64,
}

pub const SUBSCRIPTION_TIERS: &[SubscriptionTier] = &[
    SubscriptionTier { id: "basic", name: "Basic", monthly_price: 29.99, features: &["course_play", "shot_analysis"], weight: 0.40 },
    SubscriptionTier { id: "performance", name: "Performance", monthly_price: 59.99, features: &["course_play", "shot_analysis", "combine_tests", "map_my_bag"], weight: 0.35 },
    SubscriptionTier { id: "pro", name: "Pro", monthly_price: 99.99, features: &["course_play", "shot_analysis", "combine_tests", "map_my_bag", "ai_coaching", "video_analysis"], weight: 0.20 },
    SubscriptionTier { id: "facility", name: "Facility License", monthly_price: 299.99, features: &["unlimited_users", "tournament_hosting", "booking_system", "all_features"], weight: 0.05 },
];

/// Looks up a subscription tier by id.
pub fn tier(id: &str) -> Option<&'static SubscriptionTier> {
    SUBSCRIPTION_TIERS.iter().find(|t| t.id == id)
}

#[derive(Debug, Clone, Copy)]
pub struct RegionSpec {
    pub name: &'static str,
    pub countries: &'static [&'static str],
    pub weight: f64,
}

pub const REGIONS: &[RegionSpec] = &[
    RegionSpec { name: "North America", countries: &["USA", "Canada"], weight: 0.45 },
    RegionSpec { name: "Europe", countries: &["UK", "Germany", "Sweden", "Netherlands", "France", "Spain", "Ireland", "Norway"], weight: 0.30 },
    RegionSpec { name: "Asia Pacific", countries: &["Japan", "South Korea", "Australia", "China", "Singapore", "Hong Kong"], weight: 0.20 },
    RegionSpec { name: "Middle East", countries: &["UAE", "Saudi Arabia"], weight: 0.05 },
];

/// A marketing campaign with its expected engagement funnel.
#[derive(Debug, Clone, Copy)]
pub struct CampaignSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub channel: &'static str,
    pub open_rate: f64,
    pub click_rate: f64,
}

pub const CAMPAIGNS: &[CampaignSpec] = &[
    CampaignSpec { id: "winter_promo_2025", name: "Winter Training Promo", channel: "email", open_rate: 0.25, click_rate: 0.08 },
    CampaignSpec { id: "new_course_launch", name: "New Course Announcement", channel: "email", open_rate: 0.35, click_rate: 0.12 },
    CampaignSpec { id: "upgrade_offer", name: "Upgrade Your Experience", channel: "email", open_rate: 0.22, click_rate: 0.05 },
    CampaignSpec { id: "feature_release", name: "New AI Coaching Feature", channel: "in_app", open_rate: 0.45, click_rate: 0.15 },
    CampaignSpec { id: "tournament_invite", name: "Virtual Tournament", channel: "push", open_rate: 0.30, click_rate: 0.10 },
];

/// Validates the reference catalogs once at startup.
///
/// Generation assumes these hold everywhere downstream, so a malformed
/// catalog entry must fail the run before any rows are produced.
pub fn validate() -> Result<(), CatalogError> {
    let invalid = |msg: String| Err(CatalogError::InvalidReference(msg));

    if COURSES.is_empty() || CLUBS.is_empty() || SESSION_TYPES.is_empty() {
        return invalid("empty reference table".into());
    }

    for course in COURSES {
        let Some(template) = par_template(course.par) else {
            return invalid(format!("course {} has par {} with no hole template", course.id, course.par));
        };
        let template_total: u32 = template.iter().map(|&p| u32::from(p)).sum();
        if template_total != u32::from(course.par) {
            return invalid(format!("par template for {} sums to {}", course.par, template_total));
        }
        if course.yardage == 0 {
            return invalid(format!("course {} has zero yardage", course.id));
        }
    }

    for (i, c) in CLUBS.iter().enumerate() {
        if CLUBS[..i].iter().any(|other| other.id == c.id) {
            return invalid(format!("duplicate club id {}", c.id));
        }
        if c.carry_range.0 >= c.carry_range.1 || c.spin_range.0 > c.spin_range.1 {
            return invalid(format!("club {} has an inverted range", c.id));
        }
        if !(1.0..=1.52).contains(&c.smash_target) {
            return invalid(format!("club {} smash target {} out of range", c.id, c.smash_target));
        }
    }

    for g in GAMES {
        if g.min_shots > g.max_shots {
            return invalid(format!("game {} has min_shots > max_shots", g.id));
        }
    }

    for s in SESSION_TYPES {
        if s.weight <= 0.0 || s.avg_duration_min <= 0 {
            return invalid(format!("session type {} has a non-positive weight or duration", s.id));
        }
    }

    for c in CAMPAIGNS {
        if !(0.0 < c.click_rate && c.click_rate <= c.open_rate && c.open_rate <= 1.0) {
            return invalid(format!("campaign {} has an inconsistent funnel", c.id));
        }
    }

    for (table, total) in [
        ("regions", REGIONS.iter().map(|r| r.weight).sum::<f64>()),
        ("facility types", FACILITY_TYPES.iter().map(|f| f.weight).sum::<f64>()),
        ("subscription tiers", SUBSCRIPTION_TIERS.iter().map(|t| t.weight).sum::<f64>()),
    ] {
        if (total - 1.0).abs() > 1e-9 {
            return invalid(format!("{table} weights sum to {total}"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_validates() {
        validate().expect("shipped catalogs must be internally consistent");
    }

    #[test]
    fn test_club_lookup() {
        assert_eq!(club("7_iron").unwrap().name, "7-Iron");
        assert!(matches!(club("2_iron"), Err(CatalogError::UnknownClub(_))));
    }

    #[test]
    fn test_par_templates_sum_to_total() {
        for par in [70u8, 71, 72] {
            let template = par_template(par).unwrap();
            let total: u32 = template.iter().map(|&p| u32::from(p)).sum();
            assert_eq!(total, u32::from(par));
        }
        assert!(par_template(68).is_none());
    }

    #[test]
    fn test_swing_clubs_exclude_putter() {
        assert_eq!(swing_clubs().count(), CLUBS.len() - 1);
        assert!(swing_clubs().all(|c| c.category != ClubCategory::Putter));
    }
}
