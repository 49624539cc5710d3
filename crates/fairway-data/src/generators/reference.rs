//! Dimension rows projected straight from the static catalogs.

use crate::catalog::{self, ClubCategory};

/// Generated club dimension row.
#[derive(Debug, Clone, serde::Serialize)]
pub struct GeneratedClub {
    pub club_id: &'static str,
    pub club_name: &'static str,
    pub club_category: ClubCategory,
    pub standard_loft: f64,
    pub typical_distance_min: f64,
    pub typical_distance_max: f64,
    pub typical_spin_min: f64,
    pub typical_spin_max: f64,
    pub target_smash_factor: f64,
}

/// Generated game type dimension row.
#[derive(Debug, Clone, serde::Serialize)]
pub struct GeneratedGameType {
    pub game_type_id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub min_shots: u32,
    pub max_shots: u32,
}

/// Generated subscription tier dimension row.
#[derive(Debug, Clone, serde::Serialize)]
pub struct GeneratedTier {
    pub tier_id: &'static str,
    pub tier_name: &'static str,
    pub monthly_price: f64,
    /// Feature list kept as a JSON array string so the row stays flat.
    pub features: String,
}

pub fn club_rows() -> Vec<GeneratedClub> {
    catalog::CLUBS
        .iter()
        .map(|c| GeneratedClub {
            club_id: c.id,
            club_name: c.name,
            club_category: c.category,
            standard_loft: c.loft,
            typical_distance_min: c.carry_range.0,
            typical_distance_max: c.carry_range.1,
            typical_spin_min: c.spin_range.0,
            typical_spin_max: c.spin_range.1,
            target_smash_factor: c.smash_target,
        })
        .collect()
}

pub fn game_type_rows() -> Vec<GeneratedGameType> {
    catalog::GAMES
        .iter()
        .map(|g| GeneratedGameType {
            game_type_id: g.id,
            name: g.name,
            description: g.description,
            min_shots: g.min_shots,
            max_shots: g.max_shots,
        })
        .collect()
}

pub fn tier_rows() -> Vec<GeneratedTier> {
    catalog::SUBSCRIPTION_TIERS
        .iter()
        .map(|t| GeneratedTier {
            tier_id: t.id,
            tier_name: t.name,
            monthly_price: t.monthly_price,
            features: serde_json::to_string(t.features).expect("string slice serializes"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projections_cover_catalogs() {
        assert_eq!(club_rows().len(), catalog::CLUBS.len());
        assert_eq!(game_type_rows().len(), catalog::GAMES.len());
        assert_eq!(tier_rows().len(), catalog::SUBSCRIPTION_TIERS.len());
    }

    #[test]
    fn test_tier_features_are_json() {
        for tier in tier_rows() {
            let parsed: Vec<String> = serde_json::from_str(&tier.features).unwrap();
            assert!(!parsed.is_empty());
        }
    }
}
