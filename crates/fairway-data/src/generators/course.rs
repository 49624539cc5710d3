//! Course and hole layout generation.

use rand::Rng;
use rand::seq::SliceRandom;

use super::round1;
use crate::catalog::{self, CourseSpec};

/// Generated course dimension row.
#[derive(Debug, Clone, serde::Serialize)]
pub struct GeneratedCourse {
    pub course_id: &'static str,
    pub course_name: &'static str,
    pub country: &'static str,
    pub par: u8,
    pub total_yardage: u32,
    pub course_rating: f64,
    pub slope_rating: u8,
    pub num_holes: u8,
    pub difficulty_tier: &'static str,
    pub green_speed_stimp: f64,
    pub is_premium: bool,
}

/// Generated hole dimension row.
#[derive(Debug, Clone, serde::Serialize)]
pub struct GeneratedHole {
    pub course_id: &'static str,
    pub hole_number: u8,
    pub par: u8,
    pub yardage: u32,
    pub stroke_index: u8,
    pub has_water: bool,
    pub has_bunker: bool,
}

/// Tee-to-green length bounds per par class, in yards.
fn yardage_range(par: u8) -> (u32, u32) {
    match par {
        3 => (140, 220),
        5 => (480, 620),
        _ => (350, 470),
    }
}

/// Generates the course catalog with per-course 18-hole layouts.
pub struct CourseGenerator;

impl CourseGenerator {
    /// Generates every catalog course plus its holes.
    ///
    /// Assumes the catalog validated: each course's par has a hole template.
    pub fn generate_all(rng: &mut impl Rng) -> (Vec<GeneratedCourse>, Vec<GeneratedHole>) {
        let mut courses = Vec::with_capacity(catalog::COURSES.len());
        let mut holes = Vec::with_capacity(catalog::COURSES.len() * 18);

        for spec in catalog::COURSES {
            courses.push(Self::generate_course(spec, rng));
            holes.extend(Self::generate_holes(spec, rng));
        }

        (courses, holes)
    }

    fn generate_course(spec: &CourseSpec, rng: &mut impl Rng) -> GeneratedCourse {
        GeneratedCourse {
            course_id: spec.id,
            course_name: spec.name,
            country: spec.country,
            par: spec.par,
            total_yardage: spec.yardage,
            course_rating: spec.rating,
            slope_rating: spec.slope,
            num_holes: 18,
            difficulty_tier: if spec.yardage > 7200 { "championship" } else { "standard" },
            green_speed_stimp: round1(rng.gen_range(10.0..14.0)),
            is_premium: rng.r#gen::<f64>() < 0.4,
        }
    }

    /// Generates the 18 holes for a course: the par template for the course
    /// total is shuffled across holes, and stroke indices are a shuffled
    /// permutation of 1..=18.
    fn generate_holes(spec: &CourseSpec, rng: &mut impl Rng) -> Vec<GeneratedHole> {
        let mut pars = catalog::par_template(spec.par)
            .expect("catalog validated: every course par has a template");
        pars.shuffle(rng);

        let mut stroke_indices: Vec<u8> = (1..=18).collect();
        stroke_indices.shuffle(rng);

        pars.iter()
            .zip(stroke_indices)
            .enumerate()
            .map(|(i, (&par, stroke_index))| {
                let (min_yds, max_yds) = yardage_range(par);
                GeneratedHole {
                    course_id: spec.id,
                    hole_number: i as u8 + 1,
                    par,
                    yardage: rng.gen_range(min_yds..=max_yds),
                    stroke_index,
                    has_water: rng.r#gen::<f64>() > 0.7,
                    has_bunker: rng.r#gen::<f64>() > 0.3,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_stroke_indices_are_a_permutation() {
        let mut rng = StdRng::seed_from_u64(10);
        let (_, holes) = CourseGenerator::generate_all(&mut rng);

        for spec in catalog::COURSES {
            let mut indices: Vec<u8> = holes
                .iter()
                .filter(|h| h.course_id == spec.id)
                .map(|h| h.stroke_index)
                .collect();
            indices.sort_unstable();
            assert_eq!(indices, (1..=18).collect::<Vec<u8>>(), "course {}", spec.id);
        }
    }

    #[test]
    fn test_hole_pars_sum_to_course_par() {
        let mut rng = StdRng::seed_from_u64(11);
        let (courses, holes) = CourseGenerator::generate_all(&mut rng);

        for course in &courses {
            let total: u32 = holes
                .iter()
                .filter(|h| h.course_id == course.course_id)
                .map(|h| u32::from(h.par))
                .sum();
            assert_eq!(total, u32::from(course.par), "course {}", course.course_id);
        }
    }

    #[test]
    fn test_yardage_matches_par_class() {
        let mut rng = StdRng::seed_from_u64(12);
        let (_, holes) = CourseGenerator::generate_all(&mut rng);

        for hole in &holes {
            let (min_yds, max_yds) = yardage_range(hole.par);
            assert!((min_yds..=max_yds).contains(&hole.yardage));
        }
    }
}
