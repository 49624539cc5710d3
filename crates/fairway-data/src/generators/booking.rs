//! Bay occupancy bookings, derived from the generated sessions.
//!
//! Each session is projected onto the hourly operating-hour grid of its bay:
//! every hour slot the session overlaps becomes one occupied booking row.
//! Deriving occupancy from real sessions keeps the booking heatmap and the
//! session facts jointly consistent; the two can be joined on bay and hour
//! without orphans on either side.

use std::collections::{HashMap, HashSet};

use rand::Rng;
use time::{Date, Weekday};
use uuid::Uuid;

use super::facility::{GeneratedBay, GeneratedFacility};
use super::new_id;
use super::round1;
use super::session::GeneratedSession;

/// Generated bay booking fact row.
#[derive(Debug, Clone, serde::Serialize)]
pub struct GeneratedBooking {
    pub booking_id: Uuid,
    pub bay_id: Uuid,
    pub facility_id: Uuid,
    pub booking_date: Date,
    pub hour_of_day: u8,
    pub day_of_week: String,
    pub is_weekend: bool,
    pub duration_hours: f64,
    pub num_players: u8,
    pub is_occupied: bool,
}

fn is_weekend(date: Date) -> bool {
    matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
}

/// Derives occupancy bookings from sessions.
///
/// Slots outside the owning facility's operating hours are skipped (a
/// home bay used at 2am produces no commercial booking row), and a bay
/// hour occupied by two overlapping sessions yields a single row.
pub fn derive_bookings(
    sessions: &[GeneratedSession],
    bays: &[GeneratedBay],
    facilities: &[GeneratedFacility],
    rng: &mut impl Rng,
) -> Vec<GeneratedBooking> {
    let facility_hours: HashMap<Uuid, (u8, u8)> = facilities
        .iter()
        .map(|f| (f.facility_id, (f.operating_hours_start, f.operating_hours_end)))
        .collect();
    let bay_to_facility: HashMap<Uuid, Uuid> =
        bays.iter().map(|b| (b.bay_id, b.facility_id)).collect();

    let mut seen: HashSet<(Uuid, Date, u8)> = HashSet::new();
    let mut bookings = Vec::new();

    for session in sessions {
        let Some(&facility_id) = bay_to_facility.get(&session.bay_id) else {
            continue;
        };
        let Some(&(open, close)) = facility_hours.get(&facility_id) else {
            continue;
        };

        let date = session.session_date;
        let first_hour = session.started_at.hour();
        let last_hour = if session.ended_at.date() == date {
            // An exact on-the-hour end does not occupy the next slot.
            if session.ended_at.minute() == 0 && session.ended_at.second() == 0 {
                session.ended_at.hour().saturating_sub(1)
            } else {
                session.ended_at.hour()
            }
        } else {
            23
        };

        for hour in first_hour..=last_hour {
            if hour < open || hour >= close {
                continue;
            }
            if !seen.insert((session.bay_id, date, hour)) {
                continue;
            }

            bookings.push(GeneratedBooking {
                booking_id: new_id(rng),
                bay_id: session.bay_id,
                facility_id,
                booking_date: date,
                hour_of_day: hour,
                day_of_week: date.weekday().to_string(),
                is_weekend: is_weekend(date),
                duration_hours: round1(session.duration_minutes as f64 / 60.0),
                num_players: session.num_players,
                is_occupied: true,
            });
        }
    }

    bookings
}
