//! Synthetic data generation for the fairway golf-simulator analytics demo.
//!
//! This crate produces a relationally consistent multi-table dataset:
//! dimension tables (players, courses, holes, clubs, facilities, bays, game
//! types, subscription tiers), session-driven fact tables (sessions,
//! scorecards, hole scores, shots, game sessions, bay bookings), and
//! engagement event streams (subscriptions, marketing). The output file tree
//! feeds the warehouse deployment downstream.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fairway_data::prelude::*;
//!
//! let dataset = DatasetBuilder::new()
//!     .with_seed(42)
//!     .with_players(500)
//!     .with_facilities(50)
//!     .with_sessions(10_000)
//!     .build()?;
//!
//! Sink::new("sample_data").write_all(&dataset)?;
//! ```
//!
//! Generation is single-threaded and strictly ordered by table dependency.
//! Every random draw, including row ids, comes from one seeded `StdRng`, so
//! a fixed seed and configuration reproduce the dataset byte for byte.

pub mod builders;
pub mod catalog;
pub mod config;
pub mod generators;
pub mod profiles;
pub mod sink;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{Dataset, DatasetBuilder};
    pub use crate::catalog::{self, CatalogError};
    pub use crate::config::{DateRange, GeneratorConfig, HandicapMixture};
    pub use crate::generators::{
        CourseGenerator, FacilityGenerator, MarketingEventGenerator, PlayerGenerator,
        SessionGenerator, SubscriptionEventGenerator, derive_bookings, score_hole, simulate_shot,
    };
    pub use crate::profiles::SkillProfile;
    pub use crate::sink::{Sink, SinkError};
}
