//! File sink for generated tables.
//!
//! Dimensions and facts land as CSV snapshots under `dimensions/` and
//! `facts/`; event streams land as newline-delimited JSON under `events/`.
//! Every write is full-overwrite and destination directories are created on
//! demand, so a rerun replaces the previous dataset wholesale.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::builders::Dataset;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes generated tables beneath a root directory.
pub struct Sink {
    root: PathBuf,
}

impl Sink {
    /// Creates a sink rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Writes a dimension table as CSV.
    pub fn write_dimension<T: Serialize>(&self, name: &str, rows: &[T]) -> Result<(), SinkError> {
        self.write_csv("dimensions", name, rows)
    }

    /// Writes a fact table as CSV.
    pub fn write_fact<T: Serialize>(&self, name: &str, rows: &[T]) -> Result<(), SinkError> {
        self.write_csv("facts", name, rows)
    }

    /// Writes an event stream as newline-delimited JSON.
    pub fn write_events<T: Serialize>(&self, name: &str, rows: &[T]) -> Result<(), SinkError> {
        let dir = self.root.join("events");
        fs::create_dir_all(&dir)?;
        let path = dir.join(format!("{name}.json"));

        let mut out = BufWriter::new(File::create(&path)?);
        for row in rows {
            serde_json::to_writer(&mut out, row)?;
            out.write_all(b"\n")?;
        }
        out.flush()?;

        info!("wrote {} records to {}", rows.len(), path.display());
        Ok(())
    }

    fn write_csv<T: Serialize>(&self, sub: &str, name: &str, rows: &[T]) -> Result<(), SinkError> {
        let dir = self.root.join(sub);
        fs::create_dir_all(&dir)?;
        let path = dir.join(format!("{name}.csv"));

        let mut writer = csv::Writer::from_path(&path)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;

        info!("wrote {} rows to {}", rows.len(), path.display());
        Ok(())
    }

    /// Writes every table of a dataset with the names the downstream
    /// warehouse deployment expects.
    pub fn write_all(&self, dataset: &Dataset) -> Result<(), SinkError> {
        self.write_dimension("dim_players", &dataset.players)?;
        self.write_dimension("dim_courses", &dataset.courses)?;
        self.write_dimension("dim_course_holes", &dataset.holes)?;
        self.write_dimension("dim_clubs", &dataset.clubs)?;
        self.write_dimension("dim_facilities", &dataset.facilities)?;
        self.write_dimension("dim_bays", &dataset.bays)?;
        self.write_dimension("dim_game_types", &dataset.game_types)?;
        self.write_dimension("dim_subscription_tiers", &dataset.subscription_tiers)?;

        self.write_fact("fact_sessions", &dataset.sessions)?;
        self.write_fact("fact_scorecards", &dataset.scorecards)?;
        self.write_fact("fact_hole_scores", &dataset.hole_scores)?;
        self.write_fact("fact_shots", &dataset.shots)?;
        self.write_fact("fact_game_sessions", &dataset.game_sessions)?;
        self.write_fact("fact_bay_bookings", &dataset.bookings)?;

        self.write_events("subscription_events", &dataset.subscription_events)?;
        self.write_events("marketing_events", &dataset.marketing_events)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Serialize)]
    struct Row {
        id: u32,
        name: &'static str,
        optional: Option<f64>,
    }

    fn temp_root(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("fairway-sink-{tag}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_csv_roundtrip_with_headers() {
        let root = temp_root("csv");
        let sink = Sink::new(&root);

        let rows = vec![
            Row { id: 1, name: "a", optional: Some(1.5) },
            Row { id: 2, name: "b", optional: None },
        ];
        sink.write_dimension("dim_test", &rows).unwrap();

        let content = fs::read_to_string(root.join("dimensions/dim_test.csv")).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("id,name,optional"));
        assert_eq!(lines.next(), Some("1,a,1.5"));
        assert_eq!(lines.next(), Some("2,b,"));

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_ndjson_one_record_per_line() {
        let root = temp_root("ndjson");
        let sink = Sink::new(&root);

        let rows = vec![
            Row { id: 1, name: "a", optional: None },
            Row { id: 2, name: "b", optional: Some(2.0) },
        ];
        sink.write_events("test_events", &rows).unwrap();

        let content = fs::read_to_string(root.join("events/test_events.json")).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value.get("id").is_some());
        }

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_overwrite_replaces_previous_snapshot() {
        let root = temp_root("overwrite");
        let sink = Sink::new(&root);

        let first = vec![Row { id: 1, name: "a", optional: None }; 5];
        sink.write_fact("fact_test", &first).unwrap();
        let second = vec![Row { id: 2, name: "b", optional: None }];
        sink.write_fact("fact_test", &second).unwrap();

        let content = fs::read_to_string(root.join("facts/fact_test.csv")).unwrap();
        assert_eq!(content.lines().count(), 2); // header + one row

        fs::remove_dir_all(&root).unwrap();
    }
}
