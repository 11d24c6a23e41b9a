//! Flat-file persistence for the decay schedule.
//!
//! The on-disk form is one line per craft:
//!
//! ```text
//! <craft id> = <universal time of next decay event>
//! ```
//!
//! Lines are ordered by craft id, so saving the same schedule twice
//! produces identical bytes. Loading is forgiving: a malformed line is
//! logged and skipped, never fatal, so one corrupt record cannot take the
//! rest of the schedule down with it.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use kessler_core::error::StoreError;
use kessler_core::types::{CraftId, DecaySchedule};

/// Reads and writes one schedule file.
#[derive(Debug, Clone)]
pub struct ScheduleStore {
    path: PathBuf,
}

impl ScheduleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ScheduleStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted schedule.
    ///
    /// A missing file is reported as [`StoreError::NotFound`] so callers
    /// can treat a first run differently from a broken one.
    pub fn load(&self) -> Result<DecaySchedule, StoreError> {
        let text = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                StoreError::NotFound
            } else {
                StoreError::Unreadable(e.to_string())
            }
        })?;

        let mut schedule = DecaySchedule::new();
        for (number, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match parse_line(line) {
                Some((id, due)) => {
                    schedule.insert(id, due);
                }
                None => {
                    warn!(line = number + 1, "skipping malformed schedule line");
                }
            }
        }
        Ok(schedule)
    }

    /// Writes the schedule, creating parent directories as needed.
    pub fn save(&self, schedule: &DecaySchedule) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io(e.to_string()))?;
        }

        let mut text = String::new();
        for (id, due) in schedule {
            text.push_str(&format!("{id} = {due}\n"));
        }
        fs::write(&self.path, text).map_err(|e| StoreError::Io(e.to_string()))
    }
}

fn parse_line(line: &str) -> Option<(CraftId, f64)> {
    let (raw_id, raw_due) = line.split_once('=')?;
    let id: CraftId = raw_id.trim().parse().ok()?;
    let due: f64 = raw_due.trim().parse().ok()?;
    if !due.is_finite() {
        return None;
    }
    Some((id, due))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::tempdir;

    fn test_id(seed: u8) -> CraftId {
        CraftId::from_bytes([seed; 16])
    }

    fn sample_schedule() -> DecaySchedule {
        DecaySchedule::from([
            (test_id(1), 12_345.5),
            (test_id(2), 98_765.0),
            (test_id(3), 0.25),
        ])
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = ScheduleStore::new(dir.path().join("kessler.dat"));

        let schedule = sample_schedule();
        store.save(&schedule).unwrap();
        assert_eq!(store.load().unwrap(), schedule);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let store = ScheduleStore::new(dir.path().join("absent.dat"));
        assert_eq!(store.load().unwrap_err(), StoreError::NotFound);
    }

    #[test]
    fn unreadable_path_is_distinct_from_missing() {
        let dir = tempdir().unwrap();
        // The path is a directory, so reading it as a file fails.
        let store = ScheduleStore::new(dir.path());
        match store.load().unwrap_err() {
            StoreError::Unreadable(_) => {}
            other => panic!("expected Unreadable, got {other:?}"),
        }
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let store = ScheduleStore::new(dir.path().join("saves/career/kessler.dat"));
        store.save(&sample_schedule()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn empty_schedule_round_trips() {
        let dir = tempdir().unwrap();
        let store = ScheduleStore::new(dir.path().join("kessler.dat"));
        store.save(&DecaySchedule::new()).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn malformed_lines_are_skipped_not_fatal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("kessler.dat");
        let good = test_id(7);
        let text = format!(
            "not a record\n\
             {good} = 4200.5\n\
             11111111-1111-1111-1111-111111111111 = not-a-number\n\
             zzzzzzzz-zzzz-zzzz-zzzz-zzzzzzzzzzzz = 10.0\n\
             22222222-2222-2222-2222-222222222222 = NaN\n\
             \n"
        );
        fs::write(&path, text).unwrap();

        let store = ScheduleStore::new(path);
        let schedule = store.load().unwrap();
        assert_eq!(schedule, DecaySchedule::from([(good, 4200.5)]));
    }

    #[test]
    fn lines_tolerate_extra_whitespace() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("kessler.dat");
        let id = test_id(9);
        fs::write(&path, format!("  {id}   =   77.75  \n")).unwrap();

        let schedule = ScheduleStore::new(path).load().unwrap();
        assert_eq!(schedule.get(&id), Some(&77.75));
    }

    #[test]
    fn saved_bytes_are_deterministic_and_ordered() {
        let dir = tempdir().unwrap();
        let store = ScheduleStore::new(dir.path().join("kessler.dat"));

        let mut schedule = DecaySchedule::new();
        schedule.insert(test_id(9), 300.0);
        schedule.insert(test_id(1), 100.0);
        store.save(&schedule).unwrap();
        let first = fs::read_to_string(store.path()).unwrap();
        store.save(&schedule).unwrap();
        let second = fs::read_to_string(store.path()).unwrap();

        assert_eq!(first, second);
        let lines: Vec<&str> = first.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(&test_id(1).to_string()));
        assert!(lines[1].starts_with(&test_id(9).to_string()));
    }

    proptest! {
        #[test]
        fn any_schedule_round_trips(
            entries in prop::collection::vec(
                (prop::array::uniform16(any::<u8>()), 0.0f64..1e12),
                0..20,
            )
        ) {
            let dir = tempdir().unwrap();
            let store = ScheduleStore::new(dir.path().join("kessler.dat"));

            let schedule: DecaySchedule = entries
                .into_iter()
                .map(|(bytes, due)| (CraftId::from_bytes(bytes), due))
                .collect();
            store.save(&schedule).unwrap();
            prop_assert_eq!(store.load().unwrap(), schedule);
        }
    }
}
