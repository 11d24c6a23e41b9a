//! Subsystem-wide defaults.

/// Default maximum per-event shrink fraction of the semi-major axis.
///
/// A craft whose periapsis sits at the body's surface loses this fraction
/// of its semi-major axis every orbit. Shallower periapses lose
/// proportionally less.
pub const DEFAULT_DECAY_PERCENT: f64 = 0.02;

/// File name of the persisted decay schedule inside a profile directory.
pub const SCHEDULE_FILE_NAME: &str = "kessler.dat";

/// Profile name used when the host does not supply one.
pub const DEFAULT_PROFILE: &str = "default";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_decay_percent_is_a_small_fraction() {
        assert!(DEFAULT_DECAY_PERCENT > 0.0);
        assert!(DEFAULT_DECAY_PERCENT < 0.1);
    }

    #[test]
    fn schedule_file_has_expected_name() {
        assert_eq!(SCHEDULE_FILE_NAME, "kessler.dat");
    }
}
