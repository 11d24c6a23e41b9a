//! Host-facing decay tuning.

use crate::constants::DEFAULT_DECAY_PERCENT;

/// Decay behavior switches, typically read from the host's settings screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecaySettings {
    /// Master switch. When off, the subsystem does not start at all.
    pub orbital_decay: bool,
    /// When set, every trackable craft decays. When clear, only debris.
    pub all_decay: bool,
    /// Maximum per-event shrink fraction, applied at full periapsis depth.
    pub decay_percent: f64,
}

impl Default for DecaySettings {
    fn default() -> Self {
        DecaySettings {
            orbital_decay: true,
            all_decay: false,
            decay_percent: DEFAULT_DECAY_PERCENT,
        }
    }
}

impl DecaySettings {
    /// Returns a copy with `decay_percent` forced into usable range.
    ///
    /// Non-finite or non-positive values fall back to the default, and
    /// anything above `1.0` is capped there. Settings files are host
    /// territory, so out-of-range values arrive here unannounced.
    pub fn sanitized(&self) -> Self {
        let decay_percent = if !self.decay_percent.is_finite() || self.decay_percent <= 0.0 {
            DEFAULT_DECAY_PERCENT
        } else {
            self.decay_percent.min(1.0)
        };
        DecaySettings {
            decay_percent,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_tracks_debris_only() {
        let settings = DecaySettings::default();
        assert!(settings.orbital_decay);
        assert!(!settings.all_decay);
        assert_eq!(settings.decay_percent, DEFAULT_DECAY_PERCENT);
    }

    #[test]
    fn sanitize_keeps_reasonable_values() {
        let settings = DecaySettings {
            decay_percent: 0.05,
            ..DecaySettings::default()
        };
        assert_eq!(settings.sanitized(), settings);
    }

    #[test]
    fn sanitize_replaces_nan_and_negative() {
        for bad in [f64::NAN, f64::INFINITY, -0.5, 0.0] {
            let settings = DecaySettings {
                decay_percent: bad,
                ..DecaySettings::default()
            };
            assert_eq!(settings.sanitized().decay_percent, DEFAULT_DECAY_PERCENT);
        }
    }

    #[test]
    fn sanitize_caps_at_one() {
        let settings = DecaySettings {
            decay_percent: 3.0,
            ..DecaySettings::default()
        };
        assert_eq!(settings.sanitized().decay_percent, 1.0);
    }

    #[test]
    fn sanitize_preserves_switches() {
        let settings = DecaySettings {
            orbital_decay: false,
            all_decay: true,
            decay_percent: f64::NAN,
        };
        let clean = settings.sanitized();
        assert!(!clean.orbital_decay);
        assert!(clean.all_decay);
    }

    proptest! {
        #[test]
        fn sanitized_percent_is_always_usable(raw in prop::num::f64::ANY) {
            let settings = DecaySettings {
                decay_percent: raw,
                ..DecaySettings::default()
            };
            let clean = settings.sanitized().decay_percent;
            prop_assert!(clean.is_finite());
            prop_assert!(clean > 0.0 && clean <= 1.0);
        }
    }
}
