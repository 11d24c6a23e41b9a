//! Trait seams between the host simulation and the decay machinery.
//!
//! [`FlightWorld`] is implemented by the host and is the only way the
//! subsystem observes or mutates craft. [`DecayModel`] is implemented by
//! decay math providers and is the only place decay magnitude comes from.
//! Both are object safe so hosts and tests can swap implementations behind
//! `dyn` references.

use crate::error::WorldError;
use crate::settings::DecaySettings;
use crate::types::{Body, CraftId, CraftInfo, Orbit};

/// Read and write surface of the host simulation.
///
/// All reads are snapshots: a craft can disappear between any two calls,
/// in which case lookups return `None` and writes fail with
/// [`WorldError::CraftGone`]. Callers must treat every id as revocable.
pub trait FlightWorld: Send + Sync {
    /// Current universal time in seconds. Never decreases within a session,
    /// and persists across sessions.
    fn universal_time(&self) -> f64;

    /// The craft under player control right now, if any.
    fn active_craft(&self) -> Option<CraftId>;

    /// Ids of every craft currently known to the world.
    fn craft_ids(&self) -> Vec<CraftId>;

    /// Situation snapshot for one craft. `None` when the craft is gone.
    fn craft(&self, id: CraftId) -> Option<CraftInfo>;

    /// Current orbital elements for one craft. Derived fields reflect any
    /// semi-major axis write made before this call.
    fn orbit(&self, id: CraftId) -> Option<Orbit>;

    /// Sets the craft's semi-major axis in meters. The single mutation the
    /// decay subsystem performs against the world.
    fn set_semi_major_axis(&self, id: CraftId, meters: f64) -> Result<(), WorldError>;
}

/// Decay magnitude math.
///
/// Implementors provide the raw per-orbit shrink fraction; the multiplier
/// methods turn it into factors that are safe to apply to a semi-major
/// axis. Both default multipliers clamp to `[0.0, 1.0]`, so one decay step
/// can never grow an orbit or flip its sign, and a non-finite fraction
/// leaves the orbit untouched.
pub trait DecayModel: Send + Sync {
    /// Fraction of the semi-major axis lost over one orbit, for the
    /// craft's current orbit around `body`.
    fn decay_fraction(&self, orbit: &Orbit, body: &Body, settings: &DecaySettings) -> f64;

    /// Factor the semi-major axis shrinks by at a single decay event.
    fn event_multiplier(&self, orbit: &Orbit, body: &Body, settings: &DecaySettings) -> f64 {
        let fraction = self.decay_fraction(orbit, body, settings);
        if !fraction.is_finite() {
            return 1.0;
        }
        (1.0 - fraction).clamp(0.0, 1.0)
    }

    /// Factor compressing `missed_orbits` consecutive decay events into one
    /// step, using the current orbit's fraction for every missed orbit.
    fn catch_up_multiplier(
        &self,
        orbit: &Orbit,
        body: &Body,
        settings: &DecaySettings,
        missed_orbits: u64,
    ) -> f64 {
        let fraction = self.decay_fraction(orbit, body, settings);
        if !fraction.is_finite() {
            return 1.0;
        }
        (1.0 - missed_orbits as f64 * fraction).clamp(0.0, 1.0)
    }
}
