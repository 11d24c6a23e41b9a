//! Depth-scaled atmospheric drag model.

use kessler_core::settings::DecaySettings;
use kessler_core::traits::DecayModel;
use kessler_core::types::{Body, Orbit};

/// The production decay model.
///
/// The per-orbit fraction is linear in periapsis depth:
///
/// ```text
/// depth    = periapsis_altitude / space_threshold
/// fraction = (1 - depth) * decay_percent
/// ```
///
/// A periapsis right at the space threshold decays at rate zero, one at
/// the surface decays at the full configured percent, and one below the
/// surface overshoots it. Fractions outside `[0, 1]` are legal here; the
/// [`DecayModel`] multiplier defaults clamp before anything touches an
/// orbit.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragModel;

impl DragModel {
    pub fn new() -> Self {
        DragModel
    }
}

impl DecayModel for DragModel {
    fn decay_fraction(&self, orbit: &Orbit, body: &Body, settings: &DecaySettings) -> f64 {
        let depth = orbit.periapsis_altitude / body.space_threshold;
        (1.0 - depth) * settings.decay_percent
    }
}
