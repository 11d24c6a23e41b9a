//! Shared simulation helpers.
//!
//! [`SimWorld`] is an in-memory [`FlightWorld`] with simplified two-body
//! orbits: the period follows Kepler's third law from the semi-major
//! axis, so shrinking an orbit genuinely shortens its period, which is
//! exactly the coupling the scheduler and catch-up logic depend on.

use std::collections::BTreeMap;
use std::f64::consts::TAU;

use parking_lot::RwLock;

use kessler_core::error::WorldError;
use kessler_core::settings::DecaySettings;
use kessler_core::traits::{DecayModel, FlightWorld};
use kessler_core::types::{Body, CraftClass, CraftId, CraftInfo, Orbit};

/// Gravitational parameter shared by every simulated body, m^3/s^2.
pub const GM: f64 = 3.5316e12;

/// Surface radius of the home body, meters.
pub const BODY_RADIUS: f64 = 600_000.0;

/// Space threshold altitude of the home body, meters.
pub const SPACE_THRESHOLD: f64 = 250_000.0;

pub fn craft_id(seed: u8) -> CraftId {
    CraftId::from_bytes([seed; 16])
}

pub fn home_body() -> Body {
    Body {
        name: "Kerbin".to_string(),
        has_atmosphere: true,
        space_threshold: SPACE_THRESHOLD,
    }
}

pub fn airless_body() -> Body {
    Body {
        name: "Mun".to_string(),
        has_atmosphere: false,
        space_threshold: 60_000.0,
    }
}

/// Decay model with a constant per-orbit fraction, for tests that want
/// hand-checkable multipliers instead of the depth formula.
pub struct FixedFraction(pub f64);

impl DecayModel for FixedFraction {
    fn decay_fraction(&self, _: &Orbit, _: &Body, _: &DecaySettings) -> f64 {
        self.0
    }
}

/// One simulated craft. Build with the constructors, then override
/// fields as needed.
#[derive(Debug, Clone)]
pub struct SimCraft {
    pub class: CraftClass,
    pub body: Body,
    pub landed: bool,
    pub splashed: bool,
    pub semi_major_axis: f64,
    pub eccentricity: f64,
}

impl SimCraft {
    /// Debris on a circular orbit of the home body.
    pub fn debris(semi_major_axis: f64) -> Self {
        SimCraft::of_class(CraftClass::Debris, semi_major_axis)
    }

    pub fn of_class(class: CraftClass, semi_major_axis: f64) -> Self {
        SimCraft {
            class,
            body: home_body(),
            landed: false,
            splashed: false,
            semi_major_axis,
            eccentricity: 0.0,
        }
    }
}

fn derive_orbit(craft: &SimCraft) -> Orbit {
    let a = craft.semi_major_axis;
    let period = TAU * (a.powi(3) / GM).sqrt();
    Orbit {
        semi_major_axis: a,
        periapsis_altitude: a * (1.0 - craft.eccentricity) - BODY_RADIUS,
        // Half a period out keeps re-arm arithmetic easy to predict.
        time_to_periapsis: period / 2.0,
        period,
    }
}

/// In-memory flight world.
pub struct SimWorld {
    now: RwLock<f64>,
    active: RwLock<Option<CraftId>>,
    craft: RwLock<BTreeMap<CraftId, SimCraft>>,
}

impl SimWorld {
    pub fn new(start_time: f64) -> Self {
        SimWorld {
            now: RwLock::new(start_time),
            active: RwLock::new(None),
            craft: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn spawn(&self, seed: u8, craft: SimCraft) -> CraftId {
        let id = craft_id(seed);
        self.craft.write().insert(id, craft);
        id
    }

    pub fn remove(&self, id: CraftId) {
        self.craft.write().remove(&id);
    }

    pub fn set_active(&self, id: Option<CraftId>) {
        *self.active.write() = id;
    }

    pub fn advance(&self, dt: f64) {
        *self.now.write() += dt;
    }

    pub fn semi_major_axis(&self, id: CraftId) -> f64 {
        self.craft.read()[&id].semi_major_axis
    }
}

impl FlightWorld for SimWorld {
    fn universal_time(&self) -> f64 {
        *self.now.read()
    }

    fn active_craft(&self) -> Option<CraftId> {
        *self.active.read()
    }

    fn craft_ids(&self) -> Vec<CraftId> {
        self.craft.read().keys().copied().collect()
    }

    fn craft(&self, id: CraftId) -> Option<CraftInfo> {
        self.craft.read().get(&id).map(|craft| CraftInfo {
            class: craft.class,
            body: craft.body.clone(),
            landed: craft.landed,
            splashed: craft.splashed,
            altitude: craft.semi_major_axis - BODY_RADIUS,
        })
    }

    fn orbit(&self, id: CraftId) -> Option<Orbit> {
        self.craft.read().get(&id).map(derive_orbit)
    }

    fn set_semi_major_axis(&self, id: CraftId, meters: f64) -> Result<(), WorldError> {
        match self.craft.write().get_mut(&id) {
            Some(craft) => {
                craft.semi_major_axis = meters;
                Ok(())
            }
            None => Err(WorldError::CraftGone(id.to_string())),
        }
    }
}
