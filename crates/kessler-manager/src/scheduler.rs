//! Live decay event scheduling.

use std::sync::Arc;

use tracing::{debug, info, warn};

use kessler_core::settings::DecaySettings;
use kessler_core::traits::{DecayModel, FlightWorld};
use kessler_core::types::{CraftId, DecaySchedule};

/// Fires decay events as tracked craft come due.
///
/// Each entry maps a craft to the universal time of its next decay event.
/// When an entry comes due the craft's semi-major axis shrinks by the
/// model's event multiplier and the entry re-arms one period-to-periapsis
/// later, so every craft decays once per orbit no matter how often the
/// host ticks.
pub struct DecayScheduler {
    model: Arc<dyn DecayModel>,
    schedule: DecaySchedule,
}

impl DecayScheduler {
    pub fn new(model: Arc<dyn DecayModel>) -> Self {
        DecayScheduler {
            model,
            schedule: DecaySchedule::new(),
        }
    }

    /// Builds a scheduler around an existing schedule, typically the
    /// output of a catch-up pass.
    pub fn with_schedule(model: Arc<dyn DecayModel>, schedule: DecaySchedule) -> Self {
        DecayScheduler { model, schedule }
    }

    /// Starts tracking a craft, arming its first decay event one
    /// time-to-periapsis from now.
    ///
    /// Returns `false` without touching the schedule when the craft is
    /// already tracked or cannot be read from the world.
    pub fn add(&mut self, world: &dyn FlightWorld, id: CraftId) -> bool {
        if self.schedule.contains_key(&id) {
            return false;
        }
        let Some(orbit) = world.orbit(id) else {
            return false;
        };
        let due = world.universal_time() + orbit.time_to_periapsis;
        self.schedule.insert(id, due);
        true
    }

    /// Advances the schedule by one host tick.
    ///
    /// Every entry is considered: craft that no longer exist are dropped,
    /// entries not yet due are left alone, and due entries fire exactly
    /// one decay event each before re-arming. An empty schedule returns
    /// without touching the world at all.
    pub fn tick(&mut self, world: &dyn FlightWorld, settings: &DecaySettings) {
        if self.schedule.is_empty() {
            return;
        }

        let now = world.universal_time();
        let entries: Vec<(CraftId, f64)> =
            self.schedule.iter().map(|(id, due)| (*id, *due)).collect();

        for (id, due) in entries {
            let Some(info) = world.craft(id) else {
                self.schedule.remove(&id);
                debug!(craft = %id, "dropping gone craft from decay schedule");
                continue;
            };
            if due > now {
                continue;
            }

            let Some(orbit) = world.orbit(id) else {
                self.schedule.remove(&id);
                debug!(craft = %id, "dropping unreadable craft from decay schedule");
                continue;
            };

            let multiplier = self.model.event_multiplier(&orbit, &info.body, settings);
            if let Err(err) = world.set_semi_major_axis(id, orbit.semi_major_axis * multiplier) {
                self.schedule.remove(&id);
                warn!(craft = %id, %err, "decay write failed, dropping craft");
                continue;
            }

            // Re-read so the next due time reflects the shrunk orbit.
            let Some(rearmed) = world.orbit(id) else {
                self.schedule.remove(&id);
                debug!(craft = %id, "craft vanished after decay write");
                continue;
            };
            let next = now + rearmed.time_to_periapsis;
            self.schedule.insert(id, next);
            info!(craft = %id, multiplier, next, "applied decay event");
        }
    }

    /// Copy of the current schedule, for persistence.
    pub fn snapshot(&self) -> DecaySchedule {
        self.schedule.clone()
    }

    pub fn contains(&self, id: CraftId) -> bool {
        self.schedule.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.schedule.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedule.is_empty()
    }
}
