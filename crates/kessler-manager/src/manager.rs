//! Decay manager lifecycle.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use kessler_core::error::StoreError;
use kessler_core::settings::DecaySettings;
use kessler_core::traits::{DecayModel, FlightWorld};
use kessler_core::types::DecaySchedule;
use kessler_decay::DragModel;
use kessler_decay::eligibility;

use crate::catchup;
use crate::config::ManagerConfig;
use crate::scheduler::DecayScheduler;
use crate::store::ScheduleStore;

/// Owns the decay subsystem for one flight session.
///
/// The host constructs a manager when a session starts and drives it with
/// lifecycle notifications: [`tick`](DecayManager::tick) every update,
/// [`on_stage_separation`](DecayManager::on_stage_separation) when new
/// debris may have appeared, and
/// [`on_save_requested`](DecayManager::on_save_requested) when the world
/// is being persisted. Bootstrap loads the saved schedule and settles any
/// decay owed while the subsystem was not running.
pub struct DecayManager {
    scheduler: Mutex<DecayScheduler>,
    store: ScheduleStore,
    settings: DecaySettings,
}

impl DecayManager {
    /// Starts the subsystem with the production drag model.
    ///
    /// Returns `None` when the master switch is off; none of the other
    /// entry points exist in that case and no file is touched.
    pub fn bootstrap(config: ManagerConfig, world: &dyn FlightWorld) -> Option<Self> {
        Self::bootstrap_with_model(config, world, Arc::new(DragModel::new()))
    }

    /// As [`bootstrap`](DecayManager::bootstrap), with a caller-supplied
    /// decay model.
    pub fn bootstrap_with_model(
        config: ManagerConfig,
        world: &dyn FlightWorld,
        model: Arc<dyn DecayModel>,
    ) -> Option<Self> {
        if !config.settings.orbital_decay {
            info!("orbital decay is switched off, manager not started");
            return None;
        }
        let settings = config.settings.sanitized();
        let store = ScheduleStore::new(config.schedule_path());

        let prior = match store.load() {
            Ok(schedule) => schedule,
            Err(StoreError::NotFound) => {
                info!("no saved decay schedule, harmless on a fresh save");
                DecaySchedule::new()
            }
            Err(err) => {
                warn!(%err, "saved decay schedule unusable, starting over");
                DecaySchedule::new()
            }
        };

        let outcome = catchup::catch_up(world, model.as_ref(), &settings, &prior);
        info!(
            tracked = outcome.schedule.len(),
            caught_up = outcome.caught_up,
            fresh = outcome.fresh,
            failed = outcome.failed.len(),
            "decay manager ready"
        );

        Some(DecayManager {
            scheduler: Mutex::new(DecayScheduler::with_schedule(model, outcome.schedule)),
            store,
            settings,
        })
    }

    /// Advances the schedule by one host update.
    pub fn tick(&self, world: &dyn FlightWorld) {
        self.scheduler.lock().tick(world, &self.settings);
    }

    /// Rescans the world for craft that became eligible, typically after
    /// staging shed new debris. Already tracked craft keep their timers.
    pub fn on_stage_separation(&self, world: &dyn FlightWorld) {
        debug!("staging event, rescanning decay candidates");
        let candidates = eligibility::decay_candidates(world, &self.settings);

        let mut scheduler = self.scheduler.lock();
        for id in candidates {
            if scheduler.add(world, id) {
                info!(craft = %id, "added craft to the decay schedule");
            }
        }
    }

    /// Persists the current schedule alongside the host's own save.
    ///
    /// A failure is logged and returned, but leaves the in-memory
    /// schedule fully intact.
    pub fn on_save_requested(&self) -> Result<(), StoreError> {
        let snapshot = self.scheduler.lock().snapshot();
        match self.store.save(&snapshot) {
            Ok(()) => {
                info!(entries = snapshot.len(), "saved decay schedule");
                Ok(())
            }
            Err(err) => {
                warn!(%err, "failed to save decay schedule");
                Err(err)
            }
        }
    }

    /// Number of craft currently tracked.
    pub fn tracked(&self) -> usize {
        self.scheduler.lock().len()
    }

    /// The sanitized settings this manager runs with.
    pub fn settings(&self) -> &DecaySettings {
        &self.settings
    }
}
