//! Startup reconciliation of decay owed during downtime.
//!
//! The scheduler only runs while a session is live, so any time the world
//! clock advanced without it (a restart, a long stretch at the space
//! center) leaves craft with decay owed. The catch-up pass settles that
//! debt in one batch: for each eligible craft it works out how many whole
//! orbits elapsed since the craft's last recorded decay event and applies
//! them as a single compressed shrink.

use tracing::{debug, info, warn};

use kessler_core::error::WorldError;
use kessler_core::settings::DecaySettings;
use kessler_core::traits::{DecayModel, FlightWorld};
use kessler_core::types::{CraftId, DecaySchedule};
use kessler_decay::eligibility;

/// What a catch-up pass did.
///
/// `schedule` holds an entry for every eligible craft that survived the
/// pass; `failed` lists craft the world refused to read or write, which
/// end up untracked until a later scan picks them up again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatchUpOutcome {
    pub schedule: DecaySchedule,
    /// Craft whose overdue decay was applied in one compressed step.
    pub caught_up: usize,
    /// Craft seeded with a first decay event, owing nothing.
    pub fresh: usize,
    pub failed: Vec<(CraftId, WorldError)>,
}

enum Reconciled {
    /// Prior event still in the future; keep its timestamp untouched.
    Kept(f64),
    /// Overdue decay applied; re-armed at the contained time.
    CaughtUp(f64),
    /// No usable prior record; first event armed at the contained time.
    Fresh(f64),
}

/// Reconciles the persisted schedule with the world as it is now.
///
/// Every currently eligible craft ends up either in the returned schedule
/// or in `failed`; prior entries for craft that are no longer eligible
/// are dropped.
pub fn catch_up(
    world: &dyn FlightWorld,
    model: &dyn DecayModel,
    settings: &DecaySettings,
    prior: &DecaySchedule,
) -> CatchUpOutcome {
    let mut outcome = CatchUpOutcome::default();

    let candidates = eligibility::decay_candidates(world, settings);
    debug!(candidates = candidates.len(), "scanned decay candidates");
    if candidates.is_empty() {
        return outcome;
    }

    let now = world.universal_time();
    for id in candidates {
        match reconcile(world, model, settings, id, now, prior.get(&id).copied()) {
            Ok(Reconciled::Kept(due)) => {
                outcome.schedule.insert(id, due);
            }
            Ok(Reconciled::CaughtUp(due)) => {
                outcome.schedule.insert(id, due);
                outcome.caught_up += 1;
            }
            Ok(Reconciled::Fresh(due)) => {
                outcome.schedule.insert(id, due);
                outcome.fresh += 1;
            }
            Err(err) => {
                warn!(craft = %id, %err, "craft failed decay catch-up");
                outcome.failed.push((id, err));
            }
        }
    }
    outcome
}

fn reconcile(
    world: &dyn FlightWorld,
    model: &dyn DecayModel,
    settings: &DecaySettings,
    id: CraftId,
    now: f64,
    t_prev: Option<f64>,
) -> Result<Reconciled, WorldError> {
    if let Some(t_prev) = t_prev {
        if t_prev >= now {
            return Ok(Reconciled::Kept(t_prev));
        }

        let info = gone_if_none(world.craft(id), id)?;
        let orbit = gone_if_none(world.orbit(id), id)?;
        // A degenerate period means missed orbits cannot be counted;
        // those craft fall through to a fresh seed.
        if orbit.period > 0.0 {
            let missed = ((now - t_prev) / orbit.period).floor() as u64;
            if missed >= 1 {
                let multiplier = model.catch_up_multiplier(&orbit, &info.body, settings, missed);
                world.set_semi_major_axis(id, orbit.semi_major_axis * multiplier)?;
                let rearmed = gone_if_none(world.orbit(id), id)?;
                info!(craft = %id, missed, multiplier, "caught up missed decay");
                return Ok(Reconciled::CaughtUp(now + rearmed.time_to_periapsis));
            }
        }
    }

    let orbit = gone_if_none(world.orbit(id), id)?;
    Ok(Reconciled::Fresh(now + orbit.time_to_periapsis))
}

fn gone_if_none<T>(value: Option<T>, id: CraftId) -> Result<T, WorldError> {
    value.ok_or_else(|| WorldError::CraftGone(id.to_string()))
}
