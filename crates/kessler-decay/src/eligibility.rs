//! Which craft fall under decay management.

use kessler_core::settings::DecaySettings;
use kessler_core::traits::FlightWorld;
use kessler_core::types::{CraftId, CraftInfo};

/// Decides whether one craft should be decay-tracked.
///
/// A craft qualifies only when every rule holds:
///
/// 1. it is not the player's active craft,
/// 2. its body has an atmosphere,
/// 3. its class is trackable at all,
/// 4. it is debris, or `all_decay` covers every trackable class,
/// 5. it is neither landed nor splashed down,
/// 6. its altitude is at or below the body's space threshold.
///
/// The caller resolves the snapshot; craft that no longer exist never
/// reach this function.
pub fn is_eligible(
    id: CraftId,
    info: &CraftInfo,
    active: Option<CraftId>,
    settings: &DecaySettings,
) -> bool {
    if active == Some(id) {
        return false;
    }
    if !info.body.has_atmosphere {
        return false;
    }
    if !info.class.trackable() {
        return false;
    }
    if !settings.all_decay && !info.class.is_debris() {
        return false;
    }
    if info.landed || info.splashed {
        return false;
    }
    info.altitude <= info.body.space_threshold
}

/// Scans the world for every craft currently eligible for decay tracking.
///
/// Craft that vanish between the id listing and the snapshot read are
/// skipped.
pub fn decay_candidates(world: &dyn FlightWorld, settings: &DecaySettings) -> Vec<CraftId> {
    let active = world.active_craft();
    world
        .craft_ids()
        .into_iter()
        .filter(|id| {
            world
                .craft(*id)
                .is_some_and(|info| is_eligible(*id, &info, active, settings))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kessler_core::error::WorldError;
    use kessler_core::types::{Body, CraftClass, Orbit};
    use std::collections::HashMap;

    fn test_id(seed: u8) -> CraftId {
        CraftId::from_bytes([seed; 16])
    }

    fn atmospheric_body() -> Body {
        Body {
            name: "Kerbin".to_string(),
            has_atmosphere: true,
            space_threshold: 250_000.0,
        }
    }

    /// Baseline craft that passes every rule: debris in low orbit around
    /// an atmospheric body.
    fn low_debris() -> CraftInfo {
        CraftInfo {
            class: CraftClass::Debris,
            body: atmospheric_body(),
            landed: false,
            splashed: false,
            altitude: 120_000.0,
        }
    }

    fn debris_only() -> DecaySettings {
        DecaySettings::default()
    }

    fn everything_decays() -> DecaySettings {
        DecaySettings {
            all_decay: true,
            ..DecaySettings::default()
        }
    }

    // --- single-craft rules ---

    #[test]
    fn baseline_debris_is_eligible() {
        assert!(is_eligible(test_id(1), &low_debris(), None, &debris_only()));
    }

    #[test]
    fn active_craft_is_never_eligible() {
        let id = test_id(1);
        assert!(!is_eligible(id, &low_debris(), Some(id), &everything_decays()));
        assert!(is_eligible(id, &low_debris(), Some(test_id(2)), &debris_only()));
    }

    #[test]
    fn airless_body_disqualifies() {
        let mut info = low_debris();
        info.body.has_atmosphere = false;
        assert!(!is_eligible(test_id(1), &info, None, &debris_only()));
    }

    #[test]
    fn untrackable_classes_stay_untouched_even_with_all_decay() {
        for class in [
            CraftClass::EvaCrew,
            CraftClass::Flag,
            CraftClass::SpaceObject,
            CraftClass::Unknown,
        ] {
            let mut info = low_debris();
            info.class = class;
            assert!(
                !is_eligible(test_id(1), &info, None, &everything_decays()),
                "{class:?} must never decay"
            );
        }
    }

    #[test]
    fn non_debris_needs_the_all_decay_switch() {
        let mut info = low_debris();
        info.class = CraftClass::Probe;
        assert!(!is_eligible(test_id(1), &info, None, &debris_only()));
        assert!(is_eligible(test_id(1), &info, None, &everything_decays()));
    }

    #[test]
    fn landed_or_splashed_craft_do_not_decay() {
        let mut landed = low_debris();
        landed.landed = true;
        assert!(!is_eligible(test_id(1), &landed, None, &debris_only()));

        let mut splashed = low_debris();
        splashed.splashed = true;
        assert!(!is_eligible(test_id(1), &splashed, None, &debris_only()));
    }

    #[test]
    fn deep_space_craft_are_out_of_the_regime() {
        let mut info = low_debris();
        info.altitude = 250_000.1;
        assert!(!is_eligible(test_id(1), &info, None, &debris_only()));

        // Exactly at the threshold still counts.
        info.altitude = 250_000.0;
        assert!(is_eligible(test_id(1), &info, None, &debris_only()));
    }

    // --- world scan ---

    struct ScanWorld {
        active: Option<CraftId>,
        craft: HashMap<CraftId, CraftInfo>,
    }

    impl FlightWorld for ScanWorld {
        fn universal_time(&self) -> f64 {
            0.0
        }

        fn active_craft(&self) -> Option<CraftId> {
            self.active
        }

        fn craft_ids(&self) -> Vec<CraftId> {
            self.craft.keys().copied().collect()
        }

        fn craft(&self, id: CraftId) -> Option<CraftInfo> {
            self.craft.get(&id).cloned()
        }

        fn orbit(&self, _id: CraftId) -> Option<Orbit> {
            None
        }

        fn set_semi_major_axis(&self, id: CraftId, _meters: f64) -> Result<(), WorldError> {
            Err(WorldError::CraftGone(id.to_string()))
        }
    }

    #[test]
    fn scan_keeps_only_eligible_craft() {
        let ship_id = test_id(1);
        let debris_id = test_id(2);
        let flag_id = test_id(3);

        let mut ship = low_debris();
        ship.class = CraftClass::Ship;
        let mut flag = low_debris();
        flag.class = CraftClass::Flag;

        let world = ScanWorld {
            active: Some(ship_id),
            craft: HashMap::from([
                (ship_id, ship),
                (debris_id, low_debris()),
                (flag_id, flag),
            ]),
        };

        let candidates = decay_candidates(&world, &everything_decays());
        assert_eq!(candidates, vec![debris_id]);
    }

    #[test]
    fn scan_of_empty_world_is_empty() {
        let world = ScanWorld {
            active: None,
            craft: HashMap::new(),
        };
        assert!(decay_candidates(&world, &debris_only()).is_empty());
    }
}
