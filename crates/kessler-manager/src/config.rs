//! Manager configuration.

use std::path::PathBuf;

use kessler_core::constants::{DEFAULT_PROFILE, SCHEDULE_FILE_NAME};
use kessler_core::settings::DecaySettings;

/// Configuration for one [`DecayManager`](crate::manager::DecayManager).
///
/// The host normally overrides `saves_root` and `profile` to point inside
/// its own save slot; the defaults exist so the subsystem can run
/// standalone.
#[derive(Debug, Clone)]
pub struct ManagerConfig {
    /// Root directory holding one subdirectory per save profile.
    pub saves_root: PathBuf,
    /// Name of the active save profile.
    pub profile: String,
    /// Decay tuning, as read from the host's settings surface.
    pub settings: DecaySettings,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        let saves_root = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("kessler")
            .join("saves");

        ManagerConfig {
            saves_root,
            profile: DEFAULT_PROFILE.to_string(),
            settings: DecaySettings::default(),
        }
    }
}

impl ManagerConfig {
    /// Path of the persisted decay schedule for the active profile.
    pub fn schedule_path(&self) -> PathBuf {
        self.saves_root.join(&self.profile).join(SCHEDULE_FILE_NAME)
    }
}
