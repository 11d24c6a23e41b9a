//! # kessler-manager
//!
//! The stateful half of the Kessler decay subsystem: everything that owns
//! a schedule, touches a file, or talks to the host lifecycle.
//!
//! - [`store::ScheduleStore`] persists the decay schedule as a flat file.
//! - [`scheduler::DecayScheduler`] fires decay events as craft come due.
//! - [`catchup`] settles decay owed for time that passed while the
//!   subsystem was not running.
//! - [`manager::DecayManager`] wires the above behind the host's
//!   lifecycle notifications.
//! - [`config::ManagerConfig`] locates the schedule file and carries the
//!   decay settings.

pub mod catchup;
pub mod config;
pub mod manager;
pub mod scheduler;
pub mod store;

pub use catchup::{CatchUpOutcome, catch_up};
pub use config::ManagerConfig;
pub use manager::DecayManager;
pub use scheduler::DecayScheduler;
pub use store::ScheduleStore;
