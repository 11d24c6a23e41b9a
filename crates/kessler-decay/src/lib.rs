//! # kessler-decay
//!
//! Decay math for the Kessler subsystem, kept free of schedule state and
//! I/O so it can be exercised and benchmarked in isolation:
//!
//! - [`drag::DragModel`] scales the per-orbit shrink fraction with how deep
//!   a craft's periapsis sits inside the body's atmosphere.
//! - [`eligibility`] decides which craft fall under decay management at
//!   all.

pub mod drag;
pub mod eligibility;

pub use drag::DragModel;
pub use eligibility::{decay_candidates, is_eligible};
