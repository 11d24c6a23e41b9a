//! # kessler-core
//!
//! Core types and traits for the Kessler orbital decay subsystem.
//!
//! This crate defines the vocabulary the rest of the workspace speaks:
//! craft identity and classification, orbital state snapshots, decay
//! settings, and the [`traits::FlightWorld`] / [`traits::DecayModel`]
//! seams between the host simulation and the decay machinery.

pub mod constants;
pub mod error;
pub mod settings;
pub mod traits;
pub mod types;
