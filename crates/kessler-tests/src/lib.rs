//! End-to-end lifecycle tests for the Kessler decay subsystem.
//!
//! This crate drives the whole stack, from bootstrap through ticking,
//! saving, and restarting, against an in-memory flight world with real
//! two-body orbit arithmetic. The tests live in `tests/`; this library
//! only provides the shared simulation helpers.

pub mod helpers;
