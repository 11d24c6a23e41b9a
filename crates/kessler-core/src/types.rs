//! Craft identity, classification, and orbital state snapshots.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::IdParseError;

/// 128-bit craft identifier, stable across sessions and saves.
///
/// Rendered and parsed in the canonical hexadecimal `8-4-4-4-12` form,
/// lowercase on output. Ordering is the byte-wise ordering of the raw id,
/// which keeps schedule iteration and persistence deterministic.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CraftId(pub [u8; 16]);

impl CraftId {
    /// The all-zero id. No real craft carries it.
    pub const NIL: CraftId = CraftId([0u8; 16]);

    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        CraftId(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub fn is_nil(&self) -> bool {
        self.0 == [0u8; 16]
    }
}

impl fmt::Display for CraftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if matches!(i, 4 | 6 | 8 | 10) {
                write!(f, "-")?;
            }
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for CraftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CraftId({self})")
    }
}

impl FromStr for CraftId {
    type Err = IdParseError;

    /// Parses the canonical `8-4-4-4-12` form. Accepts either hex case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 36 {
            return Err(IdParseError::InvalidLength(s.len()));
        }
        let mut bytes = [0u8; 16];
        let mut nibbles = 0usize;
        for (pos, c) in s.chars().enumerate() {
            if matches!(pos, 8 | 13 | 18 | 23) {
                if c != '-' {
                    return Err(IdParseError::MissingSeparator(pos));
                }
                continue;
            }
            let digit = c.to_digit(16).ok_or(IdParseError::InvalidCharacter(c))? as u8;
            bytes[nibbles / 2] = (bytes[nibbles / 2] << 4) | digit;
            nibbles += 1;
        }
        Ok(CraftId(bytes))
    }
}

impl From<[u8; 16]> for CraftId {
    fn from(bytes: [u8; 16]) -> Self {
        CraftId(bytes)
    }
}

impl AsRef<[u8]> for CraftId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Craft classification as reported by the host simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CraftClass {
    Debris,
    Probe,
    Relay,
    Rover,
    Lander,
    Ship,
    Plane,
    Station,
    Base,
    EvaCrew,
    Flag,
    SpaceObject,
    Unknown,
}

impl CraftClass {
    /// Whether this class ever falls under decay management.
    ///
    /// Crew on EVA, planted flags, untracked space objects, and craft of
    /// unknown type are never touched.
    pub fn trackable(&self) -> bool {
        !matches!(
            self,
            CraftClass::EvaCrew | CraftClass::Flag | CraftClass::SpaceObject | CraftClass::Unknown
        )
    }

    pub fn is_debris(&self) -> bool {
        matches!(self, CraftClass::Debris)
    }
}

/// The celestial body a craft orbits.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: String,
    /// Whether the body has an atmosphere. Bodies without one produce no
    /// drag, so nothing decays there.
    pub has_atmosphere: bool,
    /// Altitude in meters above which the body's atmosphere no longer
    /// matters for decay.
    pub space_threshold: f64,
}

/// Per-craft situation snapshot, read fresh from the host each time.
#[derive(Debug, Clone, PartialEq)]
pub struct CraftInfo {
    pub class: CraftClass,
    pub body: Body,
    pub landed: bool,
    pub splashed: bool,
    /// Current altitude above the body's surface, in meters.
    pub altitude: f64,
}

/// Orbital elements of one craft, in meters and seconds.
///
/// Derived fields (`time_to_periapsis`, `period`) reflect the orbit at the
/// moment of the read. After a semi-major axis write they must be read
/// again, never reused.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub semi_major_axis: f64,
    pub periapsis_altitude: f64,
    pub time_to_periapsis: f64,
    pub period: f64,
}

/// Map from craft id to the universal time of its next decay event.
///
/// `BTreeMap` so iteration and the persisted form are ordered by id.
pub type DecaySchedule = BTreeMap<CraftId, f64>;
