// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Classification of horizontal movement into compass directions.

use std::fmt;

use crate::Position;

/// One of eight compass directions of a horizontal displacement.
///
/// East is the positive x axis and north is the positive z axis.
/// [Bearing::Forward] is a fallback for displacements which can't be
/// classified (non-finite coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(C)]
pub enum Bearing {
    East = 0,
    Northeast = 1,
    North = 2,
    Northwest = 3,
    West = 4,
    Southwest = 5,
    South = 6,
    Southeast = 7,
    Forward = 8,
}

/// Half of the angular width of every sector, in degrees.
const HALF_SECTOR: f64 = 22.5;

/// Sectors other than west, as (center angle, bearing).
/// West wraps around ±180° and is handled separately.
const SECTORS: [(f64, Bearing); 7] = [
    (0.0, Bearing::East),
    (45.0, Bearing::Northeast),
    (90.0, Bearing::North),
    (135.0, Bearing::Northwest),
    (-135.0, Bearing::Southwest),
    (-90.0, Bearing::South),
    (-45.0, Bearing::Southeast),
];

impl Bearing {
    /// Classifies an angle (in degrees, measured counter-clockwise from east)
    /// into a sector. Every sector is a half-open interval `[center - 22.5, center + 22.5)`.
    pub fn from_angle(degrees: f64) -> Self {
        if degrees >= 180.0 - HALF_SECTOR || degrees < -180.0 + HALF_SECTOR {
            return Self::West;
        }

        SECTORS
            .iter()
            .find_map(|&(center, bearing)| {
                if degrees >= center - HALF_SECTOR && degrees < center + HALF_SECTOR {
                    Some(bearing)
                } else {
                    None
                }
            })
            .unwrap_or(Self::Forward)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::East => "east",
            Self::Northeast => "northeast",
            Self::North => "north",
            Self::Northwest => "northwest",
            Self::West => "west",
            Self::Southwest => "southwest",
            Self::South => "south",
            Self::Southeast => "southeast",
            Self::Forward => "forward",
        }
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Computes the [Bearing] of moving from one position to another.
/// Vertical displacement is ignored.
pub fn bearing(from: Position, to: Position) -> Bearing {
    let dx = to.x as f64 - from.x as f64;
    let dz = to.z as f64 - from.z as f64;
    Bearing::from_angle(dz.atan2(dx).to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_angle() {
        assert_eq!(Bearing::from_angle(-180.0), Bearing::West);
        assert_eq!(Bearing::from_angle(-135.0), Bearing::Southwest);
        assert_eq!(Bearing::from_angle(-90.0), Bearing::South);
        assert_eq!(Bearing::from_angle(-45.0), Bearing::Southeast);
        assert_eq!(Bearing::from_angle(0.0), Bearing::East);
        assert_eq!(Bearing::from_angle(44.9), Bearing::Northeast);
        assert_eq!(Bearing::from_angle(45.0), Bearing::Northeast);
        assert_eq!(Bearing::from_angle(90.1), Bearing::North);
        assert_eq!(Bearing::from_angle(180.0), Bearing::West);
    }

    #[test]
    fn from_angle_boundaries() {
        // Lower bounds are inclusive, upper bounds exclusive
        assert_eq!(Bearing::from_angle(22.5), Bearing::Northeast);
        assert_eq!(Bearing::from_angle(22.4), Bearing::East);
        assert_eq!(Bearing::from_angle(-22.5), Bearing::East);
        assert_eq!(Bearing::from_angle(157.5), Bearing::West);
        assert_eq!(Bearing::from_angle(157.4), Bearing::Northwest);
        assert_eq!(Bearing::from_angle(-157.5), Bearing::Southwest);
        assert_eq!(Bearing::from_angle(-157.6), Bearing::West);
    }

    #[test]
    fn from_angle_is_total() {
        let mut counts = [0usize; 9];
        for tenth in -1799..=1800 {
            let b = Bearing::from_angle(tenth as f64 / 10.0);
            assert_ne!(b, Bearing::Forward, "{}", tenth);
            counts[b as usize] += 1;
        }

        // Every sector is exactly 45° wide
        assert!(counts[..8].iter().all(|&c| c == 450), "{:?}", counts);
        assert_eq!(Bearing::from_angle(f64::NAN), Bearing::Forward);
    }

    #[test]
    fn bearing_ignores_vertical() {
        let a = Position::new(0.0, 0.0, 0.0);
        assert_eq!(bearing(a, Position::new(3.0, 0.0, 0.0)), Bearing::East);
        assert_eq!(bearing(a, Position::new(0.0, 0.0, 3.0)), Bearing::North);
        assert_eq!(bearing(a, Position::new(-3.0, 7.0, -3.0)), Bearing::Southwest);
        assert_eq!(bearing(a, Position::new(0.0, 4.0, -3.0)), Bearing::South);
        assert_eq!(bearing(a, Position::new(0.0, 4.0, 0.0)), Bearing::East);
    }
}
