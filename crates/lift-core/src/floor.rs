//! Floors, travel direction, and fractional-position quantization.

/// A discrete floor number.  Valid floors are `1..=top_floor`; the type is
/// signed so a car driven below the ground floor can still be reported.
pub type Floor = i32;

/// Travel direction of a car.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Descending,
    #[default]
    Idle,
    Ascending,
}

impl Direction {
    /// Direction of travel from `from` towards `to`.
    #[inline]
    pub fn towards(from: Floor, to: Floor) -> Direction {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Direction::Ascending,
            std::cmp::Ordering::Less    => Direction::Descending,
            std::cmp::Ordering::Equal   => Direction::Idle,
        }
    }

    /// Signed unit step: `+1`, `0`, or `-1`.
    #[inline]
    pub fn step(self) -> f64 {
        match self {
            Direction::Ascending  => 1.0,
            Direction::Idle       => 0.0,
            Direction::Descending => -1.0,
        }
    }
}

/// Discrete floor for a fractional `position`, or `None` while in transit.
///
/// A position is at floor `F` when it rounds to `F` and lies within
/// `tolerance` of it.  Fractional speeds accumulate rounding error, so exact
/// equality is never required.
#[inline]
pub fn quantize(position: f64, tolerance: f64) -> Option<Floor> {
    let nearest = position.round();
    if (nearest - position).abs() < tolerance {
        Some(nearest as Floor)
    } else {
        None
    }
}
