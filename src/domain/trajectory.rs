//! Trajectories and the heading derived from their most recent movement.

use std::fmt;

use super::{Angle, Position};

/// Chronologically ordered positions of a single object, oldest first.
#[derive(Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Trajectory {
    points: Vec<Position>,
}

impl Trajectory {
    pub fn new(points: Vec<Position>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Position] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn latest(&self) -> Option<Position> {
        self.points.last().copied()
    }

    /// Direction of travel between the last two points, `None` if there are fewer than two.
    pub fn heading(&self) -> Option<Heading> {
        let [.., previous, latest] = self.points.as_slice() else {
            return None;
        };
        let delta = *latest - *previous;
        Some(Heading::from_angle(Angle::new(delta.y().atan2(delta.x()))))
    }
}

impl From<Vec<Position>> for Trajectory {
    fn from(value: Vec<Position>) -> Self {
        Self::new(value)
    }
}

impl From<Vec<(f64, f64)>> for Trajectory {
    fn from(value: Vec<(f64, f64)>) -> Self {
        value.into_iter().map(Position::from).collect()
    }
}

impl FromIterator<Position> for Trajectory {
    fn from_iter<T: IntoIterator<Item = Position>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Direction of travel in degrees, counter-clockwise from the positive x-axis, in (-180, 180].
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Heading(f64);

impl Heading {
    pub fn from_degrees(degrees: f64) -> Self {
        Self(degrees)
    }

    fn from_angle(angle: Angle) -> Self {
        let degrees = angle.to_deg();
        // atan2(-0.0, x < 0) yields -180
        Self(if degrees <= -180.0 {
            degrees + 360.0
        } else {
            degrees
        })
    }

    pub fn degrees(&self) -> f64 {
        self.0
    }

    pub fn angle(&self) -> Angle {
        Angle::from_deg(self.0)
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// Heading of the trajectory's most recent movement.
pub fn estimate_heading(trajectory: &Trajectory) -> Option<Heading> {
    trajectory.heading()
}
