//! Rectangular footprints rotated into the direction of travel.

use tracing::{trace, warn};

use super::{CollisionError, Heading, Position, Trajectory};

/// Rectangular extent of an object. The height runs along the direction of travel, the width
/// across it.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Footprint {
    height: f64,
    width: f64,
}

impl Footprint {
    pub fn new(height: f64, width: f64) -> Result<Self, CollisionError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(height) && valid(width) {
            Ok(Self { height, width })
        } else {
            Err(CollisionError::InvalidFootprint { height, width })
        }
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn half_diagonal(&self) -> f64 {
        Position::default().distance(Position::new(self.height / 2.0, self.width / 2.0))
    }
}

/// Four corners of a rotated rectangle.
///
/// Corners keep their construction order: rear left, front left, front right, rear right, as
/// seen when facing the heading. The containment overlap test indexes into this order.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct OrientedBox {
    corners: [Position; 4],
}

impl OrientedBox {
    /// Box centred on the latest trajectory point and rotated by `heading`.
    pub fn build(
        trajectory: &Trajectory,
        heading: Heading,
        footprint: Footprint,
    ) -> Result<Self, CollisionError> {
        let center = trajectory.latest().ok_or(CollisionError::EmptyTrajectory)?;
        let angle = heading.angle();
        let half_height = footprint.height / 2.0;
        let half_width = footprint.width / 2.0;

        let corner = |forward: f64, lateral: f64| {
            center + Position::new(forward, lateral).rotate_vector(angle)
        };

        let oriented_box = Self {
            corners: [
                corner(-half_height, half_width),
                corner(half_height, half_width),
                corner(half_height, -half_width),
                corner(-half_height, -half_width),
            ],
        };
        trace!(%heading, ?oriented_box, "built oriented box");

        Ok(oriented_box)
    }

    /// Box for the trajectory's latest point and heading.
    pub fn from_trajectory(
        trajectory: &Trajectory,
        footprint: Footprint,
    ) -> Result<Self, CollisionError> {
        let Some(heading) = trajectory.heading() else {
            warn!(points = trajectory.len(), "heading undefined");
            return Err(CollisionError::UndefinedHeading {
                points: trajectory.len(),
            });
        };
        Self::build(trajectory, heading, footprint)
    }

    pub fn corners(&self) -> &[Position; 4] {
        &self.corners
    }

    pub fn centroid(&self) -> Position {
        let sum = self
            .corners
            .iter()
            .fold(Position::default(), |acc, corner| acc + *corner);
        Position::new(sum.x() / 4.0, sum.y() / 4.0)
    }
}

impl TryFrom<&[Position]> for OrientedBox {
    type Error = CollisionError;

    fn try_from(value: &[Position]) -> Result<Self, Self::Error> {
        let corners = <[Position; 4]>::try_from(value)
            .map_err(|_| CollisionError::MalformedBox(value.len()))?;
        Ok(Self { corners })
    }
}

impl TryFrom<Vec<(f64, f64)>> for OrientedBox {
    type Error = CollisionError;

    fn try_from(value: Vec<(f64, f64)>) -> Result<Self, Self::Error> {
        let corners = value.into_iter().map(Position::from).collect::<Vec<_>>();
        Self::try_from(corners.as_slice())
    }
}

/// Box from an explicit heading and extent.
pub fn build_box(
    trajectory: &Trajectory,
    heading: Heading,
    height: f64,
    width: f64,
) -> Result<OrientedBox, CollisionError> {
    OrientedBox::build(trajectory, heading, Footprint::new(height, width)?)
}
