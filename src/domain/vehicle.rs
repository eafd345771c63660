//! Vehicle with a rectangular footprint moving along a trajectory.

use tracing::debug;

use super::{CollisionError, Footprint, HasCollision, Heading, OrientedBox, Position, Trajectory};

#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct Vehicle {
    trajectory: Trajectory,
    footprint: Footprint,
}

impl Vehicle {
    pub fn new(trajectory: Trajectory, footprint: Footprint) -> Self {
        Self {
            trajectory,
            footprint,
        }
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn footprint(&self) -> Footprint {
        self.footprint
    }

    pub fn position(&self) -> Option<Position> {
        self.trajectory.latest()
    }

    pub fn heading(&self) -> Option<Heading> {
        self.trajectory.heading()
    }
}

impl HasCollision for Vehicle {
    fn oriented_box(&self) -> Result<OrientedBox, CollisionError> {
        debug!(
            position = ?self.position(),
            heading = ?self.heading(),
            "estimated vehicle pose"
        );
        OrientedBox::from_trajectory(&self.trajectory, self.footprint)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::super::OverlapTest;
    use super::*;
    use crate::tests::{sample_trajectories, trajectory};

    fn footprint() -> Footprint {
        Footprint::new(2.0, 1.0).unwrap()
    }

    #[test]
    fn test_vehicle_pose() {
        let (a, _) = sample_trajectories();
        let vehicle = Vehicle::new(a, footprint());
        assert_eq!(vehicle.position(), Some(Position::new(0.0, 2.0)));
        assert_abs_diff_eq!(vehicle.heading().unwrap().degrees(), 45.0, epsilon = 1e-9);
        assert_eq!(vehicle.trajectory().len(), 10);
        assert_eq!(vehicle.footprint(), footprint());
    }

    #[test]
    fn test_vehicle_oriented_box() {
        let vehicle = Vehicle::new(trajectory(&[(1.0, 1.0), (1.0, 3.0)]), footprint());
        let expected = OrientedBox::build(
            vehicle.trajectory(),
            Heading::from_degrees(90.0),
            footprint(),
        )
        .unwrap();
        assert_abs_diff_eq!(vehicle.oriented_box().unwrap(), expected, epsilon = 1e-12);
        assert_abs_diff_eq!(
            vehicle.oriented_box().unwrap().centroid(),
            Position::new(1.0, 3.0),
            epsilon = 1e-12
        );
    }

    #[rstest]
    #[case::containment(OverlapTest::Containment, false)]
    #[case::separating_axis(OverlapTest::SeparatingAxis, true)]
    fn test_vehicle_has_collision(#[case] overlap_test: OverlapTest, #[case] expected: bool) {
        // Heading 0 gives the containment test an empty y interval.
        let a = Vehicle::new(trajectory(&[(-1.0, 0.0), (0.0, 0.0)]), footprint());
        let b = Vehicle::new(trajectory(&[(0.0, 0.5), (0.5, 0.5)]), footprint());
        assert_eq!(a.has_collision(&b, overlap_test), Ok(expected));
    }

    #[test]
    fn test_vehicle_has_collision_undefined_heading() {
        let a = Vehicle::new(trajectory(&[(0.0, 0.0)]), footprint());
        let (b, _) = sample_trajectories();
        let b = Vehicle::new(b, footprint());
        assert_eq!(
            b.has_collision(&a, OverlapTest::SeparatingAxis),
            Err(CollisionError::UndefinedHeading { points: 1 })
        );
    }
}
