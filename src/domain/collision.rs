//! Collision detection between oriented boxes.

use std::{fmt, str::FromStr};

use nalgebra::Vector2;
use thiserror::Error;
use tracing::debug;

use super::{Footprint, OrientedBox, Trajectory, Vehicle};

pub trait HasCollision {
    fn oriented_box(&self) -> Result<OrientedBox, CollisionError>;

    fn has_collision(
        &self,
        other: &dyn HasCollision,
        overlap_test: OverlapTest,
    ) -> Result<bool, CollisionError> {
        Ok(overlap_test.overlaps(&self.oriented_box()?, &other.oriented_box()?))
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CollisionError {
    #[error("heading undefined for trajectory with {points} point(s)")]
    UndefinedHeading { points: usize },
    #[error("trajectory has no points")]
    EmptyTrajectory,
    #[error("invalid footprint {height} x {width}")]
    InvalidFootprint { height: f64, width: f64 },
    #[error("oriented box needs 4 corners, got {0}")]
    MalformedBox(usize),
    #[error("box lists differ in length ({left} vs {right})")]
    MismatchedBoxLists { left: usize, right: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown overlap test {0:?}")]
pub struct ParseOverlapTestError(String);

/// Algorithm deciding whether two oriented boxes overlap.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum OverlapTest {
    /// Corners of the first box inside the bounds spanned by the second box's corners 0, 1 and 2.
    #[default]
    Containment,
    /// Exact intersection of the two rectangles.
    SeparatingAxis,
}

impl OverlapTest {
    pub fn overlaps(self, a: &OrientedBox, b: &OrientedBox) -> bool {
        match self {
            OverlapTest::Containment => boxes_overlap(a, b),
            OverlapTest::SeparatingAxis => boxes_intersect(a, b),
        }
    }
}

impl FromStr for OverlapTest {
    type Err = ParseOverlapTestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "containment" => Ok(OverlapTest::Containment),
            "separating-axis" | "sat" => Ok(OverlapTest::SeparatingAxis),
            _ => Err(ParseOverlapTestError(s.to_string())),
        }
    }
}

impl fmt::Display for OverlapTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OverlapTest::Containment => "containment",
            OverlapTest::SeparatingAxis => "separating-axis",
        })
    }
}

/// Whether any corner of `a` lies within the bounds taken from `b`.
///
/// `b` is treated as axis-aligned: its corner 0 is the lower bound, corner 1 the upper x bound
/// and corner 2 the upper y bound. For rotated boxes these bounds may be empty, so this is only
/// an approximation of rectangle intersection. Only the corners of `a` are tested.
pub fn boxes_overlap(a: &OrientedBox, b: &OrientedBox) -> bool {
    let [lower, upper_x, upper_y, _] = *b.corners();
    a.corners().iter().any(|p| {
        p.x() >= lower.x() && p.x() <= upper_x.x() && p.y() >= lower.y() && p.y() <= upper_y.y()
    })
}

/// Whether the two rectangles intersect, using the edge normals of both as separating axes.
/// Touching rectangles intersect.
pub fn boxes_intersect(a: &OrientedBox, b: &OrientedBox) -> bool {
    fn axes(oriented_box: &OrientedBox) -> [Vector2<f64>; 2] {
        let [c1, c2, c3, _] = oriented_box.corners().map(Vector2::<f64>::from);
        let normal = |edge: Vector2<f64>| Vector2::new(-edge.y, edge.x);
        [normal(c2 - c1), normal(c3 - c2)]
    }

    fn project(oriented_box: &OrientedBox, axis: &Vector2<f64>) -> (f64, f64) {
        oriented_box
            .corners()
            .iter()
            .map(|c| Vector2::<f64>::from(*c).dot(axis))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), p| {
                (min.min(p), max.max(p))
            })
    }

    axes(a).iter().chain(axes(b).iter()).all(|axis| {
        let (a_min, a_max) = project(a, axis);
        let (b_min, b_max) = project(b, axis);
        a_min <= b_max && b_min <= a_max
    })
}

/// Result of comparing two box lists step by step.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CollisionOutcome {
    Collision { step: usize },
    NoCollision,
}

impl CollisionOutcome {
    pub fn is_collision(&self) -> bool {
        matches!(self, CollisionOutcome::Collision { .. })
    }

    pub fn step(&self) -> Option<usize> {
        match self {
            CollisionOutcome::Collision { step } => Some(*step),
            CollisionOutcome::NoCollision => None,
        }
    }

    /// Step index of the collision, or -1 without collision.
    pub fn as_index(&self) -> i64 {
        self.step()
            .and_then(|step| i64::try_from(step).ok())
            .unwrap_or(-1)
    }
}

impl fmt::Display for CollisionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollisionOutcome::Collision { step } => write!(f, "collision at step {step}"),
            CollisionOutcome::NoCollision => f.write_str("no collision"),
        }
    }
}

/// First step at which the boxes of both lists overlap. Lists are compared index by index.
pub fn lists_overlap(
    a: &[OrientedBox],
    b: &[OrientedBox],
    overlap_test: OverlapTest,
) -> Result<CollisionOutcome, CollisionError> {
    if a.len() != b.len() {
        return Err(CollisionError::MismatchedBoxLists {
            left: a.len(),
            right: b.len(),
        });
    }

    Ok(std::iter::zip(a, b)
        .position(|(a, b)| overlap_test.overlaps(a, b))
        .map_or(CollisionOutcome::NoCollision, |step| {
            CollisionOutcome::Collision { step }
        }))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CheckerConfig {
    pub overlap_test: OverlapTest,
}

impl CheckerConfig {
    pub const fn new(overlap_test: OverlapTest) -> Self {
        CheckerConfig { overlap_test }
    }
}

/// Checks two objects for a collision at their latest trajectory point.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollisionChecker {
    config: CheckerConfig,
}

impl CollisionChecker {
    pub fn new(config: CheckerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    pub fn check(
        &self,
        a: &dyn HasCollision,
        b: &dyn HasCollision,
    ) -> Result<CollisionOutcome, CollisionError> {
        let boxes_a = [a.oriented_box()?];
        let boxes_b = [b.oriented_box()?];
        let outcome = lists_overlap(&boxes_a, &boxes_b, self.config.overlap_test)?;
        debug!(overlap_test = %self.config.overlap_test, %outcome, "collision check");
        Ok(outcome)
    }
}

/// Checks two trajectories with their footprints using the default configuration.
pub fn check_collision(
    trajectory_a: &Trajectory,
    trajectory_b: &Trajectory,
    footprint_a: Footprint,
    footprint_b: Footprint,
) -> Result<CollisionOutcome, CollisionError> {
    let a = Vehicle::new(trajectory_a.clone(), footprint_a);
    let b = Vehicle::new(trajectory_b.clone(), footprint_b);
    CollisionChecker::default().check(&a, &b)
}
