//! Collision check between two vehicles, each given by its recent trajectory and rectangular
//! footprint.


pub mod domain;

pub use domain::{
    boxes_intersect, boxes_overlap, build_box, check_collision, estimate_heading, lists_overlap,
    CheckerConfig, CollisionChecker, CollisionError, CollisionOutcome, Footprint, HasCollision,
    Heading, OrientedBox, OverlapTest, Position, Trajectory, Vehicle,
};
