//! The domain module encapsulates the collision geometry. It defines the `Trajectory`,
//! `OrientedBox` and `Vehicle` entities, along with the rules deciding whether two vehicles
//! collide at their latest trajectory point.
//!
//! All entities are plain values built fresh for every check, so the functions here can be
//! called from any number of threads without coordination.

mod basis;
mod collision;
mod oriented_box;
mod trajectory;
mod vehicle;

pub use basis::{Angle, Position};
pub use collision::{
    boxes_intersect, boxes_overlap, check_collision, lists_overlap, CheckerConfig,
    CollisionChecker, CollisionError, CollisionOutcome, HasCollision, OverlapTest,
    ParseOverlapTestError,
};
pub use oriented_box::{build_box, Footprint, OrientedBox};
pub use trajectory::{estimate_heading, Heading, Trajectory};
pub use vehicle::Vehicle;
