//! Demonstration of the collision check on two hard-coded vehicle trajectories.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vehicle_collision::{
    CheckerConfig, CollisionChecker, Footprint, OverlapTest, Trajectory, Vehicle,
};

const TRAJECTORY_A: [(f64, f64); 10] = [
    (0.0, 0.0),
    (1.0, 0.0),
    (2.0, 1.0),
    (2.0, 2.0),
    (1.0, 3.0),
    (0.0, 3.0),
    (-1.0, 2.0),
    (-1.0, 1.0),
    (-0.5, 1.5),
    (0.0, 2.0),
];

const TRAJECTORY_B: [(f64, f64); 10] = [
    (3.0, 3.0),
    (4.0, 3.0),
    (5.0, 4.0),
    (5.0, 5.0),
    (4.0, 6.0),
    (3.0, 6.0),
    (2.0, 5.0),
    (2.0, 4.0),
    (2.5, 4.5),
    (3.0, 5.0),
];

#[derive(Parser, Debug)]
#[command(author, version, about = "Collision check of two sample vehicle trajectories")]
struct Args {
    /// Vehicle extent along the direction of travel
    #[arg(long, default_value_t = 2.0)]
    height: f64,
    /// Vehicle extent across the direction of travel
    #[arg(long, default_value_t = 1.0)]
    width: f64,
    /// Overlap algorithm: containment or separating-axis
    #[arg(long, default_value_t = OverlapTest::Containment)]
    overlap_test: OverlapTest,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let footprint = Footprint::new(args.height, args.width)?;
    let a = Vehicle::new(Trajectory::from(TRAJECTORY_A.to_vec()), footprint);
    let b = Vehicle::new(Trajectory::from(TRAJECTORY_B.to_vec()), footprint);

    let checker = CollisionChecker::new(CheckerConfig::new(args.overlap_test));
    info!(
        overlap_test = %checker.config().overlap_test,
        height = footprint.height(),
        width = footprint.width(),
        "checking sample trajectories"
    );

    let outcome = checker.check(&a, &b)?;
    println!("{} ({outcome})", outcome.as_index());

    Ok(())
}
