//! Basic building blocks.

use std::{
    f64::consts::PI,
    ops::{Add, Sub},
};

use nalgebra::Vector2;

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn distance(&self, position: Self) -> f64 {
        ((self.x - position.x).powi(2) + (self.y - position.y).powi(2)).sqrt()
    }

    pub fn rotate_vector(&self, angle: Angle) -> Position {
        Position::new(
            self.x * angle.0.cos() - self.y * angle.0.sin(),
            self.x * angle.0.sin() + self.y * angle.0.cos(),
        )
    }
}

impl From<(f64, f64)> for Position {
    fn from(value: (f64, f64)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl From<Position> for (f64, f64) {
    fn from(value: Position) -> Self {
        (value.x, value.y)
    }
}

impl From<Position> for Vector2<f64> {
    fn from(value: Position) -> Self {
        Vector2::new(value.x, value.y)
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// Angle in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl Angle {
    pub fn new(radians: f64) -> Self {
        Self(radians)
    }

    pub fn from_deg(degree: f64) -> Self {
        Self(degree * PI / 180.0)
    }

    /// Signed degrees, in the same half-open range as `atan2`.
    pub fn to_deg(self) -> f64 {
        self.0.to_degrees()
    }
}

impl From<Angle> for f64 {
    fn from(value: Angle) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::{assert_abs_diff_eq, AbsDiffEq};
    use rstest::rstest;

    use super::*;

    const EPSILON: f64 = 4.0 * f64::EPSILON;

    #[test]
    fn test_position() {
        let position = Position::new(1.0, 2.0);
        assert_abs_diff_eq!(position.x(), 1.0);
        assert_abs_diff_eq!(position.y(), 2.0);
    }

    #[test]
    fn test_position_arithmetic() {
        let a = Position::new(1.5, -2.0);
        let b = Position::new(0.5, 4.0);
        assert_abs_diff_eq!(a + b, Position::new(2.0, 2.0));
        assert_abs_diff_eq!(a - b, Position::new(1.0, -6.0));
        assert_abs_diff_eq!(Position::new(0.0, 0.0).distance(Position::new(3.0, 4.0)), 5.0);
    }

    #[rstest]
    #[case::quarter(Angle::new(0.5 * PI), Position::new(0.0, 1.0))]
    #[case::half(Angle::new(PI), Position::new(-1.0, 0.0))]
    #[case::negative_quarter(Angle::new(-0.5 * PI), Position::new(0.0, -1.0))]
    fn test_position_rotate_vector(#[case] angle: Angle, #[case] expected: Position) {
        assert_abs_diff_eq!(
            Position::new(1.0, 0.0).rotate_vector(angle),
            expected,
            epsilon = EPSILON
        );
    }

    #[rstest]
    #[case(Angle::new(0.0), 0.0)]
    #[case(Angle::new(0.5 * PI), 90.0)]
    #[case(Angle::new(1.0 * PI), 180.0)]
    #[case(Angle::new(-0.5 * PI), -90.0)]
    #[case(Angle::new(-0.25 * PI), -45.0)]
    fn test_angle_to_deg(#[case] angle: Angle, #[case] expected: f64) {
        assert_abs_diff_eq!(angle.to_deg(), expected, epsilon = 1e-12);
    }

    #[rstest]
    #[case(45.0, 0.25 * PI)]
    #[case(-90.0, -0.5 * PI)]
    #[case(180.0, PI)]
    fn test_angle_from_deg(#[case] degree: f64, #[case] expected: f64) {
        assert_abs_diff_eq!(
            Angle::from_deg(degree),
            Angle::new(expected),
            epsilon = EPSILON
        );
    }

    impl AbsDiffEq for Position {
        type Epsilon = f64;

        fn default_epsilon() -> f64 {
            f64::EPSILON
        }

        fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
            f64::abs_diff_eq(&self.x, &other.x, epsilon)
                && f64::abs_diff_eq(&self.y, &other.y, epsilon)
        }
    }

    impl AbsDiffEq for Angle {
        type Epsilon = f64;

        fn default_epsilon() -> f64 {
            f64::EPSILON
        }

        fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
            f64::abs_diff_eq(&self.0, &other.0, epsilon)
        }
    }
}
