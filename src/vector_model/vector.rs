use std::fmt::{Display, Formatter};
use std::ops::{Add, Mul, Sub};

use float_cmp::{ApproxEq, F64Margin};

use super::*;
use crate::precision::round_coord;
use crate::vector_error::{Result, VectorError, VectorErrorKind};

/// mathmatic 2D vector
///
/// Both coordinates are rounded to two decimal places when the vector is
/// built, and every operation returning a vector rounds again. Operations
/// never mutate the receiver.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    x: f64,
    y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };
    pub const Y_AXIS: Vector = Vector { x: 0.0, y: 1.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Vector {
            x: round_coord(x),
            y: round_coord(y),
        }
    }

    /// vector pointing from `start` to `end`
    pub fn create_vector_by_two_points<S, E>(start: S, end: E) -> Self
    where
        S: Into<Point>,
        E: Into<Point>,
    {
        let start = start.into();
        let end = end.into();
        Vector::new(end.x - start.x, end.y - start.y)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn add_vector(&self, other: &Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract_vector(&self, other: &Vector) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }

    pub fn scale(&self, scalar: f64) -> Vector {
        Vector::new(self.x * scalar, self.y * scalar)
    }

    pub fn dot(&self, other: &Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// add an operand of unknown kind, only vectors are accepted
    pub fn try_add<T: Into<Operand>>(&self, other: T) -> Result<Vector> {
        match other.into() {
            Operand::Vector(v) => Ok(self.add_vector(&v)),
            operand => Err(unsupported("add", &operand)),
        }
    }

    /// subtract an operand of unknown kind, only vectors are accepted
    pub fn try_subtract<T: Into<Operand>>(&self, other: T) -> Result<Vector> {
        match other.into() {
            Operand::Vector(v) => Ok(self.subtract_vector(&v)),
            operand => Err(unsupported("subtract", &operand)),
        }
    }

    /// scalar operand scales, vector operand gives the dot product
    pub fn try_multiply<T: Into<Operand>>(&self, other: T) -> Result<Product> {
        match other.into() {
            Operand::Scalar(s) => Ok(Product::Scaled(self.scale(s))),
            Operand::Vector(v) => Ok(Product::Dot(self.dot(&v))),
            operand => Err(unsupported("multiply", &operand)),
        }
    }

    pub fn length(&self) -> f64 {
        f64::sqrt(self.x * self.x + self.y * self.y)
    }

    pub fn normalized(&self) -> Result<Vector> {
        let magnitude = self.length();
        if magnitude == 0.0 {
            return Err(vector_err!(
                VectorErrorKind::ZeroLength,
                "can not normalize a zero-length vector"
            ));
        }
        Ok(Vector::new(self.x / magnitude, self.y / magnitude))
    }

    /// unsigned angle to `other` in whole degrees, 0..=180
    pub fn angle_between(&self, other: &Vector) -> Result<u32> {
        let magnitude_a = self.length();
        let magnitude_b = other.length();
        if magnitude_a == 0.0 || magnitude_b == 0.0 {
            return Err(vector_err!(
                VectorErrorKind::ZeroLength,
                &format!(
                    "can not calculate angle between {} and {}, zero-length vector",
                    self, other
                )
            ));
        }
        // rounding noise can push parallel vectors just past 1
        let cos_theta = (self.dot(other) / (magnitude_a * magnitude_b)).clamp(-1.0, 1.0);
        Ok(f64::round(cos_theta.acos().to_degrees()) as u32)
    }

    pub fn angle_from_y_axis(&self) -> Result<u32> {
        self.angle_between(&Vector::Y_AXIS)
    }

    /// rotate counterclockwise, measured in degrees
    pub fn rotate(&self, degrees: f64) -> Vector {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Vector::new(
            self.x * cos - self.y * sin,
            self.x * sin + self.y * cos,
        )
    }
}

fn unsupported(op: &str, operand: &Operand) -> VectorError {
    vector_err!(
        VectorErrorKind::TypeNotSupported,
        &format!(
            "can not {} vector and {} {}",
            op,
            operand.type_name(),
            operand
        )
    )
}

impl Display for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vector({}, {})", self.x, self.y)
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, other: Vector) -> Vector {
        self.add_vector(&other)
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, other: Vector) -> Vector {
        self.subtract_vector(&other)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, scalar: f64) -> Vector {
        self.scale(scalar)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;
    fn mul(self, vector: Vector) -> Vector {
        vector.scale(self)
    }
}

impl Mul for Vector {
    type Output = f64;
    fn mul(self, other: Vector) -> f64 {
        self.dot(&other)
    }
}

impl ApproxEq for Vector {
    type Margin = F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin = margin.into();
        self.x.approx_eq(other.x, margin) && self.y.approx_eq(other.y, margin)
    }
}
