use std::fmt::{Display, Formatter};

use super::*;

/// right hand side of a dynamically typed vector operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Scalar(f64),
    Vector(Vector),
    Point(Point),
}

impl Operand {
    /// short name used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Scalar(_) => "scalar",
            Operand::Vector(_) => "vector",
            Operand::Point(_) => "point",
        }
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Scalar(s) => write!(f, "{}", s),
            Operand::Vector(v) => write!(f, "{}", v),
            Operand::Point(p) => write!(f, "Point({}, {})", p.x, p.y),
        }
    }
}

impl From<f64> for Operand {
    fn from(s: f64) -> Self {
        Operand::Scalar(s)
    }
}

impl From<i32> for Operand {
    fn from(s: i32) -> Self {
        Operand::Scalar(s as f64)
    }
}

impl From<Vector> for Operand {
    fn from(v: Vector) -> Self {
        Operand::Vector(v)
    }
}

impl From<Point> for Operand {
    fn from(p: Point) -> Self {
        Operand::Point(p)
    }
}

/// result of [`Vector::try_multiply`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Product {
    /// vector times scalar
    Scaled(Vector),
    /// vector times vector
    Dot(f64),
}

impl Product {
    pub fn as_vector(&self) -> Option<Vector> {
        match self {
            Product::Scaled(v) => Some(*v),
            Product::Dot(_) => None,
        }
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Product::Scaled(_) => None,
            Product::Dot(d) => Some(*d),
        }
    }
}
