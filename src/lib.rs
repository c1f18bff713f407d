//! 2D vector value type
//!
//! Build vectors from coordinates or from two points, then add, subtract,
//! scale, take dot products, normalize, measure angles and rotate.
//!
//! Coordinates are kept at two decimal places, every operation returns a new
//! vector

#[macro_use]
pub mod vector_error;
pub mod precision;
pub mod vector_model;

pub use vector_error::{VectorError, VectorErrorKind};
pub use vector_model::{Operand, Point, Product, Vector};
