mod operand;
mod point;
mod vector;

pub use self::operand::*;
pub use self::point::*;
pub use self::vector::*;
