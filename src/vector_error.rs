//! vector error type

use std::error::Error;
use std::fmt::{Display, Formatter};

/// what went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorErrorKind {
    /// division by a zero magnitude
    ZeroLength,
    /// operand kind the operation does not accept
    TypeNotSupported,
}

#[derive(Debug)]
pub struct VectorError {
    kind: VectorErrorKind,
    err: String,
}

impl VectorError {
    pub fn new(kind: VectorErrorKind, err: &str) -> VectorError {
        VectorError {
            kind,
            err: err.to_string(),
        }
    }

    pub fn kind(&self) -> VectorErrorKind {
        self.kind
    }
}

impl Display for VectorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[VectorError::{:?}]: {}", self.kind, self.err)
    }
}

impl Error for VectorError {}

pub type Result<T> = std::result::Result<T, VectorError>;

#[macro_export]
macro_rules! vector_err {
    ( $kind:expr, $x:expr ) => {{
        $crate::vector_error::VectorError::new(
            $kind,
            format!("{}:{} : {}", file!(), line!(), $x).as_str(),
        )
    }};
}

#[cfg(test)]
mod test_vector_error {
    use super::*;

    #[test]
    fn test_err_macro() {
        let err = vector_err!(VectorErrorKind::ZeroLength, "nothing to divide by");
        assert_eq!(err.kind(), VectorErrorKind::ZeroLength);

        let msg = err.to_string();
        assert!(msg.starts_with("[VectorError::ZeroLength]: "));
        assert!(msg.contains("vector_error.rs"));
        assert!(msg.ends_with("nothing to divide by"));
    }

    #[test]
    fn test_err_is_std_error() {
        let err: Box<dyn Error> = Box::new(vector_err!(
            VectorErrorKind::TypeNotSupported,
            &format!("operand {}", 1.5)
        ));
        assert!(err.source().is_none());
        assert!(err.to_string().contains("operand 1.5"));
    }
}
