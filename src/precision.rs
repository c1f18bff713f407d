//! coordinate precision

/// decimal places kept by every stored coordinate
pub const DECIMALS: usize = 2;

/// round to `DECIMALS` places on the exact decimal value of `v`
pub(crate) fn round_coord(v: f64) -> f64 {
    // no scaling step, it rounds twice and overflows near f64::MAX
    let rounded = format!("{:.*}", DECIMALS, v).parse::<f64>().unwrap_or(v);
    // keep -0.0 out of stored values
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod test_precision {
    use super::*;
    use float_cmp::{ApproxEq, F64Margin};

    #[test]
    fn test_round_coord() {
        assert!(round_coord(1.234).approx_eq(1.23, F64Margin::default()));
        assert!(round_coord(1.236).approx_eq(1.24, F64Margin::default()));
        assert!(round_coord(-3.499).approx_eq(-3.5, F64Margin::default()));
        assert!(round_coord(9.999).approx_eq(10.0, F64Margin::default()));
        assert!(round_coord(0.004).approx_eq(0.0, F64Margin::default()));
    }

    #[test]
    fn test_round_coord_near_tie() {
        // stored just under the .xx5 tie, so they round down
        assert_eq!(round_coord(0.015), 0.01);
        assert_eq!(round_coord(0.155), 0.15);
        assert_eq!(round_coord(0.175), 0.17);
        assert_eq!(round_coord(2.675), 2.67);
        assert_eq!(round_coord(-0.015), -0.01);
        assert_eq!(round_coord(0.145), 0.14);
        // stored just over the tie
        assert_eq!(round_coord(0.135), 0.14);
        assert_eq!(round_coord(0.165), 0.17);
    }

    #[test]
    fn test_round_coord_large_value() {
        assert_eq!(round_coord(1e307), 1e307);
        assert_eq!(round_coord(-1.5e308), -1.5e308);
        assert_eq!(round_coord(f64::MAX), f64::MAX);
        assert!(round_coord(f64::INFINITY).is_infinite());
        assert!(round_coord(f64::NAN).is_nan());
    }

    #[test]
    fn test_round_coord_no_negative_zero() {
        let v = round_coord(-0.001);
        assert_eq!(v, 0.0);
        assert!(v.is_sign_positive());
        assert!(round_coord(6.123233995736766e-17).is_sign_positive());
    }
}
