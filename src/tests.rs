// Copyright 2023 Redglyph
//
// Unit tests

#![cfg(test)]

mod test_d2d;

use crate::*;
use num::Float;

#[test]
fn test_constants() {
    // constants for double-precision encoding
    assert_eq!(MANTISSA_BITS, 52);
    assert_eq!(EXPONENT_BITS, 11);
    assert_eq!(BIAS, 1023);
    assert_eq!(MAX_IEEE_EXPONENT, 2047);
    assert_eq!(HIDDEN_BIT, 0x0010000000000000);
    assert_eq!(MANTISSA_MASK, 0x000fffffffffffff);
    assert_eq!(EXPONENT_MASK, 0x7ff0000000000000);
    assert_eq!(SIGN_MASK, 0x8000000000000000);
}

#[test]
fn test_double() {
    // base methods
    for f in [1.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 0.0, 1e10, -1.5e-8] {
        let x = Double::from(f);
        let report = format!("test failed for f = {f}");
        match x.encoding() {
            Encoding::NaN => assert!(f.is_nan(), "{report}"),
            Encoding::Inf => assert!(f.is_infinite(), "{report}"),
            Encoding::Zero => assert!(f == 0.0, "{report}"),
            Encoding::Digits => assert!(f.is_finite() && f != 0.0, "{report}"),
        }
        assert_eq!(x.is_nan(), f.is_nan(), "{report}");
        assert_eq!(x.is_inf(), f.is_infinite(), "{report}");
        assert_eq!(x.is_zero(), f == 0.0, "{report}");
        if x.is_finite() {
            let (significand, exponent, sign) = f.integer_decode();
            assert_eq!(significand & !HIDDEN_BIT, x.physical_mantissa(), "{report}");
            assert_eq!(
                exponent + (BIAS + MANTISSA_BITS as i32) as i16,
                x.physical_exponent() as i16,
                "{report}"
            );
            assert_eq!((1 - sign) / 2, x.sign_bit() as i8, "{report}");
        }
    }
}
