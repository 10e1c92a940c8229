// Copyright 2023 Redglyph
//
// Conversion tests on the decimal (digits, exponent) pairs, before any
// serialization.

use crate::*;

fn convert(f: f64) -> (u64, i32) {
    let dec = FloatingDecimal64::from(Double::from(f));
    (dec.digits, dec.exponent)
}

#[test]
fn conversions() {
    let values: &[(f64, u64, i32)] = &[
        // value                    digits                  exponent
        (1.0,                       1,                      0),
        (0.5,                       5,                      -1),
        (0.1,                       1,                      -1),
        (0.3,                       3,                      -1),
        (123.456,                   123456,                 -3),
        (1e100,                     1,                      100),
        (1e-100,                    1,                      -100),
        (3.141592653589793,         3141592653589793,       -15),
        (2.718281828459045,         2718281828459045,       -15),
        (f64::MAX,                  17976931348623157,      292),
        (f64::MIN_POSITIVE,         22250738585072014,      -324),
        (5e-324,                    5,                      -324),
        (1e-323,                    1,                      -323),
        (f64::EPSILON,              2220446049250313,       -31),
        (9223372036854775808.0,     9223372036854776,       3),
    ];
    let mut error = false;
    for (idx, (value, digits, exponent)) in values.iter().enumerate() {
        let (d, e) = convert(*value);
        if d != *digits || e != *exponent {
            error = true;
            println!("test #{idx}: expecting ({digits}, {exponent}) but got ({d}, {e})");
        }
    }
    assert!(!error);
}

#[test]
fn small_integer_fast_path() {
    // exact integers in [1, 2^53) shed their trailing decimal zeros into the
    // exponent
    let values: &[(f64, u64, i32)] = &[
        // value            digits              exponent
        (5000.0,            5,                  3),
        (5123.0,            5123,               0),
        (12000.0,           12,                 3),
        (1000000010000.0,   100000001,          4),
        (2.0,               2,                  0),
        (1048576.0,         1048576,            0),
    ];
    for (value, digits, exponent) in values {
        assert_eq!(convert(*value), (*digits, *exponent), "value = {value}");
    }
}

#[test]
fn powers_of_two() {
    // never end in a decimal zero, so the fast path keeps all digits
    let mut expected = 1u64;
    for k in 0..=52 {
        let f = (1u64 << k) as f64;
        assert_eq!(convert(f), (expected, 0), "k = {k}");
        expected *= 2;
    }
    // 2^53 and above leave the fast path
    assert_eq!(convert(9007199254740992.0), (9007199254740992, 0));
    assert_eq!(convert(18014398509481984.0), (18014398509481984, 0));
}

#[test]
fn subnormals() {
    // the smallest subnormals are exact multiples of 2^-1074
    assert_eq!(convert(f64::from_bits(1)), (5, -324));
    assert_eq!(convert(f64::from_bits(2)), (1, -323));
    assert_eq!(convert(f64::from_bits(3)), (15, -324));
    // largest subnormal
    let largest = f64::from_bits((1u64 << 52) - 1);
    assert_eq!(convert(largest), (2225073858507201, -323));
}

#[test]
fn digit_counts() {
    assert_eq!(decimal_length17(1), 1);
    assert_eq!(decimal_length17(9), 1);
    assert_eq!(decimal_length17(10), 2);
    assert_eq!(decimal_length17(99999999), 8);
    assert_eq!(decimal_length17(100000000), 9);
    assert_eq!(decimal_length17(99999999999999999), 17);
    let mut p = 1u64;
    for digits in 1..=17 {
        assert_eq!(decimal_length17(p), digits, "p = {p}");
        p = p.saturating_mul(10);
    }
}
