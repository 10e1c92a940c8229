// Copyright 2023 Redglyph
//
// Integration tests: tests that all the functionalities are accessible and work as expected.

#![cfg(test)]

use ryu_fmt::*;

#[test]
fn write_into_buffer() {
    let mut buf = [0u8; 32];
    let n = write_double(-0.03125, b'f', &mut buf);
    assert_eq!(n, 8);
    assert_eq!(&buf[..n], b"-0.03125");
    assert_eq!(buf[n], 0);
}

#[test]
fn two_pass_sizing() {
    let n = write_double(212123123.123188832, b'e', &mut []);
    let mut buf = vec![0u8; n + 1];
    assert_eq!(write_double(212123123.123188832, b'e', &mut buf), n);
    assert_eq!(&buf[..n], b"2.1212312312318882e8");
}

#[test]
fn buffer_f64() {
    let values: [(f64, u8, &str); 4] = [
        (0.5,       b'f',   "0.5"),
        (1.5,       b'f',   "1.5"),
        (1500.0,    b'e',   "1.5e3"),
        (-0.03125,  b'E',   "-3.125E-2"),
    ];
    let mut buffer = NumFmtBuffer::new();
    for (value, format, exp_string) in values {
        let string: &str = buffer.format(value, format);
        assert_eq!(string, exp_string);
    }
}

#[test]
fn format_interface() {
    assert_eq!(1.25e-20.ftoa(), "0.0000000000000000000125");
    assert_eq!(1.25e-20.etoa(), "1.25e-20");
    assert_eq!(125.0e-20.etoa(), "1.25e-18");
    assert_eq!(1.25e30.etoa(), "1.25e30");
    assert_eq!(dtoa(12.3456789), "12.3456789");
    assert_eq!(dtoa(-0.015), "-0.015");
}
