// Copyright 2023 Redglyph
//
// Implementation of the Ryū algorithm for IEEE-754 double-precision floating-point
// values, as described in the following article:
//
//     Ulf Adams, "Ryū: Fast Float-to-String Conversion", PLDI 2018,
//     https://dl.acm.org/doi/10.1145/3192366.3192369
//
// The conversion to the shortest decimal follows Ulf Adams' reference
// implementation, found at
//
//     https://github.com/ulfjack/ryu
//
// with the following licence:
//
//     Copyright 2018 Ulf Adams
//
//     Distributed under the Apache License, Version 2.0, or the Boost Software
//     License, Version 1.0.
//      (See accompanying files LICENSE-Apache and LICENSE-Boost)

mod maths;
mod tables;
mod tests;

use crate::maths::*;
use crate::tables::*;

// ---------------------------------------------------------------------------------------------
// IEEE-754 double precision:
//
// - bit 63: sign, 0 = positive, 1 = negative
// - bits 62-52: biased exponent (11 bits)
// - bits 51-00: mantissa (52 bits) of 53-bit normalized significand (MSB "hidden" since always '1')
//
// finite value = -1 ^ sign * (1.mantissa) * 2 ^ (e - 1023)

type BitsType = u64;

const MANTISSA_BITS: u32 = 52;
const EXPONENT_BITS: u32 = 11;
const BIAS: i32 = 1023;

const MAX_IEEE_EXPONENT: BitsType = (1 << EXPONENT_BITS) - 1;
const HIDDEN_BIT: BitsType = (1 as BitsType) << MANTISSA_BITS;
const MANTISSA_MASK: BitsType = HIDDEN_BIT - 1;
const EXPONENT_MASK: BitsType = MAX_IEEE_EXPONENT << MANTISSA_BITS;
const SIGN_MASK: BitsType = (1 as BitsType) << 63;

enum Encoding {
    NaN,    // not a number
    Inf,    // +infinity or -infinity number
    Zero,   // zero finite number
    Digits, // non-zero finite number
}

#[derive(Debug)]
/// IEEE-754 double-precision floating-point value
struct Double {
    bits: BitsType,
}

impl Double {
    /// Creates a new [Double] value from the IEEE-754 binary encoding
    fn new(bits: BitsType) -> Self {
        Double { bits }
    }

    /// Mantissa component (significand without its hidden MSB)
    fn physical_mantissa(&self) -> BitsType {
        self.bits & MANTISSA_MASK
    }

    /// Biased exponent component
    fn physical_exponent(&self) -> BitsType {
        (self.bits & EXPONENT_MASK) >> MANTISSA_BITS
    }

    /// Encoding class (zero, finite, inf or nan)
    fn encoding(&self) -> Encoding {
        if self.bits & !SIGN_MASK == 0 {
            Encoding::Zero
        } else if self.bits & EXPONENT_MASK != EXPONENT_MASK {
            Encoding::Digits
        } else if self.bits & MANTISSA_MASK == 0 {
            Encoding::Inf
        } else {
            Encoding::NaN
        }
    }

    /// Whether the value is finite in the form `-1 ^ sign * (1.mantissa) * 2 ^ (e - 1023)`
    fn is_finite(&self) -> bool {
        self.bits & EXPONENT_MASK != EXPONENT_MASK
    }

    /// Whether the value is positive / negative infinity
    fn is_inf(&self) -> bool {
        self.bits & EXPONENT_MASK == EXPONENT_MASK && self.bits & MANTISSA_MASK == 0
    }

    /// Whether the value is not a number (neither finite or infinite)
    fn is_nan(&self) -> bool {
        self.bits & EXPONENT_MASK == EXPONENT_MASK && self.bits & MANTISSA_MASK != 0
    }

    /// Whether the value is null
    fn is_zero(&self) -> bool {
        self.bits & !SIGN_MASK == 0
    }

    /// Sign: 0 = positive, 1 = negative
    fn sign_bit(&self) -> usize {
        usize::from(self.bits & SIGN_MASK != 0)
    }
}

impl From<f64> for Double {
    fn from(f: f64) -> Self {
        Double::new(f.to_bits())
    }
}

// ---------------------------------------------------------------------------------------------

/// Decimal representation `digits` * 10^`exponent` of a finite double
struct FloatingDecimal64 {
    digits: u64,   // 1 to 17 decimal digits, no trailing decimal zeros
    exponent: i32, // -324 to 308
}

impl From<Double> for FloatingDecimal64 {
    /// Builds the shortest decimal representation that reads back to the same
    /// value under round-to-nearest-even.
    fn from(double: Double) -> Self {
        let ieee_mantissa = double.physical_mantissa();
        let ieee_exponent = double.physical_exponent() as u32;

        // Exact integers in [1, 2^53) skip the interval search; their trailing
        // decimal zeros migrate into the exponent.
        if ieee_exponent != 0 {
            let m2 = HIDDEN_BIT | ieee_mantissa;
            let e2 = ieee_exponent as i32 - BIAS - MANTISSA_BITS as i32;
            if (-52..=0).contains(&e2) && multiple_of_pow2(m2, (-e2) as u32) {
                let mut digits = m2 >> -e2;
                let mut exponent = 0;
                loop {
                    let q = digits / 10;
                    let r = (digits as u32).wrapping_sub(10u32.wrapping_mul(q as u32));
                    if r != 0 {
                        break;
                    }
                    digits = q;
                    exponent += 1;
                }
                return FloatingDecimal64 { digits, exponent };
            }
        }

        d2d(ieee_mantissa, ieee_exponent)
    }
}

/// Shortest-decimal conversion of a finite, non-zero double given by its raw
/// IEEE-754 components.
///
/// The significand is scaled by 4 so that the halfway points to the two
/// neighboring doubles become the integers `mv - 1 - mm_shift` and `mv + 2`;
/// multiplying by a 125-bit power of five brings the triple into a decimal
/// power base where trailing digits can be stripped until the interval no
/// longer allows it.
fn d2d(ieee_mantissa: u64, ieee_exponent: u32) -> FloatingDecimal64 {
    // Subtracting 2 more gives the bounds computation 2 additional bits.
    let (e2, m2) = if ieee_exponent == 0 {
        (1 - BIAS - MANTISSA_BITS as i32 - 2, ieee_mantissa)
    } else {
        (
            ieee_exponent as i32 - BIAS - MANTISSA_BITS as i32 - 2,
            HIDDEN_BIT | ieee_mantissa,
        )
    };
    let even = m2 & 1 == 0;
    let accept_bounds = even;

    let mv = 4 * m2;
    // The lower halfway point is twice as close when the mantissa is all
    // zeros, except for the smallest normal.
    let mm_shift = (ieee_mantissa != 0 || ieee_exponent <= 1) as u32;

    // Convert to a decimal power base.
    let mut vr: u64;
    let mut vp = 0u64;
    let mut vm = 0u64;
    let e10: i32;
    let mut vm_is_trailing_zeros = false;
    let mut vr_is_trailing_zeros = false;
    if e2 >= 0 {
        // Slightly faster than max(0, floor_log10_pow2(e2) - 1).
        let q = floor_log10_pow2(e2) - (e2 > 3) as u32;
        e10 = q as i32;
        let k = POW5_INV_BITCOUNT + ceil_log2_pow5(q as i32) - 1;
        let j = (-e2 + q as i32 + k) as u32;
        vr = mul_shift_all_64(m2, &inv_pow5(q), j, &mut vp, &mut vm, mm_shift);
        if q <= 21 {
            // Only one of mm, mv and mp can be a multiple of 5, if any.
            let mv_mod5 = (mv as u32).wrapping_sub(5u32.wrapping_mul((mv / 5) as u32));
            if mv_mod5 == 0 {
                vr_is_trailing_zeros = multiple_of_pow5(mv, q);
            } else if accept_bounds {
                // Same as min(e2 + (~mm & 1), pow5_factor(mm)) >= q, since e2 >= q.
                vm_is_trailing_zeros = multiple_of_pow5(mv - 1 - mm_shift as u64, q);
            } else {
                // Same as min(e2 + 1, pow5_factor(mp)) >= q.
                vp -= multiple_of_pow5(mv + 2, q) as u64;
            }
        }
    } else {
        // Slightly faster than max(0, floor_log10_pow5(-e2) - 1).
        let q = floor_log10_pow5(-e2) - (-e2 > 1) as u32;
        e10 = q as i32 + e2;
        let i = -e2 - q as i32;
        let k = ceil_log2_pow5(i) - POW5_BITCOUNT;
        let j = (q as i32 - k) as u32;
        vr = mul_shift_all_64(m2, &pow5(i as u32), j, &mut vp, &mut vm, mm_shift);
        if q <= 1 {
            // {vr,vp,vm} has trailing zeros if {mv,mp,mm} has at least q
            // trailing 0 bits; mv = 4 m2 always has at least two.
            vr_is_trailing_zeros = true;
            if accept_bounds {
                // mm = mv - 1 - mm_shift has one trailing 0 bit iff mm_shift == 1.
                vm_is_trailing_zeros = mm_shift == 1;
            } else {
                // mp = mv + 2 always has at least one trailing 0 bit.
                vp -= 1;
            }
        } else if q < 63 {
            // The scaled value has at least q trailing zeros iff mv is
            // divisible by 2^q, since -e2 >= q covers the factor-5 part.
            vr_is_trailing_zeros = multiple_of_pow2(mv, q);
        }
    }

    // Find the shortest representation inside the interval; on average about
    // two digits are removed.
    let mut removed = 0;
    let mut last_removed_digit = 0u8;
    let output = if vm_is_trailing_zeros || vr_is_trailing_zeros {
        // General case, which happens rarely (~0.7%).
        loop {
            let vp_div10 = vp / 10;
            let vm_div10 = vm / 10;
            if vp_div10 <= vm_div10 {
                break;
            }
            let vm_mod10 = (vm as u32).wrapping_sub(10u32.wrapping_mul(vm_div10 as u32));
            let vr_div10 = vr / 10;
            let vr_mod10 = (vr as u32).wrapping_sub(10u32.wrapping_mul(vr_div10 as u32));
            vm_is_trailing_zeros &= vm_mod10 == 0;
            vr_is_trailing_zeros &= last_removed_digit == 0;
            last_removed_digit = vr_mod10 as u8;
            vr = vr_div10;
            vp = vp_div10;
            vm = vm_div10;
            removed += 1;
        }
        if vm_is_trailing_zeros {
            loop {
                let vm_div10 = vm / 10;
                let vm_mod10 = (vm as u32).wrapping_sub(10u32.wrapping_mul(vm_div10 as u32));
                if vm_mod10 != 0 {
                    break;
                }
                let vp_div10 = vp / 10;
                let vr_div10 = vr / 10;
                let vr_mod10 = (vr as u32).wrapping_sub(10u32.wrapping_mul(vr_div10 as u32));
                vr_is_trailing_zeros &= last_removed_digit == 0;
                last_removed_digit = vr_mod10 as u8;
                vr = vr_div10;
                vp = vp_div10;
                vm = vm_div10;
                removed += 1;
            }
        }
        if vr_is_trailing_zeros && last_removed_digit == 5 && vr % 2 == 0 {
            // The exact number ends in ...50..0: round down to even.
            last_removed_digit = 4;
        }
        // vr + 1 if vr is outside bounds or the removed digits round up.
        vr + ((vr == vm && (!accept_bounds || !vm_is_trailing_zeros)) || last_removed_digit >= 5)
            as u64
    } else {
        // Specialized for the common case (~99.3%); removing two digits at
        // once succeeds most of the time.
        let mut round_up = false;
        let vp_div100 = vp / 100;
        let vm_div100 = vm / 100;
        if vp_div100 > vm_div100 {
            let vr_div100 = vr / 100;
            let vr_mod100 = (vr as u32).wrapping_sub(100u32.wrapping_mul(vr_div100 as u32));
            round_up = vr_mod100 >= 50;
            vr = vr_div100;
            vp = vp_div100;
            vm = vm_div100;
            removed += 2;
        }
        loop {
            let vp_div10 = vp / 10;
            let vm_div10 = vm / 10;
            if vp_div10 <= vm_div10 {
                break;
            }
            let vr_div10 = vr / 10;
            let vr_mod10 = (vr as u32).wrapping_sub(10u32.wrapping_mul(vr_div10 as u32));
            round_up = vr_mod10 >= 5;
            vr = vr_div10;
            vp = vp_div10;
            vm = vm_div10;
            removed += 1;
        }
        vr + (vr == vm || round_up) as u64
    };

    FloatingDecimal64 {
        digits: output,
        exponent: e10 + removed,
    }
}

// ---------------------------------------------------------------------------------------------
// Canonical scientific serialization

/// Number of decimal digits of `v`, with `v < 10^17`.
fn decimal_length17(v: u64) -> usize {
    debug_assert!(v < 100_000_000_000_000_000);
    // The average output length is 16.38 digits, so check high to low.
    if v >= 10_000_000_000_000_000 {
        17
    } else if v >= 1_000_000_000_000_000 {
        16
    } else if v >= 100_000_000_000_000 {
        15
    } else if v >= 10_000_000_000_000 {
        14
    } else if v >= 1_000_000_000_000 {
        13
    } else if v >= 100_000_000_000 {
        12
    } else if v >= 10_000_000_000 {
        11
    } else if v >= 1_000_000_000 {
        10
    } else if v >= 100_000_000 {
        9
    } else if v >= 10_000_000 {
        8
    } else if v >= 1_000_000 {
        7
    } else if v >= 100_000 {
        6
    } else if v >= 10_000 {
        5
    } else if v >= 1_000 {
        4
    } else if v >= 100 {
        3
    } else if v >= 10 {
        2
    } else {
        1
    }
}

/// All two-digit numbers, used to emit decimal digits in pairs.
static DIGIT_TABLE: &[u8; 200] = &[
    b'0', b'0', b'0', b'1', b'0', b'2', b'0', b'3', b'0', b'4', b'0', b'5', b'0', b'6', b'0', b'7', b'0', b'8', b'0', b'9',
    b'1', b'0', b'1', b'1', b'1', b'2', b'1', b'3', b'1', b'4', b'1', b'5', b'1', b'6', b'1', b'7', b'1', b'8', b'1', b'9',
    b'2', b'0', b'2', b'1', b'2', b'2', b'2', b'3', b'2', b'4', b'2', b'5', b'2', b'6', b'2', b'7', b'2', b'8', b'2', b'9',
    b'3', b'0', b'3', b'1', b'3', b'2', b'3', b'3', b'3', b'4', b'3', b'5', b'3', b'6', b'3', b'7', b'3', b'8', b'3', b'9',
    b'4', b'0', b'4', b'1', b'4', b'2', b'4', b'3', b'4', b'4', b'4', b'5', b'4', b'6', b'4', b'7', b'4', b'8', b'4', b'9',
    b'5', b'0', b'5', b'1', b'5', b'2', b'5', b'3', b'5', b'4', b'5', b'5', b'5', b'6', b'5', b'7', b'5', b'8', b'5', b'9',
    b'6', b'0', b'6', b'1', b'6', b'2', b'6', b'3', b'6', b'4', b'6', b'5', b'6', b'6', b'6', b'7', b'6', b'8', b'6', b'9',
    b'7', b'0', b'7', b'1', b'7', b'2', b'7', b'3', b'7', b'4', b'7', b'5', b'7', b'6', b'7', b'7', b'7', b'8', b'7', b'9',
    b'8', b'0', b'8', b'1', b'8', b'2', b'8', b'3', b'8', b'4', b'8', b'5', b'8', b'6', b'8', b'7', b'8', b'8', b'8', b'9',
    b'9', b'0', b'9', b'1', b'9', b'2', b'9', b'3', b'9', b'4', b'9', b'5', b'9', b'6', b'9', b'7', b'9', b'8', b'9', b'9',
];

/// Converts `value` into 2 decimal ASCII digits at `offset`, 0 <= `value` <= 99.
#[inline]
fn write_2digits(buf: &mut [u8], offset: usize, value: u32) {
    debug_assert!(value <= 99);
    let d = 2 * value as usize;
    buf[offset..offset + 2].copy_from_slice(&DIGIT_TABLE[d..d + 2]);
}

/// Renders the decimal pair into the canonical scientific form
/// `[-]d(.ddd…)E[-]dd(d)` and returns the number of bytes written.
///
/// The digits are emitted in pairs, backwards from the last position; the
/// slot after the leading digit is left open for the decimal dot.
fn to_chars(v: &FloatingDecimal64, sign: bool, result: &mut [u8]) -> usize {
    let mut index = 0;
    if sign {
        result[0] = b'-';
        index = 1;
    }

    let mut output = v.digits;
    let olength = decimal_length17(output);

    let mut i = 0;
    // 32-bit operations are preferred even on 64-bit platforms; at most 17
    // digits, so cutting off 8 leaves a value that fits in a u32.
    if (output >> 32) != 0 {
        // One expensive 64-bit division.
        let q = output / 100_000_000;
        let mut output2 = (output as u32).wrapping_sub(100_000_000u32.wrapping_mul(q as u32));
        output = q;

        let c = output2 % 10_000;
        output2 /= 10_000;
        let d = output2 % 10_000;
        write_2digits(result, index + olength - i - 1, c % 100);
        write_2digits(result, index + olength - i - 3, c / 100);
        write_2digits(result, index + olength - i - 5, d % 100);
        write_2digits(result, index + olength - i - 7, d / 100);
        i += 8;
    }
    let mut output2 = output as u32;
    while output2 >= 10_000 {
        let c = output2 % 10_000;
        output2 /= 10_000;
        write_2digits(result, index + olength - i - 1, c % 100);
        write_2digits(result, index + olength - i - 3, c / 100);
        i += 4;
    }
    if output2 >= 100 {
        write_2digits(result, index + olength - i - 1, output2 % 100);
        output2 /= 100;
        i += 2;
    }
    if output2 >= 10 {
        let c = 2 * output2 as usize;
        // No pair copy here: the decimal dot goes between these two digits.
        result[index + olength - i] = DIGIT_TABLE[c + 1];
        result[index] = DIGIT_TABLE[c];
    } else {
        result[index] = b'0' + output2 as u8;
    }

    if olength > 1 {
        result[index + 1] = b'.';
        index += olength + 1;
    } else {
        index += 1;
    }

    result[index] = b'E';
    index += 1;
    let mut exp = v.exponent + olength as i32 - 1;
    if exp < 0 {
        result[index] = b'-';
        index += 1;
        exp = -exp;
    }
    if exp >= 100 {
        write_2digits(result, index, (exp / 10) as u32);
        result[index + 2] = b'0' + (exp % 10) as u8;
        index += 3;
    } else if exp >= 10 {
        write_2digits(result, index, exp as u32);
        index += 2;
    } else {
        result[index] = b'0' + exp as u8;
        index += 1;
    }

    index
}

/// Emits `Infinity`, `-Infinity`, `0E0` or `-0E0`.
fn copy_special_str(result: &mut [u8], sign: bool, inf: bool) -> usize {
    let mut index = 0;
    if sign {
        result[0] = b'-';
        index = 1;
    }
    if inf {
        result[index..index + 8].copy_from_slice(b"Infinity");
        return index + 8;
    }
    result[index..index + 3].copy_from_slice(b"0E0");
    index + 3
}

/// Writes the canonical scientific representation of `value` into `buf` and
/// returns its length.
fn write_canonical(value: f64, buf: &mut [u8]) -> usize {
    let double = Double::from(value);
    let sign = double.sign_bit() != 0;
    match double.encoding() {
        Encoding::NaN => {
            // the sign is dropped, whatever the payload
            buf[..3].copy_from_slice(b"NaN");
            3
        }
        Encoding::Inf => copy_special_str(buf, sign, true),
        Encoding::Zero => copy_special_str(buf, sign, false),
        Encoding::Digits => {
            let dec = FloatingDecimal64::from(double);
            to_chars(&dec, sign, buf)
        }
    }
}

// ---------------------------------------------------------------------------------------------
// Buffered output

/// Longest canonical scientific string: sign + 17 digits + dot + 'E' + signed
/// 3-digit exponent.
const CANONICAL_LEN: usize = 25;

/// Counting byte sink: every byte is counted, only those that fit are stored.
struct Writer<'a> {
    dst: &'a mut [u8],
    count: usize,
}

impl<'a> Writer<'a> {
    fn new(dst: &'a mut [u8]) -> Self {
        Writer { dst, count: 0 }
    }

    fn write_byte(&mut self, b: u8) {
        if self.count < self.dst.len() {
            self.dst[self.count] = b;
        }
        self.count += 1;
    }

    fn write_all(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.write_byte(b);
        }
    }

    /// NUL-terminates after the content if it fits, in the last slot otherwise.
    fn terminate(&mut self) {
        let n = self.dst.len();
        if n > self.count {
            self.dst[self.count] = 0;
        } else if n > 0 {
            self.dst[n - 1] = 0;
        }
    }
}

/// Bounded parse of the canonical exponent field; always within [-323, 308].
fn parse_exponent(bytes: &[u8]) -> i32 {
    let (neg, digits) = match bytes.split_first() {
        Some((&b'-', rest)) => (true, rest),
        _ => (false, bytes),
    };
    let mut exp = 0i32;
    for &b in digits {
        exp = exp * 10 + (b - b'0') as i32;
    }
    if neg {
        -exp
    } else {
        exp
    }
}

/// Rewrites the canonical scientific string into the requested presentation.
fn reformat(canonical: &[u8], format: u8, wr: &mut Writer) {
    let mut p = canonical;
    if p.first() == Some(&b'-') {
        wr.write_byte(b'-');
        p = &p[1..];
    }
    let e = match p.iter().position(|&b| b == b'E') {
        Some(e) => e,
        None => {
            // NaN and Infinity pass through in every valid mode.
            wr.write_all(p);
            return;
        }
    };
    if format != b'f' {
        wr.write_all(&p[..e]);
        wr.write_byte(format);
        wr.write_all(&p[e + 1..]);
        return;
    }

    let exp = parse_exponent(&p[e + 1..]);
    let first = p[0];
    let rest = if e > 1 { &p[2..e] } else { &[] as &[u8] };
    if exp < 0 {
        // 0.(000…)digits
        wr.write_byte(b'0');
        wr.write_byte(b'.');
        for _ in 0..-exp - 1 {
            wr.write_byte(b'0');
        }
        wr.write_byte(first);
        wr.write_all(rest);
    } else {
        // Decimal dot shifted right by `exp` places, zero-padded; a whole
        // number drops the dot and any lone zero fraction.
        wr.write_byte(first);
        let en = exp as usize;
        for i in 0..en {
            wr.write_byte(*rest.get(i).unwrap_or(&b'0'));
        }
        let tail = if en < rest.len() { &rest[en..] } else { &[] as &[u8] };
        if !tail.is_empty() && tail != b"0" {
            wr.write_byte(b'.');
            wr.write_all(tail);
        }
    }
}

/// Converts `value` into its shortest round-trip decimal representation and
/// writes it into `dst` in the presentation selected by `format`:
///
/// * `b'f'`: plain decimal, e.g. `212123123.12318882`, `-0.015`, `5000`
/// * `b'e'`: scientific, e.g. `2.1212312312318882e8`
/// * `b'E'`: scientific with an uppercase exponent marker
///
/// Any other format byte produces the empty string.
///
/// At most `dst.len() - 1` bytes are written and, unless `dst` is empty, the
/// output is always NUL-terminated. The returned value is the length the
/// untruncated output would have (excluding the terminator), so a call with
/// an empty `dst` sizes the output without writing anything:
///
/// ```
/// use ryu_fmt::write_double;
///
/// let mut buf = [0u8; 32];
/// let n = write_double(-112.89123883, b'f', &mut buf);
/// assert_eq!(&buf[..n], b"-112.89123883");
/// assert_eq!(write_double(-112.89123883, b'f', &mut []), n);
/// ```
pub fn write_double(value: f64, format: u8, dst: &mut [u8]) -> usize {
    let mut buf = [0u8; CANONICAL_LEN];
    let len = match format {
        b'f' | b'e' | b'E' => write_canonical(value, &mut buf),
        _ => 0,
    };
    let mut wr = Writer::new(dst);
    reformat(&buf[..len], format, &mut wr);
    wr.terminate();
    wr.count
}

// ---------------------------------------------------------------------------------------------

/// Reusable formatting buffer, large enough for any double in any mode.
pub struct NumFmtBuffer {
    bytes: [u8; BUFFER_LEN],
}

/// Worst case is the smallest subnormal in `'f'` presentation: sign, `0.`,
/// 323 zeros, 17 digits and the NUL terminator.
const BUFFER_LEN: usize = 352;

impl NumFmtBuffer {
    pub fn new() -> Self {
        NumFmtBuffer {
            bytes: [0; BUFFER_LEN],
        }
    }

    /// Formats `value` in the given presentation (`b'f'`, `b'e'` or `b'E'`)
    /// and returns the result as a string slice into the buffer. An unknown
    /// format byte yields the empty string.
    pub fn format(&mut self, value: f64, format: u8) -> &str {
        let len = write_double(value, format, &mut self.bytes);
        debug_assert!(len < BUFFER_LEN);
        // the output only contains ASCII characters:
        unsafe { std::str::from_utf8_unchecked(&self.bytes[..len]) }
    }
}

impl Default for NumFmtBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Shortest round-trip formatting of floating-point values.
pub trait FormatInterface {
    /// Formats the value in plain decimal form.
    fn ftoa(&self) -> String;
    /// Formats the value in scientific form.
    fn etoa(&self) -> String;
}

impl FormatInterface for f64 {
    fn ftoa(&self) -> String {
        NumFmtBuffer::new().format(*self, b'f').to_string()
    }

    fn etoa(&self) -> String {
        NumFmtBuffer::new().format(*self, b'e').to_string()
    }
}

/// Converts the given double-precision number into its shortest plain decimal
/// form.
///
/// ```
/// use ryu_fmt::dtoa;
///
/// assert_eq!(dtoa(12.3456789), "12.3456789");
/// assert_eq!(dtoa(-0.015), "-0.015");
/// assert_eq!(dtoa(5000.0), "5000");
/// ```
///
/// The output is optimal, i.e. the output string
///  1. rounds back to the input number when read in (using round-to-nearest-even)
///  2. is as short as possible,
///  3. is as close to the input number as possible.
pub fn dtoa(value: f64) -> String {
    value.ftoa()
}
