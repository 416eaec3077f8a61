//! Fixed-decimal float formatting for the numeric displays.
//!
//! Float-to-decimal formatting through `format!` has panicked on wasm in some
//! toolchain/browser combinations (`dragon.rs`). These helpers avoid it: the
//! f64 is split into its integer mantissa and binary exponent, multiplied by
//! `10^decimals` in `u128`, and rounded exactly, so the result is the one
//! `Number.prototype.toFixed` gives:
//!
//! - rounding is on the exact binary value (0.015 is 0.01499… and shows `0.01`),
//!   with exact ties going away from zero;
//! - negative values that round to zero keep their sign (`-0.00`);
//! - magnitudes of 1e21 and above switch to exponent form (`1e+21`).

/// Above this magnitude `toFixed` falls back to exponent notation.
const FIXED_LIMIT: f64 = 1e21;

#[inline]
pub fn fmt_fixed(v: f64, decimals: usize) -> String {
    if !v.is_finite() {
        return non_finite(v);
    }

    let a = v.abs();
    let mut out = String::new();
    if v < 0.0 {
        out.push('-');
    }
    if a >= FIXED_LIMIT {
        out.push_str(&exponent_form(a));
        return out;
    }

    let decimals = decimals.min(9);
    let scale = 10_u128.pow(decimals as u32);
    let n = scaled_round(a, scale);

    out.push_str(&(n / scale).to_string());
    if decimals > 0 {
        out.push('.');
        let frac = (n % scale).to_string();
        for _ in 0..decimals.saturating_sub(frac.len()) {
            out.push('0');
        }
        out.push_str(&frac);
    }
    out
}

/// Two decimals, the precision used by every numeric display.
#[inline]
pub fn fmt_2dp(v: f64) -> String {
    fmt_fixed(v, 2)
}

/// `round(a * scale)` computed on the exact value of `a`, ties up.
///
/// `a` is finite, non-negative and below 1e21, so `mantissa * scale << exp`
/// stays under 2^100.
fn scaled_round(a: f64, scale: u128) -> u128 {
    let bits = a.to_bits();
    let exp_bits = ((bits >> 52) & 0x7ff) as i32;
    let frac = bits & ((1_u64 << 52) - 1);
    let (mantissa, exp) = if exp_bits == 0 {
        (frac, -1074)
    } else {
        (frac | (1_u64 << 52), exp_bits - 1075)
    };

    let n = mantissa as u128 * scale;
    if exp >= 0 {
        return n << exp;
    }

    let k = (-exp) as u32;
    // n < 2^83, so it is below half of 2^k and rounds to zero.
    if k > 100 {
        return 0;
    }
    let q = n >> k;
    let r = n & ((1_u128 << k) - 1);
    let half = 1_u128 << (k - 1);
    if r >= half {
        q + 1
    } else {
        q
    }
}

/// Shortest `d.ddde+X` spelling of `a` (≥ 1e21) that parses back to `a`.
fn exponent_form(a: f64) -> String {
    let mut exp = a.log10().floor() as i32;
    // log10 can land one off next to a power of ten.
    if 10_f64.powi(exp) > a {
        exp -= 1;
    } else if 10_f64.powi(exp + 1) <= a {
        exp += 1;
    }

    let mut candidate = String::new();
    for precision in 1..=17 {
        let mut e = exp;
        let mut digits = (a / 10_f64.powi(exp - (precision - 1))).round();
        if digits >= 10_f64.powi(precision) {
            digits = (digits / 10.0).round();
            e += 1;
        }
        candidate = scientific(digits as u64, e);
        if candidate.parse::<f64>() == Ok(a) {
            break;
        }
    }
    candidate
}

fn scientific(digits: u64, exp: i32) -> String {
    let ds = digits.to_string();
    let ds = ds.trim_end_matches('0');
    let ds = if ds.is_empty() { "0" } else { ds };

    let mut out = String::new();
    out.push_str(&ds[..1]);
    if ds.len() > 1 {
        out.push('.');
        out.push_str(&ds[1..]);
    }
    out.push_str("e+");
    out.push_str(&exp.to_string());
    out
}

fn non_finite(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_sign_positive() {
        "Infinity".to_string()
    } else {
        "-Infinity".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_decimals() {
        assert_eq!(fmt_2dp(0.75), "0.75");
        assert_eq!(fmt_2dp(0.0), "0.00");
        assert_eq!(fmt_2dp(100.0), "100.00");
        assert_eq!(fmt_2dp(-50.0), "-50.00");
        assert_eq!(fmt_2dp(1.23456), "1.23");
        assert_eq!(fmt_2dp(-0.126), "-0.13");
        assert_eq!(fmt_2dp(0.07), "0.07");
    }

    #[test]
    fn tiny_negatives_keep_their_sign() {
        assert_eq!(fmt_2dp(-0.001), "-0.00");
        assert_eq!(fmt_2dp(-0.0), "0.00");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(fmt_2dp(f64::NAN), "NaN");
        assert_eq!(fmt_2dp(f64::INFINITY), "Infinity");
        assert_eq!(fmt_2dp(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn rounds_the_exact_binary_value() {
        // 0.015 and 1.005 are stored just below the half-cent.
        assert_eq!(fmt_2dp(0.015), "0.01");
        assert_eq!(fmt_2dp(1.005), "1.00");
        assert_eq!(fmt_2dp(-0.015), "-0.01");
        // 0.125 is exact, so the tie goes away from zero.
        assert_eq!(fmt_2dp(0.125), "0.13");
        assert_eq!(fmt_2dp(-0.125), "-0.13");
        assert_eq!(fmt_2dp(5e-324), "0.00");
    }

    #[test]
    fn large_finite_values_stay_fixed() {
        assert_eq!(fmt_2dp(1e17), "100000000000000000.00");
        assert_eq!(fmt_2dp(-2e17), "-200000000000000000.00");
        assert_eq!(fmt_2dp(9007199254740993.0), "9007199254740992.00");
        assert_eq!(fmt_2dp(1e20), "100000000000000000000.00");
    }

    #[test]
    fn huge_values_use_exponent_form() {
        assert_eq!(fmt_2dp(1e21), "1e+21");
        assert_eq!(fmt_2dp(-1.5e22), "-1.5e+22");
        assert_eq!(fmt_2dp(1e300), "1e+300");
    }

    #[test]
    fn zero_decimals() {
        assert_eq!(fmt_fixed(2.5, 0), "3");
        assert_eq!(fmt_fixed(-7.4, 0), "-7");
    }
}
