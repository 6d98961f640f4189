//! Fixed significant-figure cell formatting.
//!
//! Mirrors printf `%.3G`: three significant digits, fixed or E-notation
//! depending on magnitude, trailing zeros trimmed.

const SIG_DIGITS: i32 = 3;

/// Format a value to three significant figures in `%.3G` style.
pub fn format_g3(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    if !v.is_finite() {
        return format!("{v}");
    }

    // Round to the significant-digit budget first; the exponent can shift up
    // when the rounding crosses a power of ten (999.6 -> 1E+03).
    let exp = v.abs().log10().floor() as i32;
    let scale = 10f64.powi(SIG_DIGITS - 1 - exp);
    let rounded = (v * scale).round() / scale;
    let exp = rounded.abs().log10().floor() as i32;

    if exp < -4 || exp >= SIG_DIGITS {
        let mantissa = rounded / 10f64.powi(exp);
        let mut m = format!("{:.*}", (SIG_DIGITS - 1) as usize, mantissa);
        trim_trailing_zeros(&mut m);
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{m}E{sign}{:02}", exp.abs())
    } else {
        let decimals = (SIG_DIGITS - 1 - exp).max(0) as usize;
        let mut s = format!("{rounded:.decimals$}");
        trim_trailing_zeros(&mut s);
        s
    }
}

fn trim_trailing_zeros(s: &mut String) {
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
}
