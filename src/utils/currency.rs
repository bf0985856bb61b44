use std::fmt::Write;

/// Decimal places needed to tell ticks `step` apart: 0 for steps of one
/// dollar or more, otherwise enough digits to show the step.
pub fn decimals_for_step(step: f64) -> usize {
    if !(step > 0.0) || !step.is_finite() || step >= 1.0 {
        return 0;
    }
    (-step.log10().floor()).max(0.0) as usize
}

/// `$1,234.56`, negative values as `-$5.00`.
pub fn format_currency(value: f64, decimals: usize) -> String {
    let mut out = String::with_capacity(16);
    write_currency(&mut out, value, decimals);
    out
}

/// Same as [`format_currency`] but clears and reuses `out`.
pub fn write_currency(out: &mut String, value: f64, decimals: usize) {
    out.clear();
    if !value.is_finite() {
        let _ = write!(out, "{}", value);
        return;
    }

    let mut digits = String::with_capacity(24);
    let _ = write!(digits, "{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match digits.find('.') {
        Some(dot) => digits.split_at(dot),
        None => (digits.as_str(), ""),
    };

    // "-0.00" would be noise.
    let is_zero = digits.bytes().all(|b| b == b'0' || b == b'.');
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.push('$');
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push_str(frac_part);
}
