// ABOUTME: Significant-figure number rendering for quantity display
// ABOUTME: Mirrors printf-style %g: fixed or exponent notation, trailing zeros trimmed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Render `value` with `figures` significant digits using `%g` rules.
///
/// Exponent notation (`1.23e+03`) is used when the decimal exponent is below
/// -4 or at least `figures`; otherwise fixed notation. Trailing zeros and a
/// dangling decimal point are removed in both cases.
#[must_use]
pub fn format_significant(value: f64, figures: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let figures = figures.max(1);
    let scientific = format!("{value:.prec$e}", prec = figures - 1);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let figures_i32 = i32::try_from(figures).unwrap_or(i32::MAX);

    if exponent < -4 || exponent >= figures_i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = usize::try_from(figures_i32 - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_owned()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
