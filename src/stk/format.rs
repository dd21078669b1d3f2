// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Real-number rendering for STK data lines.
//!
//! Values are written in their shortest round-trip decimal form. Integral
//! values keep a `.0` suffix, magnitudes in `[1e-4, 1e16)` are positional
//! and everything else uses an exponent with an explicit sign and at least
//! two digits:
//!
//! ```text
//! 683.0   -37.0   0.2469   5e-10   1.5e+16
//! ```

/// Smallest exponent rendered positionally.
const MIN_POSITIONAL_EXP: i32 = -4;
/// First exponent rendered in exponent form.
const MAX_POSITIONAL_EXP: i32 = 16;

/// Render `value` for an STK data line.
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "inf" } else { "-inf" };
        return text.to_string();
    }
    if value == 0.0 {
        let text = if value.is_sign_negative() { "-0.0" } else { "0.0" };
        return text.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "-1.25e-7"
    let sci = format!("{value:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return format!("{value}");
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if (MIN_POSITIONAL_EXP..MAX_POSITIONAL_EXP).contains(&exp) {
        let positional = format!("{value}");
        if positional.contains('.') {
            positional
        } else {
            format!("{positional}.0")
        }
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.abs())
    }
}
