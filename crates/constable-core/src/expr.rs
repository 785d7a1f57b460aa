//! Recovery of a numeric value from preprocessor residue.
//!
//! After macro expansion a syscall number is ideally a bare integer, but
//! some architectures leave arithmetic behind, e.g. `(4000 + 168)` where
//! an offset macro only partially expanded. This evaluator handles exactly
//! the forms observed in kernel headers: it refuses anything outside a
//! small character set and then *sums every numeric token*, respecting no
//! operator at all. That is correct for the additive residue that actually
//! occurs and loudly wrong for everything else, which is the point — an
//! unexpected form must fail rather than be mis-evaluated. The required
//! baseline check downstream is the correctness backstop.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Error;
use crate::Result;

static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9a-fx]+").unwrap());

fn is_allowed(c: char) -> bool {
    c.is_ascii_digit()
        || matches!(c, 'a'..='f')
        || matches!(c, 'x' | '(' | ')' | '+' | ' ' | '\t')
}

/// Sums every decimal or `0x`-prefixed hexadecimal token in `expr`.
///
/// Fails with [`Error::UnsupportedExpr`] if the fragment contains any
/// character outside digits, hex digits, parentheses, `+` and whitespace
/// (so `1 << 2` is refused, not misread), or if a token does not parse as
/// an integer. An empty fragment sums to zero.
pub fn sum_expr(expr: &str) -> Result<i64> {
    if !expr.chars().all(is_allowed) {
        return Err(Error::UnsupportedExpr(expr.to_string()));
    }

    let mut total: i64 = 0;
    for token in NUMBER.find_iter(expr) {
        let value = parse_int(token.as_str())
            .ok_or_else(|| Error::UnsupportedExpr(expr.to_string()))?;
        total = total
            .checked_add(value)
            .ok_or_else(|| Error::UnsupportedExpr(expr.to_string()))?;
    }
    Ok(total)
}

fn parse_int(token: &str) -> Option<i64> {
    if let Some(hex) = token.strip_prefix("0x") {
        i64::from_str_radix(hex, 16).ok()
    } else {
        token.parse().ok()
    }
}
