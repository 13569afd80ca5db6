//! Display formatting for dashboard amounts.
//!
//! Currency follows the en-US USD convention: `$` prefix, comma thousands
//! separators, two fraction digits, and a leading minus for negative values
//! (`-$9.99`).

use format_num::format_num;

/// Placeholder shown instead of the total balance while it is hidden
pub const DEFAULT_BALANCE_MASK: &str = "••••••";

/// Largest whole-dollar part that still groups exactly through an `f64`
const MAX_EXACT_DOLLARS: u64 = 1 << 53;

/// `67420.5` -> `$67,420.50`, `-9.99` -> `-$9.99`
///
/// Cents are rounded half-up on the shortest decimal text of the amount, so
/// `1123.675` prints `$1,123.68` even though the nearest `f64` lies just below
/// the halfway point.
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    match round_cents(amount.abs()) {
        Some((dollars, cents)) => {
            format!("{sign}${}.{cents:02}", format_num!(",.0f", dollars as f64))
        }
        None => format!("{sign}${}", format_num!(",.2", amount.abs())),
    }
}

/// Split a non-negative amount into whole dollars and cents, rounding the
/// third fraction digit of its shortest decimal form half-up.
///
/// `None` for non-finite amounts and dollar parts too large to group exactly.
fn round_cents(amount: f64) -> Option<(u64, u8)> {
    // `Display` for f64 never uses exponent notation
    let text = amount.to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let dollars: u64 = whole.parse().ok()?;

    let mut digits = fraction.bytes().map(|b| u64::from(b - b'0')).chain(std::iter::repeat(0));
    let (tenths, hundredths, thousandths) = (digits.next()?, digits.next()?, digits.next()?);

    let mut cents = tenths * 10 + hundredths;
    if thousandths >= 5 {
        cents += 1;
    }
    let dollars = dollars.checked_add(cents / 100)?;
    if dollars > MAX_EXACT_DOLLARS {
        return None;
    }
    Some((dollars, (cents % 100) as u8))
}

/// Currency rounded to whole dollars: `22450.0` -> `$22,450`
pub fn format_whole_dollars(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${}", format_num!(",.0f", amount.abs().round()))
}

/// `61.2` -> `61.2%`
pub fn format_percent(rate: f64) -> String {
    format!("{:.1}%", rate)
}

/// Month-over-month change line: `+12.5% from last month`
pub fn format_change(change_percent: f64) -> String {
    let sign = if change_percent >= 0.0 { "+" } else { "-" };
    format!("{}{:.1}% from last month", sign, change_percent.abs())
}
