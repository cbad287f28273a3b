use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};

use crate::types::Money;

/// Display convention for monetary amounts.
///
/// The default renders Moroccan Dirham the way the fr-MA locale does:
/// `.` between thousands, `,` before the decimals, code after the number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    /// Currency code or symbol appended after the number, e.g. "MAD"
    pub symbol: String,
    pub grouping_separator: char,
    pub decimal_separator: char,
    /// Digits after the decimal separator
    pub decimals: u32,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat {
            symbol: "MAD".to_string(),
            grouping_separator: '.',
            decimal_separator: ',',
            decimals: 2,
        }
    }
}

impl CurrencyFormat {
    /// Render `amount`, rounded half away from zero to `decimals` places.
    ///
    /// Negative amounts keep their `-` even when they round to zero.
    pub fn format(&self, amount: Money) -> String {
        let rounded =
            amount.round_dp_with_strategy(self.decimals, RoundingStrategy::MidpointAwayFromZero);
        let negative = amount.is_sign_negative() && !amount.is_zero();

        let plain = format!("{:.*}", self.decimals as usize, rounded.abs());
        let (integer, fraction) = match plain.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (plain.as_str(), None),
        };

        let mut out = String::with_capacity(plain.len() + self.symbol.len() + 8);
        if negative {
            out.push('-');
        }
        out.push_str(&group_digits(integer, self.grouping_separator));
        if let Some(fraction) = fraction {
            out.push(self.decimal_separator);
            out.push_str(fraction);
        }
        if !self.symbol.is_empty() {
            out.push(' ');
            out.push_str(&self.symbol);
        }
        out
    }
}

/// Insert `separator` every three digits counting from the right.
fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// Format an amount as Moroccan Dirham, e.g. `1.234.567,89 MAD`.
pub fn format_currency(amount: Money) -> String {
    CurrencyFormat::default().format(amount)
}
