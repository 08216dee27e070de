//! Money, number and date display helpers
//!
//! Defaults follow the Brazilian convention the tool was built for:
//! `R$ 1.234,50`, `1.234,5 km`, `14/03/2025`.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Monetary locale settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MoneyFormat {
    pub symbol: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self {
            symbol: "R$".to_string(),
            decimal_separator: ',',
            grouping_separator: '.',
        }
    }
}

impl MoneyFormat {
    /// `1234.5` → `R$ 1.234,50`. NaN and infinities render as zero.
    pub fn format(&self, value: f64) -> String {
        let value = if value.is_finite() { value } else { 0.0 };
        format!("{} {}", self.symbol, self.format_number(value, 2, 2))
    }

    /// Inverse of [`format`](Self::format).
    ///
    /// Everything except digits and the decimal separator is discarded,
    /// so symbols and grouping separators are ignored. Empty or
    /// unparseable input is zero.
    pub fn parse(&self, input: &str) -> f64 {
        let kept: String = input
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == self.decimal_separator)
            .collect();

        let mut parts = kept.split(self.decimal_separator);
        let whole = parts.next().unwrap_or("");
        let fraction = parts.next().unwrap_or("");
        if whole.is_empty() && fraction.is_empty() {
            return 0.0;
        }

        let whole = if whole.is_empty() { "0" } else { whole };
        format!("{}.{}", whole, fraction)
            .trim_end_matches('.')
            .parse()
            .unwrap_or(0.0)
    }

    /// Live form mask: the digits typed so far are read as cents.
    ///
    /// `"123450"` → `R$ 1.234,50`. Input without digits yields an empty
    /// string so optional fields stay blank.
    pub fn mask_input(&self, raw: &str) -> String {
        lazy_static::lazy_static! {
            static ref NON_DIGIT: Regex = Regex::new(r"\D").unwrap();
        }

        let digits = NON_DIGIT.replace_all(raw, "");
        if digits.is_empty() {
            return String::new();
        }
        let cents: f64 = digits.parse().unwrap_or(0.0);
        self.format(cents / 100.0)
    }

    /// Grouped number with between `min_fraction` and `max_fraction` decimals.
    pub fn format_number(&self, value: f64, min_fraction: usize, max_fraction: usize) -> String {
        let rounded = format!("{:.*}", max_fraction, value.abs());
        let (whole, fraction) = match rounded.split_once('.') {
            Some((w, f)) => (w, f),
            None => (rounded.as_str(), ""),
        };

        let mut fraction = fraction.to_string();
        while fraction.len() > min_fraction && fraction.ends_with('0') {
            fraction.pop();
        }

        let mut out = String::new();
        let is_zero = whole.chars().chain(fraction.chars()).all(|c| c == '0');
        if value < 0.0 && !is_zero {
            out.push('-');
        }
        out.push_str(&group_digits(whole, self.grouping_separator));
        if !fraction.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(&fraction);
        }
        out
    }

    /// `1234.5` → `1.234,5 km`
    pub fn format_km(&self, value: f64) -> String {
        format!("{} km", self.format_number(value, 0, 1))
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// `2025-03-14` → `14/03/2025`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
