//! Locale-aware number, currency, percentage and measurement formatting.

use std::borrow::Cow;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{FormatError, SENTINEL};
use crate::geo::DistanceUnit;

const NBSP: char = '\u{a0}';
const NARROW_NBSP: char = '\u{202f}';

/// Locales the currency formatter knows separators and symbol placement for.
/// Anything else is rendered as `en-US`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    EnUs,
    EnGb,
    EnCa,
    DeDe,
    FrFr,
    EsEs,
}

impl Locale {
    pub fn parse(tag: &str) -> Self {
        match tag.to_ascii_lowercase().replace('_', "-").as_str() {
            "en-us" | "en" => Locale::EnUs,
            "en-gb" => Locale::EnGb,
            "en-ca" => Locale::EnCa,
            "de-de" | "de" => Locale::DeDe,
            "fr-fr" | "fr" => Locale::FrFr,
            "es-es" | "es" => Locale::EsEs,
            other => {
                tracing::debug!(locale = other, "unknown locale, using en-US");
                Locale::EnUs
            }
        }
    }

    fn group_separator(self) -> char {
        match self {
            Locale::EnUs | Locale::EnGb | Locale::EnCa => ',',
            Locale::DeDe | Locale::EsEs => '.',
            Locale::FrFr => NARROW_NBSP,
        }
    }

    /// Shortest integer part that gets group separators. Spanish leaves
    /// four-digit numbers ungrouped.
    fn min_grouped_len(self) -> usize {
        match self {
            Locale::EsEs => 5,
            _ => 4,
        }
    }

    fn decimal_separator(self) -> char {
        match self {
            Locale::EnUs | Locale::EnGb | Locale::EnCa => '.',
            Locale::DeDe | Locale::FrFr | Locale::EsEs => ',',
        }
    }

    fn symbol_trails(self) -> bool {
        matches!(self, Locale::DeDe | Locale::FrFr | Locale::EsEs)
    }

    fn currency_symbol(self, code: &str) -> Cow<'static, str> {
        let symbol = match (code, self) {
            ("USD", Locale::EnGb | Locale::EnCa | Locale::EsEs) => "US$",
            ("USD", Locale::FrFr) => "$US",
            ("USD", _) => "$",
            ("CAD", Locale::EnCa) => "$",
            ("CAD", Locale::FrFr) => "$CA",
            ("CAD", _) => "CA$",
            ("EUR", _) => "€",
            ("GBP", _) => "£",
            ("JPY", _) => "¥",
            ("MXN", _) => "MX$",
            _ => return Cow::Owned(code.to_string()),
        };
        Cow::Borrowed(symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberOptions {
    pub min_fraction_digits: usize,
    pub max_fraction_digits: usize,
    pub use_grouping: bool,
}

impl Default for NumberOptions {
    fn default() -> Self {
        Self {
            min_fraction_digits: 0,
            max_fraction_digits: 3,
            use_grouping: true,
        }
    }
}

impl NumberOptions {
    pub fn fraction_digits(min: usize, max: usize) -> Self {
        Self {
            min_fraction_digits: min,
            max_fraction_digits: max.max(min),
            ..Self::default()
        }
    }

    pub fn max_fraction(max: usize) -> Self {
        Self::fraction_digits(0, max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Lb,
    Kg,
}

impl WeightUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            WeightUnit::Lb => "lb",
            WeightUnit::Kg => "kg",
        }
    }
}

fn finite(value: Option<f64>) -> Option<f64> {
    let value = value?;
    if value.is_finite() {
        Some(value)
    } else {
        tracing::debug!(error = %FormatError::NotFinite, "falling back for non-finite number");
        None
    }
}

/// Formats `value` with `min..=max` fraction digits, rounding half away from
/// zero on the shortest decimal representation of the float. `None` when the
/// magnitude does not fit a [`Decimal`].
fn decimal(value: f64, options: NumberOptions, locale: Locale) -> Option<(bool, String)> {
    let max = options.max_fraction_digits.max(options.min_fraction_digits);
    let magnitude = value.abs();
    let Some(exact) = magnitude
        .to_string()
        .parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_f64_retain(magnitude))
    else {
        tracing::debug!(value, "number outside decimal range");
        return None;
    };

    let rounded = exact
        .round_dp_with_strategy(max as u32, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string();
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));

    let mut out = String::with_capacity(int_part.len() + max + 8);
    let grouped = options.use_grouping && int_part.len() >= locale.min_grouped_len();
    let len = int_part.len();
    for (i, digit) in int_part.chars().enumerate() {
        if grouped && i > 0 && (len - i) % 3 == 0 {
            out.push(locale.group_separator());
        }
        out.push(digit);
    }

    let padding = options.min_fraction_digits.saturating_sub(frac_part.len());
    if !frac_part.is_empty() || padding > 0 {
        out.push(locale.decimal_separator());
        out.push_str(frac_part);
        out.extend(std::iter::repeat_n('0', padding));
    }

    Some((value < 0.0, out))
}

fn signed(negative: bool, body: String) -> String {
    if negative { format!("-{body}") } else { body }
}

/// Currency with exactly two fraction digits, e.g. `$1,234.50`.
pub fn format_currency(amount: Option<f64>, currency: &str, locale: &str) -> String {
    let Some(amount) = finite(amount) else {
        return SENTINEL.to_string();
    };

    let locale = Locale::parse(locale);
    let code = currency.trim().to_ascii_uppercase();
    let symbol = locale.currency_symbol(&code);
    let Some((negative, digits)) = decimal(amount, NumberOptions::fraction_digits(2, 2), locale)
    else {
        return SENTINEL.to_string();
    };

    let body = if locale.symbol_trails() {
        format!("{digits}{NBSP}{symbol}")
    } else if symbol.chars().all(|c| c.is_ascii_alphabetic()) {
        format!("{symbol}{NBSP}{digits}")
    } else {
        format!("{symbol}{digits}")
    };

    signed(negative, body)
}

/// `en-US` number formatting.
pub fn format_number(amount: Option<f64>, options: NumberOptions) -> String {
    let Some(amount) = finite(amount) else {
        return SENTINEL.to_string();
    };

    let Some((negative, digits)) = decimal(amount, options, Locale::EnUs) else {
        return SENTINEL.to_string();
    };
    signed(negative, digits)
}

/// Formats a value on the 0-100 scale: `42` renders as `42.0%`.
pub fn format_percentage(value: Option<f64>) -> String {
    let Some(value) = finite(value) else {
        return SENTINEL.to_string();
    };

    let Some((negative, digits)) = decimal(value, NumberOptions::fraction_digits(1, 1), Locale::EnUs)
    else {
        return SENTINEL.to_string();
    };
    signed(negative, format!("{digits}%"))
}

pub fn format_distance(value: Option<f64>, unit: DistanceUnit) -> String {
    with_suffix(format_number(value, NumberOptions::max_fraction(1)), unit.suffix())
}

pub fn format_weight(value: Option<f64>, unit: WeightUnit) -> String {
    with_suffix(format_number(value, NumberOptions::default()), unit.suffix())
}

fn with_suffix(number: String, suffix: &str) -> String {
    if number == SENTINEL {
        return number;
    }
    format!("{number} {suffix}")
}
