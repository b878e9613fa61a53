use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::collections::{FieldValue, Record};

const KM_PER_MILE: f64 = 1.609344;
const LITERS_PER_GALLON_FACTOR: f64 = 0.425144;

/// Sums the `total_amount` field across invoices; missing or non-numeric
/// amounts count as zero.
pub fn calculate_total_revenue<T: Record>(invoices: &[T]) -> f64 {
    invoices
        .iter()
        .map(|invoice| match invoice.field("total_amount") {
            Some(FieldValue::Number(amount)) if amount.is_finite() => amount,
            _ => 0.0,
        })
        .sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelUnit {
    #[default]
    Mpg,
    Kpl,
}

pub fn calculate_fuel_efficiency(distance: f64, gallons: f64, unit: FuelUnit) -> f64 {
    if distance == 0.0 || gallons == 0.0 {
        return 0.0;
    }

    match unit {
        FuelUnit::Mpg => distance / gallons,
        FuelUnit::Kpl => distance / gallons / KM_PER_MILE * LITERS_PER_GALLON_FACTOR,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateType {
    #[default]
    PerMile,
    Percentage,
    Flat,
}

/// Driver settlement for one trip. Never negative.
pub fn calculate_payroll(
    rate: f64,
    miles: f64,
    deductions: f64,
    rate_type: RateType,
    gross_amount: f64,
) -> f64 {
    let pay = match rate_type {
        RateType::PerMile => rate * miles,
        RateType::Percentage => rate / 100.0 * gross_amount,
        RateType::Flat => rate,
    };

    (pay - deductions).max(0.0)
}

/// `tax_rate` is a percentage.
pub fn calculate_invoice_total(amount: f64, tax_rate: f64, discount_amount: f64) -> f64 {
    amount + amount * (tax_rate / 100.0) - discount_amount
}

fn to_base36(mut value: u128) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

/// `prefix` + base36 epoch millis + five random base36 characters.
pub fn generate_id(prefix: &str) -> String {
    let millis = u128::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
    let random = to_base36(Uuid::new_v4().as_u128());
    let suffix: String = random.chars().rev().take(5).collect();
    format!("{prefix}{}{suffix}", to_base36(millis))
}

/// `PREFIX-<epoch millis without the leading six digits>-<four random digits>`.
pub fn generate_reference_number(prefix: &str) -> String {
    let millis = Utc::now().timestamp_millis().to_string();
    let tail = millis.get(6..).unwrap_or_default();
    let random = Uuid::new_v4().as_u128() % 10_000;
    format!("{prefix}-{tail}-{random:04}")
}
