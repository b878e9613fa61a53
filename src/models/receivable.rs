use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::collections::{FieldValue, Record};

/// An open invoice awaiting payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receivable {
    pub id: String,
    pub customer: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    /// Raw collection status from the billing backend, e.g. `pending`.
    pub status: String,
    /// Days since the invoice was issued.
    pub age_days: u32,
}

impl Record for Receivable {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        Some(match key {
            "id" => FieldValue::from(self.id.as_str()),
            "customer" => FieldValue::from(self.customer.as_str()),
            "amount" | "total_amount" => FieldValue::from(self.amount),
            "status" => FieldValue::from(self.status.as_str()),
            "age_days" => FieldValue::from(self.age_days),
            _ => return None,
        })
    }
}
