use serde::{Deserialize, Serialize};

use crate::collections::{FieldValue, Record};
use crate::status::DriverStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: DriverStatus,
    pub location: String,
    pub hours_available: f64,
}

impl Record for Driver {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        Some(match key {
            "id" => FieldValue::from(self.id.as_str()),
            "name" => FieldValue::from(self.name.as_str()),
            "email" => FieldValue::from(self.email.as_str()),
            "phone" => FieldValue::from(self.phone.as_str()),
            "status" => FieldValue::from(self.status.as_str()),
            "location" => FieldValue::from(self.location.as_str()),
            "hours_available" => FieldValue::from(self.hours_available),
            _ => return None,
        })
    }
}
