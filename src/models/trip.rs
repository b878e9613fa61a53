use std::borrow::Cow;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::collections::{FieldValue, Record};
use crate::models::location::GeoPoint;
use crate::status::TripStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    pub driver: String,
    pub origin: String,
    pub destination: String,
    pub origin_point: GeoPoint,
    pub destination_point: GeoPoint,
    pub status: TripStatus,
    /// Percent complete, 0-100.
    pub progress: u8,
    pub eta: NaiveDateTime,
}

impl Record for Trip {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        Some(match key {
            "id" => FieldValue::from(self.id.as_str()),
            "driver" => FieldValue::from(self.driver.as_str()),
            "origin" => FieldValue::from(self.origin.as_str()),
            "destination" => FieldValue::from(self.destination.as_str()),
            "status" => FieldValue::from(self.status.as_str()),
            "progress" => FieldValue::from(u32::from(self.progress)),
            "eta" => FieldValue::Text(Cow::Owned(self.eta.to_string())),
            _ => return None,
        })
    }
}
