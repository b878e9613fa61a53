use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::collections::{FieldValue, Record};
use crate::status::EquipmentStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentKind {
    Truck,
    Trailer,
}

impl EquipmentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EquipmentKind::Truck => "Truck",
            EquipmentKind::Trailer => "Trailer",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equipment {
    pub id: String,
    pub kind: EquipmentKind,
    pub model: String,
    pub vin: String,
    pub status: EquipmentStatus,
    pub location: String,
    pub driver: Option<String>,
    pub registration_expires: NaiveDate,
}

impl Record for Equipment {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        Some(match key {
            "id" => FieldValue::from(self.id.as_str()),
            "kind" => FieldValue::from(self.kind.as_str()),
            "model" => FieldValue::from(self.model.as_str()),
            "vin" => FieldValue::from(self.vin.as_str()),
            "status" => FieldValue::from(self.status.as_str()),
            "location" => FieldValue::from(self.location.as_str()),
            "driver" => self
                .driver
                .as_deref()
                .map_or(FieldValue::Null, FieldValue::from),
            _ => return None,
        })
    }
}
