//! Status codes per domain and the badge tone each one renders with.
//! Unknown codes always map to [`BadgeTone::Gray`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Yellow,
    Blue,
    Indigo,
    Green,
    Emerald,
    Red,
    #[default]
    Gray,
    Orange,
    Purple,
    Slate,
    Amber,
}

impl BadgeTone {
    /// Style token for the badge background and text.
    pub fn class(self) -> &'static str {
        match self {
            BadgeTone::Yellow => "bg-yellow-100 text-yellow-800",
            BadgeTone::Blue => "bg-blue-100 text-blue-800",
            BadgeTone::Indigo => "bg-indigo-100 text-indigo-800",
            BadgeTone::Green => "bg-green-100 text-green-800",
            BadgeTone::Emerald => "bg-emerald-100 text-emerald-800",
            BadgeTone::Red => "bg-red-100 text-red-800",
            BadgeTone::Gray => "bg-gray-100 text-gray-800",
            BadgeTone::Orange => "bg-orange-100 text-orange-800",
            BadgeTone::Purple => "bg-purple-100 text-purple-800",
            BadgeTone::Slate => "bg-slate-100 text-slate-800",
            BadgeTone::Amber => "bg-amber-100 text-amber-800",
        }
    }
}

macro_rules! status_code {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $code:literal, $tone:ident;)+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            pub fn tone(self) -> BadgeTone {
                match self {
                    $($name::$variant => BadgeTone::$tone,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = FormatError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                match raw {
                    $($code => Ok($name::$variant),)+
                    other => Err(FormatError::UnknownStatus(other.to_string())),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

status_code!(
    /// Lifecycle of a load from booking to settlement.
    LoadStatus {
        Pending => "pending", Yellow;
        Assigned => "assigned", Blue;
        InTransit => "in_transit", Indigo;
        Delivered => "delivered", Green;
        Completed => "completed", Emerald;
        Cancelled => "cancelled", Red;
    }
);

status_code!(
    VehicleStatus {
        Active => "active", Green;
        Inactive => "inactive", Gray;
        Maintenance => "maintenance", Orange;
        OutOfService => "out_of_service", Red;
    }
);

status_code!(
    /// Duty state of a driver, as tracked for hours-of-service.
    DriverStatus {
        Active => "active", Green;
        Inactive => "inactive", Gray;
        OnDuty => "on_duty", Blue;
        OffDuty => "off_duty", Purple;
        Driving => "driving", Indigo;
        Suspended => "suspended", Red;
    }
);

status_code!(
    InvoiceStatus {
        Draft => "draft", Gray;
        Sent => "sent", Blue;
        PartiallyPaid => "partially_paid", Yellow;
        Paid => "paid", Green;
        Overdue => "overdue", Red;
        Void => "void", Slate;
    }
);

status_code!(
    /// Trip state shown on the dashboard's active trips panel.
    TripStatus {
        InTransit => "in_transit", Blue;
        Completed => "completed", Green;
        Planned => "planned", Amber;
        Cancelled => "cancelled", Red;
    }
);

status_code!(
    EquipmentStatus {
        Active => "active", Green;
        Maintenance => "maintenance", Amber;
        OutOfService => "out_of_service", Red;
    }
);

fn tone_of<S>(status: &str) -> BadgeTone
where
    S: FromStr<Err = FormatError>,
    BadgeTone: From<S>,
{
    status.parse::<S>().map(BadgeTone::from).unwrap_or_default()
}

macro_rules! tone_from {
    ($($name:ident),+) => {
        $(impl From<$name> for BadgeTone {
            fn from(status: $name) -> Self {
                status.tone()
            }
        })+
    };
}

tone_from!(LoadStatus, VehicleStatus, DriverStatus, InvoiceStatus, TripStatus, EquipmentStatus);

pub fn load_status_tone(status: &str) -> BadgeTone {
    tone_of::<LoadStatus>(status)
}

pub fn vehicle_status_tone(status: &str) -> BadgeTone {
    tone_of::<VehicleStatus>(status)
}

pub fn driver_status_tone(status: &str) -> BadgeTone {
    tone_of::<DriverStatus>(status)
}

pub fn invoice_status_tone(status: &str) -> BadgeTone {
    tone_of::<InvoiceStatus>(status)
}

pub fn trip_status_tone(status: &str) -> BadgeTone {
    tone_of::<TripStatus>(status)
}

pub fn equipment_status_tone(status: &str) -> BadgeTone {
    tone_of::<EquipmentStatus>(status)
}

/// `in_transit` becomes `In Transit`.
pub fn format_status(status: &str) -> String {
    status
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Product areas, each with its own accent colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppModule {
    Dispatch,
    Accounting,
    Fleet,
    Safety,
    Resources,
}

impl AppModule {
    pub const ALL: [AppModule; 5] = [
        AppModule::Dispatch,
        AppModule::Accounting,
        AppModule::Fleet,
        AppModule::Safety,
        AppModule::Resources,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            AppModule::Dispatch => "dispatch",
            AppModule::Accounting => "accounting",
            AppModule::Fleet => "fleet",
            AppModule::Safety => "safety",
            AppModule::Resources => "resources",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            AppModule::Dispatch => "var(--dispatch)",
            AppModule::Accounting => "var(--accounting)",
            AppModule::Fleet => "var(--fleet)",
            AppModule::Safety => "var(--safety)",
            AppModule::Resources => "var(--resources)",
        }
    }
}

pub const PRIMARY_COLOR: &str = "var(--primary)";

pub fn module_color(module: &str) -> &'static str {
    AppModule::ALL
        .into_iter()
        .find(|candidate| candidate.slug() == module)
        .map_or(PRIMARY_COLOR, AppModule::color)
}
