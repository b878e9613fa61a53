use chrono::{NaiveDate, NaiveDateTime};

use crate::dashboard::DashboardData;
use crate::models::analytics::{LoadShare, OnTimePoint, RevenuePoint, StateLoads};
use crate::models::driver::Driver;
use crate::models::equipment::{Equipment, EquipmentKind};
use crate::models::location::GeoPoint;
use crate::models::receivable::Receivable;
use crate::models::trip::Trip;
use crate::status::{DriverStatus, EquipmentStatus, TripStatus};

const STATE_LOADS: &[(&str, u32)] = &[
    ("AL", 12), ("AK", 3), ("AZ", 18), ("AR", 7), ("CA", 45), ("CO", 15), ("CT", 8),
    ("DE", 2), ("FL", 35), ("GA", 25), ("HI", 1), ("ID", 5), ("IL", 28), ("IN", 17),
    ("IA", 9), ("KS", 8), ("KY", 11), ("LA", 14), ("ME", 4), ("MD", 13), ("MA", 16),
    ("MI", 22), ("MN", 12), ("MS", 6), ("MO", 15), ("MT", 4), ("NE", 6), ("NV", 9),
    ("NH", 3), ("NJ", 19), ("NM", 7), ("NY", 33), ("NC", 21), ("ND", 2), ("OH", 26),
    ("OK", 10), ("OR", 11), ("PA", 29), ("RI", 2), ("SC", 13), ("SD", 3), ("TN", 17),
    ("TX", 52), ("UT", 8), ("VT", 2), ("VA", 18), ("WA", 19), ("WV", 5), ("WI", 14),
    ("WY", 3),
];

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .unwrap_or_default()
}

fn point(lat: f64, lng: f64) -> GeoPoint {
    GeoPoint { lat, lng }
}

/// Static data the dashboard renders until the live feeds are wired in.
pub fn sample_data() -> DashboardData {
    DashboardData {
        revenue: [
            ("Jan", 125_000.0, 95_000.0),
            ("Feb", 140_000.0, 100_000.0),
            ("Mar", 155_000.0, 110_000.0),
            ("Apr", 170_000.0, 120_000.0),
            ("May", 185_000.0, 130_000.0),
            ("Jun", 200_000.0, 140_000.0),
        ]
        .into_iter()
        .map(|(month, revenue, expenses)| RevenuePoint {
            month: month.to_string(),
            revenue,
            expenses,
            profit: revenue - expenses,
        })
        .collect(),
        loads_by_type: [("Dry Van", 65.0), ("Refrigerated", 20.0), ("Flatbed", 10.0), ("Specialized", 5.0)]
            .into_iter()
            .map(|(name, value)| LoadShare {
                name: name.to_string(),
                value,
            })
            .collect(),
        on_time: [("Jan", 92.0), ("Feb", 94.0), ("Mar", 91.0), ("Apr", 95.0), ("May", 97.0), ("Jun", 96.0)]
            .into_iter()
            .map(|(month, on_time)| OnTimePoint {
                month: month.to_string(),
                on_time,
                late: 100.0 - on_time,
            })
            .collect(),
        trips: vec![
            Trip {
                id: "TRIP-78901".to_string(),
                driver: "John Smith".to_string(),
                origin: "Chicago, IL".to_string(),
                destination: "Denver, CO".to_string(),
                origin_point: point(41.8781, -87.6298),
                destination_point: point(39.7392, -104.9903),
                status: TripStatus::InTransit,
                progress: 65,
                eta: at(2025, 6, 2, 14, 30),
            },
            Trip {
                id: "TRIP-78902".to_string(),
                driver: "Maria Garcia".to_string(),
                origin: "Atlanta, GA".to_string(),
                destination: "Miami, FL".to_string(),
                origin_point: point(33.749, -84.388),
                destination_point: point(25.7617, -80.1918),
                status: TripStatus::InTransit,
                progress: 40,
                eta: at(2025, 6, 3, 10, 15),
            },
            Trip {
                id: "TRIP-78903".to_string(),
                driver: "Robert Johnson".to_string(),
                origin: "Dallas, TX".to_string(),
                destination: "Phoenix, AZ".to_string(),
                origin_point: point(32.7767, -96.797),
                destination_point: point(33.4484, -112.074),
                status: TripStatus::InTransit,
                progress: 25,
                eta: at(2025, 6, 3, 16, 45),
            },
        ],
        receivables: vec![
            Receivable {
                id: "INV-45678".to_string(),
                customer: "Acme Logistics".to_string(),
                amount: 3250.75,
                due_date: date(2025, 6, 10),
                status: "pending".to_string(),
                age_days: 5,
            },
            Receivable {
                id: "INV-45679".to_string(),
                customer: "Global Transport Inc.".to_string(),
                amount: 4780.50,
                due_date: date(2025, 6, 15),
                status: "pending".to_string(),
                age_days: 3,
            },
            Receivable {
                id: "INV-45680".to_string(),
                customer: "FastFreight Solutions".to_string(),
                amount: 2890.25,
                due_date: date(2025, 6, 8),
                status: "partially_paid".to_string(),
                age_days: 8,
            },
        ],
        drivers: vec![
            Driver {
                id: "DRV-1234".to_string(),
                name: "John Smith".to_string(),
                email: "john.smith@example-freight.com".to_string(),
                phone: "816-555-0142".to_string(),
                status: DriverStatus::Driving,
                location: "Kansas City, MO".to_string(),
                hours_available: 6.5,
            },
            Driver {
                id: "DRV-1235".to_string(),
                name: "Maria Garcia".to_string(),
                email: "maria.garcia@example-freight.com".to_string(),
                phone: "904.555.0187".to_string(),
                status: DriverStatus::OnDuty,
                location: "Jacksonville, FL".to_string(),
                hours_available: 8.0,
            },
            Driver {
                id: "DRV-1236".to_string(),
                name: "Robert Johnson".to_string(),
                email: "robert.johnson@example-freight".to_string(),
                phone: "602 555 0119".to_string(),
                status: DriverStatus::OffDuty,
                location: "Phoenix, AZ".to_string(),
                hours_available: 10.0,
            },
        ],
        equipment: vec![
            Equipment {
                id: "TRK-5678".to_string(),
                kind: EquipmentKind::Truck,
                model: "Freightliner Cascadia".to_string(),
                vin: "1FUJGLDR5CLBP8834".to_string(),
                status: EquipmentStatus::Active,
                location: "Kansas City, MO".to_string(),
                driver: Some("John Smith".to_string()),
                registration_expires: date(2025, 6, 20),
            },
            Equipment {
                id: "TRL-9012".to_string(),
                kind: EquipmentKind::Trailer,
                model: "Great Dane Dry Van".to_string(),
                vin: "1GRAA0621KB700001".to_string(),
                status: EquipmentStatus::Active,
                location: "Jacksonville, FL".to_string(),
                driver: Some("Maria Garcia".to_string()),
                registration_expires: date(2026, 1, 15),
            },
            Equipment {
                id: "TRK-5679".to_string(),
                kind: EquipmentKind::Truck,
                model: "Peterbilt 579".to_string(),
                vin: "1XPBD49X1KD12345O".to_string(),
                status: EquipmentStatus::Maintenance,
                location: "Denver, CO".to_string(),
                driver: None,
                registration_expires: date(2025, 5, 30),
            },
        ],
        state_loads: STATE_LOADS
            .iter()
            .map(|&(state, loads)| StateLoads {
                state: state.to_string(),
                loads,
            })
            .collect(),
    }
}
