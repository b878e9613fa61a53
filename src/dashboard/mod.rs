//! Display-ready dashboard snapshot. Raw records go in; every field comes out
//! already formatted so the browser only has to lay it out.

pub mod sample;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::business::calculate_total_revenue;
use crate::clock::Clock;
use crate::collections::{SortDirection, group_by, search_in_array, sort_by};
use crate::display::contrast_color;
use crate::format::{
    NumberOptions, format_currency, format_date, format_date_time, format_distance, format_number,
    format_percentage, format_phone_number, format_time_ago_with, get_initials,
    is_date_expired_with, is_date_expiring_with,
};
use crate::geo::{DistanceUnit, distance_between};
use crate::models::analytics::{LoadShare, OnTimePoint, RevenuePoint, StateLoads};
use crate::models::driver::Driver;
use crate::models::equipment::Equipment;
use crate::models::receivable::Receivable;
use crate::models::trip::Trip;
use crate::status::{BadgeTone, TripStatus, format_status, invoice_status_tone};
use crate::validate::{is_valid_email, is_valid_phone_number, is_valid_vin};

const TRIP_SEARCH_KEYS: &[&str] = &["id", "driver", "origin", "destination", "status"];
const RECEIVABLE_SEARCH_KEYS: &[&str] = &["id", "customer", "status"];
const DRIVER_SEARCH_KEYS: &[&str] = &["id", "name", "location", "status"];
const EQUIPMENT_SEARCH_KEYS: &[&str] = &["id", "model", "location", "driver", "status"];

/// Raw records behind the dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardData {
    pub revenue: Vec<RevenuePoint>,
    pub loads_by_type: Vec<LoadShare>,
    pub on_time: Vec<OnTimePoint>,
    pub trips: Vec<Trip>,
    pub receivables: Vec<Receivable>,
    pub drivers: Vec<Driver>,
    pub equipment: Vec<Equipment>,
    pub state_loads: Vec<StateLoads>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    pub currency: String,
    pub locale: String,
    pub distance_unit: DistanceUnit,
    pub expiry_threshold_days: i64,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            locale: "en-US".to_string(),
            distance_unit: DistanceUnit::Miles,
            expiry_threshold_days: crate::format::DEFAULT_EXPIRY_THRESHOLD_DAYS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub total_revenue: String,
    pub total_profit: String,
    pub outstanding_receivables: String,
    pub on_time_rate: String,
    pub active_trips: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueRow {
    pub month: String,
    pub revenue: String,
    pub expenses: String,
    pub profit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareRow {
    pub name: String,
    pub share: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnTimeRow {
    pub month: String,
    pub on_time: String,
    pub late: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRow {
    pub id: String,
    pub driver: String,
    pub driver_initials: String,
    pub route: String,
    pub distance: String,
    pub status: String,
    pub status_label: String,
    pub badge_class: String,
    pub progress: String,
    pub eta: String,
    pub eta_relative: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceivableRow {
    pub id: String,
    pub customer: String,
    pub amount: String,
    pub due: String,
    pub status_label: String,
    pub badge_class: String,
    pub overdue: bool,
    pub due_soon: bool,
    pub age: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverRow {
    pub id: String,
    pub name: String,
    pub initials: String,
    pub status_label: String,
    pub badge_class: String,
    pub location: String,
    pub phone: String,
    pub contact_verified: bool,
    pub hours_available: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentRow {
    pub id: String,
    pub kind: String,
    pub model: String,
    pub status_label: String,
    pub badge_class: String,
    pub location: String,
    pub driver: String,
    pub vin_valid: bool,
    pub registration_expires: String,
    pub registration_expiring: bool,
    pub registration_expired: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateLoadRow {
    pub state: String,
    pub loads: u32,
    pub color: String,
    pub text_color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub generated_at: String,
    pub summary: Summary,
    pub revenue: Vec<RevenueRow>,
    pub loads_by_type: Vec<ShareRow>,
    pub on_time: Vec<OnTimeRow>,
    pub trips: Vec<TripRow>,
    pub receivables: Vec<ReceivableRow>,
    pub drivers: Vec<DriverRow>,
    pub equipment: Vec<EquipmentRow>,
    pub equipment_by_status: BTreeMap<String, usize>,
    pub state_loads: Vec<StateLoadRow>,
}

/// Fill colour for a state on the loads map, darker for busier states.
pub fn state_load_color(loads: u32) -> &'static str {
    match loads {
        41.. => "#0f766e",
        31..=40 => "#14b8a6",
        21..=30 => "#2dd4bf",
        11..=20 => "#5eead4",
        6..=10 => "#99f6e4",
        _ => "#ccfbf1",
    }
}

/// Receivables are pending or partially settled; pending reads as a warning.
fn receivable_tone(status: &str) -> BadgeTone {
    match status {
        "pending" => BadgeTone::Yellow,
        other => match invoice_status_tone(other) {
            BadgeTone::Gray => BadgeTone::Blue,
            tone => tone,
        },
    }
}

impl DashboardSnapshot {
    /// Formats `data` for display. A non-empty `search` narrows the trip,
    /// receivable, driver and equipment panels.
    pub fn build(
        data: &DashboardData,
        settings: &DisplaySettings,
        clock: &dyn Clock,
        search: Option<&str>,
    ) -> Self {
        let term = search.map(str::trim).unwrap_or_default();
        let money = |amount: f64| format_currency(Some(amount), &settings.currency, &settings.locale);
        let now = clock.now();

        let trips: Vec<TripRow> = search_in_array(&data.trips, TRIP_SEARCH_KEYS, term)
            .into_iter()
            .map(|trip| TripRow {
                id: trip.id.clone(),
                driver: trip.driver.clone(),
                driver_initials: get_initials(&trip.driver),
                route: format!("{} → {}", trip.origin, trip.destination),
                distance: format_distance(
                    Some(distance_between(
                        &trip.origin_point,
                        &trip.destination_point,
                        settings.distance_unit,
                    )),
                    settings.distance_unit,
                ),
                status: trip.status.to_string(),
                status_label: format_status(trip.status.as_str()),
                badge_class: trip.status.tone().class().to_string(),
                progress: format_percentage(Some(f64::from(trip.progress))),
                eta: format_date_time(trip.eta),
                eta_relative: format_time_ago_with(trip.eta, clock),
            })
            .collect();

        let receivables = search_in_array(&data.receivables, RECEIVABLE_SEARCH_KEYS, term)
            .into_iter()
            .map(|invoice| ReceivableRow {
                id: invoice.id.clone(),
                customer: invoice.customer.clone(),
                amount: money(invoice.amount),
                due: format_date(invoice.due_date, None),
                status_label: format_status(&invoice.status),
                badge_class: receivable_tone(&invoice.status).class().to_string(),
                overdue: is_date_expired_with(invoice.due_date, clock),
                due_soon: is_date_expiring_with(invoice.due_date, settings.expiry_threshold_days, clock),
                age: format!("{} days", invoice.age_days),
            })
            .collect();

        let drivers = search_in_array(&data.drivers, DRIVER_SEARCH_KEYS, term);
        let drivers = sort_by(&drivers, "hours_available", SortDirection::Desc)
            .into_iter()
            .map(|driver| DriverRow {
                id: driver.id.clone(),
                name: driver.name.clone(),
                initials: get_initials(&driver.name),
                status_label: format_status(driver.status.as_str()),
                badge_class: driver.status.tone().class().to_string(),
                location: driver.location.clone(),
                phone: format_phone_number(&driver.phone),
                contact_verified: is_valid_email(&driver.email) && is_valid_phone_number(&driver.phone),
                hours_available: format!(
                    "{} hrs",
                    format_number(Some(driver.hours_available), NumberOptions::max_fraction(1))
                ),
            })
            .collect();

        let equipment = search_in_array(&data.equipment, EQUIPMENT_SEARCH_KEYS, term);
        let equipment_by_status = group_by(&equipment, "status")
            .into_iter()
            .map(|(status, units)| (status, units.len()))
            .collect();
        let equipment = equipment
            .into_iter()
            .map(|unit| EquipmentRow {
                id: unit.id.clone(),
                kind: unit.kind.as_str().to_string(),
                model: unit.model.clone(),
                status_label: format_status(unit.status.as_str()),
                badge_class: unit.status.tone().class().to_string(),
                location: unit.location.clone(),
                driver: unit.driver.clone().unwrap_or_else(|| "Unassigned".to_string()),
                vin_valid: is_valid_vin(&unit.vin),
                registration_expires: format_date(unit.registration_expires, None),
                registration_expiring: is_date_expiring_with(
                    unit.registration_expires,
                    settings.expiry_threshold_days,
                    clock,
                ),
                registration_expired: is_date_expired_with(unit.registration_expires, clock),
            })
            .collect();

        let mut state_loads: Vec<StateLoadRow> = data
            .state_loads
            .iter()
            .map(|entry| {
                let color = state_load_color(entry.loads);
                StateLoadRow {
                    state: entry.state.clone(),
                    loads: entry.loads,
                    color: color.to_string(),
                    text_color: contrast_color(color).to_string(),
                }
            })
            .collect();
        state_loads.sort_by(|a, b| b.loads.cmp(&a.loads).then_with(|| a.state.cmp(&b.state)));

        let total_revenue: f64 = data.revenue.iter().map(|point| point.revenue).sum();
        let total_profit: f64 = data.revenue.iter().map(|point| point.profit).sum();
        let on_time_rate = if data.on_time.is_empty() {
            None
        } else {
            let total: f64 = data.on_time.iter().map(|point| point.on_time).sum();
            Some(total / data.on_time.len() as f64)
        };

        Self {
            generated_at: format_date_time(now),
            summary: Summary {
                total_revenue: money(total_revenue),
                total_profit: money(total_profit),
                outstanding_receivables: money(calculate_total_revenue(&data.receivables)),
                on_time_rate: format_percentage(on_time_rate),
                active_trips: data
                    .trips
                    .iter()
                    .filter(|trip| trip.status == TripStatus::InTransit)
                    .count(),
            },
            revenue: data
                .revenue
                .iter()
                .map(|point| RevenueRow {
                    month: point.month.clone(),
                    revenue: money(point.revenue),
                    expenses: money(point.expenses),
                    profit: money(point.profit),
                })
                .collect(),
            loads_by_type: data
                .loads_by_type
                .iter()
                .map(|share| ShareRow {
                    name: share.name.clone(),
                    share: format_percentage(Some(share.value)),
                })
                .collect(),
            on_time: data
                .on_time
                .iter()
                .map(|point| OnTimeRow {
                    month: point.month.clone(),
                    on_time: format_percentage(Some(point.on_time)),
                    late: format_percentage(Some(point.late)),
                })
                .collect(),
            trips,
            receivables,
            drivers,
            equipment,
            equipment_by_status,
            state_loads,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::sample::sample_data;
    use super::*;
    use crate::clock::FixedClock;

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap())
    }

    fn snapshot(search: Option<&str>) -> DashboardSnapshot {
        DashboardSnapshot::build(&sample_data(), &DisplaySettings::default(), &clock(), search)
    }

    #[test]
    fn summary_totals() {
        let snapshot = snapshot(None);
        assert_eq!(snapshot.generated_at, "Jun 01, 2025 12:00 PM");
        assert_eq!(snapshot.summary.total_revenue, "$975,000.00");
        assert_eq!(snapshot.summary.total_profit, "$280,000.00");
        assert_eq!(snapshot.summary.outstanding_receivables, "$10,921.50");
        assert_eq!(snapshot.summary.on_time_rate, "94.2%");
        assert_eq!(snapshot.summary.active_trips, 3);
    }

    #[test]
    fn trips_are_display_ready() {
        let snapshot = snapshot(None);
        let trip = &snapshot.trips[0];
        assert_eq!(trip.route, "Chicago, IL → Denver, CO");
        assert_eq!(trip.driver_initials, "JS");
        assert_eq!(trip.status_label, "In Transit");
        assert_eq!(trip.badge_class, "bg-blue-100 text-blue-800");
        assert_eq!(trip.progress, "65.0%");
        assert_eq!(trip.eta, "Jun 02, 2025 2:30 PM");
        assert_eq!(trip.eta_relative, "in 1 day");
        assert_eq!(trip.distance, "918.2 mi");
    }

    #[test]
    fn receivables_flag_due_dates() {
        let snapshot = snapshot(None);
        let first = &snapshot.receivables[0];
        assert_eq!(first.amount, "$3,250.75");
        assert_eq!(first.due, "Jun 10, 2025");
        assert_eq!(first.badge_class, BadgeTone::Yellow.class());
        assert!(first.due_soon);
        assert!(!first.overdue);

        let partial = &snapshot.receivables[2];
        assert_eq!(partial.status_label, "Partially Paid");
        assert_eq!(partial.badge_class, BadgeTone::Yellow.class());
    }

    #[test]
    fn drivers_sorted_by_hours_available() {
        let snapshot = snapshot(None);
        let names: Vec<&str> = snapshot.drivers.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Robert Johnson", "Maria Garcia", "John Smith"]);
        assert_eq!(snapshot.drivers[0].hours_available, "10 hrs");
        assert_eq!(snapshot.drivers[2].hours_available, "6.5 hrs");
        assert_eq!(snapshot.drivers[1].phone, "(904) 555-0187");
        assert!(snapshot.drivers[1].contact_verified);
        assert!(!snapshot.drivers[0].contact_verified);
    }

    #[test]
    fn equipment_flags() {
        let snapshot = snapshot(None);
        assert_eq!(snapshot.equipment_by_status["active"], 2);
        assert_eq!(snapshot.equipment_by_status["maintenance"], 1);

        let peterbilt = &snapshot.equipment[2];
        assert_eq!(peterbilt.driver, "Unassigned");
        assert!(!peterbilt.vin_valid);
        assert!(peterbilt.registration_expired);
        assert!(!peterbilt.registration_expiring);

        let cascadia = &snapshot.equipment[0];
        assert!(cascadia.vin_valid);
        assert!(cascadia.registration_expiring);
    }

    #[test]
    fn state_loads_busiest_first() {
        let snapshot = snapshot(None);
        let busiest = &snapshot.state_loads[0];
        assert_eq!(busiest.state, "TX");
        assert_eq!(busiest.color, "#0f766e");
        assert_eq!(busiest.text_color, "#FFFFFF");
        assert_eq!(snapshot.state_loads.len(), 50);
    }

    #[test]
    fn search_narrows_panels() {
        let snapshot = snapshot(Some("garcia"));
        assert_eq!(snapshot.trips.len(), 1);
        assert_eq!(snapshot.drivers.len(), 1);
        assert_eq!(snapshot.equipment.len(), 1);
        assert!(snapshot.receivables.is_empty());
        assert_eq!(snapshot.summary.active_trips, 3);
    }

    #[test]
    fn blank_search_keeps_everything() {
        let snapshot = snapshot(Some("   "));
        assert_eq!(snapshot.trips.len(), 3);
        assert_eq!(snapshot.receivables.len(), 3);
    }

    #[test]
    fn color_scale_thresholds() {
        assert_eq!(state_load_color(52), "#0f766e");
        assert_eq!(state_load_color(40), "#14b8a6");
        assert_eq!(state_load_color(21), "#2dd4bf");
        assert_eq!(state_load_color(11), "#5eead4");
        assert_eq!(state_load_color(6), "#99f6e4");
        assert_eq!(state_load_color(5), "#ccfbf1");
    }

    #[test]
    fn currency_settings_flow_through() {
        let settings = DisplaySettings {
            currency: "EUR".to_string(),
            locale: "de-DE".to_string(),
            ..DisplaySettings::default()
        };
        let snapshot = DashboardSnapshot::build(&sample_data(), &settings, &clock(), None);
        assert_eq!(snapshot.receivables[0].amount, "3.250,75\u{a0}€");
    }
}
