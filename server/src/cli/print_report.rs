use crate::cli_error::CliError;
use crate::data_store::{get_store_from_env, HotelStore};
use crate::reports;
use std::fmt::Display;

/// Reports which can be printed on the command line
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ReportName {
    GuestRooms,
    MeetingSpaces,
    ReservationsPerDay,
    RoomList,
    StayLength,
    Revenue,
    CustomerBilling,
    OpenRequests,
    MeetingSpaceEvents,
    CardSwipes,
    RoomsNeverReserved,
    StaffRoster,
}

/// Run the given report against the database and print its rows and statistics as text tables.
///
/// Like on the web pages, failing queries are logged and result in an empty report.
pub fn print_report(report: ReportName) -> Result<(), CliError> {
    let store = get_store_from_env()?;
    println!("{}", render_report(report, &store));
    Ok(())
}

fn render_report(report: ReportName, store: &dyn HotelStore) -> String {
    match report {
        ReportName::GuestRooms => {
            let r = reports::guest_rooms(store);
            render(
                &[
                    "room", "building", "type", "bed", "sq ft", "paid bar", "status",
                ],
                r.rooms.into_iter().map(|room| {
                    vec![
                        room.room_number,
                        room.building_name,
                        room.room_type,
                        optional(room.bed_type),
                        optional(room.square_footage),
                        yes_no(room.has_paid_bar),
                        room.room_status,
                    ]
                }),
                &[("available rooms", r.total_rooms.to_string())],
            )
        }
        ReportName::MeetingSpaces => {
            let r = reports::meeting_spaces(store);
            render(
                &[
                    "room",
                    "building",
                    "space type",
                    "capacity",
                    "projector",
                    "whiteboard",
                    "paid bar",
                ],
                r.spaces.into_iter().map(|space| {
                    vec![
                        space.room_number,
                        space.building_name,
                        space.space_type,
                        optional(space.capacity),
                        yes_no(space.has_projector),
                        yes_no(space.has_whiteboard),
                        yes_no(space.has_paid_bar),
                    ]
                }),
                &[("meeting spaces", r.total_spaces.to_string())],
            )
        }
        ReportName::ReservationsPerDay => {
            let r = reports::reservations_per_day(store);
            render(
                &["day", "reservations"],
                r.days
                    .into_iter()
                    .map(|day| vec![optional(day.day), day.num_reservations.to_string()]),
                &[
                    ("reservations", r.total_reservations.to_string()),
                    ("days", r.total_days.to_string()),
                    ("average per day", format!("{:.2}", r.avg_per_day)),
                ],
            )
        }
        ReportName::RoomList => {
            let r = reports::room_list(store);
            render(
                &["building", "status", "rooms"],
                r.rooms.into_iter().map(|room| {
                    vec![
                        room.building_name,
                        room.room_status,
                        room.num_rooms.to_string(),
                    ]
                }),
                &[
                    ("rooms", r.total_rooms.to_string()),
                    ("available rooms", r.available_rooms.to_string()),
                ],
            )
        }
        ReportName::StayLength => {
            let r = reports::stay_length(store);
            render(
                &["room type", "average nights", "bookings"],
                r.room_types.into_iter().map(|room_type| {
                    vec![
                        room_type.room_type,
                        optional(room_type.avg_nights.map(|n| format!("{:.2}", n))),
                        room_type.num_room_bookings.to_string(),
                    ]
                }),
                &[
                    ("bookings", r.total_bookings.to_string()),
                    (
                        "average nights",
                        optional(r.overall_avg_nights.map(|n| format!("{:.2}", n))),
                    ),
                ],
            )
        }
        ReportName::Revenue => {
            let r = reports::revenue(store);
            render(
                &["year", "month", "revenue", "transactions"],
                r.months.into_iter().map(|month| {
                    vec![
                        optional(month.year),
                        optional(month.month),
                        optional(month.total_revenue.map(|v| format!("{:.2}", v))),
                        month.num_transactions.to_string(),
                    ]
                }),
                &[
                    ("revenue", format!("{:.2}", r.total_revenue)),
                    ("transactions", r.total_transactions.to_string()),
                    ("months", r.months_tracked.to_string()),
                ],
            )
        }
        ReportName::CustomerBilling => {
            let r = reports::customer_billing(store);
            render(
                &["id", "last name", "first name", "bills", "total billed"],
                r.customers.into_iter().map(|customer| {
                    vec![
                        customer.customer_id.to_string(),
                        customer.last_name,
                        customer.first_name,
                        customer.bills.to_string(),
                        optional(customer.total_billed.map(|v| format!("{:.2}", v))),
                    ]
                }),
                &[
                    ("customers", r.total_customers.to_string()),
                    ("revenue", format!("{:.2}", r.total_revenue)),
                ],
            )
        }
        ReportName::OpenRequests => {
            let r = reports::open_requests(store);
            render(
                &["deposit status", "open requests"],
                r.deposit_statuses.into_iter().map(|status| {
                    vec![
                        optional(status.deposit_status),
                        status.open_requests.to_string(),
                    ]
                }),
                &[("open requests", r.total_requests.to_string())],
            )
        }
        ReportName::MeetingSpaceEvents => {
            let r = reports::meeting_space_events(store);
            render(
                &["space type", "events"],
                r.space_types
                    .into_iter()
                    .map(|space| vec![space.space_type, space.events_count.to_string()]),
                &[("events", r.total_events.to_string())],
            )
        }
        ReportName::CardSwipes => {
            let r = reports::card_swipes(store);
            render(
                &["department", "location", "swipes"],
                r.swipes.into_iter().map(|swipes| {
                    vec![
                        optional(swipes.department),
                        optional(swipes.location),
                        swipes.staff_swipes.to_string(),
                    ]
                }),
                &[
                    ("swipes", r.total_swipes.to_string()),
                    ("departments", r.departments.to_string()),
                    ("locations", r.locations.to_string()),
                ],
            )
        }
        ReportName::RoomsNeverReserved => {
            let r = reports::rooms_never_reserved(store);
            render(
                &["building", "room"],
                r.rooms
                    .into_iter()
                    .map(|room| vec![room.building_name, room.room_number]),
                &[("never reserved", r.total_unused.to_string())],
            )
        }
        ReportName::StaffRoster => {
            let r = reports::staff_roster(store);
            render(
                &[
                    "id",
                    "name",
                    "department",
                    "role",
                    "email",
                    "phone",
                    "hired",
                    "active",
                ],
                r.staff.into_iter().map(|member| {
                    vec![
                        member.staff_id.to_string(),
                        format!("{} {}", member.first_name, member.last_name),
                        optional(member.department),
                        optional(member.role),
                        optional(member.email),
                        optional(member.phone),
                        optional(member.hire_date),
                        yes_no(member.is_active),
                    ]
                }),
                &[
                    ("staff members", r.total_staff.to_string()),
                    ("active", r.active_staff.to_string()),
                ],
            )
        }
    }
}

/// Render a table of the report rows, followed by a second table of the derived statistics
fn render(
    header: &[&str],
    rows: impl Iterator<Item = Vec<String>>,
    statistics: &[(&str, String)],
) -> String {
    let mut table = comfy_table::Table::new();
    table
        .load_preset(comfy_table::presets::ASCII_BORDERS_ONLY_CONDENSED)
        .set_header(header.to_vec())
        .set_content_arrangement(comfy_table::ContentArrangement::Dynamic)
        .add_rows(rows);

    let mut summary = comfy_table::Table::new();
    summary
        .load_preset(comfy_table::presets::NOTHING)
        .add_rows(
            statistics
                .iter()
                .map(|(name, value)| vec![format!("{}:", name), value.clone()]),
        );

    format!("{table}\n\n{summary}")
}

fn optional<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn yes_no(value: Option<bool>) -> String {
    match value {
        Some(true) => "yes",
        Some(false) => "no",
        None => "",
    }
    .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_store::models::{RoomCountByStatus, UnreservedRoom};
    use crate::data_store::store_mock::StoreMock;

    #[test]
    fn test_render_room_list() {
        let store = StoreMock::default();
        store.data.lock().unwrap().room_counts_by_status = vec![
            RoomCountByStatus {
                building_name: "North Wing".to_string(),
                room_status: "available".to_string(),
                num_rooms: 2,
            },
            RoomCountByStatus {
                building_name: "North Wing".to_string(),
                room_status: "occupied".to_string(),
                num_rooms: 1,
            },
        ];
        let output = render_report(ReportName::RoomList, &store);
        assert!(output.contains("North Wing"));
        assert!(output.contains("occupied"));
        assert!(output.contains("available rooms:"));
    }

    #[test]
    fn test_render_failing_report_is_empty() {
        let store = StoreMock::default();
        {
            let mut data = store.data.lock().unwrap();
            data.rooms_never_reserved = vec![UnreservedRoom {
                building_name: "South Wing".to_string(),
                room_number: "211".to_string(),
            }];
            data.fail_queries = true;
        }
        let output = render_report(ReportName::RoomsNeverReserved, &store);
        assert!(!output.contains("South Wing"));
        assert!(output.contains("never reserved:"));
    }

    #[test]
    fn test_optional_values() {
        assert_eq!(optional(Some(42)), "42");
        assert_eq!(optional::<String>(None), "");
        assert_eq!(yes_no(Some(false)), "no");
        assert_eq!(yes_no(None), "");
    }
}
