//! The reports shown on the hotel's pages
//!
//! Each report consists of the rows of one store query and the statistics derived from them. The
//! loader functions ([guest_rooms], [room_list], ...) never fail: If the database cannot be
//! reached or a query fails, the error is logged and the report is built from an empty list of
//! rows, such that all derived statistics are zero.
//!
//! The `from_rows` constructors contain the pure aggregation logic and are independent of the
//! database.

use crate::data_store::models::*;
use crate::data_store::{HotelStore, HotelStoreFacade, StoreError};
use log::error;
use std::collections::BTreeSet;

/// Room status of rooms that can be booked
pub const AVAILABLE_STATUS: &str = "available";

/// Number of days shown in the customer's reservation overview
pub const RECENT_RESERVATION_DAYS: i64 = 10;

/// Run a single store query with its own database connection and return its rows, or an empty
/// list if the connection or the query fails.
fn query_or_empty<T>(
    store: &dyn HotelStore,
    query_name: &str,
    query: impl FnOnce(&mut dyn HotelStoreFacade) -> Result<Vec<T>, StoreError>,
) -> Vec<T> {
    let result = store
        .get_facade()
        .and_then(|mut facade| query(&mut *facade));
    match result {
        Ok(rows) => rows,
        Err(e) => {
            error!("Query for {} failed, showing empty result: {}", query_name, e);
            Vec::new()
        }
    }
}

#[derive(Debug, Default)]
pub struct GuestRoomsReport {
    pub rooms: Vec<AvailableGuestRoom>,
    pub total_rooms: usize,
}

impl GuestRoomsReport {
    pub fn from_rows(rooms: Vec<AvailableGuestRoom>) -> Self {
        Self {
            total_rooms: rooms.len(),
            rooms,
        }
    }
}

pub fn guest_rooms(store: &dyn HotelStore) -> GuestRoomsReport {
    GuestRoomsReport::from_rows(query_or_empty(store, "available guest rooms", |s| {
        s.get_available_guest_rooms()
    }))
}

#[derive(Debug, Default)]
pub struct MeetingSpacesReport {
    pub spaces: Vec<MeetingSpace>,
    pub total_spaces: usize,
}

impl MeetingSpacesReport {
    pub fn from_rows(spaces: Vec<MeetingSpace>) -> Self {
        Self {
            total_spaces: spaces.len(),
            spaces,
        }
    }
}

pub fn meeting_spaces(store: &dyn HotelStore) -> MeetingSpacesReport {
    MeetingSpacesReport::from_rows(query_or_empty(store, "meeting spaces", |s| {
        s.get_meeting_spaces()
    }))
}

#[derive(Debug, Default)]
pub struct ReservationsPerDayReport {
    pub days: Vec<ReservationsPerDay>,
    /// Sum of the reservations of all listed days
    pub total_reservations: i64,
    pub total_days: usize,
    /// Mean number of reservations per listed day. 0 if no day is listed.
    pub avg_per_day: f64,
}

impl ReservationsPerDayReport {
    pub fn from_rows(days: Vec<ReservationsPerDay>) -> Self {
        let total_reservations = days.iter().map(|d| d.num_reservations).sum();
        let total_days = days.len();
        Self {
            total_reservations,
            total_days,
            avg_per_day: mean(total_reservations as f64, total_days),
            days,
        }
    }
}

/// Reservations per day for the [RECENT_RESERVATION_DAYS] most recent days, latest day first
pub fn recent_reservations_per_day(store: &dyn HotelStore) -> ReservationsPerDayReport {
    ReservationsPerDayReport::from_rows(query_or_empty(
        store,
        "recent reservations per day",
        |s| s.get_reservations_per_day(Some(RECENT_RESERVATION_DAYS)),
    ))
}

/// Reservations per day for all days, in chronological order
pub fn reservations_per_day(store: &dyn HotelStore) -> ReservationsPerDayReport {
    ReservationsPerDayReport::from_rows(query_or_empty(store, "reservations per day", |s| {
        s.get_reservations_per_day(None)
    }))
}

#[derive(Debug, Default)]
pub struct RoomListReport {
    pub rooms: Vec<RoomCountByStatus>,
    pub total_rooms: i64,
    /// Number of rooms in status [AVAILABLE_STATUS], summed over all buildings
    pub available_rooms: i64,
}

impl RoomListReport {
    pub fn from_rows(rooms: Vec<RoomCountByStatus>) -> Self {
        Self {
            total_rooms: rooms.iter().map(|r| r.num_rooms).sum(),
            available_rooms: rooms
                .iter()
                .filter(|r| r.room_status == AVAILABLE_STATUS)
                .map(|r| r.num_rooms)
                .sum(),
            rooms,
        }
    }
}

pub fn room_list(store: &dyn HotelStore) -> RoomListReport {
    RoomListReport::from_rows(query_or_empty(store, "room counts by status", |s| {
        s.get_room_counts_by_status()
    }))
}

#[derive(Debug, Default)]
pub struct StayLengthReport {
    pub room_types: Vec<StayLengthByRoomType>,
    pub total_bookings: i64,
    /// Average stay length over all bookings of all room types. `None` if there are no bookings.
    pub overall_avg_nights: Option<f64>,
}

impl StayLengthReport {
    pub fn from_rows(room_types: Vec<StayLengthByRoomType>) -> Self {
        let (weighted_nights, counted_bookings) = room_types
            .iter()
            .filter_map(|r| r.avg_nights.map(|avg| (avg, r.num_room_bookings)))
            .fold((0.0, 0), |(nights, bookings), (avg, count)| {
                (nights + avg * count as f64, bookings + count)
            });
        Self {
            total_bookings: room_types.iter().map(|r| r.num_room_bookings).sum(),
            overall_avg_nights: (counted_bookings > 0)
                .then(|| weighted_nights / counted_bookings as f64),
            room_types,
        }
    }
}

pub fn stay_length(store: &dyn HotelStore) -> StayLengthReport {
    StayLengthReport::from_rows(query_or_empty(store, "stay length by room type", |s| {
        s.get_stay_length_by_room_type()
    }))
}

#[derive(Debug, Default)]
pub struct RevenueReport {
    pub months: Vec<MonthlyRevenue>,
    pub total_revenue: f64,
    pub total_transactions: i64,
    pub months_tracked: usize,
}

impl RevenueReport {
    pub fn from_rows(months: Vec<MonthlyRevenue>) -> Self {
        Self {
            total_revenue: months.iter().filter_map(|m| m.total_revenue).sum(),
            total_transactions: months.iter().map(|m| m.num_transactions).sum(),
            months_tracked: months.len(),
            months,
        }
    }
}

pub fn revenue(store: &dyn HotelStore) -> RevenueReport {
    RevenueReport::from_rows(query_or_empty(store, "monthly revenue", |s| {
        s.get_monthly_revenue()
    }))
}

#[derive(Debug, Default)]
pub struct CustomerBillingReport {
    pub customers: Vec<CustomerBilling>,
    pub total_customers: usize,
    pub total_revenue: f64,
}

impl CustomerBillingReport {
    pub fn from_rows(customers: Vec<CustomerBilling>) -> Self {
        Self {
            total_customers: customers.len(),
            total_revenue: customers.iter().filter_map(|c| c.total_billed).sum(),
            customers,
        }
    }
}

pub fn customer_billing(store: &dyn HotelStore) -> CustomerBillingReport {
    CustomerBillingReport::from_rows(query_or_empty(store, "billing by customer", |s| {
        s.get_billing_by_customer()
    }))
}

#[derive(Debug, Default)]
pub struct OpenRequestsReport {
    pub deposit_statuses: Vec<OpenRequestsByDepositStatus>,
    pub total_requests: i64,
}

impl OpenRequestsReport {
    pub fn from_rows(deposit_statuses: Vec<OpenRequestsByDepositStatus>) -> Self {
        Self {
            total_requests: deposit_statuses.iter().map(|r| r.open_requests).sum(),
            deposit_statuses,
        }
    }
}

pub fn open_requests(store: &dyn HotelStore) -> OpenRequestsReport {
    OpenRequestsReport::from_rows(query_or_empty(
        store,
        "open requests by deposit status",
        |s| s.get_open_requests_by_deposit_status(),
    ))
}

#[derive(Debug, Default)]
pub struct MeetingSpaceEventsReport {
    pub space_types: Vec<MeetingSpaceEvents>,
    pub total_events: i64,
}

impl MeetingSpaceEventsReport {
    pub fn from_rows(space_types: Vec<MeetingSpaceEvents>) -> Self {
        Self {
            total_events: space_types.iter().map(|s| s.events_count).sum(),
            space_types,
        }
    }
}

pub fn meeting_space_events(store: &dyn HotelStore) -> MeetingSpaceEventsReport {
    MeetingSpaceEventsReport::from_rows(query_or_empty(store, "meeting space events", |s| {
        s.get_meeting_space_events()
    }))
}

#[derive(Debug, Default)]
pub struct CardSwipesReport {
    pub swipes: Vec<CardSwipesByLocation>,
    pub total_swipes: i64,
    /// Number of distinct (non-empty) departments
    pub departments: usize,
    /// Number of distinct (non-empty) card reader locations
    pub locations: usize,
}

impl CardSwipesReport {
    pub fn from_rows(swipes: Vec<CardSwipesByLocation>) -> Self {
        Self {
            total_swipes: swipes.iter().map(|s| s.staff_swipes).sum(),
            departments: count_distinct(swipes.iter().map(|s| s.department.as_deref())),
            locations: count_distinct(swipes.iter().map(|s| s.location.as_deref())),
            swipes,
        }
    }
}

pub fn card_swipes(store: &dyn HotelStore) -> CardSwipesReport {
    CardSwipesReport::from_rows(query_or_empty(store, "card swipes by location", |s| {
        s.get_card_swipes_by_location()
    }))
}

#[derive(Debug, Default)]
pub struct UnreservedRoomsReport {
    pub rooms: Vec<UnreservedRoom>,
    pub total_unused: usize,
}

impl UnreservedRoomsReport {
    pub fn from_rows(rooms: Vec<UnreservedRoom>) -> Self {
        Self {
            total_unused: rooms.len(),
            rooms,
        }
    }
}

pub fn rooms_never_reserved(store: &dyn HotelStore) -> UnreservedRoomsReport {
    UnreservedRoomsReport::from_rows(query_or_empty(store, "rooms never reserved", |s| {
        s.get_rooms_never_reserved()
    }))
}

#[derive(Debug, Default)]
pub struct StaffRosterReport {
    pub staff: Vec<StaffMember>,
    pub total_staff: usize,
    pub active_staff: usize,
}

impl StaffRosterReport {
    pub fn from_rows(staff: Vec<StaffMember>) -> Self {
        Self {
            total_staff: staff.len(),
            active_staff: staff
                .iter()
                .filter(|s| s.is_active.unwrap_or(false))
                .count(),
            staff,
        }
    }
}

pub fn staff_roster(store: &dyn HotelStore) -> StaffRosterReport {
    StaffRosterReport::from_rows(query_or_empty(store, "staff roster", |s| s.get_staff()))
}

/// All room types followed by all meeting space types, for selection on the booking page
pub fn bookable_types(store: &dyn HotelStore) -> Vec<BookableType> {
    let mut types = query_or_empty(store, "room types", |s| s.get_room_types());
    types.extend(query_or_empty(store, "meeting space types", |s| {
        s.get_meeting_space_types()
    }));
    types
}

fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

fn count_distinct<'a>(values: impl Iterator<Item = Option<&'a str>>) -> usize {
    values
        .flatten()
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_store::store_mock::StoreMock;

    fn room_count(building: &str, status: &str, num_rooms: i64) -> RoomCountByStatus {
        RoomCountByStatus {
            building_name: building.to_string(),
            room_status: status.to_string(),
            num_rooms,
        }
    }

    fn swipes(
        department: Option<&str>,
        location: Option<&str>,
        count: i64,
    ) -> CardSwipesByLocation {
        CardSwipesByLocation {
            department: department.map(str::to_string),
            location: location.map(str::to_string),
            staff_swipes: count,
        }
    }

    #[test]
    fn test_empty_reports_have_zero_statistics() {
        let reservations = ReservationsPerDayReport::from_rows(vec![]);
        assert_eq!(reservations.total_reservations, 0);
        assert_eq!(reservations.total_days, 0);
        assert_eq!(reservations.avg_per_day, 0.0);

        let stays = StayLengthReport::from_rows(vec![]);
        assert_eq!(stays.total_bookings, 0);
        assert_eq!(stays.overall_avg_nights, None);

        let revenue = RevenueReport::from_rows(vec![]);
        assert_eq!(revenue.total_revenue, 0.0);
        assert_eq!(revenue.total_transactions, 0);
        assert_eq!(revenue.months_tracked, 0);

        let card_swipes = CardSwipesReport::from_rows(vec![]);
        assert_eq!(card_swipes.total_swipes, 0);
        assert_eq!(card_swipes.departments, 0);
        assert_eq!(card_swipes.locations, 0);

        assert_eq!(RoomListReport::from_rows(vec![]).available_rooms, 0);
        assert_eq!(CustomerBillingReport::from_rows(vec![]).total_revenue, 0.0);
        assert_eq!(StaffRosterReport::from_rows(vec![]).active_staff, 0);
    }

    #[test]
    fn test_room_list_totals() {
        let report = RoomListReport::from_rows(vec![
            room_count("North Wing", "available", 2),
            room_count("North Wing", "occupied", 1),
            room_count("South Wing", "available", 1),
            room_count("South Wing", "maintenance", 4),
        ]);
        assert_eq!(report.total_rooms, 8);
        assert_eq!(report.available_rooms, 3);
        assert_eq!(report.rooms.len(), 4);
    }

    #[test]
    fn test_reservations_per_day_average() {
        let report = ReservationsPerDayReport::from_rows(vec![
            ReservationsPerDay {
                day: "2025-03-01".parse().ok(),
                num_reservations: 3,
            },
            ReservationsPerDay {
                day: "2025-03-02".parse().ok(),
                num_reservations: 1,
            },
            ReservationsPerDay {
                day: None,
                num_reservations: 2,
            },
        ]);
        assert_eq!(report.total_reservations, 6);
        assert_eq!(report.total_days, 3);
        assert_eq!(report.avg_per_day, 2.0);
    }

    #[test]
    fn test_stay_length_overall_average_is_weighted() {
        let report = StayLengthReport::from_rows(vec![
            StayLengthByRoomType {
                room_type: "Suite".to_string(),
                avg_nights: Some(4.0),
                num_room_bookings: 1,
            },
            StayLengthByRoomType {
                room_type: "Double".to_string(),
                avg_nights: Some(1.0),
                num_room_bookings: 3,
            },
            StayLengthByRoomType {
                room_type: "Broken".to_string(),
                avg_nights: None,
                num_room_bookings: 2,
            },
        ]);
        assert_eq!(report.total_bookings, 6);
        assert_eq!(report.overall_avg_nights, Some(1.75));
    }

    #[test]
    fn test_revenue_totals() {
        let report = RevenueReport::from_rows(vec![
            MonthlyRevenue {
                year: Some(2025),
                month: Some(3),
                total_revenue: Some(600.0),
                num_transactions: 2,
            },
            MonthlyRevenue {
                year: Some(2025),
                month: Some(4),
                total_revenue: Some(300.5),
                num_transactions: 1,
            },
            MonthlyRevenue {
                year: None,
                month: None,
                total_revenue: None,
                num_transactions: 1,
            },
        ]);
        assert_eq!(report.total_revenue, 900.5);
        assert_eq!(report.total_transactions, 4);
        assert_eq!(report.months_tracked, 3);
    }

    #[test]
    fn test_customer_billing_totals() {
        let report = CustomerBillingReport::from_rows(vec![
            CustomerBilling {
                customer_id: 1,
                last_name: "Lovelace".to_string(),
                first_name: "Ada".to_string(),
                bills: 2,
                total_billed: Some(600.0),
            },
            CustomerBilling {
                customer_id: 2,
                last_name: "Turing".to_string(),
                first_name: "Alan".to_string(),
                bills: 1,
                total_billed: Some(300.25),
            },
        ]);
        assert_eq!(report.total_customers, 2);
        assert_eq!(report.total_revenue, 900.25);
    }

    #[test]
    fn test_card_swipes_distinct_counts() {
        let report = CardSwipesReport::from_rows(vec![
            swipes(Some("Front Desk"), Some("Lobby"), 3),
            swipes(Some("Front Desk"), Some("Service Entrance"), 1),
            swipes(Some("Housekeeping"), Some("Service Entrance"), 2),
            swipes(None, Some("Lobby"), 1),
            swipes(Some(""), None, 1),
        ]);
        assert_eq!(report.total_swipes, 8);
        assert_eq!(report.departments, 2);
        assert_eq!(report.locations, 2);
    }

    #[test]
    fn test_staff_roster_counts_active_members() {
        let member = |staff_id: i32, is_active: Option<bool>| StaffMember {
            staff_id,
            first_name: "Sam".to_string(),
            last_name: "Smith".to_string(),
            email: None,
            phone: None,
            role: None,
            department: None,
            hire_date: None,
            is_active,
        };
        let report = StaffRosterReport::from_rows(vec![
            member(1, Some(true)),
            member(2, Some(false)),
            member(3, None),
            member(4, Some(true)),
        ]);
        assert_eq!(report.total_staff, 4);
        assert_eq!(report.active_staff, 2);
    }

    #[test]
    fn test_open_requests_and_events_totals() {
        let requests = OpenRequestsReport::from_rows(vec![
            OpenRequestsByDepositStatus {
                deposit_status: Some("pending".to_string()),
                open_requests: 2,
            },
            OpenRequestsByDepositStatus {
                deposit_status: None,
                open_requests: 5,
            },
        ]);
        assert_eq!(requests.total_requests, 7);

        let events = MeetingSpaceEventsReport::from_rows(vec![
            MeetingSpaceEvents {
                space_type: "Ballroom".to_string(),
                events_count: 2,
            },
            MeetingSpaceEvents {
                space_type: "Boardroom".to_string(),
                events_count: 0,
            },
        ]);
        assert_eq!(events.total_events, 2);
    }

    #[test]
    fn test_loaders_return_empty_reports_on_store_errors() {
        let store = StoreMock::default();
        {
            let mut data = store.data.lock().unwrap();
            data.room_counts_by_status = vec![room_count("Main", "available", 2)];
            data.fail_queries = true;
        }
        let report = room_list(&store);
        assert!(report.rooms.is_empty());
        assert_eq!(report.total_rooms, 0);

        {
            let mut data = store.data.lock().unwrap();
            data.fail_queries = false;
            data.fail_connection = true;
        }
        assert_eq!(room_list(&store).available_rooms, 0);
        assert!(bookable_types(&store).is_empty());

        store.data.lock().unwrap().fail_connection = false;
        assert_eq!(room_list(&store).available_rooms, 2);
    }

    #[test]
    fn test_bookable_types_lists_rooms_before_meeting_spaces() {
        let store = StoreMock::default();
        {
            let mut data = store.data.lock().unwrap();
            data.meeting_space_types = vec![BookableType {
                type_name: "Ballroom".to_string(),
                type_category: "meeting".to_string(),
            }];
            data.room_types = vec![BookableType {
                type_name: "Suite".to_string(),
                type_category: "room".to_string(),
            }];
        }
        let types = bookable_types(&store);
        assert_eq!(
            types
                .iter()
                .map(|t| t.type_name.as_str())
                .collect::<Vec<_>>(),
            vec!["Suite", "Ballroom"]
        );
    }

    #[test]
    fn test_recent_reservations_are_limited() {
        let store = StoreMock::default();
        store.data.lock().unwrap().reservations_per_day = (1..=15)
            .map(|i| ReservationsPerDay {
                day: None,
                num_reservations: i,
            })
            .collect();
        let recent = recent_reservations_per_day(&store);
        assert_eq!(recent.total_days, 10);
        assert_eq!(recent.total_reservations, 55);
        assert_eq!(reservations_per_day(&store).total_days, 15);
    }
}
