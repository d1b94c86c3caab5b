//! Row types of the report queries
//!
//! Each struct corresponds to the result columns of exactly one SQL statement in
//! [super::sqlite]. The column names in the statements are aliased to the snake_case field names
//! used here.
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Bool, Date, Double, Integer, Nullable, Text};

/// A sleeping room (i.e. not a meeting space) in status "available"
#[derive(Clone, Debug, PartialEq, QueryableByName)]
pub struct AvailableGuestRoom {
    #[diesel(sql_type = Integer)]
    pub room_id: i32,
    #[diesel(sql_type = Text)]
    pub room_number: String,
    #[diesel(sql_type = Text)]
    pub building_name: String,
    #[diesel(sql_type = Text)]
    pub room_type: String,
    #[diesel(sql_type = Nullable<Text>)]
    pub bed_type: Option<String>,
    #[diesel(sql_type = Nullable<Integer>)]
    pub square_footage: Option<i32>,
    #[diesel(sql_type = Nullable<Bool>)]
    pub has_paid_bar: Option<bool>,
    #[diesel(sql_type = Text)]
    pub room_status: String,
}

#[derive(Clone, Debug, PartialEq, QueryableByName)]
pub struct MeetingSpace {
    #[diesel(sql_type = Integer)]
    pub room_id: i32,
    #[diesel(sql_type = Text)]
    pub room_number: String,
    #[diesel(sql_type = Text)]
    pub building_name: String,
    #[diesel(sql_type = Text)]
    pub space_type: String,
    #[diesel(sql_type = Nullable<Integer>)]
    pub capacity: Option<i32>,
    #[diesel(sql_type = Nullable<Bool>)]
    pub has_projector: Option<bool>,
    #[diesel(sql_type = Nullable<Bool>)]
    pub has_whiteboard: Option<bool>,
    #[diesel(sql_type = Nullable<Bool>)]
    pub has_paid_bar: Option<bool>,
}

/// Number of reservations starting at a calendar day
#[derive(Clone, Debug, PartialEq, QueryableByName)]
pub struct ReservationsPerDay {
    /// `None` for reservations with an unparsable start timestamp
    #[diesel(sql_type = Nullable<Date>)]
    pub day: Option<NaiveDate>,
    #[diesel(sql_type = BigInt)]
    pub num_reservations: i64,
}

#[derive(Clone, Debug, PartialEq, QueryableByName)]
pub struct RoomCountByStatus {
    #[diesel(sql_type = Text)]
    pub building_name: String,
    #[diesel(sql_type = Text)]
    pub room_status: String,
    #[diesel(sql_type = BigInt)]
    pub num_rooms: i64,
}

/// Average length of stay (in days) of all bookings of rooms of one room type
#[derive(Clone, Debug, PartialEq, QueryableByName)]
pub struct StayLengthByRoomType {
    #[diesel(sql_type = Text)]
    pub room_type: String,
    #[diesel(sql_type = Nullable<Double>)]
    pub avg_nights: Option<f64>,
    #[diesel(sql_type = BigInt)]
    pub num_room_bookings: i64,
}

#[derive(Clone, Debug, PartialEq, QueryableByName)]
pub struct MonthlyRevenue {
    #[diesel(sql_type = Nullable<Integer>)]
    pub year: Option<i32>,
    #[diesel(sql_type = Nullable<Integer>)]
    pub month: Option<i32>,
    #[diesel(sql_type = Nullable<Double>)]
    pub total_revenue: Option<f64>,
    #[diesel(sql_type = BigInt)]
    pub num_transactions: i64,
}

/// Billing totals of one customer
#[derive(Clone, Debug, PartialEq, QueryableByName)]
pub struct CustomerBilling {
    #[diesel(sql_type = Integer)]
    pub customer_id: i32,
    #[diesel(sql_type = Text)]
    pub last_name: String,
    #[diesel(sql_type = Text)]
    pub first_name: String,
    #[diesel(sql_type = BigInt)]
    pub bills: i64,
    #[diesel(sql_type = Nullable<Double>)]
    pub total_billed: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, QueryableByName)]
pub struct OpenRequestsByDepositStatus {
    #[diesel(sql_type = Nullable<Text>)]
    pub deposit_status: Option<String>,
    #[diesel(sql_type = BigInt)]
    pub open_requests: i64,
}

#[derive(Clone, Debug, PartialEq, QueryableByName)]
pub struct MeetingSpaceEvents {
    #[diesel(sql_type = Text)]
    pub space_type: String,
    #[diesel(sql_type = BigInt)]
    pub events_count: i64,
}

/// Number of staff card swipes of one department at one card reader location
#[derive(Clone, Debug, PartialEq, QueryableByName)]
pub struct CardSwipesByLocation {
    #[diesel(sql_type = Nullable<Text>)]
    pub department: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub location: Option<String>,
    #[diesel(sql_type = BigInt)]
    pub staff_swipes: i64,
}

#[derive(Clone, Debug, PartialEq, QueryableByName)]
pub struct UnreservedRoom {
    #[diesel(sql_type = Text)]
    pub building_name: String,
    #[diesel(sql_type = Text)]
    pub room_number: String,
}

#[derive(Clone, Debug, PartialEq, QueryableByName)]
pub struct StaffMember {
    #[diesel(sql_type = Integer)]
    pub staff_id: i32,
    #[diesel(sql_type = Text)]
    pub first_name: String,
    #[diesel(sql_type = Text)]
    pub last_name: String,
    #[diesel(sql_type = Nullable<Text>)]
    pub email: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub phone: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub role: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub department: Option<String>,
    /// Kept as text, as the hire dates are not consistently formatted in the hotel's database
    #[diesel(sql_type = Nullable<Text>)]
    pub hire_date: Option<String>,
    #[diesel(sql_type = Nullable<Bool>)]
    pub is_active: Option<bool>,
}

/// A room type or meeting space type, which can be selected on the booking page
#[derive(Clone, Debug, PartialEq, QueryableByName)]
pub struct BookableType {
    #[diesel(sql_type = Text)]
    pub type_name: String,
    /// "room" or "meeting"
    #[diesel(sql_type = Text)]
    pub type_category: String,
}
