//! The database interface
//!
//! The primary entry point to this module is the function [get_store_from_env], which returns an
//! object implementing the [HotelStore] trait. This object can be shared between threads in a
//! global application state and be used to create [HotelStoreFacade] instances for interaction
//! with the database. Each facade holds one database connection and provides one method per
//! report query, returning the rows as the data models from the [models] module.
//!
//! The primary implementation of [HotelStore] ([sqlite::SqliteDataStore]) wraps a connection pool
//! for the hotel's SQLite database file. Its facades ([sqlite::SqliteDataStoreFacade]) hold a
//! pooled connection each, which is returned to the pool when the facade is dropped.
//!
//! There is also a mock implementation for unittests.

use crate::cli_error::CliError;
use crate::setup;

pub mod models;
pub(crate) mod sqlite;
#[cfg(test)]
pub mod store_mock;

/// Get a [HotelStore] instance for the SQLite database file given by the "DATABASE_URL"
/// environment variable (or its default value).
pub fn get_store_from_env() -> Result<impl HotelStore, CliError> {
    Ok(sqlite::SqliteDataStore::new(
        &setup::get_database_url_from_env()?,
    )?)
}

/// Read-only access to the hotel database, using a single database connection.
///
/// All queries return their rows in the order required for presenting them. No method modifies
/// the database.
pub trait HotelStoreFacade {
    /// Sleeping rooms (excluding meeting spaces) in status "available", ordered by building name
    /// and room number
    fn get_available_guest_rooms(&mut self)
        -> Result<Vec<models::AvailableGuestRoom>, StoreError>;

    /// Meeting spaces with their amenities, ordered by space type and room number
    fn get_meeting_spaces(&mut self) -> Result<Vec<models::MeetingSpace>, StoreError>;

    /// Number of reservations per calendar day of the reservation start.
    ///
    /// If `most_recent_days` is given, only the given number of most recent days is returned,
    /// latest day first. Otherwise, all days are returned in chronological order.
    fn get_reservations_per_day(
        &mut self,
        most_recent_days: Option<i64>,
    ) -> Result<Vec<models::ReservationsPerDay>, StoreError>;

    /// Number of rooms per building and room status
    fn get_room_counts_by_status(&mut self)
        -> Result<Vec<models::RoomCountByStatus>, StoreError>;

    /// Average stay length per room type, longest average first. Room types without any booking
    /// are not included.
    fn get_stay_length_by_room_type(
        &mut self,
    ) -> Result<Vec<models::StayLengthByRoomType>, StoreError>;

    /// Transaction sums per calendar month, in chronological order
    fn get_monthly_revenue(&mut self) -> Result<Vec<models::MonthlyRevenue>, StoreError>;

    /// Billing totals per customer, highest total first. Customers without bills are not
    /// included.
    fn get_billing_by_customer(&mut self) -> Result<Vec<models::CustomerBilling>, StoreError>;

    /// Number of unresolved customer requests per deposit status, most frequent first
    fn get_open_requests_by_deposit_status(
        &mut self,
    ) -> Result<Vec<models::OpenRequestsByDepositStatus>, StoreError>;

    /// Number of distinct events per meeting space type
    fn get_meeting_space_events(&mut self)
        -> Result<Vec<models::MeetingSpaceEvents>, StoreError>;

    /// Number of staff card swipes per department and card reader location, most frequent first
    fn get_card_swipes_by_location(
        &mut self,
    ) -> Result<Vec<models::CardSwipesByLocation>, StoreError>;

    /// Rooms which do not appear in any reservation, ordered by building name and room number
    fn get_rooms_never_reserved(&mut self) -> Result<Vec<models::UnreservedRoom>, StoreError>;

    /// All staff members, ordered by department, last name and first name
    fn get_staff(&mut self) -> Result<Vec<models::StaffMember>, StoreError>;

    /// Distinct room types (category "room"), in alphabetical order
    fn get_room_types(&mut self) -> Result<Vec<models::BookableType>, StoreError>;

    /// Distinct meeting space types (category "meeting"), in alphabetical order
    fn get_meeting_space_types(&mut self) -> Result<Vec<models::BookableType>, StoreError>;
}

pub trait HotelStore: Send + Sync {
    fn get_facade<'a>(&'a self) -> Result<Box<dyn HotelStoreFacade + 'a>, StoreError>;
}

#[derive(Debug)]
pub enum StoreError {
    /// Connecting to the database failed. See string description for details.
    ConnectionError(String),
    /// The query could not be executed because of some error not covered by the other members (see
    /// string description)
    QueryError(diesel::result::Error),
    /// Some data queried from the database could not be deserialized. See string description for
    /// details.
    InvalidDataInDatabase(String),
}

impl From<diesel::result::Error> for StoreError {
    fn from(error: diesel::result::Error) -> Self {
        match error {
            diesel::result::Error::DeserializationError(e) => {
                Self::InvalidDataInDatabase(e.to_string())
            }
            _ => Self::QueryError(error),
        }
    }
}

impl From<r2d2::Error> for StoreError {
    fn from(error: r2d2::Error) -> Self {
        Self::ConnectionError(error.to_string())
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Error connecting to database: {}", e),
            Self::QueryError(e) => write!(f, "Error while executing database query: {}", e),
            Self::InvalidDataInDatabase(e) => {
                write!(f, "Data queried from database could not be deserialized: {}", e)
            }
        }
    }
}

impl std::error::Error for StoreError {}
