use super::{models, HotelStore, HotelStoreFacade, StoreError};
use diesel::prelude::*;
use diesel::r2d2::ConnectionManager;
use diesel::sql_types::BigInt;
use diesel::sqlite::SqliteConnection;
use std::time::Duration;

/// Maximum time to wait for a database connection before a report is shown empty
const CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct SqliteDataStore {
    pool: diesel::r2d2::Pool<ConnectionManager<SqliteConnection>>,
}

impl SqliteDataStore {
    /// Create a connection pool for the given SQLite database file.
    ///
    /// No connection is opened in advance, so this succeeds even if the database file cannot be
    /// opened. Connection errors are returned from [HotelStore::get_facade] instead.
    pub fn new(database_url: &str) -> Result<Self, StoreError> {
        Self::with_connection_timeout(database_url, CONNECTION_TIMEOUT)
    }

    fn with_connection_timeout(
        database_url: &str,
        connection_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let connection_manager = ConnectionManager::<SqliteConnection>::new(database_url);
        Ok(Self {
            pool: diesel::r2d2::Pool::builder()
                .test_on_check_out(true)
                .min_idle(Some(0))
                .connection_timeout(connection_timeout)
                .build(connection_manager)?,
        })
    }
}

impl HotelStore for SqliteDataStore {
    fn get_facade<'a>(&'a self) -> Result<Box<dyn HotelStoreFacade + 'a>, StoreError> {
        Ok(Box::new(SqliteDataStoreFacade::with_pooled_connection(
            self.pool.get()?,
        )))
    }
}

pub struct SqliteDataStoreFacade {
    connection: diesel::r2d2::PooledConnection<ConnectionManager<SqliteConnection>>,
}

impl SqliteDataStoreFacade {
    pub fn with_pooled_connection(
        connection: diesel::r2d2::PooledConnection<ConnectionManager<SqliteConnection>>,
    ) -> Self {
        Self { connection }
    }
}

impl HotelStoreFacade for SqliteDataStoreFacade {
    fn get_available_guest_rooms(
        &mut self,
    ) -> Result<Vec<models::AvailableGuestRoom>, StoreError> {
        Ok(query_available_guest_rooms(&mut self.connection)?)
    }

    fn get_meeting_spaces(&mut self) -> Result<Vec<models::MeetingSpace>, StoreError> {
        Ok(query_meeting_spaces(&mut self.connection)?)
    }

    fn get_reservations_per_day(
        &mut self,
        most_recent_days: Option<i64>,
    ) -> Result<Vec<models::ReservationsPerDay>, StoreError> {
        Ok(query_reservations_per_day(
            &mut self.connection,
            most_recent_days,
        )?)
    }

    fn get_room_counts_by_status(
        &mut self,
    ) -> Result<Vec<models::RoomCountByStatus>, StoreError> {
        Ok(query_room_counts_by_status(&mut self.connection)?)
    }

    fn get_stay_length_by_room_type(
        &mut self,
    ) -> Result<Vec<models::StayLengthByRoomType>, StoreError> {
        Ok(query_stay_length_by_room_type(&mut self.connection)?)
    }

    fn get_monthly_revenue(&mut self) -> Result<Vec<models::MonthlyRevenue>, StoreError> {
        Ok(query_monthly_revenue(&mut self.connection)?)
    }

    fn get_billing_by_customer(&mut self) -> Result<Vec<models::CustomerBilling>, StoreError> {
        Ok(query_billing_by_customer(&mut self.connection)?)
    }

    fn get_open_requests_by_deposit_status(
        &mut self,
    ) -> Result<Vec<models::OpenRequestsByDepositStatus>, StoreError> {
        Ok(query_open_requests_by_deposit_status(
            &mut self.connection,
        )?)
    }

    fn get_meeting_space_events(
        &mut self,
    ) -> Result<Vec<models::MeetingSpaceEvents>, StoreError> {
        Ok(query_meeting_space_events(&mut self.connection)?)
    }

    fn get_card_swipes_by_location(
        &mut self,
    ) -> Result<Vec<models::CardSwipesByLocation>, StoreError> {
        Ok(query_card_swipes_by_location(&mut self.connection)?)
    }

    fn get_rooms_never_reserved(&mut self) -> Result<Vec<models::UnreservedRoom>, StoreError> {
        Ok(query_rooms_never_reserved(&mut self.connection)?)
    }

    fn get_staff(&mut self) -> Result<Vec<models::StaffMember>, StoreError> {
        Ok(query_staff(&mut self.connection)?)
    }

    fn get_room_types(&mut self) -> Result<Vec<models::BookableType>, StoreError> {
        Ok(query_room_types(&mut self.connection)?)
    }

    fn get_meeting_space_types(&mut self) -> Result<Vec<models::BookableType>, StoreError> {
        Ok(query_meeting_space_types(&mut self.connection)?)
    }
}

// The hotel's database uses camelCase column names. All statements alias the result columns to
// the field names of the corresponding row type in `models`.

fn query_available_guest_rooms(
    connection: &mut SqliteConnection,
) -> QueryResult<Vec<models::AvailableGuestRoom>> {
    diesel::sql_query(
        "SELECT rm.roomId AS room_id, rm.roomNumber AS room_number,
                b.buildingName AS building_name, rt.roomType AS room_type,
                bt.bedType AS bed_type, rm.squareFootage AS square_footage,
                rm.hasPaidBar AS has_paid_bar, rs.status AS room_status
         FROM room AS rm
         JOIN building AS b ON b.buildingId = rm.buildingId
         JOIN room_type AS rt ON rt.roomTypeId = rm.roomTypeId
         LEFT JOIN bed_type AS bt ON bt.bedTypeId = rm.bedTypeId
         JOIN room_status AS rs ON rs.roomStatusId = rm.roomStatusId
         LEFT JOIN meeting_space AS ms ON ms.roomId = rm.roomId
         WHERE ms.roomId IS NULL AND rs.status = 'available'
         ORDER BY b.buildingName, rm.roomNumber",
    )
    .load(connection)
}

fn query_meeting_spaces(
    connection: &mut SqliteConnection,
) -> QueryResult<Vec<models::MeetingSpace>> {
    diesel::sql_query(
        "SELECT ms.roomId AS room_id, rm.roomNumber AS room_number,
                b.buildingName AS building_name, ms.spaceType AS space_type,
                ms.capacity AS capacity, ms.hasProjector AS has_projector,
                ms.hasWhiteboard AS has_whiteboard, ms.hasPaidBar AS has_paid_bar
         FROM meeting_space AS ms
         JOIN room AS rm ON rm.roomId = ms.roomId
         JOIN building AS b ON b.buildingId = rm.buildingId
         ORDER BY ms.spaceType, rm.roomNumber",
    )
    .load(connection)
}

fn query_reservations_per_day(
    connection: &mut SqliteConnection,
    most_recent_days: Option<i64>,
) -> QueryResult<Vec<models::ReservationsPerDay>> {
    match most_recent_days {
        Some(limit) => diesel::sql_query(
            "SELECT date(r.startDateTime) AS day, COUNT(*) AS num_reservations
             FROM reservation AS r
             GROUP BY date(r.startDateTime)
             ORDER BY day DESC
             LIMIT ?",
        )
        .bind::<BigInt, _>(limit)
        .load(connection),
        None => diesel::sql_query(
            "SELECT date(r.startDateTime) AS day, COUNT(*) AS num_reservations
             FROM reservation AS r
             GROUP BY date(r.startDateTime)
             ORDER BY day",
        )
        .load(connection),
    }
}

fn query_room_counts_by_status(
    connection: &mut SqliteConnection,
) -> QueryResult<Vec<models::RoomCountByStatus>> {
    diesel::sql_query(
        "SELECT b.buildingName AS building_name, rs.status AS room_status,
                COUNT(*) AS num_rooms
         FROM building AS b
         JOIN room AS rm ON rm.buildingId = b.buildingId
         JOIN room_status AS rs ON rs.roomStatusId = rm.roomStatusId
         GROUP BY b.buildingName, rs.status
         ORDER BY b.buildingName, num_rooms DESC",
    )
    .load(connection)
}

fn query_stay_length_by_room_type(
    connection: &mut SqliteConnection,
) -> QueryResult<Vec<models::StayLengthByRoomType>> {
    diesel::sql_query(
        "SELECT rt.roomType AS room_type,
                AVG(julianday(r.endDateTime) - julianday(r.startDateTime)) AS avg_nights,
                COUNT(*) AS num_room_bookings
         FROM room_type AS rt
         JOIN room AS rm ON rm.roomTypeId = rt.roomTypeId
         JOIN reservation_room AS rr ON rr.roomId = rm.roomId
         JOIN reservation AS r ON r.reservationId = rr.reservationId
         GROUP BY rt.roomType
         ORDER BY avg_nights DESC",
    )
    .load(connection)
}

fn query_monthly_revenue(
    connection: &mut SqliteConnection,
) -> QueryResult<Vec<models::MonthlyRevenue>> {
    // `transaction` is an SQL keyword, so the table name needs to be quoted
    diesel::sql_query(
        "SELECT CAST(strftime('%Y', t.transactionDate) AS INTEGER) AS year,
                CAST(strftime('%m', t.transactionDate) AS INTEGER) AS month,
                SUM(t.amount) AS total_revenue,
                COUNT(*) AS num_transactions
         FROM \"transaction\" AS t
         GROUP BY strftime('%Y', t.transactionDate), strftime('%m', t.transactionDate)
         ORDER BY year, month",
    )
    .load(connection)
}

fn query_billing_by_customer(
    connection: &mut SqliteConnection,
) -> QueryResult<Vec<models::CustomerBilling>> {
    diesel::sql_query(
        "SELECT c.customerId AS customer_id, c.lastName AS last_name,
                c.firstName AS first_name, COUNT(*) AS bills,
                SUM(b.totalAmount) AS total_billed
         FROM billing AS b
         JOIN customer AS c ON c.customerId = b.customerId
         GROUP BY c.customerId, c.lastName, c.firstName
         ORDER BY total_billed DESC",
    )
    .load(connection)
}

fn query_open_requests_by_deposit_status(
    connection: &mut SqliteConnection,
) -> QueryResult<Vec<models::OpenRequestsByDepositStatus>> {
    diesel::sql_query(
        "SELECT cr.depositStatus AS deposit_status, COUNT(*) AS open_requests
         FROM customer_requests AS cr
         WHERE cr.resolved = 'N'
         GROUP BY cr.depositStatus
         ORDER BY open_requests DESC",
    )
    .load(connection)
}

fn query_meeting_space_events(
    connection: &mut SqliteConnection,
) -> QueryResult<Vec<models::MeetingSpaceEvents>> {
    diesel::sql_query(
        "SELECT ms.spaceType AS space_type, COUNT(DISTINCT er.eventId) AS events_count
         FROM meeting_space AS ms
         LEFT JOIN reservation_room AS rr ON rr.roomId = ms.roomId
         LEFT JOIN event_reservation AS er ON er.reservationId = rr.reservationId
         GROUP BY ms.spaceType
         ORDER BY ms.spaceType",
    )
    .load(connection)
}

fn query_card_swipes_by_location(
    connection: &mut SqliteConnection,
) -> QueryResult<Vec<models::CardSwipesByLocation>> {
    diesel::sql_query(
        "SELECT s.department AS department, rd.location AS location,
                COUNT(*) AS staff_swipes
         FROM reading_info AS ri
         JOIN staff_card_assignment AS sca ON sca.staffcardId = ri.staffcardId
         JOIN staff AS s ON s.staffId = sca.staffId
         JOIN readers AS rd ON rd.readersId = ri.readerID
         GROUP BY s.department, rd.location
         ORDER BY staff_swipes DESC",
    )
    .load(connection)
}

fn query_rooms_never_reserved(
    connection: &mut SqliteConnection,
) -> QueryResult<Vec<models::UnreservedRoom>> {
    diesel::sql_query(
        "SELECT b.buildingName AS building_name, rm.roomNumber AS room_number
         FROM building AS b
         JOIN room AS rm ON rm.buildingId = b.buildingId
         LEFT JOIN reservation_room AS rr ON rr.roomId = rm.roomId
         WHERE rr.roomId IS NULL
         ORDER BY b.buildingName, rm.roomNumber",
    )
    .load(connection)
}

fn query_staff(connection: &mut SqliteConnection) -> QueryResult<Vec<models::StaffMember>> {
    diesel::sql_query(
        "SELECT s.staffId AS staff_id, s.firstName AS first_name, s.lastName AS last_name,
                s.email AS email, s.phone AS phone, s.role AS role,
                s.department AS department, s.hireDate AS hire_date,
                s.isActive AS is_active
         FROM staff AS s
         ORDER BY s.department, s.lastName, s.firstName",
    )
    .load(connection)
}

fn query_room_types(connection: &mut SqliteConnection) -> QueryResult<Vec<models::BookableType>> {
    diesel::sql_query(
        "SELECT DISTINCT rt.roomType AS type_name, 'room' AS type_category
         FROM room_type AS rt
         ORDER BY rt.roomType",
    )
    .load(connection)
}

fn query_meeting_space_types(
    connection: &mut SqliteConnection,
) -> QueryResult<Vec<models::BookableType>> {
    diesel::sql_query(
        "SELECT DISTINCT ms.spaceType AS type_name, 'meeting' AS type_category
         FROM meeting_space AS ms
         ORDER BY ms.spaceType",
    )
    .load(connection)
}
