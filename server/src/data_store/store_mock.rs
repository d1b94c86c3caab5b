use crate::data_store::models::*;
use crate::data_store::{HotelStore, HotelStoreFacade, StoreError};
use std::sync::Mutex;

/**
 * A mock [HotelStore] implementation for testing.
 *
 * The simulated database consists of the [StoreMockData] structure with one vector of rows per
 * report query. These can be directly modified by the tests. The rows are returned as they are,
 * i.e. the mock does not sort or filter them.
 *
 * The flags [StoreMockData::fail_connection] and [StoreMockData::fail_queries] can be set to
 * simulate an unreachable database or failing queries.
 */
#[derive(Default)]
pub struct StoreMock {
    pub data: Mutex<StoreMockData>,
}

impl HotelStore for StoreMock {
    fn get_facade<'a>(&'a self) -> Result<Box<dyn HotelStoreFacade + 'a>, StoreError> {
        let data = self.data.lock().expect("Error while locking mutex.");
        if data.fail_connection {
            return Err(StoreError::ConnectionError(
                "unable to open database file".to_owned(),
            ));
        }
        Ok(Box::new(StoreMockFacade { store: self }))
    }
}

#[derive(Default)]
pub struct StoreMockData {
    pub available_guest_rooms: Vec<AvailableGuestRoom>,
    pub meeting_spaces: Vec<MeetingSpace>,
    pub reservations_per_day: Vec<ReservationsPerDay>,
    pub room_counts_by_status: Vec<RoomCountByStatus>,
    pub stay_length_by_room_type: Vec<StayLengthByRoomType>,
    pub monthly_revenue: Vec<MonthlyRevenue>,
    pub billing_by_customer: Vec<CustomerBilling>,
    pub open_requests_by_deposit_status: Vec<OpenRequestsByDepositStatus>,
    pub meeting_space_events: Vec<MeetingSpaceEvents>,
    pub card_swipes_by_location: Vec<CardSwipesByLocation>,
    pub rooms_never_reserved: Vec<UnreservedRoom>,
    pub staff: Vec<StaffMember>,
    pub room_types: Vec<BookableType>,
    pub meeting_space_types: Vec<BookableType>,
    /// If true, getting a facade from the store fails with a connection error
    pub fail_connection: bool,
    /// If true, every query fails with a query error
    pub fail_queries: bool,
}

struct StoreMockFacade<'a> {
    store: &'a StoreMock,
}

impl StoreMockFacade<'_> {
    fn rows<T: Clone>(
        &self,
        select: impl FnOnce(&StoreMockData) -> &Vec<T>,
    ) -> Result<Vec<T>, StoreError> {
        let data = self.store.data.lock().expect("Error while locking mutex.");
        if data.fail_queries {
            return Err(StoreError::QueryError(diesel::result::Error::NotFound));
        }
        Ok(select(&*data).clone())
    }
}

impl HotelStoreFacade for StoreMockFacade<'_> {
    fn get_available_guest_rooms(&mut self) -> Result<Vec<AvailableGuestRoom>, StoreError> {
        self.rows(|d| &d.available_guest_rooms)
    }

    fn get_meeting_spaces(&mut self) -> Result<Vec<MeetingSpace>, StoreError> {
        self.rows(|d| &d.meeting_spaces)
    }

    fn get_reservations_per_day(
        &mut self,
        most_recent_days: Option<i64>,
    ) -> Result<Vec<ReservationsPerDay>, StoreError> {
        let mut rows = self.rows(|d| &d.reservations_per_day)?;
        if let Some(limit) = most_recent_days {
            rows.truncate(limit as usize);
        }
        Ok(rows)
    }

    fn get_room_counts_by_status(&mut self) -> Result<Vec<RoomCountByStatus>, StoreError> {
        self.rows(|d| &d.room_counts_by_status)
    }

    fn get_stay_length_by_room_type(&mut self) -> Result<Vec<StayLengthByRoomType>, StoreError> {
        self.rows(|d| &d.stay_length_by_room_type)
    }

    fn get_monthly_revenue(&mut self) -> Result<Vec<MonthlyRevenue>, StoreError> {
        self.rows(|d| &d.monthly_revenue)
    }

    fn get_billing_by_customer(&mut self) -> Result<Vec<CustomerBilling>, StoreError> {
        self.rows(|d| &d.billing_by_customer)
    }

    fn get_open_requests_by_deposit_status(
        &mut self,
    ) -> Result<Vec<OpenRequestsByDepositStatus>, StoreError> {
        self.rows(|d| &d.open_requests_by_deposit_status)
    }

    fn get_meeting_space_events(&mut self) -> Result<Vec<MeetingSpaceEvents>, StoreError> {
        self.rows(|d| &d.meeting_space_events)
    }

    fn get_card_swipes_by_location(&mut self) -> Result<Vec<CardSwipesByLocation>, StoreError> {
        self.rows(|d| &d.card_swipes_by_location)
    }

    fn get_rooms_never_reserved(&mut self) -> Result<Vec<UnreservedRoom>, StoreError> {
        self.rows(|d| &d.rooms_never_reserved)
    }

    fn get_staff(&mut self) -> Result<Vec<StaffMember>, StoreError> {
        self.rows(|d| &d.staff)
    }

    fn get_room_types(&mut self) -> Result<Vec<BookableType>, StoreError> {
        self.rows(|d| &d.room_types)
    }

    fn get_meeting_space_types(&mut self) -> Result<Vec<BookableType>, StoreError> {
        self.rows(|d| &d.meeting_space_types)
    }
}
