pub mod account;
pub mod book;
pub mod card_management;
pub mod customer_cards;
pub mod employee_reservations;
pub mod employee_rooms;
pub mod guest_rooms;
pub mod meeting_spaces;
pub mod my_reservations;
pub mod revenue;
pub mod room_list;
pub mod rooms_never_reserved;
pub mod staff_roster;
pub mod static_pages;

#[cfg(test)]
mod tests;
