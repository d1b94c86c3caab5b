use crate::data_store::models::*;
use crate::data_store::store_mock::StoreMock;
use crate::web::ui::configure_app;
use crate::web::AppState;
use actix_web::{http, test, web, App};
use chrono::NaiveDate;
use std::sync::Arc;

const ALL_PAGES: &[&str] = &[
    "/",
    "/signup",
    "/account",
    "/profile",
    "/guest_rooms",
    "/meeting_spaces",
    "/my_reservations",
    "/book",
    "/confirmation",
    "/management",
    "/staff_roster",
    "/card_management",
    "/employee",
    "/employee/rooms",
    "/employee/customer_cards",
    "/employee/room_list",
    "/employee/reservations",
    "/employee/revenue",
    "/employee/rooms_never_reserved",
];

fn sample_store() -> StoreMock {
    let store = StoreMock::default();
    {
        let mut data = store.data.lock().unwrap();
        data.available_guest_rooms = vec![AvailableGuestRoom {
            room_id: 1,
            room_number: "101".to_string(),
            building_name: "North Wing".to_string(),
            room_type: "Double".to_string(),
            bed_type: Some("Queen".to_string()),
            square_footage: Some(320),
            has_paid_bar: Some(true),
            room_status: "available".to_string(),
        }];
        data.reservations_per_day = vec![
            ReservationsPerDay {
                day: NaiveDate::from_ymd_opt(2025, 3, 2),
                num_reservations: 3,
            },
            ReservationsPerDay {
                day: NaiveDate::from_ymd_opt(2025, 3, 1),
                num_reservations: 1,
            },
        ];
        data.room_counts_by_status = vec![
            RoomCountByStatus {
                building_name: "North Wing".to_string(),
                room_status: "available".to_string(),
                num_rooms: 2,
            },
            RoomCountByStatus {
                building_name: "South Wing".to_string(),
                room_status: "maintenance".to_string(),
                num_rooms: 1,
            },
        ];
        data.monthly_revenue = vec![MonthlyRevenue {
            year: Some(2025),
            month: Some(3),
            total_revenue: Some(1234.5),
            num_transactions: 4,
        }];
        data.rooms_never_reserved = vec![UnreservedRoom {
            building_name: "South Wing".to_string(),
            room_number: "211".to_string(),
        }];
        data.room_types = vec![BookableType {
            type_name: "Suite".to_string(),
            type_category: "room".to_string(),
        }];
        data.meeting_space_types = vec![BookableType {
            type_name: "Ballroom".to_string(),
            type_category: "meeting".to_string(),
        }];
    }
    store
}

async fn get_page(store: StoreMock, path: &str) -> (http::StatusCode, String) {
    let state = AppState {
        store: Arc::new(store),
    };
    let app = test::init_service(
        App::new()
            .configure(configure_app)
            .app_data(web::Data::new(state)),
    )
    .await;
    let req = test::TestRequest::get().uri(path).to_request();
    let res = test::call_service(&app, req).await;
    let status = res.status();
    let body = String::from_utf8(test::read_body(res).await.to_vec()).unwrap();
    (status, body)
}

#[actix_web::test]
async fn test_all_pages_render() {
    for path in ALL_PAGES {
        let (status, body) = get_page(sample_store(), path).await;
        assert_eq!(status, http::StatusCode::OK, "GET {}", path);
        assert!(body.contains("Hotel Last Resort"), "GET {}", path);
    }
}

#[actix_web::test]
async fn test_pages_render_when_queries_fail() {
    for path in ALL_PAGES {
        let store = sample_store();
        store.data.lock().unwrap().fail_queries = true;
        let (status, _body) = get_page(store, path).await;
        assert_eq!(status, http::StatusCode::OK, "GET {}", path);
    }
}

#[actix_web::test]
async fn test_pages_render_without_database() {
    for path in ALL_PAGES {
        let store = sample_store();
        store.data.lock().unwrap().fail_connection = true;
        let (status, _body) = get_page(store, path).await;
        assert_eq!(status, http::StatusCode::OK, "GET {}", path);
    }
}

#[actix_web::test]
async fn test_guest_rooms_page() {
    let (_, body) = get_page(sample_store(), "/guest_rooms").await;
    assert!(body.contains("<strong>1</strong> rooms available"));
    assert!(body.contains("Queen"));
    assert!(body.contains("320"));
}

#[actix_web::test]
async fn test_room_list_page() {
    let (_, body) = get_page(sample_store(), "/employee/room_list").await;
    assert!(body.contains("<strong>2</strong> of <strong>3</strong>"));
    assert!(body.contains("maintenance"));
}

#[actix_web::test]
async fn test_room_list_page_with_failing_query() {
    let store = sample_store();
    store.data.lock().unwrap().fail_queries = true;
    let (_, body) = get_page(store, "/employee/room_list").await;
    assert!(body.contains("<strong>0</strong> of <strong>0</strong>"));
    assert!(body.contains("No rooms found."));
}

#[actix_web::test]
async fn test_reservations_pages() {
    let (_, body) = get_page(sample_store(), "/employee/reservations").await;
    assert!(body.contains("<strong>4</strong> reservations on"));
    assert!(body.contains("<strong>2.0</strong> per day"));
    assert!(body.contains("2025-03-02"));

    let (_, body) = get_page(sample_store(), "/my_reservations").await;
    assert!(body.contains("2025-03-01"));
}

#[actix_web::test]
async fn test_revenue_page() {
    let (_, body) = get_page(sample_store(), "/employee/revenue").await;
    assert!(body.contains("1234.50"));
    assert!(body.contains("<strong>4</strong> transactions"));
}

#[actix_web::test]
async fn test_book_page_lists_all_types() {
    let (_, body) = get_page(sample_store(), "/book").await;
    let suite = body.find("Suite").unwrap();
    let ballroom = body.find("Ballroom").unwrap();
    assert!(suite < ballroom);
    assert!(body.contains("(meeting space)"));
}

#[actix_web::test]
async fn test_rooms_never_reserved_page() {
    let (_, body) = get_page(sample_store(), "/employee/rooms_never_reserved").await;
    assert!(body.contains("<strong>1</strong> rooms have never been reserved"));
    assert!(body.contains("211"));
}

#[actix_web::test]
async fn test_navigation_area() {
    let (_, body) = get_page(sample_store(), "/employee/revenue").await;
    assert!(body.contains("href=\"/employee/room_list\""));
    assert!(!body.contains("href=\"/staff_roster\""));
    assert!(body.contains("class=\"active\">Revenue</a>"));
}

#[actix_web::test]
async fn test_login_forms_do_not_submit_credentials() {
    for path in ["/management", "/employee"] {
        let (_, body) = get_page(sample_store(), path).await;
        assert!(body.contains("type=\"password\""), "GET {}", path);
        assert!(!body.contains("name=\"password\""), "GET {}", path);
        assert!(!body.contains("name=\"staff_id\""), "GET {}", path);
    }
}
