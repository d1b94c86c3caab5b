use crate::web::http_error_logging::error_logging_middleware;
use crate::web::ui::error::AppError;
use crate::web::ui::error_page::error_page_middleware;
use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::middleware::from_fn;
use actix_web::{get, web, HttpResponse, Responder};
use rust_embed::Embed;

mod base_template;
mod endpoints;
pub mod error;
mod error_page;

pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.service(
        get_ui_service()
            .wrap(from_fn(error_logging_middleware))
            .wrap(from_fn(error_page_middleware)),
    );
}

fn get_ui_service() -> actix_web::Scope {
    web::scope("")
        .service(static_resources)
        // customer pages
        .service(endpoints::static_pages::home)
        .service(endpoints::static_pages::signup)
        .service(endpoints::account::account)
        .service(endpoints::static_pages::profile)
        .service(endpoints::guest_rooms::guest_rooms)
        .service(endpoints::meeting_spaces::meeting_spaces)
        .service(endpoints::my_reservations::my_reservations)
        .service(endpoints::book::book)
        .service(endpoints::static_pages::confirmation)
        // management pages
        .service(endpoints::static_pages::management_login)
        .service(endpoints::staff_roster::staff_roster)
        .service(endpoints::card_management::card_management)
        // employee pages
        .service(endpoints::static_pages::employee_login)
        .service(endpoints::employee_rooms::employee_rooms)
        .service(endpoints::customer_cards::customer_cards)
        .service(endpoints::room_list::room_list)
        .service(endpoints::employee_reservations::employee_reservations)
        .service(endpoints::revenue::revenue)
        .service(endpoints::rooms_never_reserved::rooms_never_reserved)
        .default_service(web::to(not_found_handler))
}

#[derive(Embed)]
#[folder = "static/"]
struct Resources;

impl Resources {
    fn handle_embedded_file(path: &str) -> HttpResponse {
        match Self::get(path) {
            Some(content) => HttpResponse::Ok()
                .content_type(mime_guess::from_path(path).first_or_octet_stream().as_ref())
                .append_header(CacheControl(vec![CacheDirective::MaxAge(86400 * 365)]))
                .body(content.data.into_owned()),
            None => {
                HttpResponse::NotFound().body(format!("Static resource file '{}' not found", path))
            }
        }
    }
}

#[get("/static/{_:.*}")]
async fn static_resources(path: web::Path<String>) -> impl Responder {
    Resources::handle_embedded_file(path.as_str())
}

async fn not_found_handler() -> Result<&'static str, AppError> {
    Err(AppError::PageNotFound)
}
