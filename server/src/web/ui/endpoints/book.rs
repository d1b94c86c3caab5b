use crate::data_store::models::BookableType;
use crate::reports;
use crate::web::ui::base_template::{BaseTemplateContext, NavArea};
use crate::web::ui::error::AppError;
use crate::web::AppState;
use actix_web::web::Html;
use actix_web::{get, web, HttpRequest, Responder};
use askama::Template;

/// Booking form with a selection of all room types and meeting space types.
///
/// Bookings are not stored. The form leads to the confirmation page.
#[get("/book")]
pub async fn book(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<impl Responder, AppError> {
    let all_types = web::block(move || reports::bookable_types(state.store.as_ref())).await?;

    let tmpl = BookTemplate {
        base: BaseTemplateContext {
            request: &req,
            page_title: "Book",
            area: NavArea::Customer,
        },
        all_types: &all_types,
    };
    Ok(Html::new(tmpl.render()?))
}

#[derive(Template)]
#[template(path = "book.html")]
struct BookTemplate<'a> {
    base: BaseTemplateContext<'a>,
    all_types: &'a [BookableType],
}
