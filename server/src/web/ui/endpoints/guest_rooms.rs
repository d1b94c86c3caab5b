use crate::reports::{self, GuestRoomsReport};
use crate::web::ui::base_template::{BaseTemplateContext, NavArea};
use crate::web::ui::error::AppError;
use crate::web::AppState;
use actix_web::web::Html;
use actix_web::{get, web, HttpRequest, Responder};
use askama::Template;

#[get("/guest_rooms")]
pub async fn guest_rooms(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<impl Responder, AppError> {
    let report = web::block(move || reports::guest_rooms(state.store.as_ref())).await?;

    let tmpl = GuestRoomsTemplate {
        base: BaseTemplateContext {
            request: &req,
            page_title: "Guest Rooms",
            area: NavArea::Customer,
        },
        report: &report,
    };
    Ok(Html::new(tmpl.render()?))
}

#[derive(Template)]
#[template(path = "guest_rooms.html")]
struct GuestRoomsTemplate<'a> {
    base: BaseTemplateContext<'a>,
    report: &'a GuestRoomsReport,
}
