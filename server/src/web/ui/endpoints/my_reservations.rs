use crate::reports::{self, ReservationsPerDayReport};
use crate::web::ui::base_template::{BaseTemplateContext, NavArea};
use crate::web::ui::error::AppError;
use crate::web::AppState;
use actix_web::web::Html;
use actix_web::{get, web, HttpRequest, Responder};
use askama::Template;

#[get("/my_reservations")]
pub async fn my_reservations(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<impl Responder, AppError> {
    let report =
        web::block(move || reports::recent_reservations_per_day(state.store.as_ref())).await?;

    let tmpl = MyReservationsTemplate {
        base: BaseTemplateContext {
            request: &req,
            page_title: "My Reservations",
            area: NavArea::Customer,
        },
        report: &report,
    };
    Ok(Html::new(tmpl.render()?))
}

#[derive(Template)]
#[template(path = "my_reservations.html")]
struct MyReservationsTemplate<'a> {
    base: BaseTemplateContext<'a>,
    report: &'a ReservationsPerDayReport,
}
