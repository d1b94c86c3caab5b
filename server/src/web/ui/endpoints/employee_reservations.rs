use crate::reports::{self, ReservationsPerDayReport};
use crate::web::ui::base_template::{BaseTemplateContext, NavArea};
use crate::web::ui::error::AppError;
use crate::web::AppState;
use actix_web::web::Html;
use actix_web::{get, web, HttpRequest, Responder};
use askama::Template;

#[get("/employee/reservations")]
pub async fn employee_reservations(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<impl Responder, AppError> {
    let report = web::block(move || reports::reservations_per_day(state.store.as_ref())).await?;

    let tmpl = EmployeeReservationsTemplate {
        base: BaseTemplateContext {
            request: &req,
            page_title: "Reservations",
            area: NavArea::Employee,
        },
        report: &report,
    };
    Ok(Html::new(tmpl.render()?))
}

#[derive(Template)]
#[template(path = "employee_reservations.html")]
struct EmployeeReservationsTemplate<'a> {
    base: BaseTemplateContext<'a>,
    report: &'a ReservationsPerDayReport,
}
