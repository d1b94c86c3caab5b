use crate::reports::{self, StaffRosterReport};
use crate::web::ui::base_template::{BaseTemplateContext, NavArea};
use crate::web::ui::error::AppError;
use crate::web::AppState;
use actix_web::web::Html;
use actix_web::{get, web, HttpRequest, Responder};
use askama::Template;

#[get("/staff_roster")]
pub async fn staff_roster(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<impl Responder, AppError> {
    let report = web::block(move || reports::staff_roster(state.store.as_ref())).await?;

    let tmpl = StaffRosterTemplate {
        base: BaseTemplateContext {
            request: &req,
            page_title: "Staff Roster",
            area: NavArea::Management,
        },
        report: &report,
    };
    Ok(Html::new(tmpl.render()?))
}

#[derive(Template)]
#[template(path = "staff_roster.html")]
struct StaffRosterTemplate<'a> {
    base: BaseTemplateContext<'a>,
    report: &'a StaffRosterReport,
}
