use crate::reports::{self, RevenueReport};
use crate::web::ui::base_template::{BaseTemplateContext, NavArea};
use crate::web::ui::error::AppError;
use crate::web::AppState;
use actix_web::web::Html;
use actix_web::{get, web, HttpRequest, Responder};
use askama::Template;

#[get("/employee/revenue")]
pub async fn revenue(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<impl Responder, AppError> {
    let report = web::block(move || reports::revenue(state.store.as_ref())).await?;

    let tmpl = RevenueTemplate {
        base: BaseTemplateContext {
            request: &req,
            page_title: "Revenue",
            area: NavArea::Employee,
        },
        report: &report,
    };
    Ok(Html::new(tmpl.render()?))
}

#[derive(Template)]
#[template(path = "employee_revenue.html")]
struct RevenueTemplate<'a> {
    base: BaseTemplateContext<'a>,
    report: &'a RevenueReport,
}
