use crate::reports::{self, MeetingSpacesReport};
use crate::web::ui::base_template::{BaseTemplateContext, NavArea};
use crate::web::ui::error::AppError;
use crate::web::AppState;
use actix_web::web::Html;
use actix_web::{get, web, HttpRequest, Responder};
use askama::Template;

#[get("/meeting_spaces")]
pub async fn meeting_spaces(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<impl Responder, AppError> {
    let report = web::block(move || reports::meeting_spaces(state.store.as_ref())).await?;

    let tmpl = MeetingSpacesTemplate {
        base: BaseTemplateContext {
            request: &req,
            page_title: "Meeting Spaces",
            area: NavArea::Customer,
        },
        report: &report,
    };
    Ok(Html::new(tmpl.render()?))
}

#[derive(Template)]
#[template(path = "meeting_spaces.html")]
struct MeetingSpacesTemplate<'a> {
    base: BaseTemplateContext<'a>,
    report: &'a MeetingSpacesReport,
}
