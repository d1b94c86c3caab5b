use crate::reports::{self, MeetingSpaceEventsReport, OpenRequestsReport, StayLengthReport};
use crate::web::ui::base_template::{BaseTemplateContext, NavArea};
use crate::web::ui::error::AppError;
use crate::web::AppState;
use actix_web::web::Html;
use actix_web::{get, web, HttpRequest, Responder};
use askama::Template;

/// Overview for the employees: open customer requests, stay lengths per room type and events per
/// meeting space type
#[get("/employee/rooms")]
pub async fn employee_rooms(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<impl Responder, AppError> {
    let (open_requests, stay_length, meeting_space_events) = web::block(move || {
        let store = state.store.as_ref();
        (
            reports::open_requests(store),
            reports::stay_length(store),
            reports::meeting_space_events(store),
        )
    })
    .await?;

    let tmpl = EmployeeRoomsTemplate {
        base: BaseTemplateContext {
            request: &req,
            page_title: "Rooms",
            area: NavArea::Employee,
        },
        open_requests: &open_requests,
        stay_length: &stay_length,
        meeting_space_events: &meeting_space_events,
    };
    Ok(Html::new(tmpl.render()?))
}

#[derive(Template)]
#[template(path = "employee_rooms.html")]
struct EmployeeRoomsTemplate<'a> {
    base: BaseTemplateContext<'a>,
    open_requests: &'a OpenRequestsReport,
    stay_length: &'a StayLengthReport,
    meeting_space_events: &'a MeetingSpaceEventsReport,
}
