use crate::reports::{self, RoomListReport};
use crate::web::ui::base_template::{BaseTemplateContext, NavArea};
use crate::web::ui::error::AppError;
use crate::web::AppState;
use actix_web::web::Html;
use actix_web::{get, web, HttpRequest, Responder};
use askama::Template;

#[get("/employee/room_list")]
pub async fn room_list(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<impl Responder, AppError> {
    let report = web::block(move || reports::room_list(state.store.as_ref())).await?;

    let tmpl = RoomListTemplate {
        base: BaseTemplateContext {
            request: &req,
            page_title: "Room List",
            area: NavArea::Employee,
        },
        report: &report,
    };
    Ok(Html::new(tmpl.render()?))
}

#[derive(Template)]
#[template(path = "employee_room_list.html")]
struct RoomListTemplate<'a> {
    base: BaseTemplateContext<'a>,
    report: &'a RoomListReport,
}
