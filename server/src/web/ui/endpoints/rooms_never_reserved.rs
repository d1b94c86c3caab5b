use crate::reports::{self, UnreservedRoomsReport};
use crate::web::ui::base_template::{BaseTemplateContext, NavArea};
use crate::web::ui::error::AppError;
use crate::web::AppState;
use actix_web::web::Html;
use actix_web::{get, web, HttpRequest, Responder};
use askama::Template;

#[get("/employee/rooms_never_reserved")]
pub async fn rooms_never_reserved(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<impl Responder, AppError> {
    let report = web::block(move || reports::rooms_never_reserved(state.store.as_ref())).await?;

    let tmpl = RoomsNeverReservedTemplate {
        base: BaseTemplateContext {
            request: &req,
            page_title: "Rooms Never Reserved",
            area: NavArea::Employee,
        },
        report: &report,
    };
    Ok(Html::new(tmpl.render()?))
}

#[derive(Template)]
#[template(path = "rooms_never_reserved.html")]
struct RoomsNeverReservedTemplate<'a> {
    base: BaseTemplateContext<'a>,
    report: &'a UnreservedRoomsReport,
}
