use crate::reports::{self, CardSwipesReport};
use crate::web::ui::base_template::{BaseTemplateContext, NavArea};
use crate::web::ui::error::AppError;
use crate::web::AppState;
use actix_web::web::Html;
use actix_web::{get, web, HttpRequest, Responder};
use askama::Template;

#[get("/card_management")]
pub async fn card_management(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<impl Responder, AppError> {
    let report = web::block(move || reports::card_swipes(state.store.as_ref())).await?;

    let tmpl = CardManagementTemplate {
        base: BaseTemplateContext {
            request: &req,
            page_title: "Card Management",
            area: NavArea::Management,
        },
        report: &report,
    };
    Ok(Html::new(tmpl.render()?))
}

#[derive(Template)]
#[template(path = "card_management.html")]
struct CardManagementTemplate<'a> {
    base: BaseTemplateContext<'a>,
    report: &'a CardSwipesReport,
}
