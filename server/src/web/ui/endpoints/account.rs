use crate::reports::{self, CustomerBillingReport};
use crate::web::ui::base_template::{BaseTemplateContext, NavArea};
use crate::web::ui::error::AppError;
use crate::web::AppState;
use actix_web::web::Html;
use actix_web::{get, web, HttpRequest, Responder};
use askama::Template;

#[get("/account")]
pub async fn account(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<impl Responder, AppError> {
    let report = web::block(move || reports::customer_billing(state.store.as_ref())).await?;

    let tmpl = AccountTemplate {
        base: BaseTemplateContext {
            request: &req,
            page_title: "Account",
            area: NavArea::Customer,
        },
        report: &report,
    };
    Ok(Html::new(tmpl.render()?))
}

#[derive(Template)]
#[template(path = "account.html")]
struct AccountTemplate<'a> {
    base: BaseTemplateContext<'a>,
    report: &'a CustomerBillingReport,
}
