//! Pages without any data from the database
use crate::web::ui::base_template::{BaseTemplateContext, NavArea};
use crate::web::ui::error::AppError;
use actix_web::web::Html;
use actix_web::{get, HttpRequest, Responder};
use askama::Template;

#[get("/")]
pub async fn home(req: HttpRequest) -> Result<impl Responder, AppError> {
    let tmpl = HomeTemplate {
        base: BaseTemplateContext {
            request: &req,
            page_title: "Welcome",
            area: NavArea::Customer,
        },
    };
    Ok(Html::new(tmpl.render()?))
}

#[get("/signup")]
pub async fn signup(req: HttpRequest) -> Result<impl Responder, AppError> {
    let tmpl = SignupTemplate {
        base: BaseTemplateContext {
            request: &req,
            page_title: "Sign Up",
            area: NavArea::Customer,
        },
    };
    Ok(Html::new(tmpl.render()?))
}

#[get("/profile")]
pub async fn profile(req: HttpRequest) -> Result<impl Responder, AppError> {
    let tmpl = ProfileTemplate {
        base: BaseTemplateContext {
            request: &req,
            page_title: "Profile",
            area: NavArea::Customer,
        },
    };
    Ok(Html::new(tmpl.render()?))
}

#[get("/confirmation")]
pub async fn confirmation(req: HttpRequest) -> Result<impl Responder, AppError> {
    let tmpl = ConfirmationTemplate {
        base: BaseTemplateContext {
            request: &req,
            page_title: "Booking Confirmation",
            area: NavArea::Customer,
        },
    };
    Ok(Html::new(tmpl.render()?))
}

#[get("/management")]
pub async fn management_login(req: HttpRequest) -> Result<impl Responder, AppError> {
    let tmpl = LoginTemplate {
        base: BaseTemplateContext {
            request: &req,
            page_title: "Management Login",
            area: NavArea::Management,
        },
        start_page: "/staff_roster",
    };
    Ok(Html::new(tmpl.render()?))
}

#[get("/employee")]
pub async fn employee_login(req: HttpRequest) -> Result<impl Responder, AppError> {
    let tmpl = LoginTemplate {
        base: BaseTemplateContext {
            request: &req,
            page_title: "Employee Login",
            area: NavArea::Employee,
        },
        start_page: "/employee/rooms",
    };
    Ok(Html::new(tmpl.render()?))
}

#[derive(Template)]
#[template(path = "index.html")]
struct HomeTemplate<'a> {
    base: BaseTemplateContext<'a>,
}

#[derive(Template)]
#[template(path = "signup.html")]
struct SignupTemplate<'a> {
    base: BaseTemplateContext<'a>,
}

#[derive(Template)]
#[template(path = "profile.html")]
struct ProfileTemplate<'a> {
    base: BaseTemplateContext<'a>,
}

#[derive(Template)]
#[template(path = "confirmation.html")]
struct ConfirmationTemplate<'a> {
    base: BaseTemplateContext<'a>,
}

/// Login form for the management and the employee area. There is no authentication, so the form
/// simply links to the area's first page.
#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate<'a> {
    base: BaseTemplateContext<'a>,
    start_page: &'a str,
}
