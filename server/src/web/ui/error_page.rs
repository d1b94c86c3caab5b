//! This module provides functionality to generate nice-looking error pages for errors returned from
//! handler functions.
//!
//! This is achieved by an actix-web middleware that replaces the original HTTP response in the case
//! of an error. In contrast to rendering the error page in our [actix_web::ResponseError]
//! implementation, this allows us to access the HTTP Request, e.g. for generating URLs to static
//! files and other pages.
use crate::web::ui::base_template::{BaseTemplateContext, NavArea};
use actix_web::body::EitherBody;
use actix_web::web::Html;
use actix_web::{HttpRequest, HttpResponse, Responder, ResponseError};
use askama::Template;

/// An actix-web middleware for generating nice error pages
///
/// The middleware replaces the existing HTTP response (typically generated from the error's
/// ResponseError implementation) with an error page, when an error has been returned by the
/// endpoint handler function. The error page is generated from the "error.html" askama template,
/// extending the "base.html" template to keep the application's look & feel. In case rendering the
/// template fails, we fall back to a plain text representation of the error.
pub async fn error_page_middleware<B: actix_web::body::MessageBody>(
    req: actix_web::dev::ServiceRequest,
    next: actix_web::middleware::Next<B>,
) -> Result<actix_web::dev::ServiceResponse<EitherBody<B, String>>, actix_web::Error> {
    let response = next.call(req).await?;

    if response.response().error().is_some() {
        let (req, res) = response.into_parts();
        let error = res
            .error()
            .expect("We checked that res has an error, above.");
        let response = generate_error_page(error.as_response_error(), &req);
        Ok(actix_web::dev::ServiceResponse::new(
            req,
            response.map_body(|_, body| EitherBody::right(body)),
        ))
    } else {
        Ok(response.map_body(|_, body| EitherBody::left(body)))
    }
}

/// Generate an error page for the given `error`, using its string representation.
fn generate_error_page(
    error: &dyn ResponseError,
    http_request: &HttpRequest,
) -> HttpResponse<String> {
    let tmpl = ErrorTemplate {
        base: BaseTemplateContext {
            request: http_request,
            page_title: "Error",
            area: NavArea::from_path(http_request.path()),
        },
        error,
        url: &http_request.full_url(),
        timestamp: chrono::Local::now(),
    };
    match tmpl.render() {
        Ok(body) => (Html::new(body), error.status_code()).respond_to(http_request),
        Err(err) => (
            format!(
                "Error: {}\n(Could not render nice error page: {})",
                error, err
            ),
            error.status_code(),
        )
            .respond_to(http_request),
    }
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate<'a> {
    base: BaseTemplateContext<'a>,
    error: &'a dyn ResponseError,
    url: &'a url::Url,
    timestamp: chrono::DateTime<chrono::Local>,
}
