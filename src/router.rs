use crate::clock::Clock;
use crate::content::routes;
use crate::errors::ServerError;
use crate::responses::{html_error_response, html_response, ResultResp};
use crate::templates;
use astra::{Request, Response};
use http::Method;
use tracing::{info, warn};

pub fn handle(req: Request, clock: &impl Clock) -> ResultResp {
    let readable = *req.method() == Method::GET || *req.method() == Method::HEAD;

    match req.uri().path() {
        routes::HOME if readable => {
            html_response(templates::pages::landing_page(clock.current_year()))
        }
        routes::HOME => Err(ServerError::MethodNotAllowed),
        _ => Err(ServerError::NotFound),
    }
}

/// Runs `handle` and renders any error as an HTML page, logging the outcome.
pub fn respond(req: Request, clock: &impl Clock) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let resp = match handle(req, clock) {
        Ok(resp) => resp,
        Err(err) => {
            warn!(%method, %path, "request failed: {err}");
            html_error_response(err)
        }
    };

    info!(%method, %path, status = resp.status().as_u16(), "served");
    resp
}
