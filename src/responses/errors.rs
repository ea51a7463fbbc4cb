use crate::errors::ServerError;
use crate::responses::HTML_CONTENT_TYPE;
use crate::templates::error_page;
use astra::{Body, Response, ResponseBuilder};
use http::StatusCode;

/// Convert a ServerError into an HTML error page. Never fails.
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status();
    let mut builder = ResponseBuilder::new()
        .status(status)
        .header("Content-Type", HTML_CONTENT_TYPE);

    if let ServerError::MethodNotAllowed = err {
        builder = builder.header("Allow", "GET, HEAD");
    }

    builder
        .body(Body::from(error_page(status, &err.to_string()).into_string()))
        .unwrap_or_else(|_| {
            let mut resp = Response::new(Body::from("Internal Server Error"));
            *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            resp
        })
}
