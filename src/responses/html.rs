use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

pub fn html_response(markup: Markup) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", HTML_CONTENT_TYPE)
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}
