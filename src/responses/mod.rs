pub mod errors;
pub mod html;

pub use crate::errors::ResultResp;
pub use errors::html_error_response;

// Normal HTML response
pub use html::{html_response, HTML_CONTENT_TYPE};
