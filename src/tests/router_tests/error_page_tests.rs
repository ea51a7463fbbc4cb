use crate::errors::ServerError;
use crate::responses::html_error_response;
use crate::tests::utils::{body_string, header};

#[test]
fn not_found_renders_404_page() {
    let mut resp = html_error_response(ServerError::NotFound);

    assert_eq!(resp.status(), 404);
    assert_eq!(header(&resp, "Content-Type"), "text/html; charset=utf-8");

    let body = body_string(&mut resp);
    assert!(body.contains("<title>Error 404</title>"));
    assert!(body.contains("Not Found"));
    assert!(body.contains(r#"href="/""#));
}

#[test]
fn method_not_allowed_advertises_get_and_head() {
    let resp = html_error_response(ServerError::MethodNotAllowed);

    assert_eq!(resp.status(), 405);
    assert_eq!(header(&resp, "Allow"), "GET, HEAD");
}

#[test]
fn internal_error_is_500() {
    let mut resp = html_error_response(ServerError::InternalError);

    assert_eq!(resp.status(), 500);
    assert!(body_string(&mut resp).contains("Internal Server Error"));
}
