// src/tests/router_tests/landing_route_tests.rs
use crate::errors::ServerError;
use crate::router::{handle, respond};
use crate::tests::utils::{body_string, header, request, FixedClock};
use http::Method;

#[test]
fn get_root_serves_landing_page() -> Result<(), Box<dyn std::error::Error>> {
    let mut resp = handle(request(Method::GET, "/"), &FixedClock(2025))?;

    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "Content-Type"), "text/html; charset=utf-8");

    let body = body_string(&mut resp);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("Train Computer Vision Models Using Your Local Hardware"));
    assert!(body.contains("© 2025 LocalCV. All rights reserved."));
    Ok(())
}

#[test]
fn query_string_does_not_change_route() -> Result<(), Box<dyn std::error::Error>> {
    let resp = handle(request(Method::GET, "/?utm_source=newsletter"), &FixedClock(2025))?;
    assert_eq!(resp.status(), 200);
    Ok(())
}

#[test]
fn linked_pages_are_not_served_here() {
    for path in ["/docs", "/blog", "/sign-in", "/demo", "/get-started", "/placeholder.svg"] {
        let result = handle(request(Method::GET, path), &FixedClock(2025));
        assert!(
            matches!(result, Err(ServerError::NotFound)),
            "expected 404 for {path}"
        );
    }
}

#[test]
fn writes_on_root_are_rejected() {
    for method in [Method::POST, Method::PUT, Method::DELETE] {
        let result = handle(request(method.clone(), "/"), &FixedClock(2025));
        assert!(
            matches!(result, Err(ServerError::MethodNotAllowed)),
            "expected 405 for {method}"
        );
    }
}

#[test]
fn head_on_root_is_served_like_get() -> Result<(), Box<dyn std::error::Error>> {
    let resp = handle(request(Method::HEAD, "/"), &FixedClock(2025))?;

    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "Content-Type"), "text/html; charset=utf-8");
    Ok(())
}

#[test]
fn respond_serves_page_and_error_pages() {
    let mut ok = respond(request(Method::GET, "/"), &FixedClock(2025));
    assert_eq!(ok.status(), 200);
    assert!(body_string(&mut ok).contains("© 2025 LocalCV. All rights reserved."));

    let mut missing = respond(request(Method::GET, "/pricing"), &FixedClock(2025));
    assert_eq!(missing.status(), 404);
    assert!(body_string(&mut missing).contains("<title>Error 404</title>"));

    let rejected = respond(request(Method::POST, "/"), &FixedClock(2025));
    assert_eq!(rejected.status(), 405);
    assert_eq!(header(&rejected, "Allow"), "GET, HEAD");
}
