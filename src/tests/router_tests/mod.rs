mod error_page_tests;
mod landing_route_tests;
