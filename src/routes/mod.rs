pub mod health_check_route;
pub mod scrape_route;
