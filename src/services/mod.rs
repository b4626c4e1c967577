pub mod scraper_client;

pub use scraper_client::*;
