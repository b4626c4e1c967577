pub mod scrape_form;
pub mod scrape_request;
pub mod scrape_result;

pub use scrape_form::*;
pub use scrape_request::*;
pub use scrape_result::*;
