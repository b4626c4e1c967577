use std::net::TcpListener;

use actix_files::Files;
use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};

use crate::{
    routes::{health_check_route, scrape_route},
    services::ScraperClient,
};

pub fn run(listener: TcpListener, scraper_client: ScraperClient) -> Result<Server, std::io::Error> {
    let scraper_client = web::Data::new(scraper_client);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(Files::new("/static", "./static").prefer_utf8(true))
            .service(health_check_route::health_check)
            .service(scrape_route::url_page)
            .service(scrape_route::scrape_urls)
            .service(scrape_route::keyword_page)
            .service(scrape_route::scrape_keyword)
            .app_data(scraper_client.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
