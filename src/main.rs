use std::net::TcpListener;

use env_logger::Env;
use hale::{configuration::get_configuration, services::ScraperClient, startup::run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration()?;

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(&address)?;
    let scraper_client = ScraperClient::from_settings(&configuration.scraper)?;

    log::info!(
        "Listening on {}, scraping through {}",
        address,
        configuration.scraper.base_url
    );

    run(listener, scraper_client)?.await?;

    Ok(())
}
