use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use url::Url;

use crate::{
    configuration::ScraperSettings,
    domain::{KeywordScrapeRequest, ScrapeRequest, ScrapeResponse, ScrapedWebsite, UrlScrapeRequest},
    error::ScrapeError,
};

const MAIL_PATH: &str = "mail";
const KEYWORD_MAIL_PATH: &str = "keywordmail";

/// Client for the remote scraping service. Every outbound call goes through
/// here.
pub struct ScraperClient {
    client: Client,
    mail_url: Url,
    keyword_mail_url: Url,
    bearer_token: Option<String>,
}

// Echo reports errors under `message`, fiber under `error`
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl ScraperClient {
    pub fn new(
        base_url: Url,
        bearer_token: Option<String>,
        timeout: Option<Duration>,
    ) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(ScraperClient {
            client: builder.build()?,
            mail_url: base_url.join(MAIL_PATH)?,
            keyword_mail_url: base_url.join(KEYWORD_MAIL_PATH)?,
            bearer_token,
        })
    }

    pub fn from_settings(settings: &ScraperSettings) -> anyhow::Result<Self> {
        ScraperClient::new(
            settings.url()?,
            settings.bearer_token.clone(),
            settings.timeout(),
        )
    }

    pub async fn scrape(
        &self,
        request: &ScrapeRequest,
    ) -> Result<Vec<ScrapedWebsite>, ScrapeError> {
        match request {
            ScrapeRequest::Urls(request) => self.scrape_urls(request).await,
            ScrapeRequest::Keyword(request) => self.scrape_keyword(request).await,
        }
    }

    pub async fn scrape_urls(
        &self,
        request: &UrlScrapeRequest,
    ) -> Result<Vec<ScrapedWebsite>, ScrapeError> {
        log::info!("Scraping mails from {} websites", request.urls.len());

        let req = self.client.post(self.mail_url.clone()).json(request);
        self.send(req).await
    }

    pub async fn scrape_keyword(
        &self,
        request: &KeywordScrapeRequest,
    ) -> Result<Vec<ScrapedWebsite>, ScrapeError> {
        log::info!(
            "Scraping mails for keyword {:?} over {} pages",
            request.keyword,
            request.pages
        );

        let mut req = self.client.post(self.keyword_mail_url.clone()).json(request);
        match &self.bearer_token {
            Some(token) => req = req.bearer_auth(token),
            None => log::warn!("No bearer token configured for keyword scraping"),
        }

        self.send(req).await
    }

    async fn send(&self, req: RequestBuilder) -> Result<Vec<ScrapedWebsite>, ScrapeError> {
        let res = req.send().await?;
        let status = res.status();

        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            let message = error_message(status, &body);
            log::error!("Got error from scraper api: {} {}", status, message);
            return Err(ScrapeError::Remote { status, message });
        }

        let websites = res.json::<ScrapeResponse>().await?.into_websites();
        log::info!("Scraper returned {} websites", websites.len());

        Ok(websites)
    }
}

fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.error))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()))
}
