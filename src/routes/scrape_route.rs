use actix_web::{get, http::header::ContentType, post, web, HttpResponse};
use askama::Template;
use serde::Deserialize;

use crate::{
    domain::{ScrapeForm, ScrapeMode},
    services::ScraperClient,
};

#[derive(Template)]
#[template(path = "scrape.html")]
struct ScrapeTemplate<'a> {
    form: &'a ScrapeForm,
}

#[derive(Deserialize)]
struct UrlScrapeBody {
    #[serde(default)]
    urls: String,
}

#[derive(Deserialize)]
struct KeywordScrapeBody {
    #[serde(default)]
    keyword: String,
}

#[get("/")]
async fn url_page() -> HttpResponse {
    render_page(&ScrapeForm::new(ScrapeMode::Urls))
}

#[post("/")]
async fn scrape_urls(
    client: web::Data<ScraperClient>,
    body: web::Form<UrlScrapeBody>,
) -> HttpResponse {
    run_scrape(ScrapeMode::Urls, &body.urls, &client).await
}

#[get("/keyword")]
async fn keyword_page() -> HttpResponse {
    render_page(&ScrapeForm::new(ScrapeMode::Keyword))
}

#[post("/keyword")]
async fn scrape_keyword(
    client: web::Data<ScraperClient>,
    body: web::Form<KeywordScrapeBody>,
) -> HttpResponse {
    run_scrape(ScrapeMode::Keyword, &body.keyword, &client).await
}

async fn run_scrape(mode: ScrapeMode, input: &str, client: &ScraperClient) -> HttpResponse {
    let mut form = ScrapeForm::new(mode);

    if let Some(submission) = form.submit(input) {
        let outcome = client.scrape(submission.request()).await;
        form.complete(submission, outcome);
    }

    render_page(&form)
}

fn render_page(form: &ScrapeForm) -> HttpResponse {
    match (ScrapeTemplate { form }).render() {
        Ok(body) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(body),
        Err(e) => {
            log::error!("Failed to render {:?} page: {:?}", form.mode(), e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
