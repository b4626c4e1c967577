use crate::error::ScrapeError;

use super::{KeywordScrapeRequest, ScrapeRequest, ScrapedWebsite, UrlScrapeRequest};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrapeMode {
    Urls,
    Keyword,
}

impl ScrapeMode {
    pub fn title(&self) -> &'static str {
        match self {
            ScrapeMode::Urls => "Scrape websites",
            ScrapeMode::Keyword => "Scrape keyword",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ScrapeMode::Urls => "Enter the list of websites to scrape e-mails from.",
            ScrapeMode::Keyword => "Enter the keyword you wish Hale to scrape mails from.",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ScrapeMode::Urls => "Websites separated by space..",
            ScrapeMode::Keyword => "Keyword to search for..",
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            ScrapeMode::Urls => "/",
            ScrapeMode::Keyword => "/keyword",
        }
    }

    pub fn field_name(&self) -> &'static str {
        match self {
            ScrapeMode::Urls => "urls",
            ScrapeMode::Keyword => "keyword",
        }
    }

    pub fn parse(&self, input: &str) -> Result<ScrapeRequest, ScrapeError> {
        match self {
            ScrapeMode::Urls => UrlScrapeRequest::parse(input).map(ScrapeRequest::Urls),
            ScrapeMode::Keyword => KeywordScrapeRequest::parse(input).map(ScrapeRequest::Keyword),
        }
    }
}

/// Ticket for one outstanding request. Only the latest ticket of a form may
/// complete it.
#[derive(Debug)]
pub struct Submission {
    sequence: u64,
    request: ScrapeRequest,
}

impl Submission {
    pub fn request(&self) -> &ScrapeRequest {
        &self.request
    }
}

/// State of one scrape page: idle -> loading -> (success | error) -> idle.
#[derive(Debug)]
pub struct ScrapeForm {
    mode: ScrapeMode,
    input: String,
    is_loading: bool,
    error: Option<String>,
    result: Option<Vec<ScrapedWebsite>>,
    sequence: u64,
}

impl ScrapeForm {
    pub fn new(mode: ScrapeMode) -> Self {
        ScrapeForm {
            mode,
            input: String::new(),
            is_loading: false,
            error: None,
            result: None,
            sequence: 0,
        }
    }

    /// Starts a new submission. Returns `None` when the input fails
    /// validation, in which case no request must be sent.
    ///
    /// A new submission supersedes any request still in flight.
    pub fn submit(&mut self, input: &str) -> Option<Submission> {
        self.input = input.to_string();
        self.sequence += 1;
        self.result = None;
        self.error = None;

        match self.mode.parse(input) {
            Ok(request) => {
                self.is_loading = true;
                Some(Submission {
                    sequence: self.sequence,
                    request,
                })
            }
            Err(e) => {
                self.is_loading = false;
                self.error = Some(e.user_message());
                None
            }
        }
    }

    /// Applies the outcome of a submission. Returns `false` and leaves the
    /// form untouched if a newer submission was made in the meantime.
    pub fn complete(
        &mut self,
        submission: Submission,
        outcome: Result<Vec<ScrapedWebsite>, ScrapeError>,
    ) -> bool {
        if submission.sequence != self.sequence {
            log::debug!(
                "Discarding stale response #{} (latest is #{})",
                submission.sequence,
                self.sequence
            );
            return false;
        }

        self.is_loading = false;
        match outcome {
            Ok(websites) => self.result = Some(websites),
            Err(e) => {
                log::error!("Scrape request #{} failed: {}", submission.sequence, e);
                self.error = Some(e.user_message());
            }
        }

        true
    }

    pub fn mode(&self) -> ScrapeMode {
        self.mode
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&[ScrapedWebsite]> {
        self.result.as_deref()
    }

    pub fn button_label(&self) -> &'static str {
        match self.is_loading {
            true => "Scraping...",
            false => "Scrape",
        }
    }
}
