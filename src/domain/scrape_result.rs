use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScrapedWebsite {
    pub base_url: String,
    #[serde(default)]
    pub mails: Option<Vec<String>>,
}

impl ScrapedWebsite {
    /// Emails found for this website, `None` when the service found nothing.
    pub fn found_mails(&self) -> Option<&[String]> {
        match self.mails.as_deref() {
            Some([]) | None => None,
            Some(mails) => Some(mails),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ScrapeResponse {
    #[serde(default)]
    pub data: Option<Vec<ScrapedWebsite>>,
}

impl ScrapeResponse {
    pub fn into_websites(self) -> Vec<ScrapedWebsite> {
        self.data.unwrap_or_default()
    }
}
